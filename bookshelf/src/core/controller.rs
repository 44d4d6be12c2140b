use serde::{Deserialize, Serialize};
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppState {
    pub config: Configuration,
    pub store: RepositoryStore,
}

impl AppState {
    pub fn new(config: Configuration, store: RepositoryStore) -> AppState {
        AppState {
            config,
            store,
        }
    }
}

// UserInput is the source of menu choices and field values, one line at a time.
pub trait UserInput {
    // None once the input is exhausted
    fn read_input(&mut self) -> Option<String>;
}

pub trait UserOutput {
    fn write_output(&mut self, message: &str);
    fn write_error(&mut self, message: &str);
}

pub fn command_error_message(err: &CommandError) -> String {
    match err {
        CommandError::Database { retryable: true, .. } => {
            format!("Error: {}. The book was added for this session, try adding it again later.", err)
        }
        CommandError::Database { .. } => {
            format!("Error: {}. The book was added for this session only.", err)
        }
        _ => {
            format!("Error: {}", err)
        }
    }
}
