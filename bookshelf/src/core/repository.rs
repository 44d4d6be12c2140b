use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::core::library::LibraryResult;

// Repository persists a whole collection as one document. There is no
// per-entity write: every save replaces the previous document.
pub trait Repository<Entity>: Sync + Send {
    // load the collection, None when no document exists yet
    fn load(&self) -> LibraryResult<Option<Vec<Entity>>>;

    // replace the document with the given collection
    fn save(&self, entities: &[Entity]) -> LibraryResult<()>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum RepositoryStore {
    JsonFile,
    Memory,
}

impl FromStr for RepositoryStore {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" | "jsonfile" | "file" => Ok(RepositoryStore::JsonFile),
            "memory" => Ok(RepositoryStore::Memory),
            other => Err(format!("unknown repository store `{}`", other)),
        }
    }
}

impl Display for RepositoryStore {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            RepositoryStore::JsonFile => write!(f, "json"),
            RepositoryStore::Memory => write!(f, "memory"),
        }
    }
}
