use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CATALOG_FILE: &str = "books.json";

// Configuration abstracts config options for the book catalog
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub catalog_file: PathBuf,
}

impl Configuration {
    pub fn new<P: AsRef<Path>>(catalog_file: P) -> Self {
        Configuration {
            catalog_file: catalog_file.as_ref().to_path_buf(),
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new(DEFAULT_CATALOG_FILE)
    }
}
