use std::path::{Path, PathBuf};
use tracing::debug;
use crate::books::domain::model::Book;
use crate::books::repository::BookRepository;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;
use crate::utils::json::{deserialize_from_file, serialize_to_file};

// JsonBookRepository keeps the whole catalog in a single JSON array on disk.
#[derive(Debug)]
pub struct JsonBookRepository {
    path: PathBuf,
}

impl JsonBookRepository {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl Repository<Book> for JsonBookRepository {
    fn load(&self) -> LibraryResult<Option<Vec<Book>>> {
        let books: Option<Vec<Book>> = deserialize_from_file(&self.path)?;
        debug!(path = %self.path.display(), books = ?books.as_ref().map(Vec::len), "loaded catalog document");
        Ok(books)
    }

    fn save(&self, entities: &[Book]) -> LibraryResult<()> {
        serialize_to_file(entities, &self.path)?;
        debug!(path = %self.path.display(), books = entities.len(), "saved catalog document");
        Ok(())
    }
}

impl BookRepository for JsonBookRepository {
    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
