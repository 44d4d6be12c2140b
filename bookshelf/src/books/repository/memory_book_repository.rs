use std::sync::Mutex;
use crate::books::domain::model::Book;
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

// MemoryBookRepository holds the last saved catalog in process memory. Nothing
// survives a restart; it backs dry runs and tests.
#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    document: Mutex<Option<Vec<Book>>>,
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            document: Mutex::new(Some(books)),
        }
    }
}

impl Repository<Book> for MemoryBookRepository {
    fn load(&self) -> LibraryResult<Option<Vec<Book>>> {
        let document = self.document.lock()
            .map_err(|err| LibraryError::runtime(format!("memory catalog lock {}", err).as_str(), None))?;
        Ok(document.clone())
    }

    fn save(&self, entities: &[Book]) -> LibraryResult<()> {
        let mut document = self.document.lock()
            .map_err(|err| LibraryError::runtime(format!("memory catalog lock {}", err).as_str(), None))?;
        *document = Some(entities.to_vec());
        Ok(())
    }
}

impl BookRepository for MemoryBookRepository {
    fn location(&self) -> String {
        "memory".to_string()
    }
}
