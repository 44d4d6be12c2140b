pub mod json_book_repository;
pub mod memory_book_repository;

use crate::books::domain::model::Book;
use crate::core::repository::Repository;

pub trait BookRepository: Repository<Book> {
    // human readable location of the persisted catalog, used in log lines
    fn location(&self) -> String;
}
