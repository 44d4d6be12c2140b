pub mod service;

use crate::books::domain::model::Book;
use crate::core::library::LibraryResult;

// KeywordMatch pairs a book with the query keywords found in it, in the order
// they were supplied.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordMatch {
    pub book: Book,
    pub matched_keywords: Vec<String>,
}

pub trait CatalogService: Sync + Send {
    /// Appends the book and rewrites the persisted catalog. When the write
    /// fails the error is returned but the book stays in the in-memory catalog.
    fn add_book(&mut self, book: Book) -> LibraryResult<()>;
    fn find_books_by_title(&self, fragment: &str) -> Vec<Book>;
    fn find_books_by_author(&self, fragment: &str) -> Vec<Book>;
    fn find_book_by_isbn(&self, isbn: &str) -> Option<Book>;
    /// Books containing at least one keyword, most matches first, ties in
    /// catalog order.
    fn find_books_by_keywords(&self, keywords: &[String]) -> Vec<KeywordMatch>;
    fn books(&self) -> Vec<Book>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
