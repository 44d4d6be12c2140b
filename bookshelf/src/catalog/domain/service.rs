use tracing::{error, info, warn};
use crate::books::domain::model::Book;
use crate::books::repository::BookRepository;
use crate::catalog::domain::{CatalogService, KeywordMatch};
use crate::core::library::LibraryResult;

pub struct CatalogServiceImpl {
    books: Vec<Book>,
    book_repository: Box<dyn BookRepository>,
}

impl CatalogServiceImpl {
    // Loading never fails: a missing or unreadable document yields an empty catalog.
    pub fn new(book_repository: Box<dyn BookRepository>) -> Self {
        let books = load_books(book_repository.as_ref());
        Self {
            books,
            book_repository,
        }
    }
}

fn load_books(book_repository: &dyn BookRepository) -> Vec<Book> {
    match book_repository.load() {
        Ok(Some(books)) => {
            info!(location = %book_repository.location(), books = books.len(), "loaded catalog");
            books
        }
        Ok(None) => {
            info!(location = %book_repository.location(), "no catalog document, starting empty");
            vec![]
        }
        Err(err) => {
            error!(location = %book_repository.location(), error = %err, "failed to load catalog, starting empty");
            vec![]
        }
    }
}

impl CatalogService for CatalogServiceImpl {
    fn add_book(&mut self, book: Book) -> LibraryResult<()> {
        self.books.push(book);
        self.book_repository.save(&self.books).map_err(|err| {
            warn!(location = %self.book_repository.location(), error = %err,
                books = self.books.len(), "failed to save catalog, added book is only held in memory");
            err
        })
    }

    fn find_books_by_title(&self, fragment: &str) -> Vec<Book> {
        self.books.iter().filter(|b| b.matches_title(fragment)).cloned().collect()
    }

    fn find_books_by_author(&self, fragment: &str) -> Vec<Book> {
        self.books.iter().filter(|b| b.matches_author(fragment)).cloned().collect()
    }

    fn find_book_by_isbn(&self, isbn: &str) -> Option<Book> {
        self.books.iter().find(|b| b.isbn == isbn).cloned()
    }

    fn find_books_by_keywords(&self, keywords: &[String]) -> Vec<KeywordMatch> {
        let mut matches: Vec<KeywordMatch> = self.books.iter().filter_map(|book| {
            let matched_keywords: Vec<String> = keywords.iter()
                .filter(|k| book.contains_keyword(k))
                .cloned()
                .collect();
            if matched_keywords.is_empty() {
                None
            } else {
                Some(KeywordMatch { book: book.clone(), matched_keywords })
            }
        }).collect();
        // sort_by is stable, ties keep catalog order
        matches.sort_by(|a, b| b.matched_keywords.len().cmp(&a.matched_keywords.len()));
        matches
    }

    fn books(&self) -> Vec<Book> {
        self.books.clone()
    }

    fn len(&self) -> usize {
        self.books.len()
    }
}
