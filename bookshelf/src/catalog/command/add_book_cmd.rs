use crate::books::domain::model::Book;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct AddBookCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> AddBookCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

// AddBookCommandRequest carries the fields as typed by the user.
#[derive(Debug, Clone, Default)]
pub struct AddBookCommandRequest {
    pub title: String,
    pub author: String,
    // comma-separated
    pub genres: String,
    pub publication_year: String,
    pub annotation: String,
    pub isbn: String,
}

impl AddBookCommandRequest {
    pub fn new(title: &str, author: &str, genres: &str, publication_year: &str,
               annotation: &str, isbn: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            genres: genres.to_string(),
            publication_year: publication_year.to_string(),
            annotation: annotation.to_string(),
            isbn: isbn.to_string(),
        }
    }

    pub fn build_book(&self) -> Result<Book, CommandError> {
        let year = self.publication_year.trim();
        let publication_year = year.parse::<i32>().map_err(|_| CommandError::validation(
            format!("publication year `{}` is not a number", year).as_str(),
            Some("publication_year".to_string())))?;
        let genres: Vec<&str> = self.genres.split(',')
            .map(str::trim)
            .filter(|g| !g.is_empty())
            .collect();
        Ok(Book::new(self.title.as_str(), self.author.as_str(), &genres, publication_year,
                     self.annotation.as_str(), self.isbn.as_str()))
    }
}

#[derive(Debug)]
pub struct AddBookCommandResponse {
    pub book: Book,
}

impl AddBookCommandResponse {
    pub fn new(book: Book) -> Self {
        Self {
            book,
        }
    }
}

impl<'a> Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand<'a> {
    fn execute(&mut self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = req.build_book()?;
        self.catalog_service.add_book(book.clone()).map_err(CommandError::from).map(|_| AddBookCommandResponse::new(book))
    }
}
