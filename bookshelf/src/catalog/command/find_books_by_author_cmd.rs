use crate::books::domain::model::Book;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct FindBooksByAuthorCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> FindBooksByAuthorCommand<'a> {
    pub fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub struct FindBooksByAuthorCommandRequest {
    pub author: String,
}

impl FindBooksByAuthorCommandRequest {
    pub fn new(author: &str) -> Self {
        Self {
            author: author.to_string(),
        }
    }
}

#[derive(Debug)]
pub struct FindBooksByAuthorCommandResponse {
    pub books: Vec<Book>,
}

impl FindBooksByAuthorCommandResponse {
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books,
        }
    }
}

impl<'a> Command<FindBooksByAuthorCommandRequest, FindBooksByAuthorCommandResponse> for FindBooksByAuthorCommand<'a> {
    fn execute(&mut self, req: FindBooksByAuthorCommandRequest) -> Result<FindBooksByAuthorCommandResponse, CommandError> {
        Ok(FindBooksByAuthorCommandResponse::new(self.catalog_service.find_books_by_author(req.author.as_str())))
    }
}
