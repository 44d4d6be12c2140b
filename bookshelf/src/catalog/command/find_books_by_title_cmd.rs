use crate::books::domain::model::Book;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct FindBooksByTitleCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> FindBooksByTitleCommand<'a> {
    pub fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub struct FindBooksByTitleCommandRequest {
    pub title: String,
}

impl FindBooksByTitleCommandRequest {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }
}

#[derive(Debug)]
pub struct FindBooksByTitleCommandResponse {
    pub books: Vec<Book>,
}

impl FindBooksByTitleCommandResponse {
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books,
        }
    }
}

impl<'a> Command<FindBooksByTitleCommandRequest, FindBooksByTitleCommandResponse> for FindBooksByTitleCommand<'a> {
    fn execute(&mut self, req: FindBooksByTitleCommandRequest) -> Result<FindBooksByTitleCommandResponse, CommandError> {
        Ok(FindBooksByTitleCommandResponse::new(self.catalog_service.find_books_by_title(req.title.as_str())))
    }
}
