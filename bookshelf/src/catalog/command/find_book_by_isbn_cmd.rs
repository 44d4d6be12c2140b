use crate::books::domain::model::Book;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct FindBookByIsbnCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> FindBookByIsbnCommand<'a> {
    pub fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub struct FindBookByIsbnCommandRequest {
    pub isbn: String,
}

impl FindBookByIsbnCommandRequest {
    pub fn new(isbn: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
        }
    }
}

// A miss is a successful response without a book.
#[derive(Debug)]
pub struct FindBookByIsbnCommandResponse {
    pub book: Option<Book>,
}

impl FindBookByIsbnCommandResponse {
    pub fn new(book: Option<Book>) -> Self {
        Self {
            book,
        }
    }
}

impl<'a> Command<FindBookByIsbnCommandRequest, FindBookByIsbnCommandResponse> for FindBookByIsbnCommand<'a> {
    fn execute(&mut self, req: FindBookByIsbnCommandRequest) -> Result<FindBookByIsbnCommandResponse, CommandError> {
        Ok(FindBookByIsbnCommandResponse::new(self.catalog_service.find_book_by_isbn(req.isbn.as_str())))
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::Book;
    use crate::books::repository::memory_book_repository::MemoryBookRepository;
    use crate::catalog::command::find_book_by_isbn_cmd::{FindBookByIsbnCommand, FindBookByIsbnCommandRequest};
    use crate::catalog::domain::service::CatalogServiceImpl;
    use crate::core::command::Command;

    #[test]
    fn test_should_run_find_book_by_isbn() {
        let book = Book::new("Dune", "Frank Herbert", &[], 1965, "", "0441013597");
        let catalog_svc = CatalogServiceImpl::new(Box::new(MemoryBookRepository::with_books(vec![book.clone()])));
        let mut cmd = FindBookByIsbnCommand::new(&catalog_svc);

        let res = cmd.execute(FindBookByIsbnCommandRequest::new("0441013597")).expect("should find book");
        assert_eq!(Some(book), res.book);

        let res = cmd.execute(FindBookByIsbnCommandRequest::new("does-not-exist")).expect("miss is not an error");
        assert_eq!(None, res.book);
    }
}
