use crate::catalog::domain::{CatalogService, KeywordMatch};
use crate::core::command::{Command, CommandError};

pub struct FindBooksByKeywordsCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> FindBooksByKeywordsCommand<'a> {
    pub fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub struct FindBooksByKeywordsCommandRequest {
    pub keywords: Vec<String>,
}

impl FindBooksByKeywordsCommandRequest {
    pub fn new(keywords: Vec<String>) -> Self {
        Self {
            keywords,
        }
    }

    // Splits comma-separated user input. Blank entries are dropped here since
    // an empty keyword would match every book.
    pub fn parse(input: &str) -> Self {
        Self::new(input.split(',')
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string)
            .collect())
    }
}

#[derive(Debug)]
pub struct FindBooksByKeywordsCommandResponse {
    pub matches: Vec<KeywordMatch>,
}

impl FindBooksByKeywordsCommandResponse {
    pub fn new(matches: Vec<KeywordMatch>) -> Self {
        Self {
            matches,
        }
    }
}

impl<'a> Command<FindBooksByKeywordsCommandRequest, FindBooksByKeywordsCommandResponse> for FindBooksByKeywordsCommand<'a> {
    fn execute(&mut self, req: FindBooksByKeywordsCommandRequest) -> Result<FindBooksByKeywordsCommandResponse, CommandError> {
        Ok(FindBooksByKeywordsCommandResponse::new(self.catalog_service.find_books_by_keywords(&req.keywords)))
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::Book;
    use crate::books::repository::memory_book_repository::MemoryBookRepository;
    use crate::catalog::command::find_books_by_keywords_cmd::{FindBooksByKeywordsCommand, FindBooksByKeywordsCommandRequest};
    use crate::catalog::domain::service::CatalogServiceImpl;
    use crate::core::command::Command;

    #[test]
    fn test_should_parse_keywords() {
        let req = FindBooksByKeywordsCommandRequest::parse(" time, desert ,, ,Time");
        assert_eq!(vec!["time", "desert", "Time"], req.keywords);
        assert!(FindBooksByKeywordsCommandRequest::parse("  ").keywords.is_empty());
    }

    #[test]
    fn test_should_run_find_books_by_keywords() {
        let catalog_svc = CatalogServiceImpl::new(Box::new(MemoryBookRepository::with_books(vec![
            Book::new("Dune", "Frank Herbert", &[], 1965, "A desert planet saga", "1"),
            Book::new("The Time Machine", "H. G. Wells", &[], 1895, "Travel through time to a desert future", "2"),
        ])));
        let res = FindBooksByKeywordsCommand::new(&catalog_svc)
            .execute(FindBooksByKeywordsCommandRequest::parse("time, desert")).expect("should find books");
        assert_eq!(2, res.matches.len());
        assert_eq!("The Time Machine", res.matches[0].book.title.as_str());
        assert_eq!(vec!["time", "desert"], res.matches[0].matched_keywords);
        assert_eq!(vec!["desert"], res.matches[1].matched_keywords);
    }

    #[test]
    fn test_should_find_nothing_without_keywords() {
        let catalog_svc = CatalogServiceImpl::new(Box::new(MemoryBookRepository::with_books(vec![
            Book::new("Dune", "Frank Herbert", &[], 1965, "", "1"),
        ])));
        let res = FindBooksByKeywordsCommand::new(&catalog_svc)
            .execute(FindBooksByKeywordsCommandRequest::parse(" , ")).expect("should run");
        assert!(res.matches.is_empty());
    }
}
