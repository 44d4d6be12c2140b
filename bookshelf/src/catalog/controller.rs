use tracing::debug;
use crate::books::domain::model::Book;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::find_book_by_isbn_cmd::{FindBookByIsbnCommand, FindBookByIsbnCommandRequest};
use crate::catalog::command::find_books_by_author_cmd::{FindBooksByAuthorCommand, FindBooksByAuthorCommandRequest};
use crate::catalog::command::find_books_by_keywords_cmd::{FindBooksByKeywordsCommand, FindBooksByKeywordsCommandRequest};
use crate::catalog::command::find_books_by_title_cmd::{FindBooksByTitleCommand, FindBooksByTitleCommandRequest};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::controller::{command_error_message, UserInput, UserOutput};

#[derive(Debug, PartialEq, Clone, Copy)]
enum MenuAction {
    AddBook,
    FindByTitle,
    FindByAuthor,
    FindByIsbn,
    FindByKeywords,
    Exit,
}

impl MenuAction {
    fn parse(choice: &str) -> Option<MenuAction> {
        match choice.trim() {
            "1" => Some(MenuAction::AddBook),
            "2" => Some(MenuAction::FindByTitle),
            "3" => Some(MenuAction::FindByAuthor),
            "4" => Some(MenuAction::FindByIsbn),
            "5" => Some(MenuAction::FindByKeywords),
            "6" => Some(MenuAction::Exit),
            _ => None,
        }
    }
}

// Raised when the input runs out in the middle of an action.
struct EndOfInput;

/// Menu is the console front end of the catalog. Each numbered choice runs
/// exactly one catalog command and renders its response.
pub struct Menu<I: UserInput, O: UserOutput> {
    user_input: I,
    user_output: O,
    catalog_service: Box<dyn CatalogService>,
}

impl<I: UserInput, O: UserOutput> Menu<I, O> {
    pub fn new(user_input: I, user_output: O, catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            user_input,
            user_output,
            catalog_service,
        }
    }

    /// Runs until the user picks exit or the input is exhausted.
    pub fn show(&mut self) {
        loop {
            self.display_menu();
            let choice = match self.user_input.read_input() {
                Some(choice) => choice,
                None => break,
            };
            let action = match MenuAction::parse(&choice) {
                Some(action) => action,
                None => {
                    self.user_output.write_error("Error: invalid choice, please try again.");
                    continue;
                }
            };
            debug!(?action, "menu action");
            if action == MenuAction::Exit {
                break;
            }
            if self.run(action).is_err() {
                break;
            }
        }
        self.user_output.write_output("Exiting the catalog. Goodbye!");
    }

    pub fn into_parts(self) -> (I, O, Box<dyn CatalogService>) {
        (self.user_input, self.user_output, self.catalog_service)
    }

    fn display_menu(&mut self) {
        self.user_output.write_output("Welcome to the book catalog! Choose an action by entering its number:");
        self.user_output.write_output("1. Add a book to the catalog");
        self.user_output.write_output("2. Find books by title");
        self.user_output.write_output("3. Find books by author");
        self.user_output.write_output("4. Find a book by ISBN");
        self.user_output.write_output("5. Find books by keywords");
        self.user_output.write_output("6. Exit");
        self.user_output.write_output("Your choice:");
    }

    fn run(&mut self, action: MenuAction) -> Result<(), EndOfInput> {
        match action {
            MenuAction::AddBook => self.add_book(),
            MenuAction::FindByTitle => self.find_by_title(),
            MenuAction::FindByAuthor => self.find_by_author(),
            MenuAction::FindByIsbn => self.find_by_isbn(),
            MenuAction::FindByKeywords => self.find_by_keywords(),
            MenuAction::Exit => Ok(()),
        }
    }

    fn prompt(&mut self, message: &str) -> Result<String, EndOfInput> {
        self.user_output.write_output(message);
        self.user_input.read_input().ok_or(EndOfInput)
    }

    fn add_book(&mut self) -> Result<(), EndOfInput> {
        let req = AddBookCommandRequest {
            title: self.prompt("Enter the book title:")?,
            author: self.prompt("Enter the author name:")?,
            genres: self.prompt("Enter the genres (comma-separated):")?,
            publication_year: self.prompt("Enter the publication year:")?,
            annotation: self.prompt("Enter the annotation:")?,
            isbn: self.prompt("Enter the ISBN:")?,
        };
        let res = AddBookCommand::new(self.catalog_service.as_mut()).execute(req);
        match res {
            Ok(_) => self.user_output.write_output("The book was added to the catalog."),
            Err(err) => self.report(&err),
        }
        Ok(())
    }

    fn find_by_title(&mut self) -> Result<(), EndOfInput> {
        let title = self.prompt("Enter the book title:")?;
        let res = FindBooksByTitleCommand::new(self.catalog_service.as_ref())
            .execute(FindBooksByTitleCommandRequest::new(&title));
        match res {
            Ok(res) => self.render_books(&res.books),
            Err(err) => self.report(&err),
        }
        Ok(())
    }

    fn find_by_author(&mut self) -> Result<(), EndOfInput> {
        let author = self.prompt("Enter the author name:")?;
        let res = FindBooksByAuthorCommand::new(self.catalog_service.as_ref())
            .execute(FindBooksByAuthorCommandRequest::new(&author));
        match res {
            Ok(res) => self.render_books(&res.books),
            Err(err) => self.report(&err),
        }
        Ok(())
    }

    fn find_by_isbn(&mut self) -> Result<(), EndOfInput> {
        let isbn = self.prompt("Enter the ISBN:")?;
        let res = FindBookByIsbnCommand::new(self.catalog_service.as_ref())
            .execute(FindBookByIsbnCommandRequest::new(&isbn));
        match res {
            Ok(res) => match res.book {
                Some(book) => self.render_books(&[book]),
                None => self.user_output.write_output("Book not found."),
            },
            Err(err) => self.report(&err),
        }
        Ok(())
    }

    fn find_by_keywords(&mut self) -> Result<(), EndOfInput> {
        let keywords = self.prompt("Enter keywords (comma-separated):")?;
        let res = FindBooksByKeywordsCommand::new(self.catalog_service.as_ref())
            .execute(FindBooksByKeywordsCommandRequest::parse(&keywords));
        match res {
            Ok(res) => {
                if res.matches.is_empty() {
                    self.user_output.write_output("No books found.");
                }
                for m in res.matches {
                    self.user_output.write_output(format!("Title: {}, Keywords found: {}",
                                                          m.book.title, m.matched_keywords.join(", ")).as_str());
                }
            }
            Err(err) => self.report(&err),
        }
        Ok(())
    }

    fn render_books(&mut self, books: &[Book]) {
        if books.is_empty() {
            self.user_output.write_output("No books found.");
        }
        for book in books {
            self.user_output.write_output(format!("Title: {}, Author: {}", book.title, book.author).as_str());
        }
    }

    fn report(&mut self, err: &CommandError) {
        self.user_output.write_error(command_error_message(err).as_str());
    }
}
