pub mod add_book_cmd;
pub mod find_book_by_isbn_cmd;
pub mod find_books_by_author_cmd;
pub mod find_books_by_keywords_cmd;
pub mod find_books_by_title_cmd;
