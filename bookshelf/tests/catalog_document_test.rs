use std::fs;
use pretty_assertions::assert_eq;
use tempfile::tempdir;
use bookshelf::books::domain::Book;
use bookshelf::catalog::domain::CatalogService;
use bookshelf::catalog::factory::create_catalog_service;
use bookshelf::core::controller::AppState;
use bookshelf::core::domain::Configuration;
use bookshelf::core::repository::RepositoryStore;

fn file_state(dir: &tempfile::TempDir) -> AppState {
    AppState::new(Configuration::new(dir.path().join("books.json")), RepositoryStore::JsonFile)
}

#[test]
fn test_catalog_survives_restart() {
    let dir = tempdir().expect("should create temp dir");
    let state = file_state(&dir);

    let books = vec![
        Book::new("Dune", "Frank Herbert", &["SciFi"], 1965, "A desert planet saga", "0441013597"),
        Book::new("The Time Machine", "H. G. Wells", &["SciFi", "Classic"], 1895, "A journey through time", "0451528557"),
        Book::new("Emma", "Jane Austen", &[], 1815, "", "0141439580"),
    ];
    {
        let mut catalog_svc = create_catalog_service(&state);
        for book in &books {
            catalog_svc.add_book(book.clone()).expect("should add book");
        }
    }

    let catalog_svc = create_catalog_service(&state);
    assert_eq!(books, catalog_svc.books());
    assert_eq!(Some(books[1].clone()), catalog_svc.find_book_by_isbn("0451528557"));
}

#[test]
fn test_document_is_a_pretty_printed_array() {
    let dir = tempdir().expect("should create temp dir");
    let state = file_state(&dir);
    let mut catalog_svc = create_catalog_service(&state);
    catalog_svc.add_book(Book::new("Dune", "Frank Herbert", &["SciFi"], 1965, "A desert planet saga", "0441013597"))
        .expect("should add book");

    let text = fs::read_to_string(&state.config.catalog_file).expect("should read document");
    assert!(text.lines().count() > 1);
    let json: serde_json::Value = serde_json::from_str(&text).expect("should parse document");
    let array = json.as_array().expect("document should be an array");
    assert_eq!(1, array.len());
    assert_eq!("Dune", array[0]["title"]);
    assert_eq!("Frank Herbert", array[0]["author"]);
    assert_eq!("SciFi", array[0]["genres"][0]);
    assert_eq!(1965, array[0]["publicationYear"]);
    assert_eq!("A desert planet saga", array[0]["annotation"]);
    assert_eq!("0441013597", array[0]["isbn"]);
}

#[test]
fn test_corrupt_document_starts_empty_catalog() {
    let dir = tempdir().expect("should create temp dir");
    let state = file_state(&dir);
    fs::write(&state.config.catalog_file, "definitely { not json").expect("should write document");

    let mut catalog_svc = create_catalog_service(&state);
    assert!(catalog_svc.is_empty());
    assert!(catalog_svc.find_books_by_title("anything").is_empty());

    // the next add replaces the corrupt document
    catalog_svc.add_book(Book::new("Dune", "Frank Herbert", &[], 1965, "", "1")).expect("should add book");
    assert_eq!(1, create_catalog_service(&state).len());
}

#[test]
fn test_keyword_search_ranks_by_match_count() {
    let dir = tempdir().expect("should create temp dir");
    let mut catalog_svc = create_catalog_service(&file_state(&dir));
    catalog_svc.add_book(Book::new("Dune", "Frank Herbert", &[], 1965, "A desert planet saga", "1"))
        .expect("should add book");
    catalog_svc.add_book(Book::new("Sands of Time", "Anon", &[], 2001, "Lost in the desert for a long time", "2"))
        .expect("should add book");

    let res = catalog_svc.find_books_by_keywords(&["time".to_string(), "desert".to_string()]);
    let titles: Vec<&str> = res.iter().map(|m| m.book.title.as_str()).collect();
    assert_eq!(vec!["Sands of Time", "Dune"], titles);
}
