use serde::{Deserialize, Serialize};

// Book is a single catalog entry. Fields are fixed at creation, the catalog
// never edits a book in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub title: String,
    pub author: String,
    pub genres: Vec<String>,
    pub publication_year: i32,
    pub annotation: String,
    // opaque identifier, neither validated nor required to be unique
    pub isbn: String,
}

impl Book {
    pub fn new(title: &str, author: &str, genres: &[&str], publication_year: i32,
               annotation: &str, isbn: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            genres: genres.iter().map(|g| g.to_string()).collect(),
            publication_year,
            annotation: annotation.to_string(),
            isbn: isbn.to_string(),
        }
    }

    /// Case-insensitive substring test against title, author and annotation.
    /// Genres, ISBN and year are not searched. An empty keyword matches every book.
    pub fn contains_keyword(&self, keyword: &str) -> bool {
        let keyword = keyword.to_lowercase();
        contains_folded(&self.title, &keyword) ||
            contains_folded(&self.author, &keyword) ||
            contains_folded(&self.annotation, &keyword)
    }

    pub fn matches_title(&self, fragment: &str) -> bool {
        contains_folded(&self.title, &fragment.to_lowercase())
    }

    pub fn matches_author(&self, fragment: &str) -> bool {
        contains_folded(&self.author, &fragment.to_lowercase())
    }
}

// `needle` must already be lowercase
fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
