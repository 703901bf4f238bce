use serde::{Deserialize, Serialize};
use std::fmt;

/// A book in the catalog.
///
/// The ISBN is the unique identity key: two books compare equal iff their
/// ISBNs are equal, regardless of every other field. The authors list holds
/// raw email strings in source order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub isbn: String,
    pub authors: Vec<String>,
    pub description: String,
}

impl Book {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        isbn: impl Into<String>,
        authors: Vec<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            isbn: isbn.into(),
            authors,
            description: description.into(),
        }
    }
}

// Identity is the ISBN alone.
impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.isbn == other.isbn
    }
}

impl Eq for Book {}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Book {{ title='{}', isbn='{}', authors={:?}, description='{}' }}",
            self.title, self.isbn, self.authors, self.description
        )
    }
}
