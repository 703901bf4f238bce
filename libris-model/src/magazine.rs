use serde::{Deserialize, Serialize};

/// A magazine in the catalog.
///
/// Same identity rule as [`Book`](crate::Book): equality is defined solely
/// by ISBN. The publication date is a free-form string taken verbatim from
/// the source data; it is not validated as a calendar date.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Magazine {
    pub title: String,
    pub isbn: String,
    pub authors: Vec<String>,
    pub publication_date: String,
}

impl Magazine {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        isbn: impl Into<String>,
        authors: Vec<String>,
        publication_date: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            isbn: isbn.into(),
            authors,
            publication_date: publication_date.into(),
        }
    }
}

impl PartialEq for Magazine {
    fn eq(&self, other: &Self) -> bool {
        self.isbn == other.isbn
    }
}

impl Eq for Magazine {}
