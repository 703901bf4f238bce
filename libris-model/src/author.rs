use serde::{Deserialize, Serialize};

/// An author record from the catalog source data.
///
/// The email address is the identity key. Books and magazines reference
/// authors by raw email string, not by foreign key, so an `Author` has no
/// lifecycle beyond the load batch that created it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl Author {
    #[must_use]
    pub fn new(
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}
