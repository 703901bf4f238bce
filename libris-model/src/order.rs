use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sort direction for title-ordered queries.
///
/// Parsing is strict: the external representations are `ASC`/`DESC` (the
/// long forms `ASCENDING`/`DESCENDING` are also accepted, case-insensitively)
/// and anything else is an [`OrderParseError`]. An unknown value is never
/// silently replaced by a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Order {
    Ascending,
    Descending,
}

/// Error returned when a sort-order string is not a recognized direction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid sort order: {0:?} (expected ASC or DESC)")]
pub struct OrderParseError(pub String);

impl FromStr for Order {
    type Err = OrderParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ASC" | "ASCENDING" => Ok(Self::Ascending),
            "DESC" | "DESCENDING" => Ok(Self::Descending),
            _ => Err(OrderParseError(s.to_string())),
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascending => write!(f, "ASC"),
            Self::Descending => write!(f, "DESC"),
        }
    }
}
