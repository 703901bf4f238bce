//! Pure mappings from parsed records to catalog entities.
//!
//! Each mapper is total over any record: a missing column maps to an empty
//! field, never a failure. Column names follow the German source data.

use crate::records::Record;
use libris_model::{Author, Book, Magazine};

/// Map a record from the authors source.
#[must_use]
pub fn author_from_record(record: &Record) -> Author {
    Author::new(
        record.get("Emailadresse"),
        record.get("Vorname"),
        record.get("Nachname"),
    )
}

/// Map a record from the books source.
#[must_use]
pub fn book_from_record(record: &Record) -> Book {
    Book::new(
        record.get("Titel"),
        record.get("ISBN-Nummer"),
        split_authors(record.get("Autoren")),
        record.get("Kurzbeschreibung"),
    )
}

/// Map a record from the magazines source.
#[must_use]
pub fn magazine_from_record(record: &Record) -> Magazine {
    Magazine::new(
        record.get("Titel"),
        record.get("ISBN-Nummer"),
        split_authors(record.get("Autor")),
        record.get("Erscheinungsdatum"),
    )
}

/// Naive comma split of a multi-author field.
///
/// Tokens are kept verbatim, surrounding whitespace included, matching the
/// source format's convention of packing bare email addresses around commas.
/// An address that itself contained a comma would corrupt the list; the
/// source data never does this.
fn split_authors(raw: &str) -> Vec<String> {
    raw.split(',').map(str::to_string).collect()
}
