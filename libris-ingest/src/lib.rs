//! Catalog ingestion for Libris.
//!
//! Turns `;`-delimited source files into typed catalog entities and loads
//! them into the document store:
//! - [`read_records`] — generic tabular reader (header row, trimmed fields,
//!   case-insensitive column lookup)
//! - [`mappers`] — one pure mapping per entity kind
//! - [`CatalogLoader`] — wipe-and-reinsert batch load, one kind at a time
//!
//! A failed source never yields a partial record set; the loader skips that
//! kind and moves on to the next one.

mod error;
mod loader;
pub mod mappers;
mod records;

pub use error::{IngestError, IngestResult};
pub use loader::{CatalogLoader, CatalogSources, LoadReport};
pub use records::{CATALOG_DELIMITER, Record, read_records};
