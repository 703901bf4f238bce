//! Core entity model for the Libris catalog.
//!
//! Defines the value types shared by ingestion, storage and the HTTP layer:
//! - [`Author`] — a person record keyed by email address
//! - [`Book`] and [`Magazine`] — catalog items keyed by ISBN
//! - [`Order`] — the validated sort direction for title queries
//!
//! All types are immutable values: once constructed they are never mutated,
//! only replaced wholesale by a catalog reload.

mod author;
mod book;
mod magazine;
mod order;

pub use author::Author;
pub use book::Book;
pub use magazine::Magazine;
pub use order::{Order, OrderParseError};
