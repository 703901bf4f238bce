//! SQLite document store for the Libris catalog.
//!
//! Entities are stored as JSON blobs in one table per collection, keyed by a
//! unique identity field extracted from the document. The store deliberately
//! exposes only the small repository surface the query layer needs:
//!
//! - insert (rejecting duplicate keys)
//! - find-all, optionally sorted by a document field
//! - find-one-by-field (exact match)
//! - find-all-by-field-containing (exact element match in a JSON array)
//! - delete-all
//!
//! A single shared connection guarded by a mutex serves all collections;
//! per-document operations are atomic, there are no cross-collection
//! transactions.

mod collection;
mod error;
mod store;

pub use collection::{Collection, Sort, SortDirection};
pub use error::{StoreError, StoreResult};
pub use store::DocumentStore;
