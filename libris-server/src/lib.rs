//! HTTP API and query services for the Libris catalog.
//!
//! The layering is deliberately thin: axum handlers dispatch into a
//! [`CatalogService`] per entity kind, which delegates storage to the
//! document store's collections. Sort-order validation happens once, at the
//! HTTP boundary, so the services only ever see a typed [`Order`].

mod error;
mod routes;
mod service;

pub use error::ApiError;
pub use routes::{AppState, build_router};
pub use service::CatalogService;
