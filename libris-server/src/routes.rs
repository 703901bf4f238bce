use crate::error::ApiError;
use crate::service::CatalogService;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use libris_model::{Book, Magazine, Order};
use serde::Deserialize;

/// Shared handler state: one query service per entity kind.
#[derive(Clone)]
pub struct AppState {
    pub books: CatalogService<Book>,
    pub magazines: CatalogService<Magazine>,
}

#[derive(Debug, Deserialize)]
struct SortQuery {
    order: Option<String>,
}

impl SortQuery {
    /// Validate the external order value; anything but ASC/DESC is a 400.
    fn parse(self) -> Result<Order, ApiError> {
        let raw = self.order.ok_or(ApiError::MissingParam("order"))?;
        Ok(raw.parse()?)
    }
}

/// Build the HTTP API router with the given catalog state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/books", get(list_books).post(create_book))
        .route("/books/isbn/{isbn}", get(book_by_isbn))
        .route("/books/author/{author}", get(books_by_author))
        .route("/books/sort-by-title", get(books_sorted_by_title))
        .route("/magazines", get(list_magazines).post(create_magazine))
        .route("/magazines/isbn/{isbn}", get(magazine_by_isbn))
        .route("/magazines/author/{author}", get(magazines_by_author))
        .route("/magazines/sort-by-title", get(magazines_sorted_by_title))
        .with_state(state)
}

// ── Books ────────────────────────────────────────────────────────

async fn create_book(
    State(state): State<AppState>,
    Json(book): Json<Book>,
) -> Result<Json<Book>, ApiError> {
    Ok(Json(state.books.create(&book)?))
}

async fn list_books(State(state): State<AppState>) -> Result<Json<Vec<Book>>, ApiError> {
    Ok(Json(state.books.find_all()?))
}

async fn book_by_isbn(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> Result<Response, ApiError> {
    Ok(match state.books.find_by_isbn(&isbn)? {
        Some(book) => Json(book).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    })
}

async fn books_by_author(
    State(state): State<AppState>,
    Path(author): Path<String>,
) -> Result<Json<Vec<Book>>, ApiError> {
    Ok(Json(state.books.find_by_author(&author)?))
}

async fn books_sorted_by_title(
    State(state): State<AppState>,
    Query(query): Query<SortQuery>,
) -> Result<Json<Vec<Book>>, ApiError> {
    let order = query.parse()?;
    Ok(Json(state.books.find_ordered_by_title(order)?))
}

// ── Magazines ────────────────────────────────────────────────────

async fn create_magazine(
    State(state): State<AppState>,
    Json(magazine): Json<Magazine>,
) -> Result<Json<Magazine>, ApiError> {
    Ok(Json(state.magazines.create(&magazine)?))
}

async fn list_magazines(State(state): State<AppState>) -> Result<Json<Vec<Magazine>>, ApiError> {
    Ok(Json(state.magazines.find_all()?))
}

async fn magazine_by_isbn(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> Result<Response, ApiError> {
    Ok(match state.magazines.find_by_isbn(&isbn)? {
        Some(magazine) => Json(magazine).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    })
}

async fn magazines_by_author(
    State(state): State<AppState>,
    Path(author): Path<String>,
) -> Result<Json<Vec<Magazine>>, ApiError> {
    Ok(Json(state.magazines.find_by_author(&author)?))
}

async fn magazines_sorted_by_title(
    State(state): State<AppState>,
    Query(query): Query<SortQuery>,
) -> Result<Json<Vec<Magazine>>, ApiError> {
    let order = query.parse()?;
    Ok(Json(state.magazines.find_ordered_by_title(order)?))
}
