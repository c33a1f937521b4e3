//! HTTP handlers for the catalog.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

use bookshelf_http::{ApiResponse, AppResult};

use super::error::Operation;
use super::filters::{BookFilter, ListQuery};
use super::models::{BookCreated, BookDetail, BookList, BookPayload};
use super::store::BookStore;
use super::validator::BookDraft;

/// Routes relative to the module mount point.
pub fn router(store: Arc<BookStore>) -> Router {
    Router::new()
        .route("/", get(list_books).post(add_book))
        .route(
            "/{id}",
            get(get_book).put(update_book).delete(delete_book),
        )
        .with_state(store)
}

async fn add_book(
    State(store): State<Arc<BookStore>>,
    payload: Result<Json<BookPayload>, JsonRejection>,
) -> AppResult<ApiResponse<BookCreated>> {
    let Json(payload) = payload?;

    let book = BookDraft::try_from(payload)
        .and_then(|draft| store.insert(draft))
        .map_err(|e| e.into_app_error(Operation::Add))?;

    tracing::info!(book_id = %book.id, "book added");

    Ok(ApiResponse::created(BookCreated { book_id: book.id }).message("Book added successfully"))
}

async fn list_books(
    State(store): State<Arc<BookStore>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> ApiResponse<BookList> {
    let query: ListQuery = pairs.into_iter().collect();
    let filter = BookFilter::from(&query);
    let books = store.list(&filter);

    tracing::debug!(?filter, count = books.len(), "books listed");

    ApiResponse::ok(BookList { books })
}

async fn get_book(
    State(store): State<Arc<BookStore>>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<BookDetail>> {
    let book = store
        .get(&id)
        .map_err(|e| e.into_app_error(Operation::Get))?;

    Ok(ApiResponse::ok(BookDetail { book }))
}

async fn update_book(
    State(store): State<Arc<BookStore>>,
    Path(id): Path<String>,
    payload: Result<Json<BookPayload>, JsonRejection>,
) -> AppResult<ApiResponse<()>> {
    let Json(payload) = payload?;

    BookDraft::try_from(payload)
        .and_then(|draft| store.replace(&id, draft))
        .map_err(|e| e.into_app_error(Operation::Update))?;

    tracing::info!(book_id = %id, "book updated");

    Ok(ApiResponse::acknowledged("Book updated successfully"))
}

async fn delete_book(
    State(store): State<Arc<BookStore>>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<()>> {
    store
        .remove(&id)
        .map_err(|e| e.into_app_error(Operation::Delete))?;

    tracing::info!(book_id = %id, "book deleted");

    Ok(ApiResponse::acknowledged("Book deleted successfully"))
}
