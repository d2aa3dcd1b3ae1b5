use super::extract::BookPayload;
use crate::db::models::Book;
use crate::error::BookshelfError;
use crate::server::router::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::debug;

pub(super) async fn list_books(
    State(state): State<AppState>,
) -> Result<Json<Vec<Book>>, BookshelfError> {
    let books = state.store.list_books().await?;
    Ok(Json(books))
}

pub(super) async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Book>, BookshelfError> {
    // The path segment is handed to the store verbatim; classification of
    // "no such row" happens there, not here.
    let book = state.store.get_book(&id).await?;
    Ok(Json(book))
}

pub(super) async fn create_book(
    State(state): State<AppState>,
    BookPayload(new): BookPayload,
) -> Result<(StatusCode, Json<Book>), BookshelfError> {
    debug!(title = %new.title, author = %new.author, "incoming create request");

    let book = state.store.add_book(new).await?;
    Ok((StatusCode::CREATED, Json(book)))
}
