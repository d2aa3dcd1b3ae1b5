use crate::server::router::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub mod extract;
pub mod handlers;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/books", get(handlers::list_books))
        .route("/books", post(handlers::create_book))
        .route("/books/{id}", get(handlers::get_book))
}
