//! Route tests against fake `BookStore` implementations, exercising the
//! store-injection seam without any database behind it.

use async_trait::async_trait;
use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use bookshelf::BookshelfError;
use bookshelf::db::{Book, BookStore, NewBook};
use bookshelf::server::router::{AppState, bookshelf_router};
use std::sync::Arc;
use tower::ServiceExt;

/// Serves a canned catalog.
struct CannedStore {
    books: Vec<Book>,
}

#[async_trait]
impl BookStore for CannedStore {
    async fn list_books(&self) -> Result<Vec<Book>, BookshelfError> {
        Ok(self.books.clone())
    }

    async fn get_book(&self, id: &str) -> Result<Book, BookshelfError> {
        self.books
            .iter()
            .find(|b| b.id.to_string() == id)
            .cloned()
            .ok_or(BookshelfError::BookNotFound)
    }

    async fn add_book(&self, new: NewBook) -> Result<Book, BookshelfError> {
        Ok(Book {
            id: self.books.len() as i64 + 1,
            title: new.title,
            author: new.author,
            price: new.price,
        })
    }
}

/// Fails every operation the way a dead connection pool would.
struct BrokenStore;

#[async_trait]
impl BookStore for BrokenStore {
    async fn list_books(&self) -> Result<Vec<Book>, BookshelfError> {
        Err(BookshelfError::DatabaseError(sqlx::Error::PoolClosed))
    }

    async fn get_book(&self, _id: &str) -> Result<Book, BookshelfError> {
        Err(BookshelfError::DatabaseError(sqlx::Error::PoolClosed))
    }

    async fn add_book(&self, _new: NewBook) -> Result<Book, BookshelfError> {
        Err(BookshelfError::DatabaseError(sqlx::Error::PoolClosed))
    }
}

#[tokio::test]
async fn canned_store_round_trips_through_the_routes() {
    let books = vec![
        Book {
            id: 1,
            title: "Book One".to_string(),
            author: "Author One".to_string(),
            price: 10.99,
        },
        Book {
            id: 2,
            title: "Book Two".to_string(),
            author: "Author Two".to_string(),
            price: 12.99,
        },
    ];

    let state = AppState::new(Arc::new(CannedStore {
        books: books.clone(),
    }));
    let app = bookshelf_router(state);

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/books")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);

    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let listed: Vec<Book> = serde_json::from_slice(&body).expect("list body was not [Book]");
    assert_eq!(listed, books);

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/books/2")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);

    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let fetched: Book = serde_json::from_slice(&body).expect("get body was not a Book");
    assert_eq!(fetched, books[1]);
}

#[tokio::test]
async fn store_failures_surface_as_500_with_the_error_text() {
    let state = AppState::new(Arc::new(BrokenStore));
    let app = bookshelf_router(state);

    let expected_message = sqlx::Error::PoolClosed.to_string();

    for (method, uri, body) in [
        ("GET", "/books", Body::empty()),
        ("GET", "/books/1", Body::empty()),
        (
            "POST",
            "/books",
            Body::from(r#"{"title":"1984","author":"George Orwell","price":9.99}"#),
        ),
    ] {
        let resp = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(body)
                    .expect("failed to build request"),
            )
            .await
            .expect("request failed");
        assert_eq!(
            resp.status(),
            StatusCode::INTERNAL_SERVER_ERROR,
            "{method} {uri} should fail with 500"
        );

        let body = to_bytes(resp.into_body(), usize::MAX)
            .await
            .expect("failed to read response body");
        let parsed: serde_json::Value =
            serde_json::from_slice(&body).expect("error body was not JSON");
        assert_eq!(parsed["message"], expected_message.as_str());
    }
}

#[tokio::test]
async fn payload_validation_rejects_before_the_store_is_reached() {
    // BrokenStore would 500 on any store call; a malformed body must never
    // get that far.
    let state = AppState::new(Arc::new(BrokenStore));
    let app = bookshelf_router(state);

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/books")
                .header("content-type", "application/json")
                .body(Body::from("not-json"))
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    assert_eq!(
        std::str::from_utf8(&body).unwrap(),
        r#"{"message":"Invalid request payload"}"#
    );
}
