//! Database module: models, schema, and the SQLite-backed book store.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `store.rs`: the `BookStore` capability and its SQLite implementation

pub mod models;
pub mod schema;
pub mod store;

pub use models::{Book, NewBook};
pub use schema::SQLITE_INIT;
pub use store::{BookStore, SqliteBookStore};
