use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted catalog entry. `id` is assigned by the store on insert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub price: f64,
}

/// Create payload for a book; carries no `id` since the store assigns one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub price: f64,
}
