use crate::db::models::{Book, NewBook};
use crate::db::schema::SQLITE_INIT;
use crate::error::BookshelfError;
use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::{str::FromStr, time::Duration};
use tracing::info;

/// Persistence capability for the books catalog.
///
/// Handlers depend on this trait rather than a concrete store, so tests can
/// substitute a fake implementation at router construction time.
#[async_trait]
pub trait BookStore: Send + Sync {
    /// List every book in store-native row order. An empty table is `Ok(vec![])`.
    async fn list_books(&self) -> Result<Vec<Book>, BookshelfError>;

    /// Fetch a single book by id.
    ///
    /// The id is bound verbatim as taken from the request path; zero matching
    /// rows is `BookNotFound`.
    async fn get_book(&self, id: &str) -> Result<Book, BookshelfError>;

    /// Insert a book and return it with the store-assigned id.
    async fn add_book(&self, new: NewBook) -> Result<Book, BookshelfError>;
}

/// SQLite-backed store.
#[derive(Clone)]
pub struct SqliteBookStore {
    pool: SqlitePool,
}

impl SqliteBookStore {
    /// Connect to `database_url`, creating the file and schema if missing.
    pub async fn connect(database_url: &str) -> Result<Self, BookshelfError> {
        let connect_opts = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .busy_timeout(Duration::from_secs(5))
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;

        apply_schema(&pool).await?;

        info!("book store initialized");
        Ok(Self { pool })
    }
}

#[async_trait]
impl BookStore for SqliteBookStore {
    async fn list_books(&self) -> Result<Vec<Book>, BookshelfError> {
        let rows = sqlx::query_as::<_, Book>(
            r#"
        SELECT id, title, author, price
        FROM books
        "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn get_book(&self, id: &str) -> Result<Book, BookshelfError> {
        // SQLite coerces the text parameter against the INTEGER column; a
        // non-numeric id simply matches nothing.
        let row = sqlx::query_as::<_, Book>(
            r#"
        SELECT id, title, author, price
        FROM books
        WHERE id = ?
        "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.ok_or(BookshelfError::BookNotFound)
    }

    async fn add_book(&self, new: NewBook) -> Result<Book, BookshelfError> {
        let id: i64 = sqlx::query_scalar(
            r#"
        INSERT INTO books (title, author, price)
        VALUES (?, ?, ?)
        RETURNING id
        "#,
        )
        .bind(&new.title)
        .bind(&new.author)
        .bind(new.price)
        .fetch_one(&self.pool)
        .await?;

        Ok(Book {
            id,
            title: new.title,
            author: new.author,
            price: new.price,
        })
    }
}

async fn apply_schema(pool: &SqlitePool) -> Result<(), BookshelfError> {
    for stmt in SQLITE_INIT.split(';') {
        let s = stmt.trim();
        if s.is_empty() {
            continue;
        }
        sqlx::query(s).execute(pool).await?;
    }
    Ok(())
}
