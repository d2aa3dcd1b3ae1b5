//! SQL DDL for initializing the database schema.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema includes:
/// - `books` table (one row per catalog entry, id assigned by the store)
pub const SQLITE_INIT: &str = r#"
-- ---------------------------------------------------------------------------
-- Books catalog
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS books (
    id INTEGER PRIMARY KEY NOT NULL,
    title TEXT NOT NULL,
    author TEXT NOT NULL,
    price REAL NOT NULL
);
"#;
