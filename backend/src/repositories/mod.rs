//! Database repositories
//!
//! The credential store ([`UserRepository`]) and the history store
//! ([`HistoryRepository`]) are traits so handlers can run against Postgres
//! or the in-memory implementations used in tests.

pub mod history;
pub mod user;

use thiserror::Error;

pub use history::{
    HistoryRecord, HistoryRepository, InMemoryHistoryRepository, NewHistoryRecord,
    PgHistoryRepository,
};
pub use user::{InMemoryUserRepository, NewUser, PgUserRepository, UserRecord, UserRepository};

/// Failure reported by a store
#[derive(Error, Debug)]
pub enum StoreError {
    /// A unique constraint rejected the write
    #[error("duplicate key value violates unique constraint: {0}")]
    Duplicate(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    /// Classify an insert failure, splitting out unique violations
    pub(crate) fn from_insert(err: sqlx::Error) -> Self {
        let duplicate = err
            .as_database_error()
            .filter(|db| db.is_unique_violation())
            .map(|db| db.message().to_string());

        match duplicate {
            Some(message) => StoreError::Duplicate(message),
            None => StoreError::Database(err),
        }
    }
}
