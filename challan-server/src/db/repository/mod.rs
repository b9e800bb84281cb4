//! Repository layer - free async functions over the SQLite pool
//!
//! Each resource gets its own module of query functions. Handlers never
//! touch SQL directly.

pub mod area;
pub mod bike;
pub mod challan;
pub mod challenge;
pub mod citizen;
pub mod officer;
pub mod rule;
pub mod website_user;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type RepoResult<T> = Result<T, RepoError>;

impl From<sqlx::Error> for RepoError {
    fn from(e: sqlx::Error) -> Self {
        match &e {
            sqlx::Error::RowNotFound => RepoError::NotFound("Record not found".to_string()),
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                RepoError::Duplicate(db.message().to_string())
            }
            _ => RepoError::Database(e.to_string()),
        }
    }
}
