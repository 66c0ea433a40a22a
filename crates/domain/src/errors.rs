use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    #[error("Filter '{0}' already exists")]
    DuplicateFilter(String),

    #[error("Filter not found: {0}")]
    FilterNotFound(i64),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
