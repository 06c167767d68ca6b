// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    /// A share slug lost a write race against another item.
    #[error("share slug already taken: {0}")]
    SlugTaken(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}
