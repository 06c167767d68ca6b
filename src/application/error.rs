// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Failures surfaced by command and query services.
///
/// Items and profiles owned by someone else are reported as `NotFound`, so
/// there is no separate "forbidden" outcome.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("resource not found: {0}")]
    NotFound(String),

    /// A write could not be completed against concurrent writers, e.g. share
    /// slug allocation gave up after repeated races.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Missing or bad credentials, or a token that failed verification.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Hashing, token signing or other collaborator failures.
    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_are_wrapped_verbatim() {
        let err: ApplicationError = DomainError::SlugTaken("cool-link".into()).into();
        assert!(matches!(err, ApplicationError::Domain(DomainError::SlugTaken(ref s)) if s == "cool-link"));
        assert_eq!(err.to_string(), DomainError::SlugTaken("cool-link".into()).to_string());
    }

    #[test]
    fn constructors_keep_the_message() {
        assert_eq!(
            ApplicationError::not_found("item not found").to_string(),
            "resource not found: item not found"
        );
    }
}
