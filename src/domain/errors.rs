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
    #[error("no user to credit: the article has no owner and no user was supplied")]
    MissingOwner,
    #[error("token generation failed: {0}")]
    IdentityGeneration(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}
