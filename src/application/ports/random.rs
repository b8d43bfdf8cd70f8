// src/application/ports/random.rs
use crate::domain::article::ArticleToken;
use crate::domain::errors::DomainResult;

/// Source of fresh article tokens. Failure means the random source itself is
/// unavailable and is reported as `DomainError::IdentityGeneration`.
pub trait TokenGenerator: Send + Sync {
    fn generate(&self) -> DomainResult<ArticleToken>;
}
