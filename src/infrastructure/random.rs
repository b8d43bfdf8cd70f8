// src/infrastructure/random.rs
use crate::application::ports::random::TokenGenerator;
use crate::domain::article::{ArticleToken, value_objects::TOKEN_BYTES};
use crate::domain::errors::{DomainError, DomainResult};
use rand::{TryRngCore, rngs::OsRng};

/// Draws tokens from the operating system's random source.
#[derive(Default, Clone)]
pub struct OsTokenGenerator;

impl TokenGenerator for OsTokenGenerator {
    fn generate(&self) -> DomainResult<ArticleToken> {
        let mut bytes = [0u8; TOKEN_BYTES];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|err| DomainError::IdentityGeneration(err.to_string()))?;
        Ok(ArticleToken::from_bytes(bytes))
    }
}
