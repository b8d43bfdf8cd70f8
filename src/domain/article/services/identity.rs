// src/domain/article/services/identity.rs
use std::sync::Arc;

use crate::application::ports::random::TokenGenerator;
use crate::domain::article::entity::Article;
use crate::domain::errors::DomainResult;

/// Gives a new article its token and, if none was chosen, a urlname equal to
/// that token. Uniqueness of the token is left to storage.
pub struct ArticleIdentityService {
    generator: Arc<dyn TokenGenerator>,
}

impl ArticleIdentityService {
    pub fn new(generator: Arc<dyn TokenGenerator>) -> Self {
        Self { generator }
    }

    pub fn assign(&self, article: &mut Article) -> DomainResult<()> {
        let changed = article.assign_identity(|| self.generator.generate())?;
        if changed {
            tracing::debug!(
                token = %article.public_id(),
                urlname = article.urlname().unwrap_or_default(),
                "assigned article identity"
            );
        }
        Ok(())
    }
}
