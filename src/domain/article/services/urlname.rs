// src/domain/article/services/urlname.rs
use std::sync::Arc;

use crate::application::ports::locale::{Localizer, MessageKey};
use crate::domain::article::entity::Article;
use crate::domain::article::repository::ArticleReadRepository;
use crate::domain::article::value_objects::urlname_is_well_formed;
use crate::domain::errors::{DomainError, DomainResult};

/// Urlname rules. Format and per-owner uniqueness skip blank urlnames;
/// presence is a separate rule applied to every article being written.
pub struct ArticleUrlnameService {
    read_repo: Arc<dyn ArticleReadRepository>,
    localizer: Arc<dyn Localizer>,
}

impl ArticleUrlnameService {
    pub fn new(read_repo: Arc<dyn ArticleReadRepository>, localizer: Arc<dyn Localizer>) -> Self {
        Self {
            read_repo,
            localizer,
        }
    }

    pub fn require_present(&self, article: &Article) -> DomainResult<()> {
        if article.urlname().is_none() {
            return Err(DomainError::Validation(
                self.localizer.message(MessageKey::UrlnameBlank),
            ));
        }
        Ok(())
    }

    pub async fn validate(&self, article: &Article) -> DomainResult<()> {
        let Some(urlname) = article.urlname() else {
            return Ok(());
        };

        if !urlname_is_well_formed(urlname) {
            return Err(DomainError::Validation(
                self.localizer.message(MessageKey::UrlnameFormat),
            ));
        }

        // ownerless articles are rejected by storage anyway
        let Some(owner) = article.owner() else {
            return Ok(());
        };

        if self
            .read_repo
            .urlname_taken(owner, urlname, article.id())
            .await?
        {
            return Err(DomainError::Validation(
                self.localizer.message(MessageKey::UrlnameTaken),
            ));
        }

        Ok(())
    }
}
