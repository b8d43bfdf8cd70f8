// src/application/services/presenter.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::ArticleDto,
        error::ApplicationResult,
        ports::locale::{Localizer, MessageKey},
    },
    domain::{
        article::Article,
        category::{Category, CategoryRepository},
    },
};

/// Turns articles into read models: localized title fallback plus the
/// fields forwarded from the article's category.
pub struct ArticlePresenter {
    category_repo: Arc<dyn CategoryRepository>,
    localizer: Arc<dyn Localizer>,
}

impl ArticlePresenter {
    pub fn new(category_repo: Arc<dyn CategoryRepository>, localizer: Arc<dyn Localizer>) -> Self {
        Self {
            category_repo,
            localizer,
        }
    }

    pub fn untitled(&self) -> String {
        self.localizer.message(MessageKey::Untitled)
    }

    /// `None` when no category is set or the referenced one no longer exists.
    pub async fn category_of(&self, article: &Article) -> ApplicationResult<Option<Category>> {
        match article.category_id() {
            Some(id) => Ok(self.category_repo.find_by_id(id).await?),
            None => Ok(None),
        }
    }

    pub async fn present(&self, article: &Article) -> ApplicationResult<ArticleDto> {
        let category = self.category_of(article).await?;
        Ok(ArticleDto::new(article, &self.untitled(), category.as_ref()))
    }

    pub async fn present_all(&self, articles: &[Article]) -> ApplicationResult<Vec<ArticleDto>> {
        let untitled = self.untitled();
        let mut items = Vec::with_capacity(articles.len());
        for article in articles {
            let category = self.category_of(article).await?;
            items.push(ArticleDto::new(article, &untitled, category.as_ref()));
        }
        Ok(items)
    }
}
