// src/application/queries/articles/category.rs
use super::ArticleQueryService;
use crate::{application::error::ApplicationResult, domain::article::Article};

impl ArticleQueryService {
    pub async fn category_name(&self, article: &Article) -> ApplicationResult<Option<String>> {
        Ok(self
            .presenter
            .category_of(article)
            .await?
            .map(|category| category.name))
    }

    pub async fn category_urlname(&self, article: &Article) -> ApplicationResult<Option<String>> {
        Ok(self
            .presenter
            .category_of(article)
            .await?
            .and_then(|category| category.urlname))
    }
}
