// src/application/queries/articles/versions.rs
use super::ArticleQueryService;
use crate::{
    application::{
        dto::VersionDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

pub struct ListVersionsQuery {
    pub article_id: i64,
}

impl ArticleQueryService {
    /// Versions oldest first.
    pub async fn list_versions(&self, query: ListVersionsQuery) -> ApplicationResult<Vec<VersionDto>> {
        let article_id = ArticleId::new(query.article_id)?;
        if self.read_repo.find_by_id(article_id).await?.is_none() {
            return Err(ApplicationError::not_found("article not found"));
        }

        let versions = self.version_repo.list_by_article(article_id).await?;
        Ok(versions.into_iter().map(Into::into).collect())
    }
}
