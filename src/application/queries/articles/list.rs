// src/application/queries/articles/list.rs
use super::ArticleQueryService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::{article::ArticleFilter, category::CategoryId, user::UserId},
};

#[derive(Debug, Default)]
pub struct ListArticlesQuery {
    pub owner_id: Option<i64>,
    /// `"publish"`, `"draft"` or `"trash"`; anything else lists every
    /// article that is not trashed.
    pub status: Option<String>,
    pub category_id: Option<i64>,
}

impl ArticleQueryService {
    pub async fn list_articles(&self, query: ListArticlesQuery) -> ApplicationResult<Vec<ArticleDto>> {
        let mut filter = ArticleFilter::by_status(query.status.as_deref());
        if let Some(owner) = query.owner_id {
            filter = filter.owned_by(UserId::new(owner)?);
        }
        if let Some(category) = query.category_id {
            filter = filter.in_category(CategoryId::new(category)?);
        }

        let articles = self.read_repo.list(&filter).await?;
        self.presenter.present_all(&articles).await
    }
}
