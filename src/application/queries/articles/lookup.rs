// src/application/queries/articles/lookup.rs
use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{Article, ArticleId, ArticleToken},
        user::UserId,
    },
};

pub struct GetArticleByTokenQuery {
    pub owner_id: i64,
    pub token: String,
}

pub struct GetArticleByUrlnameQuery {
    pub owner_id: i64,
    pub urlname: String,
}

impl ArticleQueryService {
    /// Loads the entity itself, for callers that mutate it and hand it back
    /// to `ArticleCommandService::save`.
    pub async fn load_article(&self, id: i64) -> ApplicationResult<Article> {
        self.read_repo
            .find_by_id(ArticleId::new(id)?)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))
    }

    pub async fn get_article(&self, id: i64) -> ApplicationResult<ArticleDto> {
        let article = self.load_article(id).await?;
        self.presenter.present(&article).await
    }

    pub async fn get_by_token(&self, query: GetArticleByTokenQuery) -> ApplicationResult<ArticleDto> {
        let owner = UserId::new(query.owner_id)?;
        // a malformed token cannot address anything
        let Ok(token) = ArticleToken::parse(query.token) else {
            return Err(ApplicationError::not_found("article not found"));
        };

        let article = self
            .read_repo
            .find_by_token(owner, &token)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;
        self.presenter.present(&article).await
    }

    pub async fn get_by_urlname(
        &self,
        query: GetArticleByUrlnameQuery,
    ) -> ApplicationResult<ArticleDto> {
        let owner = UserId::new(query.owner_id)?;
        if query.urlname.is_empty() {
            return Err(ApplicationError::not_found("article not found"));
        }

        let article = self
            .read_repo
            .find_by_urlname(owner, &query.urlname)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;
        self.presenter.present(&article).await
    }
}
