// src/domain/article/repository.rs
use crate::domain::article::entity::Article;
use crate::domain::article::filter::ArticleFilter;
use crate::domain::article::value_objects::{ArticleId, ArticleToken};
use crate::domain::article::version::{NewVersion, Version};
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;

/// Storage side of the save pipeline. Implementations enforce that
/// `(owner, token)` and `(owner, urlname)` are unique (urlname compared
/// case-insensitively) and that every stored article has an owner and a token.
#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: &Article) -> DomainResult<Article>;
    async fn update(&self, article: &Article) -> DomainResult<Article>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn find_by_token(
        &self,
        owner: UserId,
        token: &ArticleToken,
    ) -> DomainResult<Option<Article>>;
    /// Case-insensitive lookup.
    async fn find_by_urlname(&self, owner: UserId, urlname: &str)
    -> DomainResult<Option<Article>>;
    /// Whether another article of `owner` already uses `urlname`, ignoring case.
    async fn urlname_taken(
        &self,
        owner: UserId,
        urlname: &str,
        except: Option<ArticleId>,
    ) -> DomainResult<bool>;
    async fn list(&self, filter: &ArticleFilter) -> DomainResult<Vec<Article>>;
}

#[async_trait]
pub trait VersionRepository: Send + Sync {
    async fn append(&self, version: NewVersion) -> DomainResult<Version>;
    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<Version>>;
}
