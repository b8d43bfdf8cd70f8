use crate::domain::article::{Article, ArticleStatus, Version};
use crate::domain::category::Category;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Read model handed to callers: display fallbacks applied, category fields
/// forwarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleDto {
    pub id: Option<i64>,
    pub public_id: String,
    pub user_id: Option<i64>,
    pub category_id: Option<i64>,
    pub category_name: Option<String>,
    pub category_urlname: Option<String>,
    pub title: String,
    pub body: Option<String>,
    pub urlname: Option<String>,
    pub status: ArticleStatus,
    pub save_count: i64,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl ArticleDto {
    pub fn new(article: &Article, untitled: &str, category: Option<&Category>) -> Self {
        Self {
            id: article.id().map(Into::into),
            public_id: article.public_id(),
            user_id: article.owner().map(Into::into),
            category_id: article.category_id().map(Into::into),
            category_name: category.map(|c| c.name.clone()),
            category_urlname: category.and_then(|c| c.urlname.clone()),
            title: article.title(untitled).to_owned(),
            body: article.body().map(str::to_owned),
            urlname: article.urlname().map(str::to_owned),
            status: article.status(),
            save_count: article.save_count(),
            published_at: article.published_at(),
            created_at: article.created_at(),
            updated_at: article.updated_at(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionDto {
    pub article_id: i64,
    pub number: i32,
    pub user_id: i64,
    pub title: Option<String>,
    pub body: Option<String>,
    pub recorded_at: DateTime<Utc>,
}

impl From<Version> for VersionDto {
    fn from(version: Version) -> Self {
        Self {
            article_id: version.article_id.into(),
            number: version.number,
            user_id: version.user_id.into(),
            title: version.title,
            body: version.body,
            recorded_at: version.recorded_at,
        }
    }
}
