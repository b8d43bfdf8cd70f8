// src/domain/article/version.rs
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VersionId(pub i64);

impl VersionId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "version id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<VersionId> for i64 {
    fn from(value: VersionId) -> Self {
        value.0
    }
}

/// Immutable snapshot of an article's title and body.
#[derive(Debug, Clone, PartialEq)]
pub struct Version {
    pub id: VersionId,
    pub article_id: ArticleId,
    /// 1-based position within the article's history.
    pub number: i32,
    pub user_id: UserId,
    pub title: Option<String>,
    pub body: Option<String>,
    pub recorded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewVersion {
    pub article_id: ArticleId,
    pub user_id: UserId,
    pub title: Option<String>,
    pub body: Option<String>,
    pub recorded_at: DateTime<Utc>,
}
