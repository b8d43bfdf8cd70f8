// src/infrastructure/repositories/sqlite_version.rs
use super::map_sqlx;
use crate::domain::article::{ArticleId, NewVersion, Version, VersionId, VersionRepository};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

#[derive(Clone)]
pub struct SqliteVersionRepository {
    pool: SqlitePool,
}

impl SqliteVersionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct VersionRow {
    id: i64,
    article_id: i64,
    number: i32,
    user_id: i64,
    title: Option<String>,
    body: Option<String>,
    recorded_at: DateTime<Utc>,
}

impl TryFrom<VersionRow> for Version {
    type Error = DomainError;

    fn try_from(row: VersionRow) -> Result<Self, Self::Error> {
        Ok(Version {
            id: VersionId::new(row.id)?,
            article_id: ArticleId::new(row.article_id)?,
            number: row.number,
            user_id: UserId::new(row.user_id)?,
            title: row.title,
            body: row.body,
            recorded_at: row.recorded_at,
        })
    }
}

#[async_trait]
impl VersionRepository for SqliteVersionRepository {
    async fn append(&self, version: NewVersion) -> DomainResult<Version> {
        let NewVersion {
            article_id,
            user_id,
            title,
            body,
            recorded_at,
        } = version;
        let article_id = i64::from(article_id);

        let result = sqlx::query(
            r#"
            INSERT INTO article_versions (article_id, number, user_id, title, body, recorded_at)
            SELECT ?, COALESCE(MAX(number), 0) + 1, ?, ?, ?, ?
              FROM article_versions
             WHERE article_id = ?
            "#,
        )
        .bind(article_id)
        .bind(i64::from(user_id))
        .bind(title)
        .bind(body)
        .bind(recorded_at)
        .bind(article_id)
        .execute(&self.pool)
        .await
        .map_err(|err| match map_sqlx(err) {
            DomainError::NotFound(_) => DomainError::NotFound("article not found".into()),
            other => other,
        })?;

        let row = sqlx::query_as::<_, VersionRow>(
            "SELECT id, article_id, number, user_id, title, body, recorded_at
               FROM article_versions WHERE id = ?",
        )
        .bind(result.last_insert_rowid())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Version::try_from(row)
    }

    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<Version>> {
        let rows = sqlx::query_as::<_, VersionRow>(
            "SELECT id, article_id, number, user_id, title, body, recorded_at
               FROM article_versions
              WHERE article_id = ?
              ORDER BY number",
        )
        .bind(i64::from(article_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Version::try_from).collect()
    }
}
