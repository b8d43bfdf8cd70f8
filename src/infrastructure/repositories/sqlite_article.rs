// src/infrastructure/repositories/sqlite_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleFilter, ArticleId, ArticleReadRepository, ArticleRecord, ArticleStatus,
    ArticleToken, ArticleWriteRepository, StatusFilter,
};
use crate::domain::category::CategoryId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};

const ARTICLE_COLUMNS: &str = "id, user_id, category_id, title, body, urlname, status, \
     save_count, published_at, token, created_at, updated_at";

#[derive(Clone)]
pub struct SqliteArticleWriteRepository {
    pool: SqlitePool,
}

impl SqliteArticleWriteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteArticleReadRepository {
    pool: SqlitePool,
}

impl SqliteArticleReadRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    user_id: i64,
    category_id: Option<i64>,
    title: Option<String>,
    body: Option<String>,
    urlname: Option<String>,
    status: String,
    save_count: i64,
    published_at: Option<DateTime<Utc>>,
    token: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article::from(ArticleRecord {
            id: ArticleId::new(row.id)?,
            user_id: UserId::new(row.user_id)?,
            category_id: row.category_id.map(CategoryId::new).transpose()?,
            title: row.title,
            body: row.body,
            urlname: row.urlname,
            status: row.status.parse::<ArticleStatus>()?,
            save_count: row.save_count,
            published_at: row.published_at,
            token: ArticleToken::parse(row.token)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }))
    }
}

fn required_owner(article: &Article) -> DomainResult<UserId> {
    article
        .owner()
        .ok_or_else(|| DomainError::Validation("article owner is required".into()))
}

fn required_timestamps(article: &Article) -> DomainResult<(DateTime<Utc>, DateTime<Utc>)> {
    match (article.created_at(), article.updated_at()) {
        (Some(created_at), Some(updated_at)) => Ok((created_at, updated_at)),
        _ => Err(DomainError::Validation(
            "article timestamps must be set before writing".into(),
        )),
    }
}

async fn fetch_by_id(pool: &SqlitePool, id: i64) -> DomainResult<Option<Article>> {
    let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = ?");
    let row = sqlx::query_as::<_, ArticleRow>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(map_sqlx)?;

    row.map(Article::try_from).transpose()
}

/// SQL rendering of [`ArticleFilter`].
fn push_filter(builder: &mut QueryBuilder<'_, Sqlite>, filter: &ArticleFilter) {
    builder.push(" WHERE 1 = 1");

    if let Some(owner) = filter.owner {
        builder.push(" AND user_id = ");
        builder.push_bind(i64::from(owner));
    }

    if let Some(category) = filter.category {
        builder.push(" AND category_id = ");
        builder.push_bind(i64::from(category));
    }

    match filter.status {
        StatusFilter::Only(status) => {
            builder.push(" AND status = ");
            builder.push_bind(status.as_str());
        }
        StatusFilter::NotTrashed => {
            builder.push(" AND status <> ");
            builder.push_bind(ArticleStatus::Trash.as_str());
        }
    }
}

#[async_trait]
impl ArticleWriteRepository for SqliteArticleWriteRepository {
    async fn insert(&self, article: &Article) -> DomainResult<Article> {
        if !article.is_new_record() {
            return Err(DomainError::Conflict("article is already stored".into()));
        }
        let owner = required_owner(article)?;
        let token = article
            .token()
            .ok_or_else(|| DomainError::Validation("article token is required".into()))?;
        let (created_at, updated_at) = required_timestamps(article)?;

        let result = sqlx::query(
            "INSERT INTO articles (user_id, category_id, title, body, urlname, status, save_count,
                                   published_at, token, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(i64::from(owner))
        .bind(article.category_id().map(i64::from))
        .bind(article.raw_title())
        .bind(article.body())
        .bind(article.raw_urlname())
        .bind(article.status().as_str())
        .bind(article.save_count())
        .bind(article.published_at())
        .bind(token.as_str())
        .bind(created_at)
        .bind(updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        fetch_by_id(&self.pool, result.last_insert_rowid())
            .await?
            .ok_or_else(|| DomainError::Persistence("inserted article could not be read back".into()))
    }

    async fn update(&self, article: &Article) -> DomainResult<Article> {
        let id = article
            .id()
            .ok_or_else(|| DomainError::NotFound("article has not been stored yet".into()))?;
        let owner = required_owner(article)?;
        let (_, updated_at) = required_timestamps(article)?;

        // token is immutable: never part of the SET list
        let result = sqlx::query(
            "UPDATE articles
                SET user_id = ?, category_id = ?, title = ?, body = ?, urlname = ?, status = ?,
                    save_count = ?, published_at = ?, updated_at = ?
              WHERE id = ?",
        )
        .bind(i64::from(owner))
        .bind(article.category_id().map(i64::from))
        .bind(article.raw_title())
        .bind(article.body())
        .bind(article.raw_urlname())
        .bind(article.status().as_str())
        .bind(article.save_count())
        .bind(article.published_at())
        .bind(updated_at)
        .bind(i64::from(id))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }

        fetch_by_id(&self.pool, i64::from(id))
            .await?
            .ok_or_else(|| DomainError::NotFound("article not found".into()))
    }
}

#[async_trait]
impl ArticleReadRepository for SqliteArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        fetch_by_id(&self.pool, i64::from(id)).await
    }

    async fn find_by_token(
        &self,
        owner: UserId,
        token: &ArticleToken,
    ) -> DomainResult<Option<Article>> {
        let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE user_id = ? AND token = ?");
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(i64::from(owner))
            .bind(token.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn find_by_urlname(
        &self,
        owner: UserId,
        urlname: &str,
    ) -> DomainResult<Option<Article>> {
        let sql = format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles
              WHERE user_id = ? AND urlname <> '' AND urlname = ? COLLATE NOCASE
              ORDER BY id LIMIT 1"
        );
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(i64::from(owner))
            .bind(urlname)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn urlname_taken(
        &self,
        owner: UserId,
        urlname: &str,
        except: Option<ArticleId>,
    ) -> DomainResult<bool> {
        let except = except.map(i64::from);
        let found: i64 = sqlx::query_scalar(
            "SELECT EXISTS (
                 SELECT 1 FROM articles
                  WHERE user_id = ? AND urlname <> '' AND urlname = ? COLLATE NOCASE
                    AND (? IS NULL OR id <> ?)
             )",
        )
        .bind(i64::from(owner))
        .bind(urlname)
        .bind(except)
        .bind(except)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(found != 0)
    }

    async fn list(&self, filter: &ArticleFilter) -> DomainResult<Vec<Article>> {
        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {ARTICLE_COLUMNS} FROM articles"));
        push_filter(&mut builder, filter);
        builder.push(" ORDER BY id");

        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }
}
