// src/infrastructure/repositories/memory.rs
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use crate::domain::article::{
    Article, ArticleFilter, ArticleId, ArticleReadRepository, ArticleRecord, ArticleToken,
    ArticleWriteRepository, NewVersion, Version, VersionId, VersionRepository,
};
use crate::domain::category::{Category, CategoryId, CategoryRepository, NewCategory};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;

fn lock<'a, T>(mutex: &'a Mutex<T>, what: &str) -> DomainResult<MutexGuard<'a, T>> {
    mutex
        .lock()
        .map_err(|_| DomainError::Persistence(format!("{what} lock poisoned")))
}

fn same_urlname(stored: Option<&str>, candidate: &str) -> bool {
    stored.is_some_and(|stored| stored.eq_ignore_ascii_case(candidate))
}

#[derive(Default)]
struct ArticleTable {
    rows: BTreeMap<i64, Article>,
    last_id: i64,
}

impl ArticleTable {
    /// Applies the composite unique constraints against every row but `except`.
    fn check_unique(&self, article: &Article, except: Option<ArticleId>) -> DomainResult<()> {
        let owner = article.owner();
        for other in self.rows.values() {
            if other.id() == except || other.owner() != owner {
                continue;
            }
            if article.is_new_record() && other.token() == article.token() {
                return Err(DomainError::Conflict(
                    "token already exists for this user".into(),
                ));
            }
            if let Some(urlname) = article.urlname() {
                if same_urlname(other.urlname(), urlname) {
                    return Err(DomainError::Conflict(
                        "urlname already exists for this user".into(),
                    ));
                }
            }
        }
        Ok(())
    }
}

fn to_record(article: &Article, id: ArticleId, token: ArticleToken) -> DomainResult<ArticleRecord> {
    let user_id = article
        .owner()
        .ok_or_else(|| DomainError::Validation("article owner is required".into()))?;
    let (Some(created_at), Some(updated_at)) = (article.created_at(), article.updated_at()) else {
        return Err(DomainError::Validation(
            "article timestamps must be set before writing".into(),
        ));
    };

    Ok(ArticleRecord {
        id,
        user_id,
        category_id: article.category_id(),
        title: article.raw_title().map(str::to_owned),
        body: article.body().map(str::to_owned),
        urlname: article.raw_urlname().map(str::to_owned),
        status: article.status(),
        save_count: article.save_count(),
        published_at: article.published_at(),
        token,
        created_at,
        updated_at,
    })
}

/// Article storage held in process memory, with the same constraints the
/// SQLite schema declares.
#[derive(Default)]
pub struct InMemoryArticleStore {
    inner: Mutex<ArticleTable>,
}

impl InMemoryArticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> DomainResult<usize> {
        Ok(lock(&self.inner, "article store")?.rows.len())
    }

    pub fn is_empty(&self) -> DomainResult<bool> {
        Ok(self.len()? == 0)
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleStore {
    async fn insert(&self, article: &Article) -> DomainResult<Article> {
        if !article.is_new_record() {
            return Err(DomainError::Conflict("article is already stored".into()));
        }
        let token = article
            .token()
            .cloned()
            .ok_or_else(|| DomainError::Validation("article token is required".into()))?;

        let mut table = lock(&self.inner, "article store")?;
        let id = ArticleId::new(table.last_id + 1)?;
        let record = to_record(article, id, token)?;
        table.check_unique(article, None)?;

        let stored = Article::from(record);
        table.last_id = i64::from(id);
        table.rows.insert(i64::from(id), stored.clone());
        Ok(stored)
    }

    async fn update(&self, article: &Article) -> DomainResult<Article> {
        let id = article
            .id()
            .ok_or_else(|| DomainError::NotFound("article has not been stored yet".into()))?;

        let mut table = lock(&self.inner, "article store")?;
        let token = table
            .rows
            .get(&i64::from(id))
            .and_then(|existing| existing.token().cloned())
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        let record = to_record(article, id, token)?;
        table.check_unique(article, Some(id))?;

        let stored = Article::from(record);
        table.rows.insert(i64::from(id), stored.clone());
        Ok(stored)
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleStore {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let table = lock(&self.inner, "article store")?;
        Ok(table.rows.get(&i64::from(id)).cloned())
    }

    async fn find_by_token(
        &self,
        owner: UserId,
        token: &ArticleToken,
    ) -> DomainResult<Option<Article>> {
        let table = lock(&self.inner, "article store")?;
        Ok(table
            .rows
            .values()
            .find(|a| a.owner() == Some(owner) && a.token() == Some(token))
            .cloned())
    }

    async fn find_by_urlname(
        &self,
        owner: UserId,
        urlname: &str,
    ) -> DomainResult<Option<Article>> {
        let table = lock(&self.inner, "article store")?;
        Ok(table
            .rows
            .values()
            .find(|a| a.owner() == Some(owner) && same_urlname(a.urlname(), urlname))
            .cloned())
    }

    async fn urlname_taken(
        &self,
        owner: UserId,
        urlname: &str,
        except: Option<ArticleId>,
    ) -> DomainResult<bool> {
        let table = lock(&self.inner, "article store")?;
        Ok(table.rows.values().any(|a| {
            a.owner() == Some(owner) && a.id() != except && same_urlname(a.urlname(), urlname)
        }))
    }

    async fn list(&self, filter: &ArticleFilter) -> DomainResult<Vec<Article>> {
        let table = lock(&self.inner, "article store")?;
        Ok(table
            .rows
            .values()
            .filter(|article| filter.matches(article))
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub struct InMemoryVersionStore {
    inner: Mutex<Vec<Version>>,
}

impl InMemoryVersionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VersionRepository for InMemoryVersionStore {
    async fn append(&self, version: NewVersion) -> DomainResult<Version> {
        let mut rows = lock(&self.inner, "version store")?;
        let number = rows
            .iter()
            .filter(|v| v.article_id == version.article_id)
            .map(|v| v.number)
            .max()
            .unwrap_or(0)
            + 1;
        let stored = Version {
            id: VersionId::new(rows.len() as i64 + 1)?,
            article_id: version.article_id,
            number,
            user_id: version.user_id,
            title: version.title,
            body: version.body,
            recorded_at: version.recorded_at,
        };
        rows.push(stored.clone());
        Ok(stored)
    }

    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<Version>> {
        let rows = lock(&self.inner, "version store")?;
        let mut versions: Vec<Version> = rows
            .iter()
            .filter(|v| v.article_id == article_id)
            .cloned()
            .collect();
        versions.sort_by_key(|v| v.number);
        Ok(versions)
    }
}

#[derive(Default)]
pub struct InMemoryCategoryStore {
    inner: Mutex<Vec<Category>>,
}

impl InMemoryCategoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryStore {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let mut rows = lock(&self.inner, "category store")?;
        let stored = Category {
            id: CategoryId::new(rows.len() as i64 + 1)?,
            name: category.name,
            urlname: category.urlname,
        };
        rows.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        let rows = lock(&self.inner, "category store")?;
        Ok(rows.iter().find(|c| c.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::ArticleStatus;
    use chrono::Utc;

    fn draft(owner: i64, token: &str, urlname: &str) -> Article {
        let mut article = Article::new(Some(UserId::new(owner).unwrap()));
        article
            .assign_identity(|| ArticleToken::parse(token))
            .unwrap();
        article.set_urlname(urlname);
        article.touch(Utc::now());
        article
    }

    #[tokio::test]
    async fn insert_assigns_ids_and_marks_persisted() {
        let store = InMemoryArticleStore::new();
        let saved = store.insert(&draft(1, "00000001", "a")).await.unwrap();
        assert_eq!(saved.id(), Some(ArticleId::new(1).unwrap()));
        assert!(!saved.status_changed());
        assert_eq!(store.len().unwrap(), 1);
    }

    #[tokio::test]
    async fn token_unique_per_owner() {
        let store = InMemoryArticleStore::new();
        store.insert(&draft(1, "00000001", "a")).await.unwrap();
        let err = store.insert(&draft(1, "00000001", "b")).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
        // another owner may reuse both
        store.insert(&draft(2, "00000001", "a")).await.unwrap();
    }

    #[tokio::test]
    async fn urlname_unique_per_owner_ignoring_case() {
        let store = InMemoryArticleStore::new();
        store.insert(&draft(1, "00000001", "my-post")).await.unwrap();
        let err = store
            .insert(&draft(1, "00000002", "My-Post"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
        assert!(
            store
                .urlname_taken(UserId::new(1).unwrap(), "MY-POST", None)
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn empty_urlnames_never_collide() {
        let store = InMemoryArticleStore::new();
        store.insert(&draft(1, "00000001", "")).await.unwrap();
        store.insert(&draft(1, "00000002", "")).await.unwrap();
        assert_eq!(store.len().unwrap(), 2);
    }

    #[tokio::test]
    async fn update_keeps_stored_token() {
        let store = InMemoryArticleStore::new();
        let mut saved = store.insert(&draft(1, "0000000a", "a")).await.unwrap();
        saved.set_status(ArticleStatus::Trash);
        let updated = store.update(&saved).await.unwrap();
        assert!(updated.is_trashed());
        assert_eq!(updated.token().unwrap().as_str(), "0000000a");
    }

    #[tokio::test]
    async fn ownerless_articles_are_rejected() {
        let store = InMemoryArticleStore::new();
        let mut article = Article::new(None);
        article
            .assign_identity(|| ArticleToken::parse("0000000b"))
            .unwrap();
        article.touch(Utc::now());
        let err = store.insert(&article).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn poisoned_store_reports_persistence_error() {
        let store = InMemoryArticleStore::new();
        let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = store.inner.lock().unwrap();
            panic!("writer died holding the lock");
        }));
        assert!(matches!(store.len(), Err(DomainError::Persistence(_))));
        assert!(store.is_empty().is_err());
    }
}
