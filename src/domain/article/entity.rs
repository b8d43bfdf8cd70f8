// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleId, ArticleStatus, ArticleToken};
use crate::domain::article::version::NewVersion;
use crate::domain::category::CategoryId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

/// A user's article: editable content, a publication status and the stable
/// identifiers (token, urlname) it is addressed by.
///
/// Raw stored values are kept untouched; the display fallbacks (`title`,
/// `urlname`) are applied at read time only.
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    id: Option<ArticleId>,
    user_id: Option<UserId>,
    category_id: Option<CategoryId>,
    title: Option<String>,
    body: Option<String>,
    urlname: Option<String>,
    status: ArticleStatus,
    save_count: i64,
    published_at: Option<DateTime<Utc>>,
    token: Option<ArticleToken>,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
    // status as of the last successful save; `None` for new records
    persisted_status: Option<ArticleStatus>,
}

/// Column values exactly as the storage layer holds them for a saved article.
#[derive(Debug, Clone)]
pub struct ArticleRecord {
    pub id: ArticleId,
    pub user_id: UserId,
    pub category_id: Option<CategoryId>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub urlname: Option<String>,
    pub status: ArticleStatus,
    pub save_count: i64,
    pub published_at: Option<DateTime<Utc>>,
    pub token: ArticleToken,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ArticleRecord> for Article {
    fn from(record: ArticleRecord) -> Self {
        Self {
            id: Some(record.id),
            user_id: Some(record.user_id),
            category_id: record.category_id,
            title: record.title,
            body: record.body,
            urlname: record.urlname,
            status: record.status,
            save_count: record.save_count,
            published_at: record.published_at,
            token: Some(record.token),
            created_at: Some(record.created_at),
            updated_at: Some(record.updated_at),
            persisted_status: Some(record.status),
        }
    }
}

impl Article {
    /// A fresh, unsaved draft.
    pub fn new(owner: Option<UserId>) -> Self {
        Self {
            id: None,
            user_id: owner,
            category_id: None,
            title: None,
            body: None,
            urlname: None,
            status: ArticleStatus::default(),
            save_count: 0,
            published_at: None,
            token: None,
            created_at: None,
            updated_at: None,
            persisted_status: None,
        }
    }

    pub fn id(&self) -> Option<ArticleId> {
        self.id
    }

    pub fn is_new_record(&self) -> bool {
        self.id.is_none()
    }

    pub fn owner(&self) -> Option<UserId> {
        self.user_id
    }

    pub fn set_owner(&mut self, owner: UserId) {
        self.user_id = Some(owner);
    }

    pub fn category_id(&self) -> Option<CategoryId> {
        self.category_id
    }

    pub fn set_category(&mut self, category: Option<CategoryId>) {
        self.category_id = category;
    }

    pub fn raw_title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Stored title, or `untitled` when the stored value is absent or blank.
    pub fn title<'a>(&'a self, untitled: &'a str) -> &'a str {
        match self.title.as_deref() {
            Some(title) if !title.trim().is_empty() => title,
            _ => untitled,
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    pub fn set_body(&mut self, body: impl Into<String>) {
        self.body = Some(body.into());
    }

    pub fn raw_urlname(&self) -> Option<&str> {
        self.urlname.as_deref()
    }

    /// Stored urlname; an empty stored value reads as absent.
    pub fn urlname(&self) -> Option<&str> {
        self.urlname.as_deref().filter(|value| !value.is_empty())
    }

    pub fn set_urlname(&mut self, urlname: impl Into<String>) {
        self.urlname = Some(urlname.into());
    }

    pub fn clear_urlname(&mut self) {
        self.urlname = None;
    }

    pub fn status(&self) -> ArticleStatus {
        self.status
    }

    pub fn set_status(&mut self, status: ArticleStatus) {
        self.status = status;
    }

    pub fn is_published(&self) -> bool {
        self.status == ArticleStatus::Publish
    }

    pub fn is_draft(&self) -> bool {
        self.status == ArticleStatus::Draft
    }

    pub fn is_trashed(&self) -> bool {
        self.status == ArticleStatus::Trash
    }

    /// Whether the status differs from the one last written to storage.
    pub fn status_changed(&self) -> bool {
        self.persisted_status != Some(self.status)
    }

    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        self.published_at
    }

    pub fn save_count(&self) -> i64 {
        self.save_count
    }

    pub fn token(&self) -> Option<&ArticleToken> {
        self.token.as_ref()
    }

    /// The token as the external address of the article; empty while unassigned.
    pub fn public_id(&self) -> String {
        self.token
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default()
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Fills in a missing token (from `generate`) and a missing urlname (from
    /// the token) on a record that has never been saved. Existing values are
    /// never overwritten. Returns whether anything changed.
    pub fn assign_identity<F>(&mut self, generate: F) -> DomainResult<bool>
    where
        F: FnOnce() -> DomainResult<ArticleToken>,
    {
        if !self.is_new_record() {
            return Ok(false);
        }

        let mut changed = false;
        if self.token.is_none() {
            self.token = Some(generate()?);
            changed = true;
        }

        if self.urlname().is_none() {
            if let Some(token) = &self.token {
                self.urlname = Some(token.to_string());
                changed = true;
            }
        }

        Ok(changed)
    }

    /// Stamps `published_at` when the status has just become `publish`.
    /// Returns whether the stamp was applied.
    pub fn apply_publish_timestamp(&mut self, now: DateTime<Utc>) -> bool {
        if self.status_changed() && self.is_published() {
            self.published_at = Some(now);
            true
        } else {
            false
        }
    }

    pub fn touch(&mut self, now: DateTime<Utc>) {
        if self.created_at.is_none() {
            self.created_at = Some(now);
        }
        self.updated_at = Some(now);
    }

    /// Snapshot of the current raw title and body, credited to `user` or, when
    /// none is given, to the article's owner.
    pub fn build_version(
        &self,
        user: Option<UserId>,
        now: DateTime<Utc>,
    ) -> DomainResult<NewVersion> {
        let user_id = user.or(self.user_id).ok_or(DomainError::MissingOwner)?;
        let article_id = self.id.ok_or_else(|| {
            DomainError::Validation("article must be saved before recording a version".into())
        })?;

        Ok(NewVersion {
            article_id,
            user_id,
            title: self.title.clone(),
            body: self.body.clone(),
            recorded_at: now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn owner() -> UserId {
        UserId::new(1).unwrap()
    }

    fn saved_article(status: ArticleStatus) -> Article {
        let now = Utc::now();
        Article::from(ArticleRecord {
            id: ArticleId::new(10).unwrap(),
            user_id: owner(),
            category_id: None,
            title: Some("A".into()),
            body: Some("B".into()),
            urlname: Some("a-post".into()),
            status,
            save_count: 0,
            published_at: None,
            token: ArticleToken::parse("0badf00d").unwrap(),
            created_at: now,
            updated_at: now,
        })
    }

    fn fixed_token() -> DomainResult<ArticleToken> {
        ArticleToken::parse("c0ffee01")
    }

    #[test]
    fn new_article_defaults() {
        let article = Article::new(Some(owner()));
        assert!(article.is_new_record());
        assert!(article.is_draft());
        assert_eq!(article.save_count(), 0);
        assert!(article.published_at().is_none());
        assert!(article.token().is_none());
        assert_eq!(article.public_id(), "");
    }

    #[test]
    fn title_falls_back_for_blank_values() {
        let mut article = Article::new(Some(owner()));
        assert_eq!(article.title("Untitled"), "Untitled");
        article.set_title("");
        assert_eq!(article.title("Untitled"), "Untitled");
        article.set_title("   \t");
        assert_eq!(article.title("Untitled"), "Untitled");
        assert_eq!(article.raw_title(), Some("   \t"));
        article.set_title(" Hello ");
        assert_eq!(article.title("Untitled"), " Hello ");
    }

    #[test]
    fn empty_urlname_reads_as_absent() {
        let mut article = Article::new(Some(owner()));
        article.set_urlname("");
        assert_eq!(article.urlname(), None);
        assert_eq!(article.raw_urlname(), Some(""));
        article.set_urlname("my-post");
        assert_eq!(article.urlname(), Some("my-post"));
    }

    #[test]
    fn assign_identity_fills_token_and_urlname() {
        let mut article = Article::new(Some(owner()));
        assert!(article.assign_identity(fixed_token).unwrap());
        assert_eq!(article.token().unwrap().as_str(), "c0ffee01");
        assert_eq!(article.urlname(), Some("c0ffee01"));
        assert_eq!(article.public_id(), "c0ffee01");
    }

    #[test]
    fn assign_identity_keeps_explicit_urlname() {
        let mut article = Article::new(Some(owner()));
        article.set_urlname("hello");
        article.assign_identity(fixed_token).unwrap();
        assert_eq!(article.urlname(), Some("hello"));
    }

    #[test]
    fn assign_identity_replaces_empty_urlname() {
        let mut article = Article::new(Some(owner()));
        article.set_urlname("");
        article.assign_identity(fixed_token).unwrap();
        assert_eq!(article.urlname(), Some("c0ffee01"));
    }

    #[test]
    fn assign_identity_is_idempotent() {
        let mut article = Article::new(Some(owner()));
        article.assign_identity(fixed_token).unwrap();
        let before = article.clone();
        let changed = article
            .assign_identity(|| panic!("generator must not run twice"))
            .unwrap();
        assert!(!changed);
        assert_eq!(article, before);
    }

    #[test]
    fn assign_identity_skips_saved_records() {
        let mut article = saved_article(ArticleStatus::Draft);
        article.clear_urlname();
        assert!(!article.assign_identity(fixed_token).unwrap());
        assert_eq!(article.urlname(), None);
        assert_eq!(article.token().unwrap().as_str(), "0badf00d");
    }

    #[test]
    fn assign_identity_surfaces_generator_failure() {
        let mut article = Article::new(Some(owner()));
        let err = article
            .assign_identity(|| Err(DomainError::IdentityGeneration("no entropy".into())))
            .unwrap_err();
        assert!(matches!(err, DomainError::IdentityGeneration(_)));
        assert!(article.token().is_none());
        assert!(article.urlname().is_none());
    }

    #[test]
    fn publish_stamp_only_on_transition_into_publish() {
        let mut article = saved_article(ArticleStatus::Draft);
        let now = Utc::now();
        assert!(!article.apply_publish_timestamp(now));
        assert!(article.published_at().is_none());

        article.set_status(ArticleStatus::Publish);
        assert!(article.apply_publish_timestamp(now));
        assert_eq!(article.published_at(), Some(now));
    }

    #[test]
    fn already_published_is_not_restamped() {
        let mut article = saved_article(ArticleStatus::Publish);
        let now = Utc::now();
        assert!(!article.apply_publish_timestamp(now));
        assert!(article.published_at().is_none());
    }

    #[test]
    fn leaving_publish_keeps_timestamp() {
        let mut article = saved_article(ArticleStatus::Draft);
        let first = Utc::now();
        article.set_status(ArticleStatus::Publish);
        article.apply_publish_timestamp(first);

        let mut reloaded = Article::from(ArticleRecord {
            status: ArticleStatus::Publish,
            published_at: article.published_at(),
            ..record_of(&article)
        });
        reloaded.set_status(ArticleStatus::Trash);
        assert!(!reloaded.apply_publish_timestamp(first + Duration::seconds(5)));
        assert_eq!(reloaded.published_at(), Some(first));
        assert!(reloaded.is_trashed());
    }

    #[test]
    fn new_article_created_as_published_is_stamped() {
        let mut article = Article::new(Some(owner()));
        article.set_status(ArticleStatus::Publish);
        let now = Utc::now();
        assert!(article.apply_publish_timestamp(now));
        assert_eq!(article.published_at(), Some(now));
    }

    #[test]
    fn touch_sets_created_once() {
        let mut article = Article::new(Some(owner()));
        let first = Utc::now();
        article.touch(first);
        let later = first + Duration::seconds(30);
        article.touch(later);
        assert_eq!(article.created_at(), Some(first));
        assert_eq!(article.updated_at(), Some(later));
    }

    #[test]
    fn build_version_copies_raw_content() {
        let mut article = saved_article(ArticleStatus::Draft);
        article.set_title("");
        let now = Utc::now();
        let version = article.build_version(None, now).unwrap();
        assert_eq!(version.title.as_deref(), Some(""));
        assert_eq!(version.body.as_deref(), Some("B"));
        assert_eq!(version.user_id, owner());
        assert_eq!(version.recorded_at, now);
    }

    #[test]
    fn build_version_prefers_override_user() {
        let article = saved_article(ArticleStatus::Draft);
        let editor = UserId::new(2).unwrap();
        let version = article.build_version(Some(editor), Utc::now()).unwrap();
        assert_eq!(version.user_id, editor);
    }

    #[test]
    fn build_version_without_any_user_fails() {
        let article = Article::new(None);
        let err = article.build_version(None, Utc::now()).unwrap_err();
        assert!(matches!(err, DomainError::MissingOwner));
    }

    #[test]
    fn set_owner_satisfies_version_author_check() {
        let mut article = Article::new(None);
        article.set_owner(owner());
        assert_eq!(article.owner(), Some(owner()));
        let err = article.build_version(None, Utc::now()).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn build_version_requires_saved_article() {
        let article = Article::new(Some(owner()));
        let err = article.build_version(None, Utc::now()).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    fn record_of(article: &Article) -> ArticleRecord {
        ArticleRecord {
            id: article.id().unwrap(),
            user_id: article.owner().unwrap(),
            category_id: article.category_id(),
            title: article.raw_title().map(str::to_owned),
            body: article.body().map(str::to_owned),
            urlname: article.raw_urlname().map(str::to_owned),
            status: article.status(),
            save_count: article.save_count(),
            published_at: article.published_at(),
            token: article.token().cloned().unwrap(),
            created_at: article.created_at().unwrap(),
            updated_at: article.updated_at().unwrap(),
        }
    }
}
