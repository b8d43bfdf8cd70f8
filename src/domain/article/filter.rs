// src/domain/article/filter.rs
use crate::domain::article::entity::Article;
use crate::domain::article::value_objects::ArticleStatus;
use crate::domain::category::CategoryId;
use crate::domain::user::UserId;

/// Status part of an article query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    Only(ArticleStatus),
    /// Default listing: everything except trashed articles.
    #[default]
    NotTrashed,
}

impl StatusFilter {
    /// Maps a selector such as `"publish"` onto a filter. Anything that is not
    /// exactly one of the three status names, including no selector at all,
    /// falls back to [`StatusFilter::NotTrashed`].
    pub fn from_selector(selector: Option<&str>) -> Self {
        match selector {
            Some("publish") => Self::Only(ArticleStatus::Publish),
            Some("draft") => Self::Only(ArticleStatus::Draft),
            Some("trash") => Self::Only(ArticleStatus::Trash),
            _ => Self::NotTrashed,
        }
    }

    pub fn matches(&self, status: ArticleStatus) -> bool {
        match self {
            Self::Only(expected) => status == *expected,
            Self::NotTrashed => status != ArticleStatus::Trash,
        }
    }
}

/// Composable predicate over stored articles. Repositories evaluate it either
/// in memory ([`ArticleFilter::matches`]) or by translating it to SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ArticleFilter {
    pub owner: Option<UserId>,
    pub category: Option<CategoryId>,
    pub status: StatusFilter,
}

impl ArticleFilter {
    pub fn by_status(selector: Option<&str>) -> Self {
        Self {
            status: StatusFilter::from_selector(selector),
            ..Self::default()
        }
    }

    pub fn owned_by(mut self, owner: UserId) -> Self {
        self.owner = Some(owner);
        self
    }

    pub fn in_category(mut self, category: CategoryId) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    pub fn matches(&self, article: &Article) -> bool {
        if let Some(owner) = self.owner {
            if article.owner() != Some(owner) {
                return false;
            }
        }
        if let Some(category) = self.category {
            if article.category_id() != Some(category) {
                return false;
            }
        }
        self.status.matches(article.status())
    }
}
