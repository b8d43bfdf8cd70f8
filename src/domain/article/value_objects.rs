// src/domain/article/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr, sync::LazyLock};

/// Allowed shape of a non-empty urlname.
pub const URLNAME_PATTERN: &str = r"^[A-Za-z0-9-]+$";

/// Number of random bytes behind a token; rendered as twice as many hex digits.
pub const TOKEN_BYTES: usize = 4;

static URLNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(URLNAME_PATTERN).expect("valid urlname regex"));

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9a-f]{8}$").expect("valid token regex"));

pub fn urlname_is_well_formed(value: &str) -> bool {
    URLNAME_RE.is_match(value)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleId(pub i64);

impl ArticleId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "article id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ArticleId> for i64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque public address of an article: eight lowercase hex digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ArticleToken(String);

impl ArticleToken {
    pub fn parse(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if !TOKEN_RE.is_match(&value) {
            return Err(DomainError::Validation(format!(
                "token '{value}' must be eight lowercase hex digits"
            )));
        }
        Ok(Self(value))
    }

    pub fn from_bytes(bytes: [u8; TOKEN_BYTES]) -> Self {
        let hex = bytes.iter().map(|b| format!("{b:02x}")).collect();
        Self(hex)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ArticleToken {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<ArticleToken> for String {
    fn from(value: ArticleToken) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    #[default]
    Draft,
    Publish,
    Trash,
}

impl ArticleStatus {
    pub const ALL: [ArticleStatus; 3] = [Self::Draft, Self::Publish, Self::Trash];

    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleStatus::Draft => "draft",
            ArticleStatus::Publish => "publish",
            ArticleStatus::Trash => "trash",
        }
    }
}

impl fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArticleStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(ArticleStatus::Draft),
            "publish" => Ok(ArticleStatus::Publish),
            "trash" => Ok(ArticleStatus::Trash),
            other => Err(DomainError::Validation(format!(
                "unknown article status '{other}'"
            ))),
        }
    }
}
