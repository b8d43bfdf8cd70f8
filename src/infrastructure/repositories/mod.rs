// src/infrastructure/repositories/mod.rs
mod error;
mod memory;
mod sqlite_article;
mod sqlite_category;
mod sqlite_version;

pub use error::map_sqlx;
pub use memory::{InMemoryArticleStore, InMemoryCategoryStore, InMemoryVersionStore};
pub use sqlite_article::{SqliteArticleReadRepository, SqliteArticleWriteRepository};
pub use sqlite_category::SqliteCategoryRepository;
pub use sqlite_version::SqliteVersionRepository;
