pub mod entity;
pub mod filter;
pub mod repository;
pub mod services;
pub mod value_objects;
pub mod version;

pub use entity::{Article, ArticleRecord};
pub use filter::{ArticleFilter, StatusFilter};
pub use repository::{ArticleReadRepository, ArticleWriteRepository, VersionRepository};
pub use value_objects::{ArticleId, ArticleStatus, ArticleToken, urlname_is_well_formed};
pub use version::{NewVersion, Version, VersionId};
