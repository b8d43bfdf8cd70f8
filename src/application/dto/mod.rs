pub mod articles;

pub use articles::{ArticleDto, VersionDto};
