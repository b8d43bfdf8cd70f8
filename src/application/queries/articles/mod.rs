// src/application/queries/articles/mod.rs
mod category;
mod list;
mod lookup;
mod service;
mod versions;

pub use list::ListArticlesQuery;
pub use lookup::{GetArticleByTokenQuery, GetArticleByUrlnameQuery};
pub use service::ArticleQueryService;
pub use versions::ListVersionsQuery;
