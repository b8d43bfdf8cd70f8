// src/domain/article/services/mod.rs
mod identity;
mod urlname;

pub use identity::ArticleIdentityService;
pub use urlname::ArticleUrlnameService;
