// src/application/commands/articles/mod.rs
mod create;
mod save;
mod service;
mod status;
mod update;
mod version;

pub use create::{CreateArticleCommand, CreateArticleCommandBuilder};
pub use service::ArticleCommandService;
pub use status::SetStatusCommand;
pub use update::UpdateArticleCommand;
pub use version::CreateVersionCommand;
