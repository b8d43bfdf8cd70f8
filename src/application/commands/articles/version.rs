// src/application/commands/articles/version.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::VersionDto, error::ApplicationResult},
    domain::{
        article::{Article, Version},
        user::UserId,
    },
};

pub struct CreateVersionCommand {
    pub article_id: i64,
    /// User credited with the snapshot; defaults to the article's owner.
    pub user_id: Option<i64>,
}

impl ArticleCommandService {
    pub async fn create_version(&self, command: CreateVersionCommand) -> ApplicationResult<VersionDto> {
        let user = command.user_id.map(UserId::new).transpose()?;
        let article = self.load(command.article_id).await?;
        let version = self.record_version(&article, user).await?;
        Ok(version.into())
    }

    /// Appends a snapshot of the article's current in-memory title and body.
    /// The article itself is not modified, and identical consecutive
    /// snapshots are kept.
    pub async fn record_version(
        &self,
        article: &Article,
        user: Option<UserId>,
    ) -> ApplicationResult<Version> {
        let new_version = article.build_version(user, self.clock.now())?;
        let version = self.version_repo.append(new_version).await?;
        tracing::info!(
            article_id = %version.article_id,
            number = version.number,
            user_id = %version.user_id,
            "article version recorded"
        );
        Ok(version)
    }
}
