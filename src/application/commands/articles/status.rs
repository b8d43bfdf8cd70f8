// src/application/commands/articles/status.rs
use super::{ArticleCommandService, service::parse_status};
use crate::application::{dto::ArticleDto, error::ApplicationResult};

pub struct SetStatusCommand {
    pub id: i64,
    pub status: String,
}

impl ArticleCommandService {
    /// Moves an article to any status; every transition is allowed.
    pub async fn set_status(&self, command: SetStatusCommand) -> ApplicationResult<ArticleDto> {
        let status = parse_status(&command.status)?;
        let mut article = self.load(command.id).await?;

        if article.status() != status {
            tracing::debug!(
                article_id = command.id,
                from = %article.status(),
                to = %status,
                "changing article status"
            );
        }
        article.set_status(status);

        self.save(&mut article).await?;
        self.presenter.present(&article).await
    }
}
