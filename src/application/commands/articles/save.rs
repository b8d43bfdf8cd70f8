// src/application/commands/articles/save.rs
use super::ArticleCommandService;
use crate::{application::error::ApplicationResult, domain::article::Article};

impl ArticleCommandService {
    /// Runs the save pipeline: assign identity (new records only), require
    /// and validate the urlname, stamp `published_at` on a transition into `publish`,
    /// stamp timestamps, then write. On success `article` is replaced by the
    /// stored copy; on failure nothing is written and no stamps are applied.
    pub async fn save(&self, article: &mut Article) -> ApplicationResult<()> {
        self.identity.assign(article)?;

        let checked = match self.urlnames.require_present(article) {
            Ok(()) => self.urlnames.validate(article).await,
            Err(err) => Err(err),
        };
        if let Err(err) = checked {
            tracing::warn!(
                error = %err,
                token = %article.public_id(),
                urlname = article.urlname().unwrap_or_default(),
                "article rejected by validation"
            );
            return Err(err.into());
        }

        let now = self.clock.now();
        let mut staged = article.clone();
        let newly_published = staged.apply_publish_timestamp(now);
        staged.touch(now);

        let saved = if staged.is_new_record() {
            let saved = self.write_repo.insert(&staged).await?;
            tracing::info!(
                article_id = ?saved.id(),
                token = %saved.public_id(),
                status = %saved.status(),
                "article created"
            );
            saved
        } else {
            let saved = self.write_repo.update(&staged).await?;
            tracing::debug!(article_id = ?saved.id(), status = %saved.status(), "article updated");
            saved
        };

        if newly_published {
            tracing::info!(
                article_id = ?saved.id(),
                published_at = %now,
                "article published"
            );
        }

        *article = saved;
        Ok(())
    }
}
