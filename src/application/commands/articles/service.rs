// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
        services::ArticlePresenter,
    },
    domain::article::{
        Article, ArticleId, ArticleReadRepository, ArticleStatus, ArticleWriteRepository,
        VersionRepository,
        services::{ArticleIdentityService, ArticleUrlnameService},
    },
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) version_repo: Arc<dyn VersionRepository>,
    pub(super) identity: Arc<ArticleIdentityService>,
    pub(super) urlnames: Arc<ArticleUrlnameService>,
    pub(super) presenter: Arc<ArticlePresenter>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        version_repo: Arc<dyn VersionRepository>,
        identity: Arc<ArticleIdentityService>,
        urlnames: Arc<ArticleUrlnameService>,
        presenter: Arc<ArticlePresenter>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            version_repo,
            identity,
            urlnames,
            presenter,
            clock,
        }
    }

    pub(super) async fn load(&self, id: i64) -> ApplicationResult<Article> {
        let id = ArticleId::new(id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))
    }
}

pub(super) fn parse_status(value: &str) -> ApplicationResult<ArticleStatus> {
    value
        .parse::<ArticleStatus>()
        .map_err(|_| ApplicationError::validation(format!("unknown article status '{value}'")))
}
