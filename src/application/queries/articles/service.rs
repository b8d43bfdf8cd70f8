// src/application/queries/articles/service.rs
use std::sync::Arc;

use crate::{
    application::services::ArticlePresenter,
    domain::article::{ArticleReadRepository, VersionRepository},
};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) version_repo: Arc<dyn VersionRepository>,
    pub(super) presenter: Arc<ArticlePresenter>,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        version_repo: Arc<dyn VersionRepository>,
        presenter: Arc<ArticlePresenter>,
    ) -> Self {
        Self {
            read_repo,
            version_repo,
            presenter,
        }
    }
}
