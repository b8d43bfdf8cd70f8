// src/application/services/mod.rs
mod presenter;

use std::sync::Arc;

use crate::{
    application::{
        commands::articles::ArticleCommandService,
        ports::{locale::Localizer, random::TokenGenerator, time::Clock},
        queries::articles::ArticleQueryService,
    },
    domain::{
        article::{
            ArticleReadRepository, ArticleWriteRepository, VersionRepository,
            services::{ArticleIdentityService, ArticleUrlnameService},
        },
        category::CategoryRepository,
    },
};

pub use presenter::ArticlePresenter;

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        version_repo: Arc<dyn VersionRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        token_generator: Arc<dyn TokenGenerator>,
        localizer: Arc<dyn Localizer>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let identity = Arc::new(ArticleIdentityService::new(Arc::clone(&token_generator)));
        let urlnames = Arc::new(ArticleUrlnameService::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&localizer),
        ));
        let presenter = Arc::new(ArticlePresenter::new(
            Arc::clone(&category_repo),
            Arc::clone(&localizer),
        ));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&version_repo),
            identity,
            urlnames,
            Arc::clone(&presenter),
            Arc::clone(&clock),
        ));

        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&version_repo),
            presenter,
        ));

        Self {
            article_commands,
            article_queries,
        }
    }
}
