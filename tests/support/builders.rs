// tests/support/builders.rs
use std::sync::Arc;

use scrivener_core::application::ports::{
    locale::Localizer, random::TokenGenerator, time::Clock,
};
use scrivener_core::application::services::ApplicationServices;
use scrivener_core::domain::article::{
    ArticleReadRepository, ArticleWriteRepository, VersionRepository,
};
use scrivener_core::domain::category::CategoryRepository;
use scrivener_core::infrastructure::{
    database,
    locale::StaticLocalizer,
    repositories::{
        InMemoryArticleStore, InMemoryCategoryStore, InMemoryVersionStore,
        SqliteArticleReadRepository, SqliteArticleWriteRepository, SqliteCategoryRepository,
        SqliteVersionRepository,
    },
};
use sqlx::SqlitePool;

use super::mocks::{FixedClock, SequentialTokens};

/// Services wired against in-memory stores, with handles on each store.
pub struct Harness {
    pub services: ApplicationServices,
    pub articles: Arc<InMemoryArticleStore>,
    pub versions: Arc<InMemoryVersionStore>,
    pub categories: Arc<InMemoryCategoryStore>,
    pub clock: Arc<FixedClock>,
}

pub struct HarnessBuilder {
    tokens: Arc<dyn TokenGenerator>,
    locale: &'static str,
    clock: Option<Arc<dyn Clock>>,
}

impl Harness {
    pub fn builder() -> HarnessBuilder {
        HarnessBuilder {
            tokens: Arc::new(SequentialTokens::default()),
            locale: "en",
            clock: None,
        }
    }

    pub fn new() -> Self {
        Self::builder().build()
    }
}

impl HarnessBuilder {
    pub fn tokens(mut self, tokens: impl TokenGenerator + 'static) -> Self {
        self.tokens = Arc::new(tokens);
        self
    }

    pub fn locale(mut self, locale: &'static str) -> Self {
        self.locale = locale;
        self
    }

    /// Replaces the fixed clock used by the services; `Harness::clock` is
    /// then unused.
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Arc::new(clock));
        self
    }

    pub fn build(self) -> Harness {
        let articles = Arc::new(InMemoryArticleStore::new());
        let versions = Arc::new(InMemoryVersionStore::new());
        let categories = Arc::new(InMemoryCategoryStore::new());
        let fixed = Arc::new(FixedClock::default());
        let clock: Arc<dyn Clock> = match self.clock {
            Some(clock) => clock,
            None => fixed.clone() as Arc<dyn Clock>,
        };
        let localizer: Arc<dyn Localizer> =
            Arc::new(StaticLocalizer::new(self.locale).expect("supported locale"));

        let services = ApplicationServices::new(
            articles.clone() as Arc<dyn ArticleWriteRepository>,
            articles.clone() as Arc<dyn ArticleReadRepository>,
            versions.clone() as Arc<dyn VersionRepository>,
            categories.clone() as Arc<dyn CategoryRepository>,
            self.tokens,
            localizer,
            clock,
        );

        Harness {
            services,
            articles,
            versions,
            categories,
            clock: fixed,
        }
    }
}

/// Services wired against a private in-memory SQLite database.
pub struct SqliteHarness {
    pub services: ApplicationServices,
    pub pool: SqlitePool,
    pub write_repo: Arc<SqliteArticleWriteRepository>,
    pub read_repo: Arc<SqliteArticleReadRepository>,
    pub categories: Arc<SqliteCategoryRepository>,
    pub clock: Arc<FixedClock>,
}

pub async fn sqlite_harness() -> SqliteHarness {
    // one connection: every `sqlite::memory:` connection is its own database
    let pool = database::init_pool("sqlite::memory:", 1)
        .await
        .expect("open in-memory sqlite");
    database::run_migrations(&pool)
        .await
        .expect("apply migrations");

    let write_repo = Arc::new(SqliteArticleWriteRepository::new(pool.clone()));
    let read_repo = Arc::new(SqliteArticleReadRepository::new(pool.clone()));
    let versions = Arc::new(SqliteVersionRepository::new(pool.clone()));
    let categories = Arc::new(SqliteCategoryRepository::new(pool.clone()));
    let clock = Arc::new(FixedClock::default());

    let services = ApplicationServices::new(
        write_repo.clone() as Arc<dyn ArticleWriteRepository>,
        read_repo.clone() as Arc<dyn ArticleReadRepository>,
        versions as Arc<dyn VersionRepository>,
        categories.clone() as Arc<dyn CategoryRepository>,
        Arc::new(SequentialTokens::default()),
        Arc::new(StaticLocalizer::default()),
        clock.clone() as Arc<dyn Clock>,
    );

    SqliteHarness {
        services,
        pool,
        write_repo,
        read_repo,
        categories,
        clock,
    }
}
