use scrivener_core::application::{
    ports::{locale::Localizer, random::TokenGenerator, time::Clock},
    queries::articles::ListArticlesQuery,
    services::ApplicationServices,
};
use scrivener_core::config::AppConfig;
use scrivener_core::domain::{
    article::{ArticleReadRepository, ArticleStatus, ArticleWriteRepository, VersionRepository},
    category::CategoryRepository,
};
use scrivener_core::infrastructure::{
    database,
    locale::StaticLocalizer,
    random::OsTokenGenerator,
    repositories::{
        SqliteArticleReadRepository, SqliteArticleWriteRepository, SqliteCategoryRepository,
        SqliteVersionRepository,
    },
    time::SystemClock,
};
use anyhow::Result;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

/// Opens the store, applies migrations and logs how many articles sit in
/// each status.
async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url(), config.database_max_connections()).await?;
    database::run_migrations(&pool).await?;
    tracing::info!(database_url = config.database_url(), "database ready");

    let article_write_repo: Arc<dyn ArticleWriteRepository> =
        Arc::new(SqliteArticleWriteRepository::new(pool.clone()));
    let article_read_repo: Arc<dyn ArticleReadRepository> =
        Arc::new(SqliteArticleReadRepository::new(pool.clone()));
    let version_repo: Arc<dyn VersionRepository> =
        Arc::new(SqliteVersionRepository::new(pool.clone()));
    let category_repo: Arc<dyn CategoryRepository> =
        Arc::new(SqliteCategoryRepository::new(pool.clone()));

    let token_generator: Arc<dyn TokenGenerator> = Arc::new(OsTokenGenerator);
    let localizer: Arc<dyn Localizer> = Arc::new(StaticLocalizer::new(config.locale())?);
    tracing::info!(locale = localizer.locale(), "message catalog loaded");
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let services = ApplicationServices::new(
        article_write_repo,
        article_read_repo,
        version_repo,
        category_repo,
        token_generator,
        localizer,
        clock,
    );

    let visible = services
        .article_queries
        .list_articles(ListArticlesQuery::default())
        .await?;
    tracing::info!(count = visible.len(), "articles visible by default");

    for status in ArticleStatus::ALL {
        let articles = services
            .article_queries
            .list_articles(ListArticlesQuery {
                status: Some(status.as_str().to_owned()),
                ..Default::default()
            })
            .await?;
        tracing::info!(status = %status, count = articles.len(), "articles by status");
    }

    pool.close().await;
    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
