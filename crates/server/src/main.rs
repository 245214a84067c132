// crates/server/src/main.rs
//! Daytrack server binary.
//!
//! Opens (and on first run seeds) the SQLite store, then serves the JSON API.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::Request;
use clap::Parser;
use daytrack_core::llm::{LlmConfig, LlmProvider, OpenAiCompatProvider};
use daytrack_db::Database;
use daytrack_server::{create_app, into_service, AppState, Cli};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "warn,daytrack=info,daytrack_server=info,daytrack_db=info";

#[tokio::main]
async fn main() -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .init();

    let cli = Cli::parse();

    let db = match &cli.db_path {
        Some(path) => Database::new(path).await,
        None => Database::open_default().await,
    }
    .context("failed to open database")?;

    if !cli.no_seed {
        db.seed_default_categories()
            .await
            .context("failed to seed default categories")?;
    }

    let llm_config = LlmConfig::from_env();
    tracing::info!(?llm_config, "LLM provider configured");
    let provider: Arc<dyn LlmProvider> = Arc::new(OpenAiCompatProvider::new(llm_config));

    let state = AppState::new(db, provider, cli.timezone);
    let app = into_service(create_app(state));

    let addr = cli.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, timezone = %cli.timezone, "daytrack listening");
    eprintln!("\n  daytrack v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("  \u{2192} http://{addr}/api\n");

    axum::serve(
        listener,
        axum::ServiceExt::<Request>::into_make_service(app),
    )
    .await?;

    Ok(())
}
