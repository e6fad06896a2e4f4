use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

use lexi_core::{JsonProgressStore, ProgressStore, SystemClock};
use lexi_server::config::ConfigManager;
use lexi_server::dataset::Dataset;
use lexi_server::dictionary::{DictionaryService, HttpFetcher};
use lexi_server::{AppState, routes};

#[derive(Parser)]
#[command(name = "lexi", version, about = "Vocabulary learning server")]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listening port
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let manager = match &cli.config {
        Some(path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new(),
    };
    let mut config = manager.load()?;
    config.apply_cli_overrides(cli.port);

    let dataset = Arc::new(Dataset::load(
        &config.data.vocabulary_path,
        &config.data.grammar_path,
    )?);

    let progress: Arc<dyn ProgressStore> = Arc::new(
        JsonProgressStore::open(&config.data.progress_path)
            .context("Failed to open progress store")?,
    );

    let fetcher = Arc::new(HttpFetcher::new(&config.fetch).context("Failed to build HTTP client")?);
    let dictionary = Arc::new(DictionaryService::new(
        fetcher,
        config.cache.to_cache_config(),
        &config.fetch,
    ));
    let sweepers = dictionary.spawn_sweepers();

    let state = AppState::new(
        dataset,
        dictionary.clone(),
        progress,
        Arc::new(SystemClock),
    );
    let app = routes::router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    log::info!("listening on {addr}");

    axum::serve(listener, app).await.context("Server error")?;

    dictionary.stop_sweepers().await;
    for handle in sweepers {
        handle.abort();
    }
    Ok(())
}

fn init_logging(debug: bool) {
    let level = if debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}
