use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use verse_explorer::context::ContextService;
use verse_explorer::scripture_api::ScriptureClient;
use verse_explorer::verses::VerseService;
use verse_explorer::{run_server, AppConfig, VerseLocator};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = AppConfig::from_env();
    if config.scripture.api_key.is_none() {
        tracing::warn!("API_BIBLE_KEY is not set; verse text requests will fail");
    }

    let locator = Arc::new(VerseLocator::standard()?);
    tracing::info!(
        "loaded canon with {} verses across {} books",
        locator.total_verses(),
        locator.book_ids().count()
    );

    let scripture = ScriptureClient::new(
        config.scripture.base_url.clone(),
        config.scripture.api_key.clone(),
    );
    let verses = VerseService::new(locator, scripture);
    let context = ContextService::from_config(&config.gemini);

    run_server(config, verses, context).await
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
