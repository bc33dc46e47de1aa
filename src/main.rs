mod cli;

use std::sync::Arc;

use clap::Parser;

use movietime::config::{Config, ConfigStore};
use movietime::logging::init_tracing;
use movietime::store::theme::DocumentTheme;
use movietime::AppContext;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();
    init_tracing(args.verbose);

    let path = args.config.clone().unwrap_or_else(Config::config_path);
    let config_store = ConfigStore::open(path)?;
    let mut config = config_store.get();
    if let Some(ref base_url) = args.base_url {
        config.api.base_url = base_url.clone();
        config.validate()?;
    }
    tracing::debug!(
        config = %config_store.path().display(),
        base_url = %config.api.base_url,
        "Configuration loaded"
    );

    let document = Arc::new(DocumentTheme::new());
    let ctx = AppContext::from_config(&config, document.clone())?;

    let output = cli::Output::new(args.json, document);
    cli::run(&ctx, &output, args.command).await
}
