use std::sync::Arc;

use anyhow::Result;
use chef_main::cli::Cli;
use chef_main::config::{AppConfig, locale_env};
use chef_provider::PostgrestMenuSource;
use chef_services::MenuLoader;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    let config = AppConfig::resolve(&cli, &locale_env())?;

    let _guard = chef_tracker::init_tracing(&config.log_dir)?;
    tracing::info!(
        url = %config.provider.base_url,
        language = %config.language,
        "Starting chef-menu"
    );

    let source = Arc::new(PostgrestMenuSource::new(config.provider.clone())?);
    let loader = MenuLoader::new(source);

    if cli.print {
        chef_main::print::print(&loader, config.language, cli.json).await
    } else {
        chef_main::run::run(loader, config.language).await
    }
}
