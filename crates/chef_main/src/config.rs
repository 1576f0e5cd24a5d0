use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use chef_domain::Language;
use chef_provider::ProviderConfig;
use url::Url;

use crate::cli::Cli;

/// Locale variables consulted, in order, when no language is given.
pub const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub provider: ProviderConfig,
    pub language: Language,
    pub log_dir: PathBuf,
}

impl AppConfig {
    /// Resolves the run configuration. `locales` are the values of
    /// [`LOCALE_VARS`] that are set, in precedence order.
    pub fn resolve(cli: &Cli, locales: &[String]) -> anyhow::Result<Self> {
        let raw_url = cli
            .url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .context("No menu service configured. Pass --url or set CHEF_MENU_URL.")?;
        let base_url =
            Url::parse(raw_url).with_context(|| format!("Invalid menu service URL: {raw_url}"))?;

        let mut provider =
            ProviderConfig::new(base_url).timeout(Duration::from_secs(cli.timeout.max(1)));
        if let Some(key) = cli.api_key.as_deref().filter(|key| !key.is_empty()) {
            provider = provider.api_key(key);
        }

        let language = cli
            .language
            .unwrap_or_else(|| Language::detect(locales.iter().map(String::as_str)));

        let log_dir = cli.log_dir.clone().unwrap_or_else(default_log_dir);

        Ok(Self { provider, language, log_dir })
    }
}

pub fn locale_env() -> Vec<String> {
    LOCALE_VARS
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .collect()
}

fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("chef-menu")
        .join("logs")
}
