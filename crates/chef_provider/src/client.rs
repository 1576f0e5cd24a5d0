use anyhow::Context;
use chef_domain::{FetchError, Language, MenuCategory, MenuSource};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Client, Url};
use tracing::{debug, warn};

use crate::ProviderConfig;
use crate::dto::{into_categories, parse_categories};

const CATEGORIES_PATH: &str = "rest/v1/menu_categories";

/// Embeds translations with `!inner` so rows lacking the requested language
/// are excluded by the server.
const MENU_SELECT: &str = "id,menu_category_translations!inner(name),\
menu_items(id,price,image_url,menu_item_translations!inner(name,description))";

/// [`MenuSource`] backed by a PostgREST (Supabase) table store.
pub struct PostgrestMenuSource {
    client: Client,
    config: ProviderConfig,
}

impl PostgrestMenuSource {
    pub fn new(config: ProviderConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers(&config)?)
            .build()
            .context("Failed to build HTTP client for the menu service")?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    fn menu_url(&self, language: Language) -> Result<Url, FetchError> {
        let mut url = self
            .config
            .rest_root()
            .join(CATEGORIES_PATH)
            .map_err(FetchError::transport)?;
        let filter = format!("eq.{}", language.code());
        url.query_pairs_mut()
            .append_pair("select", MENU_SELECT)
            .append_pair("menu_category_translations.language", &filter)
            .append_pair("menu_items.menu_item_translations.language", &filter);
        Ok(url)
    }
}

fn default_headers(config: &ProviderConfig) -> anyhow::Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    if let Some(key) = &config.api_key {
        headers.insert(
            "apikey",
            HeaderValue::from_str(key).context("API key contains invalid header characters")?,
        );
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {key}"))
                .context("API key contains invalid header characters")?,
        );
    }
    Ok(headers)
}

#[async_trait::async_trait]
impl MenuSource for PostgrestMenuSource {
    async fn fetch_menu(&self, language: Language) -> Result<Vec<MenuCategory>, FetchError> {
        let url = self.menu_url(language)?;
        debug!(%url, language = %language, "Requesting menu");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(FetchError::transport)?;

        let status = response.status();
        let body = response.text().await.map_err(FetchError::transport)?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "Menu service rejected the query");
            return Err(FetchError::Status { status: status.as_u16(), body });
        }

        let categories = into_categories(parse_categories(&body)?)?;
        debug!(categories = categories.len(), "Menu rows converted");
        Ok(categories)
    }
}
