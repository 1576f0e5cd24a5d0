use std::time::Duration;

use derive_setters::Setters;
use url::Url;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for the PostgREST endpoint that serves the menu
/// tables.
#[derive(Debug, Clone, Setters)]
#[setters(into, strip_option)]
pub struct ProviderConfig {
    /// Project root, e.g. `https://xyz.supabase.co`. The REST prefix is
    /// appended by the client.
    pub base_url: Url,
    /// Anonymous key sent as `apikey` and bearer token.
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl ProviderConfig {
    pub fn new(base_url: Url) -> Self {
        Self { base_url, api_key: None, timeout: DEFAULT_TIMEOUT }
    }

    /// Root with a guaranteed trailing slash so relative joins keep any path
    /// prefix.
    pub(crate) fn rest_root(&self) -> Url {
        let mut url = self.base_url.clone();
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_rest_root_appends_slash() {
        let fixture = ProviderConfig::new(Url::parse("https://menu.example/proxy").unwrap());
        let actual = fixture.rest_root().to_string();
        let expected = "https://menu.example/proxy/";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_setters() {
        let fixture = ProviderConfig::new(Url::parse("https://menu.example").unwrap())
            .api_key("anon")
            .timeout(Duration::from_secs(5));
        assert_eq!(fixture.api_key.as_deref(), Some("anon"));
        assert_eq!(fixture.timeout, Duration::from_secs(5));
    }
}
