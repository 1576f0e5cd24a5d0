use std::sync::Arc;
use std::time::Instant;

use chef_domain::{FetchError, Language, MenuCategory, MenuSource, RequestId};
use tracing::{error, info};

/// Result of one tagged fetch, ready to be handed back to the view.
#[derive(Debug)]
pub struct MenuResponse {
    pub request_id: RequestId,
    pub language: Language,
    pub result: Result<Vec<MenuCategory>, FetchError>,
}

/// Loads the menu for a language with exactly one attempt per call. Failures
/// are logged here and returned to the caller, never retried.
pub struct MenuLoader<S> {
    source: Arc<S>,
}

impl<S> Clone for MenuLoader<S> {
    fn clone(&self) -> Self {
        Self { source: self.source.clone() }
    }
}

impl<S: MenuSource> MenuLoader<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    pub async fn load(&self, language: Language) -> Result<Vec<MenuCategory>, FetchError> {
        let started = Instant::now();
        let result = self.source.fetch_menu(language).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match &result {
            Ok(categories) => info!(
                language = %language,
                categories = categories.len(),
                items = categories.iter().map(|c| c.items.len()).sum::<usize>(),
                elapsed_ms,
                "Menu loaded"
            ),
            Err(err) => error!(language = %language, elapsed_ms, error = %err, "Error fetching menu"),
        }

        result
    }

    pub async fn load_tagged(&self, request_id: RequestId, language: Language) -> MenuResponse {
        MenuResponse { request_id, language, result: self.load(language).await }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use chef_domain::{MenuItem, Price};
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Default)]
    struct FakeSource {
        calls: AtomicUsize,
        fail: bool,
    }

    #[async_trait::async_trait]
    impl MenuSource for FakeSource {
        async fn fetch_menu(&self, language: Language) -> Result<Vec<MenuCategory>, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(FetchError::Status { status: 503, body: "unavailable".into() });
            }
            let name = match language {
                Language::En => "Mains",
                Language::Fr => "Plats",
                Language::Pt => "Pratos principais",
            };
            Ok(vec![MenuCategory::new("c1", name).item(MenuItem::new(
                "i1",
                "c1",
                Price::new(18.5).unwrap(),
                "Feijoada",
                "...",
            ))])
        }
    }

    #[tokio::test]
    async fn test_load_returns_source_result() {
        let fixture = MenuLoader::new(Arc::new(FakeSource::default()));

        let actual = fixture.load(Language::Fr).await.unwrap();

        assert_eq!(actual[0].name, "Plats");
    }

    #[tokio::test]
    async fn test_load_does_not_retry() {
        let source = Arc::new(FakeSource { fail: true, ..Default::default() });
        let fixture = MenuLoader::new(source.clone());

        let actual = fixture.load(Language::En).await;

        assert!(matches!(actual, Err(FetchError::Status { status: 503, .. })));
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_load_tagged_carries_request_and_language() {
        let fixture = MenuLoader::new(Arc::new(FakeSource::default()));

        let actual = fixture.load_tagged(RequestId::new(3), Language::Pt).await;

        assert_eq!(actual.request_id, RequestId::new(3));
        assert_eq!(actual.language, Language::Pt);
        assert_eq!(actual.result.unwrap()[0].name, "Pratos principais");
    }
}
