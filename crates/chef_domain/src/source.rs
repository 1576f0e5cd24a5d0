use crate::{FetchError, Language, MenuCategory};

/// Remote store holding categories, items and their per-language
/// translations.
///
/// Implementations must resolve every category and item in `language` only,
/// excluding rows that have no translation for it, and must keep the store's
/// ordering.
#[async_trait::async_trait]
pub trait MenuSource: Send + Sync {
    async fn fetch_menu(&self, language: Language) -> Result<Vec<MenuCategory>, FetchError>;
}
