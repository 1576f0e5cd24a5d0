use std::fmt;

use derive_more::{Deref, Display, From};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};

use crate::{FetchError, Language};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, From, Deref, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    pub fn new(id: impl ToString) -> Self {
        Self(id.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, From, Deref, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl ToString) -> Self {
        Self(id.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Display-only amount in euros. Never used for arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    pub fn new(amount: f64) -> Result<Self, FetchError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(FetchError::shape(format!("invalid price {amount}")));
        }
        Ok(Self(amount))
    }

    pub fn amount(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "€{:.2}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Setters, Serialize, Deserialize)]
#[setters(into, strip_option)]
pub struct MenuItem {
    pub id: ItemId,
    pub category_id: CategoryId,
    pub price: Price,
    pub image_url: Option<String>,
    pub name: String,
    pub description: String,
}

impl MenuItem {
    pub fn new(
        id: impl ToString,
        category_id: impl ToString,
        price: Price,
        name: impl ToString,
        description: impl ToString,
    ) -> Self {
        Self {
            id: ItemId::new(id),
            category_id: CategoryId::new(category_id),
            price,
            image_url: None,
            name: name.to_string(),
            description: description.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuCategory {
    pub id: CategoryId,
    pub name: String,
    pub items: Vec<MenuItem>,
}

impl MenuCategory {
    pub fn new(id: impl ToString, name: impl ToString) -> Self {
        Self { id: CategoryId::new(id), name: name.to_string(), items: Vec::new() }
    }

    /// Appends an item, rewriting its back-reference to this category.
    pub fn item(mut self, item: MenuItem) -> Self {
        self.items.push(MenuItem { category_id: self.id.clone(), ..item });
        self
    }

    pub fn find_item(&self, id: &ItemId) -> Option<&MenuItem> {
        self.items.iter().find(|item| &item.id == id)
    }
}

/// Category tree resolved in a single language. Rebuilt wholesale on every
/// successful fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct Menu {
    pub language: Language,
    pub categories: Vec<MenuCategory>,
}

impl Menu {
    pub fn new(language: Language, categories: Vec<MenuCategory>) -> Self {
        Self { language, categories }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn first(&self) -> Option<&MenuCategory> {
        self.categories.first()
    }

    pub fn category(&self, id: &CategoryId) -> Option<&MenuCategory> {
        self.categories.iter().find(|category| &category.id == id)
    }

    pub fn contains_image(&self, url: &str) -> bool {
        self.categories
            .iter()
            .flat_map(|category| category.items.iter())
            .any(|item| item.image_url.as_deref() == Some(url))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn fixture_menu() -> Menu {
        Menu::new(
            Language::En,
            vec![
                MenuCategory::new("c1", "Mains").item(
                    MenuItem::new("i1", "", Price::new(18.5).unwrap(), "Feijoada", "Black bean stew")
                        .image_url("https://cdn.example/feijoada.jpg"),
                ),
                MenuCategory::new("c2", "Desserts"),
            ],
        )
    }

    #[test]
    fn test_price_display_two_decimals() {
        let actual = Price::new(18.5).unwrap().to_string();
        let expected = "€18.50";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_price_rejects_negative_and_nan() {
        assert!(Price::new(-0.01).is_err());
        assert!(Price::new(f64::NAN).is_err());
        assert!(Price::new(0.0).is_ok());
    }

    #[test]
    fn test_category_item_sets_back_reference() {
        let menu = fixture_menu();
        let actual = menu.categories[0].items[0].category_id.clone();
        let expected = CategoryId::new("c1");
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_menu_lookup() {
        let menu = fixture_menu();
        assert_eq!(menu.first().map(|c| c.name.as_str()), Some("Mains"));
        assert_eq!(
            menu.category(&CategoryId::new("c2")).map(|c| c.name.as_str()),
            Some("Desserts")
        );
        assert_eq!(menu.category(&CategoryId::new("missing")), None);
    }

    #[test]
    fn test_contains_image() {
        let menu = fixture_menu();
        assert!(menu.contains_image("https://cdn.example/feijoada.jpg"));
        assert!(!menu.contains_image("https://cdn.example/other.jpg"));
    }
}
