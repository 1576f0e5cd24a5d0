//! Row shapes returned by the `menu_categories` query and their conversion
//! into the domain tree.

use std::collections::HashSet;

use chef_domain::{CategoryId, FetchError, ItemId, MenuCategory, MenuItem, Price};
use serde::Deserialize;

/// Primary keys may be uuids or serial integers depending on the schema.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawId {
    Text(String),
    Number(i64),
}

impl RawId {
    fn into_string(self) -> String {
        match self {
            RawId::Text(text) => text,
            RawId::Number(number) => number.to_string(),
        }
    }
}

/// `numeric` columns can be configured to serialise as strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawPrice {
    Number(f64),
    Text(String),
}

impl RawPrice {
    fn into_price(self) -> Result<Price, FetchError> {
        let amount = match self {
            RawPrice::Number(number) => number,
            RawPrice::Text(text) => text
                .trim()
                .parse::<f64>()
                .map_err(|_| FetchError::shape(format!("price {text:?} is not a number")))?,
        };
        Price::new(amount)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct CategoryTranslationRow {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ItemTranslationRow {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ItemRow {
    pub id: RawId,
    pub price: RawPrice,
    pub image_url: Option<String>,
    pub menu_item_translations: Vec<ItemTranslationRow>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CategoryRow {
    pub id: RawId,
    pub menu_category_translations: Vec<CategoryTranslationRow>,
    pub menu_items: Vec<ItemRow>,
}

pub(crate) fn parse_categories(body: &str) -> Result<Vec<CategoryRow>, FetchError> {
    serde_json::from_str(body).map_err(FetchError::shape)
}

/// Flattens rows into the domain tree. Rows without a translation are
/// dropped; ordering is preserved.
pub(crate) fn into_categories(rows: Vec<CategoryRow>) -> Result<Vec<MenuCategory>, FetchError> {
    let mut seen = HashSet::new();
    let mut categories = Vec::with_capacity(rows.len());

    for row in rows {
        let Some(translation) = row.menu_category_translations.into_iter().next() else {
            continue;
        };
        let id = CategoryId::new(row.id.into_string());
        if !seen.insert(id.clone()) {
            return Err(FetchError::shape(format!("duplicate category id {id}")));
        }

        let items = into_items(&id, row.menu_items)?;
        categories.push(MenuCategory { id, name: translation.name, items });
    }

    Ok(categories)
}

fn into_items(category_id: &CategoryId, rows: Vec<ItemRow>) -> Result<Vec<MenuItem>, FetchError> {
    let mut seen = HashSet::new();
    let mut items = Vec::with_capacity(rows.len());

    for row in rows {
        let Some(translation) = row.menu_item_translations.into_iter().next() else {
            continue;
        };
        let id = ItemId::new(row.id.into_string());
        if !seen.insert(id.clone()) {
            return Err(FetchError::shape(format!(
                "duplicate item id {id} in category {category_id}"
            )));
        }

        items.push(MenuItem {
            id,
            category_id: category_id.clone(),
            price: row.price.into_price()?,
            image_url: row.image_url.filter(|url| !url.trim().is_empty()),
            name: translation.name,
            description: translation.description,
        });
    }

    Ok(items)
}
