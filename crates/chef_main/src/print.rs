use anyhow::Context;
use chef_domain::{Language, MenuCategory, MenuSource, UiText};
use chef_services::MenuLoader;

/// Fetches the menu once and writes it to stdout.
pub async fn print<S: MenuSource>(
    loader: &MenuLoader<S>,
    language: Language,
    json: bool,
) -> anyhow::Result<()> {
    let categories = loader
        .load(language)
        .await
        .with_context(|| format!("Failed to load the {} menu", language.display_name()))?;

    let output = if json {
        serde_json::to_string_pretty(&categories).context("Failed to serialise the menu")?
    } else {
        render_text(language, &categories)
    };
    println!("{output}");
    Ok(())
}

/// Plain-text rendering of every category, in source order.
pub fn render_text(language: Language, categories: &[MenuCategory]) -> String {
    let title = UiText::MenuTitle.in_language(language);
    let mut lines = vec![title.to_string(), "=".repeat(title.chars().count())];

    if categories.is_empty() {
        lines.push(String::new());
        lines.push(UiText::EmptyMenu.in_language(language).to_string());
        return lines.join("\n");
    }

    for category in categories {
        lines.push(String::new());
        lines.push(format!("[{}]", category.name));
        for item in &category.items {
            lines.push(format!("  {} — {}", item.name, item.price));
            if !item.description.is_empty() {
                lines.push(format!("      {}", item.description));
            }
            if let Some(url) = &item.image_url {
                lines.push(format!("      {url}"));
            }
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chef_domain::{FetchError, MenuItem, Price};
    use pretty_assertions::assert_eq;

    use super::*;

    struct FailingSource;

    #[async_trait::async_trait]
    impl MenuSource for FailingSource {
        async fn fetch_menu(&self, _: Language) -> Result<Vec<MenuCategory>, FetchError> {
            Err(FetchError::Status { status: 503, body: "unavailable".into() })
        }
    }

    #[tokio::test]
    async fn test_print_propagates_fetch_failure() {
        let fixture = MenuLoader::new(Arc::new(FailingSource));

        let actual = print(&fixture, Language::Fr, false).await.unwrap_err();

        assert_eq!(actual.to_string(), "Failed to load the Français menu");
        assert!(matches!(
            actual.downcast_ref::<FetchError>(),
            Some(FetchError::Status { status: 503, .. })
        ));
    }

    #[test]
    fn test_render_text() {
        let fixture = vec![
            MenuCategory::new("c1", "Mains").item(MenuItem::new(
                "i1",
                "c1",
                Price::new(18.5).unwrap(),
                "Feijoada",
                "Black bean stew",
            )),
            MenuCategory::new("c2", "Desserts").item(
                MenuItem::new("i2", "c2", Price::new(4.0).unwrap(), "Brigadeiro", "")
                    .image_url("https://cdn/brigadeiro.jpg"),
            ),
        ];

        let actual = render_text(Language::En, &fixture);

        let expected = [
            "Menu",
            "====",
            "",
            "[Mains]",
            "  Feijoada — €18.50",
            "      Black bean stew",
            "",
            "[Desserts]",
            "  Brigadeiro — €4.00",
            "      https://cdn/brigadeiro.jpg",
        ]
        .join("\n");
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_render_text_empty() {
        let actual = render_text(Language::Pt, &[]);
        let expected = "Cardápio\n========\n\nOs pratos estarão disponíveis em breve.";
        assert_eq!(actual, expected);
    }
}
