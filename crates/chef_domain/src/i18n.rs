use strum_macros::EnumIter;

use crate::Language;

/// Static interface strings. Menu content itself always comes from the data
/// source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum UiText {
    MenuTitle,
    Loading,
    EmptyMenu,
    LoadFailed,
    RetryHint,
    ImageTitle,
    CloseImage,
    LanguageLabel,
}

impl UiText {
    pub fn in_language(&self, language: Language) -> &'static str {
        use Language::*;
        use UiText::*;

        match (self, language) {
            (MenuTitle, En) => "Menu",
            (MenuTitle, Fr) => "Menu",
            (MenuTitle, Pt) => "Cardápio",

            (Loading, En) => "Loading menu…",
            (Loading, Fr) => "Chargement du menu…",
            (Loading, Pt) => "Carregando o cardápio…",

            (EmptyMenu, En) => "Menu items will be available soon.",
            (EmptyMenu, Fr) => "Les plats seront bientôt disponibles.",
            (EmptyMenu, Pt) => "Os pratos estarão disponíveis em breve.",

            (LoadFailed, En) => "The menu could not be loaded.",
            (LoadFailed, Fr) => "Le menu n'a pas pu être chargé.",
            (LoadFailed, Pt) => "Não foi possível carregar o cardápio.",

            (RetryHint, En) => "Press r to try again",
            (RetryHint, Fr) => "Appuyez sur r pour réessayer",
            (RetryHint, Pt) => "Pressione r para tentar novamente",

            (ImageTitle, En) => "Menu item",
            (ImageTitle, Fr) => "Plat",
            (ImageTitle, Pt) => "Prato",

            (CloseImage, En) => "Esc to close",
            (CloseImage, Fr) => "Échap pour fermer",
            (CloseImage, Pt) => "Esc para fechar",

            (LanguageLabel, En) => "Language",
            (LanguageLabel, Fr) => "Langue",
            (LanguageLabel, Pt) => "Idioma",
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_every_text_is_translated() {
        for text in UiText::iter() {
            for language in Language::iter() {
                assert!(!text.in_language(language).is_empty(), "{text:?} / {language}");
            }
        }
    }

    #[test]
    fn test_empty_menu_english() {
        let actual = UiText::EmptyMenu.in_language(Language::En);
        let expected = "Menu items will be available soon.";
        assert_eq!(actual, expected);
    }
}
