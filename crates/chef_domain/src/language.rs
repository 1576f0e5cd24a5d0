use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Languages the menu can be resolved in.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    IntoStaticStr,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Fr,
    Pt,
}

impl Language {
    /// Two-letter code sent to the data source
    pub fn code(&self) -> &'static str {
        self.into()
    }

    /// Name of the language written in that language
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Fr => "Français",
            Language::Pt => "Português",
        }
    }

    /// Next language in the fixed selector order, wrapping around.
    pub fn next(&self) -> Language {
        let all: Vec<Language> = Language::iter().collect();
        let pos = all.iter().position(|l| l == self).unwrap_or(0);
        all[(pos + 1) % all.len()]
    }

    /// Resolves a POSIX locale string such as `fr_FR.UTF-8` or `pt-BR`.
    pub fn from_locale(locale: &str) -> Option<Language> {
        let prefix: String = locale
            .chars()
            .take_while(|c| c.is_ascii_alphabetic())
            .collect();
        if prefix.len() < 2 {
            return None;
        }
        prefix[..2].parse().ok()
    }

    /// Picks the first locale that maps to a supported language and falls
    /// back to English.
    pub fn detect<'a>(locales: impl IntoIterator<Item = &'a str>) -> Language {
        locales
            .into_iter()
            .find_map(Language::from_locale)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_language_code() {
        let actual: Vec<&str> = Language::iter().map(|l| l.code()).collect();
        let expected = vec!["en", "fr", "pt"];
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_language_from_str_ignores_case() {
        let actual = Language::from_str("FR").unwrap();
        let expected = Language::Fr;
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_language_next_wraps() {
        assert_eq!(Language::En.next(), Language::Fr);
        assert_eq!(Language::Fr.next(), Language::Pt);
        assert_eq!(Language::Pt.next(), Language::En);
    }

    #[test]
    fn test_from_locale() {
        assert_eq!(Language::from_locale("fr_FR.UTF-8"), Some(Language::Fr));
        assert_eq!(Language::from_locale("pt-BR"), Some(Language::Pt));
        assert_eq!(Language::from_locale("de_DE"), None);
        assert_eq!(Language::from_locale("C"), None);
        assert_eq!(Language::from_locale(""), None);
    }

    #[test]
    fn test_detect_skips_unsupported_locales() {
        let fixture = ["", "de_DE.UTF-8", "pt_PT.UTF-8"];
        let actual = Language::detect(fixture);
        let expected = Language::Pt;
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_detect_falls_back_to_english() {
        let actual = Language::detect(["C", "POSIX"]);
        let expected = Language::En;
        assert_eq!(actual, expected);
    }
}
