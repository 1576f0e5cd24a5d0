use chef_domain::{Language, UiText};
use ratatui::layout::Alignment;
use ratatui::style::{Color, Style, Stylize};
use ratatui::text::{Line, Span};
use strum::IntoEnumIterator;

const KEY_HINTS: &str = "←/→ category  ↑/↓ item  enter photo  x close  l language  r retry  q quit";

/// Bottom line: language selector plus either the last error or key hints.
pub struct StatusBar<'a> {
    language: Language,
    notice: Option<&'a str>,
}

impl<'a> StatusBar<'a> {
    pub fn new(language: Language, notice: Option<&'a str>) -> Self {
        Self { language, notice }
    }
}

impl<'a> From<StatusBar<'a>> for Line<'a> {
    fn from(value: StatusBar<'a>) -> Self {
        let separator = Span::styled(" | ", Style::default().fg(Color::DarkGray));
        let mut spans = vec![
            Span::from(" "),
            Span::from(format!("{}: ", UiText::LanguageLabel.in_language(value.language))).dim(),
        ];

        for (index, language) in Language::iter().enumerate() {
            let label = format!(" {} {} ", index + 1, language.display_name());
            if language == value.language {
                spans.push(Span::from(label).bg(Color::Green).fg(Color::Black));
            } else {
                spans.push(Span::from(label).fg(Color::Gray));
            }
        }

        spans.push(separator);
        match value.notice {
            Some(notice) => spans.push(Span::from(notice.to_string()).fg(Color::Red)),
            None => spans.push(Span::from(KEY_HINTS).dim()),
        }

        Line::from(spans).alignment(Alignment::Left)
    }
}
