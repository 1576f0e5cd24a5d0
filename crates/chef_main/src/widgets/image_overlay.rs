use chef_domain::{Language, UiText};
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style, Stylize};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph, Widget, Wrap};

/// Modal showing the enlarged image. A terminal cannot draw the bitmap, so
/// the overlay carries the image location and the close affordance.
pub struct ImageOverlay<'a> {
    url: &'a str,
    language: Language,
}

impl<'a> ImageOverlay<'a> {
    pub fn new(url: &'a str, language: Language) -> Self {
        Self { url, language }
    }
}

impl Widget for ImageOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [area] = Layout::vertical([Constraint::Percentage(50)])
            .flex(Flex::Center)
            .areas(area);
        let [area] = Layout::horizontal([Constraint::Percentage(80)])
            .flex(Flex::Center)
            .areas(area);

        Clear.render(area, buf);

        let block = Block::bordered()
            .title(format!(" {} ", UiText::ImageTitle.in_language(self.language)))
            .title_style(Style::default().bold())
            .title_bottom(
                Line::from(format!(" [x] {} ", UiText::CloseImage.in_language(self.language)))
                    .right_aligned(),
            )
            .border_style(Style::default().fg(Color::Yellow));

        Paragraph::new(self.url)
            .block(block)
            .wrap(Wrap { trim: false })
            .centered()
            .render(area, buf);
    }
}
