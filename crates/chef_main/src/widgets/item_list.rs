use chef_domain::MenuItem;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style, Stylize};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, StatefulWidget};

/// Items of the visible category, one two-line entry each.
pub struct ItemList<'a> {
    items: &'a [MenuItem],
}

impl<'a> ItemList<'a> {
    pub fn new(items: &'a [MenuItem]) -> Self {
        Self { items }
    }

    fn render_item(item: &'a MenuItem) -> ListItem<'a> {
        // A marker stands in for the thumbnail; items without one have no
        // image affordance.
        let marker = if item.image_url.is_some() {
            Span::styled("▣ ", Style::default().fg(Color::Yellow))
        } else {
            Span::from("  ")
        };

        let title = Line::from(vec![
            marker,
            Span::styled(item.name.as_str(), Style::default().cyan().bold()),
            Span::from(" — ").dark_gray(),
            Span::styled(item.price.to_string(), Style::default().green()),
        ]);
        let description = Line::from(vec![
            Span::from("  "),
            Span::styled(item.description.as_str(), Style::default().dim()),
        ]);

        ListItem::new(Text::from(vec![title, description]))
    }
}

impl StatefulWidget for ItemList<'_> {
    type State = ListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let items = self.items.iter().map(Self::render_item).collect::<Vec<_>>();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .padding(Padding::horizontal(1)),
            )
            .highlight_style(Style::default().bg(Color::DarkGray))
            .highlight_symbol("› ");

        StatefulWidget::render(list, area, buf, state);
    }
}
