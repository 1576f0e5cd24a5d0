use chef_domain::{Language, MenuPhase, MenuRender, UiText};
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style, Stylize};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph, StatefulWidget, Tabs, Widget, Wrap};
use throbber_widgets_tui::{BRAILLE_SIX, Throbber};

use crate::domain::State;
use crate::widgets::image_overlay::ImageOverlay;
use crate::widgets::item_list::ItemList;
use crate::widgets::status_bar::StatusBar;

#[derive(Clone, Default)]
pub struct App;

fn centered_line(area: Rect) -> Rect {
    let [area] = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .areas(area);
    area
}

fn render_message(lines: Vec<Line<'_>>, area: Rect, buf: &mut Buffer) {
    let height = lines.len() as u16;
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    Paragraph::new(lines)
        .centered()
        .wrap(Wrap { trim: true })
        .render(area, buf);
}

impl StatefulWidget for App {
    type State = State;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut State) {
        // Nothing is on screen while loading, so the chrome follows the request.
        let language: Language = match state.view.phase() {
            MenuPhase::Loading => state.view.requested_language(),
            _ => state.view.language(),
        };
        let [body_area, status_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);

        let body_block = Block::bordered()
            .title(Line::from(format!(" {} ", UiText::MenuTitle.in_language(language))).centered())
            .title_style(Style::default().bold().fg(Color::Green))
            .border_style(Style::default().fg(Color::Blue));
        let inner = body_block.inner(body_area);
        body_block.render(body_area, buf);

        let mut notice = None;
        match state.view.render_model() {
            MenuRender::Loading => {
                let [spinner_area] = Layout::horizontal([Constraint::Length(32)])
                    .flex(Flex::Center)
                    .areas(centered_line(inner));
                let throbber = Throbber::default()
                    .label(UiText::Loading.in_language(language))
                    .throbber_set(BRAILLE_SIX)
                    .throbber_style(Style::default().fg(Color::Green));
                StatefulWidget::render(throbber, spinner_area, buf, &mut state.spinner);
            }
            MenuRender::Failed { message } => {
                render_message(
                    vec![
                        Line::from(UiText::LoadFailed.in_language(language)).bold(),
                        Line::from(message.to_string()).dim(),
                        Line::from(UiText::RetryHint.in_language(language)).fg(Color::Yellow),
                    ],
                    inner,
                    buf,
                );
            }
            MenuRender::Empty { notice: last_error } => {
                notice = last_error;
                render_message(
                    vec![Line::from(UiText::EmptyMenu.in_language(language)).dim()],
                    inner,
                    buf,
                );
            }
            MenuRender::Ready { tabs, category, overlay, notice: last_error } => {
                notice = last_error;
                let [tabs_area, list_area] =
                    Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(inner);

                let selected = tabs.iter().position(|tab| tab.active).unwrap_or(0);
                Tabs::new(tabs.iter().map(|tab| tab.name.to_string()))
                    .select(selected)
                    .style(Style::default().fg(Color::Blue))
                    .highlight_style(Style::default().bg(Color::Green).fg(Color::Black).bold())
                    .divider("|")
                    .render(tabs_area, buf);

                ItemList::new(&category.items).render(list_area, buf, &mut state.items);

                if let Some(url) = overlay {
                    ImageOverlay::new(url, language).render(inner, buf);
                }
            }
        }

        Paragraph::new(Line::from(StatusBar::new(language, notice))).render(status_area, buf);
    }
}
