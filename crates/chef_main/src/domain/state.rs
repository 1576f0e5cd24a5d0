use chef_domain::{ItemId, Language, MenuItem, MenuView};
use ratatui::widgets::ListState;
use throbber_widgets_tui::ThrobberState;

use crate::domain::Command;

#[derive(Debug, Clone)]
pub struct State {
    pub view: MenuView,
    /// Cursor inside the visible category's item list
    pub items: ListState,
    pub spinner: ThrobberState,
}

impl State {
    pub fn new(language: Language) -> Self {
        Self {
            view: MenuView::new(language),
            items: ListState::default().with_selected(Some(0)),
            spinner: ThrobberState::default(),
        }
    }

    /// Starts a fetch for `language` and returns the command that runs it.
    pub fn load(&mut self, language: Language) -> Command {
        let request_id = self.view.begin_load(language);
        Command::FetchMenu { request_id, language }
    }

    /// Re-fetches only when `language` differs from the latest request.
    pub fn switch_language(&mut self, language: Language) -> Command {
        if language == self.view.requested_language() {
            return Command::Empty;
        }
        self.load(language)
    }

    pub fn visible_items(&self) -> &[MenuItem] {
        self.view
            .active_category()
            .map(|category| category.items.as_slice())
            .unwrap_or_default()
    }

    pub fn highlighted_item(&self) -> Option<&ItemId> {
        let index = self.items.selected()?;
        self.visible_items().get(index).map(|item| &item.id)
    }

    pub fn reset_cursor(&mut self) {
        self.items.select(Some(0));
    }

    /// Moves the item cursor by `delta`, wrapping at both ends.
    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.visible_items().len() as isize;
        if len == 0 {
            return;
        }
        let current = self.items.selected().unwrap_or(0) as isize;
        let next = (current + delta).rem_euclid(len) as usize;
        self.items.select(Some(next));
    }
}
