use chef_services::MenuResponse;
use ratatui::crossterm::event::KeyEvent;

/// Inputs to the update loop.
#[derive(Debug)]
pub enum Action {
    Initialize,
    Tick,
    Key(KeyEvent),
    MenuLoaded(MenuResponse),
}

impl From<KeyEvent> for Action {
    fn from(value: KeyEvent) -> Self {
        Action::Key(value)
    }
}

impl From<MenuResponse> for Action {
    fn from(value: MenuResponse) -> Self {
        Action::MenuLoaded(value)
    }
}
