use chef_domain::{Language, OverlayTarget};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::domain::{Command, State};

/// While the image overlay is open it swallows every key except quit.
fn handle_overlay(state: &mut State, key_event: KeyEvent) -> Option<Command> {
    state.view.selected_image()?;

    match key_event.code {
        KeyCode::Esc => state.view.overlay_click(OverlayTarget::Backdrop),
        KeyCode::Char('x') => state.view.overlay_click(OverlayTarget::CloseButton),
        KeyCode::Enter | KeyCode::Char(' ') => state.view.overlay_click(OverlayTarget::Content),
        _ => {}
    }
    Some(Command::Empty)
}

fn handle_language(state: &mut State, key_event: KeyEvent) -> Option<Command> {
    let language = match key_event.code {
        KeyCode::Char('l') => state.view.requested_language().next(),
        KeyCode::Char('1') => Language::En,
        KeyCode::Char('2') => Language::Fr,
        KeyCode::Char('3') => Language::Pt,
        KeyCode::Char('r') => {
            let language = state.view.requested_language();
            return Some(state.load(language));
        }
        _ => return None,
    };
    Some(state.switch_language(language))
}

fn handle_tab_navigation(state: &mut State, key_event: KeyEvent) -> bool {
    let delta = match key_event.code {
        KeyCode::Left | KeyCode::BackTab => -1,
        KeyCode::Right | KeyCode::Tab => 1,
        _ => return false,
    };
    if state.view.step_tab(delta) {
        state.reset_cursor();
    }
    true
}

fn handle_item_navigation(state: &mut State, key_event: KeyEvent) {
    match key_event.code {
        KeyCode::Up => state.move_cursor(-1),
        KeyCode::Down => state.move_cursor(1),
        KeyCode::Enter => {
            if let Some(item_id) = state.highlighted_item().cloned() {
                state.view.open_image(&item_id);
            }
        }
        _ => {}
    }
}

pub fn handle_key_event(state: &mut State, key_event: KeyEvent) -> Command {
    if key_event.kind == KeyEventKind::Release {
        return Command::Empty;
    }

    if key_event.code == KeyCode::Char('c') && key_event.modifiers.contains(KeyModifiers::CONTROL)
    {
        return Command::Exit;
    }
    if key_event.code == KeyCode::Char('q') {
        return Command::Exit;
    }

    if let Some(command) = handle_overlay(state, key_event) {
        return command;
    }

    if let Some(command) = handle_language(state, key_event) {
        return command;
    }

    if !handle_tab_navigation(state, key_event) {
        handle_item_navigation(state, key_event);
    }
    Command::Empty
}
