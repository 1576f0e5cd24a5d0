use chef_domain::LoadOutcome;
use tracing::debug;

use crate::domain::{Action, Command, State, handle_key_event};

pub fn update(state: &mut State, action: impl Into<Action>) -> Command {
    match action.into() {
        Action::Initialize => {
            let language = state.view.requested_language();
            state.load(language)
        }
        Action::Tick => {
            state.spinner.calc_next();
            Command::Empty
        }
        Action::Key(key_event) => handle_key_event(state, key_event),
        Action::MenuLoaded(response) => {
            let before = state.view.active_tab().cloned();
            match state.view.complete_load(response.request_id, response.result) {
                LoadOutcome::Applied => {
                    if state.view.active_tab() != before.as_ref()
                        || state.highlighted_item().is_none()
                    {
                        state.reset_cursor();
                    }
                }
                LoadOutcome::Stale => debug!(
                    request_id = %response.request_id,
                    language = %response.language,
                    "Discarding superseded menu response"
                ),
            }
            Command::Empty
        }
    }
}
