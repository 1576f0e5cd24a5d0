mod action;
mod command;
mod state;
mod update;
mod update_key_event;

pub use action::*;
pub use command::*;
pub use state::*;
pub use update::*;
pub use update_key_event::*;
