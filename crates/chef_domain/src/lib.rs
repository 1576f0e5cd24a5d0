mod error;
mod i18n;
mod language;
mod menu;
mod request;
mod source;
mod view;

pub use error::*;
pub use i18n::*;
pub use language::*;
pub use menu::*;
pub use request::*;
pub use source::*;
pub use view::*;
