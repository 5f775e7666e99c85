//! Application state module

mod app_state;
mod editor;
mod picker;
mod question;

pub use app_state::*;
pub use editor::*;
pub use picker::*;
pub use question::*;
