//! TUI components using tui-realm.

pub mod help;
pub mod picker;

pub use help::{FOOTER_ACTIONS, format_footer, render_help};
pub use picker::PickerComponent;
