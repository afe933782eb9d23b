//! Multi-selection picker for ratatui.
//!
//! A [`MultiPicker`] presents a list of values and keeps the chosen subset in
//! a [`Binding`] owned by the caller. How the picker looks is decided by the
//! [`MultiPickerStyle`] found in the [`Environment`] it is drawn with: a
//! checkbox list, a chip cloud, an inline list or a menu.

pub mod binding;
pub mod cli;
pub mod cli_args;
pub mod config;
pub mod configuration;
pub mod environment;
pub mod flow;
pub mod identity;
pub mod logging;
pub mod picker;
pub mod render;
pub mod style;
pub mod theme;
pub mod tui;

pub use binding::Binding;
pub use configuration::{Configuration, PickerOption};
pub use environment::Environment;
pub use flow::{Arrangement, FlowLayout, Measure};
pub use identity::AnyHashable;
pub use picker::{MultiPicker, toggle_membership};
pub use style::{
    AnyMultiPickerStyle, Body, CheckboxStyle, ChipsStyle, Element, InlineListStyle, Interaction,
    MenuStyle, MultiPickerStyle, Role, StyleContext, StyleKind,
};
pub use theme::Theme;
