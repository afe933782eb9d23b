//! Component identifiers for the TUI.

use crate::style::StyleKind;

/// Unique identifiers for all components in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Id {
    /// One picker per built-in style, all over the same selection.
    Picker(StyleKind),
}
