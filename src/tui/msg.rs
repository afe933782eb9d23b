//! Application messages for the TUI.

/// All possible messages that can be sent in the TUI application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    // Application control
    Quit,
    ShowHelp,
    HideHelp,

    // Focus/Navigation
    FocusNext,
    FocusPrev,

    // A picker toggled an option or opened/closed its menu
    SelectionChanged,
}

/// Custom user events (currently unused, but required by tui-realm).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserEvent {}
