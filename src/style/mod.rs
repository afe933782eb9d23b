//! Picker styles.
//!
//! A style turns a [`Configuration`] into a [`Body`]. The picker never knows
//! which style it is drawn with; it reads the active one from the
//! [`Environment`](crate::environment::Environment) it is rendered in.

mod body;
mod checkbox;
mod chips;
mod inline_list;
mod menu;

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::configuration::Configuration;
use crate::theme::Theme;

pub use body::{Body, Element, Role, line_width};
pub(crate) use body::{cells, into_spans};
pub use checkbox::CheckboxStyle;
pub use chips::ChipsStyle;
pub use inline_list::InlineListStyle;
pub use menu::MenuStyle;

/// Focus and popover state owned by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Interaction {
    /// Option drawn with the highlight style.
    pub highlighted: Option<usize>,
    /// Whether a menu style shows its options.
    pub expanded: bool,
}

/// Everything besides the configuration that a style may look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleContext {
    /// Width offered by the parent, in cells.
    pub width: u16,
    pub interaction: Interaction,
    pub theme: Theme,
}

impl StyleContext {
    pub fn new(width: u16) -> Self {
        Self {
            width,
            interaction: Interaction::default(),
            theme: Theme::default(),
        }
    }

    pub fn with_interaction(mut self, interaction: Interaction) -> Self {
        self.interaction = interaction;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub(crate) fn is_highlighted(&self, index: usize) -> bool {
        self.interaction.highlighted == Some(index)
    }
}

/// A presentation of a multi-selection picker.
///
/// `make_body` must depend only on its arguments. The only side effect a
/// style may cause is through [`PickerOption::toggle`](crate::PickerOption::toggle),
/// and only in response to input handled by the host.
pub trait MultiPickerStyle: Send + Sync + 'static {
    fn make_body(&self, configuration: &Configuration, context: &StyleContext) -> Body;
}

/// Type-erased style stored in an environment.
#[derive(Clone)]
pub struct AnyMultiPickerStyle {
    inner: Arc<dyn MultiPickerStyle>,
    name: &'static str,
}

impl AnyMultiPickerStyle {
    pub fn new<S: MultiPickerStyle>(style: S) -> Self {
        Self {
            inner: Arc::new(style),
            name: std::any::type_name::<S>(),
        }
    }

    /// Type name of the wrapped style.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn make_body(&self, configuration: &Configuration, context: &StyleContext) -> Body {
        self.inner.make_body(configuration, context).into_container()
    }
}

impl fmt::Debug for AnyMultiPickerStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AnyMultiPickerStyle").field(&self.name).finish()
    }
}

impl Default for AnyMultiPickerStyle {
    fn default() -> Self {
        Self::new(MenuStyle)
    }
}

/// The built-in styles, selectable by name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleKind {
    Checkbox,
    Chips,
    InlineList,
    #[default]
    Menu,
}

impl StyleKind {
    pub const ALL: [StyleKind; 4] = [
        StyleKind::Checkbox,
        StyleKind::Chips,
        StyleKind::InlineList,
        StyleKind::Menu,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            StyleKind::Checkbox => "Checkbox",
            StyleKind::Chips => "Chips",
            StyleKind::InlineList => "Inline list",
            StyleKind::Menu => "Menu",
        }
    }

    pub fn into_style(self) -> AnyMultiPickerStyle {
        match self {
            StyleKind::Checkbox => AnyMultiPickerStyle::new(CheckboxStyle),
            StyleKind::Chips => AnyMultiPickerStyle::new(ChipsStyle::default()),
            StyleKind::InlineList => AnyMultiPickerStyle::new(InlineListStyle),
            StyleKind::Menu => AnyMultiPickerStyle::new(MenuStyle),
        }
    }
}
