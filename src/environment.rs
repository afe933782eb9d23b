//! Values inherited by every picker in a subtree.
//!
//! ratatui has no view tree to hang ambient values on, so the environment is
//! passed explicitly down the draw calls. A parent that wants a different
//! style for part of its layout derives a child environment with
//! [`Environment::with_multi_picker_style`] and hands that to the children.

use crate::style::{AnyMultiPickerStyle, MultiPickerStyle};
use crate::theme::Theme;

#[derive(Debug, Clone, Default)]
pub struct Environment {
    multi_picker_style: AnyMultiPickerStyle,
    theme: Theme,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// The style pickers in this subtree are drawn with. Menu by default.
    pub fn multi_picker_style(&self) -> &AnyMultiPickerStyle {
        &self.multi_picker_style
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// A child environment using `style`. `self` is left as it was.
    pub fn with_multi_picker_style<S: MultiPickerStyle>(&self, style: S) -> Self {
        self.with_any_multi_picker_style(AnyMultiPickerStyle::new(style))
    }

    /// Like [`with_multi_picker_style`](Self::with_multi_picker_style) for a
    /// style that is already erased.
    pub fn with_any_multi_picker_style(&self, style: AnyMultiPickerStyle) -> Self {
        Self {
            multi_picker_style: style,
            ..self.clone()
        }
    }

    pub fn with_theme(&self, theme: Theme) -> Self {
        Self {
            theme,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::style::Color;

    use super::*;
    use crate::style::{ChipsStyle, StyleKind};

    #[test]
    fn default_style_is_menu() {
        let env = Environment::new();
        assert!(env.multi_picker_style().name().ends_with("MenuStyle"));
    }

    #[test]
    fn override_does_not_leak_into_parent() {
        let root = Environment::new();
        let child = root.with_multi_picker_style(ChipsStyle::default());
        let grandchild = child.with_theme(Theme {
            accent: Color::Magenta,
            ..Theme::default()
        });

        assert!(root.multi_picker_style().name().ends_with("MenuStyle"));
        assert!(child.multi_picker_style().name().ends_with("ChipsStyle"));
        assert!(grandchild.multi_picker_style().name().ends_with("ChipsStyle"));
        assert_eq!(child.theme().accent, Color::Cyan);
        assert_eq!(grandchild.theme().accent, Color::Magenta);
    }

    #[test]
    fn closest_override_wins() {
        let env = Environment::new()
            .with_any_multi_picker_style(StyleKind::Checkbox.into_style())
            .with_any_multi_picker_style(StyleKind::InlineList.into_style());
        assert!(env.multi_picker_style().name().ends_with("InlineListStyle"));
    }
}
