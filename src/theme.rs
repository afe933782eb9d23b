//! Colors shared by the built-in styles.

use csscolorparser::Color as CssColor;
use ratatui::style::{Color, Modifier, Style};

/// Palette used when drawing a picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Fill for selected chips and check marks.
    pub accent: Color,
    /// Text drawn on top of `accent`.
    pub on_accent: Color,
    /// Fill for unselected chips.
    pub neutral: Color,
    /// De-emphasized text such as the chip title.
    pub secondary: Color,
    /// Applied to the highlighted option.
    pub highlight: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Cyan,
            on_accent: Color::Black,
            neutral: Color::DarkGray,
            secondary: Color::Gray,
            highlight: Style::new().add_modifier(Modifier::REVERSED),
        }
    }
}

impl Theme {
    pub fn header_style(&self) -> Style {
        Style::new().add_modifier(Modifier::BOLD)
    }

    pub fn secondary_style(&self) -> Style {
        Style::new().fg(self.secondary)
    }

    pub fn accent_style(&self) -> Style {
        Style::new().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn selected_chip_style(&self) -> Style {
        Style::new().bg(self.accent).fg(self.on_accent)
    }

    pub fn chip_style(&self) -> Style {
        Style::new().bg(self.neutral)
    }
}

/// Parse any CSS color (hex, `rgb()`, `hsl()`, named) into a terminal color.
pub fn parse_color(input: &str) -> Result<Color, String> {
    let css_color: CssColor = input
        .trim()
        .parse()
        .map_err(|e| format!("Invalid color '{}': {}", input, e))?;
    let [r, g, b, _a] = css_color.to_rgba8();
    Ok(Color::Rgb(r, g, b))
}
