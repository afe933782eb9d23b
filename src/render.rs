//! Non-interactive output: plain-text drawings and serializable snapshots.

use ratatui::{buffer::Buffer, layout::Rect, text::Span, widgets::Widget};
use serde::Serialize;

use crate::configuration::Configuration;
use crate::style::{Body, StyleKind};

/// A picker's options and their selection state, for JSON and YAML output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickerSnapshot {
    pub title: String,
    pub style: StyleKind,
    pub options: Vec<OptionSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionSnapshot {
    pub label: String,
    pub selected: bool,
}

impl PickerSnapshot {
    pub fn new(configuration: &Configuration, style: StyleKind) -> Self {
        Self {
            title: configuration.title().to_string(),
            style,
            options: configuration
                .options()
                .iter()
                .map(|option| OptionSnapshot {
                    label: option.label().to_string(),
                    selected: option.is_selected(),
                })
                .collect(),
        }
    }
}

/// Draw `body` into an off-screen buffer and return its rows as text.
///
/// Styling is dropped and trailing spaces are trimmed from every row.
pub fn render_plain(body: &Body) -> String {
    let size = body.size();
    let area = Rect::new(0, 0, size.width, size.height);
    let mut buf = Buffer::empty(area);
    body.render(area, &mut buf);
    buffer_to_string(&buf)
}

/// Text content of `buf`, one line per row.
pub fn buffer_to_string(buf: &Buffer) -> String {
    let area = buf.area;
    let mut rows = Vec::with_capacity(usize::from(area.height));

    for y in area.top()..area.bottom() {
        let mut row = String::new();
        let mut skip = 0usize;
        for x in area.left()..area.right() {
            // Cells behind a wide glyph hold a placeholder space.
            if skip > 0 {
                skip -= 1;
                continue;
            }
            let symbol = buf[(x, y)].symbol();
            row.push_str(symbol);
            skip = Span::raw(symbol).width().saturating_sub(1);
        }
        rows.push(row.trim_end().to_string());
    }

    rows.join("\n")
}
