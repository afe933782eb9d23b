//! Checkbox list style.

use ratatui::text::{Line, Span};

use super::{Body, Element, MultiPickerStyle, Role, StyleContext, cells, into_spans};
use crate::configuration::Configuration;

/// A section header followed by one `[x] label` row per option.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckboxStyle;

impl MultiPickerStyle for CheckboxStyle {
    fn make_body(&self, configuration: &Configuration, context: &StyleContext) -> Body {
        let theme = &context.theme;
        let mut body = Body::new();

        let header = configuration.title().clone().patch_style(theme.header_style());
        body.push(Element::text(0, 0, header, Role::Title));

        for (index, option) in configuration.options().iter().enumerate() {
            let mark = if option.is_selected() {
                Span::styled("[x]", theme.accent_style())
            } else {
                Span::raw("[ ]")
            };
            let mut spans = vec![mark, Span::raw(" ")];
            spans.extend(into_spans(option.label()));

            let mut row = Element::text(0, cells(index + 1), Line::from(spans), Role::Option(index));
            if context.is_highlighted(index) {
                row = row.with_fill(theme.highlight);
            }
            body.push(row);
        }

        body
    }
}
