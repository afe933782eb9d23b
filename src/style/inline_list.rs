//! Inline list style.

use ratatui::text::{Line, Span};

use super::{Body, Element, MultiPickerStyle, Role, StyleContext, cells, into_spans, line_width};
use crate::configuration::Configuration;

const CHECKMARK: &str = "✓";

/// A section header followed by full-width rows with a trailing check mark.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InlineListStyle;

impl MultiPickerStyle for InlineListStyle {
    fn make_body(&self, configuration: &Configuration, context: &StyleContext) -> Body {
        let theme = &context.theme;
        let mut body = Body::new();

        let header = configuration.title().clone().patch_style(theme.header_style());
        body.push(Element::text(0, 0, header, Role::Title));

        let labels: Vec<Line<'static>> = configuration
            .options()
            .iter()
            .map(|option| option.label())
            .collect();

        // Rows span the offered width, but never hide a label or its mark.
        let widest = labels.iter().map(line_width).max().unwrap_or(0);
        let row_width = context.width.max(widest.saturating_add(2));

        for (index, (option, label)) in configuration.options().iter().zip(labels).enumerate() {
            let gap = row_width
                .saturating_sub(line_width(&label))
                .saturating_sub(1);

            let mut spans = into_spans(label);
            spans.push(Span::raw(" ".repeat(usize::from(gap))));
            spans.push(if option.is_selected() {
                Span::styled(CHECKMARK, theme.accent_style())
            } else {
                Span::raw(" ")
            });

            let mut row = Element::text(0, cells(index + 1), Line::from(spans), Role::Option(index))
                .with_width(row_width);
            if context.is_highlighted(index) {
                row = row.with_fill(theme.highlight);
            }
            body.push(row);
        }

        body
    }
}
