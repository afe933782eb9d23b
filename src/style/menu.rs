//! Menu style.

use ratatui::text::{Line, Span};

use super::{Body, Element, MultiPickerStyle, Role, StyleContext, cells, into_spans, line_width};
use crate::configuration::Configuration;

/// A title that opens a bordered popover of toggles.
///
/// The options are only part of the body while the menu is expanded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuStyle;

impl MultiPickerStyle for MenuStyle {
    fn make_body(&self, configuration: &Configuration, context: &StyleContext) -> Body {
        let theme = &context.theme;
        let expanded = context.interaction.expanded;
        let mut body = Body::new();

        let mut trigger = into_spans(configuration.title().clone());
        trigger.push(Span::styled(
            if expanded { " ▴" } else { " ▾" },
            theme.accent_style(),
        ));
        body.push(Element::text(0, 0, Line::from(trigger), Role::Trigger));

        if !expanded {
            return body;
        }

        let rows: Vec<Line<'static>> = configuration
            .options()
            .iter()
            .map(|option| {
                let mark = if option.is_selected() {
                    Span::styled("✓ ", theme.accent_style())
                } else {
                    Span::raw("  ")
                };
                let mut spans = vec![mark];
                spans.extend(into_spans(option.label()));
                Line::from(spans)
            })
            .collect();

        let inner = rows.iter().map(line_width).max().unwrap_or(0);
        let right = inner.saturating_add(1);
        let horizontal = "─".repeat(usize::from(inner));

        body.push(Element::text(
            0,
            1,
            Line::from(format!("┌{horizontal}┐")),
            Role::Decoration,
        ));

        for (index, row) in rows.into_iter().enumerate() {
            let y = cells(index + 2);
            body.push(Element::text(0, y, Line::from("│"), Role::Decoration));

            let mut element = Element::text(1, y, row, Role::Option(index)).with_width(inner);
            if context.is_highlighted(index) {
                element = element.with_fill(theme.highlight);
            }
            body.push(element);

            body.push(Element::text(right, y, Line::from("│"), Role::Decoration));
        }

        let bottom = cells(configuration.len() + 2);
        body.push(Element::text(
            0,
            bottom,
            Line::from(format!("└{horizontal}┘")),
            Role::Decoration,
        ));

        body
    }
}
