//! Chip cloud style.

use ratatui::{
    layout::Size,
    text::{Line, Span},
};

use super::{Body, Element, MultiPickerStyle, Role, StyleContext, into_spans, line_width};
use crate::configuration::Configuration;
use crate::flow::{FlowLayout, Measure};

/// A secondary title above a wrapping cloud of pill buttons.
///
/// Selected chips are filled with the accent color, the rest with the neutral
/// color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipsStyle {
    /// Gap between chips and between rows of chips.
    pub spacing: u16,
}

impl Default for ChipsStyle {
    fn default() -> Self {
        Self { spacing: 1 }
    }
}

struct Chip(Line<'static>);

impl Measure for Chip {
    fn natural_size(&self) -> Size {
        Size::new(line_width(&self.0), 1)
    }
}

impl MultiPickerStyle for ChipsStyle {
    fn make_body(&self, configuration: &Configuration, context: &StyleContext) -> Body {
        let theme = &context.theme;
        let mut body = Body::new();

        let title = configuration
            .title()
            .clone()
            .patch_style(theme.secondary_style());
        body.push(Element::text(0, 0, title, Role::Title));

        let chips: Vec<Chip> = configuration
            .options()
            .iter()
            .map(|option| {
                let mut spans = vec![Span::raw(" ")];
                spans.extend(into_spans(option.label()));
                spans.push(Span::raw(" "));
                Chip(Line::from(spans))
            })
            .collect();

        let arrangement = FlowLayout::new(self.spacing).arrange(context.width, &chips);

        for (index, ((option, chip), position)) in configuration
            .options()
            .iter()
            .zip(chips)
            .zip(arrangement.positions)
            .enumerate()
        {
            let mut fill = if option.is_selected() {
                theme.selected_chip_style()
            } else {
                theme.chip_style()
            };
            if context.is_highlighted(index) {
                fill = fill.patch(theme.highlight);
            }
            body.push(
                Element::text(
                    position.x,
                    position.y.saturating_add(1),
                    chip.0,
                    Role::Option(index),
                )
                .with_fill(fill),
            );
        }

        body
    }
}
