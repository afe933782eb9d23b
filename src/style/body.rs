//! The renderable output of a style.

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

/// What a positioned element stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Picker title shown as plain text.
    Title,
    /// Title that opens and closes the option list.
    Trigger,
    /// The option at this index in the configuration.
    Option(usize),
    /// Borders, padding and other non-interactive cells.
    Decoration,
}

/// One line of content placed inside a [`Body`].
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Area relative to the body origin.
    pub area: Rect,
    pub content: Line<'static>,
    /// Style applied to the whole area before the content is drawn.
    pub fill: Style,
    pub role: Role,
}

impl Element {
    /// An element exactly as wide as its content.
    pub fn text(x: u16, y: u16, content: Line<'static>, role: Role) -> Self {
        let width = line_width(&content);
        Self {
            area: Rect::new(x, y, width, 1),
            content,
            fill: Style::new(),
            role,
        }
    }

    pub fn with_width(mut self, width: u16) -> Self {
        self.area.width = width;
        self
    }

    pub fn with_fill(mut self, fill: Style) -> Self {
        self.fill = fill;
        self
    }
}

/// Positioned elements plus their bounding size.
///
/// Bodies are rebuilt from scratch on every frame. Positions are relative,
/// so the same body can be drawn anywhere and hit tested afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Body {
    elements: Vec<Element>,
    size: Size,
}

impl Body {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, element: Element) {
        self.size.width = self.size.width.max(element.area.right());
        self.size.height = self.size.height.max(element.area.bottom());
        self.elements.push(element);
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Area covered by every element of option `index`.
    pub fn option_area(&self, index: usize) -> Option<Rect> {
        self.elements
            .iter()
            .filter(|e| e.role == Role::Option(index))
            .map(|e| e.area)
            .reduce(|a, b| a.union(b))
    }

    /// Whether the body exposes a trigger element.
    pub fn has_trigger(&self) -> bool {
        self.elements.iter().any(|e| e.role == Role::Trigger)
    }

    /// Role of the topmost element under `position`, relative to the body.
    pub fn hit_test(&self, position: Position) -> Option<Role> {
        self.elements
            .iter()
            .rev()
            .find(|e| e.area.contains(position))
            .map(|e| e.role)
    }

    /// Recompute the bounding size from the elements.
    pub(crate) fn into_container(self) -> Self {
        let mut container = Self::new();
        for element in self.elements {
            container.push(element);
        }
        container
    }
}

impl Widget for &Body {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for element in &self.elements {
            let target = Rect::new(
                area.x.saturating_add(element.area.x),
                area.y.saturating_add(element.area.y),
                element.area.width,
                element.area.height,
            )
            .intersection(area);
            if target.is_empty() {
                continue;
            }
            buf.set_style(target, element.fill);
            buf.set_line(target.x, target.y, &element.content, target.width);
        }
    }
}

impl Widget for Body {
    fn render(self, area: Rect, buf: &mut Buffer) {
        (&self).render(area, buf);
    }
}

/// Display width of a line in cells, saturating at `u16::MAX`.
pub fn line_width(line: &Line<'_>) -> u16 {
    u16::try_from(line.width()).unwrap_or(u16::MAX)
}

/// Spans of `line` with the line-level style folded into each span, so they
/// can be spliced into another line without losing styling.
pub(crate) fn into_spans(line: Line<'static>) -> Vec<Span<'static>> {
    let base = line.style;
    line.spans
        .into_iter()
        .map(|span| {
            let style = base.patch(span.style);
            span.style(style)
        })
        .collect()
}

/// Convert a count or index to a cell coordinate.
pub(crate) fn cells(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use ratatui::style::Color;

    use super::*;

    #[test]
    fn size_tracks_element_extents() {
        let mut body = Body::new();
        body.push(Element::text(0, 0, Line::from("Title"), Role::Title));
        body.push(Element::text(2, 3, Line::from("abc"), Role::Option(0)));
        assert_eq!(body.size(), Size::new(5, 4));
    }

    #[test]
    fn hit_test_prefers_topmost_element() {
        let mut body = Body::new();
        body.push(Element::text(0, 0, Line::from("......"), Role::Decoration));
        body.push(Element::text(1, 0, Line::from("ab"), Role::Option(4)));

        assert_eq!(body.hit_test(Position::new(2, 0)), Some(Role::Option(4)));
        assert_eq!(body.hit_test(Position::new(5, 0)), Some(Role::Decoration));
        assert_eq!(body.hit_test(Position::new(0, 1)), None);
    }

    #[test]
    fn option_area_unions_all_parts() {
        let mut body = Body::new();
        body.push(Element::text(0, 1, Line::from("ab"), Role::Option(0)));
        body.push(Element::text(6, 1, Line::from("x"), Role::Option(0)));
        assert_eq!(body.option_area(0), Some(Rect::new(0, 1, 7, 1)));
        assert_eq!(body.option_area(1), None);
    }

    #[test]
    fn render_clips_to_area_and_applies_fill() {
        let mut body = Body::new();
        body.push(
            Element::text(1, 0, Line::from("hello"), Role::Option(0))
                .with_fill(Style::new().bg(Color::Blue)),
        );

        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 1));
        (&body).render(buf.area, &mut buf);

        assert_eq!(buf[(0, 0)].symbol(), " ");
        assert_eq!(buf[(1, 0)].symbol(), "h");
        assert_eq!(buf[(3, 0)].symbol(), "l");
        assert_eq!(buf[(2, 0)].bg, Color::Blue);
        assert_eq!(buf[(0, 0)].bg, Color::Reset);
    }
}
