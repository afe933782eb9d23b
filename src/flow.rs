//! Flow layout for wrapping rows of items.
//!
//! Items are placed left to right and wrap onto a new row when the next one
//! would overflow the available width. Used by the chip style, but it works on
//! plain sizes so any caller can lay out cells with it.

use ratatui::layout::{Position, Size};

/// Something with a natural size in cells.
pub trait Measure {
    fn natural_size(&self) -> Size;
}

impl Measure for Size {
    fn natural_size(&self) -> Size {
        *self
    }
}

/// Output of [`FlowLayout::arrange`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Arrangement {
    /// Bounding size of every placed item.
    pub size: Size,
    /// Top-left corner of each item, in input order.
    pub positions: Vec<Position>,
}

/// Wrapping row layout with one spacing for both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowLayout {
    pub spacing: u16,
}

impl Default for FlowLayout {
    fn default() -> Self {
        Self { spacing: 1 }
    }
}

impl FlowLayout {
    pub fn new(spacing: u16) -> Self {
        Self { spacing }
    }

    /// Measure every item once, then place them.
    pub fn arrange<M: Measure>(&self, max_width: u16, items: &[M]) -> Arrangement {
        let sizes: Vec<Size> = items.iter().map(Measure::natural_size).collect();
        self.place(max_width, &sizes)
    }

    /// Place already measured items.
    ///
    /// An item that would cross `max_width` starts a new row, unless it is the
    /// first item of its row, in which case it stays and overflows.
    pub fn place(&self, max_width: u16, sizes: &[Size]) -> Arrangement {
        let mut positions = Vec::with_capacity(sizes.len());
        let mut x: u16 = 0;
        let mut y: u16 = 0;
        let mut row_height: u16 = 0;
        let mut max_x: u16 = 0;

        for size in sizes {
            if x > 0 && x.saturating_add(size.width) > max_width {
                x = 0;
                y = y.saturating_add(row_height).saturating_add(self.spacing);
                row_height = 0;
            }

            positions.push(Position::new(x, y));
            row_height = row_height.max(size.height);
            max_x = max_x.max(x.saturating_add(size.width));
            x = x.saturating_add(size.width).saturating_add(self.spacing);
        }

        let height = if positions.is_empty() {
            0
        } else {
            y.saturating_add(row_height)
        };

        Arrangement {
            size: Size::new(max_x, height),
            positions,
        }
    }
}
