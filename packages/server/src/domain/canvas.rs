//! Canvas store: the fixed-size grid of pixel colors.

use super::{palette::Color, value_object::PixelIndex};

/// Ordered, fixed-length sequence of cell colors.
///
/// The length never changes after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    cells: Vec<Color>,
}

impl Canvas {
    /// Create a canvas of `cell_count` cells all set to `fill`
    pub fn new(cell_count: usize, fill: Color) -> Self {
        Self {
            cells: vec![fill; cell_count],
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Copy of every cell, in order
    pub fn snapshot(&self) -> Vec<Color> {
        self.cells.clone()
    }

    pub fn cell(&self, index: PixelIndex) -> &Color {
        &self.cells[index.value()]
    }

    /// Overwrite one cell.
    ///
    /// `index` must have been checked against this canvas' length.
    pub fn set_cell(&mut self, index: PixelIndex, color: Color) {
        self.cells[index.value()] = color;
    }
}
