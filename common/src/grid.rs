//! Grid layout and pointer hit-testing.
//!
//! The frame is split into [`GRID_ROWS`] x [`GRID_COLUMNS`] cells. Every cell
//! is `frame / count` pixels plus [`CELL_PADDING`] in each dimension, so
//! neighbouring cells overlap by one pixel along shared edges:
//!
//! ```text
//! x:  0        20       40
//!     |--cell0--|
//!              |--cell1--|
//!              ^ x = 20 belongs to both, cell0 wins
//! ```
//!
//! Lookups scan in row-major order and stop at the first hit, so the earlier
//! cell always wins on a shared edge. When the frame is not a multiple of the
//! grid count a strip along the right and bottom edges is not covered by any
//! cell; a pointer there yields no cell.

use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::primitives::{ContainsPoint, Rectangle};

use crate::config::{CELL_COUNT, CELL_PADDING, GRID_COLUMNS, GRID_ROWS};

/// Position of a cell in the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CellIndex {
    pub row: usize,
    pub column: usize,
}

impl CellIndex {
    pub const fn new(
        row: usize,
        column: usize,
    ) -> Self {
        Self { row, column }
    }

    /// Row-major index into the cell array.
    #[inline]
    pub const fn linear(self) -> usize { self.row * GRID_COLUMNS + self.column }

    /// Inverse of [`CellIndex::linear`].
    #[inline]
    pub const fn from_linear(index: usize) -> Self { Self::new(index / GRID_COLUMNS, index % GRID_COLUMNS) }
}

/// Immutable cell layout computed once from the frame size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: [Rectangle; CELL_COUNT],
}

impl Grid {
    /// Lay out the cells for `frame`.
    pub fn new(frame: Size) -> Self {
        let step = Size::new(frame.width / GRID_COLUMNS as u32, frame.height / GRID_ROWS as u32);
        let cell_size = step + Size::new_equal(CELL_PADDING);

        let mut cells = [Rectangle::zero(); CELL_COUNT];
        for (i, cell) in cells.iter_mut().enumerate() {
            let CellIndex { row, column } = CellIndex::from_linear(i);
            let origin = Point::new((column as u32 * step.width) as i32, (row as u32 * step.height) as i32);
            *cell = Rectangle::new(origin, cell_size);
        }

        Self { cells }
    }

    /// Rectangle of a single cell.
    #[inline]
    pub const fn cell(
        &self,
        index: CellIndex,
    ) -> Rectangle {
        self.cells[index.linear()]
    }

    /// All cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[Rectangle] { &self.cells }

    /// First cell, in row-major order, whose bounds contain `point`.
    pub fn cell_at(
        &self,
        point: Point,
    ) -> Option<CellIndex> {
        self.cells
            .iter()
            .position(|cell| cell.contains(point))
            .map(CellIndex::from_linear)
    }
}

// =============================================================================
// Tests
// =============================================================================
