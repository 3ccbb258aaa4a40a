//! The playfield grid: 10x20 cells, value semantics.
//!
//! The grid is deliberately value-like: locking a piece and clearing lines
//! are pure operations returning a new grid. Snapshots handed to the
//! presentation layer therefore never change under the renderer's feet.
//! At 200 one-byte cells a copy is cheaper than defending against aliasing.

use blockfall_types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

use crate::shape::Shape;

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// The 10x20 playfield, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: [[Cell; WIDTH]; HEIGHT],
}

impl Grid {
    /// An all-empty grid.
    pub fn new() -> Self {
        Self {
            rows: [[None; WIDTH]; HEIGHT],
        }
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Cell at `(x, y)`, or `None` when out of bounds.
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        if !Self::in_bounds(x, y) {
            return None;
        }
        Some(self.rows[y as usize][x as usize])
    }

    /// Overwrite a cell. Returns false (and leaves the grid untouched) when
    /// out of bounds. Intended for building fixtures; gameplay mutation goes
    /// through [`Grid::with_locked`] and [`Grid::clear_full_rows`].
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        if !Self::in_bounds(x, y) {
            return false;
        }
        self.rows[y as usize][x as usize] = cell;
        true
    }

    /// Whether `(x, y)` lies inside the playfield.
    pub fn in_bounds(x: i8, y: i8) -> bool {
        x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8
    }

    /// Whether `(x, y)` is inside the playfield and holds a locked cell.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Whether every cell of row `y` is filled.
    pub fn is_row_full(&self, y: usize) -> bool {
        y < HEIGHT && self.rows[y].iter().all(Option::is_some)
    }

    /// A new grid with the shape's occupied cells stamped in as `kind`.
    ///
    /// `(x, y)` is the board position of the shape's top-left corner. Cells
    /// falling outside the board are dropped silently; the session only
    /// locks at collision-checked positions, so in practice every cell
    /// lands in bounds.
    pub fn with_locked(&self, shape: &Shape, x: i8, y: i8, kind: PieceKind) -> Self {
        let mut next = self.clone();
        for (row, col) in shape.cells() {
            next.set(x + col as i8, y + row as i8, Some(kind));
        }
        next
    }

    /// Remove every full row, keeping the relative order of the survivors
    /// and topping the grid up with empty rows. Returns the compacted grid
    /// and the number of rows removed. Height is invariant.
    pub fn clear_full_rows(&self) -> (Self, u32) {
        let mut next = Self::new();
        let mut write = HEIGHT;
        let mut cleared = 0u32;

        for read in (0..HEIGHT).rev() {
            if self.is_row_full(read) {
                cleared += 1;
            } else {
                write -= 1;
                next.rows[write] = self.rows[read];
            }
        }

        (next, cleared)
    }

    /// Row-major view of all cells, for snapshots and rendering.
    pub fn rows(&self) -> &[[Cell; WIDTH]; HEIGHT] {
        &self.rows
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
