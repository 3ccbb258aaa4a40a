//! Collision oracle: pure validity check for a shape at a board position.

use crate::grid::Grid;
use crate::shape::Shape;

/// Whether the shape collides when its top-left corner sits at `(x, y)`.
///
/// Every occupied shape cell must map to an in-bounds, empty grid cell.
/// Out-of-bounds on any axis counts as a collision, including negative `y`:
/// a piece that would overlap the stack at spawn collides immediately, which
/// is what turns a topped-out board into a game over.
///
/// Pure and O(shape area).
pub fn collides(shape: &Shape, grid: &Grid, x: i8, y: i8) -> bool {
    shape.cells().any(|(row, col)| {
        let board_x = x + col as i8;
        let board_y = y + row as i8;
        !Grid::in_bounds(board_x, board_y) || grid.is_occupied(board_x, board_y)
    })
}
