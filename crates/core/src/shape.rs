//! Tetromino shapes as boolean bounding-box matrices.
//!
//! Each shape is a small 2D matrix of occupied/empty flags. Rotation is
//! clockwise only and works on the matrix itself (transpose, then reverse
//! each row), so a 2x3 shape becomes 3x2. There is no rotation-state
//! machine and no wall kicks: the session rejects a rotation whose result
//! collides and keeps the prior matrix.

use arrayvec::ArrayVec;

use blockfall_types::PieceKind;

/// Maximum bounding-box edge across the catalog (the I piece is 1x4).
pub const MAX_SHAPE_DIM: usize = 4;

type ShapeRow = ArrayVec<bool, MAX_SHAPE_DIM>;

/// An occupancy matrix within a bounding box of at most 4x4.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: ArrayVec<ShapeRow, MAX_SHAPE_DIM>,
}

impl Shape {
    fn from_rows(rows: &[&[u8]]) -> Self {
        let rows = rows
            .iter()
            .map(|row| row.iter().map(|&v| v != 0).collect())
            .collect();
        Self { rows }
    }

    /// Bounding-box height in cells.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Bounding-box width in cells.
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, ArrayVec::len)
    }

    /// Whether the cell at `(row, col)` inside the bounding box is occupied.
    /// Out-of-box coordinates read as empty.
    pub fn is_set(&self, row: usize, col: usize) -> bool {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(false)
    }

    /// Iterate the `(row, col)` offsets of all occupied cells.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &set)| set)
                .map(move |(c, _)| (r, c))
        })
    }

    /// Rotate the bounding box 90 degrees clockwise.
    ///
    /// Transpose then reverse each resulting row: cell `(r, c)` of an RxC
    /// matrix lands at `(c, R-1-r)` of the CxR result. Four applications
    /// return the original matrix.
    pub fn rotate_cw(&self) -> Self {
        let height = self.height();
        let width = self.width();

        let mut rows: ArrayVec<ShapeRow, MAX_SHAPE_DIM> = ArrayVec::new();
        for col in 0..width {
            let mut row = ShapeRow::new();
            for src in (0..height).rev() {
                row.push(self.rows[src][col]);
            }
            rows.push(row);
        }
        Self { rows }
    }
}

/// The catalog's base (spawn-orientation) matrix for a kind.
pub fn base_shape(kind: PieceKind) -> Shape {
    let rows: &[&[u8]] = match kind {
        PieceKind::I => &[&[1, 1, 1, 1]],
        PieceKind::O => &[&[1, 1], &[1, 1]],
        PieceKind::T => &[&[1, 1, 1], &[0, 1, 0]],
        PieceKind::S => &[&[0, 1, 1], &[1, 1, 0]],
        PieceKind::Z => &[&[1, 1, 0], &[0, 1, 1]],
        PieceKind::J => &[&[1, 0, 0], &[1, 1, 1]],
        PieceKind::L => &[&[0, 0, 1], &[1, 1, 1]],
    };
    Shape::from_rows(rows)
}
