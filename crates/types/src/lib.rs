//! Shared types and constants for the blockfall workspace.
//!
//! Pure data only: no I/O, no allocation, no dependencies, so every other
//! crate (engine, input adapter, terminal renderer) can use these types
//! freely.
//!
//! # Board dimensions
//!
//! The playfield is the classic 10 columns by 20 rows. Coordinates are
//! `(x, y)` with `x` growing rightward in `0..10` and `y` growing downward
//! in `0..20`. New pieces spawn with the top-left corner of their bounding
//! box at (4, 0).
//!
//! # Timing
//!
//! All timing values are wall-clock milliseconds. The frame loop polls
//! roughly every `TICK_MS`; gravity applies one down-move whenever at least
//! the level's drop interval has elapsed since the previous one.

/// Board width in cells (10 columns).
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows).
pub const BOARD_HEIGHT: u8 = 20;

/// Spawn position for a new piece (top-left corner of its bounding box).
pub const SPAWN_X: i8 = 4;
pub const SPAWN_Y: i8 = 0;

/// Frame budget for the render/input loop (~60 FPS).
pub const TICK_MS: u64 = 16;

/// Gravity interval at level 1 (one second per row).
pub const BASE_DROP_MS: u64 = 1000;

/// Gravity intervals indexed by `level - 1`; levels past the table use the
/// floor below.
pub const DROP_INTERVALS_MS: [u64; 9] = [1000, 800, 650, 500, 400, 320, 250, 200, 160];

/// Fastest gravity interval; the curve never goes below this.
pub const DROP_INTERVAL_FLOOR_MS: u64 = 120;

/// Lines needed to advance one level.
pub const LINES_PER_LEVEL: u32 = 10;

/// 24-bit RGB color used for piece rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// The seven tetromino kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in canonical catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Fixed render color for this kind.
    pub const fn color(self) -> Rgb {
        match self {
            PieceKind::I => Rgb::new(60, 55, 68),
            PieceKind::O => Rgb::new(104, 95, 116),
            PieceKind::T => Rgb::new(176, 113, 86),
            PieceKind::S => Rgb::new(227, 210, 111),
            PieceKind::Z => Rgb::new(45, 49, 66),
            PieceKind::J => Rgb::new(118, 135, 125),
            PieceKind::L => Rgb::new(196, 167, 125),
        }
    }

    /// Lowercase tag, handy for debug output and test messages.
    pub fn as_str(self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

/// A board cell: empty, or locked with the kind that filled it.
///
/// The kind doubles as the color tag; rendering derives the actual RGB via
/// [`PieceKind::color`].
pub type Cell = Option<PieceKind>;

/// Direction of a player- or gravity-driven move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Down,
}

impl Direction {
    /// Cell offset `(dx, dy)` of a one-step move.
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
        }
    }
}

/// Discrete commands the engine accepts.
///
/// Every command is a no-op when issued in a state where it does not apply
/// (e.g. `Move` before `Start` or after game over); the engine never errors
/// on host input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    Start,
    Reset,
    TogglePause,
    Move(Direction),
    Rotate,
}
