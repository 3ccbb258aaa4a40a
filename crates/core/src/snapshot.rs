//! Read-only session state for the presentation layer.
//!
//! A snapshot owns its data (the grid has value semantics), so a renderer
//! can hold one across frames without ever observing a half-applied
//! command.

use blockfall_types::PieceKind;

use crate::grid::Grid;
use crate::shape::Shape;

/// The active piece as seen by a renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

/// The upcoming piece: a kind and its spawn-orientation matrix, no position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
}

/// Everything a presentation layer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub grid: Grid,
    pub active: Option<PieceSnapshot>,
    pub next: Option<PreviewSnapshot>,
    pub cleared_lines: u32,
    pub level: u32,
    pub running: bool,
    pub paused: bool,
    pub game_over: bool,
}

impl Snapshot {
    /// Whether gameplay is currently advancing.
    pub fn playing(&self) -> bool {
        self.running && !self.paused && !self.game_over
    }
}
