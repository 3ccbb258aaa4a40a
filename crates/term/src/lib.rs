//! Terminal presentation for the blockfall engine.
//!
//! Renders engine snapshots into a small character framebuffer and flushes
//! it to the terminal with crossterm. Full redraw per frame; at an 80x24
//! frame that is comfortably cheap next to the gravity cadence.
//!
//! The engine never sees any of this: the only coupling is reading
//! [`blockfall_core::Snapshot`].

pub mod frame;
pub mod renderer;
pub mod view;

pub use frame::{Frame, FrameCell};
pub use renderer::TerminalRenderer;
pub use view::GameView;
