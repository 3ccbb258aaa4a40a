//! Falling-block game engine: pure, deterministic, and renderer-agnostic.
//!
//! This crate computes state and nothing else. It knows nothing about
//! terminals, keyboards, or wall clocks beyond the timestamps handed to it;
//! the host feeds it discrete [`GameCommand`]s and frame timestamps, and
//! reads back a [`Snapshot`] to draw.
//!
//! # Module structure
//!
//! - [`grid`]: the 10x20 playfield with value semantics; locking and
//!   line-clearing are pure operations returning a new grid
//! - [`shape`]: the seven-piece catalog as boolean bounding-box matrices,
//!   with clockwise matrix rotation (no wall kicks)
//! - [`collision`]: pure shape-vs-grid validity check
//! - [`speed`]: pure level-to-gravity-interval policy
//! - [`rng`]: seeded LCG for uniform, reproducible piece draws
//! - [`session`]: the state machine owning grid, pieces, counters, and flags
//! - [`driver`]: idempotently stoppable tick forwarding for frame loops
//! - [`snapshot`]: owned read-only state for the presentation layer
//!
//! # Example
//!
//! ```
//! use blockfall_core::{Session, TickDriver};
//! use blockfall_types::{Direction, GameCommand};
//!
//! let mut session = Session::new(12345);
//! let mut driver = TickDriver::new();
//!
//! session.apply(GameCommand::Start);
//! driver.start();
//!
//! session.apply(GameCommand::Move(Direction::Left));
//! session.apply(GameCommand::Rotate);
//! driver.frame(&mut session, 16);
//!
//! let snapshot = session.snapshot();
//! assert!(snapshot.running && !snapshot.game_over);
//! ```

pub mod collision;
pub mod driver;
pub mod grid;
pub mod rng;
pub mod session;
pub mod shape;
pub mod snapshot;
pub mod speed;

pub use blockfall_types as types;

pub use collision::collides;
pub use driver::TickDriver;
pub use grid::Grid;
pub use rng::GameRng;
pub use session::{ActivePiece, Session};
pub use shape::{base_shape, Shape};
pub use snapshot::{PieceSnapshot, PreviewSnapshot, Snapshot};
pub use speed::{drop_interval_ms, level_for_lines};
