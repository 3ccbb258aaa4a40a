//! Thin keyboard adapter: terminal key events to engine commands.
//!
//! This crate is deliberately minimal. The engine contract is a set of
//! discrete commands; everything here is a stateless mapping from raw
//! crossterm key events onto that set. No auto-repeat handling, no
//! remapping.

pub mod map;

pub use map::{command_for_key, should_quit};
