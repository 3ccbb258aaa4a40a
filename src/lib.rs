//! Blockfall (workspace facade crate).
//!
//! Re-exports the member crates under one roof so the binary, tests, and
//! benches can address everything as `blockfall::{core,input,term,types}`.

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;
