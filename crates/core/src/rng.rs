//! Deterministic piece randomness.
//!
//! A small LCG keeps piece draws reproducible: the same seed produces the
//! same game, which tests and headless runs rely on. Draws are uniform over
//! the seven kinds; there is no bag.

use blockfall_types::PieceKind;

/// Linear congruential generator (Numerical Recipes constants).
#[derive(Debug, Clone)]
pub struct GameRng {
    state: u32,
}

impl GameRng {
    /// Seed the generator. A zero seed is bumped to 1 so the state never
    /// degenerates.
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    /// Next raw 32-bit value.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        self.state
    }

    /// Uniform value in `[0, max)`.
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Uniform draw over the seven tetromino kinds.
    pub fn next_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.next_range(PieceKind::ALL.len() as u32) as usize]
    }

    /// Current internal state, usable as a seed to continue the sequence.
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(1)
    }
}
