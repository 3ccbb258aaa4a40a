//! Tick driver: the gate between a frame loop and session gravity.
//!
//! The host calls [`TickDriver::frame`] once per frame with a monotonic
//! millisecond timestamp; while started, the driver forwards it to
//! [`Session::tick`]. Start and stop are idempotent: the descent cadence
//! lives entirely in the session's wall-clock delta, so starting twice
//! cannot double the effective speed, and stopping halts all automatic
//! descent without touching session state.

use crate::session::Session;

/// Stoppable/restartable forwarding of frame timestamps to a session.
#[derive(Debug, Clone, Default)]
pub struct TickDriver {
    started: bool,
}

impl TickDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin forwarding ticks. Idempotent.
    pub fn start(&mut self) {
        self.started = true;
    }

    /// Stop forwarding ticks. Idempotent.
    pub fn stop(&mut self) {
        self.started = false;
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Forward one frame timestamp. Returns whether a gravity move was
    /// applied.
    pub fn frame(&mut self, session: &mut Session, now_ms: u64) -> bool {
        if !self.started {
            return false;
        }
        session.tick(now_ms)
    }
}
