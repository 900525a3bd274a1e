//! Rate limiting for pointer-move updates.
//!
//! With a zero interval every move is admitted, which matches the editor's
//! default of applying each pointer move as it arrives. With a positive
//! interval, the most recent rejected position is held back so the release
//! can still apply it.

use super::coords::PointerPosition;
use std::time::{Duration, Instant};

#[derive(Clone, Debug)]
pub struct MoveThrottle {
    min_interval: Duration,
    last_admitted: Option<Instant>,
    pending: Option<PointerPosition>,
}

impl Default for MoveThrottle {
    fn default() -> Self {
        Self::new(Duration::ZERO)
    }
}

impl MoveThrottle {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_admitted: None,
            pending: None,
        }
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Returns true if a move to `pointer` arriving at `now` should be applied.
    ///
    /// A rejected move replaces any earlier pending position; an admitted one
    /// clears it.
    pub fn admit(&mut self, now: Instant, pointer: PointerPosition) -> bool {
        if self.min_interval.is_zero() {
            return true;
        }
        match self.last_admitted {
            Some(last) if now.saturating_duration_since(last) < self.min_interval => {
                self.pending = Some(pointer);
                false
            }
            _ => {
                self.last_admitted = Some(now);
                self.pending = None;
                true
            }
        }
    }

    /// Latest rejected position not yet superseded by an admitted move
    pub fn take_pending(&mut self) -> Option<PointerPosition> {
        self.pending.take()
    }

    /// Forget the last admitted move so the next interaction starts fresh
    pub fn reset(&mut self) {
        self.last_admitted = None;
        self.pending = None;
    }
}
