//! Timing of the interaction hot paths.
//!
//! `profile_scope!` measures the enclosing scope and logs it through
//! `tracing` when it overruns a frame. Without the `profiling` feature the
//! macro expands to nothing.

use std::time::Instant;

/// One frame at 60 FPS
pub const FRAME_BUDGET_MS: f64 = 1000.0 / 60.0;

#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _scope_timer = $crate::perf::ScopeTimer::start($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
}

/// Logs the time between `start` and drop if it exceeds the frame budget
pub struct ScopeTimer {
    label: &'static str,
    started: Instant,
}

impl ScopeTimer {
    pub fn start(label: &'static str) -> Self {
        Self {
            label,
            started: Instant::now(),
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }

    pub fn over_budget(&self) -> bool {
        self.elapsed_ms() > FRAME_BUDGET_MS
    }
}

impl Drop for ScopeTimer {
    fn drop(&mut self) {
        if self.over_budget() {
            tracing::warn!(scope = self.label, elapsed_ms = self.elapsed_ms(), "over frame budget");
        }
    }
}
