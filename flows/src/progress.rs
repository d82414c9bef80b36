//! Simulated verification progress.
//!
//! A fixed (percentage, status) schedule stands in for a real verification
//! backend: one checkpoint per tick period, a short delay after the last
//! checkpoint, then completion. The cursor here is pure; the service task
//! owns the actual timer and its cancellation, so nothing can fire after
//! the flow is torn down. A real implementation would replace the schedule
//! with an asynchronous verification call while keeping the same
//! checkpoint contract toward the UI.

use std::time::Duration;

/// One point on the simulated progress schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressTick {
    /// 0–100.
    pub percent: u8,
    pub status: &'static str,
}

/// The identity-verification schedule.
pub const VERIFICATION_CHECKPOINTS: [ProgressTick; 4] = [
    ProgressTick { percent: 30, status: "Analyzing documents..." },
    ProgressTick { percent: 60, status: "Verifying identity..." },
    ProgressTick { percent: 85, status: "Finalizing..." },
    ProgressTick { percent: 100, status: "Complete!" },
];

/// Cursor over a checkpoint schedule. Checkpoints come out strictly in list
/// order, one per call, and never repeat.
#[derive(Debug, Clone)]
pub struct ProgressSimulator {
    checkpoints: &'static [ProgressTick],
    cursor: usize,
}

impl Default for ProgressSimulator {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSimulator {
    /// Time between checkpoint emissions.
    pub const TICK_PERIOD: Duration = Duration::from_secs(1);
    /// Delay between the last checkpoint and the completion signal.
    pub const COMPLETION_DELAY: Duration = Duration::from_millis(500);

    pub fn new() -> Self {
        Self::with_schedule(&VERIFICATION_CHECKPOINTS)
    }

    pub fn with_schedule(checkpoints: &'static [ProgressTick]) -> Self {
        Self { checkpoints, cursor: 0 }
    }

    /// The next checkpoint in list order, or `None` once the schedule is
    /// exhausted.
    pub fn next_checkpoint(&mut self) -> Option<ProgressTick> {
        let tick = self.checkpoints.get(self.cursor).copied();
        if tick.is_some() {
            self.cursor += 1;
        }
        tick
    }

    /// True once every checkpoint has been emitted — the completion delay
    /// starts here.
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.checkpoints.len()
    }
}
