//! Generic step-progression machine shared by every multi-step flow.
//!
//! The same forward/back shape is repeated by onboarding, dispute,
//! automation creation, and the what's-new tour, so it lives here once.
//! Transitions are reported as plain [`Transition`] values — the hosting
//! screen matches on the result and navigates, it never registers
//! callbacks.

/// Result of a transition attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Moved to the given step.
    Moved(usize),
    /// Advanced past the terminal step — the flow is done. Reported exactly
    /// once per flow instance.
    Completed,
    /// Retreated past the first step — the caller should leave the flow.
    Exited,
    /// Nothing changed (e.g. advancing again after completion).
    Stayed,
}

/// Linear step machine over indices `0..=last`.
///
/// The step index never leaves `[0, last]`; advancing at the terminal step
/// reports [`Transition::Completed`] instead of moving. Each transition
/// clears the transient per-step error message.
#[derive(Debug, Clone)]
pub struct StepSequencer {
    step: usize,
    last: usize,
    completed: bool,
    error: Option<String>,
}

impl StepSequencer {
    /// A sequencer over `step_count` steps, starting at step 0.
    ///
    /// `step_count` must be at least 1.
    pub fn new(step_count: usize) -> Self {
        assert!(step_count >= 1, "a flow needs at least one step");
        Self {
            step: 0,
            last: step_count - 1,
            completed: false,
            error: None,
        }
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn last(&self) -> usize {
        self.last
    }

    pub fn is_terminal(&self) -> bool {
        self.step == self.last
    }

    pub fn is_first(&self) -> bool {
        self.step == 0
    }

    /// Move forward one step, or report completion at the terminal step.
    pub fn advance(&mut self) -> Transition {
        self.error = None;
        if self.step < self.last {
            self.step += 1;
            Transition::Moved(self.step)
        } else if !self.completed {
            self.completed = true;
            Transition::Completed
        } else {
            Transition::Stayed
        }
    }

    /// Move back one step, or report exit at the first step.
    pub fn retreat(&mut self) -> Transition {
        self.error = None;
        if self.step > 0 {
            self.step -= 1;
            Transition::Moved(self.step)
        } else {
            Transition::Exited
        }
    }

    /// Jump directly to `step` — explicit branch selection (e.g. choosing an
    /// automation type records the choice and lands on the details step).
    /// Targets past the terminal step are clamped to it.
    pub fn branch_to(&mut self, step: usize) -> Transition {
        self.error = None;
        self.step = step.min(self.last);
        Transition::Moved(self.step)
    }

    /// Transient validation message for the current step. Cleared by every
    /// transition.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_never_leaves_range() {
        let mut seq = StepSequencer::new(3);
        for _ in 0..10 {
            seq.advance();
            assert!(seq.step() <= seq.last());
        }
        assert_eq!(seq.step(), 2);
    }

    #[test]
    fn test_completion_fires_exactly_once() {
        let mut seq = StepSequencer::new(3);
        assert_eq!(seq.advance(), Transition::Moved(1));
        assert_eq!(seq.advance(), Transition::Moved(2));
        assert_eq!(seq.advance(), Transition::Completed);
        assert_eq!(seq.advance(), Transition::Stayed);
        assert_eq!(seq.advance(), Transition::Stayed);
    }

    #[test]
    fn test_retreat_exits_at_first_step() {
        let mut seq = StepSequencer::new(2);
        assert_eq!(seq.retreat(), Transition::Exited);
        seq.advance();
        assert_eq!(seq.retreat(), Transition::Moved(0));
        assert_eq!(seq.retreat(), Transition::Exited);
    }

    #[test]
    fn test_branch_skips_steps() {
        let mut seq = StepSequencer::new(3);
        assert_eq!(seq.branch_to(1), Transition::Moved(1));
        assert_eq!(seq.step(), 1);
        // Out-of-range targets clamp to the terminal step.
        assert_eq!(seq.branch_to(99), Transition::Moved(2));
    }

    #[test]
    fn test_transitions_clear_error() {
        let mut seq = StepSequencer::new(3);
        seq.set_error("fill in the amount");
        assert_eq!(seq.error(), Some("fill in the amount"));
        seq.advance();
        assert_eq!(seq.error(), None);

        seq.set_error("fill in the amount");
        seq.retreat();
        assert_eq!(seq.error(), None);

        seq.set_error("fill in the amount");
        seq.branch_to(2);
        assert_eq!(seq.error(), None);
    }

    #[test]
    fn test_single_step_flow_completes_immediately() {
        let mut seq = StepSequencer::new(1);
        assert!(seq.is_terminal());
        assert_eq!(seq.advance(), Transition::Completed);
    }
}
