//! Two-phase PIN setup — create a 4-digit PIN, then confirm it.
//!
//! The phases are named rather than numbered because the back transition is
//! an explicit mapping (confirm → create) instead of a decrement. Non-digit
//! input is discarded silently; the only error is a confirm-phase mismatch,
//! which clears the confirm cells and keeps the create cells so the user
//! never re-enters the original PIN.

/// Number of PIN cells.
pub const PIN_LEN: usize = 4;

const MISMATCH_MESSAGE: &str = "PINs do not match. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinPhase {
    Create,
    Confirm,
}

impl PinPhase {
    /// Explicit previous-phase mapping.
    pub fn previous(self) -> Option<PinPhase> {
        match self {
            PinPhase::Create => None,
            PinPhase::Confirm => Some(PinPhase::Create),
        }
    }
}

/// One 4-cell PIN being typed. Each cell holds at most one ASCII digit.
#[derive(Debug, Clone, Default)]
pub struct PinEntry {
    cells: [String; PIN_LEN],
}

impl PinEntry {
    pub fn cell(&self, index: usize) -> &str {
        &self.cells[index]
    }

    /// Apply an edit to cell `index`. An edit containing any non-digit
    /// character is discarded wholesale — the cell keeps its previous
    /// content and no error surfaces. All-digit input keeps at most the
    /// last digit; empty input clears the cell. Returns the cell the focus
    /// should move to, if any.
    pub fn set_digit(&mut self, index: usize, raw: &str) -> Option<usize> {
        if raw.chars().any(|c| !c.is_ascii_digit()) {
            return None;
        }
        let digit = raw.chars().next_back();
        self.cells[index] = digit.map(String::from).unwrap_or_default();
        if digit.is_some() && index + 1 < PIN_LEN {
            Some(index + 1)
        } else {
            None
        }
    }

    /// Backspace on an already-empty cell moves the focus to the previous
    /// cell. Backspace on a filled cell is an ordinary edit and goes through
    /// [`set_digit`](PinEntry::set_digit).
    pub fn delete_digit(&mut self, index: usize) -> Option<usize> {
        if self.cells[index].is_empty() && index > 0 {
            Some(index - 1)
        } else {
            None
        }
    }

    /// True iff all four cells hold a digit.
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.clear();
        }
    }

    fn digits(&self) -> String {
        self.cells.concat()
    }
}

/// Outcome of a continue press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinOutcome {
    /// Create phase complete — moved on to confirm.
    Advanced,
    /// Confirm matched the created PIN; the flow is done.
    Completed,
    /// Confirm did not match. Confirm cells were cleared, the create cells
    /// were kept, and the error message was set.
    Mismatch,
    /// Not all cells are filled yet; nothing happened.
    Incomplete,
}

/// The whole create/confirm machine, including the focus target the UI
/// should apply on the next frame.
#[derive(Debug, Clone)]
pub struct PinSetup {
    phase: PinPhase,
    pin: PinEntry,
    confirm: PinEntry,
    error: Option<String>,
    focus_request: Option<usize>,
}

impl Default for PinSetup {
    fn default() -> Self {
        Self {
            phase: PinPhase::Create,
            pin: PinEntry::default(),
            confirm: PinEntry::default(),
            error: None,
            focus_request: Some(0),
        }
    }
}

impl PinSetup {
    pub fn phase(&self) -> PinPhase {
        self.phase
    }

    /// The entry being edited in the current phase.
    pub fn current(&self) -> &PinEntry {
        match self.phase {
            PinPhase::Create => &self.pin,
            PinPhase::Confirm => &self.confirm,
        }
    }

    pub fn current_mut(&mut self) -> &mut PinEntry {
        match self.phase {
            PinPhase::Create => &mut self.pin,
            PinPhase::Confirm => &mut self.confirm,
        }
    }

    /// Sanitize a cell after an edit. Clears the error and records the next
    /// focus target.
    pub fn input(&mut self, index: usize, raw: &str) {
        self.error = None;
        let raw = raw.to_string();
        if let Some(next) = self.current_mut().set_digit(index, &raw) {
            self.focus_request = Some(next);
        }
    }

    /// Backspace pressed in cell `index`.
    pub fn backspace(&mut self, index: usize) {
        if let Some(prev) = self.current_mut().delete_digit(index) {
            self.focus_request = Some(prev);
        }
    }

    pub fn is_complete(&self) -> bool {
        self.current().is_complete()
    }

    /// Continue pressed.
    pub fn submit(&mut self) -> PinOutcome {
        match self.phase {
            PinPhase::Create => {
                if !self.pin.is_complete() {
                    return PinOutcome::Incomplete;
                }
                self.phase = PinPhase::Confirm;
                self.error = None;
                self.focus_request = Some(0);
                PinOutcome::Advanced
            }
            PinPhase::Confirm => {
                if !self.confirm.is_complete() {
                    return PinOutcome::Incomplete;
                }
                if self.confirm.digits() == self.pin.digits() {
                    PinOutcome::Completed
                } else {
                    self.confirm.clear();
                    self.error = Some(MISMATCH_MESSAGE.to_string());
                    self.focus_request = Some(0);
                    PinOutcome::Mismatch
                }
            }
        }
    }

    /// Back pressed. Returns `true` if a previous phase existed (confirm →
    /// create); `false` means the caller should leave the PIN screen.
    pub fn retreat(&mut self) -> bool {
        match self.phase.previous() {
            Some(prev) => {
                self.phase = prev;
                self.error = None;
                self.focus_request = Some(0);
                true
            }
            None => false,
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The cell the UI should focus this frame, if a transition asked for
    /// one. Consumed on read.
    pub fn take_focus_request(&mut self) -> Option<usize> {
        self.focus_request.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_pin(setup: &mut PinSetup, digits: &str) {
        for (i, d) in digits.chars().enumerate() {
            setup.input(i, &d.to_string());
        }
    }

    #[test]
    fn test_non_digit_input_is_discarded() {
        let mut entry = PinEntry::default();
        assert_eq!(entry.set_digit(0, "a"), None);
        assert_eq!(entry.cell(0), "");
        assert_eq!(entry.set_digit(0, "5a"), None);
        assert_eq!(entry.cell(0), "");
    }

    #[test]
    fn test_rejected_edit_keeps_previous_digit() {
        let mut entry = PinEntry::default();
        entry.set_digit(0, "7");
        // Replacing the whole cell content with a letter changes nothing.
        assert_eq!(entry.set_digit(0, "a"), None);
        assert_eq!(entry.cell(0), "7");
        assert_eq!(entry.set_digit(0, "7a"), None);
        assert_eq!(entry.cell(0), "7");
        // An empty edit is a deletion and does clear the cell.
        assert_eq!(entry.set_digit(0, ""), None);
        assert_eq!(entry.cell(0), "");
    }

    #[test]
    fn test_cell_keeps_last_digit_only() {
        let mut entry = PinEntry::default();
        entry.set_digit(2, "987");
        assert_eq!(entry.cell(2), "7");
        assert!(entry.cell(2).len() <= 1);
    }

    #[test]
    fn test_focus_advances_until_last_cell() {
        let mut entry = PinEntry::default();
        assert_eq!(entry.set_digit(0, "1"), Some(1));
        assert_eq!(entry.set_digit(1, "2"), Some(2));
        assert_eq!(entry.set_digit(2, "3"), Some(3));
        assert_eq!(entry.set_digit(3, "4"), None);
    }

    #[test]
    fn test_backspace_on_empty_cell_moves_back() {
        let mut entry = PinEntry::default();
        assert_eq!(entry.delete_digit(2), Some(1));
        assert_eq!(entry.delete_digit(0), None);
        entry.set_digit(1, "7");
        assert_eq!(entry.delete_digit(1), None);
    }

    #[test]
    fn test_matching_confirm_completes() {
        let mut setup = PinSetup::default();
        type_pin(&mut setup, "1234");
        assert_eq!(setup.submit(), PinOutcome::Advanced);
        assert_eq!(setup.phase(), PinPhase::Confirm);

        type_pin(&mut setup, "1234");
        assert_eq!(setup.submit(), PinOutcome::Completed);
        assert_eq!(setup.error(), None);
    }

    #[test]
    fn test_mismatch_clears_confirm_and_keeps_create() {
        let mut setup = PinSetup::default();
        type_pin(&mut setup, "1234");
        setup.submit();
        type_pin(&mut setup, "1243");
        setup.take_focus_request();

        assert_eq!(setup.submit(), PinOutcome::Mismatch);
        for i in 0..PIN_LEN {
            assert_eq!(setup.current().cell(i), "");
        }
        assert!(setup.error().is_some());
        assert_eq!(setup.take_focus_request(), Some(0));

        // The created PIN survives — confirming correctly still works.
        type_pin(&mut setup, "1234");
        assert_eq!(setup.submit(), PinOutcome::Completed);
    }

    #[test]
    fn test_incomplete_submit_does_nothing() {
        let mut setup = PinSetup::default();
        setup.input(0, "1");
        assert_eq!(setup.submit(), PinOutcome::Incomplete);
        assert_eq!(setup.phase(), PinPhase::Create);
    }

    #[test]
    fn test_retreat_maps_confirm_to_create() {
        let mut setup = PinSetup::default();
        assert!(!setup.retreat());
        type_pin(&mut setup, "1234");
        setup.submit();
        assert!(setup.retreat());
        assert_eq!(setup.phase(), PinPhase::Create);
    }

    #[test]
    fn test_input_clears_error() {
        let mut setup = PinSetup::default();
        type_pin(&mut setup, "1234");
        setup.submit();
        type_pin(&mut setup, "9999");
        setup.submit();
        assert!(setup.error().is_some());
        setup.input(0, "1");
        assert_eq!(setup.error(), None);
    }
}
