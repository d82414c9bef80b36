//! Capture-completion trackers for the document and selfie steps.
//!
//! Mocked capture: a slot flips from pending to captured and there is no
//! retake. The ID tracker gates its continue action on both sides being
//! captured.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocSide {
    Front,
    Back,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlotState {
    #[default]
    Pending,
    Captured,
}

/// Two-sided ID capture tracker.
///
/// Capturing the front auto-advances the active side to the back; capturing
/// the back leaves the active side alone (the screen shows a separate
/// continue action once both are done). The slots accept capture in either
/// order via [`capture_side`](DocumentCapture::capture_side).
#[derive(Debug, Clone, Default)]
pub struct DocumentCapture {
    front: SlotState,
    back: SlotState,
    active: Option<DocSide>,
}

impl DocumentCapture {
    pub fn new() -> Self {
        Self {
            front: SlotState::Pending,
            back: SlotState::Pending,
            active: Some(DocSide::Front),
        }
    }

    pub fn active_side(&self) -> DocSide {
        self.active.unwrap_or(DocSide::Front)
    }

    pub fn slot(&self, side: DocSide) -> SlotState {
        match side {
            DocSide::Front => self.front,
            DocSide::Back => self.back,
        }
    }

    pub fn is_captured(&self, side: DocSide) -> bool {
        self.slot(side) == SlotState::Captured
    }

    /// Capture the active side.
    pub fn capture(&mut self) {
        self.capture_side(self.active_side());
    }

    /// Mark `side` as captured. Capturing the front switches the active side
    /// to the back.
    pub fn capture_side(&mut self, side: DocSide) {
        match side {
            DocSide::Front => {
                self.front = SlotState::Captured;
                self.active = Some(DocSide::Back);
            }
            DocSide::Back => {
                self.back = SlotState::Captured;
            }
        }
    }

    /// True iff both sides are captured.
    pub fn can_continue(&self) -> bool {
        self.front == SlotState::Captured && self.back == SlotState::Captured
    }
}

/// Single-slot tracker for the selfie step.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelfieCapture {
    captured: bool,
}

impl SelfieCapture {
    pub fn capture(&mut self) {
        self.captured = true;
    }

    pub fn is_captured(&self) -> bool {
        self.captured
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_front_then_back() {
        let mut doc = DocumentCapture::new();
        assert_eq!(doc.active_side(), DocSide::Front);
        assert!(!doc.can_continue());

        doc.capture();
        assert!(doc.is_captured(DocSide::Front));
        assert!(!doc.is_captured(DocSide::Back));
        assert_eq!(doc.active_side(), DocSide::Back);
        assert!(!doc.can_continue());

        doc.capture();
        assert!(doc.is_captured(DocSide::Back));
        assert!(doc.can_continue());
    }

    #[test]
    fn test_out_of_order_capture_is_permitted() {
        let mut doc = DocumentCapture::new();
        doc.capture_side(DocSide::Back);
        assert!(doc.is_captured(DocSide::Back));
        assert!(!doc.can_continue());
        doc.capture_side(DocSide::Front);
        assert!(doc.can_continue());
    }

    #[test]
    fn test_capture_is_idempotent() {
        let mut doc = DocumentCapture::new();
        doc.capture();
        doc.capture();
        doc.capture();
        assert!(doc.can_continue());
    }

    #[test]
    fn test_selfie_gate() {
        let mut selfie = SelfieCapture::default();
        assert!(!selfie.is_captured());
        selfie.capture();
        assert!(selfie.is_captured());
    }
}
