//! Dispute flow draft: reason selection (branch select), free-text details,
//! confirmation.

pub const DISPUTE_REASONS: [&str; 5] = [
    "I don't recognize this merchant",
    "Incorrect amount charged",
    "Duplicate transaction",
    "Goods or services not received",
    "Other service issue",
];

/// Form state for a dispute against one transaction.
#[derive(Debug, Clone, Default)]
pub struct DisputeDraft {
    /// Index into [`DISPUTE_REASONS`], set by the branch select on step one.
    pub reason: Option<usize>,
    pub details: String,
}

impl DisputeDraft {
    pub fn choose_reason(&mut self, index: usize) {
        if index < DISPUTE_REASONS.len() {
            self.reason = Some(index);
        }
    }

    pub fn reason_text(&self) -> Option<&'static str> {
        self.reason.map(|i| DISPUTE_REASONS[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choose_reason() {
        let mut draft = DisputeDraft::default();
        draft.choose_reason(2);
        assert_eq!(draft.reason_text(), Some("Duplicate transaction"));
    }

    #[test]
    fn test_out_of_range_reason_ignored() {
        let mut draft = DisputeDraft::default();
        draft.choose_reason(99);
        assert_eq!(draft.reason, None);
    }
}
