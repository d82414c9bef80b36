//! Automation hub types and the create-automation draft.
//!
//! The create flow is three steps: type selection (a branch select — the
//! choice is recorded and the flow lands straight on the details step),
//! amount/recipient details behind a validity gate, then schedule.

use crate::i18n::Key;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutomationKind {
    Recurring,
    Scheduled,
    RoundUp,
}

impl AutomationKind {
    pub const ALL: [AutomationKind; 3] = [
        AutomationKind::Recurring,
        AutomationKind::Scheduled,
        AutomationKind::RoundUp,
    ];

    pub fn label_key(self) -> Key {
        match self {
            AutomationKind::Recurring => Key::RecurringPayment,
            AutomationKind::Scheduled => Key::ScheduledTransfer,
            AutomationKind::RoundUp => Key::RoundUp,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            AutomationKind::Recurring => "Set up regular payments",
            AutomationKind::Scheduled => "One-time future transfer",
            AutomationKind::RoundUp => "Save spare change automatically",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            AutomationKind::Recurring => "🔄",
            AutomationKind::Scheduled => "📅",
            AutomationKind::RoundUp => "🪙",
        }
    }
}

/// One entry in the automation hub list.
#[derive(Debug, Clone)]
pub struct Automation {
    pub id: u32,
    pub name: String,
    pub kind: AutomationKind,
    pub amount_pence: i64,
    pub recipient: String,
    pub frequency: &'static str,
    pub next_date: &'static str,
    pub icon: &'static str,
    pub active: bool,
}

pub const FREQUENCIES: [&str; 3] = ["Weekly", "Monthly", "Yearly"];

/// Form state for the create flow. The amount is kept as entered text and
/// parsed on demand — an unparsable or empty amount just disables the
/// continue control, it is never an error.
#[derive(Debug, Clone)]
pub struct AutomationDraft {
    pub kind: Option<AutomationKind>,
    pub amount: String,
    pub recipient: String,
    pub frequency: &'static str,
}

impl Default for AutomationDraft {
    fn default() -> Self {
        Self {
            kind: None,
            amount: String::new(),
            recipient: String::new(),
            frequency: "Monthly",
        }
    }
}

impl AutomationDraft {
    /// Record the type choice made on the first step.
    pub fn choose_kind(&mut self, kind: AutomationKind) {
        self.kind = Some(kind);
    }

    /// The entered amount in pence, when it parses to a positive value.
    pub fn amount_pence(&self) -> Option<i64> {
        let pounds: f64 = self.amount.trim().parse().ok()?;
        if pounds > 0.0 {
            Some((pounds * 100.0).round() as i64)
        } else {
            None
        }
    }

    /// Gate for continuing past the details step.
    pub fn details_complete(&self) -> bool {
        self.amount_pence().is_some() && !self.recipient.trim().is_empty()
    }
}
