//! Event types for communication between UI and service task.
//!
//! These two enums are the *only* interface between the synchronous egui render
//! loop and the asynchronous service task. No shared state, no Arc, no Mutex.

use flows::i18n::Language;
use flows::progress::ProgressTick;

use crate::config::DisplayMode;

// ============================================================================
// UI → Service
// ============================================================================

/// Commands sent from the UI thread to the background service task.
#[derive(Debug)]
pub enum UiEvent {
    /// Kick off the identity verification simulation.
    StartVerification,

    /// Abandon a running verification (user navigated back).
    CancelVerification,

    /// Persist a new interface language.
    SetLanguage(Language),

    /// Persist a new display mode.
    SetDisplayMode(DisplayMode),

    /// The user navigated to a new screen.
    NavigatedTo(Screen),
}

/// Screens the app can display.
///
/// Each screen has a stable path string, mirroring the route names users see
/// in support documentation. The paths are what the service logs on
/// navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Onboarding,
    Dashboard,
    Transactions,
    TransactionDetail(u32),
    Dispute(u32),
    Automations,
    CreateAutomation,
    More,
    WhatsNew,
}

impl Screen {
    pub fn path(self) -> &'static str {
        match self {
            Screen::Onboarding => "/onboarding",
            Screen::Dashboard => "/dashboard",
            Screen::Transactions => "/transactions",
            Screen::TransactionDetail(_) => "/transactions/detail",
            Screen::Dispute(_) => "/transactions/dispute",
            Screen::Automations => "/automations",
            Screen::CreateAutomation => "/automations/create",
            Screen::More => "/more",
            Screen::WhatsNew => "/whats-new",
        }
    }
}

// ============================================================================
// Service → UI
// ============================================================================

/// Events sent from the service task back to the UI thread.
#[derive(Debug)]
pub enum ServiceEvent {
    /// The verification simulation reached a checkpoint.
    VerificationProgress(ProgressTick),

    /// The verification simulation finished (fires once per run).
    VerificationComplete,

    /// Preferences were written to disk.
    SettingsSaved,

    /// Non-fatal error to display in the UI.
    Error(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_distinct() {
        let screens = [
            Screen::Onboarding,
            Screen::Dashboard,
            Screen::Transactions,
            Screen::TransactionDetail(1),
            Screen::Dispute(1),
            Screen::Automations,
            Screen::CreateAutomation,
            Screen::More,
            Screen::WhatsNew,
        ];
        for (i, a) in screens.iter().enumerate() {
            for b in &screens[i + 1..] {
                assert_ne!(a.path(), b.path());
            }
        }
    }

    #[test]
    fn test_detail_paths_ignore_the_id() {
        assert_eq!(Screen::TransactionDetail(1).path(), Screen::TransactionDetail(9).path());
        assert_eq!(Screen::Dispute(1).path(), "/transactions/dispute");
    }
}
