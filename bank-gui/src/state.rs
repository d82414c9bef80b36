//! Application state — plain data, no async, no Arc.
//!
//! `AppState` holds everything the UI needs to render. The service task sends
//! `ServiceEvent`s which are applied via `AppState::apply()`. The UI reads
//! fields directly — no locking, no channels.

use flows::automation::{Automation, AutomationDraft};
use flows::capture::{DocumentCapture, SelfieCapture};
use flows::dispute::DisputeDraft;
use flows::i18n::{self, Key, Language};
use flows::pin::PinSetup;
use flows::progress::ProgressTick;
use flows::projection::ALL_CATEGORY;
use flows::sequencer::StepSequencer;

use crate::config::{Config, DisplayMode};
use crate::events::{Screen, ServiceEvent};

/// Onboarding step indices, in order.
pub mod onboarding_step {
    pub const WELCOME: usize = 0;
    pub const LANGUAGE: usize = 1;
    pub const ID_UPLOAD: usize = 2;
    pub const SELFIE: usize = 3;
    pub const VERIFICATION: usize = 4;
    pub const ACCOUNT_SETUP: usize = 5;
    pub const COUNT: usize = 6;
}

/// State for the multi-step signup flow.
#[derive(Debug)]
pub struct OnboardingState {
    pub sequencer: StepSequencer,
    pub id_capture: DocumentCapture,
    pub selfie: SelfieCapture,
    pub pin: PinSetup,
    /// Latest checkpoint reported by the service, if a run is in flight.
    pub verify_progress: Option<ProgressTick>,
    /// Set when `StartVerification` has been sent and not yet resolved.
    pub verify_started: bool,
}

impl Default for OnboardingState {
    fn default() -> Self {
        Self {
            sequencer: StepSequencer::new(onboarding_step::COUNT),
            id_capture: DocumentCapture::new(),
            selfie: SelfieCapture::default(),
            pin: PinSetup::default(),
            verify_progress: None,
            verify_started: false,
        }
    }
}

impl OnboardingState {
    /// Drop any in-flight verification result so the step can be re-entered.
    pub fn reset_verification(&mut self) {
        self.verify_progress = None;
        self.verify_started = false;
    }
}

/// All application state needed for rendering.
#[derive(Debug)]
pub struct AppState {
    // -- Navigation --
    pub screen: Screen,

    // -- Preferences (mirrors the persisted Config) --
    pub language: Language,
    pub display_mode: DisplayMode,

    // -- Onboarding --
    pub onboarding: OnboardingState,
    pub onboarded: bool,

    // -- Transactions browsing --
    pub tx_search: String,
    pub tx_category: &'static str,

    // -- Dispute flow --
    pub dispute: DisputeDraft,
    pub dispute_steps: StepSequencer,

    // -- Automations --
    pub automations: Vec<Automation>,
    pub automation_draft: AutomationDraft,
    pub automation_steps: StepSequencer,

    // -- What's-new tour --
    pub tour: StepSequencer,
    pub tour_seen: bool,

    // -- Notifications --
    pub error: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            screen: Screen::Onboarding,
            language: Language::default(),
            display_mode: DisplayMode::default(),
            onboarding: OnboardingState::default(),
            onboarded: false,
            tx_search: String::new(),
            tx_category: ALL_CATEGORY,
            dispute: DisputeDraft::default(),
            dispute_steps: StepSequencer::new(3),
            automations: flows::data::sample_automations(),
            automation_draft: AutomationDraft::default(),
            automation_steps: StepSequencer::new(3),
            tour: StepSequencer::new(flows::data::FEATURES.len()),
            tour_seen: false,
            error: None,
        }
    }
}

impl AppState {
    /// Build initial state from the loaded config.
    pub fn from_config(config: &Config) -> Self {
        Self {
            language: config.language,
            display_mode: config.display_mode,
            ..Self::default()
        }
    }

    /// Apply a service event. Pure state transition — no I/O.
    pub fn apply(&mut self, event: ServiceEvent) {
        match event {
            ServiceEvent::VerificationProgress(tick) => {
                self.onboarding.verify_progress = Some(tick);
            }
            ServiceEvent::VerificationComplete => {
                // Only meaningful while the verification step is showing;
                // a cancelled run can still deliver a stale completion.
                if self.screen == Screen::Onboarding
                    && self.onboarding.verify_started
                    && self.onboarding.sequencer.step() == onboarding_step::VERIFICATION
                {
                    self.onboarding.verify_started = false;
                    self.onboarding.sequencer.advance();
                }
            }
            ServiceEvent::SettingsSaved => {
                log::debug!("preferences persisted");
            }
            ServiceEvent::Error(msg) => {
                self.error = Some(msg);
            }
        }
    }

    /// Translate a key in the current language.
    pub fn tr(&self, key: Key) -> &'static str {
        i18n::translate(self.language, key)
    }

    pub fn is_simplified(&self) -> bool {
        self.display_mode == DisplayMode::Simplified
    }

    /// Finish onboarding and land on the dashboard.
    pub fn complete_onboarding(&mut self) {
        self.onboarded = true;
        self.screen = Screen::Dashboard;
    }

    /// Open the dispute flow for a transaction, starting from a clean draft.
    pub fn start_dispute(&mut self, tx_id: u32) {
        self.dispute = DisputeDraft::default();
        self.dispute_steps = StepSequencer::new(3);
        self.screen = Screen::Dispute(tx_id);
    }

    /// Open the create-automation flow, starting from a clean draft.
    pub fn start_create_automation(&mut self) {
        self.automation_draft = AutomationDraft::default();
        self.automation_steps = StepSequencer::new(3);
        self.screen = Screen::CreateAutomation;
    }

    /// Open the what's-new tour from the first slide.
    pub fn start_tour(&mut self) {
        self.tour = StepSequencer::new(flows::data::FEATURES.len());
        self.screen = Screen::WhatsNew;
    }

    /// Close the tour, remembering it was seen so the banner disappears.
    pub fn dismiss_tour(&mut self) {
        self.tour_seen = true;
        self.screen = Screen::Dashboard;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flows::progress::VERIFICATION_CHECKPOINTS;

    #[test]
    fn test_verification_complete_advances_only_on_step() {
        let mut state = AppState::default();
        state.onboarding.verify_started = true;

        // Not on the verification step yet — ignored.
        state.apply(ServiceEvent::VerificationComplete);
        assert_eq!(state.onboarding.sequencer.step(), onboarding_step::WELCOME);

        state
            .onboarding
            .sequencer
            .branch_to(onboarding_step::VERIFICATION);
        state.apply(ServiceEvent::VerificationProgress(
            VERIFICATION_CHECKPOINTS[3],
        ));
        state.apply(ServiceEvent::VerificationComplete);
        assert_eq!(
            state.onboarding.sequencer.step(),
            onboarding_step::ACCOUNT_SETUP
        );
        assert!(!state.onboarding.verify_started);
    }

    #[test]
    fn test_stale_completion_ignored_after_cancel() {
        let mut state = AppState::default();
        state
            .onboarding
            .sequencer
            .branch_to(onboarding_step::VERIFICATION);
        state.onboarding.verify_started = true;
        state.onboarding.reset_verification();

        state.apply(ServiceEvent::VerificationComplete);
        assert_eq!(
            state.onboarding.sequencer.step(),
            onboarding_step::VERIFICATION
        );
    }

    #[test]
    fn test_start_dispute_resets_draft() {
        let mut state = AppState::default();
        state.dispute.choose_reason(2);
        state.dispute_steps.advance();

        state.start_dispute(3);
        assert_eq!(state.screen, Screen::Dispute(3));
        assert!(state.dispute.reason.is_none());
        assert_eq!(state.dispute_steps.step(), 0);
    }

    #[test]
    fn test_error_event_surfaces() {
        let mut state = AppState::default();
        state.apply(ServiceEvent::Error("disk full".to_string()));
        assert_eq!(state.error.as_deref(), Some("disk full"));
    }

    #[test]
    fn test_from_config() {
        let config = Config {
            language: Language::Es,
            display_mode: DisplayMode::Simplified,
        };
        let state = AppState::from_config(&config);
        assert_eq!(state.language, Language::Es);
        assert!(state.is_simplified());
        assert_eq!(state.tr(Key::Continue), "Continuar");
    }
}
