//! Integration test for bank-gui flows
//! Walks the signup journey and the in-app flows end to end.
//!
//! The GUI itself is hard to test without a display, so these tests drive the
//! underlying flows library the same way the views do.

use flows::capture::{DocSide, DocumentCapture, SelfieCapture};
use flows::dispute::{DisputeDraft, DISPUTE_REASONS};
use flows::pin::{PinOutcome, PinPhase, PinSetup};
use flows::progress::{ProgressSimulator, VERIFICATION_CHECKPOINTS};
use flows::projection::{project, ALL_CATEGORY};
use flows::sequencer::{StepSequencer, Transition};

#[test]
fn test_full_onboarding_walk() {
    println!("Testing full onboarding walk...");

    let mut steps = StepSequencer::new(6);
    let mut id_capture = DocumentCapture::new();
    let mut selfie = SelfieCapture::default();
    let mut pin = PinSetup::default();

    // Welcome → language → ID upload
    assert_eq!(steps.advance(), Transition::Moved(1));
    assert_eq!(steps.advance(), Transition::Moved(2));

    // Both sides of the document, front first
    assert!(!id_capture.can_continue());
    id_capture.capture();
    assert_eq!(id_capture.active_side(), DocSide::Back);
    id_capture.capture();
    assert!(id_capture.can_continue());
    assert_eq!(steps.advance(), Transition::Moved(3));

    // Selfie
    selfie.capture();
    assert!(selfie.is_captured());
    assert_eq!(steps.advance(), Transition::Moved(4));

    // Verification runs to completion off-screen
    let mut sim = ProgressSimulator::new();
    let mut last_percent = 0;
    while let Some(tick) = sim.next_checkpoint() {
        assert!(tick.percent > last_percent);
        last_percent = tick.percent;
    }
    assert_eq!(last_percent, 100);
    assert_eq!(steps.advance(), Transition::Moved(5));

    // PIN create + confirm
    for (i, d) in ["2", "5", "8", "0"].iter().enumerate() {
        pin.input(i, d);
    }
    assert_eq!(pin.submit(), PinOutcome::Advanced);
    assert_eq!(pin.phase(), PinPhase::Confirm);
    for (i, d) in ["2", "5", "8", "0"].iter().enumerate() {
        pin.input(i, d);
    }
    assert_eq!(pin.submit(), PinOutcome::Completed);

    assert_eq!(steps.advance(), Transition::Completed);
    println!("✅ Full onboarding walk passed");
}

#[test]
fn test_pin_mismatch_keeps_first_entry() {
    let mut pin = PinSetup::default();
    for (i, d) in ["1", "2", "3", "4"].iter().enumerate() {
        pin.input(i, d);
    }
    assert_eq!(pin.submit(), PinOutcome::Advanced);
    for (i, d) in ["1", "2", "4", "3"].iter().enumerate() {
        pin.input(i, d);
    }
    assert_eq!(pin.submit(), PinOutcome::Mismatch);

    // Confirm entry is wiped, the original PIN survives, focus returns home
    assert_eq!(pin.phase(), PinPhase::Confirm);
    assert!(!pin.is_complete());
    assert!(pin.error().is_some());
    assert_eq!(pin.take_focus_request(), Some(0));

    // Going back shows the preserved first entry
    assert!(pin.retreat());
    assert_eq!(pin.phase(), PinPhase::Create);
    assert!(pin.is_complete());
}

#[test]
fn test_verification_schedule_matches_ui_copy() {
    assert_eq!(VERIFICATION_CHECKPOINTS.len(), 4);
    assert_eq!(VERIFICATION_CHECKPOINTS[0].percent, 30);
    assert_eq!(VERIFICATION_CHECKPOINTS[0].status, "Analyzing documents...");
    assert_eq!(VERIFICATION_CHECKPOINTS[3].percent, 100);
    assert_eq!(VERIFICATION_CHECKPOINTS[3].status, "Complete!");

    let mut sim = ProgressSimulator::new();
    assert!(!sim.is_exhausted());
    for expected in VERIFICATION_CHECKPOINTS {
        let tick = sim.next_checkpoint().unwrap();
        assert_eq!(tick.percent, expected.percent);
    }
    assert!(sim.is_exhausted());
    assert_eq!(sim.next_checkpoint(), None);
}

#[test]
fn test_transaction_browsing() {
    println!("Testing transaction browsing...");

    // Unfiltered: every record appears, grouped by date
    let all = project(&flows::data::SAMPLE_TRANSACTIONS, ALL_CATEGORY, "");
    let total: usize = all.iter().map(|(_, records)| records.len()).sum();
    assert_eq!(total, flows::data::SAMPLE_TRANSACTIONS.len());

    // Category filter narrows, search narrows further
    let transport = project(&flows::data::SAMPLE_TRANSACTIONS, "Transport", "");
    for (_, records) in &transport {
        for record in records {
            assert_eq!(record.category, "Transport");
        }
    }

    let netflix = project(&flows::data::SAMPLE_TRANSACTIONS, ALL_CATEGORY, "NET");
    let matches: Vec<_> = netflix
        .iter()
        .flat_map(|(_, records)| records.iter())
        .collect();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].merchant, "Netflix");
    println!("✅ Transaction browsing passed");
}

#[test]
fn test_dispute_walk() {
    let mut steps = StepSequencer::new(3);
    let mut draft = DisputeDraft::default();

    // Leaving from the first step exits the flow
    assert_eq!(steps.retreat(), Transition::Exited);

    // Picking a reason is the step-one action itself — the choice jumps
    // straight to the details step, no separate continue press.
    draft.choose_reason(1);
    assert_eq!(draft.reason_text(), Some(DISPUTE_REASONS[1]));
    assert_eq!(steps.branch_to(1), Transition::Moved(1));

    draft.details.push_str("Charged twice for the same order");
    assert_eq!(steps.advance(), Transition::Moved(2));
    assert_eq!(steps.advance(), Transition::Completed);

    // A second submit does not re-complete
    assert_eq!(steps.advance(), Transition::Stayed);
}

#[test]
fn test_automation_create_walk() {
    use flows::automation::{AutomationDraft, AutomationKind};

    let mut steps = StepSequencer::new(3);
    let mut draft = AutomationDraft::default();

    draft.choose_kind(AutomationKind::Scheduled);
    assert_eq!(steps.branch_to(1), Transition::Moved(1));

    // Details gate: amount must parse to something positive
    draft.amount = "abc".to_string();
    draft.recipient = "Landlord".to_string();
    assert!(!draft.details_complete());
    draft.amount = "950.00".to_string();
    assert!(draft.details_complete());
    assert_eq!(draft.amount_pence(), Some(95_000));

    assert_eq!(steps.advance(), Transition::Moved(2));
    assert_eq!(steps.advance(), Transition::Completed);
}

#[test]
fn test_branch_select_jumps_without_a_continue_press() {
    use flows::automation::{AutomationDraft, AutomationKind};

    // Automation type: one click records the choice and moves the flow
    let mut steps = StepSequencer::new(3);
    let mut draft = AutomationDraft::default();
    draft.choose_kind(AutomationKind::RoundUp);
    assert_eq!(steps.branch_to(1), Transition::Moved(1));
    assert_eq!(draft.kind, Some(AutomationKind::RoundUp));
    assert_eq!(steps.step(), 1);

    // Dispute reason: same single-click shape
    let mut steps = StepSequencer::new(3);
    let mut draft = DisputeDraft::default();
    draft.choose_reason(3);
    assert_eq!(steps.branch_to(1), Transition::Moved(1));
    assert_eq!(draft.reason_text(), Some(DISPUTE_REASONS[3]));

    // Back from the details step returns to the select with the choice kept
    assert_eq!(steps.retreat(), Transition::Moved(0));
    assert_eq!(draft.reason_text(), Some(DISPUTE_REASONS[3]));
}

#[test]
fn test_tour_dot_navigation() {
    let mut tour = StepSequencer::new(flows::data::FEATURES.len());

    // Jump straight to the last slide, then past it
    tour.branch_to(99);
    assert_eq!(tour.step(), flows::data::FEATURES.len() - 1);
    assert!(tour.is_terminal());
    assert_eq!(tour.advance(), Transition::Completed);

    // Dots still work after completion
    assert_eq!(tour.branch_to(0), Transition::Moved(0));
}
