//! Signup flow: welcome, language, ID capture, selfie, verification, PIN.
//!
//! The active sub-screen is whatever step the onboarding sequencer is on.
//! All step logic lives in `flows`; this module only renders and forwards.

use egui::Ui;
use tokio::sync::mpsc;

use flows::capture::DocSide;
use flows::i18n::Key;
use flows::pin::{PinOutcome, PinPhase, PIN_LEN};

use crate::events::UiEvent;
use crate::state::{onboarding_step, AppState};

/// Render the onboarding flow.
pub fn show(ui: &mut Ui, state: &mut AppState, ui_tx: &mpsc::UnboundedSender<UiEvent>) {
    match state.onboarding.sequencer.step() {
        onboarding_step::WELCOME => show_welcome(ui, state),
        onboarding_step::LANGUAGE => show_language(ui, state, ui_tx),
        onboarding_step::ID_UPLOAD => show_id_upload(ui, state),
        onboarding_step::SELFIE => show_selfie(ui, state),
        onboarding_step::VERIFICATION => show_verification(ui, state, ui_tx),
        onboarding_step::ACCOUNT_SETUP => show_account_setup(ui, state, ui_tx),
        _ => {}
    }
}

fn show_welcome(ui: &mut Ui, state: &mut AppState) {
    ui.add_space(80.0);
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new("🏦").size(64.0));
        ui.add_space(20.0);
        heading(ui, state, "GlassBank");
        ui.add_space(12.0);
        ui.label(body_text(state, state.tr(Key::Welcome)));
        ui.add_space(40.0);

        if primary_button(ui, state, state.tr(Key::GetStarted)).clicked() {
            state.onboarding.sequencer.advance();
        }
    });
}

fn show_language(ui: &mut Ui, state: &mut AppState, ui_tx: &mpsc::UnboundedSender<UiEvent>) {
    back_button(ui, state, |state| {
        state.onboarding.sequencer.retreat();
    });

    ui.add_space(20.0);
    heading(ui, state, state.tr(Key::SelectLanguage));
    ui.add_space(16.0);

    let mut chosen = None;
    for language in flows::i18n::Language::ALL {
        let selected = state.language == language;
        let label = format!("{}  {}", language.flag(), language.native_name());
        let button = egui::Button::new(body_text(state, &label))
            .selected(selected)
            .min_size(egui::vec2(ui.available_width(), 40.0));
        if ui.add(button).clicked() && !selected {
            chosen = Some(language);
        }
        ui.add_space(6.0);
    }
    if let Some(language) = chosen {
        state.language = language;
        let _ = ui_tx.send(UiEvent::SetLanguage(language));
    }

    ui.add_space(24.0);
    if primary_button(ui, state, state.tr(Key::Continue)).clicked() {
        state.onboarding.sequencer.advance();
    }
}

fn show_id_upload(ui: &mut Ui, state: &mut AppState) {
    back_button(ui, state, |state| {
        state.onboarding.sequencer.retreat();
    });

    ui.add_space(20.0);
    heading(ui, state, state.tr(Key::UploadId));
    ui.add_space(16.0);

    capture_slot(ui, state, DocSide::Front, Key::FrontOfId);
    ui.add_space(10.0);
    capture_slot(ui, state, DocSide::Back, Key::BackOfId);

    ui.add_space(24.0);
    let can_continue = state.onboarding.id_capture.can_continue();
    if continue_button(ui, state, can_continue).clicked() {
        state.onboarding.sequencer.advance();
    }
}

/// One document slot. Clicking an empty slot captures that side directly, so
/// the two sides can be taken in either order.
fn capture_slot(ui: &mut Ui, state: &mut AppState, side: DocSide, label: Key) {
    let captured = state.onboarding.id_capture.is_captured(side);
    let active = state.onboarding.id_capture.active_side() == side;

    let icon = if captured { "✅" } else { "📷" };
    let text = format!("{}  {}", icon, state.tr(label));
    let button = egui::Button::new(body_text(state, &text))
        .selected(active && !captured)
        .min_size(egui::vec2(ui.available_width(), 72.0));

    if ui.add(button).clicked() && !captured {
        state.onboarding.id_capture.capture_side(side);
    }
}

fn show_selfie(ui: &mut Ui, state: &mut AppState) {
    back_button(ui, state, |state| {
        state.onboarding.sequencer.retreat();
    });

    ui.add_space(20.0);
    heading(ui, state, state.tr(Key::TakeSelfie));
    ui.add_space(24.0);

    ui.vertical_centered(|ui| {
        let captured = state.onboarding.selfie.is_captured();
        let icon = if captured { "✅" } else { "🤳" };
        let button = egui::Button::new(egui::RichText::new(icon).size(48.0))
            .min_size(egui::vec2(160.0, 160.0));
        if ui.add(button).clicked() && !captured {
            state.onboarding.selfie.capture();
        }
        if !captured {
            ui.add_space(8.0);
            ui.label(body_text(state, state.tr(Key::Capture)));
        }
    });

    ui.add_space(24.0);
    let can_continue = state.onboarding.selfie.is_captured();
    if continue_button(ui, state, can_continue).clicked() {
        state.onboarding.sequencer.advance();
    }
}

fn show_verification(ui: &mut Ui, state: &mut AppState, ui_tx: &mpsc::UnboundedSender<UiEvent>) {
    // First frame on this step kicks the simulation off.
    if !state.onboarding.verify_started {
        state.onboarding.verify_started = true;
        state.onboarding.verify_progress = None;
        let _ = ui_tx.send(UiEvent::StartVerification);
    }

    back_button(ui, state, |state| {
        state.onboarding.reset_verification();
        state.onboarding.sequencer.retreat();
    });
    if !state.onboarding.verify_started {
        // Back was clicked this frame — tell the service to stop the run.
        let _ = ui_tx.send(UiEvent::CancelVerification);
        return;
    }

    ui.add_space(60.0);
    ui.vertical_centered(|ui| {
        heading(ui, state, state.tr(Key::Verifying));
        ui.add_space(30.0);

        let (fraction, status) = match state.onboarding.verify_progress {
            Some(tick) => (f32::from(tick.percent) / 100.0, tick.status),
            None => (0.0, ""),
        };
        ui.add(
            egui::ProgressBar::new(fraction)
                .desired_width(280.0)
                .show_percentage(),
        );
        ui.add_space(12.0);
        ui.label(body_text(state, status));
    });
}

fn show_account_setup(ui: &mut Ui, state: &mut AppState, ui_tx: &mpsc::UnboundedSender<UiEvent>) {
    back_button(ui, state, |state| {
        // Confirm phase first drops back to create; from create we leave the
        // step entirely, which re-runs verification on re-entry.
        if !state.onboarding.pin.retreat() {
            state.onboarding.reset_verification();
            state.onboarding.sequencer.retreat();
        }
    });

    ui.add_space(20.0);
    let title = match state.onboarding.pin.phase() {
        PinPhase::Create => state.tr(Key::CreatePin),
        PinPhase::Confirm => state.tr(Key::ConfirmPin),
    };
    heading(ui, state, title);
    ui.add_space(24.0);

    pin_cells(ui, state);

    if let Some(error) = state.onboarding.pin.error() {
        ui.add_space(10.0);
        ui.vertical_centered(|ui| {
            ui.colored_label(egui::Color32::RED, error);
        });
    }

    ui.add_space(24.0);
    let complete = state.onboarding.pin.is_complete();
    if continue_button(ui, state, complete).clicked() {
        match state.onboarding.pin.submit() {
            PinOutcome::Completed => {
                state.complete_onboarding();
                let _ = ui_tx.send(UiEvent::NavigatedTo(state.screen));
            }
            PinOutcome::Advanced | PinOutcome::Mismatch | PinOutcome::Incomplete => {}
        }
    }
}

/// Four single-digit entry cells with managed focus.
fn pin_cells(ui: &mut Ui, state: &mut AppState) {
    let focus_request = state.onboarding.pin.take_focus_request();
    let cell_size = if state.is_simplified() { 64.0 } else { 52.0 };

    ui.horizontal(|ui| {
        let total = cell_size * PIN_LEN as f32 + ui.spacing().item_spacing.x * 3.0;
        let pad = ((ui.available_width() - total) / 2.0).max(0.0);
        ui.add_space(pad);

        for index in 0..PIN_LEN {
            let mut buffer = state.onboarding.pin.current().cell(index).to_string();
            let response = ui.add(
                egui::TextEdit::singleline(&mut buffer)
                    .desired_width(cell_size)
                    .font(egui::TextStyle::Heading)
                    .horizontal_align(egui::Align::Center)
                    .password(true),
            );

            if focus_request == Some(index) {
                response.request_focus();
            }
            if response.changed() {
                state.onboarding.pin.input(index, &buffer);
            }
            // Backspace in an already-empty cell steps back to the previous one.
            if response.has_focus()
                && buffer.is_empty()
                && ui.input(|i| i.key_pressed(egui::Key::Backspace))
            {
                state.onboarding.pin.backspace(index);
            }
        }
    });
}

// ============================================================================
// Shared widgets
// ============================================================================

fn heading(ui: &mut Ui, state: &AppState, text: &str) {
    let size = if state.is_simplified() { 28.0 } else { 22.0 };
    ui.label(egui::RichText::new(text).size(size).strong());
}

fn body_text(state: &AppState, text: &str) -> egui::RichText {
    let size = if state.is_simplified() { 18.0 } else { 14.0 };
    egui::RichText::new(text).size(size)
}

fn primary_button(ui: &mut Ui, state: &AppState, text: &str) -> egui::Response {
    let size = if state.is_simplified() { 18.0 } else { 15.0 };
    ui.add(
        egui::Button::new(egui::RichText::new(text).size(size))
            .min_size(egui::vec2(220.0, 44.0)),
    )
}

fn continue_button(ui: &mut Ui, state: &mut AppState, enabled: bool) -> egui::Response {
    let label = state.tr(Key::Continue);
    let size = if state.is_simplified() { 18.0 } else { 15.0 };
    ui.vertical_centered(|ui| {
        ui.add_enabled(
            enabled,
            egui::Button::new(egui::RichText::new(label).size(size))
                .min_size(egui::vec2(220.0, 44.0)),
        )
    })
    .inner
}

fn back_button(ui: &mut Ui, state: &mut AppState, on_back: impl FnOnce(&mut AppState)) {
    if ui
        .button(format!("← {}", state.tr(Key::Back)))
        .clicked()
    {
        on_back(state);
    }
}
