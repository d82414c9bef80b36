//! Transaction list, detail view, and the dispute flow.

use egui::Ui;
use tokio::sync::mpsc;

use flows::data::SAMPLE_TRANSACTIONS;
use flows::dispute::DISPUTE_REASONS;
use flows::i18n::Key;
use flows::projection::{project, CATEGORIES};
use flows::sequencer::Transition;

use crate::events::{Screen, UiEvent};
use crate::state::AppState;

/// Render the transactions area (list, detail, or dispute).
pub fn show(ui: &mut Ui, state: &mut AppState, ui_tx: &mpsc::UnboundedSender<UiEvent>) {
    match state.screen {
        Screen::TransactionDetail(id) => show_detail(ui, state, ui_tx, id),
        Screen::Dispute(id) => show_dispute(ui, state, ui_tx, id),
        _ => show_list(ui, state, ui_tx),
    }
}

fn show_list(ui: &mut Ui, state: &mut AppState, ui_tx: &mpsc::UnboundedSender<UiEvent>) {
    ui.heading(state.tr(Key::Transactions));
    ui.add_space(8.0);

    // Search box
    ui.add(
        egui::TextEdit::singleline(&mut state.tx_search)
            .hint_text("🔍")
            .desired_width(ui.available_width()),
    );
    ui.add_space(6.0);

    // Category chips
    ui.horizontal_wrapped(|ui| {
        for category in CATEGORIES {
            let selected = state.tx_category == category;
            if ui
                .add(egui::Button::new(category).selected(selected))
                .clicked()
            {
                state.tx_category = category;
            }
        }
    });
    ui.add_space(8.0);

    let groups = project(&SAMPLE_TRANSACTIONS, state.tx_category, &state.tx_search);

    egui::ScrollArea::vertical().show(ui, |ui| {
        for (date, records) in groups {
            ui.label(egui::RichText::new(date).strong().size(13.0));
            ui.add_space(2.0);
            for record in records {
                let row = ui.horizontal(|ui| {
                    ui.label(record.icon);
                    ui.vertical(|ui| {
                        ui.label(record.merchant);
                        ui.label(
                            egui::RichText::new(record.category)
                                .small()
                                .weak(),
                        );
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(record.format_amount());
                    });
                });
                if row.response.interact(egui::Sense::click()).clicked() {
                    state.screen = Screen::TransactionDetail(record.id);
                    let _ = ui_tx.send(UiEvent::NavigatedTo(state.screen));
                }
                ui.separator();
            }
            ui.add_space(8.0);
        }
    });
}

fn show_detail(ui: &mut Ui, state: &mut AppState, ui_tx: &mpsc::UnboundedSender<UiEvent>, id: u32) {
    if ui.button(format!("← {}", state.tr(Key::Back))).clicked() {
        state.screen = Screen::Transactions;
        let _ = ui_tx.send(UiEvent::NavigatedTo(state.screen));
        return;
    }

    let Some(record) = flows::data::transaction(id) else {
        // Stale id — fall back to the list.
        state.screen = Screen::Transactions;
        return;
    };

    ui.add_space(20.0);
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new(record.icon).size(48.0));
        ui.add_space(8.0);
        ui.heading(record.merchant);
        ui.label(
            egui::RichText::new(record.format_amount())
                .size(30.0)
                .strong(),
        );
    });

    ui.add_space(16.0);
    ui.group(|ui| {
        ui.set_min_width(ui.available_width());
        detail_row(ui, "📅", record.date);
        detail_row(ui, "📍", record.location);
        detail_row(ui, "🏷", record.category);
        detail_row(ui, "🧾", record.code);
    });

    ui.add_space(20.0);
    ui.vertical_centered(|ui| {
        if ui
            .add(
                egui::Button::new(format!("⚠ {}", state.tr(Key::Dispute)))
                    .min_size(egui::vec2(260.0, 40.0)),
            )
            .clicked()
        {
            state.start_dispute(id);
            let _ = ui_tx.send(UiEvent::NavigatedTo(state.screen));
        }
    });
}

fn detail_row(ui: &mut Ui, icon: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.label(icon);
        ui.label(value);
    });
}

fn show_dispute(ui: &mut Ui, state: &mut AppState, ui_tx: &mpsc::UnboundedSender<UiEvent>, id: u32) {
    if ui.button(format!("← {}", state.tr(Key::Back))).clicked() {
        if state.dispute_steps.retreat() == Transition::Exited {
            state.screen = Screen::TransactionDetail(id);
            let _ = ui_tx.send(UiEvent::NavigatedTo(state.screen));
        }
        return;
    }

    ui.add_space(12.0);
    ui.heading(state.tr(Key::Dispute));
    step_dots(ui, state.dispute_steps.step(), state.dispute_steps.last() + 1);
    ui.add_space(12.0);

    match state.dispute_steps.step() {
        // Step one: the reason list is a branch select — the click records
        // the choice and lands straight on the details step.
        0 => {
            for (index, reason) in DISPUTE_REASONS.iter().enumerate() {
                let selected = state.dispute.reason == Some(index);
                let button = egui::Button::new(*reason)
                    .selected(selected)
                    .min_size(egui::vec2(ui.available_width(), 36.0));
                if ui.add(button).clicked() {
                    state.dispute.choose_reason(index);
                    state.dispute_steps.branch_to(1);
                }
                ui.add_space(4.0);
            }
        }

        // Step two: free-text details (optional)
        1 => {
            ui.add(
                egui::TextEdit::multiline(&mut state.dispute.details)
                    .desired_rows(6)
                    .desired_width(ui.available_width()),
            );
            ui.add_space(12.0);
            if ui.button(state.tr(Key::Continue)).clicked() {
                state.dispute_steps.advance();
            }
        }

        // Step three: review and submit
        _ => {
            ui.group(|ui| {
                ui.set_min_width(ui.available_width());
                if let Some(reason) = state.dispute.reason_text() {
                    ui.label(egui::RichText::new(reason).strong());
                }
                if !state.dispute.details.is_empty() {
                    ui.add_space(4.0);
                    ui.label(&state.dispute.details);
                }
            });
            ui.add_space(12.0);
            if ui.button(state.tr(Key::Done)).clicked() {
                if state.dispute_steps.advance() == Transition::Completed {
                    log::info!("dispute submitted for transaction {}", id);
                    state.screen = Screen::Transactions;
                    let _ = ui_tx.send(UiEvent::NavigatedTo(state.screen));
                }
            }
        }
    }
}

/// Step indicator dots shared by the multi-step flows.
pub(super) fn step_dots(ui: &mut Ui, current: usize, count: usize) {
    ui.horizontal(|ui| {
        for index in 0..count {
            let filled = index == current;
            let text = if filled { "●" } else { "○" };
            ui.label(text);
        }
    });
}
