//! Automation hub and the three-step create flow.

use egui::Ui;
use tokio::sync::mpsc;

use flows::automation::{Automation, AutomationKind, FREQUENCIES};
use flows::data::format_pounds;
use flows::i18n::Key;
use flows::sequencer::Transition;

use crate::events::{Screen, UiEvent};
use crate::state::AppState;

use super::transactions::step_dots;

/// Render the automations area (hub or create flow).
pub fn show(ui: &mut Ui, state: &mut AppState, ui_tx: &mpsc::UnboundedSender<UiEvent>) {
    match state.screen {
        Screen::CreateAutomation => show_create(ui, state, ui_tx),
        _ => show_hub(ui, state, ui_tx),
    }
}

fn show_hub(ui: &mut Ui, state: &mut AppState, ui_tx: &mpsc::UnboundedSender<UiEvent>) {
    ui.horizontal(|ui| {
        ui.heading(state.tr(Key::Automations));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button(format!("➕ {}", state.tr(Key::CreateAutomation))).clicked() {
                state.start_create_automation();
                let _ = ui_tx.send(UiEvent::NavigatedTo(state.screen));
            }
        });
    });
    let active = state.automations.iter().filter(|a| a.active).count();
    ui.label(
        egui::RichText::new(format!("{} / {}", active, state.automations.len()))
            .small()
            .weak(),
    );
    ui.add_space(10.0);

    egui::ScrollArea::vertical().show(ui, |ui| {
        for automation in &mut state.automations {
            ui.group(|ui| {
                ui.set_min_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(automation.icon).size(22.0));
                    ui.vertical(|ui| {
                        ui.label(egui::RichText::new(&automation.name).strong());
                        ui.label(
                            egui::RichText::new(format!(
                                "{} · {}",
                                format_pounds(automation.amount_pence),
                                automation.frequency
                            ))
                            .small()
                            .weak(),
                        );
                        ui.label(
                            egui::RichText::new(format!("→ {}", automation.next_date))
                                .small()
                                .weak(),
                        );
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.checkbox(&mut automation.active, "");
                    });
                });
            });
            ui.add_space(6.0);
        }
    });
}

fn show_create(ui: &mut Ui, state: &mut AppState, ui_tx: &mpsc::UnboundedSender<UiEvent>) {
    if ui.button(format!("← {}", state.tr(Key::Back))).clicked() {
        if state.automation_steps.retreat() == Transition::Exited {
            state.screen = Screen::Automations;
            let _ = ui_tx.send(UiEvent::NavigatedTo(state.screen));
        }
        return;
    }

    ui.add_space(12.0);
    ui.heading(state.tr(Key::CreateAutomation));
    step_dots(
        ui,
        state.automation_steps.step(),
        state.automation_steps.last() + 1,
    );
    ui.add_space(12.0);

    match state.automation_steps.step() {
        // Step one: type selection is a branch select — the click records
        // the choice and lands straight on the details step.
        0 => {
            for kind in AutomationKind::ALL {
                let selected = state.automation_draft.kind == Some(kind);
                let label = format!(
                    "{}  {}\n{}",
                    kind.icon(),
                    state.tr(kind.label_key()),
                    kind.description()
                );
                let button = egui::Button::new(label)
                    .selected(selected)
                    .min_size(egui::vec2(ui.available_width(), 56.0));
                if ui.add(button).clicked() {
                    state.automation_draft.choose_kind(kind);
                    state.automation_steps.branch_to(1);
                }
                ui.add_space(6.0);
            }
        }

        // Step two: amount and recipient behind the validity gate
        1 => {
            ui.horizontal(|ui| {
                ui.label("£");
                ui.add(
                    egui::TextEdit::singleline(&mut state.automation_draft.amount)
                        .hint_text("0.00")
                        .desired_width(120.0),
                );
            });
            ui.add_space(8.0);
            ui.add(
                egui::TextEdit::singleline(&mut state.automation_draft.recipient)
                    .desired_width(ui.available_width()),
            );
            ui.add_space(12.0);
            let ready = state.automation_draft.details_complete();
            if ui
                .add_enabled(ready, egui::Button::new(state.tr(Key::Continue)))
                .clicked()
            {
                state.automation_steps.advance();
            }
        }

        // Step three: schedule, review, create
        _ => {
            egui::ComboBox::from_id_salt("frequency")
                .selected_text(state.automation_draft.frequency)
                .show_ui(ui, |ui| {
                    for frequency in FREQUENCIES {
                        ui.selectable_value(
                            &mut state.automation_draft.frequency,
                            frequency,
                            frequency,
                        );
                    }
                });
            ui.add_space(8.0);

            let draft = &state.automation_draft;
            ui.group(|ui| {
                ui.set_min_width(ui.available_width());
                if let Some(kind) = draft.kind {
                    ui.label(format!("{}  {}", kind.icon(), state.tr(kind.label_key())));
                }
                if let Some(pence) = draft.amount_pence() {
                    ui.label(format!(
                        "{} · {}",
                        format_pounds(pence),
                        draft.frequency
                    ));
                }
                ui.label(&draft.recipient);
            });
            ui.add_space(12.0);
            if ui.button(state.tr(Key::Done)).clicked()
                && state.automation_steps.advance() == Transition::Completed
            {
                commit_draft(state);
                state.screen = Screen::Automations;
                let _ = ui_tx.send(UiEvent::NavigatedTo(state.screen));
            }
        }
    }
}

/// Turn the finished draft into a live automation on the hub list.
fn commit_draft(state: &mut AppState) {
    let draft = &state.automation_draft;
    let (Some(kind), Some(amount_pence)) = (draft.kind, draft.amount_pence()) else {
        return;
    };
    let id = state.automations.iter().map(|a| a.id).max().unwrap_or(0) + 1;
    state.automations.push(Automation {
        id,
        name: draft.recipient.clone(),
        kind,
        amount_pence,
        recipient: draft.recipient.clone(),
        frequency: draft.frequency,
        next_date: "Mar 1",
        icon: kind.icon(),
        active: true,
    });
    log::info!("automation {} created", id);
}
