//! What's-new carousel: one slide per feature, dot navigation, skippable.

use egui::Ui;
use tokio::sync::mpsc;

use flows::data::FEATURES;
use flows::i18n::Key;
use flows::sequencer::Transition;

use crate::events::UiEvent;
use crate::state::AppState;

/// Render the feature tour.
pub fn show(ui: &mut Ui, state: &mut AppState, ui_tx: &mpsc::UnboundedSender<UiEvent>) {
    ui.horizontal(|ui| {
        ui.heading(state.tr(Key::WhatsNew));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.link(state.tr(Key::SkipTour)).clicked() {
                state.dismiss_tour();
                let _ = ui_tx.send(UiEvent::NavigatedTo(state.screen));
            }
        });
    });
    ui.add_space(30.0);

    let slide = state.tour.step();
    let feature = &FEATURES[slide.min(FEATURES.len() - 1)];

    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new(feature.icon).size(56.0));
        ui.add_space(16.0);
        ui.label(egui::RichText::new(feature.title).size(22.0).strong());
        if feature.is_new {
            ui.label(egui::RichText::new("NEW").small().strong());
        }
        ui.add_space(10.0);
        ui.label(feature.description);
    });

    ui.add_space(30.0);

    // Dot navigation — tapping a dot jumps straight to that slide.
    ui.vertical_centered(|ui| {
        ui.horizontal(|ui| {
            let total =
                FEATURES.len() as f32 * (ui.spacing().item_spacing.x + 14.0);
            let pad = ((ui.available_width() - total) / 2.0).max(0.0);
            ui.add_space(pad);
            for index in 0..FEATURES.len() {
                let filled = index == slide;
                let text = if filled { "●" } else { "○" };
                if ui.add(egui::Button::new(text).frame(false)).clicked() {
                    state.tour.branch_to(index);
                }
            }
        });
    });

    ui.add_space(20.0);
    ui.vertical_centered(|ui| {
        let is_last = state.tour.is_terminal();
        let label = if is_last {
            state.tr(Key::Done)
        } else {
            state.tr(Key::Next)
        };
        if ui
            .add(egui::Button::new(label).min_size(egui::vec2(220.0, 44.0)))
            .clicked()
        {
            match state.tour.advance() {
                Transition::Completed | Transition::Stayed => {
                    state.dismiss_tour();
                    let _ = ui_tx.send(UiEvent::NavigatedTo(state.screen));
                }
                _ => {}
            }
        }
    });
}
