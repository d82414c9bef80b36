//! More / settings screen: display mode, language, what's-new replay.

use egui::Ui;
use tokio::sync::mpsc;

use flows::i18n::{Key, Language};

use crate::config::DisplayMode;
use crate::events::UiEvent;
use crate::state::AppState;

/// Render the more screen.
pub fn show(ui: &mut Ui, state: &mut AppState, ui_tx: &mpsc::UnboundedSender<UiEvent>) {
    ui.heading(state.tr(Key::More));
    ui.add_space(10.0);

    // Display mode
    ui.group(|ui| {
        ui.set_min_width(ui.available_width());
        ui.label(egui::RichText::new(state.tr(Key::DisplayMode)).strong());
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            mode_button(ui, state, ui_tx, Key::Standard, DisplayMode::Standard);
            mode_button(ui, state, ui_tx, Key::Simplified, DisplayMode::Simplified);
        });
    });

    ui.add_space(10.0);

    // Language
    ui.group(|ui| {
        ui.set_min_width(ui.available_width());
        ui.label(egui::RichText::new(state.tr(Key::LanguageLabel)).strong());
        ui.add_space(4.0);
        for language in Language::ALL {
            let selected = state.language == language;
            let label = format!("{}  {}", language.flag(), language.native_name());
            let button = egui::Button::new(label)
                .selected(selected)
                .min_size(egui::vec2(ui.available_width(), 34.0));
            if ui.add(button).clicked() && !selected {
                state.language = language;
                let _ = ui_tx.send(UiEvent::SetLanguage(language));
            }
            ui.add_space(4.0);
        }
    });

    ui.add_space(10.0);

    // Replay the feature tour
    ui.group(|ui| {
        ui.set_min_width(ui.available_width());
        ui.label(egui::RichText::new(state.tr(Key::Settings)).strong());
        ui.add_space(4.0);
        if ui.button(format!("✨ {}", state.tr(Key::WhatsNew))).clicked() {
            state.start_tour();
            let _ = ui_tx.send(UiEvent::NavigatedTo(state.screen));
        }
    });
}

fn mode_button(
    ui: &mut Ui,
    state: &mut AppState,
    ui_tx: &mpsc::UnboundedSender<UiEvent>,
    label: Key,
    mode: DisplayMode,
) {
    let selected = state.display_mode == mode;
    if ui
        .add(egui::Button::new(state.tr(label)).selected(selected))
        .clicked()
        && !selected
    {
        state.display_mode = mode;
        let _ = ui_tx.send(UiEvent::SetDisplayMode(mode));
    }
}
