//! Home screen: balance, spending summary, quick actions, recent activity.

use egui::Ui;
use tokio::sync::mpsc;

use flows::data::{format_pounds, BALANCE_PENCE, BUDGET_PENCE, SAMPLE_TRANSACTIONS, SPENT_PENCE};
use flows::i18n::Key;

use crate::events::{Screen, UiEvent};
use crate::state::AppState;

/// Render the dashboard.
pub fn show(ui: &mut Ui, state: &mut AppState, ui_tx: &mpsc::UnboundedSender<UiEvent>) {
    // What's-new banner until the tour has been seen once.
    if !state.tour_seen {
        let banner = egui::Button::new(format!("✨ {}", state.tr(Key::WhatsNew)))
            .min_size(egui::vec2(ui.available_width(), 36.0));
        if ui.add(banner).clicked() {
            state.start_tour();
            let _ = ui_tx.send(UiEvent::NavigatedTo(state.screen));
            return;
        }
        ui.add_space(8.0);
    }

    // Balance card
    let balance_size = if state.is_simplified() { 40.0 } else { 32.0 };
    ui.group(|ui| {
        ui.set_min_width(ui.available_width());
        ui.label(state.tr(Key::Balance));
        ui.label(
            egui::RichText::new(format_pounds(BALANCE_PENCE))
                .size(balance_size)
                .strong(),
        );
    });

    ui.add_space(10.0);

    // Monthly spending vs budget
    ui.group(|ui| {
        ui.set_min_width(ui.available_width());
        ui.label(egui::RichText::new(state.tr(Key::ThisMonth)).strong());
        ui.add_space(4.0);
        let fraction = SPENT_PENCE as f32 / BUDGET_PENCE as f32;
        ui.add(egui::ProgressBar::new(fraction).desired_width(ui.available_width()));
        ui.horizontal(|ui| {
            ui.label(format!(
                "{} {}",
                format_pounds(SPENT_PENCE),
                state.tr(Key::Spending)
            ));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!(
                    "{} {}",
                    format_pounds(BUDGET_PENCE - SPENT_PENCE),
                    state.tr(Key::Remaining)
                ));
            });
        });
    });

    ui.add_space(10.0);

    // Quick actions — trimmed to the essentials in simplified mode
    if state.is_simplified() {
        ui.columns(2, |cols| {
            quick_action(&mut cols[0], state, "📤", Key::SendMoney);
            quick_action(&mut cols[1], state, "💳", Key::ViewCards);
        });
    } else {
        ui.columns(4, |cols| {
            quick_action(&mut cols[0], state, "📤", Key::SendMoney);
            quick_action(&mut cols[1], state, "🧾", Key::PayBill);
            quick_action(&mut cols[2], state, "➕", Key::AddMoney);
            quick_action(&mut cols[3], state, "💳", Key::ViewCards);
        });
    }

    ui.add_space(14.0);

    // Recent activity
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(state.tr(Key::RecentTransactions)).strong());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.link(state.tr(Key::SeeAll)).clicked() {
                state.screen = Screen::Transactions;
                let _ = ui_tx.send(UiEvent::NavigatedTo(state.screen));
            }
        });
    });
    ui.add_space(4.0);

    for record in SAMPLE_TRANSACTIONS.iter().take(4) {
        let row = ui.horizontal(|ui| {
            ui.label(record.icon);
            ui.label(record.merchant);
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
}

fn quick_action(ui: &mut Ui, state: &AppState, icon: &str, label: Key) {
    let size = if state.is_simplified() { 16.0 } else { 12.0 };
    ui.vertical_centered_justified(|ui| {
        let text = format!("{}\n{}", icon, state.tr(label));
        let _ = ui.add(
            egui::Button::new(egui::RichText::new(text).size(size))
                .min_size(egui::vec2(0.0, 56.0)),
        );
    });
}
