//! Application struct — the eframe::App implementation.
//!
//! Thin wrapper: drains service events, dispatches to view modules.
//! No async, no business logic.

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use flows::i18n::Key;

use crate::config::Config;
use crate::events::{Screen, ServiceEvent, UiEvent};
use crate::state::AppState;
use crate::view;

/// The banking application.
pub struct App {
    pub state: AppState,
    pub ui_tx: mpsc::UnboundedSender<UiEvent>,
    svc_rx: mpsc::UnboundedReceiver<ServiceEvent>,
    shutdown_token: CancellationToken,
}

impl App {
    /// Create a new App, spawning the background service task.
    pub fn new(cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        cc.egui_ctx.set_fonts(egui::FontDefinitions::default());

        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let (svc_tx, svc_rx) = mpsc::unbounded_channel();
        let token = CancellationToken::new();

        // Spawn the single background service task
        let svc_token = token.clone();
        let state = AppState::from_config(&config);
        tokio::spawn(crate::service::run(svc_token, ui_rx, svc_tx, config));

        Self {
            state,
            ui_tx,
            svc_rx,
            shutdown_token: token,
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.shutdown_token.cancel();
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Ensure we repaint regularly to pick up background service events
        ctx.request_repaint_after(std::time::Duration::from_secs(1));

        // 1. Drain all pending service events (non-blocking)
        while let Ok(event) = self.svc_rx.try_recv() {
            self.state.apply(event);
            ctx.request_repaint();
        }

        // 2. Bottom tab bar — hidden during onboarding
        if self.state.onboarded {
            egui::TopBottomPanel::bottom("nav").show(ctx, |ui| {
                ui.add_space(4.0);
                ui.columns(4, |cols| {
                    nav_button(
                        &mut cols[0],
                        &mut self.state,
                        Key::Home,
                        "🏠",
                        Screen::Dashboard,
                        &self.ui_tx,
                    );
                    nav_button(
                        &mut cols[1],
                        &mut self.state,
                        Key::Transactions,
                        "📋",
                        Screen::Transactions,
                        &self.ui_tx,
                    );
                    nav_button(
                        &mut cols[2],
                        &mut self.state,
                        Key::Automations,
                        "⚡",
                        Screen::Automations,
                        &self.ui_tx,
                    );
                    nav_button(
                        &mut cols[3],
                        &mut self.state,
                        Key::More,
                        "☰",
                        Screen::More,
                        &self.ui_tx,
                    );
                });
                ui.add_space(4.0);
            });
        }

        // 3. Central panel — route to the active view
        egui::CentralPanel::default().show(ctx, |ui| {
            show_error_banner(ui, &mut self.state);

            match self.state.screen {
                Screen::Onboarding => {
                    view::onboarding::show(ui, &mut self.state, &self.ui_tx);
                }
                Screen::Dashboard => {
                    view::dashboard::show(ui, &mut self.state, &self.ui_tx);
                }
                Screen::Transactions
                | Screen::TransactionDetail(_)
                | Screen::Dispute(_) => {
                    view::transactions::show(ui, &mut self.state, &self.ui_tx);
                }
                Screen::Automations | Screen::CreateAutomation => {
                    view::automations::show(ui, &mut self.state, &self.ui_tx);
                }
                Screen::More => {
                    view::more::show(ui, &mut self.state, &self.ui_tx);
                }
                Screen::WhatsNew => {
                    view::whats_new::show(ui, &mut self.state, &self.ui_tx);
                }
            }
        });
    }
}

/// Render a tab button, highlighting the active screen.
fn nav_button(
    ui: &mut egui::Ui,
    state: &mut AppState,
    label: Key,
    icon: &str,
    screen: Screen,
    ui_tx: &mpsc::UnboundedSender<UiEvent>,
) {
    let is_active = state.screen == screen;
    let text_size = if state.is_simplified() { 16.0 } else { 13.0 };
    let text = format!("{} {}", icon, state.tr(label));
    let button = egui::Button::new(egui::RichText::new(text).size(text_size))
        .selected(is_active)
        .min_size(egui::vec2(0.0, 32.0));

    ui.vertical_centered_justified(|ui| {
        if ui.add(button).clicked() && !is_active {
            state.screen = screen;
            let _ = ui_tx.send(UiEvent::NavigatedTo(screen));
        }
    });
}

/// Dismissable error banner at the top of every screen.
fn show_error_banner(ui: &mut egui::Ui, state: &mut AppState) {
    let Some(message) = state.error.clone() else {
        return;
    };
    ui.horizontal(|ui| {
        ui.colored_label(egui::Color32::RED, format!("⚠ {}", message));
        if ui.small_button("✖").clicked() {
            state.error = None;
        }
    });
    ui.separator();
}
