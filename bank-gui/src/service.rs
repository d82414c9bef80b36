//! Background service task — single `select!` loop, no spawns.
//!
//! The service owns everything that happens off the render thread: the
//! verification progress simulation and config persistence. It receives
//! [`UiEvent`]s from the UI thread and sends [`ServiceEvent`]s back.

use tokio::sync::mpsc;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use flows::progress::ProgressSimulator;

use crate::config::Config;
use crate::events::{ServiceEvent, UiEvent};

/// Run the service loop until the cancellation token fires.
///
/// This is the **only** `tokio::spawn`ed task in the application. It owns the
/// config file and the verification simulator.
pub async fn run(
    token: CancellationToken,
    mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
    svc_tx: mpsc::UnboundedSender<ServiceEvent>,
    mut config: Config,
) {
    // Some(_) while a verification run is in flight.
    let mut simulator: Option<ProgressSimulator> = None;
    // Set once the simulator exhausts; completion fires after a short pause so
    // the final checkpoint is visible before the screen advances.
    let mut completion_deadline: Option<Instant> = None;

    let mut progress_timer = tokio::time::interval(ProgressSimulator::TICK_PERIOD);
    progress_timer.set_missed_tick_behavior(MissedTickBehavior::Skip);

    log::info!("🚀 Service loop started");

    loop {
        tokio::select! {
            _ = token.cancelled() => {
                log::info!("🛑 Service loop shutting down");
                break;
            }

            _ = progress_timer.tick() => {
                if let Some(sim) = simulator.as_mut() {
                    if let Some(tick) = sim.next_checkpoint() {
                        log::debug!("verification at {}%: {}", tick.percent, tick.status);
                        let _ = svc_tx.send(ServiceEvent::VerificationProgress(tick));
                        if sim.is_exhausted() {
                            simulator = None;
                            completion_deadline =
                                Some(Instant::now() + ProgressSimulator::COMPLETION_DELAY);
                        }
                    }
                }
            }

            _ = sleep_until_deadline(completion_deadline) => {
                completion_deadline = None;
                log::info!("✅ Verification complete");
                let _ = svc_tx.send(ServiceEvent::VerificationComplete);
            }

            event = ui_rx.recv() => {
                let Some(event) = event else {
                    // UI side dropped — nothing left to serve.
                    break;
                };
                match event {
                    UiEvent::StartVerification => {
                        log::info!("🔍 Verification started");
                        simulator = Some(ProgressSimulator::new());
                        completion_deadline = None;
                        // Full tick period before the first checkpoint.
                        progress_timer.reset();
                    }

                    UiEvent::CancelVerification => {
                        if simulator.take().is_some() || completion_deadline.take().is_some() {
                            log::info!("↩ Verification cancelled");
                        }
                    }

                    UiEvent::SetLanguage(language) => {
                        config.language = language;
                        persist(&config, &svc_tx);
                    }

                    UiEvent::SetDisplayMode(mode) => {
                        config.display_mode = mode;
                        persist(&config, &svc_tx);
                    }

                    UiEvent::NavigatedTo(screen) => {
                        log::debug!("navigated to {}", screen.path());
                    }
                }
            }
        }
    }
}

/// Resolve at `deadline`, or never when there is no pending completion.
async fn sleep_until_deadline(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

fn persist(config: &Config, svc_tx: &mpsc::UnboundedSender<ServiceEvent>) {
    match config.save() {
        Ok(()) => {
            let _ = svc_tx.send(ServiceEvent::SettingsSaved);
        }
        Err(e) => {
            log::error!("❌ Failed to save config: {}", e);
            let _ = svc_tx.send(ServiceEvent::Error(format!("Failed to save settings: {}", e)));
        }
    }
}
