//! UI view modules — pure rendering functions.
//!
//! Each submodule renders one screen. Views read from [`AppState`] and send
//! [`UiEvent`]s on user interaction. No async, no persistence, no timers.

pub mod automations;
pub mod dashboard;
pub mod more;
pub mod onboarding;
pub mod transactions;
pub mod whats_new;
