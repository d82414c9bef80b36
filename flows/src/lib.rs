//! GlassBank flow logic — state machines and projections, UI-free.
//!
//! Every multi-step screen in the app (onboarding, PIN setup, dispute,
//! automation creation, the what's-new tour) is driven by the types in this
//! crate. The GUI crate renders them; nothing here touches egui, the
//! runtime, or the filesystem.

pub mod automation;
pub mod capture;
pub mod data;
pub mod dispute;
pub mod i18n;
pub mod pin;
pub mod progress;
pub mod projection;
pub mod sequencer;

pub use sequencer::{StepSequencer, Transition};
