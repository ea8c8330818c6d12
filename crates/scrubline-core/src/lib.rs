//! Scrubline Core - On-screen media transport controls
//!
//! This crate provides the interaction logic behind a media transport bar:
//! - Slider scrubbing with single-pointer ownership and RTL support
//! - Tap and press-and-hold repeat seeking
//! - Reconciliation of slider, labels and play icon with playback events
//! - End-of-media handling with a fallback watchdog timer
//!
//! The playback element, the rendering surface and the timer scheduler are
//! collaborators supplied by the host through traits.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        Scrubline Core                           │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │   InputEvent              MediaEvent              TimerId       │
//! │       │                       │                      │          │
//! │       └───────────────┬───────┴──────────────────────┘          │
//! │                       │                                         │
//! │                ┌──────┴──────┐                                  │
//! │                │  Transport  │                                  │
//! │                │ Controller  │                                  │
//! │                └──────┬──────┘                                  │
//! │         ┌─────────────┼─────────────┐                           │
//! │  ┌──────┴───────┐ ┌───┴──────────┐ ┌┴─────────────┐             │
//! │  │ Scrub/Drag   │ │ Repeat-Seek  │ │  Playback    │             │
//! │  │  Tracker     │ │   Driver     │ │  Reconciler  │             │
//! │  └──────┬───────┘ └───┬──────────┘ └┬─────────────┘             │
//! │         └─────────────┼─────────────┘                           │
//! │                ┌──────┴──────┐                                  │
//! │                │   Session   │                                  │
//! │                └─────────────┘                                  │
//! │                                                                 │
//! │  MediaElement      ControlsView      TimerHost                  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod format;
pub mod media;
pub mod repeat;
pub mod timer;
pub mod types;
pub mod view;

mod reconciler;
mod scrub;
mod session;

pub use config::{PlayButtonMode, SeekMode, TransportConfig};
pub use controller::TransportController;
pub use error::{Error, Result};
pub use format::format_time;
pub use media::MediaElement;
pub use repeat::SeekOutcome;
pub use timer::{ManualTimers, TimerHost, TimerId, TokioTimers};
pub use types::*;
pub use view::{ControlsView, TextDirectionSource};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log library initialization
pub fn init() {
    tracing::info!(version = VERSION, "Scrubline Core initialized");
}
