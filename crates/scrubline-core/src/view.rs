//! Render sink and text direction provider

use crate::types::{HostSignal, PlayButtonState, TextDirection, TrackRect};
use std::cell::Cell;
use std::rc::Rc;

/// Visual surface of the transport controls
///
/// Percentages are in `[0, 100]`. The view decides which CSS property
/// (or canvas coordinate) a percentage maps to for the given direction.
pub trait ControlsView {
    /// Current on-screen bounds of the slider track
    fn track_rect(&self) -> TrackRect;

    /// Width of the elapsed fill
    fn set_elapsed_width(&mut self, percent: f64);

    /// Offset of the play head from the leading edge
    fn set_head_position(&mut self, percent: f64, direction: TextDirection);

    /// Enlarged emphasis while the head is being dragged
    fn set_head_active(&mut self, active: bool);

    fn set_elapsed_text(&mut self, text: &str);

    fn set_duration_text(&mut self, text: &str);

    /// Paused/playing icon and its accessible label
    fn set_play_state(&mut self, state: PlayButtonState);

    /// Raise a signal towards the embedding application
    fn emit(&mut self, signal: HostSignal);
}

/// Source of the current text direction, consulted on every interaction
pub trait TextDirectionSource {
    fn direction(&self) -> TextDirection;
}

impl TextDirectionSource for TextDirection {
    fn direction(&self) -> TextDirection {
        *self
    }
}

/// Shared cell so a host can flip direction at runtime
impl TextDirectionSource for Rc<Cell<TextDirection>> {
    fn direction(&self) -> TextDirection {
        self.get()
    }
}
