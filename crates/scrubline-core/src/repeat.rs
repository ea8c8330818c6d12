//! Repeat-seek driver for the forward/backward buttons
//!
//! A tap seeks one increment. A long press seeks one increment at once and
//! then once per repeat interval until the press ends or a seek runs into
//! either end of the media.

use crate::{
    controller::TransportController,
    session::RepeatSeek,
    timer::TimerHost,
    types::SeekDirection,
};
use tracing::{debug, instrument};

/// How a requested seek target was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekOutcome {
    /// Target was inside the media and applied as-is
    Applied,
    /// Target was at or past the end and clamped to the duration
    ClampedToEnd,
    /// Target was before the start and clamped to zero
    ClampedToStart,
}

impl SeekOutcome {
    pub fn hit_bound(&self) -> bool {
        !matches!(self, SeekOutcome::Applied)
    }
}

impl<T: TimerHost> TransportController<T> {
    /// Seek one increment in `direction`
    ///
    /// Returns `None` when nothing is attached.
    pub fn tap(&mut self, direction: SeekDirection) -> Option<SeekOutcome> {
        self.seek_by_increment(direction)
    }

    /// Begin press-and-hold auto-repeat.
    ///
    /// Ignored while a repeat is already running, so touch and synthesized
    /// mouse input for the same gesture register only once. Returns true
    /// when a repeat timer was started.
    #[instrument(skip(self))]
    pub fn press_start(&mut self, direction: SeekDirection) -> bool {
        match self.session.as_ref() {
            Some(session) if session.repeat.is_none() => {}
            _ => return false,
        }

        let outcome = self.seek_by_increment(direction);
        if outcome.map_or(true, |o| o.hit_bound()) {
            debug!(?outcome, "Initial seek hit a bound, not repeating");
            return false;
        }

        let timer = self.timers.schedule_repeating(self.config.repeat_interval());
        if let Some(session) = self.session.as_mut() {
            session.repeat = Some(RepeatSeek { timer, direction });
        }
        debug!(timer = %timer, "Repeat seek started");
        true
    }

    /// Stop auto-repeat; safe to call when no repeat is running
    pub fn press_stop(&mut self) {
        let Some(repeat) = self.session.as_mut().and_then(|s| s.repeat.take()) else {
            return;
        };
        self.timers.cancel(repeat.timer);
        debug!(timer = %repeat.timer, direction = %repeat.direction, "Repeat seek stopped");
    }

    pub(crate) fn repeat_tick(&mut self, direction: SeekDirection) {
        self.seek_by_increment(direction);
    }

    fn seek_by_increment(&mut self, direction: SeekDirection) -> Option<SeekOutcome> {
        let session = self.session.as_ref()?;
        let target = session.media.current_time() + direction.sign() * self.config.seek_increment_secs;
        self.seek_clamped(target)
    }

    /// Apply the seek clamping policy to an absolute target.
    ///
    /// Running past the end pauses playing media and records that the pause
    /// came from this clamp. Hitting either bound ends an active repeat.
    pub(crate) fn seek_clamped(&mut self, target: f64) -> Option<SeekOutcome> {
        let session = self.session.as_mut()?;
        let duration = session.media.duration();

        let (position, outcome) = if target >= duration {
            if !session.media.paused() {
                session.media.pause();
                session.paused_past_end_by_auto_seek = true;
            }
            (duration, SeekOutcome::ClampedToEnd)
        } else if target < 0.0 {
            (0.0, SeekOutcome::ClampedToStart)
        } else {
            (target, SeekOutcome::Applied)
        };

        if outcome.hit_bound() {
            if let Some(repeat) = session.repeat.take() {
                self.timers.cancel(repeat.timer);
                debug!(timer = %repeat.timer, ?outcome, "Repeat seek ran into a bound");
            }
            debug!(target, position, ?outcome, "Seek clamped");
        }

        self.move_media_position(position);
        Some(outcome)
    }
}
