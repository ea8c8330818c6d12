//! Playback state reconciliation
//!
//! Keeps the slider, labels and play icon in step with notifications from
//! the playback element, and decides whether reaching the end rewinds.
//! Playing to the end rewinds on the next end-of-media; seeking to the
//! end with the forward button does not.

use crate::{
    controller::TransportController,
    format::format_time,
    media::known_duration,
    timer::TimerHost,
    types::PlayButtonState,
};
use std::time::Duration;
use tracing::{debug, trace};

impl<T: TimerHost> TransportController<T> {
    pub(crate) fn on_loaded_metadata(&mut self) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        if let Some(duration) = known_duration(&*session.media) {
            self.view.set_duration_text(&format_time(duration));
        }
    }

    pub(crate) fn on_play(&mut self) {
        self.view.set_play_state(PlayButtonState::Playing);
    }

    pub(crate) fn on_pause(&mut self) {
        self.view.set_play_state(PlayButtonState::Paused);

        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.media.current_time() != session.media.duration() {
            return;
        }

        if session.paused_past_end_by_auto_seek {
            session.paused_past_end_by_auto_seek = false;
            debug!("Paused at end by forward seek");
        } else {
            session.played_to_completion = true;
            debug!("Played to completion");
        }
    }

    pub(crate) fn on_time_update(&mut self) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        let duration = session.media.duration();

        if !self.hidden && duration.is_finite() && duration != 0.0 {
            self.refresh_slider();
        }

        self.check_end_watchdog();
    }

    /// Arm or disarm the fallback end-of-media timer.
    ///
    /// Some playback elements never emit a native end notification near
    /// the boundary, so once the position is within the threshold of the
    /// end a one-shot timer forces the end-of-media handling shortly after
    /// the expected end.
    fn check_end_watchdog(&mut self) {
        let threshold = self.config.watchdog_threshold_secs;
        let grace = self.config.watchdog_grace_secs;
        let Some(session) = self.session.as_mut() else {
            return;
        };

        let duration = session.media.duration();
        let current = session.media.current_time();
        let near_end = duration.is_finite() && current >= duration - threshold;
        let pending = session.watchdog;

        match pending {
            None if near_end && !session.dragging() => {
                let delay = (duration - current + grace).max(0.0);
                let Ok(after) = Duration::try_from_secs_f64(delay) else {
                    debug!(delay_secs = delay, "Watchdog delay out of range, not arming");
                    return;
                };
                let id = self.timers.schedule_once(after);
                session.watchdog = Some(id);
                debug!(timer = %id, delay_secs = delay, "End-of-media watchdog armed");
            }
            Some(id) if session.dragging() || !near_end => {
                self.timers.cancel(id);
                session.watchdog = None;
                debug!(timer = %id, "End-of-media watchdog cancelled");
            }
            _ => {}
        }
    }

    /// Redraw the slider from the settled media position.
    ///
    /// Skipped while a native seek is in flight. The head is left alone
    /// while the user drags it.
    pub(crate) fn refresh_slider(&mut self) {
        let direction = self.text_direction();
        let Some(session) = self.session.as_ref() else {
            return;
        };
        if session.media.seeking() {
            trace!("Seek in flight, slider not refreshed");
            return;
        }

        let current = session.media.current_time();
        let percent = current / session.media.duration() * 100.0;
        if percent.is_nan() {
            return;
        }
        let dragging = session.dragging();

        self.view.set_elapsed_text(&format_time(current));
        self.view.set_elapsed_width(percent);
        if !dragging {
            self.view.set_head_position(percent, direction);
        }
    }

    /// End of media, from the element or the watchdog
    pub(crate) fn on_ended(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.dragging() {
            debug!("End of media ignored while dragging");
            return;
        }

        if let Some(id) = session.watchdog.take() {
            self.timers.cancel(id);
        }

        if !session.played_to_completion {
            debug!("End of media after seek to end, staying put");
            return;
        }
        session.played_to_completion = false;
        debug!("End of media after playing through, rewinding");
        self.move_media_position(0.0);
    }
}
