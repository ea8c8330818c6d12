//! Scrub/drag tracking on the slider track
//!
//! One pointer owns a drag from press to release. Events from any other
//! pointer are ignored so a second finger or a stray mouse event cannot
//! hijack it. Track geometry is captured once at drag start.

use crate::{
    controller::TransportController,
    media::known_duration,
    session::Drag,
    timer::TimerHost,
    types::PointerId,
};
use tracing::{debug, instrument, trace};

impl<T: TimerHost> TransportController<T> {
    /// Start dragging the play head with `pointer`.
    ///
    /// Returns false when a drag is already active, nothing is attached,
    /// or the duration is not yet known.
    #[instrument(skip(self))]
    pub fn begin_drag(&mut self, pointer: PointerId, client_x: f64) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };

        if let Some(active) = session.drag {
            debug!(active = %active.pointer, "Drag already in progress");
            return false;
        }
        if known_duration(&*session.media).is_none() {
            debug!("Duration unknown, cannot scrub");
            return false;
        }

        let was_paused = session.media.paused();
        if !was_paused {
            session.media.pause();
        }

        session.drag = Some(Drag {
            pointer,
            track: self.view.track_rect(),
            was_paused,
        });

        if let Some(watchdog) = session.watchdog.take() {
            self.timers.cancel(watchdog);
            debug!(timer = %watchdog, "Watchdog cancelled by drag");
        }

        debug!(was_paused, "Drag started");
        self.move_drag(pointer, client_x);
        true
    }

    /// Move the play head to follow `pointer`.
    ///
    /// The elapsed-time label is left alone; it only changes once the
    /// media reports the seek has settled.
    pub fn move_drag(&mut self, pointer: PointerId, client_x: f64) {
        let direction = self.text_direction();
        let Some(session) = self.session.as_ref() else {
            return;
        };
        let Some(drag) = session.drag.filter(|d| d.pointer == pointer) else {
            return;
        };
        let Some(duration) = known_duration(&*session.media) else {
            return;
        };

        let pos = drag.track.fraction_at(client_x, direction);
        let percent = pos * 100.0;
        trace!(pos, client_x, "Drag moved");

        self.view.set_head_active(true);
        self.view.set_head_position(percent, direction);
        self.view.set_elapsed_width(percent);
        self.move_media_position(duration * pos);
    }

    /// Finish the drag owned by `pointer`.
    ///
    /// Playback resumes if it was playing before the drag, unless the head
    /// was left exactly at the end. Returns false when `pointer` does not
    /// own a drag.
    #[instrument(skip(self))]
    pub fn end_drag(&mut self, pointer: PointerId) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        let Some(drag) = session.drag.filter(|d| d.pointer == pointer) else {
            return false;
        };

        session.drag = None;
        self.view.set_head_active(false);

        let at_end = session.media.current_time() == session.media.duration();
        let resume = !drag.was_paused && !at_end;
        if resume {
            session.media.play();
        }

        debug!(resume, at_end, "Drag ended");
        true
    }
}
