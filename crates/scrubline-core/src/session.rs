//! Per-attachment session state
//!
//! One [`Session`] exists for each attachment of the controls to a
//! playback element. The drag tracker, the repeat-seek driver and the
//! playback reconciler all read and write it, always through
//! `&mut TransportController`, so no locking is involved.

use crate::media::MediaElement;
use crate::timer::TimerId;
use crate::types::{PointerId, SeekDirection, TrackRect};

/// Active press-and-hold auto-repeat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RepeatSeek {
    pub timer: TimerId,
    pub direction: SeekDirection,
}

/// Active slider drag
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Drag {
    pub pointer: PointerId,
    /// Track bounds captured at drag start, never re-read mid-drag
    pub track: TrackRect,
    pub was_paused: bool,
}

/// Mutable state shared by the controller's behaviours
pub(crate) struct Session {
    pub media: Box<dyn MediaElement>,
    /// `Some` exactly while the user is dragging the slider
    pub drag: Option<Drag>,
    /// A forward seek clamped to the end paused playback
    pub paused_past_end_by_auto_seek: bool,
    /// Playback genuinely reached the end; the next end-of-media rewinds
    pub played_to_completion: bool,
    pub repeat: Option<RepeatSeek>,
    pub watchdog: Option<TimerId>,
}

impl Session {
    pub fn new(media: Box<dyn MediaElement>) -> Self {
        Self {
            media,
            drag: None,
            paused_past_end_by_auto_seek: false,
            played_to_completion: false,
            repeat: None,
            watchdog: None,
        }
    }

    pub fn dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Timers this session still owns
    pub fn timers(&self) -> impl Iterator<Item = TimerId> {
        self.repeat
            .map(|repeat| repeat.timer)
            .into_iter()
            .chain(self.watchdog)
    }
}
