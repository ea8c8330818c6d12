//! Core types for the transport controls

use serde::{Deserialize, Serialize};

// =============================================================================
// Control Identity
// =============================================================================

/// Interactive parts of the widget, resolved by the render layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Control {
    /// Play/pause toggle
    Play,
    /// Seek forward button
    SeekForward,
    /// Seek backward button
    SeekBackward,
    /// Slider track (and the play head sitting on it)
    SliderTrack,
    /// Fullscreen button, when the host renders one
    Fullscreen,
}

impl Control {
    /// Seek direction for the seek buttons
    pub fn seek_direction(&self) -> Option<SeekDirection> {
        match self {
            Control::SeekForward => Some(SeekDirection::Forward),
            Control::SeekBackward => Some(SeekDirection::Backward),
            _ => None,
        }
    }
}

impl std::fmt::Display for Control {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Control::Play => write!(f, "play"),
            Control::SeekForward => write!(f, "seek-forward"),
            Control::SeekBackward => write!(f, "seek-backward"),
            Control::SliderTrack => write!(f, "slider-track"),
            Control::Fullscreen => write!(f, "fullscreen"),
        }
    }
}

/// Direction of a discrete or repeating seek
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeekDirection {
    Forward,
    Backward,
}

impl SeekDirection {
    /// Sign applied to the seek increment
    pub fn sign(&self) -> f64 {
        match self {
            SeekDirection::Forward => 1.0,
            SeekDirection::Backward => -1.0,
        }
    }
}

impl std::fmt::Display for SeekDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeekDirection::Forward => write!(f, "forward"),
            SeekDirection::Backward => write!(f, "backward"),
        }
    }
}

// =============================================================================
// Pointer Input
// =============================================================================

/// Identifier distinguishing concurrent touches/pointers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PointerId(pub u32);

impl std::fmt::Display for PointerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Input delivered by the host's unified mouse/touch source
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Pointer went down on a control
    Press {
        control: Control,
        pointer: PointerId,
        client_x: f64,
    },
    /// Pointer moved (anywhere, the drag owns it once started)
    Move { pointer: PointerId, client_x: f64 },
    /// Pointer lifted
    ///
    /// Ends the drag owned by `pointer`. Any release also ends a running
    /// long-press repeat, whichever pointer started it.
    Release { pointer: PointerId },
    /// Short activation of a control
    Click { control: Control },
    /// Press-and-hold recognised on a control
    LongPress { control: Control },
}

/// Text direction governing the leading edge of the slider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

impl TextDirection {
    pub fn is_rtl(&self) -> bool {
        matches!(self, TextDirection::Rtl)
    }
}

/// On-screen bounds of the slider track, in client coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TrackRect {
    pub left: f64,
    pub width: f64,
}

impl TrackRect {
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Fraction of the track covered at `client_x`, measured from the
    /// leading edge for `direction` and clamped to `[0, 1]`.
    pub fn fraction_at(&self, client_x: f64, direction: TextDirection) -> f64 {
        let offset = match direction {
            TextDirection::Ltr => client_x - self.left,
            TextDirection::Rtl => self.right() - client_x,
        };
        let pos = offset / self.width;
        if pos.is_nan() {
            return 0.0;
        }
        pos.clamp(0.0, 1.0)
    }
}

// =============================================================================
// Media Notifications
// =============================================================================

/// Notifications raised by the playback element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaEvent {
    /// Duration became known
    LoadedMetadata,
    /// Playback started
    Play,
    /// Playback paused
    Pause,
    /// Current position progressed
    TimeUpdate,
    /// A seek settled
    Seeked,
    /// End of media reached
    Ended,
}

impl std::fmt::Display for MediaEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaEvent::LoadedMetadata => write!(f, "loadedmetadata"),
            MediaEvent::Play => write!(f, "play"),
            MediaEvent::Pause => write!(f, "pause"),
            MediaEvent::TimeUpdate => write!(f, "timeupdate"),
            MediaEvent::Seeked => write!(f, "seeked"),
            MediaEvent::Ended => write!(f, "ended"),
        }
    }
}

// =============================================================================
// Outward Surface
// =============================================================================

/// Signals raised towards the embedding application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HostSignal {
    /// The play/pause control was pressed
    PlayTogglePressed,
    /// The fullscreen control was pressed
    FullscreenRequested,
}

impl HostSignal {
    /// Event name used by web hosts
    pub fn event_name(&self) -> &'static str {
        match self {
            HostSignal::PlayTogglePressed => "play-button-click",
            HostSignal::FullscreenRequested => "fullscreen-button-click",
        }
    }
}

/// Visual state of the play/pause toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayButtonState {
    Playing,
    Paused,
}

impl PlayButtonState {
    pub fn is_paused(&self) -> bool {
        matches!(self, PlayButtonState::Paused)
    }

    /// Localization id announced by screen readers
    pub fn l10n_id(&self) -> &'static str {
        match self {
            PlayButtonState::Playing => "playbackPlay",
            PlayButtonState::Paused => "playbackPause",
        }
    }
}
