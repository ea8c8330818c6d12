//! Transport Controller - entry point for every input and notification
//!
//! Owns:
//! - Attachment lifecycle (attach/detach) and the per-attachment session
//! - Dispatch of pointer input and media notifications
//! - Timer callbacks for auto-repeat and the end-of-media watchdog
//! - The shared "move media position" primitive
//!
//! The behaviours themselves live in `scrub`, `repeat` and `reconciler`
//! as further `impl` blocks on [`TransportController`].

use crate::{
    config::{PlayButtonMode, SeekMode, TransportConfig},
    media::MediaElement,
    session::Session,
    timer::{ManualTimers, TimerHost, TimerId},
    types::*,
    view::{ControlsView, TextDirectionSource},
    Error, Result,
};
use std::time::Duration;
use tracing::{debug, info, warn};

/// On-screen media transport controls for one playback element at a time
pub struct TransportController<T: TimerHost = ManualTimers> {
    pub(crate) config: TransportConfig,
    pub(crate) view: Box<dyn ControlsView>,
    pub(crate) direction: Box<dyn TextDirectionSource>,
    pub(crate) timers: T,
    pub(crate) session: Option<Session>,
    pub(crate) hidden: bool,
}

impl<T: TimerHost> TransportController<T> {
    /// Create detached controls with the default configuration
    pub fn new(
        view: impl ControlsView + 'static,
        direction: impl TextDirectionSource + 'static,
        timers: T,
    ) -> Self {
        Self {
            config: TransportConfig::default(),
            view: Box::new(view),
            direction: Box::new(direction),
            timers,
            session: None,
            hidden: false,
        }
    }

    /// Replace the configuration after validating it
    pub fn with_config(mut self, config: TransportConfig) -> Result<Self> {
        if let Err(e) = config.validate() {
            warn!(error = %e, "Rejected transport configuration");
            return Err(e);
        }
        self.config = config;
        Ok(self)
    }

    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    /// Attach the controls to a playback element
    ///
    /// Attaching while another element is attached is a host bug and is
    /// reported as [`Error::AlreadyAttached`].
    pub fn attach(&mut self, media: impl MediaElement + 'static) -> Result<()> {
        if self.session.is_some() {
            warn!("Media element already attached");
            return Err(Error::AlreadyAttached);
        }

        self.session = Some(Session::new(Box::new(media)));
        info!("Transport controls attached");
        Ok(())
    }

    /// Detach from the current playback element, cancelling every timer.
    ///
    /// Safe to call when nothing is attached.
    pub fn detach(&mut self) {
        let Some(session) = self.session.take() else {
            return;
        };

        let mut cancelled = 0;
        for id in session.timers() {
            self.timers.cancel(id);
            cancelled += 1;
        }
        if session.dragging() {
            self.view.set_head_active(false);
        }

        info!(cancelled_timers = cancelled, "Transport controls detached");
    }

    pub fn is_attached(&self) -> bool {
        self.session.is_some()
    }

    /// Hidden controls skip slider refreshes on time progress
    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn is_dragging(&self) -> bool {
        self.session.as_ref().is_some_and(Session::dragging)
    }

    pub fn is_repeating(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.repeat.is_some())
    }

    pub fn watchdog_pending(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.watchdog.is_some())
    }

    pub fn played_to_completion(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.played_to_completion)
    }

    pub fn paused_past_end_by_auto_seek(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| s.paused_past_end_by_auto_seek)
    }

    pub fn timers(&self) -> &T {
        &self.timers
    }

    pub fn timers_mut(&mut self) -> &mut T {
        &mut self.timers
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    /// Route pointer/click input to the behaviour owning the control
    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::Press {
                control: Control::SliderTrack,
                pointer,
                client_x,
            } => {
                self.begin_drag(pointer, client_x);
            }
            InputEvent::Press { .. } => {}
            InputEvent::Move { pointer, client_x } => self.move_drag(pointer, client_x),
            InputEvent::Release { pointer } => {
                // LongPress carries no pointer, so every release ends a repeat
                self.press_stop();
                self.end_drag(pointer);
            }
            InputEvent::Click { control } => self.click(control),
            InputEvent::LongPress { control } => {
                if let Some(direction) = control.seek_direction() {
                    self.press_start(direction);
                }
            }
        }
    }

    fn click(&mut self, control: Control) {
        match control {
            Control::Play => self.play_pressed(),
            Control::SeekForward | Control::SeekBackward => {
                if let Some(direction) = control.seek_direction() {
                    self.tap(direction);
                }
            }
            Control::Fullscreen => self.view.emit(HostSignal::FullscreenRequested),
            Control::SliderTrack => {}
        }
    }

    fn play_pressed(&mut self) {
        match self.config.play_button {
            PlayButtonMode::Signal => self.view.emit(HostSignal::PlayTogglePressed),
            PlayButtonMode::Toggle => {
                let Some(session) = self.session.as_mut() else {
                    return;
                };
                if session.media.paused() {
                    session.media.play();
                } else {
                    session.media.pause();
                }
            }
        }
    }

    /// Route a playback element notification to the reconciler
    pub fn handle_media_event(&mut self, event: MediaEvent) {
        if self.session.is_none() {
            return;
        }

        match event {
            MediaEvent::LoadedMetadata => self.on_loaded_metadata(),
            MediaEvent::Play => self.on_play(),
            MediaEvent::Pause => self.on_pause(),
            MediaEvent::TimeUpdate => self.on_time_update(),
            MediaEvent::Seeked => self.refresh_slider(),
            MediaEvent::Ended => self.on_ended(),
        }
    }

    /// A timer scheduled by this controller fired
    ///
    /// Ids not owned by the current session are ignored, which covers
    /// ticks racing a cancellation or a detach.
    pub fn on_timer(&mut self, id: TimerId) {
        let Some(session) = self.session.as_ref() else {
            debug!(timer = %id, "Timer fired while detached");
            return;
        };

        if let Some(repeat) = session.repeat.filter(|r| r.timer == id) {
            self.repeat_tick(repeat.direction);
        } else if session.watchdog == Some(id) {
            debug!(timer = %id, "End-of-media watchdog fired");
            if let Some(session) = self.session.as_mut() {
                session.watchdog = None;
            }
            self.on_ended();
        }
    }

    // =========================================================================
    // Shared primitives
    // =========================================================================

    /// Write a new media position using the configured seek precision
    pub(crate) fn move_media_position(&mut self, seconds: f64) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        match self.config.seek_mode {
            SeekMode::Fast => session.media.fast_seek(seconds),
            SeekMode::Precise => session.media.set_current_time(seconds),
        }
    }

    pub(crate) fn text_direction(&self) -> TextDirection {
        self.direction.direction()
    }
}

impl TransportController<ManualTimers> {
    /// Advance the virtual clock, dispatching every timer that comes due.
    ///
    /// Timers fire one at a time in deadline order, so a callback that
    /// cancels a timer prevents its later ticks. Returns the number of
    /// callbacks fired.
    pub fn advance_time(&mut self, by: Duration) -> usize {
        let limit = self.timers.now() + by;
        let mut fired = 0;
        while let Some(id) = self.timers.fire_next(limit) {
            self.on_timer(id);
            fired += 1;
        }
        self.timers.set_now(limit);
        fired
    }
}
