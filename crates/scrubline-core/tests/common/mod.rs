//! Test doubles shared by the integration tests
//!
//! Both fakes are cheap `Rc<RefCell<..>>` handles: a test keeps one clone
//! to inspect and hands another to the controller.

#![allow(dead_code)]

use scrubline_core::{
    ControlsView, HostSignal, ManualTimers, MediaElement, PlayButtonState, TextDirection,
    TrackRect, TransportController,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

// =============================================================================
// Fake playback element
// =============================================================================

#[derive(Debug, Clone)]
pub struct MediaState {
    pub current_time: f64,
    pub duration: f64,
    pub paused: bool,
    pub seeking: bool,
    pub play_calls: usize,
    pub pause_calls: usize,
    pub seeks: Vec<f64>,
    pub fast_seeks: Vec<f64>,
}

#[derive(Debug, Clone)]
pub struct FakeMedia(Rc<RefCell<MediaState>>);

impl FakeMedia {
    pub fn new(duration: f64) -> Self {
        Self(Rc::new(RefCell::new(MediaState {
            current_time: 0.0,
            duration,
            paused: true,
            seeking: false,
            play_calls: 0,
            pause_calls: 0,
            seeks: Vec::new(),
            fast_seeks: Vec::new(),
        })))
    }

    /// Media that is already playing at `position`
    pub fn playing_at(duration: f64, position: f64) -> Self {
        let media = Self::new(duration);
        media.set_position(position);
        media.0.borrow_mut().paused = false;
        media
    }

    pub fn state(&self) -> MediaState {
        self.0.borrow().clone()
    }

    pub fn position(&self) -> f64 {
        self.0.borrow().current_time
    }

    /// Move the position without recording a seek
    pub fn set_position(&self, seconds: f64) {
        self.0.borrow_mut().current_time = seconds;
    }

    pub fn set_duration(&self, seconds: f64) {
        self.0.borrow_mut().duration = seconds;
    }

    pub fn set_seeking(&self, seeking: bool) {
        self.0.borrow_mut().seeking = seeking;
    }

    pub fn set_paused(&self, paused: bool) {
        self.0.borrow_mut().paused = paused;
    }
}

impl MediaElement for FakeMedia {
    fn current_time(&self) -> f64 {
        self.0.borrow().current_time
    }

    fn set_current_time(&mut self, seconds: f64) {
        let mut state = self.0.borrow_mut();
        state.current_time = seconds;
        state.seeks.push(seconds);
    }

    fn fast_seek(&mut self, seconds: f64) {
        let mut state = self.0.borrow_mut();
        state.current_time = seconds;
        state.fast_seeks.push(seconds);
    }

    fn duration(&self) -> f64 {
        self.0.borrow().duration
    }

    fn paused(&self) -> bool {
        self.0.borrow().paused
    }

    fn seeking(&self) -> bool {
        self.0.borrow().seeking
    }

    fn play(&mut self) {
        let mut state = self.0.borrow_mut();
        state.paused = false;
        state.play_calls += 1;
    }

    fn pause(&mut self) {
        let mut state = self.0.borrow_mut();
        state.paused = true;
        state.pause_calls += 1;
    }
}

// =============================================================================
// Recording view
// =============================================================================

#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub track: TrackRect,
    pub elapsed_width: Option<f64>,
    pub head_position: Option<(f64, TextDirection)>,
    pub head_active: bool,
    pub elapsed_text: Option<String>,
    pub duration_text: Option<String>,
    pub play_state: Option<PlayButtonState>,
    pub signals: Vec<HostSignal>,
}

#[derive(Debug, Clone, Default)]
pub struct RecordingView(Rc<RefCell<ViewState>>);

impl RecordingView {
    pub fn with_track(track: TrackRect) -> Self {
        let view = Self::default();
        view.0.borrow_mut().track = track;
        view
    }

    pub fn state(&self) -> ViewState {
        self.0.borrow().clone()
    }

    pub fn set_track(&self, track: TrackRect) {
        self.0.borrow_mut().track = track;
    }
}

impl ControlsView for RecordingView {
    fn track_rect(&self) -> TrackRect {
        self.0.borrow().track
    }

    fn set_elapsed_width(&mut self, percent: f64) {
        self.0.borrow_mut().elapsed_width = Some(percent);
    }

    fn set_head_position(&mut self, percent: f64, direction: TextDirection) {
        self.0.borrow_mut().head_position = Some((percent, direction));
    }

    fn set_head_active(&mut self, active: bool) {
        self.0.borrow_mut().head_active = active;
    }

    fn set_elapsed_text(&mut self, text: &str) {
        self.0.borrow_mut().elapsed_text = Some(text.to_string());
    }

    fn set_duration_text(&mut self, text: &str) {
        self.0.borrow_mut().duration_text = Some(text.to_string());
    }

    fn set_play_state(&mut self, state: PlayButtonState) {
        self.0.borrow_mut().play_state = Some(state);
    }

    fn emit(&mut self, signal: HostSignal) {
        self.0.borrow_mut().signals.push(signal);
    }
}

// =============================================================================
// Fixtures
// =============================================================================

pub struct Harness {
    pub controls: TransportController<ManualTimers>,
    pub media: FakeMedia,
    pub view: RecordingView,
    pub direction: Rc<Cell<TextDirection>>,
}

/// Controls attached to `media`, with a 100px track starting at x = 0
pub fn attached(media: FakeMedia) -> Harness {
    let view = RecordingView::with_track(TrackRect::new(0.0, 100.0));
    let direction = Rc::new(Cell::new(TextDirection::Ltr));
    let mut controls = TransportController::new(view.clone(), direction.clone(), ManualTimers::new());
    controls.attach(media.clone()).unwrap();

    Harness {
        controls,
        media,
        view,
        direction,
    }
}
