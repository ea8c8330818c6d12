//! Scripted session example
//!
//! Drives the transport controls with a simulated playback element and
//! tokio-backed timers: a long press on seek-forward, a scrub, and playing
//! through to the end.
//!
//! Run with: RUST_LOG=debug cargo run -p scrubline-core --example scripted_session

use anyhow::Result;
use scrubline_core::{
    Control, ControlsView, HostSignal, InputEvent, MediaElement, MediaEvent, PlayButtonState,
    PointerId, TextDirection, TokioTimers, TrackRect, TransportController,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Prints every visual update
struct ConsoleView;

impl ControlsView for ConsoleView {
    fn track_rect(&self) -> TrackRect {
        TrackRect::new(20.0, 400.0)
    }

    fn set_elapsed_width(&mut self, percent: f64) {
        println!("  elapsed fill  {:>6.2}%", percent);
    }

    fn set_head_position(&mut self, percent: f64, direction: TextDirection) {
        println!("  play head     {:>6.2}% ({:?})", percent, direction);
    }

    fn set_head_active(&mut self, active: bool) {
        println!("  head active   {}", active);
    }

    fn set_elapsed_text(&mut self, text: &str) {
        println!("  elapsed       {}", text);
    }

    fn set_duration_text(&mut self, text: &str) {
        println!("  duration      {}", text);
    }

    fn set_play_state(&mut self, state: PlayButtonState) {
        println!("  play button   {:?} [{}]", state, state.l10n_id());
    }

    fn emit(&mut self, signal: HostSignal) {
        println!("  signal        {}", signal.event_name());
    }
}

/// Playback element whose clock the script moves by hand
#[derive(Clone)]
struct SimulatedMedia(Rc<RefCell<(f64, bool)>>);

impl SimulatedMedia {
    const DURATION: f64 = 95.0;

    fn position(&self) -> f64 {
        self.0.borrow().0
    }

    fn set_position(&self, seconds: f64) {
        self.0.borrow_mut().0 = seconds;
    }
}

impl MediaElement for SimulatedMedia {
    fn current_time(&self) -> f64 {
        self.position()
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.set_position(seconds);
    }

    fn duration(&self) -> f64 {
        Self::DURATION
    }

    fn paused(&self) -> bool {
        self.0.borrow().1
    }

    fn seeking(&self) -> bool {
        false
    }

    fn play(&mut self) {
        self.0.borrow_mut().1 = false;
    }

    fn pause(&mut self) {
        self.0.borrow_mut().1 = true;
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .init();
    scrubline_core::init();

    let (timers, mut fired) = TokioTimers::new();
    let mut controls = TransportController::new(ConsoleView, TextDirection::Ltr, timers);
    let media = SimulatedMedia(Rc::new(RefCell::new((0.0, true))));
    controls.attach(media.clone())?;

    println!("Metadata loaded");
    controls.handle_media_event(MediaEvent::LoadedMetadata);

    println!("\nHolding seek-forward for three ticks");
    controls.handle_input(InputEvent::LongPress {
        control: Control::SeekForward,
    });
    for _ in 0..3 {
        if let Some(id) = fired.recv().await {
            controls.on_timer(id);
        }
        controls.handle_media_event(MediaEvent::Seeked);
    }
    controls.handle_input(InputEvent::Release { pointer: PointerId(0) });
    println!("Position after repeat: {:.1}s", media.position());

    println!("\nScrubbing to three quarters of the track");
    controls.handle_input(InputEvent::Press {
        control: Control::SliderTrack,
        pointer: PointerId(1),
        client_x: 120.0,
    });
    controls.handle_input(InputEvent::Move {
        pointer: PointerId(1),
        client_x: 320.0,
    });
    controls.handle_input(InputEvent::Release { pointer: PointerId(1) });
    controls.handle_media_event(MediaEvent::Seeked);

    println!("\nPlaying through to the end without a native 'ended'");
    controls.handle_input(InputEvent::Click { control: Control::Play });
    media.set_position(SimulatedMedia::DURATION);
    controls.handle_media_event(MediaEvent::Pause);
    controls.handle_media_event(MediaEvent::TimeUpdate);

    match tokio::time::timeout(Duration::from_secs(2), fired.recv()).await {
        Ok(Some(id)) => controls.on_timer(id),
        _ => println!("Watchdog did not fire"),
    }
    println!("Position after end of media: {:.1}s", media.position());

    controls.detach();
    Ok(())
}
