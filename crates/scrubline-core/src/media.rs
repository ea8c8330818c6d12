//! Playback element abstraction
//!
//! The media engine is opaque to the controls. Hosts adapt their
//! `<video>`/`<audio>` element, GStreamer pipeline or test double to
//! [`MediaElement`] and forward its notifications as
//! [`MediaEvent`](crate::MediaEvent)s.

/// Playback element driven by the transport controls
pub trait MediaElement {
    /// Current position in seconds
    fn current_time(&self) -> f64;

    /// Precise position write
    fn set_current_time(&mut self, seconds: f64);

    /// Coarse position write; may land on a nearby keyframe
    fn fast_seek(&mut self, seconds: f64) {
        self.set_current_time(seconds);
    }

    /// Duration in seconds; `f64::INFINITY` or NaN while unknown
    fn duration(&self) -> f64;

    fn paused(&self) -> bool;

    /// True while a native seek is in flight
    fn seeking(&self) -> bool;

    fn play(&mut self);

    fn pause(&mut self);
}

/// Returns the duration when it is a usable finite number
pub(crate) fn known_duration(media: &dyn MediaElement) -> Option<f64> {
    let duration = media.duration();
    duration.is_finite().then_some(duration)
}
