use std::sync::Arc;

use tracing::debug;

use super::error::PlayerError;
use super::traits::MediaSink;
use super::types::Volume;
use crate::common::Property;

/// Alias accepted by the speed submenu for a rate of 1.0.
pub const NORMAL_RATE_LABEL: &str = "Normal";

/// Owns play/pause/seek/volume/mute/rate state and mediates between user
/// input and the media sink.
///
/// `is_playing` is the canonical playing flag consumed by the auto-hide
/// timer; only this controller moves it.
#[derive(Clone)]
pub struct PlaybackController {
    sink: Arc<dyn MediaSink>,
    is_playing: Property<bool>,
    volume: Property<Volume>,
    muted: Property<bool>,
    rate: Property<f64>,
}

impl PlaybackController {
    /// Create a controller in the paused state.
    pub fn new(sink: Arc<dyn MediaSink>) -> Self {
        Self {
            sink,
            is_playing: Property::new(false),
            volume: Property::new(Volume::default()),
            muted: Property::new(false),
            rate: Property::new(1.0),
        }
    }

    /// Canonical playing flag.
    pub fn is_playing(&self) -> &Property<bool> {
        &self.is_playing
    }

    /// Stored volume fraction (independent of mute).
    pub fn volume(&self) -> &Property<Volume> {
        &self.volume
    }

    /// Mute flag.
    pub fn muted(&self) -> &Property<bool> {
        &self.muted
    }

    /// Committed playback rate.
    pub fn rate(&self) -> &Property<f64> {
        &self.rate
    }

    /// Toggle between playing and paused.
    ///
    /// Reads the sink's current paused flag immediately before acting, so a
    /// rapid double-invocation lands back where it started rather than
    /// acting on a stale snapshot.
    pub fn toggle_play(&self) {
        if self.sink.paused() {
            self.sink.play();
            self.is_playing.set(true);
        } else {
            self.sink.pause();
            self.is_playing.set(false);
        }
    }

    /// Start playback (manifest-ready / metadata-loaded autostart path).
    pub fn play(&self) {
        self.sink.play();
        self.is_playing.set(true);
    }

    /// Move the playback position, clamped to `[0, duration]`.
    pub fn seek(&self, target_seconds: f64) {
        let duration = self.sink.duration();
        let upper = if duration.is_finite() && duration > 0.0 {
            duration
        } else {
            f64::MAX
        };
        let clamped = target_seconds.clamp(0.0, upper);
        self.sink.set_current_time(clamped);
    }

    /// Set the volume fraction. Mute state is untouched.
    pub fn set_volume(&self, fraction: f64) {
        let volume = Volume::new(fraction);
        self.sink.set_volume(*volume);
        self.volume.set(volume);
    }

    /// Flip the mute flag without altering the stored volume fraction.
    pub fn toggle_mute(&self) {
        let next = !self.sink.muted();
        self.sink.set_muted(next);
        self.muted.set(next);
    }

    /// Commit a playback rate from a submenu label.
    ///
    /// `"Normal"` is an alias for 1.0; anything else must parse as a
    /// positive finite number.
    ///
    /// # Errors
    /// Returns `PlayerError::InvalidRate` on malformed or non-positive
    /// input; the prior rate is kept.
    pub fn set_rate(&self, input: &str) -> Result<f64, PlayerError> {
        let rate = parse_rate(input)?;
        self.sink.set_playback_rate(rate);
        self.rate.set(rate);
        debug!("Playback rate set to {rate}");
        Ok(rate)
    }

    /// Handle the sink's end-of-media notification: force paused and rewind
    /// to the start. The caller forces the overlay visible.
    pub fn on_ended(&self) {
        self.sink.pause();
        self.sink.set_current_time(0.0);
        self.is_playing.set(false);
    }
}

fn parse_rate(input: &str) -> Result<f64, PlayerError> {
    if input == NORMAL_RATE_LABEL {
        return Ok(1.0);
    }

    match input.trim().parse::<f64>() {
        Ok(rate) if rate.is_finite() && rate > 0.0 => Ok(rate),
        _ => Err(PlayerError::InvalidRate(input.to_string())),
    }
}
