use crate::player::types::{CaptionTrack, TrackId, TrackMode};

/// The media decode/render element, as seen by the control surface.
///
/// Calls mirror the synchronous surface of a native video element; the sink
/// reports its asynchronous side (loadeddata, timeupdate, ended, cuechange)
/// through [`PlayerEvent`](crate::player::events::PlayerEvent)s delivered to
/// the player's queue.
pub trait MediaSink: Send + Sync {
    /// Start or resume playback.
    fn play(&self);

    /// Pause playback.
    fn pause(&self);

    /// Whether the sink is currently paused.
    fn paused(&self) -> bool;

    /// Current playback position, in seconds.
    fn current_time(&self) -> f64;

    /// Move the playback position.
    fn set_current_time(&self, seconds: f64);

    /// Total duration, in seconds. May be unknown (NaN) before loadeddata.
    fn duration(&self) -> f64;

    /// Current volume fraction in `[0, 1]`.
    fn volume(&self) -> f64;

    /// Set the volume fraction.
    fn set_volume(&self, fraction: f64);

    /// Whether audio output is muted.
    fn muted(&self) -> bool;

    /// Set the mute flag. Does not alter the volume fraction.
    fn set_muted(&self, muted: bool);

    /// Current playback rate (1.0 = normal).
    fn playback_rate(&self) -> f64;

    /// Set the playback rate.
    fn set_playback_rate(&self, rate: f64);

    /// Selectable caption tracks, in the sink's native order.
    ///
    /// May grow after construction as the manifest loads; the player reacts
    /// to `TracksChanged` events rather than polling.
    fn text_tracks(&self) -> Vec<CaptionTrack>;

    /// Set a track's display mode. Unknown ids are ignored by the sink.
    fn set_track_mode(&self, id: &TrackId, mode: TrackMode);

    /// Point the sink directly at a source URL (non-adaptive fallback).
    fn set_source_url(&self, url: &str);
}
