use std::fmt;
use std::ops::Deref;

/// Unique identifier for a caption track
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TrackId(String);

impl TrackId {
    /// Create a TrackId from the sink's track identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One of the three option lists nested under the settings dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submenu {
    /// Playback-speed options
    Speed,

    /// Subtitle/CC track options
    Captions,

    /// Quality variant options
    Quality,
}

/// Display mode of a caption track on the media sink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackMode {
    /// Cues are delivered and rendered
    Showing,

    /// Track is inert
    Disabled,
}

/// Volume fraction, clamped to `[0.0, 1.0]`
///
/// Mute is a separate flag; muting does not alter the stored fraction, so
/// unmuting restores the prior level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume(f64);

impl Volume {
    /// Create a volume, clamping out-of-range input
    pub fn new(fraction: f64) -> Self {
        if !(0.0..=1.0).contains(&fraction) {
            tracing::warn!("Volume {fraction} clamped to [0.0, 1.0]");
        }
        let fraction = if fraction.is_finite() { fraction } else { 1.0 };
        Self(fraction.clamp(0.0, 1.0))
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self(1.0)
    }
}

impl Deref for Volume {
    type Target = f64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<f64> for Volume {
    fn from(fraction: f64) -> Self {
        Self::new(fraction)
    }
}

/// A selectable caption track, as reported by the media sink
///
/// The sink owns the track and its cues; the player holds only this
/// reference record. The label doubles as the submenu sort key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptionTrack {
    /// Sink-assigned identifier
    pub id: TrackId,

    /// Display name, also the submenu sort key
    pub label: String,
}

/// A timed caption text span
///
/// Active when the playback position falls within `[start, end)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Cue {
    /// Start of the active window, in seconds
    pub start: f64,

    /// End of the active window, in seconds
    pub end: f64,

    /// Caption text
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_clamps_out_of_range() {
        assert_eq!(*Volume::new(1.5), 1.0);
        assert_eq!(*Volume::new(-0.1), 0.0);
        assert_eq!(*Volume::new(0.4), 0.4);
        assert_eq!(*Volume::new(f64::NAN), 1.0);
    }
}
