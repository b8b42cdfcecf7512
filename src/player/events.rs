use super::types::{Cue, Submenu, TrackId};

/// Events consumed by the player's single logical queue
///
/// User input and media notifications are serialized onto one channel; no
/// two handlers run concurrently, so components may assume their state is
/// quiescent while a handler executes.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerEvent {
    /// Play/pause toggle (play button or a click on the video surface)
    TogglePlay,

    /// Scrubber released at a target position, in seconds
    Seek(f64),

    /// Volume slider moved to a fraction in `[0, 1]`
    SetVolume(f64),

    /// Mute toggle
    ToggleMute,

    /// Fullscreen toggle
    ToggleFullscreen,

    /// Settings dropdown toggle (gear)
    ToggleSettings,

    /// Settings row clicked, expanding one submenu
    OpenSubmenu(Submenu),

    /// Submenu option clicked
    SelectOption {
        /// Which submenu the option belongs to
        submenu: Submenu,
        /// Index of the clicked option
        index: usize,
    },

    /// Pointer moved over the player surface
    PointerMoved,

    /// Pointer left the player surface
    PointerLeft,

    /// Media sink finished loading the source
    LoadedData {
        /// Total duration, in seconds
        duration: f64,
    },

    /// Playback position advanced
    TimeUpdate {
        /// Current position, in seconds
        position: f64,
    },

    /// End of media reached
    Ended,

    /// The sink's caption track list changed (late population included)
    TracksChanged,

    /// Active-cue set changed on a caption track
    CueChange {
        /// Track whose cue set changed
        track_id: TrackId,
        /// Cues active at the reported time, in the track's native order
        active_cues: Vec<Cue>,
    },

    /// Adaptive loader parsed the manifest; playback may start
    ManifestReady,

    /// Direct-URL fallback: sink metadata loaded; playback may start
    MetadataLoaded,
}
