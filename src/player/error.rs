use super::types::TrackId;

/// Failure outcome of a fullscreen capability call
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenError {
    /// The environment exposes no fullscreen capability
    #[error("Fullscreen not supported by this environment")]
    Unsupported,

    /// The environment refused the transition
    #[error("Fullscreen request denied")]
    Denied,
}

/// Errors that can occur during control-surface operations
///
/// Every variant is recoverable: the rejected action is a no-op and the
/// prior state is kept.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum PlayerError {
    /// Playback-rate input was malformed or non-positive
    #[error("Invalid playback rate {0:?}")]
    InvalidRate(String),

    /// Menu selection referenced an option that does not exist
    #[error("Menu index {index} out of range (len {len})")]
    IndexOutOfRange {
        /// Requested option index
        index: usize,
        /// Number of options in the menu
        len: usize,
    },

    /// Fullscreen capability call failed
    #[error(transparent)]
    Fullscreen(#[from] FullscreenError),

    /// Caption selection referenced an unknown track
    #[error("Caption track {0} not found")]
    TrackNotFound(TrackId),

    /// Streaming source failed to load
    #[error("Source load failed: {0}")]
    SourceError(String),
}
