use crate::player::error::FullscreenError;

/// The environment's fullscreen capability.
///
/// Vendor-prefix resolution and window plumbing live behind this seam; the
/// state machine only sees enter/exit with a success/failure outcome.
pub trait FullscreenSurface: Send + Sync {
    /// Whether the player surface is currently fullscreen.
    fn is_fullscreen(&self) -> bool;

    /// Enter fullscreen.
    ///
    /// # Errors
    /// Returns `FullscreenError` when the capability is missing or the
    /// environment refuses; the player keeps its prior state.
    fn enter(&self) -> Result<(), FullscreenError>;

    /// Exit fullscreen.
    ///
    /// # Errors
    /// Returns `FullscreenError` when the capability is missing or the
    /// environment refuses; the player keeps its prior state.
    fn exit(&self) -> Result<(), FullscreenError>;
}
