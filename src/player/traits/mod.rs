//! Collaborator seams for the control surface.
//!
//! The embedding environment supplies the media decode/render element, the
//! adaptive-streaming loader and the fullscreen capability behind these
//! traits; the state machine never touches the environment directly.

mod fullscreen;
mod sink;
mod source;

pub use fullscreen::FullscreenSurface;
pub use sink::MediaSink;
pub use source::StreamSource;
