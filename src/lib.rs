//! Playhead - Embeddable media-player control surface.
//!
//! Playhead overlays playback controls onto a host-provided media sink and
//! keeps the control-surface state machine consistent under interleaved
//! asynchronous inputs (user clicks, pointer movement, playback events,
//! caption cue timing, fullscreen transitions). The main features include:
//!
//! - Reactive player state with fine-grained property watching
//! - Auto-hiding control overlay with idle timeout
//! - Settings dropdown with exclusive speed/caption/quality submenus
//! - Caption cue synchronization onto a text overlay
//! - Trait seams for the media sink, streaming loader and fullscreen surface
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use playhead::config::PlayerConfig;
//! use playhead::player::PlayerController;
//! # use playhead::player::traits::{FullscreenSurface, MediaSink};
//! # fn sink() -> Arc<dyn MediaSink> { unimplemented!() }
//! # fn surface() -> Arc<dyn FullscreenSurface> { unimplemented!() }
//!
//! let player = PlayerController::new(sink(), surface(), PlayerConfig::default());
//! let events = player.handle();
//! tokio::spawn(async move { player.run().await });
//! ```

/// Player configuration schema and TOML loading.
pub mod config;

/// Core error types and result aliases.
pub mod core;

/// Tracing initialization for embedding applications.
pub mod tracing_config;

/// Common utilities shared across the player components.
pub mod common;

/// The control-surface state machine and its collaborator seams.
pub mod player;

/// Re-exported core types for convenience.
pub use core::{PlayheadError, Result};
