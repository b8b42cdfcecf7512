//! The control-surface state machine.
//!
//! [`PlayerController`] owns the single player state record and is the only
//! component permitted to move the cross-cutting flags (`is_playing`,
//! `is_fullscreen`, settings state). Sub-components own their private slots
//! and signal intent back through the controller; events arrive on one
//! serialized queue, so no two handlers ever interleave.

/// Auto-hiding overlay visibility with stale-timer guard.
pub mod autohide;
/// Caption track binding and overlay text.
pub mod captions;
/// Recoverable error taxonomy.
pub mod error;
/// The serialized event vocabulary.
pub mod events;
/// Clock-label formatting.
pub mod format;
/// Exclusive option selection.
pub mod menu;
/// Play/pause/seek/volume/rate mediation.
pub mod playback;
/// The settings dropdown and its three submenus.
pub mod settings;
/// Source URL wiring with adaptive fallback.
pub mod source;
/// Collaborator seams.
pub mod traits;
/// Identifiers, volumes, tracks and cues.
pub mod types;

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{debug, warn};

pub use autohide::AutoHideTimer;
pub use captions::CaptionSync;
pub use error::{FullscreenError, PlayerError};
pub use events::PlayerEvent;
pub use format::format_timestamp;
pub use menu::{ExclusiveMenu, MenuOption};
pub use playback::PlaybackController;
pub use settings::{DISABLED_CAPTION_LABEL, SettingsMenu};
pub use source::AttachMode;
pub use types::{CaptionTrack, Cue, Submenu, TrackId, TrackMode, Volume};

use crate::common::Property;
use crate::config::{Controls, PlayerConfig};
use traits::{FullscreenSurface, MediaSink, StreamSource};

/// Sending half of the player's event queue.
///
/// Clone freely; every environment callback (input handler, media
/// notification, timer) pushes onto the same queue.
pub type PlayerHandle = mpsc::UnboundedSender<PlayerEvent>;

/// Top-level orchestrator wiring the sub-components into one coherent
/// state machine.
pub struct PlayerController {
    sink: Arc<dyn MediaSink>,
    surface: Arc<dyn FullscreenSurface>,
    loader: Option<Arc<dyn StreamSource>>,
    config: PlayerConfig,

    playback: PlaybackController,
    autohide: AutoHideTimer,
    captions: CaptionSync,
    settings: SettingsMenu,

    is_fullscreen: Property<bool>,
    time_label: Property<String>,
    caption_font_px: Property<u32>,
    duration: f64,

    events_tx: PlayerHandle,
    events_rx: Option<mpsc::UnboundedReceiver<PlayerEvent>>,
}

impl PlayerController {
    /// Construct a player over the given collaborators.
    ///
    /// The player starts paused with the overlay visible and the settings
    /// dropdown closed.
    pub fn new(
        sink: Arc<dyn MediaSink>,
        surface: Arc<dyn FullscreenSurface>,
        config: PlayerConfig,
    ) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        let autohide = AutoHideTimer::new(Duration::from_millis(config.idle_window_ms));
        // Paused at construction, so hiding starts out suppressed.
        autohide.suppress(true);

        let is_fullscreen = Property::new(surface.is_fullscreen());
        let caption_font_px = Property::new(if is_fullscreen.get() {
            config.caption_font.fullscreen_px
        } else {
            config.caption_font.windowed_px
        });

        Self {
            playback: PlaybackController::new(Arc::clone(&sink)),
            captions: CaptionSync::new(Arc::clone(&sink)),
            settings: SettingsMenu::new(&config.rates),
            autohide,
            is_fullscreen,
            time_label: Property::new(format!(
                "{}/{}",
                format_timestamp(0.0),
                format_timestamp(0.0)
            )),
            caption_font_px,
            duration: 0.0,
            sink,
            surface,
            loader: None,
            config,
            events_tx,
            events_rx: Some(events_rx),
        }
    }

    /// A handle for pushing events onto the queue.
    pub fn handle(&self) -> PlayerHandle {
        self.events_tx.clone()
    }

    /// Configuration this player was constructed with.
    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    /// Playback state mediation.
    pub fn playback(&self) -> &PlaybackController {
        &self.playback
    }

    /// Caption binding.
    pub fn captions(&self) -> &CaptionSync {
        &self.captions
    }

    /// Settings dropdown.
    pub fn settings(&self) -> &SettingsMenu {
        &self.settings
    }

    /// Overlay visibility, as driven by the auto-hide timer.
    pub fn controls_visible(&self) -> &Property<bool> {
        self.autohide.visible()
    }

    /// Fullscreen flag, mirroring the capability state.
    pub fn is_fullscreen(&self) -> &Property<bool> {
        &self.is_fullscreen
    }

    /// `"current/duration"` clock label, refreshed on every playback tick.
    pub fn time_label(&self) -> &Property<String> {
        &self.time_label
    }

    /// Caption overlay font size in pixels (fullscreen-dependent).
    pub fn caption_font_px(&self) -> &Property<u32> {
        &self.caption_font_px
    }

    /// Wire a source URL, preferring the adaptive loader.
    ///
    /// The loader is retained so the quality submenu can pick up variant
    /// labels once the manifest is ready.
    ///
    /// # Errors
    /// Returns `PlayerError::SourceError` when the adaptive loader fails;
    /// the player stays usable and the embedder may retry.
    pub async fn attach_source(
        &mut self,
        loader: Option<Arc<dyn StreamSource>>,
        url: &str,
    ) -> Result<AttachMode, PlayerError> {
        let mode = source::attach_source(&self.sink, loader.as_ref(), url).await?;
        self.loader = loader;
        Ok(mode)
    }

    /// Drain the event queue until every handle is dropped.
    pub async fn run(mut self) {
        let Some(mut events) = self.events_rx.take() else {
            return;
        };

        // Swap the controller's own sender for a closed one, so the queue
        // ends once every external handle is gone.
        let (closed_tx, closed_rx) = mpsc::unbounded_channel();
        drop(closed_rx);
        self.events_tx = closed_tx;

        while let Some(event) = events.recv().await {
            self.handle_event(event);
        }
        debug!("Event queue closed, player torn down");
    }

    /// The synchronous transition function.
    ///
    /// All state mutation happens here, one event at a time.
    pub fn handle_event(&mut self, event: PlayerEvent) {
        if !self.event_enabled(&event) {
            debug!("Control disabled by configuration, dropping {event:?}");
            return;
        }

        match event {
            PlayerEvent::TogglePlay => {
                self.playback.toggle_play();
                self.refresh_overlay_guard();
            }
            PlayerEvent::Seek(target) => self.playback.seek(target),
            PlayerEvent::SetVolume(fraction) => self.playback.set_volume(fraction),
            PlayerEvent::ToggleMute => self.playback.toggle_mute(),
            PlayerEvent::ToggleFullscreen => self.toggle_fullscreen(),
            PlayerEvent::ToggleSettings => {
                self.settings.toggle_open();
                self.refresh_overlay_guard();
            }
            PlayerEvent::OpenSubmenu(which) => self.settings.open_submenu(which),
            PlayerEvent::SelectOption { submenu, index } => self.select_option(submenu, index),
            PlayerEvent::PointerMoved => self.autohide.poke(),
            PlayerEvent::PointerLeft => self.autohide.hide_now(),
            PlayerEvent::LoadedData { duration } => {
                self.duration = duration;
                self.publish_time_label(self.sink.current_time());
                self.refresh_caption_tracks();
            }
            PlayerEvent::TimeUpdate { position } => self.publish_time_label(position),
            PlayerEvent::Ended => {
                self.playback.on_ended();
                self.publish_time_label(0.0);
                self.refresh_overlay_guard();
                // Explicit show event; bypasses the idle scheduling.
                self.autohide.show();
            }
            PlayerEvent::TracksChanged => self.refresh_caption_tracks(),
            PlayerEvent::CueChange {
                track_id,
                active_cues,
            } => self.captions.on_cue_change(&track_id, &active_cues),
            PlayerEvent::ManifestReady => {
                self.refresh_quality_variants();
                self.playback.play();
                self.refresh_overlay_guard();
            }
            PlayerEvent::MetadataLoaded => {
                self.playback.play();
                self.refresh_overlay_guard();
            }
        }
    }

    /// Hiding is suppressed whenever the player is paused or a menu is
    /// open; releasing suppression re-arms the idle window.
    fn refresh_overlay_guard(&self) {
        let suppress = !self.playback.is_playing().get() || self.settings.open().get();
        self.autohide.suppress(suppress);
        if !suppress {
            self.autohide.poke();
        }
    }

    fn toggle_fullscreen(&mut self) {
        let outcome = if self.is_fullscreen.get() {
            self.surface.exit().map(|()| false)
        } else {
            self.surface.enter().map(|()| true)
        };

        match outcome {
            Ok(fullscreen) => {
                self.is_fullscreen.set(fullscreen);
                self.caption_font_px.set(if fullscreen {
                    self.config.caption_font.fullscreen_px
                } else {
                    self.config.caption_font.windowed_px
                });
            }
            Err(e) => warn!("Fullscreen transition failed: {e}"),
        }
    }

    fn select_option(&mut self, submenu: Submenu, index: usize) {
        let label = match self.settings.option_label(submenu, index) {
            Ok(label) => label,
            Err(e) => {
                warn!("Rejected menu selection: {e}");
                return;
            }
        };

        match submenu {
            Submenu::Speed => {
                if let Err(e) = self.playback.set_rate(&label) {
                    warn!("Rejected rate selection: {e}");
                    return;
                }
                let _ = self.settings.commit_option(submenu, index);
            }
            Submenu::Captions => self.select_caption(&label, index),
            Submenu::Quality => {
                // Variant switching lives in the loader; the committed label
                // is surfaced through the summary property.
                let _ = self.settings.commit_option(submenu, index);
            }
        }
    }

    fn select_caption(&mut self, label: &str, index: usize) {
        if label == DISABLED_CAPTION_LABEL {
            self.captions.deactivate();
            let _ = self.settings.commit_option(Submenu::Captions, index);
            return;
        }

        let track = self
            .sink
            .text_tracks()
            .into_iter()
            .find(|track| track.label == label);

        let activated = match track {
            Some(track) => self.captions.activate(&track.id).is_ok(),
            None => false,
        };

        if activated {
            let _ = self.settings.commit_option(Submenu::Captions, index);
        } else {
            // Unknown track is treated as Disabled.
            warn!("Caption track {label:?} not found, disabling captions");
            self.captions.deactivate();
            let _ = self.settings.commit_option(Submenu::Captions, 0);
        }
    }

    fn publish_time_label(&self, position: f64) {
        self.time_label.set(format!(
            "{}/{}",
            format_timestamp(position),
            format_timestamp(self.duration)
        ));
    }

    fn refresh_caption_tracks(&mut self) {
        let labels: Vec<String> = self
            .sink
            .text_tracks()
            .into_iter()
            .map(|track| track.label)
            .collect();
        self.settings.set_caption_tracks(&labels);
    }

    fn refresh_quality_variants(&mut self) {
        if let Some(loader) = &self.loader {
            let labels = loader.variant_labels();
            if !labels.is_empty() {
                self.settings.set_quality_variants(&labels);
            }
        }
    }

    fn event_enabled(&self, event: &PlayerEvent) -> bool {
        let controls = self.config.controls;
        match event {
            PlayerEvent::ToggleFullscreen => controls.contains(Controls::FULLSCREEN),
            PlayerEvent::SetVolume(_) => controls.contains(Controls::VOLUME),
            PlayerEvent::ToggleMute => controls.contains(Controls::MUTE),
            PlayerEvent::ToggleSettings => controls.contains(Controls::SETTINGS),
            PlayerEvent::OpenSubmenu(which)
            | PlayerEvent::SelectOption { submenu: which, .. } => {
                controls.contains(Controls::SETTINGS) && controls.contains(submenu_flag(*which))
            }
            _ => true,
        }
    }
}

fn submenu_flag(which: Submenu) -> Controls {
    match which {
        Submenu::Speed => Controls::PLAYBACK,
        Submenu::Captions => Controls::SUBTITLES,
        Submenu::Quality => Controls::QUALITY,
    }
}
