use std::sync::Arc;

use tracing::debug;

use super::error::PlayerError;
use super::traits::MediaSink;
use super::types::{Cue, TrackId, TrackMode};
use crate::common::Property;

/// Binds the active caption track's cue stream to the overlay text.
///
/// At most one track is in showing mode at any time. The overlay text
/// property carries `None` while no cue is active (overlay hidden).
#[derive(Clone)]
pub struct CaptionSync {
    sink: Arc<dyn MediaSink>,
    active_track: Property<Option<TrackId>>,
    overlay_text: Property<Option<String>>,
}

impl CaptionSync {
    /// Create a sync with no active track.
    pub fn new(sink: Arc<dyn MediaSink>) -> Self {
        Self {
            sink,
            active_track: Property::new(None),
            overlay_text: Property::new(None),
        }
    }

    /// Currently displayed track, if any.
    pub fn active_track(&self) -> &Property<Option<TrackId>> {
        &self.active_track
    }

    /// Overlay text; `None` while hidden.
    pub fn overlay_text(&self) -> &Property<Option<String>> {
        &self.overlay_text
    }

    /// Switch the displayed track.
    ///
    /// Detaches the previous track (mode back to disabled) before putting
    /// the new one into showing mode.
    ///
    /// # Errors
    /// Returns `PlayerError::TrackNotFound` when the sink does not know the
    /// track; prior state is kept.
    pub fn activate(&self, id: &TrackId) -> Result<(), PlayerError> {
        let known = self.sink.text_tracks().iter().any(|track| &track.id == id);
        if !known {
            return Err(PlayerError::TrackNotFound(id.clone()));
        }

        if let Some(previous) = self.active_track.get() {
            self.sink.set_track_mode(&previous, TrackMode::Disabled);
        }

        self.sink.set_track_mode(id, TrackMode::Showing);
        self.active_track.set(Some(id.clone()));
        self.overlay_text.set(None);
        debug!("Caption track {id} activated");
        Ok(())
    }

    /// Disable captions: detach the active track and clear the overlay.
    ///
    /// Idempotent; disabling while already disabled is a no-op.
    pub fn deactivate(&self) {
        if let Some(previous) = self.active_track.get() {
            self.sink.set_track_mode(&previous, TrackMode::Disabled);
            debug!("Caption track {previous} deactivated");
        }
        self.active_track.set(None);
        self.overlay_text.set(None);
    }

    /// Handle a cue-change notification from the sink.
    ///
    /// Notifications for tracks other than the active one are ignored. When
    /// several cues are simultaneously active, the first in the reported
    /// order wins; no independent sorting is applied.
    pub fn on_cue_change(&self, track_id: &TrackId, active_cues: &[Cue]) {
        if self.active_track.get().as_ref() != Some(track_id) {
            return;
        }

        match active_cues.first() {
            Some(cue) => self.overlay_text.set(Some(cue.text.clone())),
            None => self.overlay_text.set(None),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::collections::HashMap;
    use std::sync::Mutex;

    use super::*;
    use crate::player::types::CaptionTrack;

    struct StubSink {
        tracks: Vec<CaptionTrack>,
        modes: Mutex<HashMap<TrackId, TrackMode>>,
    }

    impl StubSink {
        fn with_tracks(labels: &[&str]) -> Arc<Self> {
            Arc::new(Self {
                tracks: labels
                    .iter()
                    .map(|label| CaptionTrack {
                        id: TrackId::new(*label),
                        label: (*label).to_string(),
                    })
                    .collect(),
                modes: Mutex::new(HashMap::new()),
            })
        }

        fn mode(&self, id: &str) -> Option<TrackMode> {
            self.modes.lock().unwrap().get(&TrackId::new(id)).copied()
        }
    }

    impl MediaSink for StubSink {
        fn play(&self) {}
        fn pause(&self) {}
        fn paused(&self) -> bool {
            true
        }
        fn current_time(&self) -> f64 {
            0.0
        }
        fn set_current_time(&self, _seconds: f64) {}
        fn duration(&self) -> f64 {
            0.0
        }
        fn volume(&self) -> f64 {
            1.0
        }
        fn set_volume(&self, _fraction: f64) {}
        fn muted(&self) -> bool {
            false
        }
        fn set_muted(&self, _muted: bool) {}
        fn playback_rate(&self) -> f64 {
            1.0
        }
        fn set_playback_rate(&self, _rate: f64) {}
        fn text_tracks(&self) -> Vec<CaptionTrack> {
            self.tracks.clone()
        }
        fn set_track_mode(&self, id: &TrackId, mode: TrackMode) {
            self.modes.lock().unwrap().insert(id.clone(), mode);
        }
        fn set_source_url(&self, _url: &str) {}
    }

    fn cue(text: &str) -> Cue {
        Cue {
            start: 0.0,
            end: 1.0,
            text: text.to_string(),
        }
    }

    #[test]
    fn activate_detaches_previous_track() {
        let sink = StubSink::with_tracks(&["en", "fr"]);
        let sync = CaptionSync::new(sink.clone());

        sync.activate(&TrackId::new("en")).unwrap();
        sync.activate(&TrackId::new("fr")).unwrap();

        assert_eq!(sink.mode("en"), Some(TrackMode::Disabled));
        assert_eq!(sink.mode("fr"), Some(TrackMode::Showing));
        assert_eq!(sync.active_track().get(), Some(TrackId::new("fr")));
    }

    #[test]
    fn unknown_track_keeps_prior_state() {
        let sink = StubSink::with_tracks(&["en"]);
        let sync = CaptionSync::new(sink);
        sync.activate(&TrackId::new("en")).unwrap();

        let err = sync.activate(&TrackId::new("de")).unwrap_err();
        assert_eq!(err, PlayerError::TrackNotFound(TrackId::new("de")));
        assert_eq!(sync.active_track().get(), Some(TrackId::new("en")));
    }

    #[test]
    fn first_reported_cue_wins() {
        let sink = StubSink::with_tracks(&["en"]);
        let sync = CaptionSync::new(sink);
        sync.activate(&TrackId::new("en")).unwrap();

        sync.on_cue_change(&TrackId::new("en"), &[cue("first"), cue("second")]);
        assert_eq!(sync.overlay_text().get(), Some("first".to_string()));

        sync.on_cue_change(&TrackId::new("en"), &[]);
        assert_eq!(sync.overlay_text().get(), None);
    }

    #[test]
    fn inactive_track_cues_are_ignored() {
        let sink = StubSink::with_tracks(&["en", "fr"]);
        let sync = CaptionSync::new(sink);
        sync.activate(&TrackId::new("en")).unwrap();

        sync.on_cue_change(&TrackId::new("fr"), &[cue("bonjour")]);
        assert_eq!(sync.overlay_text().get(), None);
    }

    #[test]
    fn deactivate_clears_everything() {
        let sink = StubSink::with_tracks(&["en"]);
        let sync = CaptionSync::new(sink.clone());
        sync.activate(&TrackId::new("en")).unwrap();
        sync.on_cue_change(&TrackId::new("en"), &[cue("hello")]);

        sync.deactivate();
        assert_eq!(sync.active_track().get(), None);
        assert_eq!(sync.overlay_text().get(), None);
        assert_eq!(sink.mode("en"), Some(TrackMode::Disabled));

        // Disabling again is a no-op.
        sync.deactivate();
        assert_eq!(sync.active_track().get(), None);
    }
}
