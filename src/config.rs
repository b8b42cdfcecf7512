use std::path::Path;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::core::{PlayheadError, Result};

bitflags! {
    /// Set of controls the embedding page enables on the overlay.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(try_from = "Vec<String>", into = "Vec<String>")]
    pub struct Controls: u32 {
        /// Title bar above the video surface.
        const TITLE = 1 << 0;
        /// Settings dropdown (gear).
        const SETTINGS = 1 << 1;
        /// Playback-speed submenu.
        const PLAYBACK = 1 << 2;
        /// Subtitles/CC submenu and caption overlay.
        const SUBTITLES = 1 << 3;
        /// Quality submenu.
        const QUALITY = 1 << 4;
        /// Volume slider.
        const VOLUME = 1 << 5;
        /// Mute toggle.
        const MUTE = 1 << 6;
        /// Fullscreen toggle.
        const FULLSCREEN = 1 << 7;
    }
}

impl Default for Controls {
    fn default() -> Self {
        Self::all()
    }
}

impl Controls {
    fn from_control_name(name: &str) -> Option<Self> {
        match name {
            "title" => Some(Self::TITLE),
            "settings" => Some(Self::SETTINGS),
            "playback" => Some(Self::PLAYBACK),
            "subtitles" => Some(Self::SUBTITLES),
            "quality" => Some(Self::QUALITY),
            "volume" => Some(Self::VOLUME),
            "mute" => Some(Self::MUTE),
            "fullscreen" => Some(Self::FULLSCREEN),
            _ => None,
        }
    }

    fn names(self) -> Vec<String> {
        [
            (Self::TITLE, "title"),
            (Self::SETTINGS, "settings"),
            (Self::PLAYBACK, "playback"),
            (Self::SUBTITLES, "subtitles"),
            (Self::QUALITY, "quality"),
            (Self::VOLUME, "volume"),
            (Self::MUTE, "mute"),
            (Self::FULLSCREEN, "fullscreen"),
        ]
        .into_iter()
        .filter(|(flag, _)| self.contains(*flag))
        .map(|(_, name)| name.to_string())
        .collect()
    }
}

impl TryFrom<Vec<String>> for Controls {
    type Error = String;

    fn try_from(names: Vec<String>) -> std::result::Result<Self, Self::Error> {
        let mut controls = Controls::empty();
        for name in &names {
            let flag = Controls::from_control_name(name)
                .ok_or_else(|| format!("unknown control {name:?}"))?;
            controls |= flag;
        }
        Ok(controls)
    }
}

impl From<Controls> for Vec<String> {
    fn from(controls: Controls) -> Self {
        controls.names()
    }
}

/// Caption overlay font sizes, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptionFontConfig {
    /// Font size while windowed.
    #[serde(default = "default_windowed_px")]
    pub windowed_px: u32,

    /// Font size while fullscreen.
    #[serde(default = "default_fullscreen_px")]
    pub fullscreen_px: u32,
}

fn default_windowed_px() -> u32 {
    20
}

fn default_fullscreen_px() -> u32 {
    24
}

impl Default for CaptionFontConfig {
    fn default() -> Self {
        Self {
            windowed_px: default_windowed_px(),
            fullscreen_px: default_fullscreen_px(),
        }
    }
}

/// Construction-time configuration for a player instance.
///
/// All fields have defaults, so an embedder can start from
/// `PlayerConfig::default()` and override what it needs, or load the whole
/// record from a TOML document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Title shown above the video surface.
    pub title: String,

    /// Controls the embedding page enables.
    pub controls: Controls,

    /// Idle window before the control overlay auto-hides, in milliseconds.
    pub idle_window_ms: u64,

    /// Playback-speed options offered by the speed submenu, in menu order.
    /// "Normal" is the 1.0 alias.
    pub rates: Vec<String>,

    /// Caption overlay font sizes.
    pub caption_font: CaptionFontConfig,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            controls: Controls::default(),
            idle_window_ms: 1500,
            rates: ["0.25", "0.5", "0.75", "Normal", "1.25", "1.5", "1.75", "2"]
                .map(String::from)
                .to_vec(),
            caption_font: CaptionFontConfig::default(),
        }
    }
}

impl PlayerConfig {
    /// Parse a configuration record from a TOML document.
    ///
    /// Missing fields take their defaults.
    ///
    /// # Errors
    /// Returns `PlayheadError::TomlParse` on a malformed document and
    /// `PlayheadError::Config` on values that parse but are invalid.
    pub fn from_toml_str(document: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(document).map_err(|e| PlayheadError::toml_parse(e, None))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration record from a TOML file.
    ///
    /// # Errors
    /// Returns `PlayheadError::Io` if the file cannot be read, plus the
    /// `from_toml_str` failure modes.
    pub fn load(path: &Path) -> Result<Self> {
        let document = std::fs::read_to_string(path)?;
        let config: Self =
            toml::from_str(&document).map_err(|e| PlayheadError::toml_parse(e, Some(path)))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.idle_window_ms == 0 {
            return Err(PlayheadError::Config(
                "idle_window_ms must be positive".to_string(),
            ));
        }
        if self.rates.is_empty() {
            return Err(PlayheadError::Config(
                "rates must offer at least one option".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn defaults_enable_every_control() {
        let config = PlayerConfig::default();
        assert_eq!(config.controls, Controls::all());
        assert_eq!(config.idle_window_ms, 1500);
        assert_eq!(config.rates.len(), 8);
        assert_eq!(config.caption_font.windowed_px, 20);
        assert_eq!(config.caption_font.fullscreen_px, 24);
    }

    #[test]
    fn parses_partial_document_with_defaults() {
        let config = PlayerConfig::from_toml_str(
            r#"
title = "Big Buck Bunny"
controls = ["title", "playback", "volume"]
"#,
        )
        .unwrap();

        assert_eq!(config.title, "Big Buck Bunny");
        assert_eq!(
            config.controls,
            Controls::TITLE | Controls::PLAYBACK | Controls::VOLUME
        );
        assert_eq!(config.idle_window_ms, 1500);
    }

    #[test]
    fn rejects_unknown_control_name() {
        let result = PlayerConfig::from_toml_str(r#"controls = ["scrubber"]"#);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_zero_idle_window() {
        let result = PlayerConfig::from_toml_str("idle_window_ms = 0");
        assert!(matches!(result, Err(PlayheadError::Config(_))));
    }
}
