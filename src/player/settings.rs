use tracing::debug;

use super::error::PlayerError;
use super::menu::ExclusiveMenu;
use super::types::Submenu;
use crate::common::Property;

/// Option 0 of the captions submenu, always present.
pub const DISABLED_CAPTION_LABEL: &str = "Disabled";

/// Option 0 of the quality submenu, always present.
pub const AUTO_QUALITY_LABEL: &str = "Auto";

/// The settings dropdown: three exclusive submenus behind one open flag.
///
/// At most one submenu is expanded at a time; while one is expanded the
/// other two link rows are hidden (a presentation consequence the embedder
/// derives from `active_submenu`). Committing an option returns the view to
/// the top-level row list.
pub struct SettingsMenu {
    open: Property<bool>,
    active_submenu: Property<Option<Submenu>>,
    speed: ExclusiveMenu,
    captions: ExclusiveMenu,
    quality: ExclusiveMenu,
    speed_label: Property<String>,
    captions_label: Property<String>,
    quality_label: Property<String>,
}

impl SettingsMenu {
    /// Build the menu from the configured speed options.
    ///
    /// The captions submenu starts with only "Disabled"; tracks populate it
    /// later as the sink reports them. The quality submenu starts with only
    /// "Auto".
    pub fn new<S: AsRef<str>>(rates: &[S]) -> Self {
        Self {
            open: Property::new(false),
            active_submenu: Property::new(None),
            speed: ExclusiveMenu::new(rates.iter().map(|rate| rate.as_ref().to_string())),
            captions: ExclusiveMenu::new([DISABLED_CAPTION_LABEL]),
            quality: ExclusiveMenu::new([AUTO_QUALITY_LABEL]),
            speed_label: Property::new("Normal".to_string()),
            captions_label: Property::new(DISABLED_CAPTION_LABEL.to_string()),
            quality_label: Property::new(AUTO_QUALITY_LABEL.to_string()),
        }
    }

    /// Whether the dropdown is expanded.
    pub fn open(&self) -> &Property<bool> {
        &self.open
    }

    /// Which submenu is expanded, if any.
    pub fn active_submenu(&self) -> &Property<Option<Submenu>> {
        &self.active_submenu
    }

    /// Persisted summary label for a row ("Normal" / "Disabled" / "Auto").
    pub fn summary_label(&self, which: Submenu) -> &Property<String> {
        match which {
            Submenu::Speed => &self.speed_label,
            Submenu::Captions => &self.captions_label,
            Submenu::Quality => &self.quality_label,
        }
    }

    /// Flip the dropdown. Closing collapses any expanded submenu.
    ///
    /// Returns the new open state.
    pub fn toggle_open(&mut self) -> bool {
        let now_open = !self.open.get();
        self.open.set(now_open);
        if !now_open {
            self.reset_submenus();
        }
        now_open
    }

    /// Expand one submenu; the other two rows collapse.
    ///
    /// Ignored while the dropdown is closed (a submenu can only be active
    /// inside an open menu).
    pub fn open_submenu(&mut self, which: Submenu) {
        if !self.open.get() {
            debug!("Ignoring submenu {which:?} while settings are closed");
            return;
        }
        self.active_submenu.set(Some(which));
    }

    /// Label of an option without committing it.
    ///
    /// # Errors
    /// Returns `PlayerError::IndexOutOfRange` on an invalid index.
    pub fn option_label(&self, which: Submenu, index: usize) -> Result<String, PlayerError> {
        let menu = self.menu(which);
        menu.labels()
            .nth(index)
            .map(String::from)
            .ok_or(PlayerError::IndexOutOfRange {
                index,
                len: menu.len(),
            })
    }

    /// Commit a selection: mark the option active, persist its label on the
    /// row summary and return to the top-level row list.
    ///
    /// Returns the committed label.
    ///
    /// # Errors
    /// Returns `PlayerError::IndexOutOfRange` on an invalid index; menu
    /// state is left unchanged.
    pub fn commit_option(&mut self, which: Submenu, index: usize) -> Result<String, PlayerError> {
        let label = self.menu_mut(which).select(index)?.to_string();
        self.summary_label(which).set(label.clone());
        self.reset_submenus();
        Ok(label)
    }

    /// Rebuild the captions submenu from the sink's track labels.
    ///
    /// Labels are sorted; "Disabled" stays option 0. Any in-flight selection
    /// highlight is cleared, but the persisted summary label survives.
    pub fn set_caption_tracks<S: AsRef<str>>(&mut self, labels: &[S]) {
        let mut sorted: Vec<String> = labels
            .iter()
            .map(|label| label.as_ref().to_string())
            .collect();
        sorted.sort();

        let mut options = Vec::with_capacity(sorted.len() + 1);
        options.push(DISABLED_CAPTION_LABEL.to_string());
        options.extend(sorted);
        self.captions.replace_options(options);
    }

    /// Rebuild the quality submenu from the manifest's variant labels,
    /// behind "Auto" at option 0.
    pub fn set_quality_variants<S: AsRef<str>>(&mut self, labels: &[S]) {
        let mut options = Vec::with_capacity(labels.len() + 1);
        options.push(AUTO_QUALITY_LABEL.to_string());
        options.extend(labels.iter().map(|label| label.as_ref().to_string()));
        self.quality.replace_options(options);
    }

    /// Collapse every submenu and clear all option highlights.
    pub fn reset_submenus(&mut self) {
        self.speed.reset();
        self.captions.reset();
        self.quality.reset();
        self.active_submenu.set(None);
    }

    fn menu(&self, which: Submenu) -> &ExclusiveMenu {
        match which {
            Submenu::Speed => &self.speed,
            Submenu::Captions => &self.captions,
            Submenu::Quality => &self.quality,
        }
    }

    fn menu_mut(&mut self, which: Submenu) -> &mut ExclusiveMenu {
        match which {
            Submenu::Speed => &mut self.speed,
            Submenu::Captions => &mut self.captions,
            Submenu::Quality => &mut self.quality,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn menu() -> SettingsMenu {
        SettingsMenu::new(&["0.5", "Normal", "2"])
    }

    #[test]
    fn closing_collapses_active_submenu() {
        let mut settings = menu();
        assert!(settings.toggle_open());
        settings.open_submenu(Submenu::Speed);
        assert_eq!(settings.active_submenu().get(), Some(Submenu::Speed));

        assert!(!settings.toggle_open());
        assert_eq!(settings.active_submenu().get(), None);
    }

    #[test]
    fn submenu_needs_open_dropdown() {
        let mut settings = menu();
        settings.open_submenu(Submenu::Captions);
        assert_eq!(settings.active_submenu().get(), None);
    }

    #[test]
    fn only_one_submenu_expands_at_a_time() {
        let mut settings = menu();
        settings.toggle_open();
        settings.open_submenu(Submenu::Speed);
        settings.open_submenu(Submenu::Quality);
        assert_eq!(settings.active_submenu().get(), Some(Submenu::Quality));
    }

    #[test]
    fn commit_persists_label_and_returns_to_root() {
        let mut settings = menu();
        settings.toggle_open();
        settings.open_submenu(Submenu::Speed);

        let label = settings.commit_option(Submenu::Speed, 2).unwrap();
        assert_eq!(label, "2");
        assert_eq!(settings.summary_label(Submenu::Speed).get(), "2");
        assert_eq!(settings.active_submenu().get(), None);
        assert!(settings.open().get(), "dropdown itself stays open");
    }

    #[test]
    fn commit_out_of_range_is_rejected() {
        let mut settings = menu();
        settings.toggle_open();
        let err = settings.commit_option(Submenu::Speed, 9).unwrap_err();
        assert_eq!(err, PlayerError::IndexOutOfRange { index: 9, len: 3 });
        assert_eq!(settings.summary_label(Submenu::Speed).get(), "Normal");
    }

    #[test]
    fn caption_rebuild_sorts_and_keeps_disabled_first() {
        let mut settings = menu();
        settings.set_caption_tracks(&["fr", "de", "en"]);

        let labels: Vec<String> = settings
            .menu(Submenu::Captions)
            .labels()
            .map(String::from)
            .collect();
        assert_eq!(labels, ["Disabled", "de", "en", "fr"]);
    }

    #[test]
    fn quality_variants_sit_behind_auto() {
        let mut settings = menu();
        settings.set_quality_variants(&["1080p", "720p"]);

        let labels: Vec<String> = settings
            .menu(Submenu::Quality)
            .labels()
            .map(String::from)
            .collect();
        assert_eq!(labels, ["Auto", "1080p", "720p"]);
    }
}
