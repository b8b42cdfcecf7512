use super::error::PlayerError;

/// One selectable row in a submenu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOption {
    /// Display label
    pub label: String,

    /// Whether this option is the current selection
    pub active: bool,
}

impl MenuOption {
    fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            active: false,
        }
    }
}

/// Exclusive-selection controller: one active option among many siblings.
///
/// Shared by the speed, captions and quality submenus. At most one option is
/// active after any operation completes; access is single-threaded
/// cooperative, so no two selections interleave.
#[derive(Debug, Clone, Default)]
pub struct ExclusiveMenu {
    options: Vec<MenuOption>,
}

impl ExclusiveMenu {
    /// Build a menu from option labels, none active.
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: labels.into_iter().map(MenuOption::new).collect(),
        }
    }

    /// Activate `index` and deactivate every sibling.
    ///
    /// Returns the newly active option's label.
    ///
    /// # Errors
    /// Returns `PlayerError::IndexOutOfRange` on an invalid index; the menu
    /// is left unchanged.
    pub fn select(&mut self, index: usize) -> Result<&str, PlayerError> {
        if index >= self.options.len() {
            return Err(PlayerError::IndexOutOfRange {
                index,
                len: self.options.len(),
            });
        }

        for (i, option) in self.options.iter_mut().enumerate() {
            option.active = i == index;
        }

        Ok(&self.options[index].label)
    }

    /// Deactivate every option. Idempotent.
    pub fn reset(&mut self) {
        for option in &mut self.options {
            option.active = false;
        }
    }

    /// Replace the option set, clearing any selection.
    ///
    /// Used for late population of the captions submenu as tracks arrive.
    pub fn replace_options<I, S>(&mut self, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = labels.into_iter().map(MenuOption::new).collect();
    }

    /// Index of the active option, if any.
    pub fn active_index(&self) -> Option<usize> {
        self.options.iter().position(|option| option.active)
    }

    /// Option labels in menu order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(|option| option.label.as_str())
    }

    /// Number of options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Whether the menu has no options.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}
