//! Light/dark theme preference
//!
//! Persisted under a single storage key; dark unless the visitor chose
//! otherwise.

use crate::persistence::PreferenceStore;

/// Storage key for the theme preference
pub const STORAGE_KEY: &str = "theme";
/// Document attribute carrying the active theme
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Colour theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// Theme as read back from the document attribute: light only if it
    /// says so, dark otherwise
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Which toggle icons to hide in this theme
    pub fn icons(&self) -> IconState {
        let dark = *self == Theme::Dark;
        // Sun offers the switch to light, moon the switch to dark
        IconState {
            sun_hidden: !dark,
            moon_hidden: dark,
        }
    }

    /// Stored preference, falling back to dark
    pub fn load<S: PreferenceStore + ?Sized>(store: &S) -> Self {
        match store.get(STORAGE_KEY).as_deref().and_then(Theme::from_str) {
            Some(theme) => {
                log::info!("Loaded theme preference: {}", theme.as_str());
                theme
            }
            None => Theme::default(),
        }
    }

    pub fn save<S: PreferenceStore + ?Sized>(&self, store: &mut S) {
        store.set(STORAGE_KEY, self.as_str());
        log::debug!("Theme saved: {}", self.as_str());
    }
}

/// Visibility of the theme toggle icons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconState {
    pub sun_hidden: bool,
    pub moon_hidden: bool,
}

/// Theme toggle bound to a preference store
#[derive(Debug)]
pub struct ThemeToggle<S: PreferenceStore> {
    store: S,
    current: Theme,
}

impl<S: PreferenceStore> ThemeToggle<S> {
    /// Read the stored preference and apply it (which also writes it back)
    pub fn init(store: S) -> Self {
        let current = Theme::load(&store);
        let mut toggle = Self { store, current };
        toggle.apply(current);
        toggle
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Make `theme` active and persist it
    pub fn apply(&mut self, theme: Theme) -> IconState {
        self.current = theme;
        theme.save(&mut self.store);
        theme.icons()
    }

    /// Switch from `shown` (as read from the document) to the other theme
    pub fn toggle_from(&mut self, shown: Theme) -> Theme {
        let next = shown.toggled();
        self.apply(next);
        next
    }

    /// Switch to the other theme
    #[cfg(test)]
    pub fn toggle(&mut self) -> Theme {
        self.toggle_from(self.current)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    #[test]
    fn test_default_is_dark_and_written() {
        let toggle = ThemeToggle::init(MemoryStore::new());
        assert_eq!(toggle.current(), Theme::Dark);
        assert_eq!(toggle.store().get(STORAGE_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn test_garbage_preference_falls_back() {
        let mut store = MemoryStore::new();
        store.set(STORAGE_KEY, "sepia");
        assert_eq!(Theme::load(&store), Theme::Dark);
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut store = MemoryStore::new();
        store.set(STORAGE_KEY, "light");
        let mut toggle = ThemeToggle::init(store);
        let before = (toggle.store().get(STORAGE_KEY), toggle.current().icons());

        assert_eq!(toggle.toggle(), Theme::Dark);
        assert_eq!(toggle.store().get(STORAGE_KEY).as_deref(), Some("dark"));
        assert_eq!(toggle.toggle(), Theme::Light);

        let after = (toggle.store().get(STORAGE_KEY), toggle.current().icons());
        assert_eq!(before, after);
    }

    #[test]
    fn test_icons() {
        assert_eq!(
            Theme::Dark.icons(),
            IconState {
                sun_hidden: false,
                moon_hidden: true
            }
        );
        assert_eq!(
            Theme::Light.icons(),
            IconState {
                sun_hidden: true,
                moon_hidden: false
            }
        );
    }

    #[test]
    fn test_attribute_reading() {
        assert_eq!(Theme::from_attribute(Some("light")), Theme::Light);
        assert_eq!(Theme::from_attribute(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_attribute(None), Theme::Dark);
    }

    #[test]
    fn test_toggle_borrowed_store() {
        let mut store = MemoryStore::new();
        {
            let mut toggle = ThemeToggle::init(&mut store);
            toggle.toggle_from(Theme::Dark);
        }
        assert_eq!(store.get(STORAGE_KEY).as_deref(), Some("light"));
    }
}
