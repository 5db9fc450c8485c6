//! Light/dark theme preference
//!
//! Stored as `"light"` or `"dark"` under `THEME_KEY`. Anything else reads as
//! light.

use crate::core::StorageError;
use crate::storage::{KeyValueStore, THEME_KEY};
use std::fmt;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Toggle button icon: a moon offers dark mode, a sun offers light mode
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Light => "🌙",
            Self::Dark => "☀️",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read the saved theme, defaulting to light
///
/// # Errors
///
/// Returns an error if storage cannot be read.
pub fn load_theme<S: KeyValueStore>(store: &S) -> Result<Theme, StorageError> {
    let Some(saved) = store.get(THEME_KEY)? else {
        return Ok(Theme::default());
    };

    Ok(Theme::from_name(&saved).unwrap_or_else(|| {
        warn!(saved = %saved, "unknown theme preference, using light");
        Theme::default()
    }))
}

/// Save a theme preference
///
/// # Errors
///
/// Returns an error if storage cannot be written.
pub fn save_theme<S: KeyValueStore>(store: &mut S, theme: Theme) -> Result<(), StorageError> {
    store.set(THEME_KEY, theme.as_str())?;
    info!(%theme, "theme saved");
    Ok(())
}

/// Flip the current theme and persist it
///
/// # Errors
///
/// Returns an error if storage cannot be written; `current` is not changed.
pub fn toggle_theme<S: KeyValueStore>(
    store: &mut S,
    current: &mut Theme,
) -> Result<Theme, StorageError> {
    let next = current.toggled();
    save_theme(store, next)?;
    *current = next;
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn defaults_to_light() {
        let store = MemoryStore::new();
        assert_eq!(load_theme(&store).unwrap(), Theme::Light);
    }

    #[test]
    fn toggle_persists() {
        let mut store = MemoryStore::new();
        let mut theme = load_theme(&store).unwrap();

        assert_eq!(toggle_theme(&mut store, &mut theme).unwrap(), Theme::Dark);
        assert_eq!(theme, Theme::Dark);
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
        assert_eq!(load_theme(&store).unwrap(), Theme::Dark);

        toggle_theme(&mut store, &mut theme).unwrap();
        assert_eq!(load_theme(&store).unwrap(), Theme::Light);
    }

    #[test]
    fn unknown_value_reads_as_light() {
        let mut store = MemoryStore::new();
        store.set(THEME_KEY, "solarized").unwrap();
        assert_eq!(load_theme(&store).unwrap(), Theme::Light);
    }

    #[test]
    fn icons() {
        assert_eq!(Theme::Light.icon(), "🌙");
        assert_eq!(Theme::Dark.icon(), "☀️");
    }
}
