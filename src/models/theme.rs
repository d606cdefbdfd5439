use std::fmt;
use std::str::FromStr;

use anyhow::Result;

use crate::storage::KeyValueStore;

/// Storage key for the persisted theme preference
pub const THEME_KEY: &str = "theme";

/// Color scheme preference, persisted as `"light"` or `"dark"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme '{0}' (expected light or dark)")]
pub struct ThemeParseError(String);

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Load the stored preference; missing or unrecognized values fall back
    /// to the default scheme.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        store
            .get(THEME_KEY)
            .ok()
            .flatten()
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or_default()
    }

    pub fn save(self, store: &mut dyn KeyValueStore) -> Result<()> {
        store.set(THEME_KEY, self.as_str())
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(ThemeParseError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_toggle() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let mut store = MemoryStore::new();
        Theme::Light.save(&mut store).unwrap();
        assert_eq!(Theme::load(&store), Theme::Light);

        Theme::Dark.save(&mut store).unwrap();
        assert_eq!(Theme::load(&store), Theme::Dark);
    }

    #[test]
    fn test_load_missing_key_defaults() {
        let store = MemoryStore::new();
        assert_eq!(Theme::load(&store), Theme::default());
    }

    #[test]
    fn test_load_garbage_defaults() {
        let mut store = MemoryStore::new();
        store.set(THEME_KEY, "solarized").unwrap();
        assert_eq!(Theme::load(&store), Theme::default());
    }
}
