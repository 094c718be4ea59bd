//! Persisted player preferences.

use rustc_hash::FxHashMap;

use crate::core::PLAYER_NAME_KEY;

/// Read access to the host's persisted key/value preferences.
pub trait Preferences {
    /// Get a stored string, `None` if the key was never written.
    fn get_string(&self, key: &str) -> Option<String>;
}

/// In-memory preference store.
#[derive(Clone, Debug, Default)]
pub struct MemoryPreferences {
    values: FxHashMap<String, String>,
}

impl MemoryPreferences {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store with a player name already set.
    #[must_use]
    pub fn with_player_name(name: impl Into<String>) -> Self {
        let mut prefs = Self::new();
        prefs.set_string(PLAYER_NAME_KEY, name);
        prefs
    }

    pub fn set_string(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.values.remove(key)
    }
}

impl Preferences for MemoryPreferences {
    fn get_string(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

/// Read the player's display name, falling back to `default` when the
/// stored name is missing, empty or whitespace-only.
#[must_use]
pub fn resolve_player_name(prefs: &dyn Preferences, default: &str) -> String {
    match prefs.get_string(PLAYER_NAME_KEY) {
        Some(name) if !name.trim().is_empty() => name,
        _ => default.to_string(),
    }
}
