//! Theme preference persistence.
//!
//! Exactly one scalar survives across sessions: the theme flag. It is
//! stored as a small JSON document (`{"theme": "dark"}`) read once at
//! startup and rewritten on every toggle. A missing or unreadable file is
//! not an error — the theme silently defaults to dark, matching the
//! closed-set/no-op error posture of the rest of the crate.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::event::{LogLevel, emit_log};
use crate::theme::Theme;

/// Storage seam for the persisted theme preference.
pub trait PrefStore {
    /// Read the stored theme, substituting the default when absent or
    /// unreadable.
    fn load_theme(&self) -> Theme;

    /// Persist the theme. Last writer wins.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn store_theme(&mut self, theme: Theme) -> Result<()>;
}

/// On-disk JSON document shape.
#[derive(Debug, Serialize, Deserialize)]
struct PrefDoc {
    theme: String,
}

/// File-backed preference store.
#[derive(Debug)]
pub struct FilePrefStore {
    path: PathBuf,
}

impl FilePrefStore {
    /// Create a store backed by the given file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Default preference path: `$XDG_CONFIG_HOME/codefolio/prefs.json`,
    /// falling back to `$HOME/.config/codefolio/prefs.json`.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))?;
        Some(base.join("codefolio").join("prefs.json"))
    }
}

impl PrefStore for FilePrefStore {
    fn load_theme(&self) -> Theme {
        let Ok(raw) = fs::read_to_string(&self.path) else {
            return Theme::default();
        };
        match serde_json::from_str::<PrefDoc>(&raw) {
            Ok(doc) => Theme::from_str(&doc.theme).unwrap_or_else(|| {
                emit_log(
                    LogLevel::Warn,
                    &format!("unknown theme preference {:?}, using default", doc.theme),
                );
                Theme::default()
            }),
            Err(e) => {
                emit_log(
                    LogLevel::Warn,
                    &format!("unreadable preference file, using default: {e}"),
                );
                Theme::default()
            }
        }
    }

    fn store_theme(&mut self, theme: Theme) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let doc = PrefDoc {
            theme: theme.as_str().to_string(),
        };
        fs::write(&self.path, serde_json::to_string_pretty(&doc)?)?;
        Ok(())
    }
}

/// In-memory preference store for tests and headless runs.
///
/// Clones share the same slot, so a test can keep a handle while the
/// controller owns another.
#[derive(Clone, Debug, Default)]
pub struct MemoryPrefStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryPrefStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw persisted value, if any.
    #[must_use]
    pub fn persisted(&self) -> Option<String> {
        self.slot.lock().expect("pref slot lock").clone()
    }
}

impl PrefStore for MemoryPrefStore {
    fn load_theme(&self) -> Theme {
        self.persisted()
            .and_then(|s| Theme::from_str(&s))
            .unwrap_or_default()
    }

    fn store_theme(&mut self, theme: Theme) -> Result<()> {
        *self.slot.lock().expect("pref slot lock") = Some(theme.as_str().to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryPrefStore::new();
        assert_eq!(store.load_theme(), Theme::Dark);

        store.store_theme(Theme::Light).unwrap();
        assert_eq!(store.load_theme(), Theme::Light);
        assert_eq!(store.persisted().as_deref(), Some("light"));
    }

    #[test]
    fn test_memory_store_clones_share_slot() {
        let mut store = MemoryPrefStore::new();
        let observer = store.clone();
        store.store_theme(Theme::Light).unwrap();
        assert_eq!(observer.persisted().as_deref(), Some("light"));
    }

    #[test]
    fn test_file_store_defaults_when_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilePrefStore::new(dir.path().join("prefs.json"));
        assert_eq!(store.load_theme(), Theme::Dark);
    }
}
