//! Persistent key-value preference store.
//!
//! The browser profile's per-origin storage is modeled as a flat JSON object
//! (string keys, string values) in a single file on disk. Reads never fail:
//! a missing, unreadable or corrupt file is treated as "nothing stored".
//! Writes return errors so callers can decide to log and carry on; nothing
//! in this module is fatal to the application.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Storage key for the persisted language preference.
pub const PREFERRED_LANGUAGE_KEY: &str = "preferredLanguage";

/// Storage key for the contact-form rate-limit record.
pub const RATE_LIMIT_KEY: &str = "contactFormRateLimit";

/// A file-backed key-value store for user preferences.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    /// Open a store backed by the given file. The file is not created until
    /// the first write.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the value stored under `key`.
    ///
    /// Returns `None` when the key is absent or when the backing file cannot
    /// be read or parsed. Corrupt storage is logged and treated as empty.
    pub fn get(&self, key: &str) -> Option<String> {
        self.read_all().remove(key)
    }

    /// Store `value` under `key`, overwriting any previous value.
    ///
    /// The whole map is rewritten on each set, matching the small fixed key
    /// set this store holds.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.read_all();
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries)
    }

    /// Remove the value stored under `key`, if any.
    pub fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.read_all();
        if entries.remove(key).is_some() {
            self.write_all(&entries)?;
        }
        Ok(())
    }

    fn read_all(&self) -> BTreeMap<String, String> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            // Missing file is the normal first-run state
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return BTreeMap::new(),
            Err(e) => {
                warn!("Failed to read preference store {:?}: {}", self.path, e);
                return BTreeMap::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(
                    "Preference store {:?} is corrupt ({}), treating as empty",
                    self.path, e
                );
                BTreeMap::new()
            }
        }
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create storage directory {:?}", parent))?;
            }
        }

        let raw = serde_json::to_string_pretty(entries).context("Failed to encode preferences")?;
        std::fs::write(&self.path, raw)
            .with_context(|| format!("Failed to write preference store {:?}", self.path))?;
        Ok(())
    }
}
