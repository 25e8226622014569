//! `config.json` persistence.

use std::path::{Path, PathBuf};

use tracing::{debug, info};
use wifi_core::Settings;

use super::{read_json, write_json};
use crate::application::ports::{SettingsStore, StoreError};

/// [`SettingsStore`] backed by a JSON object of booleans.
#[derive(Debug, Clone)]
pub struct JsonSettingsStore {
    path: PathBuf,
}

impl JsonSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl JsonSettingsStore {
    /// Overlays `settings` onto the document currently on disk.  Keys this
    /// version does not know about are kept as they are.
    fn merged_with_file(
        &self,
        existing: Option<&serde_json::Value>,
        settings: &Settings,
    ) -> Result<serde_json::Value, StoreError> {
        let known = serde_json::to_value(settings).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;
        Ok(match (existing, known) {
            (Some(serde_json::Value::Object(doc)), serde_json::Value::Object(known)) => {
                let mut doc = doc.clone();
                doc.extend(known);
                serde_json::Value::Object(doc)
            }
            (_, known) => known,
        })
    }
}

impl SettingsStore for JsonSettingsStore {
    /// Creates the file with defaults on first run.  Keys missing from an
    /// existing file take their default and are written back; unknown keys
    /// are left alone.
    fn load(&self) -> Result<Settings, StoreError> {
        let Some(raw) = read_json::<serde_json::Value>(&self.path)? else {
            let settings = Settings::default();
            write_json(&self.path, &settings)?;
            info!(path = %self.path.display(), "created default configuration");
            return Ok(settings);
        };
        let settings: Settings =
            serde_json::from_value(raw.clone()).map_err(|source| StoreError::Json {
                path: self.path.clone(),
                source,
            })?;
        let merged = self.merged_with_file(Some(&raw), &settings)?;
        if merged != raw {
            debug!(path = %self.path.display(), "filling missing configuration keys");
            write_json(&self.path, &merged)?;
        }
        Ok(settings)
    }

    fn save(&self, settings: &Settings) -> Result<(), StoreError> {
        let existing = read_json::<serde_json::Value>(&self.path)?;
        let merged = self.merged_with_file(existing.as_ref(), settings)?;
        write_json(&self.path, &merged)
    }

    /// Replaces the whole file, unknown keys included.
    fn reset(&self) -> Result<Settings, StoreError> {
        let settings = Settings::default();
        write_json(&self.path, &settings)?;
        Ok(settings)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
