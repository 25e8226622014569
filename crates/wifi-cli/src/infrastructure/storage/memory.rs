//! In-memory stores for tests.

use std::sync::Mutex;

use wifi_core::Settings;

use crate::application::ports::{CredentialStore, SavedNetworks, SettingsStore, StoreError};

/// A [`CredentialStore`] holding plaintext passwords in a map.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    saved: Mutex<SavedNetworks>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates the store with `(ssid, password)` pairs.
    pub fn with_entries<I, S, P>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, P)>,
        S: Into<String>,
        P: Into<String>,
    {
        Self {
            saved: Mutex::new(
                entries
                    .into_iter()
                    .map(|(s, p)| (s.into(), p.into()))
                    .collect(),
            ),
        }
    }

    /// A copy of the current contents.
    pub fn snapshot(&self) -> SavedNetworks {
        self.saved.lock().expect("lock poisoned").clone()
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn load(&self) -> Result<SavedNetworks, StoreError> {
        Ok(self.snapshot())
    }

    fn save(&self, ssid: &str, password: &str) -> Result<(), StoreError> {
        self.saved
            .lock()
            .expect("lock poisoned")
            .insert(ssid.to_string(), password.to_string());
        Ok(())
    }

    fn remove(&self, ssid: &str) -> Result<(), StoreError> {
        match self.saved.lock().expect("lock poisoned").remove(ssid) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound {
                ssid: ssid.to_string(),
            }),
        }
    }

    fn remove_all(&self) -> Result<(), StoreError> {
        self.saved.lock().expect("lock poisoned").clear();
        Ok(())
    }

    fn password_for(&self, ssid: &str) -> Result<Option<String>, StoreError> {
        Ok(self.saved.lock().expect("lock poisoned").get(ssid).cloned())
    }
}

/// A [`SettingsStore`] holding one [`Settings`] value.
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    settings: Mutex<Settings>,
}

impl MemorySettingsStore {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: Mutex::new(settings),
        }
    }

    pub fn current(&self) -> Settings {
        *self.settings.lock().expect("lock poisoned")
    }
}

impl SettingsStore for MemorySettingsStore {
    fn load(&self) -> Result<Settings, StoreError> {
        Ok(self.current())
    }

    fn save(&self, settings: &Settings) -> Result<(), StoreError> {
        *self.settings.lock().expect("lock poisoned") = *settings;
        Ok(())
    }

    fn reset(&self) -> Result<Settings, StoreError> {
        let defaults = Settings::default();
        *self.settings.lock().expect("lock poisoned") = defaults;
        Ok(defaults)
    }
}
