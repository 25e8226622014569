//! `saved_networks.json` persistence.

use std::cell::OnceCell;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::cipher::{is_encrypted, KeyFile, SecretCipher};
use super::{read_json, write_private_json};
use crate::application::ports::{CredentialStore, SavedNetworks, StoreError};

/// [`CredentialStore`] backed by a JSON object of SSID → secret.
///
/// The file is written owner-only (`0600` on Unix) since it may hold
/// plaintext passwords.
///
/// Every mutation reloads the file first, so a write never discards entries
/// another process added since this one started.  The key file is only
/// touched when a value actually has to be encrypted or decrypted.
pub struct JsonCredentialStore {
    path: PathBuf,
    key_file: KeyFile,
    encrypt: bool,
    cipher: OnceCell<SecretCipher>,
}

impl JsonCredentialStore {
    /// `encrypt` mirrors the `password-encryption` option and only affects
    /// new saves; existing values are read whatever their form.
    pub fn new(path: impl Into<PathBuf>, key_file: KeyFile, encrypt: bool) -> Self {
        Self {
            path: path.into(),
            key_file,
            encrypt,
            cipher: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn cipher(&self) -> Result<&SecretCipher, StoreError> {
        if let Some(cipher) = self.cipher.get() {
            return Ok(cipher);
        }
        let cipher = self.key_file.load_or_create()?;
        Ok(self.cipher.get_or_init(|| cipher))
    }
}

impl CredentialStore for JsonCredentialStore {
    fn load(&self) -> Result<SavedNetworks, StoreError> {
        match read_json(&self.path)? {
            Some(saved) => Ok(saved),
            None => {
                let empty = SavedNetworks::new();
                write_private_json(&self.path, &empty)?;
                info!(path = %self.path.display(), "created empty saved-networks file");
                Ok(empty)
            }
        }
    }

    fn save(&self, ssid: &str, password: &str) -> Result<(), StoreError> {
        let secret = if self.encrypt {
            self.cipher()?.encrypt(ssid, password)?
        } else {
            password.to_string()
        };
        let mut saved = self.load()?;
        saved.insert(ssid.to_string(), secret);
        write_private_json(&self.path, &saved)?;
        debug!(ssid, encrypted = self.encrypt, "saved network credentials");
        Ok(())
    }

    fn remove(&self, ssid: &str) -> Result<(), StoreError> {
        let mut saved = self.load()?;
        if saved.remove(ssid).is_none() {
            return Err(StoreError::NotFound {
                ssid: ssid.to_string(),
            });
        }
        write_private_json(&self.path, &saved)?;
        debug!(ssid, "removed network credentials");
        Ok(())
    }

    fn remove_all(&self) -> Result<(), StoreError> {
        write_private_json(&self.path, &SavedNetworks::new())
    }

    fn password_for(&self, ssid: &str) -> Result<Option<String>, StoreError> {
        let saved = self.load()?;
        match saved.get(ssid) {
            None => Ok(None),
            Some(stored) if is_encrypted(stored) => self.cipher()?.decrypt(ssid, stored).map(Some),
            Some(plain) => Ok(Some(plain.clone())),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
