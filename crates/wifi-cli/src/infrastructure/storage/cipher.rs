//! Password encryption for `saved_networks.json`.
//!
//! # Format (for beginners)
//!
//! An encrypted password is stored as text:
//!
//! ```text
//! enc:v1:<base64( nonce (12 bytes) || ciphertext + tag )>
//! ```
//!
//! The cipher is ChaCha20-Poly1305, an *authenticated* cipher: a wrong key or
//! a modified value fails to decrypt instead of yielding garbage.  The SSID is
//! passed as associated data, so a ciphertext copied onto another network's
//! entry does not decrypt either.
//!
//! Values without the `enc:v1:` prefix are plaintext.  That lets plaintext and
//! encrypted entries coexist after `password-encryption` is toggled.
//!
//! The 32-byte key lives in `secret.key` next to the JSON files and is
//! created, with owner-only permissions, the first time a password is
//! encrypted.  Deleting it makes existing encrypted entries unrecoverable.

use std::io::Write;
use std::path::{Path, PathBuf};

use base64::{engine::general_purpose::STANDARD, Engine as _};
use chacha20poly1305::aead::rand_core::RngCore;
use chacha20poly1305::aead::{Aead, AeadCore, KeyInit, OsRng, Payload};
use chacha20poly1305::{ChaCha20Poly1305, Key, Nonce};
use tracing::info;
use zeroize::Zeroizing;

use crate::application::ports::StoreError;

/// Marks a stored value as encrypted.
pub const ENCRYPTED_PREFIX: &str = "enc:v1:";
/// Key length in bytes.
pub const KEY_LEN: usize = 32;
const NONCE_LEN: usize = 12;

/// Returns `true` if `stored` carries the encrypted-value prefix.
pub fn is_encrypted(stored: &str) -> bool {
    stored.starts_with(ENCRYPTED_PREFIX)
}

/// Encrypts and decrypts stored passwords with one key.
pub struct SecretCipher {
    aead: ChaCha20Poly1305,
}

impl SecretCipher {
    pub fn new(key: &[u8; KEY_LEN]) -> Self {
        Self {
            aead: ChaCha20Poly1305::new(Key::from_slice(key)),
        }
    }

    /// Encrypts `password` for `ssid` with a fresh random nonce.
    pub fn encrypt(&self, ssid: &str, password: &str) -> Result<String, StoreError> {
        let nonce = ChaCha20Poly1305::generate_nonce(&mut OsRng);
        let ciphertext = self
            .aead
            .encrypt(
                &nonce,
                Payload {
                    msg: password.as_bytes(),
                    aad: ssid.as_bytes(),
                },
            )
            .map_err(|_| StoreError::Encrypt {
                ssid: ssid.to_string(),
            })?;
        let mut payload = Vec::with_capacity(NONCE_LEN + ciphertext.len());
        payload.extend_from_slice(&nonce);
        payload.extend_from_slice(&ciphertext);
        Ok(format!("{ENCRYPTED_PREFIX}{}", STANDARD.encode(payload)))
    }

    /// Decrypts a value produced by [`encrypt`](Self::encrypt) for the same
    /// `ssid`.
    ///
    /// # Errors
    ///
    /// [`StoreError::Decrypt`] for a missing prefix, bad base64, a truncated
    /// payload, a wrong key, or tampered data.
    pub fn decrypt(&self, ssid: &str, stored: &str) -> Result<String, StoreError> {
        let failed = || StoreError::Decrypt {
            ssid: ssid.to_string(),
        };
        let encoded = stored.strip_prefix(ENCRYPTED_PREFIX).ok_or_else(failed)?;
        let payload = STANDARD.decode(encoded).map_err(|_| failed())?;
        if payload.len() < NONCE_LEN {
            return Err(failed());
        }
        let (nonce, ciphertext) = payload.split_at(NONCE_LEN);
        let plaintext = Zeroizing::new(
            self.aead
                .decrypt(
                    Nonce::from_slice(nonce),
                    Payload {
                        msg: ciphertext,
                        aad: ssid.as_bytes(),
                    },
                )
                .map_err(|_| failed())?,
        );
        std::str::from_utf8(&plaintext)
            .map(str::to_string)
            .map_err(|_| failed())
    }
}

/// The on-disk key file.
#[derive(Debug, Clone)]
pub struct KeyFile {
    path: PathBuf,
}

impl KeyFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the key, generating and persisting a new one if the file does
    /// not exist.
    ///
    /// # Errors
    ///
    /// [`StoreError::InvalidKey`] if the file is not exactly
    /// [`KEY_LEN`] bytes; [`StoreError::Io`] for file-system failures.
    pub fn load_or_create(&self) -> Result<SecretCipher, StoreError> {
        match std::fs::read(&self.path) {
            Ok(bytes) => {
                let bytes = Zeroizing::new(bytes);
                let key: &[u8; KEY_LEN] =
                    bytes
                        .as_slice()
                        .try_into()
                        .map_err(|_| StoreError::InvalidKey {
                            path: self.path.clone(),
                            reason: format!("expected {KEY_LEN} bytes, found {}", bytes.len()),
                        })?;
                Ok(SecretCipher::new(key))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let mut key = Zeroizing::new([0u8; KEY_LEN]);
                OsRng.fill_bytes(&mut key[..]);
                self.write_new(&key[..])?;
                info!(path = %self.path.display(), "generated new encryption key");
                Ok(SecretCipher::new(&key))
            }
            Err(source) => Err(self.io_error(source)),
        }
    }

    /// Creates the file (failing if it already exists) with mode `0600`.
    fn write_new(&self, key: &[u8]) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir).map_err(|source| StoreError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
        }
        let mut options = std::fs::OpenOptions::new();
        options.write(true).create_new(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }
        let mut file = options.open(&self.path).map_err(|e| self.io_error(e))?;
        file.write_all(key).map_err(|e| self.io_error(e))
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::super::test_support::temp_dir;
    use super::*;

    fn cipher() -> SecretCipher {
        SecretCipher::new(&[7u8; KEY_LEN])
    }

    #[test]
    fn test_encrypt_then_decrypt_returns_original() {
        // Arrange
        let cipher = cipher();

        // Act
        let stored = cipher.encrypt("Home", "hunter22").expect("encrypt");
        let back = cipher.decrypt("Home", &stored).expect("decrypt");

        // Assert
        assert!(is_encrypted(&stored));
        assert!(!stored.contains("hunter22"));
        assert_eq!(back, "hunter22");
    }

    #[test]
    fn test_each_encryption_uses_a_fresh_nonce() {
        let cipher = cipher();
        let a = cipher.encrypt("Home", "same").expect("encrypt");
        let b = cipher.encrypt("Home", "same").expect("encrypt");
        assert_ne!(a, b);
    }

    #[test]
    fn test_wrong_key_fails_to_decrypt() {
        let stored = cipher().encrypt("Home", "hunter22").expect("encrypt");
        let other = SecretCipher::new(&[9u8; KEY_LEN]);
        assert!(matches!(
            other.decrypt("Home", &stored),
            Err(StoreError::Decrypt { .. })
        ));
    }

    #[test]
    fn test_ciphertext_is_bound_to_its_ssid() {
        let cipher = cipher();
        let stored = cipher.encrypt("Home", "hunter22").expect("encrypt");
        assert!(cipher.decrypt("Cafe", &stored).is_err());
    }

    #[test]
    fn test_garbage_values_fail_cleanly() {
        let cipher = cipher();
        for stored in ["hunter22", "enc:v1:!!!", "enc:v1:AAAA"] {
            assert!(cipher.decrypt("Home", stored).is_err(), "value {stored:?}");
        }
    }

    #[test]
    fn test_key_file_is_created_once_and_reused() {
        // Arrange
        let dir = temp_dir();
        let key_file = KeyFile::new(dir.join("secret.key"));

        // Act
        let first = key_file.load_or_create().expect("create");
        let stored = first.encrypt("Home", "hunter22").expect("encrypt");
        let second = key_file.load_or_create().expect("reload");

        // Assert
        assert_eq!(std::fs::read(key_file.path()).expect("read").len(), KEY_LEN);
        assert_eq!(second.decrypt("Home", &stored).expect("decrypt"), "hunter22");
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[cfg(unix)]
    #[test]
    fn test_key_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = temp_dir();
        let key_file = KeyFile::new(dir.join("secret.key"));
        key_file.load_or_create().expect("create");
        let mode = std::fs::metadata(key_file.path()).expect("stat").permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_short_key_file_is_rejected() {
        let dir = temp_dir();
        std::fs::create_dir_all(&dir).expect("mkdir");
        let path = dir.join("secret.key");
        std::fs::write(&path, b"too short").expect("write");
        assert!(matches!(
            KeyFile::new(&path).load_or_create(),
            Err(StoreError::InvalidKey { .. })
        ));
        let _ = std::fs::remove_dir_all(&dir);
    }
}
