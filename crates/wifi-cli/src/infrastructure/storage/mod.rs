//! Storage infrastructure: the JSON files under the configuration directory.
//!
//! | File                  | Contents                          | Adapter                  |
//! |-----------------------|-----------------------------------|--------------------------|
//! | `config.json`         | option name → boolean             | [`JsonSettingsStore`](settings::JsonSettingsStore) |
//! | `saved_networks.json` | SSID → password (maybe encrypted) | [`JsonCredentialStore`](credentials::JsonCredentialStore) |
//! | `secret.key`          | 32 raw key bytes, mode `0600`     | [`KeyFile`](cipher::KeyFile) |
//!
//! Every write replaces the whole document.  There is no file locking; when
//! two processes write at once, the last one wins.

pub mod cipher;
pub mod credentials;
pub mod memory;
pub mod paths;
pub mod settings;

use std::io::Write;
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::application::ports::StoreError;

/// Reads and parses a JSON document, returning `Ok(None)` if the file does
/// not exist yet.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, StoreError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    serde_json::from_str(&content)
        .map(Some)
        .map_err(|source| StoreError::Json {
            path: path.to_path_buf(),
            source,
        })
}

/// Writes `value` as pretty-printed JSON, creating parent directories.
pub(crate) fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), StoreError> {
    write_document(path, value, false)
}

/// Like [`write_json`], but on Unix the file is left readable by its owner
/// only (`0600`), including a file created earlier with wider permissions.
pub(crate) fn write_private_json<T: Serialize + ?Sized>(
    path: &Path,
    value: &T,
) -> Result<(), StoreError> {
    write_document(path, value, true)
}

fn write_document<T: Serialize + ?Sized>(
    path: &Path,
    value: &T,
    owner_only: bool,
) -> Result<(), StoreError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|source| StoreError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    let mut content = serde_json::to_string_pretty(value).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    content.push('\n');

    let io_err = |source: std::io::Error| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut options = std::fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        if owner_only {
            options.mode(0o600);
        }
    }
    let mut file = options.open(path).map_err(io_err)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if owner_only {
            file.set_permissions(std::fs::Permissions::from_mode(0o600))
                .map_err(io_err)?;
        }
    }
    #[cfg(not(unix))]
    let _ = owner_only;
    file.write_all(content.as_bytes()).map_err(io_err)
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::path::PathBuf;

    use uuid::Uuid;

    /// A fresh, not-yet-created directory under the system temp dir.
    pub fn temp_dir() -> PathBuf {
        std::env::temp_dir().join(format!("wifi_test_{}", Uuid::new_v4()))
    }
}
