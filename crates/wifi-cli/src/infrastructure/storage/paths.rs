//! Location of the configuration directory and the files inside it.
//!
//! Lookup order:
//!
//! 1. `$WIFI_CONFIG_DIR` (used as-is)
//! 2. `$XDG_CONFIG_HOME/wifi`
//! 3. `$HOME/.config/wifi`
//!
//! Empty variables are treated as unset.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::application::ports::StoreError;

/// Environment variable overriding the configuration directory.
pub const CONFIG_DIR_ENV: &str = "WIFI_CONFIG_DIR";

const APP_DIR: &str = "wifi";
const SETTINGS_FILE: &str = "config.json";
const CREDENTIALS_FILE: &str = "saved_networks.json";
const KEY_FILE: &str = "secret.key";

/// Paths of the three files the tool persists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePaths {
    dir: PathBuf,
}

impl StoragePaths {
    /// Resolves the directory from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NoConfigDir`] when none of the variables is set.
    pub fn resolve() -> Result<Self, StoreError> {
        config_dir_from(
            std::env::var_os(CONFIG_DIR_ENV),
            std::env::var_os("XDG_CONFIG_HOME"),
            std::env::var_os("HOME"),
        )
        .map(Self::in_dir)
        .ok_or(StoreError::NoConfigDir)
    }

    /// Uses `dir` directly (tests, `--config-dir`).
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn settings_file(&self) -> PathBuf {
        self.dir.join(SETTINGS_FILE)
    }

    pub fn credentials_file(&self) -> PathBuf {
        self.dir.join(CREDENTIALS_FILE)
    }

    pub fn key_file(&self) -> PathBuf {
        self.dir.join(KEY_FILE)
    }
}

fn config_dir_from(
    explicit: Option<OsString>,
    xdg_config_home: Option<OsString>,
    home: Option<OsString>,
) -> Option<PathBuf> {
    let non_empty = |v: Option<OsString>| v.filter(|v| !v.is_empty()).map(PathBuf::from);
    non_empty(explicit).or_else(|| {
        non_empty(xdg_config_home)
            .or_else(|| non_empty(home).map(|h| h.join(".config")))
            .map(|base| base.join(APP_DIR))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn os(s: &str) -> Option<OsString> {
        Some(OsString::from(s))
    }

    #[test]
    fn test_explicit_directory_wins() {
        let dir = config_dir_from(os("/tmp/wifi-test"), os("/xdg"), os("/home/me"));
        assert_eq!(dir, Some(PathBuf::from("/tmp/wifi-test")));
    }

    #[test]
    fn test_xdg_config_home_gets_app_subdirectory() {
        let dir = config_dir_from(None, os("/xdg"), os("/home/me"));
        assert_eq!(dir, Some(PathBuf::from("/xdg/wifi")));
    }

    #[test]
    fn test_home_fallback_uses_dot_config() {
        let dir = config_dir_from(None, os(""), os("/home/me"));
        assert_eq!(dir, Some(PathBuf::from("/home/me/.config/wifi")));
    }

    #[test]
    fn test_no_variables_is_none() {
        assert_eq!(config_dir_from(None, None, None), None);
    }

    #[test]
    fn test_file_names() {
        let paths = StoragePaths::in_dir("/cfg");
        assert_eq!(paths.settings_file(), PathBuf::from("/cfg/config.json"));
        assert_eq!(paths.credentials_file(), PathBuf::from("/cfg/saved_networks.json"));
        assert_eq!(paths.key_file(), PathBuf::from("/cfg/secret.key"));
    }
}
