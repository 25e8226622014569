//! User-tunable options persisted in `config.json`.
//!
//! The file is a flat JSON object of booleans:
//!
//! ```json
//! {
//!   "autosave": false,
//!   "notifications": false,
//!   "password-encryption": true,
//!   "hide-password": true
//! }
//! ```
//!
//! # Serde default values
//!
//! Every field is annotated with `#[serde(default = "some_fn")]`, so a file
//! written by an older version that lacks a newer option still loads; the
//! missing key takes its documented default instead of failing the lookup.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for option names and `option=value` assignments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// The option name is not one of [`ConfigOption::ALL`].
    #[error("unknown option '{0}' (expected one of: autosave, notifications, password-encryption, hide-password)")]
    UnknownOption(String),

    /// The value is not a recognised boolean spelling.
    #[error("invalid boolean '{value}' for option '{option}'")]
    InvalidBool { option: String, value: String },

    /// The assignment is missing the `=` separator.
    #[error("expected <option>=<bool>, got '{0}'")]
    MalformedAssignment(String),
}

/// One of the four boolean options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigOption {
    /// Save credentials after a successful connection without asking.
    Autosave,
    /// Route outcome messages to desktop notifications.
    Notifications,
    /// Encrypt passwords before writing them to `saved_networks.json`.
    PasswordEncryption,
    /// Mask the password while the user types it.
    HidePassword,
}

impl ConfigOption {
    /// All options, in the order they are listed by `config get --all`.
    pub const ALL: [ConfigOption; 4] = [
        ConfigOption::Autosave,
        ConfigOption::Notifications,
        ConfigOption::PasswordEncryption,
        ConfigOption::HidePassword,
    ];

    /// The key used in `config.json` and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Autosave => "autosave",
            Self::Notifications => "notifications",
            Self::PasswordEncryption => "password-encryption",
            Self::HidePassword => "hide-password",
        }
    }
}

impl FromStr for ConfigOption {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Self::ALL
            .into_iter()
            .find(|opt| opt.as_str().eq_ignore_ascii_case(key))
            .ok_or_else(|| SettingsError::UnknownOption(key.to_string()))
    }
}

impl fmt::Display for ConfigOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed `option=value` pair from `wifi config set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionAssignment {
    pub option: ConfigOption,
    pub value: bool,
}

impl FromStr for OptionAssignment {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, raw) = s
            .split_once('=')
            .ok_or_else(|| SettingsError::MalformedAssignment(s.to_string()))?;
        let option: ConfigOption = key.parse()?;
        let value = parse_bool(raw).ok_or_else(|| SettingsError::InvalidBool {
            option: option.as_str().to_string(),
            value: raw.trim().to_string(),
        })?;
        Ok(Self { option, value })
    }
}

/// Accepts the usual command-line spellings of a boolean.
fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "on" | "1" => Some(true),
        "false" | "no" | "n" | "off" | "0" => Some(false),
        _ => None,
    }
}

/// The complete set of options, as stored on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    #[serde(default = "default_false")]
    pub autosave: bool,
    #[serde(default = "default_false")]
    pub notifications: bool,
    /// Recommended for credential security.
    #[serde(default = "default_true")]
    pub password_encryption: bool,
    /// Recommended for credential security.
    #[serde(default = "default_true")]
    pub hide_password: bool,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_true() -> bool {
    true
}
fn default_false() -> bool {
    false
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            autosave: default_false(),
            notifications: default_false(),
            password_encryption: default_true(),
            hide_password: default_true(),
        }
    }
}

impl Settings {
    /// Returns the current value of `option`.
    pub fn get(&self, option: ConfigOption) -> bool {
        match option {
            ConfigOption::Autosave => self.autosave,
            ConfigOption::Notifications => self.notifications,
            ConfigOption::PasswordEncryption => self.password_encryption,
            ConfigOption::HidePassword => self.hide_password,
        }
    }

    /// Sets `option` to `value`.
    pub fn set(&mut self, option: ConfigOption, value: bool) {
        match option {
            ConfigOption::Autosave => self.autosave = value,
            ConfigOption::Notifications => self.notifications = value,
            ConfigOption::PasswordEncryption => self.password_encryption = value,
            ConfigOption::HidePassword => self.hide_password = value,
        }
    }

    /// Applies a batch of assignments in order; later ones win.
    pub fn apply(&mut self, assignments: &[OptionAssignment]) {
        for a in assignments {
            self.set(a.option, a.value);
        }
    }

    /// All `(option, value)` pairs in [`ConfigOption::ALL`] order.
    pub fn entries(&self) -> Vec<(ConfigOption, bool)> {
        ConfigOption::ALL
            .into_iter()
            .map(|opt| (opt, self.get(opt)))
            .collect()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
