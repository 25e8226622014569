//! Port traits: what the use cases need from the outside world.
//!
//! Each trait is implemented once for production in the infrastructure layer
//! and once (or more) as a test double:
//!
//! | Trait               | Production                     | Test doubles                               |
//! |---------------------|--------------------------------|--------------------------------------------|
//! | [`NetworkController`] | `NmcliController<ProcessRunner>` | `MockNetworkController`, `NmcliController<ScriptedRunner>` |
//! | [`CredentialStore`] | `JsonCredentialStore`          | `MemoryCredentialStore`                    |
//! | [`SettingsStore`]   | `JsonSettingsStore`            | `MemorySettingsStore`                      |
//! | [`Prompter`]        | `TerminalPrompter`             | `ScriptedPrompter`                         |
//! | [`Reporter`]        | `ConsoleReporter`, `DesktopReporter` | `RecordingReporter`                  |
//!
//! The `Mock*` types are generated by `mockall` and only exist in this
//! crate's unit tests; the other doubles are always compiled so the
//! integration tests under `tests/` can use them too.

use std::collections::BTreeMap;
use std::path::PathBuf;

use thiserror::Error;
use wifi_core::{CurrentConnection, DeviceStatus, ParseError, Settings};

/// SSID → stored secret (plaintext, or `enc:v1:`-prefixed ciphertext).
///
/// A `BTreeMap` keeps `saved_networks.json` and `list --saved` sorted.
pub type SavedNetworks = BTreeMap<String, String>;

// ── Errors ────────────────────────────────────────────────────────────────────

/// Error type for `nmcli` invocations.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// The process could not be started (typically: `nmcli` not installed).
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The process ran but exited with a non-zero status.
    #[error("`{command}` exited with status {code:?}: {stderr}")]
    CommandFailed {
        /// Redacted shell rendering of the command.
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    /// The output did not have the expected shape.
    #[error("unexpected nmcli output: {0}")]
    Parse(#[from] ParseError),
}

/// Error type for the settings and credential files.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Neither `WIFI_CONFIG_DIR`, `XDG_CONFIG_HOME` nor `HOME` is set.
    #[error("could not determine the configuration directory (set HOME or WIFI_CONFIG_DIR)")]
    NoConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not the expected JSON document.
    #[error("malformed JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// `remove` was asked for an SSID that is not saved.
    #[error("no credentials found for {ssid}")]
    NotFound { ssid: String },

    /// The key file exists but does not hold a usable key.
    #[error("key file {path} is invalid: {reason}")]
    InvalidKey { path: PathBuf, reason: String },

    /// A stored secret could not be decrypted with the current key.
    #[error("could not decrypt the password for '{ssid}' (was the key file replaced?)")]
    Decrypt { ssid: String },

    /// The AEAD refused to encrypt (never expected with a valid key).
    #[error("failed to encrypt the password for '{ssid}'")]
    Encrypt { ssid: String },
}

/// Error type for interactive prompts.
///
/// Cancellation (Esc, Ctrl+C) is *not* an error: prompts return `Ok(None)`.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("terminal prompt failed: {0}")]
    Terminal(#[source] std::io::Error),
}

// ── Traits ────────────────────────────────────────────────────────────────────

/// Adapter over the external network-management tool.
///
/// Every method runs synchronously and returns failures as values; a
/// non-zero exit status never panics.
#[cfg_attr(test, mockall::automock)]
pub trait NetworkController {
    /// Switches the Wi-Fi radio on.
    fn power_on(&self) -> Result<(), NetworkError>;
    /// Switches the Wi-Fi radio off.
    fn power_off(&self) -> Result<(), NetworkError>;
    /// SSIDs currently in range, de-duplicated, hidden networks dropped.
    fn list_available(&self) -> Result<Vec<String>, NetworkError>;
    /// The tool's own human-formatted network table.
    fn list_verbose(&self) -> Result<String, NetworkError>;
    /// The network the machine is associated with, if any.
    fn current_connection(&self) -> Result<Option<CurrentConnection>, NetworkError>;
    /// One row per network device.
    fn device_status(&self) -> Result<Vec<DeviceStatus>, NetworkError>;
    /// Connects with explicit credentials (empty password = open network).
    fn connect(&self, ssid: &str, password: &str) -> Result<(), NetworkError>;
    /// Activates the tool's existing profile for `ssid`.
    fn connect_saved(&self, ssid: &str) -> Result<(), NetworkError>;
    /// Disconnects `device`.
    fn disconnect(&self, device: &str) -> Result<(), NetworkError>;
}

/// Persistent SSID → password mapping.
#[cfg_attr(test, mockall::automock)]
pub trait CredentialStore {
    /// Returns every saved entry, creating an empty store if none exists.
    fn load(&self) -> Result<SavedNetworks, StoreError>;
    /// Saves (or replaces) the password for `ssid`.
    fn save(&self, ssid: &str, password: &str) -> Result<(), StoreError>;
    /// Removes `ssid`; [`StoreError::NotFound`] if it was not saved.
    fn remove(&self, ssid: &str) -> Result<(), StoreError>;
    /// Removes every entry.
    fn remove_all(&self) -> Result<(), StoreError>;
    /// The plaintext password for `ssid`, decrypting if necessary.
    fn password_for(&self, ssid: &str) -> Result<Option<String>, StoreError>;
}

/// Persistent boolean options.
#[cfg_attr(test, mockall::automock)]
pub trait SettingsStore {
    /// Returns the settings, creating the file with defaults if absent.
    fn load(&self) -> Result<Settings, StoreError>;
    fn save(&self, settings: &Settings) -> Result<(), StoreError>;
    /// Overwrites the file with [`Settings::default`] and returns it.
    fn reset(&self) -> Result<Settings, StoreError>;
}

/// Interactive questions.  Every method returns `Ok(None)` when the user
/// cancels.
pub trait Prompter {
    /// Single-select menu; returns the index into `items`.
    fn choose(&self, prompt: &str, items: &[String]) -> Result<Option<usize>, PromptError>;
    /// Free-text password entry, echoed only when `masked` is `false`.
    fn password(&self, prompt: &str, masked: bool) -> Result<Option<String>, PromptError>;
    /// Yes/no question.
    fn confirm(&self, prompt: &str) -> Result<Option<bool>, PromptError>;
}

/// Where user-facing output goes.
pub trait Reporter {
    /// An outcome message ("Connected to …"); may become a desktop
    /// notification.
    fn notify(&self, message: &str);
    /// A line of data (SSID listings, status fields); always the terminal.
    fn print(&self, line: &str);
}
