//! # wifi-core
//!
//! Shared library for the `wifi` command-line tool containing the settings
//! model, the device and network snapshot types, the user-facing messages,
//! and everything needed to talk to NetworkManager's `nmcli` *except* actually
//! spawning the process.
//!
//! It has zero dependencies on the file system, the terminal, or child
//! processes, so every function here can be unit-tested with plain strings.
//!
//! # Architecture overview (for beginners)
//!
//! The `wifi` tool is a thin wrapper around `nmcli`: each subcommand runs one
//! or two `nmcli` commands, parses what they print, and maybe reads or writes a
//! small JSON file.  This crate holds the pure half of that work:
//!
//! - **`domain`** – Plain data types: [`Settings`] (the boolean options stored
//!   in `config.json`), [`DeviceStatus`] rows, the [`CurrentConnection`], and
//!   the fixed [`messages`](domain::messages) printed to the user.
//!
//! - **`nmcli`** – The command templates ([`NmcliCommand`]) rendered as
//!   argument vectors, the shell-escaping used when a command is *displayed*,
//!   and the parsers for `nmcli`'s terse (`-t`) output.

pub mod domain;
pub mod nmcli;

// Re-export the most-used types at the crate root so callers can write
// `wifi_core::Settings` instead of `wifi_core::domain::settings::Settings`.
pub use domain::device::{CurrentConnection, DeviceState, DeviceStatus, WIFI_DEVICE_TYPE};
pub use domain::settings::{ConfigOption, OptionAssignment, Settings, SettingsError};
pub use nmcli::command::{shell_escape, NmcliCommand};
pub use nmcli::parse::ParseError;
