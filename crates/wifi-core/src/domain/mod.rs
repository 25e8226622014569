//! Domain types for the `wifi` tool.
//!
//! Nothing in here performs I/O.  The infrastructure layer in `wifi-cli`
//! fills these types from `nmcli` output and JSON files; the application
//! layer makes decisions based on them.
//!
//! - [`settings`] – the four boolean options and their defaults.
//! - [`device`]   – device status rows and the current connection.
//! - [`messages`] – fixed strings shown to the user.

pub mod device;
pub mod messages;
pub mod settings;
