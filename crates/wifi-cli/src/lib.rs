//! # wifi-cli
//!
//! The `wifi` command: simplified Wi-Fi control on top of NetworkManager's
//! `nmcli`, with saved credentials (optionally encrypted), an interactive
//! network menu, and optional desktop notifications.
//!
//! # Architecture overview (for beginners)
//!
//! The crate follows the same three layers as `wifi-core`, plus the CLI:
//!
//! - **`application`** – One use case per subcommand.  Use cases only see
//!   the port traits in [`application::ports`], never `nmcli` or the file
//!   system directly.
//!
//! - **`infrastructure`** – The adapters behind those ports: `nmcli` as a
//!   child process, the JSON files, the key file, terminal prompts, and
//!   notifications.  Each has a test double next to it.
//!
//! - **`cli`** – `clap` definitions, converted into an
//!   [`application::dispatch::Command`].
//!
//! `main.rs` wires the production adapters together and maps the result to
//! an exit status.

pub mod application;
pub mod cli;
pub mod infrastructure;
