//! Infrastructure layer: everything that touches the operating system.
//!
//! # Sub-modules
//!
//! - **`nmcli`**   – Runs `nmcli` as a child process and implements
//!   [`NetworkController`](crate::application::ports::NetworkController).
//! - **`storage`** – The JSON settings and credential files, the key file, and
//!   the directory they live in.
//! - **`prompt`**  – Interactive terminal menus and password entry.
//! - **`report`**  – stdout and desktop-notification output.
//!
//! Each adapter module also has an always-compiled `mock` (or `memory`)
//! sibling used by unit and integration tests.

pub mod nmcli;
pub mod prompt;
pub mod report;
pub mod storage;
