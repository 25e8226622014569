//! Everything about `nmcli` that does not require running it.
//!
//! - [`command`] – the fixed command templates, built as argument vectors.
//! - [`parse`]   – parsers for the terse (`-t` / `-g`) output mode.
//!
//! # Why argument vectors? (for beginners)
//!
//! Building a command line with `format!` and handing it to `sh -c` means an
//! SSID such as `Cafe; rm -rf ~` is *interpreted by the shell*.  Passing each
//! argument separately to the process spawner sidesteps the shell entirely:
//! the SSID reaches `nmcli` byte-for-byte, whatever characters it contains.
//! Shell escaping is still provided, but only to print a command for humans
//! (debug logs) in a form that could be pasted back into a terminal.

pub mod command;
pub mod parse;

/// Name of the NetworkManager command-line client.
pub const NMCLI: &str = "nmcli";
