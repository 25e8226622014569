//! Parsers for `nmcli` output.
//!
//! # Terse mode (for beginners)
//!
//! With `-t` (or `-g`), `nmcli` prints one record per line and separates
//! fields with `:`.  Because SSIDs may themselves contain `:`, a literal
//! colon inside a value is written as `\:` and a literal backslash as `\\`.
//! [`split_terse`] undoes that escaping.
//!
//! The only parser that deals with human-formatted output is
//! [`parse_show_password`], which is a fallback: its field labels are
//! translated according to the user's locale.

use thiserror::Error;
use tracing::debug;

use crate::domain::device::{CurrentConnection, DeviceStatus};

/// Connection `TYPE` value for Wi-Fi profiles in `nmcli connection show`.
pub const WIFI_CONNECTION_TYPE: &str = "802-11-wireless";

/// Error type for malformed `nmcli` output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A terse line did not have the expected number of fields.
    #[error("expected {expected} fields in '{line}', found {found}")]
    FieldCount {
        line: String,
        expected: usize,
        found: usize,
    },
}

/// Splits one terse-mode line into its unescaped fields.
pub fn split_terse(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut chars = line.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some(next) => current.push(next),
                None => current.push('\\'),
            },
            ':' => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}

/// Removes terse-mode escaping from a single-field line (`-g` with one value).
pub fn unescape_terse(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            out.push(chars.next().unwrap_or('\\'));
        } else {
            out.push(c);
        }
    }
    out
}

/// Parses `nmcli -t -f DEVICE,TYPE,STATE device`.
///
/// Blank lines are skipped.
///
/// # Errors
///
/// Returns [`ParseError::FieldCount`] for a line that does not split into
/// exactly three fields.
pub fn parse_device_status(output: &str) -> Result<Vec<DeviceStatus>, ParseError> {
    output
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|line| {
            let fields = split_terse(line);
            match <[String; 3]>::try_from(fields) {
                Ok([device, kind, state]) => Ok(DeviceStatus { device, kind, state }),
                Err(fields) => Err(ParseError::FieldCount {
                    line: line.to_string(),
                    expected: 3,
                    found: fields.len(),
                }),
            }
        })
        .collect()
}

/// Parses `nmcli -t -f SSID device wifi list`.
///
/// Hidden networks (empty SSID) are dropped.  Access points broadcasting the
/// same SSID appear once, at the position of their first occurrence.
pub fn parse_ssid_list(output: &str) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    output
        .lines()
        .map(unescape_terse)
        .filter(|ssid| !ssid.trim().is_empty())
        .filter(|ssid| seen.insert(ssid.clone()))
        .collect()
}

/// Parses `nmcli -t -f NAME,TYPE connection show --active` and returns the
/// name of the first active Wi-Fi connection.
pub fn parse_active_wifi_connection(output: &str) -> Option<String> {
    output.lines().find_map(|line| {
        let fields = split_terse(line);
        match fields.as_slice() {
            [name, kind] if kind == WIFI_CONNECTION_TYPE && !name.is_empty() => Some(name.clone()),
            [_, _] => None,
            _ => {
                debug!(line, "skipping malformed active-connection row");
                None
            }
        }
    })
}

/// Parses the two-line output of the `profile_secrets` command: the SSID on
/// the first line and the PSK (possibly empty) on the second.
pub fn parse_profile_secrets(output: &str) -> Option<CurrentConnection> {
    let mut lines = output.lines();
    let ssid = unescape_terse(lines.next()?.trim_end_matches('\r'));
    if ssid.is_empty() {
        return None;
    }
    let password = lines.next().map(|l| unescape_terse(l.trim_end_matches('\r')));
    Some(CurrentConnection {
        ssid,
        password: Some(password.unwrap_or_default()),
    })
}

/// Returns the localised label `nmcli device wifi show-password` uses for
/// the password line, chosen from a `LANG`-style locale string.
pub fn password_label(lang: &str) -> &'static str {
    if lang.starts_with("es") {
        "Contraseña"
    } else {
        "Password"
    }
}

/// Parses the human-formatted output of `nmcli device wifi show-password`.
///
/// ```text
/// SSID: My Network
/// Security: WPA
/// Password: hunter22
/// ```
///
/// The SSID is everything after the label, so names with spaces survive.
pub fn parse_show_password(output: &str, password_label: &str) -> Option<CurrentConnection> {
    let value_after = |label: &str| {
        output.lines().find_map(|line| {
            let rest = line.trim_start().strip_prefix(label)?;
            let rest = rest.strip_prefix(':')?;
            Some(rest.trim().to_string())
        })
    };
    let ssid = value_after("SSID").filter(|s| !s.is_empty())?;
    Some(CurrentConnection {
        ssid,
        password: value_after(password_label),
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
