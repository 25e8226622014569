//! `nmcli` command templates.
//!
//! Each constructor returns an [`NmcliCommand`] holding the argument vector
//! to pass to the process spawner.  Values such as SSIDs and device names
//! are inserted as whole arguments and never re-split.
//!
//! | Constructor          | argv (after `nmcli`)                                      |
//! |----------------------|-----------------------------------------------------------|
//! | `radio(true)`        | `radio wifi on`                                           |
//! | `list_verbose`       | `device wifi list`                                        |
//! | `list_ssids`         | `-t -f SSID device wifi list`                             |
//! | `device_status`      | `-t -f DEVICE,TYPE,STATE device`                          |
//! | `connect`            | `device wifi connect <ssid> [password <pw>]`              |
//! | `connect_saved`      | `connection up id <ssid>`                                 |
//! | `disconnect`         | `device disconnect <device>`                              |
//! | `active_connections` | `-t -f NAME,TYPE connection show --active`                |
//! | `profile_secrets`    | `-s -g 802-11-wireless.ssid,802-11-wireless-security.psk connection show id <name>` |
//! | `show_password`      | `device wifi show-password`                               |

use std::fmt;

use super::NMCLI;

/// Placeholder printed instead of secret arguments.
const REDACTED: &str = "******";

/// A fully built `nmcli` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NmcliCommand {
    args: Vec<String>,
    /// Index into `args` of a value that must never be logged.
    secret: Option<usize>,
}

impl NmcliCommand {
    fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
            secret: None,
        }
    }

    /// `nmcli radio wifi on|off`
    pub fn radio(on: bool) -> Self {
        Self::new(["radio", "wifi", if on { "on" } else { "off" }])
    }

    /// `nmcli device wifi list` (human-formatted table)
    pub fn list_verbose() -> Self {
        Self::new(["device", "wifi", "list"])
    }

    /// `nmcli -t -f SSID device wifi list`
    pub fn list_ssids() -> Self {
        Self::new(["-t", "-f", "SSID", "device", "wifi", "list"])
    }

    /// `nmcli -t -f DEVICE,TYPE,STATE device`
    pub fn device_status() -> Self {
        Self::new(["-t", "-f", "DEVICE,TYPE,STATE", "device"])
    }

    /// `nmcli device wifi connect <ssid> password <password>`
    ///
    /// An empty password connects to an open network and omits the
    /// `password` keyword altogether.
    pub fn connect(ssid: &str, password: &str) -> Self {
        let mut cmd = Self::new(["device", "wifi", "connect", ssid]);
        if !password.is_empty() {
            cmd.args.push("password".to_string());
            cmd.args.push(password.to_string());
            cmd.secret = Some(cmd.args.len() - 1);
        }
        cmd
    }

    /// `nmcli connection up id <ssid>`
    pub fn connect_saved(ssid: &str) -> Self {
        Self::new(["connection", "up", "id", ssid])
    }

    /// `nmcli device disconnect <device>`
    pub fn disconnect(device: &str) -> Self {
        Self::new(["device", "disconnect", device])
    }

    /// `nmcli -t -f NAME,TYPE connection show --active`
    pub fn active_connections() -> Self {
        Self::new(["-t", "-f", "NAME,TYPE", "connection", "show", "--active"])
    }

    /// `nmcli -s -g 802-11-wireless.ssid,802-11-wireless-security.psk connection show id <name>`
    ///
    /// `-s` reveals secrets; `-g` prints one bare value per line.
    pub fn profile_secrets(connection: &str) -> Self {
        Self::new([
            "-s",
            "-g",
            "802-11-wireless.ssid,802-11-wireless-security.psk",
            "connection",
            "show",
            "id",
            connection,
        ])
    }

    /// `nmcli device wifi show-password` (human-formatted, localised labels)
    pub fn show_password() -> Self {
        Self::new(["device", "wifi", "show-password"])
    }

    pub fn program(&self) -> &'static str {
        NMCLI
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Renders the command as a shell line, every argument escaped.
    ///
    /// Secrets are included verbatim; use the `Display` impl for logging.
    pub fn to_shell_line(&self) -> String {
        self.render(false)
    }

    fn render(&self, redact: bool) -> String {
        let mut line = String::from(NMCLI);
        for (i, arg) in self.args.iter().enumerate() {
            line.push(' ');
            if redact && self.secret == Some(i) {
                line.push_str(REDACTED);
            } else {
                line.push_str(&shell_escape(arg));
            }
        }
        line
    }
}

/// Shell line with secrets replaced by `******`.
impl fmt::Display for NmcliCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(true))
    }
}

/// Escapes `arg` so a POSIX shell reads it back as exactly one word.
///
/// Characters outside a conservative safe set are prefixed with a backslash
/// (`My Network` → `My\ Network`).  Newlines cannot be backslash-escaped, so
/// arguments containing one are single-quoted instead.
pub fn shell_escape(arg: &str) -> String {
    if arg.is_empty() {
        return "''".to_string();
    }
    if arg.contains('\n') {
        return format!("'{}'", arg.replace('\'', r"'\''"));
    }
    let mut out = String::with_capacity(arg.len());
    for c in arg.chars() {
        if !is_shell_safe(c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

fn is_shell_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | '/' | ',' | ':' | '@' | '%' | '+' | '=')
        || !c.is_ascii()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
