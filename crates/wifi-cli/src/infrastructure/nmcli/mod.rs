//! [`NetworkController`] implementation backed by the `nmcli` binary.
//!
//! # Layers (for beginners)
//!
//! ```text
//! NmcliController  ── builds NmcliCommand, parses output (wifi-core)
//!        │
//!        ▼
//! CommandRunner    ── runs one argv, returns exit status + stdout/stderr
//!        │
//!        ├── ProcessRunner   (std::process::Command, production)
//!        └── ScriptedRunner  (canned output, tests)
//! ```
//!
//! Only the runner touches the operating system, so the controller's
//! parsing and fallback logic is tested without NetworkManager installed.

pub mod mock;
pub mod process;

use tracing::{debug, error, warn};
use wifi_core::nmcli::parse::{
    self, parse_active_wifi_connection, parse_device_status, parse_profile_secrets,
    parse_show_password, parse_ssid_list,
};
use wifi_core::{CurrentConnection, DeviceStatus, NmcliCommand};

use crate::application::ports::{NetworkController, NetworkError};

/// What a finished process left behind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code; `None` when the process was killed by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// A successful run printing `stdout`.
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// A run that exited with `code` and printed `stderr`.
    pub fn failure(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs a single `nmcli` command to completion.
pub trait CommandRunner {
    /// Spawns the command and waits for it.
    ///
    /// A non-zero exit is *not* an error here; only failing to start the
    /// process is.
    fn run(&self, command: &NmcliCommand) -> Result<CommandOutput, NetworkError>;
}

/// `nmcli`-backed network controller.
pub struct NmcliController<R> {
    runner: R,
    /// `LANG`-style locale, used only by the `show-password` fallback.
    lang: String,
}

impl<R: CommandRunner> NmcliController<R> {
    pub fn new(runner: R, lang: impl Into<String>) -> Self {
        Self {
            runner,
            lang: lang.into(),
        }
    }

    /// The runner, for inspecting a [`ScriptedRunner`](mock::ScriptedRunner)
    /// in tests.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Runs `command` and returns its stdout, mapping a non-zero exit to
    /// [`NetworkError::CommandFailed`].
    fn exec(&self, command: NmcliCommand) -> Result<String, NetworkError> {
        debug!(command = %command, "running nmcli");
        let output = self.runner.run(&command)?;
        if output.is_success() {
            Ok(output.stdout)
        } else {
            error!(command = %command, code = ?output.code, stderr = %output.stderr.trim(), "nmcli failed");
            Err(NetworkError::CommandFailed {
                command: command.to_string(),
                code: output.code,
                stderr: output.stderr.trim().to_string(),
            })
        }
    }

    /// Reads SSID and PSK from the profile of the active Wi-Fi connection.
    fn current_from_profile(&self) -> Result<Option<CurrentConnection>, NetworkError> {
        let active = self.exec(NmcliCommand::active_connections())?;
        let Some(name) = parse_active_wifi_connection(&active) else {
            return Ok(None);
        };
        let secrets = self.exec(NmcliCommand::profile_secrets(&name))?;
        Ok(parse_profile_secrets(&secrets))
    }
}

impl<R: CommandRunner> NetworkController for NmcliController<R> {
    fn power_on(&self) -> Result<(), NetworkError> {
        self.exec(NmcliCommand::radio(true)).map(drop)
    }

    fn power_off(&self) -> Result<(), NetworkError> {
        self.exec(NmcliCommand::radio(false)).map(drop)
    }

    fn list_available(&self) -> Result<Vec<String>, NetworkError> {
        let output = self.exec(NmcliCommand::list_ssids())?;
        Ok(parse_ssid_list(&output))
    }

    fn list_verbose(&self) -> Result<String, NetworkError> {
        self.exec(NmcliCommand::list_verbose())
    }

    /// Prefers the machine-readable profile query; falls back to parsing the
    /// localised `show-password` output only if that query fails.
    fn current_connection(&self) -> Result<Option<CurrentConnection>, NetworkError> {
        match self.current_from_profile() {
            Ok(current) => Ok(current),
            Err(e) => {
                warn!(error = %e, "profile query failed, falling back to show-password");
                let output = self.exec(NmcliCommand::show_password())?;
                Ok(parse_show_password(&output, parse::password_label(&self.lang)))
            }
        }
    }

    fn device_status(&self) -> Result<Vec<DeviceStatus>, NetworkError> {
        let output = self.exec(NmcliCommand::device_status())?;
        Ok(parse_device_status(&output)?)
    }

    fn connect(&self, ssid: &str, password: &str) -> Result<(), NetworkError> {
        self.exec(NmcliCommand::connect(ssid, password)).map(drop)
    }

    fn connect_saved(&self, ssid: &str) -> Result<(), NetworkError> {
        self.exec(NmcliCommand::connect_saved(ssid)).map(drop)
    }

    fn disconnect(&self, device: &str) -> Result<(), NetworkError> {
        self.exec(NmcliCommand::disconnect(device)).map(drop)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::mock::ScriptedRunner;
    use super::*;

    fn controller(runner: ScriptedRunner) -> NmcliController<ScriptedRunner> {
        NmcliController::new(runner, "en_US.UTF-8")
    }

    #[test]
    fn test_list_available_parses_terse_ssids() {
        // Arrange
        let runner = ScriptedRunner::new().on(
            NmcliCommand::list_ssids(),
            CommandOutput::success("Home\n\nHome\nCafe\n"),
        );
        let nmcli = controller(runner);

        // Act
        let ssids = nmcli.list_available().expect("list");

        // Assert
        assert_eq!(ssids, ["Home", "Cafe"]);
    }

    #[test]
    fn test_non_zero_exit_becomes_command_failed() {
        // Arrange
        let runner = ScriptedRunner::new().on(
            NmcliCommand::connect("Home", "wrong-pass"),
            CommandOutput::failure(4, "Error: Secrets were required.\n"),
        );
        let nmcli = controller(runner);

        // Act
        let err = nmcli.connect("Home", "wrong-pass").unwrap_err();

        // Assert
        match err {
            NetworkError::CommandFailed { command, code, stderr } => {
                assert_eq!(code, Some(4));
                assert_eq!(stderr, "Error: Secrets were required.");
                assert!(!command.contains("wrong-pass"), "password leaked: {command}");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_current_connection_from_profile_secrets() {
        // Arrange
        let runner = ScriptedRunner::new()
            .on(
                NmcliCommand::active_connections(),
                CommandOutput::success("My Network:802-11-wireless\n"),
            )
            .on(
                NmcliCommand::profile_secrets("My Network"),
                CommandOutput::success("My Network\nhunter22\n"),
            );
        let nmcli = controller(runner);

        // Act
        let current = nmcli.current_connection().expect("query");

        // Assert
        assert_eq!(
            current,
            Some(CurrentConnection {
                ssid: "My Network".into(),
                password: Some("hunter22".into())
            })
        );
        assert!(!nmcli.runner().was_run(&NmcliCommand::show_password()));
    }

    #[test]
    fn test_current_connection_none_when_no_wifi_is_active() {
        let runner = ScriptedRunner::new().on(
            NmcliCommand::active_connections(),
            CommandOutput::success("Wired connection 1:802-3-ethernet\n"),
        );
        assert_eq!(controller(runner).current_connection().expect("query"), None);
    }

    #[test]
    fn test_current_connection_falls_back_to_show_password() {
        // Arrange: the profile query is refused, show-password works (Spanish)
        let runner = ScriptedRunner::new()
            .on(
                NmcliCommand::active_connections(),
                CommandOutput::success("Casa:802-11-wireless\n"),
            )
            .on(
                NmcliCommand::profile_secrets("Casa"),
                CommandOutput::failure(10, "Error: insufficient privileges"),
            )
            .on(
                NmcliCommand::show_password(),
                CommandOutput::success("SSID: Casa\nSeguridad: WPA\nContraseña: clave1234\n"),
            );
        let nmcli = NmcliController::new(runner, "es_ES.UTF-8");

        // Act
        let current = nmcli.current_connection().expect("query").expect("connection");

        // Assert
        assert_eq!(current.ssid, "Casa");
        assert_eq!(current.password.as_deref(), Some("clave1234"));
    }

    #[test]
    fn test_device_status_propagates_parse_errors() {
        let runner = ScriptedRunner::new().on(
            NmcliCommand::device_status(),
            CommandOutput::success("garbage\n"),
        );
        assert!(matches!(
            controller(runner).device_status(),
            Err(NetworkError::Parse(_))
        ));
    }

    #[test]
    fn test_ssid_with_spaces_reaches_runner_as_one_argument() {
        // Arrange
        let runner = ScriptedRunner::new().on(
            NmcliCommand::connect_saved("Office WiFi 5G"),
            CommandOutput::success(""),
        );
        let nmcli = controller(runner);

        // Act
        nmcli.connect_saved("Office WiFi 5G").expect("connect");

        // Assert
        let calls = nmcli.runner().calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].args().last().map(String::as_str), Some("Office WiFi 5G"));
    }
}
