//! [`CommandRunner`] spawning the real `nmcli` process.

use std::process::{Command, Stdio};

use wifi_core::NmcliCommand;

use super::{CommandOutput, CommandRunner};
use crate::application::ports::NetworkError;

/// Runs commands with [`std::process::Command`], blocking until exit.
///
/// Arguments are passed as a vector; no shell is involved.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&self, command: &NmcliCommand) -> Result<CommandOutput, NetworkError> {
        let output = Command::new(command.program())
            .args(command.args())
            .stdin(Stdio::null())
            .output()
            .map_err(|source| NetworkError::Spawn {
                program: command.program().to_string(),
                source,
            })?;
        Ok(CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
