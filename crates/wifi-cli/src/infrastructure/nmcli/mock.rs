//! Scripted command runner for tests.
//!
//! Each expected [`NmcliCommand`] is mapped to a canned [`CommandOutput`].
//! Unscripted commands "exit" with status 8 (NetworkManager not running),
//! so a test that forgets a command fails through the normal error path.

use std::sync::Mutex;

use wifi_core::NmcliCommand;

use super::{CommandOutput, CommandRunner};
use crate::application::ports::NetworkError;

/// A [`CommandRunner`] returning canned output and recording every call.
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    script: Vec<(NmcliCommand, CommandOutput)>,
    calls: Mutex<Vec<NmcliCommand>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers `command` with `output` (builder style).
    pub fn on(mut self, command: NmcliCommand, output: CommandOutput) -> Self {
        self.script.push((command, output));
        self
    }

    /// Every command run so far, in order.
    pub fn calls(&self) -> Vec<NmcliCommand> {
        self.calls.lock().expect("lock poisoned").clone()
    }

    /// Returns `true` if `command` has been run at least once.
    pub fn was_run(&self, command: &NmcliCommand) -> bool {
        self.calls
            .lock()
            .expect("lock poisoned")
            .iter()
            .any(|c| c == command)
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, command: &NmcliCommand) -> Result<CommandOutput, NetworkError> {
        self.calls.lock().expect("lock poisoned").push(command.clone());
        Ok(self
            .script
            .iter()
            .find(|(c, _)| c == command)
            .map(|(_, output)| output.clone())
            .unwrap_or_else(|| {
                CommandOutput::failure(8, format!("unscripted command: {command}"))
            }))
    }
}
