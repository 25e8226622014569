//! Routes a parsed [`Command`] to its use case.
//!
//! The binary builds the production adapters once, wraps references to them
//! in [`Services`], and calls [`Dispatcher::run`].  Integration tests do the
//! same with in-memory adapters.

use tracing::debug;
use wifi_core::Settings;

use super::connect_network::ConnectNetworkUseCase;
use super::disconnect_network::DisconnectNetworkUseCase;
use super::list_networks::{ListMode, ListNetworksUseCase};
use super::manage_config::{ConfigChange, ConfigQuery, ManageConfigUseCase};
use super::manage_saved::{ForgetTarget, ManageSavedUseCase};
use super::outcome::{AppError, Outcome};
use super::ports::{CredentialStore, NetworkController, Prompter, Reporter, SettingsStore};
use super::radio::RadioUseCase;

/// One user request, independent of how it was typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    On,
    Off,
    Status { show_password: bool },
    List(ListMode),
    Connect { show_password: bool },
    Disconnect { forget: bool },
    Save,
    Forget(ForgetTarget),
    ConfigGet(ConfigQuery),
    ConfigSet(ConfigChange),
}

/// The adapters and the settings every use case draws from.
#[derive(Clone, Copy)]
pub struct Services<'a> {
    pub network: &'a dyn NetworkController,
    pub credentials: &'a dyn CredentialStore,
    pub settings_store: &'a dyn SettingsStore,
    pub prompter: &'a dyn Prompter,
    pub reporter: &'a dyn Reporter,
    /// Settings as loaded at startup.
    pub settings: Settings,
}

pub struct Dispatcher<'a> {
    services: Services<'a>,
}

impl<'a> Dispatcher<'a> {
    pub fn new(services: Services<'a>) -> Self {
        Self { services }
    }

    /// Executes `command` to completion.
    pub fn run(&self, command: Command) -> Result<Outcome, AppError> {
        debug!(?command, "dispatching");
        let s = &self.services;
        match command {
            Command::On => RadioUseCase::new(s.network, s.reporter).power(true),
            Command::Off => RadioUseCase::new(s.network, s.reporter).power(false),
            Command::Status { show_password } => {
                RadioUseCase::new(s.network, s.reporter).status(show_password)
            }
            Command::List(mode) => {
                ListNetworksUseCase::new(s.network, s.credentials, s.reporter).execute(mode)
            }
            Command::Connect { show_password } => ConnectNetworkUseCase::new(
                s.network,
                s.credentials,
                s.prompter,
                s.reporter,
                s.settings,
            )
            .execute(show_password),
            Command::Disconnect { forget } => {
                DisconnectNetworkUseCase::new(s.network, s.credentials, s.reporter).execute(forget)
            }
            Command::Save => {
                ManageSavedUseCase::new(s.network, s.credentials, s.prompter, s.reporter).save_current()
            }
            Command::Forget(target) => {
                ManageSavedUseCase::new(s.network, s.credentials, s.prompter, s.reporter).forget(target)
            }
            Command::ConfigGet(query) => ManageConfigUseCase::new(s.settings_store, s.reporter).get(query),
            Command::ConfigSet(change) => {
                ManageConfigUseCase::new(s.settings_store, s.reporter).set(change)
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use wifi_core::domain::messages;

    use super::*;
    use crate::application::ports::MockNetworkController;
    use crate::infrastructure::prompt::mock::ScriptedPrompter;
    use crate::infrastructure::report::mock::RecordingReporter;
    use crate::infrastructure::storage::memory::{MemoryCredentialStore, MemorySettingsStore};

    #[test]
    fn test_on_routes_to_power_on() {
        // Arrange
        let mut network = MockNetworkController::new();
        network.expect_power_on().times(1).returning(|| Ok(()));
        let credentials = MemoryCredentialStore::new();
        let settings_store = MemorySettingsStore::default();
        let prompter = ScriptedPrompter::default();
        let reporter = RecordingReporter::new();
        let dispatcher = Dispatcher::new(Services {
            network: &network,
            credentials: &credentials,
            settings_store: &settings_store,
            prompter: &prompter,
            reporter: &reporter,
            settings: Settings::default(),
        });

        // Act
        let outcome = dispatcher.run(Command::On).expect("run");

        // Assert
        assert_eq!(outcome, Outcome::Done);
        assert_eq!(reporter.notices(), [messages::radio_on()]);
    }

    #[test]
    fn test_config_set_reset_goes_to_settings_store() {
        let network = MockNetworkController::new();
        let credentials = MemoryCredentialStore::new();
        let settings_store = MemorySettingsStore::new(Settings {
            notifications: true,
            ..Settings::default()
        });
        let prompter = ScriptedPrompter::default();
        let reporter = RecordingReporter::new();
        let dispatcher = Dispatcher::new(Services {
            network: &network,
            credentials: &credentials,
            settings_store: &settings_store,
            prompter: &prompter,
            reporter: &reporter,
            settings: Settings::default(),
        });

        dispatcher
            .run(Command::ConfigSet(ConfigChange::Reset))
            .expect("run");

        assert_eq!(settings_store.current(), Settings::default());
    }
}
