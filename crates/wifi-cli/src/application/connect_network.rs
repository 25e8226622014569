//! `connect`: pick a network from a menu and join it.
//!
//! # Flow (for beginners)
//!
//! ```text
//! list_available ──► menu ──► saved? ──yes──► connect_saved ──fails──► connect(stored pw)
//!                               │
//!                               no
//!                               ▼
//!                        password prompt ──► connect ──► autosave / "Save?" ──► store
//! ```
//!
//! Esc or Ctrl+C at any prompt ends the command quietly.

use tracing::warn;
use wifi_core::domain::messages;
use wifi_core::Settings;
use zeroize::Zeroizing;

use super::outcome::{report_failure, AppError, Outcome};
use super::ports::{CredentialStore, NetworkController, NetworkError, Prompter, Reporter};

pub const SELECT_PROMPT: &str = "Select a network to connect. Press Esc to exit";

pub fn password_prompt(ssid: &str) -> String {
    format!("Password for '{ssid}'")
}

pub fn save_prompt(ssid: &str) -> String {
    format!("Save '{ssid}' for next time?")
}

pub struct ConnectNetworkUseCase<'a> {
    network: &'a dyn NetworkController,
    credentials: &'a dyn CredentialStore,
    prompter: &'a dyn Prompter,
    reporter: &'a dyn Reporter,
    settings: Settings,
}

impl<'a> ConnectNetworkUseCase<'a> {
    pub fn new(
        network: &'a dyn NetworkController,
        credentials: &'a dyn CredentialStore,
        prompter: &'a dyn Prompter,
        reporter: &'a dyn Reporter,
        settings: Settings,
    ) -> Self {
        Self {
            network,
            credentials,
            prompter,
            reporter,
            settings,
        }
    }

    /// Runs the whole interactive flow.  `show_password` echoes the password
    /// while it is typed, overriding `hide-password`.
    pub fn execute(&self, show_password: bool) -> Result<Outcome, AppError> {
        let available = self
            .network
            .list_available()
            .map_err(|e| report_failure(self.reporter, "Network scan", e))?;
        if available.is_empty() {
            self.reporter.notify(messages::NO_NETWORK_AVAILABLE);
            return Ok(Outcome::Reported);
        }

        let Some(ssid) = self
            .prompter
            .choose(SELECT_PROMPT, &available)?
            .and_then(|i| available.get(i))
        else {
            return Ok(Outcome::Cancelled);
        };

        if self.credentials.load()?.contains_key(ssid) {
            self.connect_saved(ssid)
        } else {
            self.connect_new(ssid, show_password)
        }
    }

    fn connect_saved(&self, ssid: &str) -> Result<Outcome, AppError> {
        self.reporter.print(&messages::connecting(ssid));
        if let Err(e) = self.network.connect_saved(ssid) {
            warn!(ssid, error = %e, "activating the saved profile failed");
            let stored = match self.credentials.password_for(ssid) {
                Ok(stored) => stored.map(Zeroizing::new),
                Err(store_err) => {
                    warn!(ssid, error = %store_err, "stored password unavailable for retry");
                    None
                }
            };
            let Some(password) = stored else {
                return Err(self.failed(e));
            };
            self.network
                .connect(ssid, &password)
                .map_err(|e| self.failed(e))?;
        }
        self.reporter.notify(&messages::connected(ssid));
        Ok(Outcome::Done)
    }

    fn connect_new(&self, ssid: &str, show_password: bool) -> Result<Outcome, AppError> {
        let masked = self.settings.hide_password && !show_password;
        let Some(password) = self
            .prompter
            .password(&password_prompt(ssid), masked)?
            .map(Zeroizing::new)
        else {
            return Ok(Outcome::Cancelled);
        };

        self.reporter.print(&messages::connecting(ssid));
        self.network
            .connect(ssid, &password)
            .map_err(|e| self.failed(e))?;
        self.reporter.notify(&messages::connected(ssid));

        let keep = if self.settings.autosave {
            true
        } else {
            self.prompter.confirm(&save_prompt(ssid))?.unwrap_or(false)
        };
        if keep {
            self.credentials.save(ssid, &password)?;
            self.reporter.notify(messages::NETWORK_SAVED);
        }
        Ok(Outcome::Done)
    }

    fn failed(&self, err: NetworkError) -> AppError {
        self.reporter.notify(&messages::connection_failed());
        AppError::Network(err)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{
        MockCredentialStore, MockNetworkController, SavedNetworks, StoreError,
    };
    use crate::infrastructure::prompt::mock::{Answer, ScriptedPrompter};
    use crate::infrastructure::report::mock::RecordingReporter;
    use crate::infrastructure::storage::memory::MemoryCredentialStore;

    fn refused() -> NetworkError {
        NetworkError::CommandFailed {
            command: "nmcli connection up id Home".into(),
            code: Some(4),
            stderr: "Error: Connection activation failed".into(),
        }
    }

    fn scanning(ssids: &'static [&'static str]) -> MockNetworkController {
        let mut network = MockNetworkController::new();
        network
            .expect_list_available()
            .returning(move || Ok(ssids.iter().map(|s| s.to_string()).collect()));
        network
    }

    #[test]
    fn test_new_network_prompts_connects_and_saves_on_yes() {
        // Arrange
        let mut network = scanning(&["Home", "Cafe Wifi"]);
        network
            .expect_connect()
            .withf(|ssid: &str, password: &str| ssid == "Cafe Wifi" && password == "latte123")
            .times(1)
            .returning(|_, _| Ok(()));
        let credentials = MemoryCredentialStore::new();
        let prompter = ScriptedPrompter::new([
            Answer::Pick("Cafe Wifi".into()),
            Answer::Text("latte123".into()),
            Answer::Confirm(true),
        ]);
        let reporter = RecordingReporter::new();
        let use_case = ConnectNetworkUseCase::new(
            &network,
            &credentials,
            &prompter,
            &reporter,
            Settings::default(),
        );

        // Act
        let outcome = use_case.execute(false).expect("connect");

        // Assert
        assert_eq!(outcome, Outcome::Done);
        assert_eq!(
            credentials.password_for("Cafe Wifi").expect("lookup").as_deref(),
            Some("latte123")
        );
        assert_eq!(
            reporter.notices(),
            [messages::connected("Cafe Wifi"), messages::NETWORK_SAVED.to_string()]
        );
        assert_eq!(reporter.lines(), [messages::connecting("Cafe Wifi")]);
    }

    #[test]
    fn test_autosave_skips_the_save_question() {
        // Arrange
        let mut network = scanning(&["Home"]);
        network.expect_connect().times(1).returning(|_, _| Ok(()));
        let credentials = MemoryCredentialStore::new();
        let prompter = ScriptedPrompter::new([Answer::Pick("Home".into()), Answer::Text("pw".into())]);
        let reporter = RecordingReporter::new();
        let settings = Settings {
            autosave: true,
            ..Settings::default()
        };

        // Act
        ConnectNetworkUseCase::new(&network, &credentials, &prompter, &reporter, settings)
            .execute(false)
            .expect("connect");

        // Assert
        assert!(credentials.snapshot().contains_key("Home"));
        assert_eq!(prompter.asked(), [SELECT_PROMPT.to_string(), password_prompt("Home")]);
    }

    #[test]
    fn test_declining_save_leaves_store_empty() {
        let mut network = scanning(&["Home"]);
        network.expect_connect().returning(|_, _| Ok(()));
        let credentials = MemoryCredentialStore::new();
        let prompter = ScriptedPrompter::new([
            Answer::Pick("Home".into()),
            Answer::Text("pw".into()),
            Answer::Confirm(false),
        ]);
        let reporter = RecordingReporter::new();

        ConnectNetworkUseCase::new(&network, &credentials, &prompter, &reporter, Settings::default())
            .execute(false)
            .expect("connect");

        assert!(credentials.snapshot().is_empty());
    }

    #[test]
    fn test_saved_network_uses_existing_profile() {
        // Arrange: connect() must not be called
        let mut network = scanning(&["Home"]);
        network
            .expect_connect_saved()
            .withf(|ssid: &str| ssid == "Home")
            .times(1)
            .returning(|_| Ok(()));
        let credentials = MemoryCredentialStore::with_entries([("Home", "pw")]);
        let prompter = ScriptedPrompter::new([Answer::Pick("Home".into())]);
        let reporter = RecordingReporter::new();

        // Act
        let outcome =
            ConnectNetworkUseCase::new(&network, &credentials, &prompter, &reporter, Settings::default())
                .execute(false)
                .expect("connect");

        // Assert
        assert_eq!(outcome, Outcome::Done);
        assert_eq!(reporter.notices(), [messages::connected("Home")]);
    }

    #[test]
    fn test_saved_network_falls_back_to_stored_password() {
        // Arrange
        let mut network = scanning(&["Home"]);
        network.expect_connect_saved().returning(|_| Err(refused()));
        network
            .expect_connect()
            .withf(|ssid: &str, password: &str| ssid == "Home" && password == "stored-pw")
            .times(1)
            .returning(|_, _| Ok(()));
        let credentials = MemoryCredentialStore::with_entries([("Home", "stored-pw")]);
        let prompter = ScriptedPrompter::new([Answer::Pick("Home".into())]);
        let reporter = RecordingReporter::new();

        // Act
        let outcome =
            ConnectNetworkUseCase::new(&network, &credentials, &prompter, &reporter, Settings::default())
                .execute(false)
                .expect("connect");

        // Assert
        assert_eq!(outcome, Outcome::Done);
        assert!(reporter.was_notified(&messages::connected("Home")));
    }

    #[test]
    fn test_unreadable_stored_password_reports_the_connection_failure() {
        // Arrange: the profile is gone and the saved secret cannot be decrypted
        let mut network = scanning(&["Home"]);
        network.expect_connect_saved().times(1).returning(|_| Err(refused()));
        network.expect_connect().never();
        let mut credentials = MockCredentialStore::new();
        credentials.expect_load().returning(|| {
            Ok(SavedNetworks::from([("Home".to_string(), "enc:v1:AAAA".to_string())]))
        });
        credentials
            .expect_password_for()
            .returning(|ssid| Err(StoreError::Decrypt { ssid: ssid.to_string() }));
        let prompter = ScriptedPrompter::new([Answer::Pick("Home".into())]);
        let reporter = RecordingReporter::new();

        // Act
        let result =
            ConnectNetworkUseCase::new(&network, &credentials, &prompter, &reporter, Settings::default())
                .execute(false);

        // Assert: the nmcli error is kept, not the store error
        assert!(matches!(
            result,
            Err(AppError::Network(NetworkError::CommandFailed { code: Some(4), .. }))
        ));
        assert_eq!(reporter.notices(), [messages::connection_failed()]);
    }

    #[test]
    fn test_failed_connection_reports_and_does_not_save() {
        // Arrange
        let mut network = scanning(&["Home"]);
        network.expect_connect().returning(|_, _| Err(refused()));
        let credentials = MemoryCredentialStore::new();
        let prompter = ScriptedPrompter::new([Answer::Pick("Home".into()), Answer::Text("wrong".into())]);
        let reporter = RecordingReporter::new();
        let settings = Settings {
            autosave: true,
            ..Settings::default()
        };

        // Act
        let result = ConnectNetworkUseCase::new(&network, &credentials, &prompter, &reporter, settings)
            .execute(false);

        // Assert
        assert!(matches!(result, Err(AppError::Network(_))));
        assert_eq!(reporter.notices(), [messages::connection_failed()]);
        assert!(credentials.snapshot().is_empty());
    }

    #[test]
    fn test_cancelling_the_menu_is_silent() {
        let network = scanning(&["Home"]);
        let credentials = MemoryCredentialStore::new();
        let prompter = ScriptedPrompter::new([Answer::Cancel]);
        let reporter = RecordingReporter::new();

        let outcome =
            ConnectNetworkUseCase::new(&network, &credentials, &prompter, &reporter, Settings::default())
                .execute(false)
                .expect("connect");

        assert_eq!(outcome, Outcome::Cancelled);
        assert!(reporter.notices().is_empty());
    }

    #[test]
    fn test_cancelling_the_password_prompt_never_connects() {
        let network = scanning(&["Home"]);
        let credentials = MemoryCredentialStore::new();
        let prompter = ScriptedPrompter::new([Answer::Pick("Home".into()), Answer::Cancel]);
        let reporter = RecordingReporter::new();

        let outcome =
            ConnectNetworkUseCase::new(&network, &credentials, &prompter, &reporter, Settings::default())
                .execute(true)
                .expect("connect");

        assert_eq!(outcome, Outcome::Cancelled);
    }

    #[test]
    fn test_no_networks_in_range() {
        let network = scanning(&[]);
        let credentials = MemoryCredentialStore::new();
        let prompter = ScriptedPrompter::default();
        let reporter = RecordingReporter::new();

        let outcome =
            ConnectNetworkUseCase::new(&network, &credentials, &prompter, &reporter, Settings::default())
                .execute(false)
                .expect("connect");

        assert_eq!(outcome, Outcome::Reported);
        assert_eq!(reporter.notices(), [messages::NO_NETWORK_AVAILABLE]);
    }
}
