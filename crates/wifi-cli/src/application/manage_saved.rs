//! `save` and `forget`.

use wifi_core::domain::messages;
use zeroize::Zeroizing;

use super::outcome::{report_failure, AppError, Outcome};
use super::ports::{CredentialStore, NetworkController, Prompter, Reporter, StoreError};

pub const FORGET_PROMPT: &str = "Select a network to forget. Press Esc to exit";

/// What `forget` removes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ForgetTarget {
    /// Every saved network (`--all`).
    All,
    /// The network currently connected (`--current`).
    Current,
    /// One network picked from a menu.
    #[default]
    Choose,
}

pub struct ManageSavedUseCase<'a> {
    network: &'a dyn NetworkController,
    credentials: &'a dyn CredentialStore,
    prompter: &'a dyn Prompter,
    reporter: &'a dyn Reporter,
}

impl<'a> ManageSavedUseCase<'a> {
    pub fn new(
        network: &'a dyn NetworkController,
        credentials: &'a dyn CredentialStore,
        prompter: &'a dyn Prompter,
        reporter: &'a dyn Reporter,
    ) -> Self {
        Self {
            network,
            credentials,
            prompter,
            reporter,
        }
    }

    /// Stores the SSID and password of the network currently connected.
    pub fn save_current(&self) -> Result<Outcome, AppError> {
        let current = self
            .network
            .current_connection()
            .map_err(|e| report_failure(self.reporter, "Reading the current network", e))?;
        let Some(current) = current else {
            self.reporter.notify(&messages::no_current_network());
            return Ok(Outcome::Reported);
        };
        // An unreadable password means an open network.
        let password = Zeroizing::new(current.password.unwrap_or_default());
        self.credentials.save(&current.ssid, &password)?;
        self.reporter.notify(messages::NETWORK_SAVED);
        Ok(Outcome::Done)
    }

    pub fn forget(&self, target: ForgetTarget) -> Result<Outcome, AppError> {
        match target {
            ForgetTarget::All => {
                let was_empty = self.credentials.load()?.is_empty();
                self.credentials.remove_all()?;
                if was_empty {
                    self.reporter.notify(messages::NO_SAVED_NETWORKS);
                    Ok(Outcome::Reported)
                } else {
                    self.reporter.notify(messages::ALL_NETWORKS_FORGOTTEN);
                    Ok(Outcome::Done)
                }
            }
            ForgetTarget::Current => {
                let current = self
                    .network
                    .current_connection()
                    .map_err(|e| report_failure(self.reporter, "Reading the current network", e))?;
                match current {
                    Some(current) => remove_saved(self.credentials, self.reporter, &current.ssid),
                    None => {
                        self.reporter.notify(&messages::no_current_network());
                        Ok(Outcome::Reported)
                    }
                }
            }
            ForgetTarget::Choose => {
                let names: Vec<String> = self.credentials.load()?.into_keys().collect();
                if names.is_empty() {
                    self.reporter.notify(messages::NO_SAVED_NETWORKS);
                    return Ok(Outcome::Reported);
                }
                match self.prompter.choose(FORGET_PROMPT, &names)?.and_then(|i| names.get(i)) {
                    Some(ssid) => remove_saved(self.credentials, self.reporter, ssid),
                    None => Ok(Outcome::Cancelled),
                }
            }
        }
    }
}

/// Removes one saved network, reporting "No credentials found" instead of
/// failing when it was never saved.
pub(crate) fn remove_saved(
    credentials: &dyn CredentialStore,
    reporter: &dyn Reporter,
    ssid: &str,
) -> Result<Outcome, AppError> {
    match credentials.remove(ssid) {
        Ok(()) => {
            reporter.notify(&messages::forgotten(ssid));
            Ok(Outcome::Done)
        }
        Err(StoreError::NotFound { .. }) => {
            reporter.notify(&messages::no_credentials(ssid));
            Ok(Outcome::Reported)
        }
        Err(e) => Err(e.into()),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
