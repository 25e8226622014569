//! `list`, `list --verbose`, `list --saved`.

use wifi_core::domain::messages;

use super::outcome::{report_failure, AppError, Outcome};
use super::ports::{CredentialStore, NetworkController, Reporter};

pub const AVAILABLE_HEADING: &str = ">>> Available Networks <<<";
pub const SAVED_HEADING: &str = ">>> Saved Networks <<<";

/// Which networks to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListMode {
    /// SSIDs in range, one per line.
    #[default]
    Available,
    /// `nmcli`'s own table, printed verbatim.
    Verbose,
    /// SSIDs in the credential store.
    Saved,
}

pub struct ListNetworksUseCase<'a> {
    network: &'a dyn NetworkController,
    credentials: &'a dyn CredentialStore,
    reporter: &'a dyn Reporter,
}

impl<'a> ListNetworksUseCase<'a> {
    pub fn new(
        network: &'a dyn NetworkController,
        credentials: &'a dyn CredentialStore,
        reporter: &'a dyn Reporter,
    ) -> Self {
        Self {
            network,
            credentials,
            reporter,
        }
    }

    pub fn execute(&self, mode: ListMode) -> Result<Outcome, AppError> {
        match mode {
            ListMode::Saved => {
                let saved = self.credentials.load()?;
                self.print_section(SAVED_HEADING, saved.keys(), messages::NO_SAVED_NETWORKS)
            }
            ListMode::Verbose => {
                let table = self
                    .network
                    .list_verbose()
                    .map_err(|e| report_failure(self.reporter, "Network scan", e))?;
                self.reporter.print(table.trim_end());
                Ok(Outcome::Done)
            }
            ListMode::Available => {
                let ssids = self
                    .network
                    .list_available()
                    .map_err(|e| report_failure(self.reporter, "Network scan", e))?;
                self.print_section(AVAILABLE_HEADING, ssids.iter(), messages::NO_NETWORK_AVAILABLE)
            }
        }
    }

    fn print_section<'s>(
        &self,
        heading: &str,
        ssids: impl ExactSizeIterator<Item = &'s String>,
        when_empty: &str,
    ) -> Result<Outcome, AppError> {
        if ssids.len() == 0 {
            self.reporter.notify(when_empty);
            return Ok(Outcome::Reported);
        }
        self.reporter.print(&format!("\n{heading}\n"));
        for ssid in ssids {
            self.reporter.print(ssid);
        }
        Ok(Outcome::Done)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockCredentialStore, MockNetworkController, SavedNetworks};
    use crate::infrastructure::report::mock::RecordingReporter;

    #[test]
    fn test_available_lists_ssids_under_heading() {
        // Arrange
        let mut network = MockNetworkController::new();
        network
            .expect_list_available()
            .returning(|| Ok(vec!["Home".into(), "Cafe Wifi".into()]));
        let credentials = MockCredentialStore::new();
        let reporter = RecordingReporter::new();

        // Act
        let outcome = ListNetworksUseCase::new(&network, &credentials, &reporter)
            .execute(ListMode::Available)
            .expect("list");

        // Assert
        assert_eq!(outcome, Outcome::Done);
        assert_eq!(
            reporter.lines(),
            [format!("\n{AVAILABLE_HEADING}\n"), "Home".into(), "Cafe Wifi".into()]
        );
    }

    #[test]
    fn test_available_empty_reports_no_network() {
        let mut network = MockNetworkController::new();
        network.expect_list_available().returning(|| Ok(Vec::new()));
        let credentials = MockCredentialStore::new();
        let reporter = RecordingReporter::new();

        let outcome = ListNetworksUseCase::new(&network, &credentials, &reporter)
            .execute(ListMode::Available)
            .expect("list");

        assert_eq!(outcome, Outcome::Reported);
        assert_eq!(reporter.notices(), [messages::NO_NETWORK_AVAILABLE]);
    }

    #[test]
    fn test_saved_lists_store_keys_without_touching_nmcli() {
        // Arrange: a bare mock panics if any nmcli method is called
        let network = MockNetworkController::new();
        let mut credentials = MockCredentialStore::new();
        credentials.expect_load().returning(|| {
            Ok(SavedNetworks::from([
                ("Office".to_string(), "enc:v1:AAAA".to_string()),
                ("Home".to_string(), "pw".to_string()),
            ]))
        });
        let reporter = RecordingReporter::new();

        // Act
        ListNetworksUseCase::new(&network, &credentials, &reporter)
            .execute(ListMode::Saved)
            .expect("list");

        // Assert: sorted, secrets never printed
        assert_eq!(
            reporter.lines(),
            [format!("\n{SAVED_HEADING}\n"), "Home".into(), "Office".into()]
        );
    }

    #[test]
    fn test_saved_empty_reports_no_saved_networks() {
        let network = MockNetworkController::new();
        let mut credentials = MockCredentialStore::new();
        credentials.expect_load().returning(|| Ok(SavedNetworks::new()));
        let reporter = RecordingReporter::new();

        let outcome = ListNetworksUseCase::new(&network, &credentials, &reporter)
            .execute(ListMode::Saved)
            .expect("list");

        assert_eq!(outcome, Outcome::Reported);
        assert_eq!(reporter.notices(), [messages::NO_SAVED_NETWORKS]);
    }

    #[test]
    fn test_verbose_prints_raw_table() {
        let mut network = MockNetworkController::new();
        network
            .expect_list_verbose()
            .returning(|| Ok("IN-USE  SSID  MODE\n*       Home  Infra\n\n".into()));
        let credentials = MockCredentialStore::new();
        let reporter = RecordingReporter::new();

        ListNetworksUseCase::new(&network, &credentials, &reporter)
            .execute(ListMode::Verbose)
            .expect("list");

        assert_eq!(reporter.lines(), ["IN-USE  SSID  MODE\n*       Home  Infra"]);
    }
}
