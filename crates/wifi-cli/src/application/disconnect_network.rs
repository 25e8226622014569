//! `disconnect [--forget]`.

use tracing::warn;
use wifi_core::domain::device::connected_wifi;
use wifi_core::domain::messages;

use super::manage_saved::remove_saved;
use super::outcome::{report_failure, AppError, Outcome};
use super::ports::{CredentialStore, NetworkController, Reporter};

pub struct DisconnectNetworkUseCase<'a> {
    network: &'a dyn NetworkController,
    credentials: &'a dyn CredentialStore,
    reporter: &'a dyn Reporter,
}

impl<'a> DisconnectNetworkUseCase<'a> {
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

    /// Disconnects the connected Wi-Fi device.  With `forget`, the network's
    /// saved credentials are removed afterwards; its SSID is read *before*
    /// disconnecting, while it can still be queried.
    pub fn execute(&self, forget: bool) -> Result<Outcome, AppError> {
        let rows = match self.network.device_status() {
            Ok(rows) => rows,
            Err(e) => {
                warn!(error = %e, "device status unavailable, treating as offline");
                self.reporter.notify(&messages::no_current_network());
                return Ok(Outcome::Reported);
            }
        };
        let Some(device) = connected_wifi(&rows) else {
            self.reporter.notify(&messages::no_current_network());
            return Ok(Outcome::Reported);
        };

        let current_ssid = if forget {
            self.network
                .current_connection()
                .map_err(|e| report_failure(self.reporter, "Reading the current network", e))?
                .map(|c| c.ssid)
        } else {
            None
        };

        self.network
            .disconnect(&device.device)
            .map_err(|e| report_failure(self.reporter, "Disconnect", e))?;
        self.reporter.notify(&messages::disconnected());

        if forget {
            match current_ssid {
                Some(ssid) => return remove_saved(self.credentials, self.reporter, &ssid),
                None => warn!(device = %device.device, "no active Wi-Fi profile found, nothing to forget"),
            }
        }
        Ok(Outcome::Done)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use wifi_core::{CurrentConnection, DeviceStatus};

    use super::*;
    use crate::application::ports::{MockNetworkController, NetworkError};
    use crate::infrastructure::report::mock::RecordingReporter;
    use crate::infrastructure::storage::memory::MemoryCredentialStore;

    fn with_devices(rows: Vec<DeviceStatus>) -> MockNetworkController {
        let mut network = MockNetworkController::new();
        network
            .expect_device_status()
            .returning(move || Ok(rows.clone()));
        network
    }

    #[test]
    fn test_disconnects_the_connected_wifi_device() {
        // Arrange
        let mut network = with_devices(vec![
            DeviceStatus::new("eth0", "ethernet", "connected"),
            DeviceStatus::new("wlp2s0", "wifi", "connected"),
        ]);
        network
            .expect_disconnect()
            .withf(|device: &str| device == "wlp2s0")
            .times(1)
            .returning(|_| Ok(()));
        let credentials = MemoryCredentialStore::new();
        let reporter = RecordingReporter::new();

        // Act
        let outcome = DisconnectNetworkUseCase::new(&network, &credentials, &reporter)
            .execute(false)
            .expect("disconnect");

        // Assert
        assert_eq!(outcome, Outcome::Done);
        assert_eq!(reporter.notices(), [messages::disconnected()]);
    }

    #[test]
    fn test_no_connected_wifi_reports_offline() {
        let network = with_devices(vec![DeviceStatus::new("wlp2s0", "wifi", "disconnected")]);
        let credentials = MemoryCredentialStore::new();
        let reporter = RecordingReporter::new();

        let outcome = DisconnectNetworkUseCase::new(&network, &credentials, &reporter)
            .execute(false)
            .expect("disconnect");

        assert_eq!(outcome, Outcome::Reported);
        assert_eq!(reporter.notices(), [messages::no_current_network()]);
    }

    #[test]
    fn test_status_query_failure_reports_offline() {
        let mut network = MockNetworkController::new();
        network.expect_device_status().returning(|| {
            Err(NetworkError::CommandFailed {
                command: "nmcli -t -f DEVICE,TYPE,STATE device".into(),
                code: Some(8),
                stderr: String::new(),
            })
        });
        let credentials = MemoryCredentialStore::new();
        let reporter = RecordingReporter::new();

        let outcome = DisconnectNetworkUseCase::new(&network, &credentials, &reporter)
            .execute(true)
            .expect("disconnect");

        assert_eq!(outcome, Outcome::Reported);
    }

    #[test]
    fn test_forget_removes_credentials_read_before_disconnecting() {
        // Arrange
        let mut network = with_devices(vec![DeviceStatus::new("wlan0", "wifi", "connected")]);
        let mut seq = mockall::Sequence::new();
        network
            .expect_current_connection()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| {
                Ok(Some(CurrentConnection {
                    ssid: "Home".into(),
                    password: None,
                }))
            });
        network
            .expect_disconnect()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        let credentials = MemoryCredentialStore::with_entries([("Home", "pw")]);
        let reporter = RecordingReporter::new();

        // Act
        DisconnectNetworkUseCase::new(&network, &credentials, &reporter)
            .execute(true)
            .expect("disconnect");

        // Assert
        assert!(credentials.snapshot().is_empty());
        assert_eq!(
            reporter.notices(),
            [messages::disconnected(), messages::forgotten("Home")]
        );
    }

    #[test]
    fn test_forget_unsaved_network_reports_no_credentials() {
        let mut network = with_devices(vec![DeviceStatus::new("wlan0", "wifi", "connected")]);
        network.expect_current_connection().returning(|| {
            Ok(Some(CurrentConnection {
                ssid: "Hotel".into(),
                password: None,
            }))
        });
        network.expect_disconnect().returning(|_| Ok(()));
        let credentials = MemoryCredentialStore::new();
        let reporter = RecordingReporter::new();

        let outcome = DisconnectNetworkUseCase::new(&network, &credentials, &reporter)
            .execute(true)
            .expect("disconnect");

        assert_eq!(outcome, Outcome::Reported);
        assert!(reporter.was_notified(&messages::no_credentials("Hotel")));
    }
}
