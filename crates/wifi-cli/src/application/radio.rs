//! `on`, `off` and `status`.
//!
//! `status` looks at the first device of type `wifi` only:
//!
//! | Device state              | Printed                                  |
//! |---------------------------|------------------------------------------|
//! | `unavailable`             | `Off`                                    |
//! | contains `disconnected`   | `Disconnected`                           |
//! | anything else             | `Connected`, `SSID: …` (+ `Password: …`) |

use wifi_core::domain::device::first_wifi;
use wifi_core::domain::messages;
use wifi_core::DeviceState;

use super::outcome::{report_failure, AppError, Outcome};
use super::ports::{NetworkController, Reporter};

/// Radio power and status queries.
pub struct RadioUseCase<'a> {
    network: &'a dyn NetworkController,
    reporter: &'a dyn Reporter,
}

impl<'a> RadioUseCase<'a> {
    pub fn new(network: &'a dyn NetworkController, reporter: &'a dyn Reporter) -> Self {
        Self { network, reporter }
    }

    /// Switches the radio on or off and reports the fixed message.
    pub fn power(&self, on: bool) -> Result<Outcome, AppError> {
        let (result, action) = if on {
            (self.network.power_on(), "Wi-Fi on")
        } else {
            (self.network.power_off(), "Wi-Fi off")
        };
        result.map_err(|e| report_failure(self.reporter, action, e))?;
        self.reporter.notify(&if on {
            messages::radio_on()
        } else {
            messages::radio_off()
        });
        Ok(Outcome::Done)
    }

    /// Prints the state of the Wi-Fi device.  The password of the current
    /// network is only printed when `show_password` is set.
    pub fn status(&self, show_password: bool) -> Result<Outcome, AppError> {
        let rows = self
            .network
            .device_status()
            .map_err(|e| report_failure(self.reporter, "Status query", e))?;
        let Some(wifi) = first_wifi(&rows) else {
            self.reporter.notify(messages::NO_WIFI_DEVICE);
            return Ok(Outcome::Reported);
        };

        match wifi.classify() {
            DeviceState::Off => self.reporter.print("Off"),
            DeviceState::Disconnected => self.reporter.print("Disconnected"),
            DeviceState::Connected => {
                let current = self
                    .network
                    .current_connection()
                    .map_err(|e| report_failure(self.reporter, "Status query", e))?;
                self.reporter.print("Connected");
                if let Some(current) = current {
                    self.reporter.print(&format!("SSID: {}", current.ssid));
                    if show_password {
                        let password = current.password.as_deref().unwrap_or("unavailable");
                        self.reporter.print(&format!("Password: {password}"));
                    }
                }
            }
        }
        Ok(Outcome::Done)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
