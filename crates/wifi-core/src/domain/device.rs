//! Device and connection snapshots derived from `nmcli` output.
//!
//! These are ephemeral: they are rebuilt on every invocation and never
//! persisted.

/// The `TYPE` column value NetworkManager uses for Wi-Fi devices.
pub const WIFI_DEVICE_TYPE: &str = "wifi";

/// How the `status` command classifies a device's `STATE` column.
///
/// NetworkManager reports states such as `connected`, `disconnected`,
/// `unavailable`, `unmanaged`, or `connecting (getting IP configuration)`.
/// Only three outcomes matter to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceState {
    /// The radio is switched off (`unavailable`).
    Off,
    /// The radio is on but not associated with any network.
    Disconnected,
    /// Anything else: associated, or on its way there.
    Connected,
}

impl DeviceState {
    /// Classifies a raw `STATE` value.
    ///
    /// `unavailable` is matched exactly; any state that merely *contains*
    /// `disconnected` (for example `disconnected (externally)`) counts as
    /// disconnected; everything else is treated as connected.
    pub fn classify(raw: &str) -> Self {
        let state = raw.trim();
        if state == "unavailable" {
            Self::Off
        } else if state.contains("disconnected") {
            Self::Disconnected
        } else {
            Self::Connected
        }
    }
}

/// One row of `nmcli -t -f DEVICE,TYPE,STATE device`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceStatus {
    /// Interface name, e.g. `wlan0`.
    pub device: String,
    /// Device type, e.g. `wifi`, `ethernet`, `loopback`.
    pub kind: String,
    /// Raw state string as printed by NetworkManager.
    pub state: String,
}

impl DeviceStatus {
    pub fn new(device: impl Into<String>, kind: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            device: device.into(),
            kind: kind.into(),
            state: state.into(),
        }
    }

    /// `true` for Wi-Fi devices.
    pub fn is_wifi(&self) -> bool {
        self.kind == WIFI_DEVICE_TYPE
    }

    /// `true` when the device is fully associated.
    ///
    /// Stricter than [`DeviceState::classify`]: a device that is still
    /// `connecting` is not a disconnect target.
    pub fn is_connected(&self) -> bool {
        self.state == "connected" || self.state.starts_with("connected ")
    }

    pub fn classify(&self) -> DeviceState {
        DeviceState::classify(&self.state)
    }
}

/// Returns the first Wi-Fi device in `rows`, if any.
pub fn first_wifi(rows: &[DeviceStatus]) -> Option<&DeviceStatus> {
    rows.iter().find(|d| d.is_wifi())
}

/// Returns the first Wi-Fi device that is fully connected, if any.
pub fn connected_wifi(rows: &[DeviceStatus]) -> Option<&DeviceStatus> {
    rows.iter().find(|d| d.is_wifi() && d.is_connected())
}

/// The network the machine is currently associated with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentConnection {
    pub ssid: String,
    /// `None` when the secret could not be read (e.g. insufficient
    /// privileges); `Some("")` for open networks.
    pub password: Option<String>,
}

// ── Tests ─────────────────────────────────────────────────────────────────────
