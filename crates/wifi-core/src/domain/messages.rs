//! Fixed messages shown on the terminal or in desktop notifications.
//!
//! The leading glyphs are Nerd Font icons; terminals without a patched font
//! show a replacement box, which is harmless.

pub const EMOTICON_ON: &str = "(¬‿¬ )";
pub const EMOTICON_OFF: &str = "(x_x)";
pub const EMOTICON_CONNECTED: &str = "(*^ -^*)";
pub const EMOTICON_FAILED: &str = "(o_O)!";
pub const EMOTICON_DISCONNECTED: &str = "(￢_￢)";
pub const EMOTICON_OFFLINE: &str = "(^_~)";

pub fn radio_on() -> String {
    format!("\u{f1eb}  Wi-Fi On {EMOTICON_ON}")
}

pub fn radio_off() -> String {
    format!("\u{f05aa}  Wi-Fi Off {EMOTICON_OFF}")
}

pub fn connected(ssid: &str) -> String {
    format!("\u{f16bd}  Connected to \"{ssid}\" successfully {EMOTICON_CONNECTED}")
}

pub fn connection_failed() -> String {
    format!("\u{f16c5}  Connection failed {EMOTICON_FAILED}. Try again")
}

pub fn disconnected() -> String {
    format!("\u{f16c5}  Disconnected {EMOTICON_DISCONNECTED}")
}

pub fn no_current_network() -> String {
    format!("No current network detected; You are offline {EMOTICON_OFFLINE}")
}

pub const NO_NETWORK_AVAILABLE: &str = "No network available";
pub const NO_SAVED_NETWORKS: &str = "No saved networks";
pub const NO_WIFI_DEVICE: &str = "No Wi-Fi device found";
pub const NETWORK_SAVED: &str = "Network saved successfully";
pub const ALL_NETWORKS_FORGOTTEN: &str = "All saved networks forgotten";
pub const CONFIG_RESET: &str = "Configuration restored to defaults";
pub const CONFIG_UPDATED: &str = "Configuration updated";

pub fn no_credentials(ssid: &str) -> String {
    format!("No credentials found for {ssid}")
}

pub fn forgotten(ssid: &str) -> String {
    format!("Network '{ssid}' forgotten successfully")
}

pub fn connecting(ssid: &str) -> String {
    format!("Connecting to '{ssid}'")
}

pub fn command_failed(action: &str) -> String {
    format!("{action} failed {EMOTICON_FAILED}")
}
