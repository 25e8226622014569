//! Output adapters implementing [`Reporter`].
//!
//! - [`ConsoleReporter`] writes everything to stdout.
//! - [`DesktopReporter`] sends outcome messages as desktop notifications
//!   (through `notify-rust`) and keeps data lines on stdout.  When the
//!   notification daemon is unreachable the message is printed instead, so
//!   nothing is ever lost.
//!
//! [`reporter_for`] picks one from the `notifications` option.

pub mod mock;

use notify_rust::Notification;
use tracing::{debug, warn};
use wifi_core::Settings;

use crate::application::ports::Reporter;

/// Application name shown by the notification daemon.
const APP_NAME: &str = "wifi";
/// Notification title; the message itself goes in the body.
const SUMMARY: &str = "Wi-Fi";

/// Plain stdout reporter.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn notify(&self, message: &str) {
        println!("{message}");
    }

    fn print(&self, line: &str) {
        println!("{line}");
    }
}

/// Desktop-notification reporter with stdout fallback.
#[derive(Debug, Default, Clone, Copy)]
pub struct DesktopReporter {
    console: ConsoleReporter,
}

impl Reporter for DesktopReporter {
    fn notify(&self, message: &str) {
        match Notification::new()
            .appname(APP_NAME)
            .summary(SUMMARY)
            .body(message)
            .show()
        {
            Ok(_) => debug!(message, "desktop notification sent"),
            Err(e) => {
                warn!(error = %e, "desktop notification failed, printing instead");
                self.console.notify(message);
            }
        }
    }

    fn print(&self, line: &str) {
        self.console.print(line);
    }
}

/// Returns the reporter matching the user's `notifications` option.
pub fn reporter_for(settings: &Settings) -> Box<dyn Reporter> {
    if settings.notifications {
        Box::new(DesktopReporter::default())
    } else {
        Box::new(ConsoleReporter)
    }
}
