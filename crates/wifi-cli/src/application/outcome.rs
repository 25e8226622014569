//! How a command ended, and the error type every use case returns.
//!
//! | Result                      | Meaning                                    | Exit code |
//! |-----------------------------|--------------------------------------------|-----------|
//! | `Ok(Outcome::Done)`         | the requested change happened              | 0         |
//! | `Ok(Outcome::Reported)`     | nothing to do; a notice was shown          | 0         |
//! | `Ok(Outcome::Cancelled)`    | the user left a prompt with Esc / Ctrl+C   | 0         |
//! | `Err(AppError::Usage(_))`   | the request itself was invalid             | 2         |
//! | `Err(_)` (anything else)    | `nmcli` or a store failed                  | 1         |

use thiserror::Error;
use wifi_core::domain::messages;

use super::ports::{NetworkError, PromptError, Reporter, StoreError};

/// Successful end states of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The command did what was asked.
    Done,
    /// A non-fatal condition was reported ("No saved networks", …).
    Reported,
    /// The user interrupted a prompt.
    Cancelled,
}

/// Error type for the application layer.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Prompt(#[from] PromptError),

    /// A request the argument parser could not rule out on its own.
    #[error("{0}")]
    Usage(String),
}

impl AppError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Usage(_) => 2,
            _ => 1,
        }
    }
}

/// Shows the fixed "<action> failed" message and wraps `err` for the exit
/// code.
pub(crate) fn report_failure(reporter: &dyn Reporter, action: &str, err: NetworkError) -> AppError {
    reporter.notify(&messages::command_failed(action));
    AppError::Network(err)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
