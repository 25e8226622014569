//! `wifi`: entry point.
//!
//! # What happens at startup
//!
//! 1. `tracing_subscriber` is initialised, writing to stderr so stdout only
//!    carries the tool's output.  `RUST_LOG` controls the level (default
//!    `warn`; `RUST_LOG=debug` shows every `nmcli` command, passwords
//!    redacted).
//! 2. Arguments are parsed with `clap`; usage errors exit with status 2.
//!    The Ctrl+C handler is installed so an interrupted prompt restores the
//!    terminal and exits with status 0.
//! 3. The configuration directory is resolved and `config.json` and
//!    `saved_networks.json` are created with defaults if missing.
//! 4. The production adapters are wired into a [`Dispatcher`] and the
//!    command runs.
//!
//! # Exit status
//!
//! | Status | Meaning                                                     |
//! |--------|-------------------------------------------------------------|
//! | 0      | success, a reported non-fatal condition, or a cancelled prompt |
//! | 1      | `nmcli` or a file operation failed                          |
//! | 2      | usage error                                                 |

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, error, warn};
use tracing_subscriber::EnvFilter;

use wifi_cli::application::dispatch::{Dispatcher, Services};
use wifi_cli::application::ports::{CredentialStore, SettingsStore};
use wifi_cli::cli::Cli;
use wifi_cli::infrastructure::nmcli::process::ProcessRunner;
use wifi_cli::infrastructure::nmcli::NmcliController;
use wifi_cli::infrastructure::prompt::interrupt::{self, TerminalState};
use wifi_cli::infrastructure::prompt::TerminalPrompter;
use wifi_cli::infrastructure::report::reporter_for;
use wifi_cli::infrastructure::storage::cipher::KeyFile;
use wifi_cli::infrastructure::storage::credentials::JsonCredentialStore;
use wifi_cli::infrastructure::storage::paths::StoragePaths;
use wifi_cli::infrastructure::storage::settings::JsonSettingsStore;

fn main() -> anyhow::Result<ExitCode> {
    // ── Logging setup ─────────────────────────────────────────────────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // ── Ctrl-C handler ────────────────────────────────────────────────────────
    if let Err(e) = interrupt::install(TerminalState::capture()) {
        warn!(error = %e, "Ctrl+C handler not installed");
    }

    // ── Storage ───────────────────────────────────────────────────────────────
    let paths = match cli.config_dir {
        Some(dir) => StoragePaths::in_dir(dir),
        None => StoragePaths::resolve().context("failed to locate the configuration directory")?,
    };
    debug!(dir = %paths.dir().display(), "using configuration directory");

    let settings_store = JsonSettingsStore::new(paths.settings_file());
    let settings = settings_store
        .load()
        .with_context(|| format!("failed to load {}", paths.settings_file().display()))?;
    let credentials = JsonCredentialStore::new(
        paths.credentials_file(),
        KeyFile::new(paths.key_file()),
        settings.password_encryption,
    );
    credentials
        .load()
        .with_context(|| format!("failed to load {}", paths.credentials_file().display()))?;

    // ── Adapters ──────────────────────────────────────────────────────────────
    let network = NmcliController::new(ProcessRunner, std::env::var("LANG").unwrap_or_default());
    let prompter = TerminalPrompter::new();
    let reporter = reporter_for(&settings);

    let dispatcher = Dispatcher::new(Services {
        network: &network,
        credentials: &credentials,
        settings_store: &settings_store,
        prompter: &prompter,
        reporter: reporter.as_ref(),
        settings,
    });

    match dispatcher.run(cli.command.into()) {
        Ok(outcome) => {
            debug!(?outcome, "command finished");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            error!(error = %e, "command failed");
            Ok(ExitCode::from(e.exit_code()))
        }
    }
}
