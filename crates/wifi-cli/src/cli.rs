//! Command-line surface.
//!
//! ```text
//! wifi on | off
//! wifi status     [-s|--show-password]
//! wifi list       [-v|--verbose | -s|--saved]
//! wifi connect    [-s|--show-password]
//! wifi disconnect [-f|--forget]
//! wifi save
//! wifi forget     [-a|--all | -c|--current]
//! wifi config get <OPTION> | --all
//! wifi config set <OPTION=VALUE>... | --reset
//! ```
//!
//! Mutually exclusive flags and missing `config` arguments are rejected by
//! `clap` before anything runs (exit status 2).

use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser, Subcommand};
use wifi_core::{ConfigOption, OptionAssignment};

use crate::application::dispatch::Command;
use crate::application::list_networks::ListMode;
use crate::application::manage_config::{ConfigChange, ConfigQuery};
use crate::application::manage_saved::ForgetTarget;

/// A CLI tool for basic Wi-Fi management on top of NetworkManager.
#[derive(Debug, Parser)]
#[command(name = "wifi", version)]
pub struct Cli {
    /// Directory holding config.json, saved_networks.json and secret.key.
    ///
    /// Defaults to `$XDG_CONFIG_HOME/wifi` or `~/.config/wifi`.
    #[arg(long, global = true, env = "WIFI_CONFIG_DIR", value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Power on Wi-Fi
    On,
    /// Power off Wi-Fi
    Off,
    /// Get the general status of the Wi-Fi
    Status {
        /// Show the password of the current network (use carefully)
        #[arg(short, long)]
        show_password: bool,
    },
    /// List networks in range, or saved ones
    List {
        /// Show nmcli's full table of available networks
        #[arg(short, long, conflicts_with = "saved")]
        verbose: bool,
        /// List saved networks
        #[arg(short, long)]
        saved: bool,
    },
    /// Display a menu to select a network to connect to
    Connect {
        /// Show the password while typing it
        #[arg(short, long)]
        show_password: bool,
    },
    /// Disconnect from the current network
    Disconnect {
        /// Forget the current network after disconnecting
        #[arg(short, long)]
        forget: bool,
    },
    /// Save the credentials of the current network
    Save,
    /// Delete saved networks (a menu is shown without flags)
    Forget {
        /// Forget every saved network
        #[arg(short, long, conflicts_with = "current")]
        all: bool,
        /// Forget the current network
        #[arg(short, long)]
        current: bool,
    },
    /// Read or change options
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print one option, or all of them
    Get(ConfigGetArgs),
    /// Change options, or restore the defaults
    Set(ConfigSetArgs),
}

#[derive(Debug, Args)]
#[command(group(ArgGroup::new("target").required(true).args(["option", "all"])))]
pub struct ConfigGetArgs {
    /// autosave | notifications | password-encryption | hide-password
    pub option: Option<ConfigOption>,
    /// Print every option
    #[arg(short, long)]
    pub all: bool,
}

#[derive(Debug, Args)]
#[command(group(ArgGroup::new("change").required(true).args(["assignments", "reset"])))]
pub struct ConfigSetArgs {
    /// e.g. `autosave=true hide-password=no`
    #[arg(value_name = "OPTION=VALUE")]
    pub assignments: Vec<OptionAssignment>,
    /// Restore every option to its default
    #[arg(short, long)]
    pub reset: bool,
}

impl From<CliCommand> for Command {
    fn from(cli: CliCommand) -> Self {
        match cli {
            CliCommand::On => Command::On,
            CliCommand::Off => Command::Off,
            CliCommand::Status { show_password } => Command::Status { show_password },
            CliCommand::List { verbose, saved } => Command::List(if saved {
                ListMode::Saved
            } else if verbose {
                ListMode::Verbose
            } else {
                ListMode::Available
            }),
            CliCommand::Connect { show_password } => Command::Connect { show_password },
            CliCommand::Disconnect { forget } => Command::Disconnect { forget },
            CliCommand::Save => Command::Save,
            CliCommand::Forget { all, current } => Command::Forget(if all {
                ForgetTarget::All
            } else if current {
                ForgetTarget::Current
            } else {
                ForgetTarget::Choose
            }),
            CliCommand::Config(ConfigCommand::Get(args)) => Command::ConfigGet(match args.option {
                Some(option) => ConfigQuery::One(option),
                None => ConfigQuery::All,
            }),
            CliCommand::Config(ConfigCommand::Set(args)) => Command::ConfigSet(if args.reset {
                ConfigChange::Reset
            } else {
                ConfigChange::Assign(args.assignments)
            }),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
