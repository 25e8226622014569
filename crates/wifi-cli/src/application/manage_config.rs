//! `config get` and `config set`.

use wifi_core::domain::messages;
use wifi_core::{ConfigOption, OptionAssignment};

use super::outcome::{AppError, Outcome};
use super::ports::{Reporter, SettingsStore};

/// What `config get` prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigQuery {
    /// `name: value` for every option.
    All,
    /// The bare value of one option, for scripts.
    One(ConfigOption),
}

/// What `config set` changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigChange {
    /// Restore every option to its default.
    Reset,
    /// Apply `option=value` pairs in order.
    Assign(Vec<OptionAssignment>),
}

pub struct ManageConfigUseCase<'a> {
    store: &'a dyn SettingsStore,
    reporter: &'a dyn Reporter,
}

impl<'a> ManageConfigUseCase<'a> {
    pub fn new(store: &'a dyn SettingsStore, reporter: &'a dyn Reporter) -> Self {
        Self { store, reporter }
    }

    pub fn get(&self, query: ConfigQuery) -> Result<Outcome, AppError> {
        let settings = self.store.load()?;
        match query {
            ConfigQuery::All => {
                for (option, value) in settings.entries() {
                    self.reporter.print(&format!("{option}: {value}"));
                }
            }
            ConfigQuery::One(option) => self.reporter.print(&settings.get(option).to_string()),
        }
        Ok(Outcome::Done)
    }

    pub fn set(&self, change: ConfigChange) -> Result<Outcome, AppError> {
        match change {
            ConfigChange::Reset => {
                self.store.reset()?;
                self.reporter.notify(messages::CONFIG_RESET);
            }
            ConfigChange::Assign(assignments) if assignments.is_empty() => {
                return Err(AppError::Usage(
                    "config set needs at least one <option>=<value>".into(),
                ));
            }
            ConfigChange::Assign(assignments) => {
                let mut settings = self.store.load()?;
                settings.apply(&assignments);
                self.store.save(&settings)?;
                self.reporter.notify(messages::CONFIG_UPDATED);
            }
        }
        Ok(Outcome::Done)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
