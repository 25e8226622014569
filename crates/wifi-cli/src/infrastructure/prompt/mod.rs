//! Terminal prompts implementing [`Prompter`] with `dialoguer`.
//!
//! Pressing Esc (or `q`) in a menu returns `Ok(None)`; the use case then ends
//! quietly with
//! [`Outcome::Cancelled`](crate::application::outcome::Outcome::Cancelled).
//!
//! Ctrl+C does not come back through these methods: the terminal library
//! turns it into `SIGINT`.  The handler from [`interrupt::install`] catches
//! that signal, restores the terminal and exits with status 0.

pub mod interrupt;
pub mod mock;

use std::io;

use dialoguer::{theme::ColorfulTheme, Confirm, Input, Password, Select};

use crate::application::ports::{PromptError, Prompter};

/// Interactive prompter drawing on stderr.
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn choose(&self, prompt: &str, items: &[String]) -> Result<Option<usize>, PromptError> {
        cancellable(
            Select::with_theme(&self.theme)
                .with_prompt(prompt)
                .items(items)
                .default(0)
                .interact_opt(),
        )
    }

    fn password(&self, prompt: &str, masked: bool) -> Result<Option<String>, PromptError> {
        let entered = if masked {
            Password::with_theme(&self.theme)
                .with_prompt(prompt)
                .allow_empty_password(true)
                .interact()
        } else {
            Input::<String>::with_theme(&self.theme)
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()
        };
        cancellable(entered.map(Some))
    }

    fn confirm(&self, prompt: &str) -> Result<Option<bool>, PromptError> {
        cancellable(
            Confirm::with_theme(&self.theme)
                .with_prompt(prompt)
                .default(true)
                .interact_opt(),
        )
    }
}

/// Maps an interrupted read (`EINTR`) to `Ok(None)` and any other terminal
/// error to [`PromptError::Terminal`].
fn cancellable<T>(result: dialoguer::Result<Option<T>>) -> Result<Option<T>, PromptError> {
    match result {
        Ok(answer) => Ok(answer),
        Err(dialoguer::Error::IO(e)) if e.kind() == io::ErrorKind::Interrupted => {
            // Select hides the cursor and bails out before showing it again.
            let _ = console::Term::stderr().show_cursor();
            Ok(None)
        }
        Err(dialoguer::Error::IO(e)) => Err(PromptError::Terminal(e)),
    }
}
