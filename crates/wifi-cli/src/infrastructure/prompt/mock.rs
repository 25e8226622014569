//! Scripted prompter for tests.
//!
//! Answers are queued up front and consumed in order.  A prompt of the wrong
//! kind, or one with no answer left, panics so the test fails loudly.

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::application::ports::{PromptError, Prompter};

/// One scripted answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Pick the item with this label from a `choose` menu.
    Pick(String),
    /// Type this into a `password` prompt.
    Text(String),
    /// Answer a `confirm` prompt.
    Confirm(bool),
    /// Press Esc / Ctrl+C at whatever prompt comes next.
    Cancel,
}

/// A [`Prompter`] replaying queued [`Answer`]s.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: Mutex<VecDeque<Answer>>,
    asked: Mutex<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: Mutex::new(answers.into_iter().collect()),
            asked: Mutex::new(Vec::new()),
        }
    }

    /// Every prompt text shown so far.
    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().expect("lock poisoned").clone()
    }

    /// Number of answers not consumed yet.
    pub fn remaining(&self) -> usize {
        self.answers.lock().expect("lock poisoned").len()
    }

    fn next(&self, prompt: &str) -> Answer {
        self.asked.lock().expect("lock poisoned").push(prompt.to_string());
        self.answers
            .lock()
            .expect("lock poisoned")
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted answer for prompt {prompt:?}"))
    }
}

impl Prompter for ScriptedPrompter {
    fn choose(&self, prompt: &str, items: &[String]) -> Result<Option<usize>, PromptError> {
        match self.next(prompt) {
            Answer::Pick(label) => match items.iter().position(|i| *i == label) {
                Some(index) => Ok(Some(index)),
                None => panic!("{label:?} is not among the menu items {items:?}"),
            },
            Answer::Cancel => Ok(None),
            other => panic!("expected a menu answer for {prompt:?}, got {other:?}"),
        }
    }

    fn password(&self, prompt: &str, _masked: bool) -> Result<Option<String>, PromptError> {
        match self.next(prompt) {
            Answer::Text(text) => Ok(Some(text)),
            Answer::Cancel => Ok(None),
            other => panic!("expected a text answer for {prompt:?}, got {other:?}"),
        }
    }

    fn confirm(&self, prompt: &str) -> Result<Option<bool>, PromptError> {
        match self.next(prompt) {
            Answer::Confirm(yes) => Ok(Some(yes)),
            Answer::Cancel => Ok(None),
            other => panic!("expected a yes/no answer for {prompt:?}, got {other:?}"),
        }
    }
}
