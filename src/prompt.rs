//! User confirmation.
//! The materializer asks before destroying an existing directory; the
//! decision comes from whoever implements [`Prompter`].

use crate::error::{Error, Result};
use dialoguer::Confirm;

/// Answers yes/no questions on behalf of the user.
pub trait Prompter {
    /// Asks `prompt`, returning `true` without asking when `skip` is set.
    fn confirm(&self, skip: bool, prompt: String) -> Result<bool>;
}

/// Interactive terminal prompter. Defaults to "no".
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn confirm(&self, skip: bool, prompt: String) -> Result<bool> {
        if skip {
            return Ok(true);
        }
        Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))
    }
}

/// Gives the same answer to every question, for non-interactive runs.
#[derive(Debug, Clone, Copy)]
pub struct FixedPrompter(pub bool);

impl Prompter for FixedPrompter {
    fn confirm(&self, skip: bool, _prompt: String) -> Result<bool> {
        Ok(skip || self.0)
    }
}
