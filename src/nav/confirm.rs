//! Yes/no confirmation prompts.

use parking_lot::Mutex;
use std::collections::VecDeque;

/// A synchronous yes/no prompt, asked before destructive actions.
pub trait Confirm: Send + Sync {
    /// Shows `message` and returns true if the user agreed.
    fn confirm(&self, message: &str) -> bool;
}

/// Agrees to everything. Used when the user pre-approved, e.g. `rm --yes`.
#[derive(Debug, Default, Clone, Copy)]
pub struct AlwaysConfirm;

impl Confirm for AlwaysConfirm {
    fn confirm(&self, _message: &str) -> bool {
        true
    }
}

/// Answers from a fixed script and records every prompt.
///
/// Once the script runs out, the fallback answer is used.
#[derive(Debug)]
pub struct ScriptedConfirm {
    answers: Mutex<VecDeque<bool>>,
    fallback: bool,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedConfirm {
    /// Answers `answers` in order, then `fallback`.
    pub fn new(answers: impl IntoIterator<Item = bool>, fallback: bool) -> Self {
        Self {
            answers: Mutex::new(answers.into_iter().collect()),
            fallback,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Always answers `answer`.
    pub fn always(answer: bool) -> Self {
        Self::new([], answer)
    }

    /// Returns the prompts shown so far.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().clone()
    }

    /// Returns how many prompts were shown.
    pub fn prompt_count(&self) -> usize {
        self.prompts.lock().len()
    }
}

impl Confirm for ScriptedConfirm {
    fn confirm(&self, message: &str) -> bool {
        self.prompts.lock().push(message.to_string());
        self.answers.lock().pop_front().unwrap_or(self.fallback)
    }
}
