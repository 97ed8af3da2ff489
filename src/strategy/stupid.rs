//! A single bad strategy to compare the others against.

use std::{fmt::Display, sync::Arc};

use crate::{
    constraints::Constraints,
    strategy::Strategy,
    words::{Word, WordSource},
    Result, StrategyError,
};

/// A Wordle strategy that guesses the words of its list in order, ignoring
/// every piece of feedback.
///
/// It exists as a baseline for the [test harness](crate::Harness) and to
/// show how [`Strategy`] is implemented.
#[derive(Debug, Clone)]
pub struct Stupid {
    words: Arc<[Word]>,
    next: usize,
}

impl Stupid {
    pub fn new(words: impl Into<Arc<[Word]>>) -> Self {
        Stupid {
            words: words.into(),
            next: 0,
        }
    }

    pub fn from_source(source: &impl WordSource) -> Result<Self> {
        Ok(Self::new(source.get_words()?))
    }
}

impl Strategy for Stupid {
    fn next_word(&mut self, _attempt: usize, _constraints: &Constraints) -> Result<Word> {
        let word = self
            .words
            .get(self.next)
            .cloned()
            .ok_or(StrategyError::Exhausted)?;
        self.next += 1;
        Ok(word)
    }

    fn reset(&mut self) {
        self.next = 0;
    }

    fn version(&self) -> &'static str {
        "0.10"
    }
}

impl Display for Stupid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "wordle_es::Stupid")
    }
}
