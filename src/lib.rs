#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]

// Required to rename serde
#[cfg(feature = "serde")]
extern crate serde_crate as serde;

use thiserror::Error;

pub mod normalize;
pub use normalize::normalize;

pub mod words;
pub use words::{Dictionary, Word, WordList, WordSource};

pub mod feedback;
pub use feedback::{Row, Verdict};

pub mod constraints;
pub use constraints::Constraints;

pub mod strategy;
pub use strategy::Strategy;

pub mod game;
pub use game::{Game, Submission};

pub mod harness;
pub use harness::Harness;

pub mod perf;
pub use perf::Perf;

#[cfg(test)]
mod mock;

/// Number of letters in every Wordle word.
pub const WORD_LEN: usize = 5;

/// Number of attempts a game allows before it is lost.
pub const MAX_ATTEMPTS: usize = 6;

/// Convenience alias for results produced by this crate.
pub type Result<T, E = WordleError> = std::result::Result<T, E>;

/// The errors that `wordle_es` can produce.
#[derive(Debug, Error)]
pub enum WordleError {
    #[error("invalid word")]
    Word {
        #[from]
        kind: WordError,
    },

    #[error("game encountered error")]
    Game {
        #[from]
        kind: GameError,
    },

    #[error("strategy encountered error")]
    Strategy {
        #[from]
        kind: StrategyError,
    },

    #[error("the test harness encountered an error")]
    Harness {
        #[from]
        kind: HarnessError,
    },

    #[error("general IO error")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "serde")]
    #[error("trouble serializing or deserializing a word list")]
    Serde(#[from] serde_json::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WordError {
    /// The string does not have exactly five letters.
    #[error("the string \"{0}\" does not have five letters")]
    WrongLength(String),

    /// The string contains something other than letters.
    #[error("the string \"{0}\" contains a non-alphabetic character")]
    NotAlphabetic(String),
}

/// Errors raised while driving a [`Game`].
#[derive(Debug, Error)]
pub enum GameError {
    #[error("the game has not been started")]
    NotStarted,

    #[error("the game has already been started")]
    AlreadyStarted,

    /// An attempt was submitted to a game that already ended.
    #[error("the game is already finished")]
    Finished,

    #[error("the game cannot be closed before it is finished")]
    NotFinished,

    #[error("the game has already been closed")]
    Closed,

    /// Feedback from a live board could not be read as a verdict.
    #[error("unrecognized verdict token \"{0}\"")]
    UnrecognizedVerdict(String),

    #[error("the live backend failed")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StrategyError {
    /// Every candidate word has been used up or filtered out.
    #[error("the strategy ran out of candidate words")]
    Exhausted,

    /// A word the game already refused was offered again.
    #[error("the strategy offered \"{0}\" again after it was rejected")]
    Repeated(Word),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HarnessError {
    #[error("no strategies have been added to the harness")]
    NoStrategiesAdded,

    #[error("no puzzles have been added to the harness")]
    NoPuzzles,
}
