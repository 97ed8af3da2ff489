//! Tools for defining strategies that pick the next guess.

use std::fmt::{Debug, Display};

use crate::{constraints::Constraints, words::Word, Result};

pub mod basic;
pub use basic::Basic;

pub mod stupid;
pub use stupid::Stupid;

pub mod weights;
pub use weights::LetterWeights;

/// Trait defining a guessing strategy.
///
/// A strategy is asked for one word per attempt, before the word is
/// submitted to a [`Game`](crate::Game). It sees the attempt number (starting
/// at zero) and everything the game has revealed so far. Games may refuse a
/// word that is not in their dictionary; the strategy is then told about it
/// through [`reject()`](Strategy::reject()) and asked again for the same
/// attempt.
///
/// Strategies keep their own mutable state, such as the candidates they have
/// not tried yet, which only ever shrinks during a game.
/// [`reset()`](Strategy::reset()) restores that state before the next game.
///
/// # How to implement
///
/// Implement [`Display`] with a short name on a single line, then the trait
/// itself. Here is a strategy that always guesses the same word:
///
/// ```rust
/// use std::fmt::Display;
/// use wordle_es::{Constraints, Strategy, Word};
///
/// #[derive(Debug)]
/// struct Stubborn(Word);
///
/// impl Display for Stubborn {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "Stubborn")
///     }
/// }
///
/// impl Strategy for Stubborn {
///     fn next_word(&mut self, _attempt: usize, _constraints: &Constraints) -> wordle_es::Result<Word> {
///         Ok(self.0.clone())
///     }
///
///     fn reset(&mut self) {}
///
///     fn version(&self) -> &'static str {
///         "0.1.0"
///     }
/// }
/// ```
pub trait Strategy: Display + Debug + Send {
    /// Chooses the word to submit for `attempt`.
    ///
    /// Returns [`StrategyError::Exhausted`](crate::StrategyError::Exhausted)
    /// when there is nothing left to offer.
    fn next_word(&mut self, attempt: usize, constraints: &Constraints) -> Result<Word>;

    /// Called when the game refused `word`. The word must not be offered
    /// again in this game.
    fn reject(&mut self, _word: &Word) {}

    /// Restores the state of a fresh strategy.
    fn reset(&mut self);

    /// Provides a version for this strategy.
    ///
    /// Change it whenever the logic of the strategy changes so that
    /// performance records stay comparable.
    fn version(&self) -> &'static str;
}
