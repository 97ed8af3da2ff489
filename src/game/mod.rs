//! Playing a single game, simulated or against a live board.
//!
//! Both kinds of game share the same life cycle:
//!
//! ```text
//! NotStarted --play()--> InProgress --new_attempt()...--> Finished(Won | Lost) --close()--> Closed
//! ```
//!
//! Every accepted attempt is graded, recorded into the game's
//! [`Constraints`] and counted. A game is won as soon as a row is entirely
//! [`Correct`](crate::Verdict::Correct) and lost once [`MAX_ATTEMPTS`] rows
//! have been played. A word the game does not know is
//! [`Rejected`](Submission::Rejected) without touching any of that.

use log::info;

use crate::{
    constraints::Constraints,
    feedback::{is_solved, Row},
    words::Word,
    GameError, Result, MAX_ATTEMPTS,
};

pub mod live;
pub use live::{Backend, Feedback, LiveGame};

pub mod simulated;
pub use simulated::SimulatedGame;

pub mod transcript;
pub use transcript::Transcript;

/// How a finished game ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    Won,
    Lost,
}

/// Where a game is in its life cycle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum State {
    #[default]
    NotStarted,
    InProgress,
    Finished(Outcome),
    Closed(Outcome),
}

impl State {
    /// The outcome of the game, once it has one.
    pub fn outcome(self) -> Option<Outcome> {
        match self {
            State::Finished(outcome) | State::Closed(outcome) => Some(outcome),
            State::NotStarted | State::InProgress => None,
        }
    }
}

/// The result of submitting a word.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    /// The word was played and graded.
    Accepted(Row),

    /// The game does not know the word. Nothing changed and the attempt is
    /// still available.
    Rejected,
}

/// A game of Wordle that words can be submitted to.
///
/// See the [module documentation](self) for the life cycle every
/// implementation follows.
pub trait Game {
    /// Starts the game, acquiring whatever it needs to run.
    fn play(&mut self) -> Result<()>;

    /// Submits `word` as the next attempt.
    ///
    /// Fails if the game is not in progress, or if its feedback cannot be
    /// read.
    fn new_attempt(&mut self, word: &Word) -> Result<Submission>;

    fn state(&self) -> State;

    /// Number of accepted attempts so far.
    fn attempts(&self) -> usize;

    /// Everything the accepted attempts revealed about the solution.
    fn constraints(&self) -> &Constraints;

    /// The solution, if the game knows or has revealed it.
    fn solution(&self) -> Option<&Word>;

    /// Ends a finished game, releasing its resources, and returns the share
    /// transcript. Once it has succeeded, the game stays closed. A failure
    /// leaves the game finished so that closing can be tried again.
    fn close(&mut self) -> Result<Transcript>;

    fn is_finished(&self) -> bool {
        self.state().outcome().is_some()
    }

    fn is_successful(&self) -> bool {
        self.state().outcome() == Some(Outcome::Won)
    }
}

/// The bookkeeping shared by every kind of game.
#[derive(Clone, Debug, Default)]
pub(crate) struct Board {
    state: State,
    constraints: Constraints,
    attempts: Vec<(Word, Row)>,
}

impl Board {
    pub(crate) fn ensure_not_started(&self) -> Result<(), GameError> {
        match self.state {
            State::NotStarted => Ok(()),
            _ => Err(GameError::AlreadyStarted),
        }
    }

    pub(crate) fn start(&mut self) -> Result<(), GameError> {
        self.ensure_not_started()?;
        self.state = State::InProgress;
        Ok(())
    }

    pub(crate) fn ensure_in_progress(&self) -> Result<(), GameError> {
        match self.state {
            State::InProgress => Ok(()),
            State::NotStarted => Err(GameError::NotStarted),
            State::Finished(_) => Err(GameError::Finished),
            State::Closed(_) => Err(GameError::Closed),
        }
    }

    /// Records a graded attempt and moves to `Finished` when it ends the game.
    pub(crate) fn apply(&mut self, word: Word, row: Row) {
        self.constraints.record(&word, &row);
        self.attempts.push((word, row));

        let outcome = if is_solved(&row) {
            Some(Outcome::Won)
        } else if self.attempts.len() >= MAX_ATTEMPTS {
            Some(Outcome::Lost)
        } else {
            None
        };

        if let Some(outcome) = outcome {
            info!("game {:?} after {} attempts", outcome, self.attempts.len());
            self.state = State::Finished(outcome);
        }
    }

    /// The outcome of a finished game that has not been closed yet.
    pub(crate) fn ensure_finished(&self) -> Result<Outcome, GameError> {
        match self.state {
            State::Finished(outcome) => Ok(outcome),
            State::Closed(_) => Err(GameError::Closed),
            State::NotStarted | State::InProgress => Err(GameError::NotFinished),
        }
    }

    pub(crate) fn close(&mut self) -> Result<Transcript, GameError> {
        let outcome = self.ensure_finished()?;
        self.state = State::Closed(outcome);
        Ok(Transcript::new(self.attempts.clone(), outcome))
    }

    pub(crate) fn state(&self) -> State {
        self.state
    }

    pub(crate) fn attempts(&self) -> usize {
        self.attempts.len()
    }

    pub(crate) fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    pub(crate) fn last_word(&self) -> Option<&Word> {
        self.attempts.last().map(|(word, _)| word)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::feedback::str_to_row;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn board_life_cycle() {
        let mut board = Board::default();
        assert!(matches!(board.ensure_in_progress(), Err(GameError::NotStarted)));
        assert!(matches!(board.close(), Err(GameError::NotFinished)));

        board.start().unwrap();
        assert!(matches!(board.start(), Err(GameError::AlreadyStarted)));
        board.ensure_in_progress().unwrap();

        board.apply(word("avena"), str_to_row("aacac"));
        assert_eq!(board.state(), State::InProgress);
        board.apply(word("pieza"), str_to_row("ccccc"));
        assert_eq!(board.state(), State::Finished(Outcome::Won));
        assert!(matches!(board.ensure_in_progress(), Err(GameError::Finished)));

        let transcript = board.close().unwrap();
        assert_eq!(transcript.attempts(), 2);
        assert_eq!(board.state(), State::Closed(Outcome::Won));
        assert!(matches!(board.close(), Err(GameError::Closed)));
        assert!(matches!(board.ensure_in_progress(), Err(GameError::Closed)));
    }

    #[test]
    fn board_loses_after_six_rows() {
        let mut board = Board::default();
        board.start().unwrap();
        for _ in 0..MAX_ATTEMPTS - 1 {
            board.apply(word("avena"), str_to_row("aaaaa"));
            assert_eq!(board.state(), State::InProgress);
        }
        board.apply(word("avena"), str_to_row("aaaaa"));
        assert_eq!(board.state(), State::Finished(Outcome::Lost));
        assert_eq!(board.attempts(), MAX_ATTEMPTS);
    }
}
