//! A game whose solution is known in advance.

use std::sync::Arc;

use log::debug;

use crate::{
    constraints::Constraints,
    feedback::{classify, render},
    game::{Board, Game, State, Submission, Transcript},
    words::{Dictionary, Word},
    Result,
};

/// A game played entirely in memory against a known solution.
///
/// Guesses are validated against a shared, read-only [`Dictionary`] and
/// graded with [`classify()`].
///
/// # Examples
///
/// ```rust
/// use wordle_es::{game::SimulatedGame, Dictionary, Game, Submission, Word, WordList};
///
/// let dictionary = Dictionary::from_source(&WordList::new(["razón", "pieza"]))?;
/// let mut game = SimulatedGame::new(Word::new("razón")?, dictionary);
/// game.play()?;
///
/// assert_eq!(game.new_attempt(&Word::new("robot")?)?, Submission::Rejected);
/// assert!(matches!(game.new_attempt(&Word::new("razon")?)?, Submission::Accepted(_)));
/// assert!(game.is_successful());
/// assert!(game.close()?.to_string().starts_with("Wordle (ES) #0 1/6"));
/// # Ok::<_, wordle_es::WordleError>(())
/// ```
#[derive(Clone, Debug)]
pub struct SimulatedGame {
    solution: Word,
    dictionary: Arc<Dictionary>,
    board: Board,
}

impl SimulatedGame {
    pub fn new(solution: Word, dictionary: impl Into<Arc<Dictionary>>) -> Self {
        SimulatedGame {
            solution,
            dictionary: dictionary.into(),
            board: Board::default(),
        }
    }
}

impl Game for SimulatedGame {
    fn play(&mut self) -> Result<()> {
        self.board.start()?;
        debug!("started simulated game");
        Ok(())
    }

    fn new_attempt(&mut self, word: &Word) -> Result<Submission> {
        self.board.ensure_in_progress()?;

        if !self.dictionary.contains(word) {
            debug!("{} is not in the dictionary", word);
            return Ok(Submission::Rejected);
        }

        let row = classify(word, &self.solution);
        debug!("{}: {}", word.to_uppercase(), render(&row));
        self.board.apply(word.clone(), row);
        Ok(Submission::Accepted(row))
    }

    fn state(&self) -> State {
        self.board.state()
    }

    fn attempts(&self) -> usize {
        self.board.attempts()
    }

    fn constraints(&self) -> &Constraints {
        self.board.constraints()
    }

    fn solution(&self) -> Option<&Word> {
        Some(&self.solution)
    }

    fn close(&mut self) -> Result<Transcript> {
        Ok(self.board.close()?)
    }
}
