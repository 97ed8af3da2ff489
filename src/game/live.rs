//! A game played against a board this crate does not control.
//!
//! The board itself, whether a browser page or anything else, sits behind
//! the [`Backend`] trait. The game only turns its raw tile states into
//! verdicts and keeps the books.

use std::{thread, time::Duration};

use log::{debug, warn};

use crate::{
    constraints::Constraints,
    feedback::{render, Row, Verdict},
    game::{Board, Game, Outcome, State, Submission, Transcript},
    words::Word,
    GameError, Result, WORD_LEN,
};

/// Errors a [`Backend`] may return. They surface as
/// [`GameError::Backend`].
pub type BackendError = Box<dyn std::error::Error + Send + Sync>;

/// What a board answers to a submitted word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Feedback {
    /// The board refused the word.
    Rejected,

    /// The raw state of each tile of the new row, for instance its CSS
    /// classes. See [`Verdict::from_token()`] for the accepted forms.
    Tiles([String; WORD_LEN]),
}

/// A live Wordle board.
pub trait Backend {
    /// Opens the board and gets it ready for the first word.
    fn start(&mut self) -> Result<(), BackendError>;

    /// Types `word` and submits it.
    fn submit(&mut self, word: &Word) -> Result<Feedback, BackendError>;

    /// The solution, if the board shows it once the game is over.
    fn reveal_solution(&mut self) -> Result<Option<String>, BackendError>;

    /// Releases the board.
    fn shutdown(&mut self) -> Result<(), BackendError>;
}

/// A game played on a [`Backend`].
///
/// After each action the game blocks for a short while so the board can
/// settle, since boards animate their tiles. There is no way to interrupt
/// these waits; stop between attempts instead.
#[derive(Debug)]
pub struct LiveGame<B> {
    backend: B,
    board: Board,
    solution: Option<Word>,
    settle: Duration,
    rejection_cooldown: Duration,
}

impl<B: Backend> LiveGame<B> {
    /// Creates a game on `backend` that waits 500ms after each action and 5s
    /// after a rejected word.
    pub fn new(backend: B) -> Self {
        LiveGame {
            backend,
            board: Board::default(),
            solution: None,
            settle: Duration::from_millis(500),
            rejection_cooldown: Duration::from_secs(5),
        }
    }

    /// Sets how long to wait after each action on the board.
    pub fn settle(self, settle: Duration) -> Self {
        LiveGame { settle, ..self }
    }

    /// Sets how long to wait after the board refused a word, for its warning
    /// to go away.
    pub fn rejection_cooldown(self, rejection_cooldown: Duration) -> Self {
        LiveGame {
            rejection_cooldown,
            ..self
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    fn wait(duration: Duration) {
        if !duration.is_zero() {
            thread::sleep(duration);
        }
    }

    /// Asks the board for the solution of a lost game. A board that cannot
    /// show it does not change the outcome.
    fn reveal(&mut self) -> Option<Word> {
        let revealed = match self.backend.reveal_solution() {
            Ok(revealed) => revealed?,
            Err(e) => {
                warn!("the board did not reveal the solution: {}", e);
                return None;
            }
        };

        match Word::new(&revealed) {
            Ok(word) => Some(word),
            Err(e) => {
                warn!("ignoring the revealed solution: {}", e);
                None
            }
        }
    }

    fn read_row(tiles: &[String; WORD_LEN]) -> Result<Row, GameError> {
        let mut row = [Verdict::Absent; WORD_LEN];
        for (verdict, tile) in row.iter_mut().zip(tiles) {
            *verdict = Verdict::from_token(tile)?;
        }
        Ok(row)
    }
}

impl<B: Backend> Game for LiveGame<B> {
    fn play(&mut self) -> Result<()> {
        self.board.ensure_not_started()?;
        self.backend.start().map_err(GameError::Backend)?;
        self.board.start()?;
        Self::wait(self.settle);
        debug!("started live game");
        Ok(())
    }

    fn new_attempt(&mut self, word: &Word) -> Result<Submission> {
        self.board.ensure_in_progress()?;

        let feedback = self.backend.submit(word).map_err(GameError::Backend)?;
        Self::wait(self.settle);

        let tiles = match feedback {
            Feedback::Rejected => {
                warn!("the board refused {}", word);
                Self::wait(self.rejection_cooldown);
                return Ok(Submission::Rejected);
            }
            Feedback::Tiles(tiles) => tiles,
        };

        let row = Self::read_row(&tiles)?;
        debug!("{}: {}", word.to_uppercase(), render(&row));
        self.board.apply(word.clone(), row);

        match self.board.state().outcome() {
            Some(Outcome::Won) => self.solution = self.board.last_word().cloned(),
            Some(Outcome::Lost) => self.solution = self.reveal(),
            None => {}
        }

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
        self.solution.as_ref()
    }

    fn close(&mut self) -> Result<Transcript> {
        self.board.ensure_finished()?;
        self.backend.shutdown().map_err(GameError::Backend)?;
        let transcript = self.board.close()?;
        debug!("closed live game");
        Ok(transcript)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        feedback::str_to_row,
        mock::{MockBackend, Step},
        WordleError, MAX_ATTEMPTS,
    };

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn game(backend: MockBackend) -> LiveGame<MockBackend> {
        LiveGame::new(backend)
            .settle(Duration::ZERO)
            .rejection_cooldown(Duration::ZERO)
    }

    #[test]
    fn reads_tiles_from_the_board() -> Result<()> {
        let mut game = game(MockBackend::new("pieza", ["avena", "pieza"]));
        game.play()?;
        assert!(game.backend().started);

        assert_eq!(
            game.new_attempt(&word("avena"))?,
            Submission::Accepted(str_to_row("aacac"))
        );
        assert_eq!(
            game.new_attempt(&word("pieza"))?,
            Submission::Accepted(str_to_row("ccccc"))
        );
        assert!(game.is_successful());
        assert_eq!(game.solution(), Some(&word("pieza")));

        let transcript = game.close()?;
        assert!(game.backend().shut_down);
        assert_eq!(
            transcript.to_string(),
            "Wordle (ES) #0 2/6\n⬜⬜🟩⬜🟩\n🟩🟩🟩🟩🟩\n\nwordle.danielfrg.com"
        );
        Ok(())
    }

    #[test]
    fn refused_words_do_not_count() -> Result<()> {
        let mut game = game(MockBackend::new("pieza", ["avena", "pieza"]));
        game.play()?;
        assert_eq!(game.new_attempt(&word("zorro"))?, Submission::Rejected);
        assert_eq!(game.attempts(), 0);
        assert!(game.constraints().is_empty());
        assert_eq!(game.state(), State::InProgress);
        Ok(())
    }

    #[test]
    fn unknown_tiles_are_fatal() -> Result<()> {
        let mut game = game(MockBackend::new("pieza", ["avena"]).garbled());
        game.play()?;
        match game.new_attempt(&word("avena")) {
            Err(WordleError::Game {
                kind: GameError::UnrecognizedVerdict(token),
            }) => assert!(token.contains("bg-pending")),
            other => panic!("expected an unrecognized verdict, got {:?}", other),
        }
        assert_eq!(game.attempts(), 0);
        Ok(())
    }

    #[test]
    fn lost_game_reveals_the_solution() -> Result<()> {
        let mut game = game(MockBackend::new("pieza", ["avena"]));
        game.play()?;
        for _ in 0..6 {
            let _ = game.new_attempt(&word("avena"))?;
        }
        assert_eq!(game.state(), State::Finished(Outcome::Lost));
        assert_eq!(game.solution(), Some(&word("pieza")));
        assert!(game.close()?.to_string().starts_with("Wordle (ES) #0 X/6"));
        Ok(())
    }

    #[test]
    fn failed_start_can_be_retried() -> Result<()> {
        let mut game = game(MockBackend::new("pieza", ["pieza"]).broken());
        assert!(matches!(
            game.play(),
            Err(WordleError::Game {
                kind: GameError::Backend(_)
            })
        ));
        assert_eq!(game.state(), State::NotStarted);
        assert!(matches!(
            game.new_attempt(&word("pieza")),
            Err(WordleError::Game {
                kind: GameError::NotStarted
            })
        ));

        game.backend_mut().failing = None;
        game.play()?;
        assert_eq!(game.state(), State::InProgress);
        assert!(game.backend().started);
        Ok(())
    }

    #[test]
    fn failed_shutdown_keeps_the_transcript() -> Result<()> {
        let mut game = game(MockBackend::new("pieza", ["pieza"]).failing(Step::Shutdown));
        game.play()?;
        let _ = game.new_attempt(&word("pieza"))?;

        assert!(matches!(
            game.close(),
            Err(WordleError::Game {
                kind: GameError::Backend(_)
            })
        ));
        assert_eq!(game.state(), State::Finished(Outcome::Won));

        game.backend_mut().failing = None;
        let transcript = game.close()?;
        assert!(game.backend().shut_down);
        assert_eq!(transcript.attempts(), 1);
        assert_eq!(game.state(), State::Closed(Outcome::Won));
        Ok(())
    }

    fn lose(game: &mut LiveGame<MockBackend>) -> Result<Submission> {
        game.play()?;
        for _ in 0..MAX_ATTEMPTS - 1 {
            let _ = game.new_attempt(&word("avena"))?;
        }
        game.new_attempt(&word("avena"))
    }

    #[test]
    fn failed_reveal_still_counts_the_attempt() -> Result<()> {
        let mut game = game(MockBackend::new("pieza", ["avena"]).failing(Step::Reveal));
        assert_eq!(lose(&mut game)?, Submission::Accepted(str_to_row("aacac")));
        assert_eq!(game.state(), State::Finished(Outcome::Lost));
        assert_eq!(game.attempts(), MAX_ATTEMPTS);
        assert_eq!(game.solution(), None);
        assert!(game.close()?.to_string().starts_with("Wordle (ES) #0 X/6"));
        Ok(())
    }

    #[test]
    fn unreadable_reveal_is_ignored() -> Result<()> {
        let mut game = game(MockBackend::new("pieza", ["avena"]).reveals("¿¿??"));
        let _ = lose(&mut game)?;
        assert_eq!(game.state(), State::Finished(Outcome::Lost));
        assert_eq!(game.solution(), None);
        Ok(())
    }
}
