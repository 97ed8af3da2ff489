use std::collections::HashSet;

use crate::{
    feedback::{classify, Verdict},
    game::live::{Backend, BackendError, Feedback},
    Word,
};

/// A backend call that [`MockBackend`] can be told to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    Start,
    Reveal,
    Shutdown,
}

/// A scripted board that grades words like the real one, reporting tiles as
/// CSS class lists.
#[derive(Debug, Clone)]
pub(crate) struct MockBackend {
    solution: Word,
    known: HashSet<Word>,
    garbled: bool,
    revealed: Option<String>,
    pub(crate) failing: Option<Step>,
    pub(crate) started: bool,
    pub(crate) shut_down: bool,
}

impl MockBackend {
    pub(crate) fn new<const N: usize>(solution: &str, known: [&str; N]) -> Self {
        Self {
            solution: Word::new(solution).unwrap(),
            known: known.iter().map(|w| Word::new(w).unwrap()).collect(),
            garbled: false,
            revealed: Some(solution.to_string()),
            failing: None,
            started: false,
            shut_down: false,
        }
    }

    /// Reports the first tile of every row in a state nobody understands.
    pub(crate) fn garbled(self) -> Self {
        Self {
            garbled: true,
            ..self
        }
    }

    /// Fails to start.
    pub(crate) fn broken(self) -> Self {
        self.failing(Step::Start)
    }

    pub(crate) fn failing(self, step: Step) -> Self {
        Self {
            failing: Some(step),
            ..self
        }
    }

    /// Shows `text` instead of the solution once the game is lost.
    pub(crate) fn reveals(self, text: &str) -> Self {
        Self {
            revealed: Some(text.to_string()),
            ..self
        }
    }

    fn check(&self, step: Step) -> Result<(), BackendError> {
        if self.failing == Some(step) {
            return Err(format!("the board failed at {:?}", step).into());
        }
        Ok(())
    }
}

impl Backend for MockBackend {
    fn start(&mut self) -> Result<(), BackendError> {
        self.check(Step::Start)?;
        self.started = true;
        Ok(())
    }

    fn submit(&mut self, word: &Word) -> Result<Feedback, BackendError> {
        if !self.known.contains(word) {
            return Ok(Feedback::Rejected);
        }

        let mut tiles = classify(word, &self.solution).map(|verdict| {
            let state = match verdict {
                Verdict::Correct => "bg-correct",
                Verdict::Present => "bg-present",
                Verdict::Absent => "bg-absent",
            };
            format!("w-full h-full {} text-white", state)
        });

        if self.garbled {
            tiles[0] = "w-full h-full bg-pending".to_string();
        }
        Ok(Feedback::Tiles(tiles))
    }

    fn reveal_solution(&mut self) -> Result<Option<String>, BackendError> {
        self.check(Step::Reveal)?;
        Ok(self.revealed.clone())
    }

    fn shutdown(&mut self) -> Result<(), BackendError> {
        self.check(Step::Shutdown)?;
        self.shut_down = true;
        Ok(())
    }
}
