//! The default strategy: a vowel-heavy opener, then the first word that
//! could still be the answer.

use std::{cmp::Reverse, collections::VecDeque, fmt::Display, sync::Arc};

use itertools::Itertools;
use log::{debug, trace};

use crate::{
    constraints::Constraints,
    normalize::distinct_vowels,
    strategy::{LetterWeights, Strategy},
    words::{Word, WordSource},
    Result, StrategyError,
};

/// A Wordle strategy that guesses the first word that could be correct.
///
/// The first attempt uses the word with the most distinct vowels, to learn
/// as much as possible about them. Every later attempt drops the words that
/// contradict what the game revealed and guesses the first one left. The
/// list keeps the order of the source, normally most frequent first, unless
/// the strategy is [`weighted()`](Basic::weighted()).
///
/// Every word handed out, or rejected by the game, is removed for the rest
/// of the game.
///
/// # Examples
///
/// ```rust
/// use wordle_es::{strategy::Basic, Constraints, Strategy, Word, WordList};
///
/// let words = WordList::new(["razón", "pieza", "avena", "audio"]);
/// let mut basic = Basic::from_source(&words)?;
///
/// let opener = basic.next_word(0, &Constraints::new())?;
/// assert_eq!(opener.as_str(), "audio");
/// # Ok::<_, wordle_es::WordleError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Basic {
    words: Arc<[Word]>,
    first_word: Option<Word>,
    weights: Option<LetterWeights>,
    openers: VecDeque<Word>,
    candidates: Vec<Word>,
}

impl Basic {
    /// Creates the strategy over `words`, which should be ordered most
    /// likely first.
    pub fn new(words: impl Into<Arc<[Word]>>) -> Self {
        let mut basic = Basic {
            words: words.into(),
            first_word: None,
            weights: None,
            openers: VecDeque::new(),
            candidates: Vec::new(),
        };
        basic.reset();
        basic
    }

    pub fn from_source(source: &impl WordSource) -> Result<Self> {
        Ok(Self::new(source.get_words()?))
    }

    /// Always opens with `word` first.
    pub fn first_word(self, word: Word) -> Self {
        let mut basic = Basic {
            first_word: Some(word),
            ..self
        };
        basic.reset();
        basic
    }

    /// Tries candidates with more common letters first instead of keeping the
    /// order of the source. Ties keep the source order.
    pub fn weighted(self, weights: LetterWeights) -> Self {
        let mut basic = Basic {
            weights: Some(weights),
            ..self
        };
        basic.reset();
        basic
    }

    /// The words this strategy could still guess after the opener.
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }
}

impl Strategy for Basic {
    fn next_word(&mut self, attempt: usize, constraints: &Constraints) -> Result<Word> {
        if attempt == 0 {
            let word = self.openers.pop_front().ok_or(StrategyError::Exhausted)?;
            debug!("opening with {}", word);
            return Ok(word);
        }

        constraints.retain(&mut self.candidates);
        if self.candidates.is_empty() {
            return Err(StrategyError::Exhausted.into());
        }
        let word = self.candidates.remove(0);
        trace!("{} candidates left after {}", self.candidates.len(), word);
        Ok(word)
    }

    fn reject(&mut self, word: &Word) {
        self.openers.retain(|w| w != word);
        self.candidates.retain(|w| w != word);
    }

    fn reset(&mut self) {
        let unique: Vec<Word> = self.words.iter().unique().cloned().collect();

        self.openers = self
            .first_word
            .iter()
            .cloned()
            .chain(
                unique
                    .iter()
                    .sorted_by_key(|w| Reverse(distinct_vowels(w)))
                    .cloned(),
            )
            .collect();

        self.candidates = match &self.weights {
            Some(weights) => unique
                .into_iter()
                .map(|w| (weights.score(&w, false), w))
                .sorted_by(|(a, _), (b, _)| b.total_cmp(a))
                .map(|(_, w)| w)
                .collect(),
            None => unique,
        };
    }

    fn version(&self) -> &'static str {
        "0.1.0"
    }
}

impl Display for Basic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "wordle_es::Basic")?;
        if let Some(word) = &self.first_word {
            write!(f, " (start: {})", word)?;
        }
        if self.weights.is_some() {
            write!(f, " (weighted)")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{feedback::classify, WordList, WordleError};

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn basic(list: &[&str]) -> Basic {
        Basic::from_source(&WordList::new(list)).unwrap()
    }

    #[test]
    fn opens_with_most_vowels() -> Result<()> {
        let mut basic = basic(&["razón", "pieza", "audio", "avena", "euro"]);
        assert_eq!(basic.next_word(0, &Constraints::new())?, word("audio"));
        // a rejected opener moves on to the next one
        assert_eq!(basic.next_word(0, &Constraints::new())?, word("pieza"));
        Ok(())
    }

    #[test]
    fn first_word_comes_before_vowels() -> Result<()> {
        let mut basic = basic(&["razón", "audio"]).first_word(word("robot"));
        assert_eq!(basic.next_word(0, &Constraints::new())?, word("robot"));
        assert_eq!(basic.next_word(0, &Constraints::new())?, word("audio"));
        assert_eq!(format!("{}", basic), "wordle_es::Basic (start: robot)");
        Ok(())
    }

    #[test]
    fn later_attempts_filter_in_order() -> Result<()> {
        let mut basic = basic(&["avena", "pieza", "lazos", "razón", "zonal"]);
        let solution = word("razón");
        let guess = word("pieza");

        let mut constraints = Constraints::new();
        constraints.record(&guess, &classify(&guess, &solution));

        assert_eq!(basic.next_word(1, &constraints)?, word("lazos"));
        assert_eq!(basic.next_word(2, &constraints)?, word("razón"));
        assert_eq!(basic.candidates(), &[word("zonal")]);
        Ok(())
    }

    #[test]
    fn rejected_words_are_not_offered_again() -> Result<()> {
        let mut basic = basic(&["avena", "razón", "pieza"]);
        basic.reject(&word("avena"));
        assert_eq!(basic.next_word(1, &Constraints::new())?, word("razón"));
        Ok(())
    }

    #[test]
    fn runs_out_of_words() -> Result<()> {
        let mut basic = basic(&["razón"]);
        assert_eq!(basic.next_word(1, &Constraints::new())?, word("razón"));
        assert!(matches!(
            basic.next_word(2, &Constraints::new()),
            Err(WordleError::Strategy {
                kind: StrategyError::Exhausted
            })
        ));
        Ok(())
    }

    #[test]
    fn reset_restores_every_word() -> Result<()> {
        let mut basic = basic(&["avena", "razón", "pieza"]);
        let _ = basic.next_word(1, &Constraints::new())?;
        let _ = basic.next_word(2, &Constraints::new())?;
        assert_eq!(basic.candidates().len(), 1);

        basic.reset();
        assert_eq!(basic.candidates().len(), 3);
        assert_eq!(basic.next_word(1, &Constraints::new())?, word("avena"));
        Ok(())
    }

    #[test]
    fn weighted_prefers_common_letters() -> Result<()> {
        let weights = LetterWeights::new([('e', 3.0), ('a', 2.0), ('s', 1.0)]);
        let mut basic = basic(&["razón", "pieza", "señas", "rubio"]).weighted(weights);
        // señas: e + s + a, pieza: e + a, razón: a, rubio: nothing
        let order: Vec<Word> = (1..=4)
            .map(|i| basic.next_word(i, &Constraints::new()))
            .collect::<Result<_>>()?;
        assert_eq!(
            order,
            vec![word("señas"), word("pieza"), word("razón"), word("rubio")]
        );
        Ok(())
    }
}
