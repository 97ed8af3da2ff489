//! Accumulated knowledge about the solution of one game.

use std::collections::{BTreeMap, BTreeSet};

use log::trace;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    feedback::{Row, Verdict},
    words::Word,
};

/// Everything the verdicts of a game have revealed so far.
///
/// The store only ever grows: [`record()`](Constraints::record()) adds to
/// it and nothing removes from it. A word is consistent with the store when
///
/// 1. every confirmed letter sits at each of its confirmed positions,
/// 2. every present letter appears in the word, but at none of its excluded
///    positions,
/// 3. no absent letter appears anywhere in the word.
///
/// All letters are normalized, see [`Word`].
///
/// # Examples
///
/// ```rust
/// use wordle_es::{feedback::classify, Constraints, Word};
///
/// let solution = Word::new("razón")?;
/// let guess = Word::new("avena")?;
///
/// let mut constraints = Constraints::new();
/// constraints.record(&guess, &classify(&guess, &solution));
///
/// assert!(constraints.is_consistent(&solution));
/// assert!(!constraints.is_consistent(&Word::new("pieza")?));
/// # Ok::<_, wordle_es::WordError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct Constraints {
    confirmed: BTreeMap<char, BTreeSet<usize>>,
    present: BTreeMap<char, BTreeSet<usize>>,
    absent: BTreeSet<char>,
}

impl Constraints {
    pub fn new() -> Self {
        Self::default()
    }

    /// Letters known to be in the solution, with the positions where they are
    /// known to sit.
    pub fn confirmed(&self) -> &BTreeMap<char, BTreeSet<usize>> {
        &self.confirmed
    }

    /// Letters known to be in the solution, with the positions where they are
    /// known not to sit.
    pub fn present(&self) -> &BTreeMap<char, BTreeSet<usize>> {
        &self.present
    }

    /// Letters known not to be in the solution.
    pub fn absent(&self) -> &BTreeSet<char> {
        &self.absent
    }

    /// Returns true while nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.confirmed.is_empty() && self.present.is_empty() && self.absent.is_empty()
    }

    /// Merges the verdicts of one attempt into the store.
    ///
    /// An `Absent` letter only becomes globally absent if the solution cannot
    /// contain it. When the same guess graded another copy of the letter as
    /// `Correct` or `Present`, or the letter is already known to be in the
    /// solution, the `Absent` only tells us that the letter is not at this
    /// position, so the position is excluded instead.
    ///
    /// Recording the same attempt twice changes nothing.
    pub fn record(&mut self, guess: &Word, row: &Row) {
        for (i, (&letter, &verdict)) in guess.letters().iter().zip(row.iter()).enumerate() {
            match verdict {
                Verdict::Correct => {
                    self.confirmed.entry(letter).or_default().insert(i);
                }
                Verdict::Present => {
                    self.present.entry(letter).or_default().insert(i);
                }
                Verdict::Absent => {
                    let graded_elsewhere = guess
                        .letters()
                        .iter()
                        .zip(row.iter())
                        .any(|(&c, &v)| c == letter && v != Verdict::Absent);

                    if graded_elsewhere || self.is_known(letter) {
                        self.present.entry(letter).or_default().insert(i);
                    } else {
                        self.absent.insert(letter);
                    }
                }
            }
        }
    }

    fn is_known(&self, letter: char) -> bool {
        self.confirmed.contains_key(&letter) || self.present.contains_key(&letter)
    }

    /// Checks a candidate word against everything recorded so far.
    pub fn is_consistent(&self, word: &Word) -> bool {
        let letters = word.letters();

        let confirmed = self
            .confirmed
            .iter()
            .all(|(c, positions)| positions.iter().all(|&i| letters.get(i) == Some(c)));

        let present = self.present.iter().all(|(c, excluded)| {
            word.contains(*c) && excluded.iter().all(|&i| letters.get(i) != Some(c))
        });

        let absent = self.absent.iter().all(|&c| !word.contains(c));

        confirmed && present && absent
    }

    /// Returns the consistent words of `candidates`, in their original order.
    pub fn filter(&self, candidates: &[Word]) -> Vec<Word> {
        candidates
            .iter()
            .filter(|w| self.is_consistent(w))
            .cloned()
            .collect()
    }

    /// Removes the inconsistent words from `candidates` in place, keeping the
    /// order of the rest.
    pub fn retain(&self, candidates: &mut Vec<Word>) {
        let before = candidates.len();
        candidates.retain(|w| self.is_consistent(w));
        trace!("filtered {} candidates down to {}", before, candidates.len());
    }
}
