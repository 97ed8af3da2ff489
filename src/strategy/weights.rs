//! Letter frequency tables for ranking words.

use std::collections::HashMap;

use itertools::Itertools;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::normalize::normalize_char;

/// How often each letter appears in Spanish text, in percent over 100.
///
/// Source: <https://es.wikipedia.org/wiki/Frecuencia_de_aparici%C3%B3n_de_letras>
const SPANISH: [(char, f64); 27] = [
    ('a', 0.1253),
    ('b', 0.0142),
    ('c', 0.0468),
    ('d', 0.0586),
    ('e', 0.1368),
    ('f', 0.0069),
    ('g', 0.0101),
    ('h', 0.0070),
    ('i', 0.0625),
    ('j', 0.0044),
    ('k', 0.0002),
    ('l', 0.0497),
    ('m', 0.0315),
    ('n', 0.0671),
    ('ñ', 0.0031),
    ('o', 0.0868),
    ('p', 0.0251),
    ('q', 0.0088),
    ('r', 0.0687),
    ('s', 0.0798),
    ('t', 0.0463),
    ('u', 0.0393),
    ('v', 0.0090),
    ('w', 0.0001),
    ('x', 0.0022),
    ('y', 0.0090),
    ('z', 0.0052),
];

/// A weight for each letter, used to rank words by how common their letters
/// are.
///
/// # Examples
///
/// ```rust
/// use wordle_es::strategy::LetterWeights;
///
/// let weights = LetterWeights::new([('a', 1.0), ('b', 0.5)]);
/// assert_eq!(weights.score("abaco", false), 1.5);
/// assert_eq!(weights.score("abaco", true), 2.5);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct LetterWeights {
    weights: HashMap<char, f64>,
}

impl LetterWeights {
    pub fn new(weights: impl IntoIterator<Item = (char, f64)>) -> Self {
        LetterWeights {
            weights: weights.into_iter().collect(),
        }
    }

    /// Letter frequencies of written Spanish.
    pub fn spanish() -> Self {
        Self::new(SPANISH)
    }

    /// The weight of a single letter, zero if the table does not have it.
    pub fn get(&self, letter: char) -> f64 {
        self.weights
            .get(&normalize_char(letter))
            .copied()
            .unwrap_or_default()
    }

    /// Sums the weights of the letters of `word`.
    ///
    /// Unless `allow_duplicates` is set, a letter that appears several times
    /// only counts once.
    pub fn score(&self, word: &str, allow_duplicates: bool) -> f64 {
        let letters = word.chars().map(normalize_char);
        if allow_duplicates {
            letters.map(|c| self.get(c)).sum()
        } else {
            letters.unique().map(|c| self.get(c)).sum()
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn spanish_table_is_complete() {
        let weights = LetterWeights::spanish();
        for c in "abcdefghijklmnñopqrstuvwxyz".chars() {
            assert!(weights.get(c) > 0.0, "missing {}", c);
        }
        assert!(close(weights.get('é'), weights.get('e')));
    }

    #[test]
    fn duplicates_count_once_by_default() {
        let weights = LetterWeights::spanish();
        assert!(close(
            weights.score("avena", false),
            0.1253 + 0.0090 + 0.1368 + 0.0671
        ));
        assert!(close(
            weights.score("avena", true),
            2. * 0.1253 + 0.0090 + 0.1368 + 0.0671
        ));
    }

    #[test]
    fn unknown_letters_score_nothing() {
        let weights = LetterWeights::new([('a', 1.0)]);
        assert!(close(weights.score("çàéîø", true), 0.0));
    }
}
