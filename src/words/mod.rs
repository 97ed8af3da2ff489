//! Words, dictionaries and the sources they come from.

use std::{
    collections::HashSet,
    fmt::Display,
    hash::{Hash, Hasher},
    ops::Deref,
    str::FromStr,
};

use itertools::Itertools;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    normalize::{distinct_vowels, normalize_char},
    WordError, WORD_LEN,
};

#[cfg(feature = "serde")]
pub mod cache;
#[cfg(feature = "serde")]
pub use cache::JsonCache;

pub mod text;
pub use text::TextSource;

/// A five letter Spanish word.
///
/// The word keeps its accented spelling for display, but equality, hashing
/// and ordering only look at the normalized letters. `razón` and `razon`
/// are therefore the same [`Word`].
///
/// # Examples
///
/// ```rust
/// use wordle_es::Word;
///
/// let razon = Word::new("Razón")?;
/// assert_eq!(razon.as_str(), "razón");
/// assert_eq!(razon, Word::new("razon")?);
/// assert_eq!(razon.letter(3), 'o');
///
/// assert!(Word::new("cañones").is_err());
/// # Ok::<_, wordle_es::WordError>(())
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", try_from = "String", into = "String")
)]
pub struct Word {
    text: String,
    letters: [char; WORD_LEN],
}

impl Word {
    /// Creates a new [`Word`] from a five letter string.
    ///
    /// The string is lowercased. Returns an error if it does not have
    /// exactly five characters or if any of them is not alphabetic.
    pub fn new(word: &str) -> Result<Self, WordError> {
        let text = word.trim().to_lowercase();

        if text.chars().count() != WORD_LEN {
            return Err(WordError::WrongLength(word.to_string()));
        }
        if !text.chars().all(char::is_alphabetic) {
            return Err(WordError::NotAlphabetic(word.to_string()));
        }

        let mut letters = [' '; WORD_LEN];
        for (slot, c) in letters.iter_mut().zip(text.chars()) {
            *slot = normalize_char(c);
        }

        Ok(Word { text, letters })
    }

    /// The word as it should be displayed, accents included.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The normalized letters of the word.
    pub fn letters(&self) -> &[char; WORD_LEN] {
        &self.letters
    }

    /// The normalized letter at `index`.
    ///
    /// Panics if `index` is not below [`WORD_LEN`].
    pub fn letter(&self, index: usize) -> char {
        self.letters[index]
    }

    /// Returns true if the normalized word contains `letter`.
    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    /// Counts the occurrences of `letter` in the normalized word.
    pub fn count(&self, letter: char) -> usize {
        self.letters.iter().filter(|&&c| c == letter).count()
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.letters == other.letters
    }
}

impl Eq for Word {}

impl Hash for Word {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.letters.hash(state);
    }
}

impl PartialOrd for Word {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Word {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.letters.cmp(&other.letters)
    }
}

impl Deref for Word {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.text
    }
}

impl Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Word::new(s)
    }
}

impl TryFrom<String> for Word {
    type Error = WordError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Word::new(&value)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.text
    }
}

/// Parses `text` as a word that a source may offer as a guess.
///
/// Besides being a valid [`Word`], the word must contain at least one vowel.
pub fn candidate(text: &str) -> Option<Word> {
    Word::new(text).ok().filter(|w| distinct_vowels(w) > 0)
}

/// Anything that can hand out an ordered list of words.
///
/// Implementations compute the list at most once and hand out the cached
/// copy afterwards. The list never changes after it is first produced.
pub trait WordSource {
    /// Returns the words of this source, most frequent first.
    fn get_words(&self) -> crate::Result<&[Word]>;
}

/// An in-memory, deduplicated list of words.
///
/// # Examples
///
/// ```rust
/// use wordle_es::{WordList, WordSource};
///
/// let list = WordList::new(["razón", "pieza", "razon", "xyzzy", "cañones"]);
/// let words: Vec<&str> = list.get_words()?.iter().map(|w| w.as_str()).collect();
/// assert_eq!(words, ["razón", "pieza"]);
/// # Ok::<_, wordle_es::WordleError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<Word>,
}

impl WordList {
    /// Builds a list from raw strings, dropping anything that is not a
    /// [`candidate`] and keeping the first spelling of each word.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words
            .into_iter()
            .filter_map(|s| candidate(s.as_ref()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl FromIterator<Word> for WordList {
    fn from_iter<T: IntoIterator<Item = Word>>(iter: T) -> Self {
        WordList {
            words: iter.into_iter().unique().collect(),
        }
    }
}

impl WordSource for WordList {
    fn get_words(&self) -> crate::Result<&[Word]> {
        Ok(&self.words)
    }
}

/// The set of words a game accepts as guesses.
///
/// Lookups compare normalized spellings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: HashSet<Word>,
}

impl Dictionary {
    /// Collects every word of `source` into a dictionary.
    pub fn from_source(source: &impl WordSource) -> crate::Result<Self> {
        Ok(source.get_words()?.iter().cloned().collect())
    }

    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl FromIterator<Word> for Dictionary {
    fn from_iter<T: IntoIterator<Item = Word>>(iter: T) -> Self {
        Dictionary {
            words: iter.into_iter().collect(),
        }
    }
}
