//! Grading guesses against a solution or against tiles read from a board.

use std::fmt::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{words::Word, GameError, WORD_LEN};

/// The feedback a single letter of a guess receives.
///
/// `Correct` means the letter is in the right position. `Present` means the
/// solution has the letter somewhere else. `Absent` means the solution does
/// not have the letter, or that every copy of it is already accounted for by
/// other letters of the same guess.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", rename_all = "lowercase")
)]
pub enum Verdict {
    Correct,
    Present,
    Absent,
}

/// One verdict per letter of a guess, in order.
pub type Row = [Verdict; WORD_LEN];

impl Verdict {
    /// The square used for this verdict in a share transcript.
    pub fn glyph(self) -> char {
        match self {
            Verdict::Correct => '🟩',
            Verdict::Present => '🟨',
            Verdict::Absent => '⬜',
        }
    }

    /// Reads the state of a tile reported by a live board.
    ///
    /// The board either reports a bare state (`correct`, `present`, `absent`)
    /// or the full class list of the tile, where the state appears as one of
    /// `bg-correct`, `bg-present` or `bg-absent`. Anything else is an
    /// [`UnrecognizedVerdict`](GameError::UnrecognizedVerdict).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wordle_es::Verdict;
    ///
    /// assert_eq!(Verdict::from_token("absent")?, Verdict::Absent);
    /// assert_eq!(
    ///     Verdict::from_token("flex h-14 bg-present text-white")?,
    ///     Verdict::Present
    /// );
    /// assert!(Verdict::from_token("bg-pending").is_err());
    /// # Ok::<_, wordle_es::GameError>(())
    /// ```
    pub fn from_token(token: &str) -> Result<Self, GameError> {
        token
            .split_whitespace()
            .find_map(|class| match class.strip_prefix("bg-").unwrap_or(class) {
                "correct" => Some(Verdict::Correct),
                "present" => Some(Verdict::Present),
                "absent" => Some(Verdict::Absent),
                _ => None,
            })
            .ok_or_else(|| GameError::UnrecognizedVerdict(token.to_string()))
    }
}

impl Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Grades `guess` against `solution`.
///
/// Letters in the right position are graded first. Every other letter is
/// then graded left to right: it is [`Verdict::Present`] while the solution
/// still has an unmatched copy of it, and [`Verdict::Absent`] once all copies
/// are used up. A letter never receives more `Correct` and `Present` verdicts
/// together than the solution has copies of it.
///
/// For instance, with the solution `pieza` the guess `avena` grades its
/// first `a` as `Absent`, because the only `a` of the solution is already
/// matched by the last letter of the guess.
///
/// # Examples
///
/// ```rust
/// use wordle_es::{feedback::classify, Verdict::*, Word};
///
/// let row = classify(&Word::new("avena")?, &Word::new("pieza")?);
/// assert_eq!(row, [Absent, Absent, Correct, Absent, Correct]);
/// # Ok::<_, wordle_es::WordError>(())
/// ```
pub fn classify(guess: &Word, solution: &Word) -> Row {
    let mut row = [Verdict::Absent; WORD_LEN];
    let mut unmatched = Vec::with_capacity(WORD_LEN);

    for (i, (g, s)) in guess.letters().iter().zip(solution.letters()).enumerate() {
        if g == s {
            row[i] = Verdict::Correct;
        } else {
            unmatched.push(*s);
        }
    }

    for (i, g) in guess.letters().iter().enumerate() {
        if row[i] == Verdict::Correct {
            continue;
        }
        if let Some(pos) = unmatched.iter().position(|c| c == g) {
            unmatched.swap_remove(pos);
            row[i] = Verdict::Present;
        }
    }

    row
}

/// Returns true if every letter of the row is correct.
pub fn is_solved(row: &Row) -> bool {
    row.iter().all(|&v| v == Verdict::Correct)
}

/// Renders a row as a line of squares.
pub fn render(row: &Row) -> String {
    row.iter().map(|v| v.glyph()).collect()
}

#[cfg(test)]
pub(crate) fn str_to_row(input: &str) -> Row {
    let mut res = [Verdict::Absent; WORD_LEN];
    for (i, c) in input.chars().enumerate() {
        match c {
            'c' => res[i] = Verdict::Correct,
            'p' => res[i] = Verdict::Present,
            _ => {}
        }
    }
    res
}
