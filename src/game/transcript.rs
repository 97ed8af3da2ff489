//! The text a finished game shares.

use std::fmt::Display;

use crate::{
    feedback::{render, Row},
    game::Outcome,
    words::Word,
    MAX_ATTEMPTS,
};

const HEADER: &str = "Wordle (ES) #0";
const FOOTER: &str = "wordle.danielfrg.com";

/// The record of a closed game.
///
/// Its [`Display`] implementation produces the share text: a header with the
/// score (`X` when the game was lost), one line of squares per attempt, a
/// blank line and a footer.
///
/// ```text
/// Wordle (ES) #0 2/6
/// ⬜⬜🟩⬜🟩
/// 🟩🟩🟩🟩🟩
///
/// wordle.danielfrg.com
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transcript {
    attempts: Vec<(Word, Row)>,
    outcome: Outcome,
}

impl Transcript {
    pub(crate) fn new(attempts: Vec<(Word, Row)>, outcome: Outcome) -> Self {
        Transcript { attempts, outcome }
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_won(&self) -> bool {
        self.outcome == Outcome::Won
    }

    /// Number of accepted attempts.
    pub fn attempts(&self) -> usize {
        self.attempts.len()
    }

    /// The words that were played, in order.
    pub fn guesses(&self) -> impl Iterator<Item = &Word> {
        self.attempts.iter().map(|(word, _)| word)
    }

    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.attempts.iter().map(|(_, row)| row)
    }
}

impl Display for Transcript {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.outcome {
            Outcome::Won => writeln!(f, "{} {}/{}", HEADER, self.attempts(), MAX_ATTEMPTS)?,
            Outcome::Lost => writeln!(f, "{} X/{}", HEADER, MAX_ATTEMPTS)?,
        }
        for row in self.rows() {
            writeln!(f, "{}", render(row))?;
        }
        writeln!(f)?;
        write!(f, "{}", FOOTER)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::feedback::str_to_row;

    fn attempt(word: &str, row: &str) -> (Word, Row) {
        (Word::new(word).unwrap(), str_to_row(row))
    }

    #[test]
    fn won_transcript() {
        let transcript = Transcript::new(
            vec![attempt("avena", "aacac"), attempt("pieza", "ccccc")],
            Outcome::Won,
        );
        assert_eq!(
            transcript.to_string(),
            "Wordle (ES) #0 2/6\n⬜⬜🟩⬜🟩\n🟩🟩🟩🟩🟩\n\nwordle.danielfrg.com"
        );
        let guesses: Vec<&str> = transcript.guesses().map(Word::as_str).collect();
        assert_eq!(guesses, ["avena", "pieza"]);
    }

    #[test]
    fn lost_transcript() {
        let transcript = Transcript::new(vec![attempt("avena", "papaa"); 6], Outcome::Lost);
        let text = transcript.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Wordle (ES) #0 X/6");
        assert_eq!(&lines[1..7], ["🟨⬜🟨⬜⬜"; 6]);
        assert_eq!(lines[7], "");
        assert_eq!(lines[8], "wordle.danielfrg.com");
        assert_eq!(lines.len(), 9);
    }
}
