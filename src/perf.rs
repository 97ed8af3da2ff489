//! Evaluating strategies.

use std::{fmt::Display, io::Write, ops::Deref};

use itertools::Itertools;
#[cfg(feature = "fancy")]
use owo_colors::{OwoColorize, Stream};

use crate::{game::Transcript, strategy::Strategy, words::Word, Result, MAX_ATTEMPTS};

/// A record of one strategy's games after run by the
/// [test harness](crate::Harness).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Perf {
    pub(crate) tries: Vec<(Word, Transcript)>,
    strategy_name: String,
}

impl Perf {
    /// Creates a new empty performance record.
    pub(crate) fn new(strat: &dyn Strategy) -> Self {
        Perf {
            tries: Vec::new(),
            strategy_name: format!("{} v{}", strat, strat.version()),
        }
    }

    /// Gets the name of the strategy that produced this performance record.
    pub fn strategy_name(&self) -> &str {
        &self.strategy_name
    }

    /// The solution and transcript of every game, in the order they ran.
    pub fn tries(&self) -> &[(Word, Transcript)] {
        &self.tries
    }

    /// Gets the number of puzzles attempted by the strategy.
    pub fn num_tried(&self) -> u32 {
        self.tries.len() as u32
    }

    /// Gets the number of puzzles solved by the strategy.
    pub fn num_solved(&self) -> u32 {
        self.tries.iter().filter(|(_, t)| t.is_won()).count() as u32
    }

    /// Gets the fraction of puzzles solved by the strategy.
    pub fn frac_solved(&self) -> f32 {
        (self.num_solved() as f32) / (self.num_tried() as f32)
    }

    /// Gets the number of puzzles the strategy could not solve.
    pub fn num_missed(&self) -> u32 {
        self.num_tried() - self.num_solved()
    }

    /// Gets the fraction of puzzles the strategy could not solve.
    pub fn frac_missed(&self) -> f32 {
        (self.num_missed() as f32) / (self.num_tried() as f32)
    }

    /// The solutions of the puzzles the strategy could not solve.
    pub fn missed(&self) -> impl Iterator<Item = &Word> {
        self.tries
            .iter()
            .filter(|(_, t)| !t.is_won())
            .map(|(word, _)| word)
    }

    /// Gets the number of guesses across all games.
    pub fn cumulative_guesses(&self) -> u32 {
        self.tries.iter().map(|(_, t)| t.attempts() as u32).sum()
    }

    /// Gets the number of guesses across all solved games.
    pub fn cumulative_guesses_solved(&self) -> u32 {
        self.tries
            .iter()
            .filter(|(_, t)| t.is_won())
            .map(|(_, t)| t.attempts() as u32)
            .sum()
    }

    /// Gets the average number of guesses needed to solve a puzzle.
    ///
    /// This function does not include guesses made on puzzles that the
    /// strategy was unable to solve.
    pub fn mean_guesses(&self) -> f32 {
        (self.cumulative_guesses_solved() as f32) / (self.num_solved() as f32)
    }

    /// Counts the solved games by the number of attempts they took.
    pub fn histogram(&self) -> Histogram {
        let mut bins = [0; MAX_ATTEMPTS];
        self.tries
            .iter()
            .filter(|(_, t)| t.is_won())
            .for_each(|(_, t)| bins[t.attempts() - 1] += 1);
        bins.into()
    }

    /// Prints the summary, the histogram and the puzzles the strategy missed.
    pub fn print(&self) -> Result<()> {
        let mut stdout = std::io::stdout();
        write!(stdout, "{}", self)?;
        write!(stdout, "{}", self.histogram())?;

        if self.num_missed() > 0 {
            let missed = self.missed().join(" ");
            #[cfg(feature = "fancy")]
            let missed = missed.if_supports_color(Stream::Stdout, |text| text.red());
            writeln!(stdout, "Missed: {}", missed)?;
        }

        Ok(())
    }
}

impl Display for Perf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{:-^80}", self.strategy_name)?;
        writeln!(f, "Ran {} words", self.num_tried())?;

        if self.num_tried() == 0 {
            return Ok(());
        }

        writeln!(
            f,
            "Guessed {} correctly, or {:.1}%, and {} incorrectly",
            self.num_solved(),
            self.frac_solved() * 100.,
            self.num_missed()
        )?;

        if self.num_solved() > 0 {
            writeln!(
                f,
                "Correct guesses took {:.2} attempts on average",
                self.mean_guesses(),
            )?;
        }

        Ok(())
    }
}

/// The number of games solved in one, two, ... six attempts.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Histogram {
    bins: [u32; MAX_ATTEMPTS],
}

impl From<[u32; MAX_ATTEMPTS]> for Histogram {
    fn from(other: [u32; MAX_ATTEMPTS]) -> Self {
        Self { bins: other }
    }
}

impl Deref for Histogram {
    type Target = [u32; MAX_ATTEMPTS];

    fn deref(&self) -> &Self::Target {
        &self.bins
    }
}

impl Display for Histogram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let max = self.iter().copied().max().unwrap_or_default();
        let digits =
            std::iter::successors(Some(max), |&n| (n >= 10).then(|| n / 10)).count() as u32;
        let count_per_mark = (max as f32 / (80. - digits as f32 - 6.)).max(1.0);

        for (i, &bin) in self.bins.iter().enumerate() {
            write!(f, "{} |", i + 1)?;
            let marks = (bin as f32 / count_per_mark).floor() as usize;
            writeln!(f, "{:■>marks$} ({})", "", bin, marks = marks)?;
        }

        Ok(())
    }
}
