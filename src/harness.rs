//! The test harness for running Wordle strategies.

use std::{collections::HashSet, ops::Deref, sync::Arc};

use log::{debug, info, trace};
use rand::seq::index::sample;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{
    game::{Game, SimulatedGame, Submission, Transcript},
    perf::Perf,
    strategy::Strategy,
    words::{Dictionary, Word},
    HarnessError, Result, StrategyError,
};

/// Plays one game to the end with `strategy` and closes it.
///
/// Words the game rejects are handed back to the strategy with
/// [`Strategy::reject()`] and the same attempt is asked for again, so a
/// strategy that keeps proposing unknown words eventually runs out of them
/// and the game fails with [`StrategyError::Exhausted`]. Offering a rejected
/// word a second time fails with [`StrategyError::Repeated`].
///
/// # Examples
///
/// ```rust
/// use wordle_es::{game::SimulatedGame, harness::play_game, strategy::Basic};
/// use wordle_es::{Dictionary, Word, WordList};
///
/// let words = WordList::new(["pieza", "avena", "razón"]);
/// let mut basic = Basic::from_source(&words)?;
/// let mut game = SimulatedGame::new(Word::new("razón")?, Dictionary::from_source(&words)?);
///
/// let transcript = play_game(&mut basic, &mut game)?;
/// assert!(transcript.is_won());
/// # Ok::<_, wordle_es::WordleError>(())
/// ```
pub fn play_game(strategy: &mut dyn Strategy, game: &mut dyn Game) -> Result<Transcript> {
    game.play()?;
    let mut rejected = HashSet::new();

    while !game.is_finished() {
        let word = strategy.next_word(game.attempts(), game.constraints())?;
        if rejected.contains(&word) {
            return Err(StrategyError::Repeated(word).into());
        }

        match game.new_attempt(&word)? {
            Submission::Accepted(_) => trace!("{} played {}", strategy, word),
            Submission::Rejected => {
                debug!("{} was rejected, asking {} again", word, strategy);
                strategy.reject(&word);
                rejected.insert(word);
            }
        }
    }

    game.close()
}

/// A test harness that can run many strategies on many puzzles.
///
/// When you want to test your strategies, create a new test harness
/// with [`new()`](Harness::new()). You can then configure it using various
/// methods. Note that these configuration methods consume the existing
/// [`Harness`] and return a new one.
///
/// Every strategy plays a [`SimulatedGame`] for each puzzle, checked against
/// the harness' [`Dictionary`]. With the `parallel` feature the strategies
/// run concurrently, each on its own thread.
///
/// # Examples
///
/// ```rust
/// # use wordle_es::harness::Harness;
/// use wordle_es::{strategy::Stupid, Dictionary, WordList, WordSource};
///
/// let words = WordList::new(["pieza", "avena", "razón"]);
///
/// let mut harness = Harness::new()
///     .quiet()
///     .dictionary(Dictionary::from_source(&words)?)
///     .add_strategy(Box::new(Stupid::from_source(&words)?))
///     .add_puzzles(words.get_words()?.iter().cloned())
///     .test_all();
///
/// let results = harness.run()?;
/// assert_eq!(results[0].num_tried(), 3);
/// # Ok::<_, wordle_es::WordleError>(())
/// ```
#[derive(Debug)]
pub struct Harness {
    strategies: Vec<Box<dyn Strategy>>,
    dictionary: Arc<Dictionary>,
    puzzles: Vec<Word>,
    verbose: bool,
    num_puzzles: Option<usize>,
}

impl Default for Harness {
    fn default() -> Self {
        Harness {
            strategies: Vec::new(),
            dictionary: Arc::new(Dictionary::default()),
            puzzles: Vec::new(),
            verbose: false,
            num_puzzles: Some(100),
        }
    }
}

impl Harness {
    /// Creates a new test harness with default configuration.
    ///
    /// Defaults:
    /// 1. tests no strategies on no puzzles
    /// 2. an empty dictionary, which rejects every word
    /// 3. quiet mode
    /// 4. runs each strategy on 100 of the puzzles chosen at random
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the harness verbose while testing.
    ///
    /// As of right now, this consists of a progress bar and nothing else.
    pub fn verbose(self) -> Self {
        Harness {
            verbose: true,
            ..self
        }
    }

    /// Makes the harness silent while testing.
    pub fn quiet(self) -> Self {
        Harness {
            verbose: false,
            ..self
        }
    }

    /// Sets the words the games accept.
    pub fn dictionary(self, dictionary: impl Into<Arc<Dictionary>>) -> Self {
        Harness {
            dictionary: dictionary.into(),
            ..self
        }
    }

    /// Adds a strategy to the harness for testing.
    pub fn add_strategy(self, strat: Box<dyn Strategy>) -> Self {
        let mut strategies = self.strategies;
        strategies.push(strat);
        Harness { strategies, ..self }
    }

    /// Adds a [`Vec`] of strategies to the harness for testing.
    pub fn add_strategies(self, strats: Vec<Box<dyn Strategy>>) -> Self {
        let mut strategies = self.strategies;
        strategies.extend(strats);
        Harness { strategies, ..self }
    }

    /// Adds solutions for the strategies to find.
    pub fn add_puzzles(self, puzzles: impl IntoIterator<Item = Word>) -> Self {
        let mut all = self.puzzles;
        all.extend(puzzles);
        Harness {
            puzzles: all,
            ..self
        }
    }

    /// Sets the harness to test each strategy on every puzzle, in order.
    pub fn test_all(self) -> Self {
        Harness {
            num_puzzles: None,
            ..self
        }
    }

    /// Sets the harness to test each strategy on `n` random puzzles, or all
    /// of them if there are fewer.
    pub fn test_num(self, n: usize) -> Self {
        Harness {
            num_puzzles: Some(n),
            ..self
        }
    }

    fn pick_puzzles(&self) -> Vec<Word> {
        match self.num_puzzles {
            Some(n) if n < self.puzzles.len() => {
                let mut rng = rand::thread_rng();
                sample(&mut rng, self.puzzles.len(), n)
                    .iter()
                    .map(|i| self.puzzles[i].clone())
                    .collect()
            }
            _ => self.puzzles.clone(),
        }
    }

    /// Runs the harness and produces performances for each strategy.
    ///
    /// Each strategy is [reset](Strategy::reset()) before every game. The
    /// [`Perf`]s will be in the same order as the strategies were added to
    /// the harness. A game that fails stops the whole run.
    pub fn run(&mut self) -> Result<Record> {
        if self.strategies.is_empty() {
            return Err(HarnessError::NoStrategiesAdded.into());
        }
        if self.puzzles.is_empty() {
            return Err(HarnessError::NoPuzzles.into());
        }

        let puzzles = self.pick_puzzles();
        info!(
            "running {} strategies on {} puzzles",
            self.strategies.len(),
            puzzles.len()
        );

        let progress = progress_bar(self.verbose, puzzles.len() * self.strategies.len());
        let dictionary = &self.dictionary;
        let run_one = |strategy: &mut Box<dyn Strategy>| -> Result<Perf> {
            let mut perf = Perf::new(strategy.as_ref());
            for puzzle in &puzzles {
                strategy.reset();
                let mut game = SimulatedGame::new(puzzle.clone(), dictionary.clone());
                let transcript = play_game(strategy.as_mut(), &mut game)?;
                perf.tries.push((puzzle.clone(), transcript));
                progress.inc(1);
            }
            Ok(perf)
        };

        #[cfg(feature = "parallel")]
        let perfs = self
            .strategies
            .par_iter_mut()
            .map(run_one)
            .collect::<Result<Vec<_>>>()?;
        #[cfg(not(feature = "parallel"))]
        let perfs = self
            .strategies
            .iter_mut()
            .map(run_one)
            .collect::<Result<Vec<_>>>()?;

        progress.finish();
        Ok(Record::new(perfs))
    }

    /// Runs the harness (see [`run()`](Harness::run())) and prints performance
    /// summaries of each strategy.
    pub fn run_and_summarize(&mut self) -> Result<Record> {
        let perfs = self.run()?;
        for perf in perfs.iter() {
            println!("{}", perf);
        }
        Ok(perfs)
    }
}

#[cfg(feature = "fancy")]
type Progress = indicatif::ProgressBar;

#[cfg(feature = "fancy")]
fn progress_bar(verbose: bool, len: usize) -> Progress {
    if verbose {
        Progress::new(len as u64)
    } else {
        Progress::hidden()
    }
}

#[cfg(not(feature = "fancy"))]
struct Progress;

#[cfg(not(feature = "fancy"))]
impl Progress {
    fn inc(&self, _delta: u64) {}

    fn finish(&self) {}
}

#[cfg(not(feature = "fancy"))]
fn progress_bar(_verbose: bool, _len: usize) -> Progress {
    Progress
}

/// The performances of every strategy of one harness run.
#[derive(Debug, Clone, Default)]
pub struct Record {
    perfs: Vec<Perf>,
}

impl Deref for Record {
    type Target = [Perf];

    fn deref(&self) -> &Self::Target {
        &self.perfs
    }
}

impl Record {
    fn new(perfs: Vec<Perf>) -> Self {
        Self { perfs }
    }

    /// Prints every performance with its histogram and missed puzzles.
    pub fn print_report(&self) -> Result<()> {
        for perf in self.perfs.iter() {
            perf.print()?;
        }
        Ok(())
    }
}
