use std::{error::Error, path::PathBuf, process::ExitCode};

use clap::Parser;
use log::{info, warn};
use wordle_es::{
    harness::Harness,
    strategy::{Basic, LetterWeights, Stupid},
    words::{JsonCache, TextSource},
    Dictionary, Word, WordSource, WordleError,
};

/// Plays the Spanish Wordle with the built-in strategies and reports how they
/// did.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Guess list, one word per line, most frequent first.
    ///
    /// Anything after the first whitespace of a line, such as a count, is
    /// ignored.
    #[arg(short, long)]
    words: PathBuf,

    /// Words the games accept. Defaults to the guess list.
    #[arg(short, long)]
    dictionary: Option<PathBuf>,

    /// Keeps the parsed guess list in this JSON file and reads it from there
    /// on later runs.
    #[arg(long)]
    cache: Option<PathBuf>,

    /// Tries the candidates with the most common letters first.
    #[arg(long)]
    weighted: bool,

    /// Always opens with this word.
    #[arg(short, long)]
    first: Option<Word>,

    /// The number of puzzles to run, chosen at random.
    ///
    /// If not passed, all given solutions are run, or 100 words of the guess
    /// list when no solutions are given.
    #[arg(short, long)]
    num: Option<usize>,

    /// Also runs a strategy that ignores all feedback, for comparison.
    #[arg(long)]
    baseline: bool,

    /// Shows progress and every game played.
    #[arg(short, long)]
    verbose: bool,

    /// Solutions to play.
    solutions: Vec<Word>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {}", cause);
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), WordleError> {
    let source = TextSource::new(&args.words);
    let words: Vec<Word> = match &args.cache {
        Some(cache) => JsonCache::new(source, cache).get_words()?.to_vec(),
        None => source.get_words()?.to_vec(),
    };
    info!("loaded {} words from {}", words.len(), args.words.display());

    let dictionary: Dictionary = match &args.dictionary {
        Some(path) => Dictionary::from_source(&TextSource::new(path))?,
        None => words.iter().cloned().collect(),
    };

    for solution in &args.solutions {
        if !words.contains(solution) {
            warn!("{} is not in the guess list and cannot be found", solution);
        }
    }

    let mut basic = Basic::new(words.clone());
    if let Some(first) = args.first {
        basic = basic.first_word(first);
    }
    if args.weighted {
        basic = basic.weighted(LetterWeights::spanish());
    }

    let mut harness = Harness::new()
        .dictionary(dictionary)
        .add_strategy(Box::new(basic));
    if args.baseline {
        harness = harness.add_strategy(Box::new(Stupid::new(words.clone())));
    }
    if args.verbose {
        harness = harness.verbose();
    }

    let show_games = args.verbose || !args.solutions.is_empty();
    harness = if args.solutions.is_empty() {
        harness.add_puzzles(words).test_num(args.num.unwrap_or(100))
    } else {
        let harness = harness.add_puzzles(args.solutions);
        match args.num {
            Some(n) => harness.test_num(n),
            None => harness.test_all(),
        }
    };

    let record = harness.run()?;

    if show_games {
        for perf in record.iter() {
            println!("{}", perf.strategy_name());
            for (solution, transcript) in perf.tries() {
                let guesses: Vec<&str> = transcript.guesses().map(Word::as_str).collect();
                println!("{}: {}", solution.to_uppercase(), guesses.join(" "));
                println!("{}\n", transcript);
            }
        }
    }

    record.print_report()
}
