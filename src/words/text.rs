//! Word lists stored as plain text files.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use log::{debug, trace};
use once_cell::unsync::OnceCell;

use super::{Word, WordList, WordSource};

/// A word list read from a text file.
///
/// Each line holds a word, optionally followed by whitespace and a frequency
/// count, which is ignored. The order of the lines is the order of the list,
/// so a file sorted by frequency gives a frequency-ordered source. Lines that
/// are not valid [`candidate`](super::candidate)s are skipped.
///
/// The file is read the first time the words are requested.
#[derive(Debug)]
pub struct TextSource {
    path: PathBuf,
    words: OnceCell<WordList>,
}

impl TextSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        TextSource {
            path: path.as_ref().to_path_buf(),
            words: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Parses a word list in the [`TextSource`] format.
pub fn parse(reader: impl BufRead) -> crate::Result<WordList> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        match line.split_whitespace().next() {
            Some(word) => lines.push(word.to_string()),
            None => trace!("skipping blank line"),
        }
    }
    Ok(WordList::new(lines))
}

impl WordSource for TextSource {
    fn get_words(&self) -> crate::Result<&[Word]> {
        let list = self.words.get_or_try_init(|| {
            let file = File::open(&self.path)?;
            let list = parse(BufReader::new(file))?;
            debug!("read {} words from {}", list.len(), self.path.display());
            Ok::<_, crate::WordleError>(list)
        })?;
        list.get_words()
    }
}
