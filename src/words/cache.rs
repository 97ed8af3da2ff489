//! Caching a slow word source on disk.

use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use log::{debug, info};
use once_cell::unsync::OnceCell;

use super::{Word, WordList, WordSource};

/// Wraps another [`WordSource`] and keeps its words in a JSON file.
///
/// When the cache file exists it is read instead of asking the inner source.
/// Otherwise the inner source is asked once and the result is written to the
/// cache file. The file format is an implementation detail.
#[derive(Debug)]
pub struct JsonCache<S> {
    inner: S,
    path: PathBuf,
    words: OnceCell<WordList>,
}

impl<S: WordSource> JsonCache<S> {
    pub fn new(inner: S, path: impl AsRef<Path>) -> Self {
        JsonCache {
            inner,
            path: path.as_ref().to_path_buf(),
            words: OnceCell::new(),
        }
    }

    fn load(&self) -> crate::Result<WordList> {
        if self.path.exists() {
            let file = File::open(&self.path)?;
            let words: Vec<Word> = serde_json::from_reader(BufReader::new(file))?;
            debug!("loaded {} cached words from {}", words.len(), self.path.display());
            return Ok(words.into_iter().collect());
        }

        let words = self.inner.get_words()?;
        let mut writer = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer(&mut writer, words)?;
        writer.flush()?;
        info!("cached {} words in {}", words.len(), self.path.display());
        Ok(words.iter().cloned().collect())
    }
}

impl<S: WordSource> WordSource for JsonCache<S> {
    fn get_words(&self) -> crate::Result<&[Word]> {
        self.words.get_or_try_init(|| self.load())?.get_words()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn writes_then_reads_cache() -> crate::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("palabras.json");

        let fresh = JsonCache::new(WordList::new(["razón", "pieza"]), &path);
        assert_eq!(fresh.get_words()?.len(), 2);
        assert!(path.exists());

        // The inner source is ignored once the cache exists.
        let cached = JsonCache::new(WordList::default(), &path);
        let words: Vec<&str> = cached.get_words()?.iter().map(Word::as_str).collect();
        assert_eq!(words, ["razón", "pieza"]);
        Ok(())
    }

    #[test]
    fn unreadable_cache_is_an_error() -> crate::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("palabras.json");
        std::fs::write(&path, "not json")?;

        let cache = JsonCache::new(WordList::new(["razón"]), &path);
        assert!(matches!(cache.get_words(), Err(crate::WordleError::Serde(_))));
        Ok(())
    }
}
