//! Folding accented Spanish vowels onto their plain ASCII letters.
//!
//! Every comparison in this crate happens on normalized letters, so `razón`
//! and `razon` are the same word. `ñ` is a letter of its own and is left
//! untouched.

use itertools::Itertools;

const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// Maps a single character to its unaccented form.
pub fn normalize_char(c: char) -> char {
    match c {
        'á' => 'a',
        'é' => 'e',
        'í' => 'i',
        'ó' => 'o',
        'ú' | 'ü' => 'u',
        'Á' => 'A',
        'É' => 'E',
        'Í' => 'I',
        'Ó' => 'O',
        'Ú' | 'Ü' => 'U',
        other => other,
    }
}

/// Replaces every accented vowel in `text` with its unaccented form.
///
/// # Examples
///
/// ```rust
/// use wordle_es::normalize;
///
/// assert_eq!(normalize("cañón"), "cañon");
/// assert_eq!(normalize("pingüino"), "pinguino");
/// ```
pub fn normalize(text: &str) -> String {
    text.chars().map(normalize_char).collect()
}

/// Returns true if `c` is one of the five vowels once normalized.
pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&normalize_char(c).to_ascii_lowercase())
}

/// Counts how many different vowels appear in `word`.
///
/// Accented and plain spellings count as the same vowel, so `"aéreo"` has
/// three distinct vowels.
pub fn distinct_vowels(word: &str) -> usize {
    word.chars()
        .map(|c| normalize_char(c).to_ascii_lowercase())
        .filter(|c| VOWELS.contains(c))
        .unique()
        .count()
}
