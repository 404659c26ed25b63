// Free-text normalization applied to every field before vectorization.
//
// The cleanup mirrors what both sides of a comparison go through: strip
// apostrophes, collapse digits and punctuation to spaces, lowercase, drop
// English stopwords, and reduce each surviving token to its base form.
// Query and corpus must pass through the exact same function or the
// cosine scores become meaningless.

use std::collections::HashSet;

use regex_lite::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use stop_words::{get, LANGUAGE};

/// Shared normalization service: stopword set, stemmer, and the compiled
/// non-word pattern, loaded once at startup and passed by reference.
///
/// `normalize` is deterministic and side-effect free; it runs once per
/// field per record, so construction cost (stopword list, regex compile)
/// is paid here rather than per call.
pub struct Normalizer {
    stopwords: HashSet<String>,
    stemmer: Stemmer,
    non_word: Regex,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    /// Build the normalizer with the English stopword list and the
    /// English Snowball stemmer.
    pub fn new() -> Self {
        let words: Vec<String> = get(LANGUAGE::English);
        let stopwords: HashSet<String> = words.into_iter().collect();

        Self {
            stopwords,
            stemmer: Stemmer::create(Algorithm::English),
            // Any run of digits or non-word characters becomes one space
            non_word: Regex::new(r"[\d\W]+").expect("non-word pattern is valid"),
        }
    }

    /// Normalize a free-text field for vectorization.
    ///
    /// Empty input yields empty output; there is no failure mode.
    pub fn normalize(&self, text: &str) -> String {
        let stripped = text.replace('\'', "");
        let spaced = self.non_word.replace_all(&stripped, " ");
        let lowered = spaced.to_lowercase();

        let tokens: Vec<String> = lowered
            .split_whitespace()
            .filter(|word| !self.stopwords.contains(*word))
            .map(|word| self.stemmer.stem(word).into_owned())
            .collect();

        tokens.join(" ")
    }

    /// Case-insensitive stopword check, used by the keyword filter which
    /// must not stem its output words.
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }
}
