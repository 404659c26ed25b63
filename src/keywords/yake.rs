// YAKE-backed candidate source.
//
// Uses the `keyword_extraction` crate's YAKE implementation: statistical
// keyword extraction that weighs term position, frequency, and context,
// with no training step. YAKE scores are inverted relative to the other
// extractors in that crate — lower means more relevant — which is exactly
// the convention the `CandidateSource` trait expects.

use keyword_extraction::yake::{Yake, YakeParams};
use stop_words::{get, LANGUAGE};

use super::traits::CandidateSource;

/// Default maximum phrase length (words per candidate).
pub const DEFAULT_MAX_PHRASE_LEN: usize = 3;
/// Default deduplication threshold for near-identical candidates.
pub const DEFAULT_DEDUP_THRESHOLD: f32 = 0.3;
/// Default co-occurrence window size.
pub const DEFAULT_WINDOW_SIZE: usize = 2;

/// Candidate phrase source backed by YAKE.
pub struct YakeSource {
    /// Stopwords handed to the extractor.
    stop_words: Vec<String>,
    /// Maximum words per candidate phrase.
    pub max_phrase_len: usize,
    /// Candidates more similar than this are collapsed.
    pub dedup_threshold: f32,
    /// Context window for the co-occurrence statistics.
    pub window_size: usize,
}

impl Default for YakeSource {
    fn default() -> Self {
        Self::new(
            DEFAULT_MAX_PHRASE_LEN,
            DEFAULT_DEDUP_THRESHOLD,
            DEFAULT_WINDOW_SIZE,
        )
    }
}

impl YakeSource {
    /// Create a YAKE source with the given tunables and the English
    /// stopword list.
    pub fn new(max_phrase_len: usize, dedup_threshold: f32, window_size: usize) -> Self {
        Self {
            stop_words: get(LANGUAGE::English),
            max_phrase_len,
            dedup_threshold,
            window_size,
        }
    }
}

impl CandidateSource for YakeSource {
    fn extract_candidates(&self, text: &str, top_n: usize) -> Vec<(String, f32)> {
        let yake = Yake::new(YakeParams::All(
            text,
            &self.stop_words,
            None,
            self.dedup_threshold,
            self.max_phrase_len,
            self.window_size,
        ));

        yake.get_ranked_keyword_scores(top_n)
    }
}
