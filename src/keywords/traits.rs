// The statistical extraction seam.
//
// Candidate ranking is a black-box capability: give it text and a count,
// get back scored phrases. Keeping it behind a one-method trait means the
// surrounding filter/score logic never changes when the backing algorithm
// does.

/// A source of scored candidate phrases for keyword extraction.
pub trait CandidateSource {
    /// Extract up to `top_n` candidate phrases from `text`.
    ///
    /// Relevance follows the YAKE convention: lower values mean more
    /// relevant phrases, and a well-behaved source never emits a
    /// relevance of zero or below.
    fn extract_candidates(&self, text: &str, top_n: usize) -> Vec<(String, f32)>;
}
