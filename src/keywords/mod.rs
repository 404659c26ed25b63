// Keyword extraction over pipe-delimited text partitions.
//
// Each partition is processed independently: detect a course-code style
// source tag, run statistical candidate extraction, then filter the
// candidate phrases down to individual scored words. Partition order and
// within-partition emission order are preserved in the combined output.

pub mod traits;
pub mod yake;

use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::text::Normalizer;
use traits::CandidateSource;

pub use yake::YakeSource;

/// Source label used when a partition carries no course-code tag.
pub const DEFAULT_SOURCE: &str = "work experience";

/// One extracted keyword: a single punctuation-stripped word, an integer
/// score on a nominal 0-100 scale, and the label of the text partition it
/// came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Keyword {
    pub phrase: String,
    pub score: u32,
    pub source: String,
}

/// Keyword extraction pipeline: candidate source plus the source-tag
/// pattern (4 uppercase letters followed by 4 digits, e.g. `COMP1511`).
pub struct KeywordExtractor<S: CandidateSource> {
    source: S,
    tag_pattern: Regex,
}

impl<S: CandidateSource> KeywordExtractor<S> {
    /// Wrap a candidate source in the partition/filter pipeline.
    pub fn new(source: S) -> Self {
        Self {
            source,
            tag_pattern: Regex::new("[A-Z]{4}[0-9]{4}").expect("tag pattern is valid"),
        }
    }

    /// Extract keywords from every `|`-delimited partition of `text`,
    /// concatenated in partition order. A trailing empty partition (the
    /// input convention is pipe-terminated) is discarded.
    pub fn extract(&self, text: &str, top_n: usize, normalizer: &Normalizer) -> Vec<Keyword> {
        let mut partitions: Vec<&str> = text.split('|').collect();
        if partitions.len() > 1 && partitions.last().is_some_and(|p| p.is_empty()) {
            partitions.pop();
        }

        partitions
            .iter()
            .flat_map(|partition| self.extract_partition(partition, top_n, normalizer))
            .collect()
    }

    fn extract_partition(
        &self,
        partition: &str,
        top_n: usize,
        normalizer: &Normalizer,
    ) -> Vec<Keyword> {
        // A course-code tag anywhere in the partition labels its keywords;
        // free-form text defaults to the work experience label
        let (source_label, cleaned) = match self.tag_pattern.find(partition) {
            Some(m) => {
                let tag = m.as_str().to_string();
                (tag.clone(), partition.replacen(&tag, "", 1))
            }
            None => (DEFAULT_SOURCE.to_string(), partition.to_string()),
        };

        let cleaned = cleaned.replace(['\'', '"'], "");
        let candidates = self.source.extract_candidates(&cleaned.to_lowercase(), top_n);

        let mut emitted: Vec<String> = Vec::new();
        let mut keywords = Vec::new();

        for (phrase, relevance) in candidates {
            if relevance <= 0.0 {
                // Input-contract violation: the source must never emit a
                // zero relevance. Skip rather than divide by it.
                debug_assert!(relevance > 0.0, "candidate source emitted relevance {relevance}");
                warn!(phrase = %phrase, relevance, "skipping candidate with non-positive relevance");
                continue;
            }

            let score = ((1.0 / f64::from(relevance)).powf(0.2) * 100.0).round() as u32;

            for word in phrase.split_whitespace() {
                let word: String = word.chars().filter(|c| !c.is_ascii_punctuation()).collect();
                if word.is_empty() {
                    continue;
                }
                let lower = word.to_lowercase();
                if normalizer.is_stopword(&lower) || emitted.contains(&lower) {
                    continue;
                }

                emitted.push(lower);
                keywords.push(Keyword {
                    phrase: word,
                    score,
                    source: source_label.clone(),
                });
            }
        }

        keywords
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic stand-in for the statistical extractor.
    struct FixedSource(Vec<(String, f32)>);

    impl CandidateSource for FixedSource {
        fn extract_candidates(&self, _text: &str, top_n: usize) -> Vec<(String, f32)> {
            self.0.iter().take(top_n).cloned().collect()
        }
    }

    fn fixed(candidates: &[(&str, f32)]) -> KeywordExtractor<FixedSource> {
        KeywordExtractor::new(FixedSource(
            candidates
                .iter()
                .map(|(p, r)| (p.to_string(), *r))
                .collect(),
        ))
    }

    #[test]
    fn test_phrase_splits_into_words() {
        let extractor = fixed(&[("machine learning", 0.05)]);
        let norm = Normalizer::new();
        let keywords = extractor.extract("some text", 5, &norm);

        let words: Vec<&str> = keywords.iter().map(|k| k.phrase.as_str()).collect();
        assert_eq!(words, vec!["machine", "learning"]);
    }

    #[test]
    fn test_no_duplicate_words_within_partition() {
        let extractor = fixed(&[("machine learning", 0.05), ("learning systems", 0.2)]);
        let norm = Normalizer::new();
        let keywords = extractor.extract("some text", 5, &norm);

        let words: Vec<&str> = keywords.iter().map(|k| k.phrase.as_str()).collect();
        assert_eq!(words, vec!["machine", "learning", "systems"]);
    }

    #[test]
    fn test_duplicates_allowed_across_partitions() {
        let extractor = fixed(&[("rust", 0.1)]);
        let norm = Normalizer::new();
        let keywords = extractor.extract("first|second|", 5, &norm);

        assert_eq!(keywords.len(), 2);
        assert_eq!(keywords[0].phrase, "rust");
        assert_eq!(keywords[1].phrase, "rust");
    }

    #[test]
    fn test_score_maps_inverse_relevance() {
        // (1 / 0.00001)^0.2 * 100 = 10 * 100 = 1000
        let extractor = fixed(&[("signal", 0.00001)]);
        let norm = Normalizer::new();
        let keywords = extractor.extract("text", 5, &norm);

        assert_eq!(keywords[0].score, 1000);
    }

    #[test]
    fn test_lower_relevance_scores_higher() {
        let extractor = fixed(&[("kubernetes", 0.01), ("terraform", 0.9)]);
        let norm = Normalizer::new();
        let keywords = extractor.extract("text", 5, &norm);

        let strong = keywords.iter().find(|k| k.phrase == "kubernetes").unwrap();
        let weak = keywords.iter().find(|k| k.phrase == "terraform").unwrap();
        assert!(strong.score > weak.score);
    }

    #[test]
    fn test_stopwords_filtered_from_output() {
        let extractor = fixed(&[("the pipeline", 0.1)]);
        let norm = Normalizer::new();
        let keywords = extractor.extract("text", 5, &norm);

        let words: Vec<&str> = keywords.iter().map(|k| k.phrase.as_str()).collect();
        assert_eq!(words, vec!["pipeline"]);
    }

    #[test]
    fn test_source_tag_detected_and_removed() {
        let extractor = fixed(&[("data structures", 0.1)]);
        let norm = Normalizer::new();
        let keywords = extractor.extract("COMP2521 data structures and algorithms|", 5, &norm);

        assert!(keywords.iter().all(|k| k.source == "COMP2521"));
    }

    #[test]
    fn test_default_source_label() {
        let extractor = fixed(&[("warehouse automation", 0.1)]);
        let norm = Normalizer::new();
        let keywords = extractor.extract("led warehouse automation projects", 5, &norm);

        assert!(keywords.iter().all(|k| k.source == DEFAULT_SOURCE));
    }

    #[test]
    fn test_trailing_empty_partition_discarded() {
        let extractor = fixed(&[("rust", 0.1)]);
        let norm = Normalizer::new();

        let with_trailing = extractor.extract("only partition|", 5, &norm);
        let without = extractor.extract("only partition", 5, &norm);
        assert_eq!(with_trailing.len(), without.len());
    }

    #[test]
    #[should_panic(expected = "relevance")]
    fn test_zero_relevance_asserts_in_debug() {
        let extractor = fixed(&[("broken", 0.0)]);
        let norm = Normalizer::new();
        let _ = extractor.extract("text", 5, &norm);
    }
}
