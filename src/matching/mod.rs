// Weighted multi-field ranking.
//
// Each field contributes one similarity vector (via the TF-IDF engine),
// scaled by its configured weight and summed per record. The final order
// is a stable descending sort, so equal scores keep their original corpus
// position and the output is deterministic.

use std::cmp::Ordering;

use tracing::debug;

use crate::similarity::{field_similarity, FieldSignal};

/// One field's contribution to the aggregate score: already-normalized
/// corpus texts (aligned with the record order), the normalized query
/// text for that field, and the field's weight.
pub struct WeightedField {
    /// Field name, for logging only.
    pub name: &'static str,
    /// Multiplier applied to this field's similarity scores.
    pub weight: f64,
    /// Normalized field text per record, in corpus order.
    pub corpus: Vec<String>,
    /// Normalized query text for the same field.
    pub query: String,
}

/// A ranked record: identifier plus aggregate score.
///
/// The score is Σ(weight × similarity) over the configured fields, so it
/// has no fixed upper bound once weights exceed 1 — only the relative
/// order is meaningful.
#[derive(Debug, Clone)]
pub struct Match {
    pub id: String,
    pub score: f64,
}

/// Rank records by weighted multi-field similarity, highest first.
///
/// Fields whose corpus produced no vocabulary contribute a uniform 0.0
/// (never an error). Ties preserve corpus order.
pub fn rank(ids: &[String], fields: &[WeightedField]) -> Vec<Match> {
    let mut scores = vec![0.0; ids.len()];

    for field in fields {
        match field_similarity(&field.corpus, &field.query) {
            FieldSignal::Scores(similarities) => {
                for (score, similarity) in scores.iter_mut().zip(similarities.iter()) {
                    *score += field.weight * similarity;
                }
            }
            FieldSignal::NoSignal => {
                debug!(field = field.name, "empty vocabulary, field contributes 0.0");
            }
        }
    }

    let mut matches: Vec<Match> = ids
        .iter()
        .zip(scores)
        .map(|(id, score)| Match {
            id: id.clone(),
            score,
        })
        .collect();

    // Stable sort: equal scores keep original corpus order
    matches.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn texts(items: &[&str]) -> Vec<String> {
        items.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_single_field_ranking() {
        let matches = rank(
            &ids(&["a", "b"]),
            &[WeightedField {
                name: "skills",
                weight: 1.0,
                corpus: texts(&["rust tokio", "gardening"]),
                query: "rust tokio".to_string(),
            }],
        );

        assert_eq!(matches[0].id, "a");
        assert!((matches[0].score - 1.0).abs() < 1e-9);
        assert_eq!(matches[1].id, "b");
    }

    #[test]
    fn test_weights_scale_contributions() {
        // Identical single-term fields, but the second field is weighted 2x
        let matches = rank(
            &ids(&["a"]),
            &[
                WeightedField {
                    name: "degree",
                    weight: 1.0,
                    corpus: texts(&["math"]),
                    query: "math".to_string(),
                },
                WeightedField {
                    name: "courses",
                    weight: 2.0,
                    corpus: texts(&["math"]),
                    query: "math".to_string(),
                },
            ],
        );

        assert!((matches[0].score - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_ties_keep_corpus_order() {
        // Both records are equally dissimilar from the query (score 0.0)
        let matches = rank(
            &ids(&["first", "second", "third"]),
            &[WeightedField {
                name: "target",
                weight: 1.0,
                corpus: texts(&["alpha", "beta", "gamma"]),
                query: "unrelated".to_string(),
            }],
        );

        let order: Vec<&str> = matches.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(order, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_no_signal_field_contributes_zero() {
        let matches = rank(
            &ids(&["a", "b"]),
            &[
                WeightedField {
                    name: "empty",
                    weight: 5.0,
                    corpus: texts(&["", ""]),
                    query: "anything".to_string(),
                },
                WeightedField {
                    name: "skills",
                    weight: 1.0,
                    corpus: texts(&["rust", "python"]),
                    query: "rust".to_string(),
                },
            ],
        );

        assert_eq!(matches[0].id, "a");
        assert!((matches[0].score - 1.0).abs() < 1e-9);
        assert!(matches[1].score.abs() < 1e-9);
    }

    #[test]
    fn test_descending_order_invariant() {
        let matches = rank(
            &ids(&["a", "b", "c"]),
            &[WeightedField {
                name: "target",
                weight: 1.0,
                corpus: texts(&["rust web service", "rust cli", "cooking"]),
                query: "rust web".to_string(),
            }],
        );

        for pair in matches.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }
}
