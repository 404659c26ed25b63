// TF-IDF vector space over one field of a corpus.
//
// The corpus texts are the fitting documents: the vocabulary is every
// whitespace token appearing in any of them, and idf uses the smoothed
// form ln((1 + n) / (1 + df)) + 1 so no term weight is ever zero or
// negative. The query is projected into the same space; out-of-vocabulary
// query terms contribute nothing. All vectors are L2-normalized at
// transform time, so cosine similarity reduces to a dot product and lands
// in [0, 1] for these non-negative weights.

use std::collections::{HashMap, HashSet};

/// Per-field similarity outcome.
///
/// `NoSignal` is the explicit replacement for swallowing a vectorization
/// error: an all-empty field across the corpus yields no vocabulary, and
/// the caller substitutes a uniform 0.0 instead of failing the pipeline.
/// Keeping it as a variant lets callers tell "no signal" from a crash.
pub enum FieldSignal {
    /// One cosine score per corpus text, aligned by position.
    Scores(Vec<f64>),
    /// Empty vocabulary — the field carries no information.
    NoSignal,
}

/// A fitted TF-IDF vector space.
pub struct TfIdfModel {
    /// Term -> dimension index, in first-seen corpus order (deterministic).
    vocabulary: HashMap<String, usize>,
    /// Inverse document frequency per dimension.
    idf: Vec<f64>,
}

impl TfIdfModel {
    /// Fit a vector space over the given documents.
    ///
    /// Returns `None` when the documents produce an empty vocabulary
    /// (all empty or whitespace-only) — the degenerate case callers map
    /// to `FieldSignal::NoSignal`.
    pub fn fit(documents: &[String]) -> Option<Self> {
        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut document_frequency: Vec<usize> = Vec::new();

        for document in documents {
            let mut seen: HashSet<&str> = HashSet::new();
            for token in document.split_whitespace() {
                if !seen.insert(token) {
                    continue;
                }
                match vocabulary.get(token) {
                    Some(&index) => document_frequency[index] += 1,
                    None => {
                        vocabulary.insert(token.to_string(), vocabulary.len());
                        document_frequency.push(1);
                    }
                }
            }
        }

        if vocabulary.is_empty() {
            return None;
        }

        let n = documents.len() as f64;
        let idf = document_frequency
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        Some(Self { vocabulary, idf })
    }

    /// Project a text into the fitted space as an L2-normalized vector.
    ///
    /// A text with no in-vocabulary terms transforms to the all-zero
    /// vector (its cosine against anything is 0.0 by convention).
    pub fn transform(&self, text: &str) -> Vec<f64> {
        let mut vector = vec![0.0; self.vocabulary.len()];

        for token in text.split_whitespace() {
            if let Some(&index) = self.vocabulary.get(token) {
                vector[index] += self.idf[index];
            }
        }

        let norm = vector.iter().map(|w| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for weight in &mut vector {
                *weight /= norm;
            }
        }

        vector
    }
}

/// Cosine similarity between one query text and each corpus text, fitted
/// on the corpus texts.
///
/// Scores are aligned by corpus position. An empty vocabulary is not an
/// error: it comes back as `FieldSignal::NoSignal` for the caller to
/// substitute zeros.
pub fn field_similarity(corpus_texts: &[String], query_text: &str) -> FieldSignal {
    let Some(model) = TfIdfModel::fit(corpus_texts) else {
        return FieldSignal::NoSignal;
    };

    let query = model.transform(query_text);

    let scores = corpus_texts
        .iter()
        .map(|text| dot(&model.transform(text), &query))
        .collect();

    FieldSignal::Scores(scores)
}

/// Dot product of two L2-normalized vectors (their cosine similarity).
fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}
