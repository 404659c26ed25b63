// Plain requirement matching: records are an `Id:` plus one free-text
// blob, ranked by a single TF-IDF signal.

use anyhow::Result;
use tracing::info;

use crate::corpus;
use crate::matching::{rank, Match, WeightedField};
use crate::text::Normalizer;

const TARGET_WEIGHT: f64 = 1.0;

/// Rank every record in `corpus` against the subject text, best match
/// first.
pub fn run(subject: &str, corpus_text: &str, normalizer: &Normalizer) -> Result<Vec<Match>> {
    let records = corpus::parse_plain(corpus_text)?;

    let ids: Vec<String> = records.iter().map(|r| r.id.clone()).collect();
    let fields = [WeightedField {
        name: "target",
        weight: TARGET_WEIGHT,
        corpus: records
            .iter()
            .map(|r| normalizer.normalize(r.field("target")))
            .collect(),
        query: normalizer.normalize(subject),
    }];

    let matches = rank(&ids, &fields);
    info!(records = matches.len(), "ranked records against subject text");

    Ok(matches)
}
