// Project matching: rank projects against a subject's free-text profile.
//
// Three fields contribute independent TF-IDF similarity signals, all
// compared against the same normalized subject text.

use anyhow::Result;
use tracing::info;

use crate::corpus::{self, FieldSpec};
use crate::matching::{rank, Match, WeightedField};
use crate::text::Normalizer;

const SKILLS_WEIGHT: f64 = 1.0;
const TOPICS_WEIGHT: f64 = 1.0;
const DESCRIPTION_WEIGHT: f64 = 1.0;

const FIELDS: [FieldSpec; 3] = [
    FieldSpec { name: "skills", tag: "Skills__", open_ended: false },
    FieldSpec { name: "topics", tag: "Topics__", open_ended: false },
    FieldSpec { name: "description", tag: "Description__", open_ended: false },
];

/// Rank every project in `corpus` against the subject profile, best
/// match first.
pub fn run(subject: &str, corpus_text: &str, normalizer: &Normalizer) -> Result<Vec<Match>> {
    let records = corpus::parse(corpus_text, &FIELDS)?;
    let query = normalizer.normalize(subject);

    let ids: Vec<String> = records.iter().map(|r| r.id.clone()).collect();

    let weights = [
        ("skills", SKILLS_WEIGHT),
        ("topics", TOPICS_WEIGHT),
        ("description", DESCRIPTION_WEIGHT),
    ];
    let fields: Vec<WeightedField> = weights
        .iter()
        .map(|&(name, weight)| WeightedField {
            name,
            weight,
            corpus: records
                .iter()
                .map(|r| normalizer.normalize(r.field(name)))
                .collect(),
            query: query.clone(),
        })
        .collect();

    let matches = rank(&ids, &fields);
    info!(projects = matches.len(), "ranked projects against subject profile");

    Ok(matches)
}
