// User matching: rank corpus users against one query user record.
//
// Both sides share the same tag shape. Degree and work experience are
// terminated fields; the courses field is open-ended and weighted double,
// since shared coursework is the strongest recommendation signal the
// platform has.

use anyhow::{bail, Result};
use tracing::info;

use crate::corpus::{self, FieldSpec};
use crate::matching::{rank, Match, WeightedField};
use crate::text::Normalizer;

const DEGREE_WEIGHT: f64 = 1.0;
const WORK_EXPERIENCE_WEIGHT: f64 = 1.0;
const COURSES_WEIGHT: f64 = 2.0;

const FIELDS: [FieldSpec; 3] = [
    FieldSpec { name: "degree", tag: "user degree:", open_ended: false },
    FieldSpec { name: "workexperience", tag: "user workexperience:", open_ended: false },
    FieldSpec { name: "courses", tag: "user courses:", open_ended: true },
];

/// Rank every user in `corpus` against the query user record, best match
/// first.
pub fn run(user: &str, corpus_text: &str, normalizer: &Normalizer) -> Result<Vec<Match>> {
    let records = corpus::parse(corpus_text, &FIELDS)?;

    // The query is a bare record with the same tags but no Id:
    let user = user.replace('\n', " ");
    let mut query_fields = Vec::with_capacity(FIELDS.len());
    for spec in &FIELDS {
        let Some(text) = corpus::field_text(&user, spec) else {
            bail!("user record: missing required tag {:?}", spec.tag);
        };
        query_fields.push(normalizer.normalize(&text));
    }

    let ids: Vec<String> = records.iter().map(|r| r.id.clone()).collect();

    let weights = [DEGREE_WEIGHT, WORK_EXPERIENCE_WEIGHT, COURSES_WEIGHT];
    let fields: Vec<WeightedField> = FIELDS
        .iter()
        .zip(weights)
        .zip(query_fields)
        .map(|((spec, weight), query)| WeightedField {
            name: spec.name,
            weight,
            corpus: records
                .iter()
                .map(|r| normalizer.normalize(r.field(spec.name)))
                .collect(),
            query,
        })
        .collect();

    let matches = rank(&ids, &fields);
    info!(users = matches.len(), "ranked users against query user");

    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUERY: &str =
        "user degree:computer science|user workexperience:backend services|user courses:COMP1511 COMP2521";

    #[test]
    fn test_similar_user_ranks_first() {
        let norm = Normalizer::new();
        let corpus = "Id:u1|user degree:computer science|user workexperience:web backend|user courses:COMP1511 COMP2521___\
                      Id:u2|user degree:fine arts|user workexperience:gallery|user courses:ARTS1001___";

        let matches = run(QUERY, corpus, &norm).unwrap();

        assert_eq!(matches[0].id, "u1");
        assert!(matches[0].score > matches[1].score);
    }

    #[test]
    fn test_courses_weighted_double() {
        let norm = Normalizer::new();
        // u1 matches only on courses, u2 matches only on degree; with the
        // courses field weighted 2.0, u1 must win
        let corpus = "Id:u1|user degree:geology|user workexperience:fieldwork|user courses:COMP1511 COMP2521___\
                      Id:u2|user degree:computer science|user workexperience:catering|user courses:MUSC1000___";

        let matches = run(QUERY, corpus, &norm).unwrap();

        assert_eq!(matches[0].id, "u1");
    }

    #[test]
    fn test_query_missing_tag_is_fatal() {
        let norm = Normalizer::new();
        let corpus = "Id:u1|user degree:x|user workexperience:y|user courses:z___";
        let result = run("user degree:only a degree|", corpus, &norm);
        assert!(result.is_err());
    }

    #[test]
    fn test_null_placeholder_fields_accepted() {
        let norm = Normalizer::new();
        let corpus = "Id:u1|user degree:null|user workexperience:null|user courses:null___";
        let query = "user degree:null|user workexperience:null|user courses:null";

        let matches = run(query, corpus, &norm).unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].score, 0.0);
    }
}
