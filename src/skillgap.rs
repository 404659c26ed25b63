// Skill gap comparison.
//
// A requirement is covered when some listed skill contains every one of
// its normalized terms as a substring of the skill's compacted (space-
// free) normalized form. Requirements that no skill fully covers are
// reported back verbatim, in their original un-normalized form.

use crate::text::Normalizer;

/// Requirements from `requirements` that no entry in `subject_skills`
/// fully covers. An empty skill list means there is nothing to cover
/// anything, so every requirement comes back as missing.
pub fn missing_skills(
    subject_skills: &[String],
    requirements: &[String],
    normalizer: &Normalizer,
) -> Vec<String> {
    let compacted_skills: Vec<String> = subject_skills
        .iter()
        .map(|skill| normalizer.normalize(skill).replace(' ', ""))
        .collect();

    let mut missing = Vec::new();

    for requirement in requirements {
        let cleaned = normalizer.normalize(requirement);
        let terms: Vec<&str> = cleaned.split_whitespace().collect();

        // A requirement with no content terms is trivially covered
        if terms.is_empty() {
            continue;
        }

        let best = compacted_skills
            .iter()
            .map(|skill| coverage(&terms, skill))
            .fold(0.0_f64, f64::max);

        if best < 1.0 {
            missing.push(requirement.clone());
        }
    }

    missing
}

/// Fraction of requirement terms found as substrings of one compacted
/// skill.
fn coverage(terms: &[&str], compacted_skill: &str) -> f64 {
    let found = terms
        .iter()
        .filter(|term| compacted_skill.contains(**term))
        .count();

    found as f64 / terms.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_subject_means_everything_missing() {
        let norm = Normalizer::new();
        let missing = missing_skills(&[], &strings(&["python"]), &norm);
        assert_eq!(missing, vec!["python"]);
    }

    #[test]
    fn test_multi_word_skill_covers_single_term_requirement() {
        let norm = Normalizer::new();
        let missing = missing_skills(&strings(&["python sql"]), &strings(&["python"]), &norm);
        assert!(missing.is_empty());
    }

    #[test]
    fn test_partial_coverage_is_still_missing() {
        let norm = Normalizer::new();
        // "python" is covered, "kubernetes" is not: coverage 0.5 < 1.0
        let missing = missing_skills(
            &strings(&["python scripting"]),
            &strings(&["python kubernetes"]),
            &norm,
        );
        assert_eq!(missing, vec!["python kubernetes"]);
    }

    #[test]
    fn test_original_requirement_text_reported() {
        let norm = Normalizer::new();
        // The normalized form differs from the original; the original is
        // what must come back
        let missing = missing_skills(&strings(&["sql"]), &strings(&["Managing Kubernetes!"]), &norm);
        assert_eq!(missing, vec!["Managing Kubernetes!"]);
    }

    #[test]
    fn test_coverage_matches_across_word_boundary() {
        let norm = Normalizer::new();
        // Compacted skill "machinelearn..." still contains the term
        // "learn" even though it spanned a space in the original
        let missing = missing_skills(
            &strings(&["machine learning"]),
            &strings(&["learning"]),
            &norm,
        );
        assert!(missing.is_empty());
    }

    #[test]
    fn test_requirement_of_only_stopwords_is_covered() {
        let norm = Normalizer::new();
        let missing = missing_skills(&strings(&["sql"]), &strings(&["and the of"]), &norm);
        assert!(missing.is_empty());
    }

    #[test]
    fn test_mixed_requirements_filtered_correctly() {
        let norm = Normalizer::new();
        let missing = missing_skills(
            &strings(&["python sql", "react"]),
            &strings(&["python", "react", "terraform"]),
            &norm,
        );
        assert_eq!(missing, vec!["terraform"]);
    }
}
