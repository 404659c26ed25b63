// Skill gap pipeline: the subject's listed skills and a project's
// requirement phrases, both triple-underscore-delimited, in; the
// uncovered requirements out.

use anyhow::Result;
use tracing::info;

use crate::corpus::split_segments;
use crate::skillgap::missing_skills;
use crate::text::Normalizer;

/// Report the requirement phrases from `project` that none of the
/// subject's skills fully covers.
pub fn run(subject: &str, project: &str, normalizer: &Normalizer) -> Result<Vec<String>> {
    let skills: Vec<String> = split_segments(subject)
        .into_iter()
        .map(str::to_string)
        .collect();
    let requirements: Vec<String> = split_segments(project)
        .into_iter()
        .map(str::to_string)
        .collect();

    let missing = missing_skills(&skills, &requirements, normalizer);
    info!(
        skills = skills.len(),
        requirements = requirements.len(),
        missing = missing.len(),
        "computed skill gap"
    );

    Ok(missing)
}
