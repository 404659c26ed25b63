// Keyword extraction pipeline: a top-N count plus pipe-delimited text
// partitions in, scored keywords out.

use anyhow::{Context, Result};
use tracing::info;

use crate::config::Config;
use crate::keywords::{Keyword, KeywordExtractor, YakeSource};
use crate::text::Normalizer;

/// Extract keywords from every partition of `text`, requesting up to
/// `top_n` candidate phrases per partition.
///
/// `top_n` arrives as raw text from the process boundary; a value that
/// does not parse as a non-negative integer is a fatal input error.
pub fn run(top_n: &str, text: &str, config: &Config, normalizer: &Normalizer) -> Result<Vec<Keyword>> {
    let top_n: usize = top_n
        .trim()
        .parse()
        .with_context(|| format!("top_n must be a non-negative integer, got {top_n:?}"))?;

    let source = YakeSource::new(
        config.max_phrase_len,
        config.dedup_threshold,
        config.window_size,
    );
    let extractor = KeywordExtractor::new(source);

    let keywords = extractor.extract(text, top_n, normalizer);
    info!(keywords = keywords.len(), top_n, "extracted keywords");

    Ok(keywords)
}
