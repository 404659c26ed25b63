use std::env;

use anyhow::{Context, Result};

use crate::keywords::yake::{
    DEFAULT_DEDUP_THRESHOLD, DEFAULT_MAX_PHRASE_LEN, DEFAULT_WINDOW_SIZE,
};

/// Central configuration loaded from environment variables.
///
/// The matching weights are tuned constants living next to their
/// pipelines; only the keyword extractor tunables are adjustable from the
/// environment (a .env file is loaded automatically at startup via
/// dotenvy).
pub struct Config {
    /// Maximum words per candidate phrase (SKILLMATCH_MAX_PHRASE_LEN).
    pub max_phrase_len: usize,
    /// Candidate deduplication threshold (SKILLMATCH_DEDUP_THRESHOLD).
    pub dedup_threshold: f32,
    /// Co-occurrence window size (SKILLMATCH_WINDOW_SIZE).
    pub window_size: usize,
}

impl Config {
    /// Load configuration from environment variables, falling back to the
    /// extractor defaults when a variable is unset.
    pub fn load() -> Result<Self> {
        Ok(Self {
            max_phrase_len: parse_env("SKILLMATCH_MAX_PHRASE_LEN", DEFAULT_MAX_PHRASE_LEN)?,
            dedup_threshold: parse_env("SKILLMATCH_DEDUP_THRESHOLD", DEFAULT_DEDUP_THRESHOLD)?,
            window_size: parse_env("SKILLMATCH_WINDOW_SIZE", DEFAULT_WINDOW_SIZE)?,
        })
    }
}

/// Read and parse an env var, keeping the default when unset. A set but
/// unparseable value is a configuration error, not a silent fallback.
fn parse_env<T: std::str::FromStr>(name: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(value) => value
            .parse()
            .with_context(|| format!("invalid value for {name}: {value:?}")),
        Err(_) => Ok(default),
    }
}
