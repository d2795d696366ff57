use std::env;

use anyhow::{Context, Result};

/// Feed queried when neither GAZETTE_FEED_URL nor --feed-url is set.
pub const DEFAULT_FEED_URL: &str = "http://feeds.bbci.co.uk/sport/rss.xml";

/// How many feed entries to consider before the blank-summary filter.
pub const DEFAULT_MAX_ENTRIES: usize = 50;

/// Word cap for the compressed summary of the matched article.
pub const DEFAULT_COMPRESS_WORDS: usize = 50;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy.
/// Every field has a default, so a bare `gazette` run works out of
/// the box against the default feed.
pub struct Config {
    /// RSS endpoint to fetch. One feed per run — no aggregation.
    pub feed_url: String,
    /// Entry cap applied before filtering out blank summaries.
    pub max_entries: usize,
    /// Maximum words kept by the compressed-summary display.
    pub compress_words: usize,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn load() -> Result<Self> {
        let max_entries = match env::var("GAZETTE_MAX_ENTRIES") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("GAZETTE_MAX_ENTRIES must be a number, got '{raw}'"))?,
            Err(_) => DEFAULT_MAX_ENTRIES,
        };

        let compress_words = match env::var("GAZETTE_COMPRESS_WORDS") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("GAZETTE_COMPRESS_WORDS must be a number, got '{raw}'"))?,
            Err(_) => DEFAULT_COMPRESS_WORDS,
        };

        Ok(Self {
            feed_url: env::var("GAZETTE_FEED_URL")
                .unwrap_or_else(|_| DEFAULT_FEED_URL.to_string()),
            max_entries,
            compress_words,
        })
    }
}
