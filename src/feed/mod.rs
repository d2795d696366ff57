// Feed fetching — RSS retrieval and article extraction.

pub mod client;

/// A single news article extracted from a feed entry.
///
/// Invariant: `summary` is never empty or whitespace-only — entries
/// without a usable summary are dropped at extraction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub summary: String,
}
