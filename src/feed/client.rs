// RSS feed client — one unauthenticated HTTP GET per run.
//
// A thin reqwest wrapper: fetch the feed body as bytes, hand it to the
// rss crate, and extract articles from the parsed channel. Network,
// status, and parse failures surface as contextual errors with no
// retry — the caller decides whether to report or abort.

use anyhow::{Context, Result};
use rss::Channel;
use tracing::{debug, info};

use super::Article;

/// HTTP client bound to a single RSS endpoint.
pub struct FeedClient {
    client: reqwest::Client,
    feed_url: String,
}

impl FeedClient {
    /// Create a new client pointing at the given feed URL.
    pub fn new(feed_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("gazette/0.1 (news-retrieval)")
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            feed_url: feed_url.to_string(),
        })
    }

    /// Fetch the feed and extract up to `max_entries` articles.
    ///
    /// The cap applies before the blank-summary filter, so the result
    /// may hold fewer articles than the feed has entries. Prints the
    /// fetch notice and the final count.
    pub async fn fetch(&self, max_entries: usize) -> Result<Vec<Article>> {
        println!("\nFetching latest news articles...");
        debug!(url = %self.feed_url, "Requesting RSS feed");

        let response = self
            .client
            .get(&self.feed_url)
            .send()
            .await
            .with_context(|| format!("Feed request failed: {}", self.feed_url))?;

        if !response.status().is_success() {
            let status = response.status();
            anyhow::bail!("Feed request returned {status}: {}", self.feed_url);
        }

        let body = response
            .bytes()
            .await
            .context("Failed to read feed response body")?;

        let channel = Channel::read_from(&body[..])
            .with_context(|| format!("Failed to parse RSS feed: {}", self.feed_url))?;

        let articles = extract_articles(&channel, max_entries);
        info!(
            channel = channel.title(),
            entries = channel.items().len(),
            articles = articles.len(),
            "Feed fetched"
        );

        println!("Total articles fetched: {}", articles.len());
        Ok(articles)
    }
}

/// Extract articles from a parsed channel.
///
/// Considers at most the first `max_entries` items, defaults a missing
/// title to "No Title", and drops items whose description is empty or
/// whitespace-only. Separated from the HTTP path so it can be tested
/// against static feed XML.
pub fn extract_articles(channel: &Channel, max_entries: usize) -> Vec<Article> {
    channel
        .items()
        .iter()
        .take(max_entries)
        .filter_map(|item| {
            let summary = item.description().unwrap_or_default();
            if summary.trim().is_empty() {
                return None;
            }
            Some(Article {
                title: item.title().unwrap_or("No Title").to_string(),
                summary: summary.to_string(),
            })
        })
        .collect()
}
