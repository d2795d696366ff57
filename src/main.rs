use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing::info;

mod config;

/// Gazette: news retrieval over a single RSS feed.
///
/// Fetches headlines, groups them into coarse keyword topics, builds a
/// TF-IDF index over the summaries, and answers one free-text query
/// with the closest-matching article.
#[derive(Parser)]
#[command(name = "gazette", version, about)]
struct Cli {
    /// RSS feed URL to fetch (overrides GAZETTE_FEED_URL)
    #[arg(long)]
    feed_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("gazette=info")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = config::Config::load()?;
    if let Some(url) = cli.feed_url {
        config.feed_url = url;
    }

    println!("{}", "=== Gazette: News Retrieval over RSS ===".bold());
    info!(feed_url = %config.feed_url, "Starting run");

    // Fetch. Network, status, and parse failures propagate out of main
    // as reported errors — no retry.
    let client = gazette::feed::client::FeedClient::new(&config.feed_url)?;
    let articles = client.fetch(config.max_entries).await?;

    if articles.is_empty() {
        println!("No news articles found. Try another RSS feed.");
        return Ok(());
    }

    gazette::output::terminal::display_headlines(&articles);

    let rules = gazette::topics::rules::default_rules();
    let buckets = gazette::topics::rules::group_by_topic(&articles, &rules);
    gazette::output::terminal::display_buckets(&buckets);

    // Index the summaries. Unreachable with a non-empty collection
    // (the fetcher already dropped blank summaries), but the failure
    // path stays guarded rather than assumed away.
    let summaries: Vec<String> = articles.iter().map(|a| a.summary.clone()).collect();
    let index = match gazette::retrieval::tfidf::TfIdfIndex::fit(&summaries) {
        Ok(index) => index,
        Err(e) => {
            println!("\n{} {e}", "Error:".red().bold());
            return Ok(());
        }
    };

    gazette::output::terminal::banner("Ask a Question");
    let query = read_query()?;

    let best = index.best_match(&query);
    let article = &articles[best];

    let compressed = gazette::summary::compress_text(&article.summary, config.compress_words);
    gazette::output::terminal::display_best_match(article, &compressed);

    println!("\nGenerating simple summary...");
    let short_summary = gazette::summary::leading_sentences(&article.summary);
    println!("\n{} {short_summary}", "Final summary:".bold());

    println!("\n{}", "Done.".green().bold());
    Ok(())
}

/// Read one query line from stdin. Blocks until the user answers.
fn read_query() -> Result<String> {
    print!("\nEnter your query (example: AI news today): ");
    io::stdout().flush().context("Failed to flush stdout")?;
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("Failed to read query from stdin")?;
    Ok(line.trim().to_string())
}
