// Colored terminal output for headlines, topic buckets, and the match.
//
// This module handles all terminal-specific formatting. The main.rs
// orchestrator delegates here; everything is read-only over the models.

use colored::Colorize;

use crate::feed::Article;
use crate::topics::rules::TopicBuckets;

/// Print a section banner.
pub fn banner(title: &str) {
    println!("\n{}", format!("=== {title} ===").bold());
}

/// Display the fetched headlines as a numbered list, in feed order.
pub fn display_headlines(articles: &[Article]) {
    banner("Latest News Headlines");
    println!();
    for (i, article) in articles.iter().enumerate() {
        println!("  {:>3}. {}", i + 1, article.title);
    }
}

/// Display the topic buckets in rule order, empty buckets included.
pub fn display_buckets(buckets: &TopicBuckets) {
    banner("Topic Grouping (Keyword Based)");
    for bucket in &buckets.buckets {
        println!("\n  {}", format!("Topic: {}", bucket.label).bold());
        if bucket.titles.is_empty() {
            println!("    {}", "No articles found.".dimmed());
        } else {
            for title in &bucket.titles {
                println!("    - {title}");
            }
        }
    }
}

/// Display the best-matching article with its word-capped summary.
pub fn display_best_match(article: &Article, compressed: &str) {
    banner("Best Matching Article");
    println!("\n  Title: {}", article.title.bold());
    println!("\n  Compressed summary:");
    println!("    {compressed}");
}
