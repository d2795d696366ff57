// Gazette: news headlines with keyword topic grouping and TF-IDF retrieval.
//
// This is the library root. Each module corresponds to one stage of the
// pipeline: fetch the feed, group titles by topic, index the summaries,
// answer a query.

pub mod config;
pub mod feed;
pub mod output;
pub mod retrieval;
pub mod summary;
pub mod topics;
