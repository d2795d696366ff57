// TF-IDF vector index over a fixed document set.
//
// Each summary is one document for IDF computation — words that appear
// in every summary get downweighted, while words distinctive to one
// article get boosted, which is what makes a short free-text query land
// on the right document.
//
// The index is fitted once over the run's summaries and never updated;
// a changed document set means a full refit. Rows are positionally
// aligned with the input, so the caller can map a row index straight
// back to its article.

use std::collections::{HashMap, HashSet};

use anyhow::Result;
use stop_words::{get, LANGUAGE};
use tracing::{debug, info};

/// A fitted vectorizer (vocabulary + IDF weights) plus one normalized
/// TF-IDF row per input document.
#[derive(Debug)]
pub struct TfIdfIndex {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
    rows: Vec<Vec<f64>>,
    stop_words: HashSet<String>,
}

impl TfIdfIndex {
    /// Fit the index over a set of documents.
    ///
    /// Fails when the document set is empty, or when tokenization
    /// leaves nothing to index (all documents blank or stop words).
    pub fn fit(docs: &[String]) -> Result<Self> {
        if docs.is_empty() {
            anyhow::bail!("No valid news text to index");
        }

        // English stop words from the stop-words crate
        let stop_words: HashSet<String> = get(LANGUAGE::English).into_iter().collect();

        let tokenized: Vec<Vec<String>> =
            docs.iter().map(|d| tokenize(d, &stop_words)).collect();

        // Vocabulary in first-seen order, so fitting is deterministic.
        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        for tokens in &tokenized {
            for token in tokens {
                let next_id = vocabulary.len();
                vocabulary.entry(token.clone()).or_insert(next_id);
            }
        }

        if vocabulary.is_empty() {
            anyhow::bail!(
                "No indexable terms in {} documents — summaries may be blank or all stop words",
                docs.len()
            );
        }

        // Document frequency per term, counting each document once.
        let mut df = vec![0u32; vocabulary.len()];
        for tokens in &tokenized {
            let unique: HashSet<&str> = tokens.iter().map(String::as_str).collect();
            for token in unique {
                df[vocabulary[token]] += 1;
            }
        }

        // Smoothed IDF: ln((1 + n) / (1 + df)) + 1. The +1 terms keep
        // every weight positive even for terms present in all documents.
        let n = docs.len() as f64;
        let idf: Vec<f64> = df
            .iter()
            .map(|&d| ((1.0 + n) / (1.0 + f64::from(d))).ln() + 1.0)
            .collect();

        let rows: Vec<Vec<f64>> = tokenized
            .iter()
            .map(|tokens| {
                let mut row = vec![0.0; vocabulary.len()];
                for token in tokens {
                    row[vocabulary[token.as_str()]] += 1.0;
                }
                for (term_id, value) in row.iter_mut().enumerate() {
                    *value *= idf[term_id];
                }
                l2_normalize(&mut row);
                row
            })
            .collect();

        info!(
            documents = docs.len(),
            terms = vocabulary.len(),
            "Fitted TF-IDF index"
        );

        Ok(Self {
            vocabulary,
            idf,
            rows,
            stop_words,
        })
    }

    /// Number of indexed documents.
    pub fn document_count(&self) -> usize {
        self.rows.len()
    }

    /// Return the index of the document most similar to the query.
    ///
    /// The query is tokenized the same way the documents were and
    /// projected onto the fitted vocabulary (unknown terms are
    /// ignored). Ties and all-zero similarities resolve to the lowest
    /// index — there is no minimum-similarity threshold, so even an
    /// unrelated query returns some document.
    pub fn best_match(&self, query: &str) -> usize {
        let mut query_vec = vec![0.0; self.idf.len()];
        let mut known_terms = 0usize;
        for token in tokenize(query, &self.stop_words) {
            if let Some(&term_id) = self.vocabulary.get(&token) {
                query_vec[term_id] += 1.0;
                known_terms += 1;
            }
        }
        for (term_id, value) in query_vec.iter_mut().enumerate() {
            *value *= self.idf[term_id];
        }

        debug!(known_terms, "Projected query into index vocabulary");

        let mut best_index = 0;
        let mut best_score = -1.0;
        for (i, row) in self.rows.iter().enumerate() {
            let score = cosine_similarity(&query_vec, row);
            if score > best_score {
                best_score = score;
                best_index = i;
            }
        }
        best_index
    }
}

/// Lowercase, split on non-alphanumeric boundaries, keep tokens of at
/// least two characters, and drop stop words.
fn tokenize(text: &str, stop_words: &HashSet<String>) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.chars().count() >= 2)
        .filter(|t| !stop_words.contains(*t))
        .map(|t| t.to_string())
        .collect()
}

/// Scale a vector to unit length. Zero vectors are left untouched.
fn l2_normalize(v: &mut [f64]) {
    let norm = v.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm > f64::EPSILON {
        for x in v.iter_mut() {
            *x /= norm;
        }
    }
}

/// Cosine similarity between two equal-length vectors.
///
/// Returns 0.0 when either vector has zero magnitude, so a query with
/// no known terms scores every document equally instead of dividing
/// by zero.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let mag_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let mag_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();
    if mag_a < f64::EPSILON || mag_b < f64::EPSILON {
        return 0.0;
    }
    dot / (mag_a * mag_b)
}
