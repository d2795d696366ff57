// Summary transforms — word-capped and sentence-capped truncation.
//
// Both are blind truncation heuristics, not summarization. The
// sentence cut splits on every literal '.' — abbreviations and decimal
// numbers included — which is the documented contract, so neither
// function attempts boundary detection.

/// Segments kept by `leading_sentences`.
pub const SUMMARY_SENTENCES: usize = 5;

/// Keep the first `max_words` whitespace-delimited tokens, joined by
/// single spaces. Inputs shorter than the cap pass through intact
/// (modulo whitespace collapsing).
pub fn compress_text(text: &str, max_words: usize) -> String {
    text.split_whitespace()
        .take(max_words)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Keep the first five '.'-delimited segments, rejoined with ". " and
/// a trailing period.
pub fn leading_sentences(text: &str) -> String {
    let segments: Vec<&str> = text.split('.').take(SUMMARY_SENTENCES).collect();
    format!("{}.", segments.join(". "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compress_respects_word_cap() {
        let text = "one two three four five six";
        assert_eq!(compress_text(text, 3), "one two three");
    }

    #[test]
    fn test_compress_short_input_passes_through() {
        assert_eq!(compress_text("just two", 50), "just two");
    }

    #[test]
    fn test_compress_collapses_whitespace() {
        assert_eq!(compress_text("spaced   out\twords", 50), "spaced out words");
    }

    #[test]
    fn test_compress_is_idempotent() {
        let text = "alpha beta gamma delta epsilon zeta eta theta";
        let once = compress_text(text, 4);
        assert_eq!(compress_text(&once, 4), once);
    }

    #[test]
    fn test_compress_empty_input() {
        assert_eq!(compress_text("", 50), "");
    }

    #[test]
    fn test_leading_sentences_caps_at_five() {
        assert_eq!(leading_sentences("a.b.c.d.e.f.g"), "a. b. c. d. e.");
    }

    #[test]
    fn test_leading_sentences_short_input_keeps_all() {
        assert_eq!(leading_sentences("a.b"), "a. b.");
    }

    #[test]
    fn test_leading_sentences_no_period_appends_one() {
        assert_eq!(leading_sentences("no sentence break"), "no sentence break.");
    }

    #[test]
    fn test_leading_sentences_splits_blindly() {
        // Decimal points count as segment boundaries — the contract is
        // a literal split, not sentence detection.
        assert_eq!(leading_sentences("Up 3.5 percent"), "Up 3. 5 percent.");
    }

    #[test]
    fn test_leading_sentences_trailing_period_yields_empty_segment() {
        // "One. Two." splits into ["One", " Two", ""], which rejoins
        // with the empty tail still present.
        assert_eq!(leading_sentences("One. Two."), "One.  Two. .");
    }
}
