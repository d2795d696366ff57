// Keyword bucket rules — first matching rule wins.
//
// Classification is a plain substring test over the lowercased title,
// checked in rule order. That means "rain" lands in the AI bucket via
// the "ai" substring — intentionally naive, titles are short and the
// buckets are a coarse reading aid, not a classifier.

use crate::feed::Article;

/// Label for titles no rule matches.
pub const FALLBACK_LABEL: &str = "Other";

/// One ordered classification rule: the first rule with any keyword
/// contained in the lowercased title claims the article.
pub struct BucketRule {
    pub label: String,
    pub keywords: Vec<String>,
}

impl BucketRule {
    pub fn new(label: &str, keywords: &[&str]) -> Self {
        Self {
            label: label.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    /// Whether any of this rule's keywords appears in the (already
    /// lowercased) title.
    fn matches(&self, lowered_title: &str) -> bool {
        self.keywords.iter().any(|k| lowered_title.contains(k.as_str()))
    }
}

/// The stock rule set, in priority order.
pub fn default_rules() -> Vec<BucketRule> {
    vec![
        BucketRule::new("AI", &["ai"]),
        BucketRule::new("Cybersecurity", &["cyber", "hack"]),
        BucketRule::new("Mobile", &["phone", "mobile"]),
    ]
}

/// One labeled bucket and the titles assigned to it, in feed order.
pub struct TopicBucket {
    pub label: String,
    pub titles: Vec<String>,
}

/// All buckets for a run: one per rule plus the fallback, in rule order.
/// Every bucket is present even when empty, so display stays stable.
pub struct TopicBuckets {
    pub buckets: Vec<TopicBucket>,
}

/// Assign each article title to exactly one bucket.
///
/// Rules are tested in order against the lowercased title; the first
/// match wins, and unmatched titles fall through to the `Other` bucket.
/// Pure — printing is the output layer's job.
pub fn group_by_topic(articles: &[Article], rules: &[BucketRule]) -> TopicBuckets {
    let mut buckets: Vec<TopicBucket> = rules
        .iter()
        .map(|r| TopicBucket {
            label: r.label.clone(),
            titles: Vec::new(),
        })
        .collect();
    buckets.push(TopicBucket {
        label: FALLBACK_LABEL.to_string(),
        titles: Vec::new(),
    });

    for article in articles {
        let lowered = article.title.to_lowercase();
        let slot = rules
            .iter()
            .position(|r| r.matches(&lowered))
            .unwrap_or(rules.len());
        buckets[slot].titles.push(article.title.clone());
    }

    TopicBuckets { buckets }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: &str) -> Article {
        Article {
            title: title.to_string(),
            summary: "body".to_string(),
        }
    }

    fn titles_for<'a>(buckets: &'a TopicBuckets, label: &str) -> &'a [String] {
        &buckets
            .buckets
            .iter()
            .find(|b| b.label == label)
            .expect("bucket should exist")
            .titles
    }

    #[test]
    fn test_first_matching_rule_wins() {
        // Title matches every rule; priority order says AI.
        let articles = vec![article("AI hackers target mobile phones")];
        let buckets = group_by_topic(&articles, &default_rules());
        assert_eq!(titles_for(&buckets, "AI").len(), 1);
        assert!(titles_for(&buckets, "Cybersecurity").is_empty());
        assert!(titles_for(&buckets, "Mobile").is_empty());
    }

    #[test]
    fn test_each_rule_claims_its_keyword() {
        let articles = vec![
            article("Cyber attack on banks"),
            article("Smartphone sales rise"),
            article("Football results from the weekend"),
        ];
        let buckets = group_by_topic(&articles, &default_rules());
        assert_eq!(titles_for(&buckets, "Cybersecurity"), ["Cyber attack on banks"]);
        assert_eq!(titles_for(&buckets, "Mobile"), ["Smartphone sales rise"]);
        assert_eq!(
            titles_for(&buckets, "Other"),
            ["Football results from the weekend"]
        );
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let articles = vec![article("PHONE makers under pressure")];
        let buckets = group_by_topic(&articles, &default_rules());
        assert_eq!(titles_for(&buckets, "Mobile").len(), 1);
    }

    #[test]
    fn test_substring_semantics_are_naive() {
        // "rain" contains "ai" — the contract is substring match, so
        // this lands in AI rather than Other.
        let articles = vec![article("Rain stops play at Wimbledon")];
        let buckets = group_by_topic(&articles, &default_rules());
        assert_eq!(titles_for(&buckets, "AI").len(), 1);
    }

    #[test]
    fn test_every_article_lands_in_exactly_one_bucket() {
        let articles = vec![
            article("New AI breakthrough"),
            article("Hack exposes records"),
            article("Mobile roaming fees return"),
            article("Local team wins cup"),
        ];
        let buckets = group_by_topic(&articles, &default_rules());
        let total: usize = buckets.buckets.iter().map(|b| b.titles.len()).sum();
        assert_eq!(total, articles.len());
    }

    #[test]
    fn test_all_buckets_present_when_empty() {
        let buckets = group_by_topic(&[], &default_rules());
        let labels: Vec<&str> = buckets.buckets.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, ["AI", "Cybersecurity", "Mobile", "Other"]);
        assert!(buckets.buckets.iter().all(|b| b.titles.is_empty()));
    }

    #[test]
    fn test_bucket_order_follows_rule_order() {
        let rules = vec![
            BucketRule::new("Sports", &["cup", "match"]),
            BucketRule::new("Weather", &["storm"]),
        ];
        let buckets = group_by_topic(&[article("Storm delays cup match")], &rules);
        let labels: Vec<&str> = buckets.buckets.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, ["Sports", "Weather", "Other"]);
        // "cup" rule comes first, so Sports claims the title.
        assert_eq!(titles_for(&buckets, "Sports").len(), 1);
    }
}
