//! Payloads returned by the review analysis API
//!
//! Every type here is an immutable snapshot of one response. Views replace
//! them wholesale on the next fetch and never mutate them in place.

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;

/// Label-to-count mapping that keeps the order in which the server listed the keys.
///
/// Used for both the sentiment distribution and the extracted feature counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally(Vec<(String, u64)>);

impl Tally {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(label, count)| (label.as_str(), *count))
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.0.iter().map(|(_, count)| count).sum()
    }
}

impl<const N: usize> From<[(&str, u64); N]> for Tally {
    fn from(entries: [(&str, u64); N]) -> Self {
        Self(
            entries
                .into_iter()
                .map(|(label, count)| (label.to_string(), count))
                .collect(),
        )
    }
}

impl<'de> Deserialize<'de> for Tally {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TallyVisitor;

        impl<'de> Visitor<'de> for TallyVisitor {
            type Value = Tally;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping labels to counts")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Tally, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((label, count)) = map.next_entry::<String, u64>()? {
                    entries.push((label, count));
                }
                Ok(Tally(entries))
            }
        }

        deserializer.deserialize_map(TallyVisitor)
    }
}

/// Polarity assigned to a review by the backend.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(try_from = "String")]
#[strum(ascii_case_insensitive)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Value used for the `sentiment` query parameter.
    pub fn as_query_value(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl TryFrom<String> for Sentiment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value
            .parse()
            .map_err(|_| format!("unknown sentiment '{}'", value))
    }
}

/// Star ratings arrive as JSON numbers and may be written as `5.0`.
fn deserialize_rating<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    let value = f64::deserialize(deserializer)?;
    if value.fract() != 0.0 || !(1.0..=5.0).contains(&value) {
        return Err(de::Error::custom(format!(
            "rating must be a whole number between 1 and 5, got {}",
            value
        )));
    }
    Ok(value as u8)
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Review {
    #[serde(deserialize_with = "deserialize_rating")]
    pub rating: u8,
    pub review: String,
    #[serde(default)]
    pub sentiment: Option<Sentiment>,
    #[serde(default)]
    pub slang_words: Vec<String>,
}

impl Review {
    pub fn has_slang(&self) -> bool {
        !self.slang_words.is_empty()
    }
}

/// A review whose star rating contradicts its detected sentiment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Discrepancy {
    #[serde(deserialize_with = "deserialize_rating")]
    pub rating: u8,
    pub review: String,
}

impl From<Discrepancy> for Review {
    fn from(discrepancy: Discrepancy) -> Self {
        Review {
            rating: discrepancy.rating,
            review: discrepancy.review,
            sentiment: None,
            slang_words: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RatingSummary {
    pub total_reviews: u64,
    pub average_rating: f64,
    #[serde(default)]
    pub sentiment_counts: Tally,
}

/// Everything the dashboard view shows. Built only when all four requests succeed.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub sentiment: Tally,
    pub features: Tally,
    pub discrepancies: Vec<Discrepancy>,
    pub summary: RatingSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Object keys must come out in document order, not sorted.
    fn test_tally_preserves_key_order() {
        let tally: Tally =
            serde_json::from_str(r#"{"Positive": 120, "Neutral": 4, "Negative": 37}"#).unwrap();
        let labels: Vec<&str> = tally.iter().map(|(label, _)| label).collect();
        assert_eq!(labels, vec!["Positive", "Neutral", "Negative"]);
        assert_eq!(tally.total(), 161);
    }

    #[test]
    fn test_tally_rejects_negative_counts() {
        let result: Result<Tally, _> = serde_json::from_str(r#"{"battery": -1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_review_defaults_optional_fields() {
        let review: Review = serde_json::from_str(r#"{"rating": 3, "review": "meh"}"#).unwrap();
        assert_eq!(review.sentiment, None);
        assert!(review.slang_words.is_empty());
        assert!(!review.has_slang());
    }

    #[test]
    fn test_review_accepts_null_sentiment_and_float_rating() {
        let review: Review = serde_json::from_str(
            r#"{"rating": 5.0, "review": "great", "sentiment": null, "slang_words": ["lit"]}"#,
        )
        .unwrap();
        assert_eq!(review.rating, 5);
        assert_eq!(review.sentiment, None);
        assert!(review.has_slang());
    }

    #[test]
    fn test_review_rejects_out_of_range_rating() {
        assert!(serde_json::from_str::<Review>(r#"{"rating": 7, "review": "x"}"#).is_err());
        assert!(serde_json::from_str::<Review>(r#"{"rating": 2.5, "review": "x"}"#).is_err());
    }

    #[test]
    fn test_sentiment_parses_case_insensitively() {
        let review: Review =
            serde_json::from_str(r#"{"rating": 1, "review": "bad", "sentiment": "negative"}"#)
                .unwrap();
        assert_eq!(review.sentiment, Some(Sentiment::Negative));
        assert!(
            serde_json::from_str::<Review>(r#"{"rating": 1, "review": "x", "sentiment": "angry"}"#)
                .is_err()
        );
    }

    #[test]
    fn test_empty_summary_decodes() {
        let summary: RatingSummary = serde_json::from_str(
            r#"{"total_reviews": 0, "average_rating": 0, "sentiment_counts": {}}"#,
        )
        .unwrap();
        assert_eq!(summary.total_reviews, 0);
        assert_eq!(summary.average_rating, 0.0);
        assert!(summary.sentiment_counts.is_empty());
    }

    #[test]
    fn test_discrepancy_converts_to_plain_review() {
        let review = Review::from(Discrepancy {
            rating: 5,
            review: "awful, broke in a day".to_string(),
        });
        assert_eq!(review.rating, 5);
        assert_eq!(review.sentiment, None);
        assert!(review.slang_words.is_empty());
    }
}
