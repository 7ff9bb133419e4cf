//! Review cards and discrepancy entries.

use crate::models::{Discrepancy, Review, Sentiment};

pub const SLANG_BADGE: &str = "Contains Slang";

/// Colour family of a badge.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Negative,
    Neutral,
    Slang,
}

impl From<Sentiment> for Tone {
    fn from(sentiment: Sentiment) -> Self {
        match sentiment {
            Sentiment::Positive => Tone::Positive,
            Sentiment::Negative => Tone::Negative,
            Sentiment::Neutral => Tone::Neutral,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub text: String,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewCard {
    pub rating_label: String,
    pub sentiment_badge: Option<Badge>,
    pub slang_badge: Option<Badge>,
    pub slang_words: Vec<String>,
    pub body: String,
}

impl From<&Review> for ReviewCard {
    fn from(review: &Review) -> Self {
        let sentiment_badge = review.sentiment.map(|sentiment| Badge {
            text: sentiment.to_string(),
            tone: sentiment.into(),
        });
        let slang_badge = review.has_slang().then(|| Badge {
            text: SLANG_BADGE.to_string(),
            tone: Tone::Slang,
        });

        Self {
            rating_label: format!("{}★", review.rating),
            sentiment_badge,
            slang_badge,
            slang_words: review.slang_words.clone(),
            body: review.review.clone(),
        }
    }
}

pub fn review_cards(reviews: &[Review]) -> Vec<ReviewCard> {
    reviews.iter().map(ReviewCard::from).collect()
}

/// One row of the dashboard's discrepancy list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscrepancyEntry {
    pub rating_line: String,
    pub review: String,
}

impl From<&Discrepancy> for DiscrepancyEntry {
    fn from(discrepancy: &Discrepancy) -> Self {
        Self {
            rating_line: format!("Rating: {}", discrepancy.rating),
            review: discrepancy.review.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(sentiment: Option<Sentiment>, slang: &[&str]) -> Review {
        Review {
            rating: 3,
            review: "meh".to_string(),
            sentiment,
            slang_words: slang.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_slang_badge_only_for_non_empty_slang() {
        let plain = ReviewCard::from(&review(None, &[]));
        assert!(plain.slang_badge.is_none());
        assert!(plain.slang_words.is_empty());

        let slangy = ReviewCard::from(&review(None, &["lit"]));
        assert_eq!(slangy.slang_badge.unwrap().text, SLANG_BADGE);
        assert_eq!(slangy.slang_words, vec!["lit"]);
        assert_eq!(slangy.rating_label, "3★");
    }

    #[test]
    fn test_sentiment_badge_tone() {
        let card = ReviewCard::from(&review(Some(Sentiment::Negative), &[]));
        let badge = card.sentiment_badge.unwrap();
        assert_eq!(badge.text, "Negative");
        assert_eq!(badge.tone, Tone::Negative);

        assert!(ReviewCard::from(&review(None, &[])).sentiment_badge.is_none());
    }

    #[test]
    fn test_discrepancy_entry() {
        let entry = DiscrepancyEntry::from(&Discrepancy {
            rating: 5,
            review: "broke on day one".to_string(),
        });
        assert_eq!(entry.rating_line, "Rating: 5");
        assert_eq!(entry.review, "broke on day one");
    }
}
