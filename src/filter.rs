//! Review list filters and the request each one maps to.

use crate::api::request::{ApiRequest, Endpoint, ReviewQuery};
use crate::models::Sentiment;
use strum::IntoEnumIterator;

/// The six options offered by the reviews filter selector.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ReviewFilter {
    #[default]
    All,
    Positive,
    Negative,
    Neutral,
    Slang,
    Discrepancies,
}

/// Where the reviews for a filter come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewSource {
    Reviews(ReviewQuery),
    Discrepancies,
}

impl ReviewSource {
    pub fn request(&self) -> ApiRequest {
        match self {
            ReviewSource::Reviews(query) => query.request(),
            ReviewSource::Discrepancies => ApiRequest::new(Endpoint::RatingDiscrepancies),
        }
    }
}

impl ReviewFilter {
    /// Parses a filter name, falling back to [`ReviewFilter::All`] for anything unknown.
    pub fn from_value(value: &str) -> Self {
        value.trim().parse().unwrap_or_default()
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReviewFilter::All => "All Reviews",
            ReviewFilter::Positive => "Positive Reviews",
            ReviewFilter::Negative => "Negative Reviews",
            ReviewFilter::Neutral => "Neutral Reviews",
            ReviewFilter::Slang => "Reviews with Slang",
            ReviewFilter::Discrepancies => "Rating Discrepancies",
        }
    }

    pub fn source(&self) -> ReviewSource {
        match self {
            ReviewFilter::All => ReviewSource::Reviews(ReviewQuery::All),
            ReviewFilter::Positive => {
                ReviewSource::Reviews(ReviewQuery::Sentiment(Sentiment::Positive))
            }
            ReviewFilter::Negative => {
                ReviewSource::Reviews(ReviewQuery::Sentiment(Sentiment::Negative))
            }
            ReviewFilter::Neutral => {
                ReviewSource::Reviews(ReviewQuery::Sentiment(Sentiment::Neutral))
            }
            ReviewFilter::Slang => ReviewSource::Reviews(ReviewQuery::WithSlang),
            ReviewFilter::Discrepancies => ReviewSource::Discrepancies,
        }
    }

    /// Position of this filter in the selector.
    pub fn index(&self) -> usize {
        Self::iter().position(|f| f == *self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        let all: Vec<Self> = Self::iter().collect();
        all[(self.index() + 1) % all.len()]
    }

    pub fn previous(&self) -> Self {
        let all: Vec<Self> = Self::iter().collect();
        all[(self.index() + all.len() - 1) % all.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_table() {
        let cases = [
            (ReviewFilter::All, "/reviews"),
            (ReviewFilter::Positive, "/reviews?sentiment=positive"),
            (ReviewFilter::Negative, "/reviews?sentiment=negative"),
            (ReviewFilter::Neutral, "/reviews?sentiment=neutral"),
            (ReviewFilter::Slang, "/reviews?has_slang=true"),
            (ReviewFilter::Discrepancies, "/rating-discrepancies"),
        ];
        for (filter, expected) in cases {
            assert_eq!(filter.source().request().path_and_query(), expected);
        }
    }

    #[test]
    fn test_unknown_filter_falls_back_to_all() {
        assert_eq!(ReviewFilter::from_value("bogus"), ReviewFilter::All);
        assert_eq!(ReviewFilter::from_value(""), ReviewFilter::All);
        assert_eq!(ReviewFilter::from_value("SLANG"), ReviewFilter::Slang);
        assert_eq!(
            ReviewFilter::from_value("discrepancies"),
            ReviewFilter::Discrepancies
        );
    }

    #[test]
    fn test_selector_has_six_options_that_cycle() {
        assert_eq!(ReviewFilter::iter().count(), 6);
        assert_eq!(ReviewFilter::Discrepancies.next(), ReviewFilter::All);
        assert_eq!(ReviewFilter::All.previous(), ReviewFilter::Discrepancies);
        assert_eq!(ReviewFilter::Positive.next(), ReviewFilter::Negative);
    }
}
