//! Bar chart series built from label/count mappings.

use crate::models::Tally;

pub const SENTIMENT_CHART_TITLE: &str = "Sentiment Distribution";
pub const FEATURES_CHART_TITLE: &str = "Most Common Features Mentioned";

/// A label axis with a positionally aligned value axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarSeries {
    pub title: &'static str,
    pub labels: Vec<String>,
    pub values: Vec<u64>,
}

impl BarSeries {
    /// Keys become the label axis in mapping order; counts become the value axis.
    pub fn from_tally(title: &'static str, tally: &Tally) -> Self {
        let (labels, values) = tally
            .iter()
            .map(|(label, count)| (label.to_string(), count))
            .unzip();
        Self {
            title,
            labels,
            values,
        }
    }

    pub fn sentiment(tally: &Tally) -> Self {
        Self::from_tally(SENTIMENT_CHART_TITLE, tally)
    }

    pub fn features(tally: &Tally) -> Self {
        Self::from_tally(FEATURES_CHART_TITLE, tally)
    }

    /// Number of categories on the label axis.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn max_value(&self) -> u64 {
        self.values.iter().copied().max().unwrap_or(0)
    }

    pub fn points(&self) -> impl Iterator<Item = (&str, u64)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}
