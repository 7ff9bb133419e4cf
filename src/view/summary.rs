//! Rating summary block.

use crate::models::RatingSummary;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryModel {
    pub total_line: String,
    pub average_line: String,
    pub breakdown: Vec<String>,
}

impl From<&RatingSummary> for SummaryModel {
    fn from(summary: &RatingSummary) -> Self {
        Self {
            total_line: format!("Total Reviews: {}", summary.total_reviews),
            average_line: format!("Average Rating: {}", summary.average_rating),
            breakdown: summary
                .sentiment_counts
                .iter()
                .map(|(label, count)| format!("{}: {}", label, count))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Tally;

    #[test]
    fn test_empty_summary_lines() {
        let summary: RatingSummary = serde_json::from_str(
            r#"{"total_reviews": 0, "average_rating": 0, "sentiment_counts": {}}"#,
        )
        .unwrap();
        let model = SummaryModel::from(&summary);
        assert_eq!(model.total_line, "Total Reviews: 0");
        assert_eq!(model.average_line, "Average Rating: 0");
        assert!(model.breakdown.is_empty());
    }

    #[test]
    fn test_breakdown_follows_mapping_order() {
        let summary = RatingSummary {
            total_reviews: 9,
            average_rating: 3.75,
            sentiment_counts: Tally::from([("Neutral", 1), ("Positive", 6), ("Negative", 2)]),
        };
        let model = SummaryModel::from(&summary);
        assert_eq!(model.average_line, "Average Rating: 3.75");
        assert_eq!(
            model.breakdown,
            vec!["Neutral: 1", "Positive: 6", "Negative: 2"]
        );
    }
}
