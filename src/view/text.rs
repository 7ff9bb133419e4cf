//! Plain-text rendering for headless runs.

use super::card::{DiscrepancyEntry, ReviewCard, review_cards};
use super::chart::BarSeries;
use super::summary::SummaryModel;
use crate::consts::cli_consts::report::BAR_WIDTH;
use crate::filter::ReviewFilter;
use crate::models::{DashboardData, Review};
use std::fmt::Write;

fn heading(out: &mut String, title: &str) {
    let _ = writeln!(out, "== {} ==", title);
}

/// Horizontal bars scaled so the largest value spans `width` cells.
pub fn bar_lines(series: &BarSeries, width: usize) -> Vec<String> {
    let label_width = series.labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let max = series.max_value();
    series
        .points()
        .map(|(label, value)| {
            let filled = if max == 0 {
                0
            } else {
                ((value as f64 / max as f64) * width as f64).round() as usize
            };
            format!(
                "{:<label_width$}  {} {}",
                label,
                "█".repeat(filled),
                value,
                label_width = label_width
            )
        })
        .collect()
}

pub fn dashboard_report(data: &DashboardData) -> String {
    let mut out = String::new();

    for series in [
        BarSeries::sentiment(&data.sentiment),
        BarSeries::features(&data.features),
    ] {
        heading(&mut out, series.title);
        if series.is_empty() {
            let _ = writeln!(out, "(no data)");
        }
        for line in bar_lines(&series, BAR_WIDTH) {
            let _ = writeln!(out, "{}", line);
        }
        out.push('\n');
    }

    let summary = SummaryModel::from(&data.summary);
    heading(&mut out, "Rating Summary");
    let _ = writeln!(out, "{}", summary.total_line);
    let _ = writeln!(out, "{}", summary.average_line);
    let _ = writeln!(out, "Sentiment Breakdown:");
    for line in &summary.breakdown {
        let _ = writeln!(out, "  - {}", line);
    }
    out.push('\n');

    heading(&mut out, "Rating Discrepancies");
    for entry in data.discrepancies.iter().map(DiscrepancyEntry::from) {
        let _ = writeln!(out, "{}", entry.rating_line);
        let _ = writeln!(out, "  {}", entry.review);
    }
    out
}

fn card_text(out: &mut String, card: &ReviewCard) {
    let mut header = card.rating_label.clone();
    if let Some(badge) = &card.sentiment_badge {
        let _ = write!(header, " [{}]", badge.text);
    }
    if let Some(badge) = &card.slang_badge {
        let _ = write!(header, " [{}]", badge.text);
    }
    let _ = writeln!(out, "{}", header);
    let _ = writeln!(out, "  {}", card.body);
    if !card.slang_words.is_empty() {
        let _ = writeln!(out, "  Identified slang words: {}", card.slang_words.join(", "));
    }
}

pub fn reviews_report(filter: ReviewFilter, reviews: &[Review]) -> String {
    let mut out = String::new();
    heading(&mut out, filter.label());
    let cards = review_cards(reviews);
    if cards.is_empty() {
        let _ = writeln!(out, "No reviews match this filter.");
    }
    for card in &cards {
        card_text(&mut out, card);
        out.push('\n');
    }
    out
}
