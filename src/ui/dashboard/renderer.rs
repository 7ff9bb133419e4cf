//! Dashboard main renderer

use super::components::{charts, discrepancies, summary};
use super::state::DashboardState;
use crate::ui::utils::{FEATURE_PALETTE, SENTIMENT_PALETTE, render_error, render_loading};
use crate::ui::view_state::ViewStatus;
use crate::view::{BarSeries, DiscrepancyEntry, SummaryModel};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Panel areas of a ready dashboard.
struct DashboardAreas {
    sentiment: Rect,
    features: Rect,
    summary: Rect,
    discrepancies: Rect,
}

fn dashboard_layout(area: Rect) -> DashboardAreas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);
    let charts_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);
    let details_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    DashboardAreas {
        sentiment: charts_row[0],
        features: charts_row[1],
        summary: details_row[0],
        discrepancies: details_row[1],
    }
}

/// Text width of the discrepancy list when the dashboard fills `area`.
pub fn discrepancy_text_width(area: Rect) -> u16 {
    discrepancies::text_width(dashboard_layout(area).discrepancies)
}

pub fn render_dashboard(f: &mut Frame, area: Rect, state: &DashboardState, tick: usize) {
    let data = match state.status() {
        ViewStatus::Loading => return render_loading(f, area, tick, "dashboard"),
        ViewStatus::Error(message) => return render_error(f, area, message),
        ViewStatus::Ready(data) => data,
    };
    let areas = dashboard_layout(area);

    charts::render_bar_chart(
        f,
        areas.sentiment,
        &BarSeries::sentiment(&data.sentiment),
        &SENTIMENT_PALETTE,
    );
    charts::render_bar_chart(
        f,
        areas.features,
        &BarSeries::features(&data.features),
        &FEATURE_PALETTE,
    );
    summary::render_summary(f, areas.summary, &SummaryModel::from(&data.summary));

    let entries: Vec<DiscrepancyEntry> = data.discrepancies.iter().map(DiscrepancyEntry::from).collect();
    // A resize can leave the stored offset past the end of the rewrapped list
    let max_scroll = discrepancies::content_height(&entries, discrepancies::text_width(areas.discrepancies))
        .saturating_sub(1);
    let scroll = state.discrepancy_scroll().min(max_scroll);
    discrepancies::render_discrepancies(f, areas.discrepancies, &entries, scroll);
}
