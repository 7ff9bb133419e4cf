//! Renderer-agnostic view models
//!
//! Pure functions from API payloads to what a view shows. The TUI widgets and
//! the headless text report both draw from these.

pub mod card;
pub mod chart;
pub mod summary;
pub mod text;

pub use card::{Badge, DiscrepancyEntry, ReviewCard, Tone, review_cards};
pub use chart::BarSeries;
pub use summary::SummaryModel;
