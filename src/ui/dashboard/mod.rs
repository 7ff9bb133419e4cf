//! Dashboard view
//!
//! Sentiment and feature charts, the rating summary and the discrepancy list

pub mod components;
pub mod renderer;
pub mod state;

pub use renderer::render_dashboard;
pub use state::DashboardState;
