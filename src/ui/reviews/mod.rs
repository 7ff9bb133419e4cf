//! Reviews view
//!
//! A filter selector above a grid of review cards

pub mod components;
pub mod renderer;
pub mod state;

pub use renderer::render_reviews;
pub use state::ReviewsState;
