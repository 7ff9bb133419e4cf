// Module declarations
mod app;
pub mod components;
pub mod dashboard;
pub mod reviews;
pub mod utils;
pub mod view_state;
// Re-exports for external use
pub use app::{App, InitialView, run};
