pub mod core;
pub mod fetcher;

pub use core::EventSender;
pub use fetcher::{spawn_dashboard_fetch, spawn_reviews_fetch};
