//! Chrome shared by both views

pub mod activity;
pub mod footer;
pub mod header;
