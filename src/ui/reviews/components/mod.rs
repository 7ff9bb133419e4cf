//! Reviews component modules

pub mod cards;
pub mod filter_bar;
