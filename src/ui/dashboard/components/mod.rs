//! Dashboard component modules

pub mod charts;
pub mod discrepancies;
pub mod summary;
