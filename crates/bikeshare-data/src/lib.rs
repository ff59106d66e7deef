//! Data layer for the bikeshare explorer.
//!
//! Loads a city's CSV into a [`table::TripTable`], narrows it by month and
//! weekday, and computes the descriptive statistics shown in each report.

pub mod aggregator;
pub mod filter;
pub mod reader;
pub mod stats;
pub mod table;

pub use bikeshare_core as core;
