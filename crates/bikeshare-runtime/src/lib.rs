//! Runtime layer for the bikeshare explorer.
//!
//! Owns the interactive prompts, the text rendering of each report and the
//! restartable session loop that ties them to the data layer.

pub mod orchestrator;
pub mod prompt;
pub mod report;

pub use bikeshare_core as core;
pub use bikeshare_data as data;
