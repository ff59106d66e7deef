//! Shared building blocks for the bikeshare explorer.
//!
//! Holds the typed filter enumerations, the error type, CLI settings and the
//! time / formatting helpers used by the data and runtime layers.

pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;
pub mod time_utils;

pub use error::{BikeshareError, Result};
