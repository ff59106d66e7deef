use clap::Parser;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::models::City;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Interactive explorer for US bike-share trip data
#[derive(Parser, Debug, Clone)]
#[command(
    name = "bikeshare",
    about = "Interactive explorer for US bike-share trip data",
    version
)]
pub struct Settings {
    /// Directory holding chicago.csv, new_york_city.csv and washington.csv
    #[arg(long, default_value = ".")]
    pub data_dir: PathBuf,

    /// Give up after this many invalid answers to a single prompt
    #[arg(long)]
    pub max_retries: Option<u32>,

    /// Number of raw rows shown when the preview is requested
    #[arg(long, default_value = "5", value_parser = clap::value_parser!(u32).range(1..=1000))]
    pub preview_rows: u32,

    /// Logging level
    #[arg(long, default_value = "WARNING", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"])]
    pub log_level: String,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Settings {
    /// Parse the process arguments and apply the `--debug` override.
    pub fn load() -> Self {
        Self::load_from_args(std::env::args_os())
    }

    /// Same as [`Settings::load`] but with an explicit argument list.
    pub fn load_from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let mut settings = Settings::parse_from(args);
        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }
        settings
    }

    /// Build the city → dataset mapping rooted at `data_dir`.
    pub fn city_config(&self) -> CityConfig {
        CityConfig::new(&self.data_dir)
    }
}

// ── CityConfig ─────────────────────────────────────────────────────────────────

/// Explicit mapping from each [`City`] to the CSV file holding its trips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityConfig {
    files: BTreeMap<City, PathBuf>,
}

impl CityConfig {
    /// Map every city to its default file name inside `data_dir`.
    pub fn new(data_dir: &Path) -> Self {
        let files = City::ALL
            .into_iter()
            .map(|city| (city, data_dir.join(city.default_file_name())))
            .collect();
        Self { files }
    }

    /// Point a single city at a different file.
    pub fn with_file(mut self, city: City, path: impl Into<PathBuf>) -> Self {
        self.files.insert(city, path.into());
        self
    }

    /// Dataset path for `city`.
    pub fn path_for(&self, city: City) -> &Path {
        // Every constructor populates all three cities.
        self.files
            .get(&city)
            .map(PathBuf::as_path)
            .unwrap_or_else(|| Path::new(city.default_file_name()))
    }
}

impl Default for CityConfig {
    fn default() -> Self {
        Self::new(Path::new("."))
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
