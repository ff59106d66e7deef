//! In-memory trip table: one [`Trip`] per CSV row plus the header row and the
//! schema capability detected at load time.

use std::path::{Path, PathBuf};

use bikeshare_core::models::Weekday;
use chrono::{Datelike, NaiveDateTime, TimeDelta, Timelike};

// ── Demographics ──────────────────────────────────────────────────────────────

pub const GENDER_COLUMN: &str = "Gender";
pub const BIRTH_YEAR_COLUMN: &str = "Birth Year";

/// Whether a dataset exposes the rider demographic columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Demographics {
    /// Both `Gender` and `Birth Year` are present.
    Full,
    /// At least one demographic column is missing.
    Basic,
}

impl Demographics {
    /// Inspect a header row once and classify it.
    pub fn detect<S: AsRef<str>>(headers: &[S]) -> Self {
        let has = |name: &str| headers.iter().any(|h| h.as_ref() == name);
        if has(GENDER_COLUMN) && has(BIRTH_YEAR_COLUMN) {
            Demographics::Full
        } else {
            Demographics::Basic
        }
    }
}

// ── Trip ──────────────────────────────────────────────────────────────────────

/// A single bike-share trip (one CSV row).
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    /// Text cells below are `None` when blank.
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
    /// Every cell of the source row, in header order.
    pub raw: Vec<String>,
}

impl Trip {
    /// Calendar month of the start time (1 = January).
    pub fn month(&self) -> u32 {
        self.start_time.month()
    }

    pub fn weekday(&self) -> Weekday {
        self.start_time.weekday().into()
    }

    /// Hour of day of the start time (0..=23).
    pub fn hour(&self) -> u32 {
        self.start_time.hour()
    }

    /// End minus start. Negative when the source row is inconsistent.
    pub fn duration(&self) -> TimeDelta {
        self.end_time - self.start_time
    }

    /// `"From <start> to <end>"` label identifying the route; `None` when
    /// either station is unknown.
    pub fn route(&self) -> Option<String> {
        let (start, end) = (self.start_station.as_ref()?, self.end_station.as_ref()?);
        Some(format!("From {start} to {end}"))
    }
}

// ── TripTable ─────────────────────────────────────────────────────────────────

/// All trips loaded from one city's dataset.
#[derive(Debug, Clone)]
pub struct TripTable {
    source: PathBuf,
    headers: Vec<String>,
    demographics: Demographics,
    trips: Vec<Trip>,
}

impl TripTable {
    /// Build a table, classifying demographics from `headers`.
    pub fn new(source: impl Into<PathBuf>, headers: Vec<String>, trips: Vec<Trip>) -> Self {
        let demographics = Demographics::detect(&headers);
        Self {
            source: source.into(),
            headers,
            demographics,
            trips,
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn demographics(&self) -> Demographics {
        self.demographics
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    /// The first `n` trips (fewer if the table is shorter).
    pub fn head(&self, n: usize) -> &[Trip] {
        &self.trips[..n.min(self.trips.len())]
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Keep only the trips for which `keep` returns `true`.
    pub fn retain(mut self, keep: impl FnMut(&Trip) -> bool) -> Self {
        self.trips.retain(keep);
        self
    }
}
