//! The four descriptive reports computed over a (filtered) [`TripTable`].
//!
//! Every function here is pure: it reads the table and returns a value. The
//! runtime layer owns printing and timing.

use bikeshare_core::models::Weekday;

use crate::aggregator::{min_max, DurationTotals, ValueCounts};
use crate::table::{Demographics, TripTable};

/// A most-frequent value together with how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Popular<T> {
    pub value: T,
    pub count: usize,
}

impl<T: Clone> Popular<T> {
    fn from_mode(mode: Option<(&T, usize)>) -> Option<Self> {
        mode.map(|(value, count)| Popular {
            value: value.clone(),
            count,
        })
    }
}

/// Mode of `values`; ties go to the smallest value.
fn popular<T, I>(values: I) -> Option<Popular<T>>
where
    T: std::hash::Hash + Ord + Clone,
    I: IntoIterator<Item = T>,
{
    Popular::from_mode(ValueCounts::tally(values).mode())
}

// ── Time of travel ────────────────────────────────────────────────────────────

/// Most frequent month, weekday and start hour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeStats {
    /// Calendar month number (1 = January).
    pub month: Popular<u32>,
    pub weekday: Popular<Weekday>,
    /// Hour of day (0..=23).
    pub hour: Popular<u32>,
}

/// `None` when the table is empty.
pub fn time_stats(table: &TripTable) -> Option<TimeStats> {
    let trips = table.trips();
    Some(TimeStats {
        month: popular(trips.iter().map(|t| t.month()))?,
        // Tied weekdays are settled by name, not calendar order.
        weekday: Popular::from_mode(
            ValueCounts::tally(trips.iter().map(|t| t.weekday())).mode_by_key(|d| d.name()),
        )?,
        hour: popular(trips.iter().map(|t| t.hour()))?,
    })
}

// ── Stations ──────────────────────────────────────────────────────────────────

/// Most used start station, end station and start→end route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub start_station: Popular<String>,
    pub end_station: Popular<String>,
    /// Route label in the form `"From <start> to <end>"`.
    pub route: Popular<String>,
}

/// Blank stations are skipped. `None` when the table is empty or a column
/// has no known stations at all.
pub fn station_stats(table: &TripTable) -> Option<StationStats> {
    let trips = table.trips();
    Some(StationStats {
        start_station: popular(trips.iter().filter_map(|t| t.start_station.clone()))?,
        end_station: popular(trips.iter().filter_map(|t| t.end_station.clone()))?,
        route: popular(trips.iter().filter_map(|t| t.route()))?,
    })
}

// ── Trip duration ─────────────────────────────────────────────────────────────

/// Total and mean of `end - start` over every trip; `None` when empty.
pub fn duration_stats(table: &TripTable) -> Option<DurationTotals> {
    DurationTotals::from_spans(table.trips().iter().map(|t| t.duration()))
}

// ── Users ─────────────────────────────────────────────────────────────────────

/// Earliest, most recent and most common birth year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: i32,
}

/// User breakdown, shaped by the dataset's [`Demographics`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserStats {
    /// Dataset lacks gender / birth-year columns.
    Basic { user_types: ValueCounts<String> },
    Full {
        user_types: ValueCounts<String>,
        genders: ValueCounts<String>,
        /// `None` when every birth-year cell in the selection is blank.
        birth_years: Option<BirthYearStats>,
    },
}

impl UserStats {
    pub fn user_types(&self) -> &ValueCounts<String> {
        match self {
            UserStats::Basic { user_types } | UserStats::Full { user_types, .. } => user_types,
        }
    }
}

/// Blank cells are left out of every count.
pub fn user_stats(table: &TripTable) -> UserStats {
    let trips = table.trips();
    let user_types = ValueCounts::tally(trips.iter().filter_map(|t| t.user_type.clone()));

    match table.demographics() {
        Demographics::Basic => UserStats::Basic { user_types },
        Demographics::Full => {
            let genders = ValueCounts::tally(trips.iter().filter_map(|t| t.gender.clone()));
            let years: Vec<i32> = trips.iter().filter_map(|t| t.birth_year).collect();
            let birth_years = min_max(years.iter().copied()).and_then(|(earliest, most_recent)| {
                let most_common = popular(years.iter().copied())?.value;
                Some(BirthYearStats {
                    earliest,
                    most_recent,
                    most_common,
                })
            });

            UserStats::Full {
                user_types,
                genders,
                birth_years,
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
