//! Month / weekday narrowing of a loaded [`TripTable`].

use bikeshare_core::models::{DayFilter, FilterSelection, MonthFilter};
use tracing::debug;

use crate::table::{Trip, TripTable};

/// `true` when `trip` satisfies both the month and the day constraint.
pub fn matches(trip: &Trip, month: MonthFilter, day: DayFilter) -> bool {
    let month_ok = match month {
        MonthFilter::All => true,
        MonthFilter::Only(m) => trip.month() == m.number(),
    };
    let day_ok = match day {
        DayFilter::All => true,
        DayFilter::Only(d) => trip.weekday() == d,
    };
    month_ok && day_ok
}

/// Narrow `table` to the trips matching `month` and `day`.
///
/// The result is always a subset of the input, in the original row order.
pub fn apply_filters(table: TripTable, month: MonthFilter, day: DayFilter) -> TripTable {
    let before = table.len();
    let filtered = table.retain(|trip| matches(trip, month, day));
    debug!(
        "Filter month={:?} day={:?}: kept {} of {} trips",
        month,
        day,
        filtered.len(),
        before
    );
    filtered
}

/// Convenience wrapper taking a whole [`FilterSelection`].
pub fn apply_selection(table: TripTable, selection: &FilterSelection) -> TripTable {
    apply_filters(table, selection.month, selection.day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bikeshare_core::models::{Month, Weekday};
    use bikeshare_core::time_utils::parse_trip_timestamp;

    fn trip(start: &str) -> Trip {
        let start_time = parse_trip_timestamp(start).unwrap();
        Trip {
            start_time,
            end_time: start_time + chrono::TimeDelta::minutes(10),
            start_station: Some("A".to_string()),
            end_station: Some("B".to_string()),
            user_type: None,
            gender: None,
            birth_year: None,
            raw: vec![start.to_string()],
        }
    }

    /// Spread across January..April and several weekdays.
    fn table() -> TripTable {
        let starts = [
            "2017-01-02 08:00:00", // Monday
            "2017-01-03 09:00:00", // Tuesday
            "2017-03-06 10:00:00", // Monday
            "2017-03-07 11:00:00", // Tuesday
            "2017-03-11 12:00:00", // Saturday
            "2017-04-03 13:00:00", // Monday
            "2017-04-09 14:00:00", // Sunday
        ];
        TripTable::new("t.csv", vec![], starts.iter().map(|s| trip(s)).collect())
    }

    #[test]
    fn test_all_all_keeps_everything() {
        let filtered = apply_filters(table(), MonthFilter::All, DayFilter::All);
        assert_eq!(filtered.len(), 7);
    }

    #[test]
    fn test_month_only_keeps_exactly_that_month() {
        let source = table();
        let expected: Vec<Trip> = source
            .trips()
            .iter()
            .filter(|t| t.month() == 3)
            .cloned()
            .collect();

        let filtered = apply_filters(source, MonthFilter::Only(Month::March), DayFilter::All);
        assert_eq!(filtered.trips(), expected.as_slice());
        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn test_day_only_keeps_exactly_that_weekday() {
        let filtered = apply_filters(table(), MonthFilter::All, DayFilter::Only(Weekday::Monday));
        assert_eq!(filtered.len(), 3);
        assert!(filtered
            .trips()
            .iter()
            .all(|t| t.weekday() == Weekday::Monday));
    }

    #[test]
    fn test_month_and_day_combined() {
        let filtered = apply_filters(
            table(),
            MonthFilter::Only(Month::March),
            DayFilter::Only(Weekday::Tuesday),
        );
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered.trips()[0].raw[0], "2017-03-07 11:00:00");
    }

    #[test]
    fn test_no_match_gives_empty_table() {
        let filtered = apply_filters(table(), MonthFilter::Only(Month::June), DayFilter::All);
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_apply_selection_uses_month_and_day() {
        let selection = FilterSelection {
            city: bikeshare_core::models::City::Chicago,
            month: MonthFilter::Only(Month::April),
            day: DayFilter::Only(Weekday::Sunday),
        };
        let filtered = apply_selection(table(), &selection);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered.trips()[0].hour(), 14);
    }
}
