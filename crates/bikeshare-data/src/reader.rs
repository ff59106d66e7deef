//! CSV loading for the per-city trip datasets.
//!
//! Reads one city's file into a [`TripTable`], parsing the start/end
//! timestamps eagerly so that a malformed file fails before any report runs.

use std::path::Path;

use bikeshare_core::error::{BikeshareError, Result};
use bikeshare_core::time_utils::parse_trip_timestamp;
use serde::Deserialize;
use tracing::{debug, info};

use crate::table::{Trip, TripTable};

/// Columns every dataset must carry.
pub const REQUIRED_COLUMNS: &[&str] = &[
    "Start Time",
    "End Time",
    "Start Station",
    "End Station",
    "User Type",
];

/// Typed view over the columns the reports use. Extra columns are ignored
/// here and kept verbatim in [`Trip::raw`].
#[derive(Debug, Deserialize)]
struct TripRow {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time")]
    end_time: String,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "User Type", default)]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    // Stored as a float (`1989.0`) in the source files.
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<f64>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load every row of the CSV at `path` into a [`TripTable`].
///
/// Fails when the file cannot be opened, a required column is absent, a row
/// cannot be decoded, or a timestamp does not parse.
pub fn load_trips(path: &Path) -> Result<TripTable> {
    let file = std::fs::File::open(path).map_err(|source| BikeshareError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(file);

    let header_record = reader
        .headers()
        .map_err(|source| csv_error(path, source))?
        .clone();
    let headers: Vec<String> = header_record.iter().map(str::to_string).collect();

    check_required_columns(path, &headers)?;
    debug!("{}: columns {:?}", path.display(), headers);

    let mut trips = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|source| csv_error(path, source))?;
        let row: TripRow = record
            .deserialize(Some(&header_record))
            .map_err(|source| csv_error(path, source))?;
        trips.push(into_trip(row, record.iter().map(str::to_string).collect())?);
    }

    let table = TripTable::new(path, headers, trips);
    info!(
        "Loaded {} trips from {} ({:?} demographics)",
        table.len(),
        path.display(),
        table.demographics()
    );
    Ok(table)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn check_required_columns(path: &Path, headers: &[String]) -> Result<()> {
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(BikeshareError::MissingColumn {
                column: (*column).to_string(),
                path: path.to_path_buf(),
            });
        }
    }
    Ok(())
}

fn into_trip(row: TripRow, raw: Vec<String>) -> Result<Trip> {
    Ok(Trip {
        start_time: parse_trip_timestamp(&row.start_time)?,
        end_time: parse_trip_timestamp(&row.end_time)?,
        start_station: non_blank(Some(row.start_station)),
        end_station: non_blank(Some(row.end_station)),
        user_type: non_blank(row.user_type),
        gender: non_blank(row.gender),
        birth_year: row.birth_year.map(|y| y.round() as i32),
        raw,
    })
}

/// Treat whitespace-only cells the same as empty ones.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn csv_error(path: &Path, source: csv::Error) -> BikeshareError {
    BikeshareError::CsvParse {
        path: path.to_path_buf(),
        source,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Demographics;
    use tempfile::TempDir;

    fn write_csv(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).expect("write fixture");
        path
    }

    const CHICAGO: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
1423854,2017-06-23 15:09:32,2017-06-23 15:14:53,321,Wood St & Hubbard St,Damen Ave & Chicago Ave,Subscriber,Male,1992.0
955915,2017-05-25 18:19:03,2017-05-25 18:45:53,1610,Theater on the Lake,Sheffield Ave & Waveland Ave,Subscriber,Female,1992.0
9031,2017-01-04 08:27:49,2017-01-04 08:34:45,416,May St & Taylor St,Wood St & Taylor St,Customer,,
";

    const WASHINGTON: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
1621326,2017-06-21 08:36:34,2017-06-21 08:44:43,489.066,14th & Belmont St NW,15th & K St NW,Subscriber
482740,2017-03-11 10:40:00,2017-03-11 10:46:00,402.549,Yuma St & Tenley Circle NW,Connecticut Ave & Yuma St NW,Subscriber
";

    #[test]
    fn test_load_full_demographics() {
        let tmp = TempDir::new().expect("tempdir");
        let path = write_csv(&tmp, "chicago.csv", CHICAGO);

        let table = load_trips(&path).expect("load");
        assert_eq!(table.len(), 3);
        assert_eq!(table.demographics(), Demographics::Full);
        assert_eq!(table.headers().len(), 9);
        assert_eq!(table.headers()[0], "");

        let first = &table.trips()[0];
        assert_eq!(first.start_station.as_deref(), Some("Wood St & Hubbard St"));
        assert_eq!(first.end_station.as_deref(), Some("Damen Ave & Chicago Ave"));
        assert_eq!(first.user_type.as_deref(), Some("Subscriber"));
        assert_eq!(first.gender.as_deref(), Some("Male"));
        assert_eq!(first.birth_year, Some(1992));
        assert_eq!(first.raw[0], "1423854");
        assert_eq!(first.month(), 6);
    }

    #[test]
    fn test_load_blank_demographic_cells_are_none() {
        let tmp = TempDir::new().expect("tempdir");
        let path = write_csv(&tmp, "chicago.csv", CHICAGO);

        let table = load_trips(&path).expect("load");
        let last = &table.trips()[2];
        assert!(last.gender.is_none());
        assert!(last.birth_year.is_none());
    }

    #[test]
    fn test_load_blank_station_cells_are_none() {
        let tmp = TempDir::new().expect("tempdir");
        let path = write_csv(
            &tmp,
            "gaps.csv",
            "Start Time,End Time,Start Station,End Station,User Type\n\
             2017-01-01 00:00:00,2017-01-01 00:05:00,,B,Customer\n\
             2017-01-01 01:00:00,2017-01-01 01:05:00,A, ,Customer\n",
        );
        let table = load_trips(&path).expect("load");
        assert!(table.trips()[0].start_station.is_none());
        assert_eq!(table.trips()[0].end_station.as_deref(), Some("B"));
        assert!(table.trips()[1].end_station.is_none());
        assert!(table.trips().iter().all(|t| t.route().is_none()));
    }

    #[test]
    fn test_load_basic_demographics() {
        let tmp = TempDir::new().expect("tempdir");
        let path = write_csv(&tmp, "washington.csv", WASHINGTON);

        let table = load_trips(&path).expect("load");
        assert_eq!(table.len(), 2);
        assert_eq!(table.demographics(), Demographics::Basic);
        assert!(table.trips().iter().all(|t| t.gender.is_none()));
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let tmp = TempDir::new().expect("tempdir");
        let err = load_trips(&tmp.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, BikeshareError::FileRead { .. }));
    }

    #[test]
    fn test_load_missing_required_column() {
        let tmp = TempDir::new().expect("tempdir");
        let path = write_csv(
            &tmp,
            "broken.csv",
            "Start Time,Start Station,End Station,User Type\n2017-01-01 00:00:00,A,B,Customer\n",
        );
        let err = load_trips(&path).unwrap_err();
        match err {
            BikeshareError::MissingColumn { column, .. } => assert_eq!(column, "End Time"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_bad_timestamp_is_error() {
        let tmp = TempDir::new().expect("tempdir");
        let path = write_csv(
            &tmp,
            "bad.csv",
            "Start Time,End Time,Start Station,End Station,User Type\nsoon,later,A,B,Customer\n",
        );
        let err = load_trips(&path).unwrap_err();
        assert!(matches!(err, BikeshareError::TimestampParse(_)));
    }

    #[test]
    fn test_load_ragged_row_is_error() {
        let tmp = TempDir::new().expect("tempdir");
        let path = write_csv(
            &tmp,
            "ragged.csv",
            "Start Time,End Time,Start Station,End Station,User Type\n2017-01-01 00:00:00,2017-01-01 00:05:00,A\n",
        );
        let err = load_trips(&path).unwrap_err();
        assert!(matches!(err, BikeshareError::CsvParse { .. }));
    }

    #[test]
    fn test_load_header_only_gives_empty_table() {
        let tmp = TempDir::new().expect("tempdir");
        let path = write_csv(
            &tmp,
            "empty.csv",
            "Start Time,End Time,Start Station,End Station,User Type\n",
        );
        let table = load_trips(&path).expect("load");
        assert!(table.is_empty());
    }
}
