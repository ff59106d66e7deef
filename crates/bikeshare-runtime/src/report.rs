//! Text rendering of the four statistics reports and the raw-row preview.
//!
//! Each `print_*` function computes its aggregates through
//! [`bikeshare_data::stats`], writes them, then closes with the elapsed time
//! and a dashed rule.

use std::io::{self, Write};
use std::time::Instant;

use bikeshare_core::formatting::{format_elapsed, format_timedelta, separator};
use bikeshare_core::models::calendar_month_name;
use bikeshare_data::aggregator::ValueCounts;
use bikeshare_data::stats::{duration_stats, station_stats, time_stats, user_stats, UserStats};
use bikeshare_data::table::TripTable;
use unicode_width::UnicodeWidthStr;

/// Printed in place of aggregates when the selection matched nothing.
pub const NO_TRIPS: &str = "No trips match the selected filters.";

/// Columns appended to the raw preview after the source columns.
const DERIVED_COLUMNS: [&str; 3] = ["Month", "Day of Week", "Hour"];

// ── Reports ───────────────────────────────────────────────────────────────────

/// Most frequent month, weekday and start hour.
pub fn print_time_stats<W: Write>(out: &mut W, table: &TripTable) -> io::Result<()> {
    writeln!(out, "\nCalculating The Most Frequent Times of Travel...\n")?;
    let started = Instant::now();

    match time_stats(table) {
        Some(stats) => {
            let month = calendar_month_name(stats.month.value).unwrap_or("Unknown");
            writeln!(out, "The most common month: {}, Count: {}", month, stats.month.count)?;
            writeln!(
                out,
                "The most common day of week: {}, Count: {}",
                stats.weekday.value, stats.weekday.count
            )?;
            writeln!(
                out,
                "The most popular hour: {}, Count: {}",
                stats.hour.value, stats.hour.count
            )?;
        }
        None => writeln!(out, "{NO_TRIPS}")?,
    }

    finish(out, started)
}

/// Most used start station, end station and route.
pub fn print_station_stats<W: Write>(out: &mut W, table: &TripTable) -> io::Result<()> {
    writeln!(out, "\nCalculating The Most Popular Stations and Trip...\n")?;
    let started = Instant::now();

    match station_stats(table) {
        Some(stats) => {
            writeln!(
                out,
                "The most commonly used start station: {}, Count: {}",
                stats.start_station.value, stats.start_station.count
            )?;
            writeln!(
                out,
                "The most commonly used end station: {}, Count: {}",
                stats.end_station.value, stats.end_station.count
            )?;
            writeln!(
                out,
                "The most frequent trip: {}, Count: {}",
                stats.route.value, stats.route.count
            )?;
        }
        None => writeln!(out, "{NO_TRIPS}")?,
    }

    finish(out, started)
}

/// Total and mean trip duration.
pub fn print_trip_duration_stats<W: Write>(out: &mut W, table: &TripTable) -> io::Result<()> {
    writeln!(out, "\nCalculating Trip Duration...\n")?;
    let started = Instant::now();

    match duration_stats(table) {
        Some(totals) => {
            writeln!(out, "Total travel time: {}", format_timedelta(totals.total))?;
            writeln!(out, "Mean travel time: {}", format_timedelta(totals.mean))?;
        }
        None => writeln!(out, "{NO_TRIPS}")?,
    }

    finish(out, started)
}

/// User-type counts, plus gender and birth-year figures when the dataset
/// carries them.
pub fn print_user_stats<W: Write>(out: &mut W, table: &TripTable) -> io::Result<()> {
    writeln!(out, "\nCalculating User Stats...\n")?;
    let started = Instant::now();

    if table.is_empty() {
        writeln!(out, "{NO_TRIPS}")?;
        return finish(out, started);
    }

    let stats = user_stats(table);
    writeln!(out, "The distribution of user type:")?;
    write_counts(out, stats.user_types())?;

    if let UserStats::Full {
        genders,
        birth_years,
        ..
    } = &stats
    {
        writeln!(out, "\nThe distribution of user gender:")?;
        write_counts(out, genders)?;

        match birth_years {
            Some(years) => {
                writeln!(out, "\nThe earliest year of birth: {}", years.earliest)?;
                writeln!(out, "The most recent year of birth: {}", years.most_recent)?;
                writeln!(out, "The most common year of birth: {}", years.most_common)?;
            }
            None => writeln!(out, "\nNo birth year data for this selection.")?,
        }
    }

    finish(out, started)
}

// ── Raw preview ───────────────────────────────────────────────────────────────

/// Print the first `rows` trips as an aligned table: every source column,
/// then the derived month, weekday and hour.
pub fn print_raw_rows<W: Write>(out: &mut W, table: &TripTable, rows: usize) -> io::Result<()> {
    if table.is_empty() {
        return writeln!(out, "{NO_TRIPS}");
    }

    let mut grid: Vec<Vec<String>> = Vec::with_capacity(rows + 1);
    grid.push(
        table
            .headers()
            .iter()
            .cloned()
            .chain(DERIVED_COLUMNS.iter().map(|c| c.to_string()))
            .collect(),
    );
    for trip in table.head(rows) {
        let mut line = trip.raw.clone();
        line.push(trip.month().to_string());
        line.push(trip.weekday().to_string());
        line.push(trip.hour().to_string());
        grid.push(line);
    }

    let columns = grid.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = (0..columns)
        .map(|c| {
            grid.iter()
                .filter_map(|line| line.get(c))
                .map(|cell| cell.width())
                .max()
                .unwrap_or(0)
        })
        .collect();

    for line in &grid {
        writeln!(out, "{}", render_line(line, &widths))?;
    }
    Ok(())
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn finish<W: Write>(out: &mut W, started: Instant) -> io::Result<()> {
    writeln!(out, "\n{}", format_elapsed(started.elapsed()))?;
    writeln!(out, "{}", separator())
}

/// One `"  <label>  <count>"` line per value, labels padded to a common width.
fn write_counts<W: Write>(out: &mut W, counts: &ValueCounts<String>) -> io::Result<()> {
    let width = counts.iter().map(|(k, _)| k.width()).max().unwrap_or(0);
    for (label, count) in counts.iter() {
        writeln!(out, "  {}  {}", pad(label, width), count)?;
    }
    Ok(())
}

fn render_line(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &w)| pad(cell, w))
        .collect();
    padded.join("  ").trim_end().to_string()
}

/// Right-pad `s` with spaces to `width` display columns.
fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{s}{}", " ".repeat(fill))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
