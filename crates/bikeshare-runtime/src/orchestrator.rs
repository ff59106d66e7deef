//! Interactive session loop.
//!
//! One cycle is: collect filters → load and filter the city's trips → run the
//! four reports → offer a raw-row preview. After each cycle the user is asked
//! whether to restart; anything but `yes` ends the session.

use std::io::{BufRead, Write};

use bikeshare_core::error::Result;
use bikeshare_core::models::FilterSelection;
use bikeshare_core::settings::CityConfig;
use bikeshare_data::filter::apply_selection;
use bikeshare_data::reader::load_trips;
use bikeshare_data::table::TripTable;
use tracing::info;

use crate::prompt::Prompter;
use crate::report;

pub const RESTART_QUESTION: &str = "\nWould you like to restart? Enter yes or no.";

/// Load the dataset for `selection.city` and narrow it to the selection.
pub fn load_filtered(cities: &CityConfig, selection: &FilterSelection) -> Result<TripTable> {
    let path = cities.path_for(selection.city);
    info!(
        "Loading {} data from {} (month: {}, day: {})",
        selection.city,
        path.display(),
        selection.month,
        selection.day
    );
    let table = load_trips(path)?;
    Ok(apply_selection(table, selection))
}

/// Drives the prompt → report loop over an injected reader / writer.
pub struct ExplorerSession<R, W> {
    prompter: Prompter<R, W>,
    cities: CityConfig,
    preview_rows: usize,
}

impl<R: BufRead, W: Write> ExplorerSession<R, W> {
    pub fn new(prompter: Prompter<R, W>, cities: CityConfig, preview_rows: usize) -> Self {
        Self {
            prompter,
            cities,
            preview_rows,
        }
    }

    /// Run cycles until the user declines to restart.
    ///
    /// Returns the number of completed report cycles.
    pub fn run(&mut self) -> Result<usize> {
        let mut cycles = 0;
        loop {
            self.run_cycle()?;
            cycles += 1;

            if !self.prompter.confirm(RESTART_QUESTION)? {
                break;
            }
        }
        info!("Session finished after {} cycle(s)", cycles);
        Ok(cycles)
    }

    /// A single filter → report → preview pass. The table is dropped on
    /// return.
    pub fn run_cycle(&mut self) -> Result<()> {
        let selection = self.prompter.collect_filters()?;
        let table = load_filtered(&self.cities, &selection)?;
        info!("{} trips match the selection", table.len());

        let out = self.prompter.output();
        report::print_time_stats(out, &table)?;
        report::print_station_stats(out, &table)?;
        report::print_trip_duration_stats(out, &table)?;
        report::print_user_stats(out, &table)?;

        let question = format!(
            "Would you like to see {} lines of raw data?",
            self.preview_rows
        );
        if self.prompter.confirm(&question)? {
            report::print_raw_rows(self.prompter.output(), &table, self.preview_rows)?;
        }
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
