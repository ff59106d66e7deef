//! Interactive prompts over any `BufRead` / `Write` pair.
//!
//! The collector keeps asking until it gets a member of the expected
//! enumeration. By default there is no retry limit; an optional limit turns
//! an endless stream of bad answers into [`BikeshareError::RetriesExhausted`].

use std::io::{BufRead, Write};
use std::str::FromStr;

use bikeshare_core::error::{BikeshareError, Result};
use bikeshare_core::formatting::separator;
use bikeshare_core::models::{City, DayFilter, FilterSelection, MonthFilter};
use tracing::debug;

pub const GREETING: &str = "Hello! Let's explore some US bikeshare data!";

pub const CITY_QUESTION: &str = "Please select one from Chicago, New York, or Washington to explore.";
pub const CITY_RETRY: &str = "Please input the correct city name.";

pub const MONTH_QUESTION: &str = "Please tell me the month you would like to explore from January to June. Input all if you want to explore data from all months";
pub const MONTH_RETRY: &str = "Please input the month from january to june correctly or all.";

pub const DAY_QUESTION: &str = "Please tell me the day of week you would like to explore. Input all if you want to explore all days";
pub const DAY_RETRY: &str = "Please input the day of week correctly or all.";

/// Reads answers from `input` and writes questions to `output`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    max_retries: Option<u32>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Unbounded prompter.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            max_retries: None,
        }
    }

    /// Cap how many invalid answers a single question tolerates.
    pub fn with_max_retries(mut self, max_retries: Option<u32>) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Writer the prompter prints to; reports share it.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Ask for city, month and day in turn.
    pub fn collect_filters(&mut self) -> Result<FilterSelection> {
        writeln!(self.output, "{GREETING}\n")?;

        let city: City = self.choose("city", CITY_QUESTION, CITY_RETRY)?;
        let month: MonthFilter = self.choose("month", MONTH_QUESTION, MONTH_RETRY)?;
        let day: DayFilter = self.choose("day", DAY_QUESTION, DAY_RETRY)?;

        writeln!(self.output, "{}", separator())?;
        debug!("Selected city={:?} month={:?} day={:?}", city, month, day);

        Ok(FilterSelection { city, month, day })
    }

    /// Print `question`, then read lines until one parses as `T`.
    ///
    /// Each rejected answer prints `retry` before reading again.
    pub fn choose<T: FromStr>(
        &mut self,
        field: &'static str,
        question: &str,
        retry: &str,
    ) -> Result<T> {
        writeln!(self.output, "{question}")?;
        let mut rejected: u32 = 0;

        loop {
            let answer = self
                .read_answer()?
                .ok_or(BikeshareError::InputClosed(field))?;

            match answer.parse::<T>() {
                Ok(value) => return Ok(value),
                Err(_) => {
                    rejected += 1;
                    debug!("Rejected {} answer {:?}", field, answer);

                    if let Some(limit) = self.max_retries {
                        if rejected > limit {
                            return Err(BikeshareError::RetriesExhausted {
                                field,
                                attempts: rejected,
                            });
                        }
                    }
                    writeln!(self.output, "{retry}")?;
                }
            }
        }
    }

    /// Ask a yes/no question. Only exactly `yes` (any case, no padding)
    /// counts as agreement; end of input counts as no.
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        writeln!(self.output, "{question}")?;
        Ok(self
            .read_answer()?
            .is_some_and(|answer| answer.eq_ignore_ascii_case("yes")))
    }

    /// One line without its terminator, or `None` at end of input.
    fn read_answer(&mut self) -> Result<Option<String>> {
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
