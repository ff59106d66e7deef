use std::time::Duration;

use chrono::TimeDelta;

/// Width of the horizontal rule printed between report sections.
pub const SEPARATOR_WIDTH: usize = 40;

/// The dashed rule that closes every report block.
pub fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

/// Format a signed time span as `"<d> days HH:MM:SS[.ffffff]"`.
///
/// The day component carries the sign; the clock part is always positive, so
/// one minute before zero reads `"-1 days +23:59:00"`. Sub-second precision is
/// shown as six digits only when non-zero.
///
/// # Examples
///
/// ```
/// use bikeshare_core::formatting::format_timedelta;
/// use chrono::TimeDelta;
///
/// assert_eq!(format_timedelta(TimeDelta::seconds(754)), "0 days 00:12:34");
/// assert_eq!(format_timedelta(TimeDelta::seconds(90_061)), "1 days 01:01:01");
/// assert_eq!(format_timedelta(TimeDelta::milliseconds(1_500)), "0 days 00:00:01.500000");
/// assert_eq!(format_timedelta(TimeDelta::seconds(-60)), "-1 days +23:59:00");
/// ```
pub fn format_timedelta(delta: TimeDelta) -> String {
    const SECS_PER_DAY: i64 = 86_400;

    let total_secs = delta.num_seconds();
    let mut micros = (delta - TimeDelta::seconds(total_secs))
        .num_microseconds()
        .unwrap_or(0);
    let mut whole_secs = total_secs;
    if micros < 0 {
        // Borrow one second so the fractional part stays positive.
        micros += 1_000_000;
        whole_secs -= 1;
    }

    let days = whole_secs.div_euclid(SECS_PER_DAY);
    let rem = whole_secs.rem_euclid(SECS_PER_DAY);
    let hours = rem / 3_600;
    let minutes = (rem % 3_600) / 60;
    let seconds = rem % 60;

    let sign = if days < 0 { "+" } else { "" };
    let clock = format!("{sign}{hours:02}:{minutes:02}:{seconds:02}");

    if micros == 0 {
        format!("{days} days {clock}")
    } else {
        format!("{days} days {clock}.{micros:06}")
    }
}

/// Format the wall-clock time a report spent computing.
///
/// # Examples
///
/// ```
/// use bikeshare_core::formatting::format_elapsed;
/// use std::time::Duration;
///
/// assert_eq!(format_elapsed(Duration::from_millis(250)), "This took 0.250000 seconds.");
/// ```
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("This took {:.6} seconds.", elapsed.as_secs_f64())
}
