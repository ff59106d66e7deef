use std::fmt;
use std::str::FromStr;

// ── City ──────────────────────────────────────────────────────────────────────

/// The cities a dataset ships for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum City {
    Chicago,
    NewYork,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYork, City::Washington];

    /// Lower-case name as typed at the prompt.
    pub fn as_str(self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYork => "new york",
            City::Washington => "washington",
        }
    }

    /// Name of the CSV file shipped for this city.
    pub fn default_file_name(self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYork => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            City::Chicago => "Chicago",
            City::NewYork => "New York",
            City::Washington => "Washington",
        };
        f.write_str(name)
    }
}

impl FromStr for City {
    type Err = ParseSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = normalise(s);
        City::ALL
            .into_iter()
            .find(|c| c.as_str() == needle)
            .ok_or_else(|| ParseSelectionError::new("city", s))
    }
}

// ── Month ─────────────────────────────────────────────────────────────────────

/// Months covered by the datasets (January through June).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
}

impl Month {
    pub const ALL: [Month; 6] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
    ];

    /// 1-based calendar number.
    pub fn number(self) -> u32 {
        self as u32 + 1
    }

    /// Inverse of [`Month::number`]; `None` outside January..June.
    pub fn from_number(n: u32) -> Option<Self> {
        n.checked_sub(1)
            .and_then(|i| Self::ALL.get(i as usize))
            .copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Month {
    type Err = ParseSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = normalise(s);
        Month::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(&needle))
            .ok_or_else(|| ParseSelectionError::new("month", s))
    }
}

/// Full English month name for any calendar month number (1..=12).
///
/// Used when reporting the most common month, which may fall outside the
/// selectable range if a dataset carries stray rows.
pub fn calendar_month_name(n: u32) -> Option<&'static str> {
    const NAMES: [&str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];
    n.checked_sub(1).and_then(|i| NAMES.get(i as usize)).copied()
}

// ── Weekday ───────────────────────────────────────────────────────────────────

/// Day of the week with fixed English names, independent of the host locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        Self::ALL[day.num_days_from_monday() as usize]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = ParseSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = normalise(s);
        Weekday::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(&needle))
            .ok_or_else(|| ParseSelectionError::new("day", s))
    }
}

// ── Filters ───────────────────────────────────────────────────────────────────

/// Month constraint: everything, or a single month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    Only(Month),
}

impl FromStr for MonthFilter {
    type Err = ParseSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if normalise(s) == "all" {
            return Ok(MonthFilter::All);
        }
        s.parse().map(MonthFilter::Only)
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthFilter::All => f.write_str("all months"),
            MonthFilter::Only(m) => write!(f, "{m}"),
        }
    }
}

/// Weekday constraint: everything, or a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Only(Weekday),
}

impl FromStr for DayFilter {
    type Err = ParseSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if normalise(s) == "all" {
            return Ok(DayFilter::All);
        }
        s.parse().map(DayFilter::Only)
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayFilter::All => f.write_str("all days"),
            DayFilter::Only(d) => write!(f, "{d}"),
        }
    }
}

/// A validated city / month / day triple collected from the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSelection {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

// ── Parse error ───────────────────────────────────────────────────────────────

/// Raised when user text is not a member of the expected enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSelectionError {
    pub field: &'static str,
    pub input: String,
}

impl ParseSelectionError {
    fn new(field: &'static str, input: &str) -> Self {
        Self {
            field,
            input: input.to_string(),
        }
    }
}

impl fmt::Display for ParseSelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a valid {}", self.input, self.field)
    }
}

impl std::error::Error for ParseSelectionError {}

/// Trim surrounding whitespace and lower-case; inner spacing must match.
fn normalise(s: &str) -> String {
    s.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_parse_is_case_insensitive() {
        for input in ["chicago", "Chicago", "CHICAGO", "cHiCaGo", "  chicago \n"] {
            assert_eq!(input.parse::<City>(), Ok(City::Chicago), "input {input:?}");
        }
        for input in ["new york", "New York", "NEW YORK", " new york "] {
            assert_eq!(input.parse::<City>(), Ok(City::NewYork), "input {input:?}");
        }
    }

    #[test]
    fn test_city_parse_keeps_inner_whitespace() {
        assert!("new   york".parse::<City>().is_err());
        assert!("new\tyork".parse::<City>().is_err());
    }

    #[test]
    fn test_city_parse_rejects_unknown() {
        let err = "boston".parse::<City>().unwrap_err();
        assert_eq!(err.field, "city");
        assert_eq!(err.input, "boston");
        assert!("new york city".parse::<City>().is_err());
        assert!("".parse::<City>().is_err());
    }

    #[test]
    fn test_city_file_names() {
        assert_eq!(City::Chicago.default_file_name(), "chicago.csv");
        assert_eq!(City::NewYork.default_file_name(), "new_york_city.csv");
        assert_eq!(City::Washington.default_file_name(), "washington.csv");
    }

    #[test]
    fn test_month_numbers_round_trip() {
        for m in Month::ALL {
            assert_eq!(Month::from_number(m.number()), Some(m));
        }
        assert_eq!(Month::March.number(), 3);
        assert_eq!(Month::from_number(0), None);
        assert_eq!(Month::from_number(7), None);
    }

    #[test]
    fn test_month_parse_only_first_half_of_year() {
        assert_eq!("MARCH".parse::<Month>(), Ok(Month::March));
        assert!("july".parse::<Month>().is_err());
    }

    #[test]
    fn test_calendar_month_name() {
        assert_eq!(calendar_month_name(1), Some("January"));
        assert_eq!(calendar_month_name(12), Some("December"));
        assert_eq!(calendar_month_name(0), None);
        assert_eq!(calendar_month_name(13), None);
    }

    #[test]
    fn test_weekday_from_chrono() {
        assert_eq!(Weekday::from(chrono::Weekday::Mon), Weekday::Monday);
        assert_eq!(Weekday::from(chrono::Weekday::Sun), Weekday::Sunday);
    }

    #[test]
    fn test_month_filter_parse() {
        assert_eq!("all".parse::<MonthFilter>(), Ok(MonthFilter::All));
        assert_eq!("ALL".parse::<MonthFilter>(), Ok(MonthFilter::All));
        assert_eq!(
            "june".parse::<MonthFilter>(),
            Ok(MonthFilter::Only(Month::June))
        );
        assert!("everything".parse::<MonthFilter>().is_err());
    }

    #[test]
    fn test_day_filter_parse() {
        assert_eq!("All".parse::<DayFilter>(), Ok(DayFilter::All));
        assert_eq!(
            "monday".parse::<DayFilter>(),
            Ok(DayFilter::Only(Weekday::Monday))
        );
        assert!("mon".parse::<DayFilter>().is_err());
    }
}
