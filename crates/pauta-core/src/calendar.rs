//! Calendar and week-identifier math.
//!
//! Weeks are keyed by a `YYYY-Www` identifier using a simplified numbering
//! scheme inherited from the product: the week number is
//! `ceil((days_since_jan1 + jan1_weekday + 1) / 7)` with Sunday-zero
//! weekdays. This is deliberately NOT ISO-8601 week numbering (January 1
//! always falls in week 1 of its own year) and is preserved as-is so that
//! week keys remain stable across versions of the stored data.
//!
//! Week start dates computed by [`WeekId::week_start`] always land on a
//! Monday.

use std::fmt;
use std::str::FromStr;

use jiff::civil::{date, Date};
use jiff::ToSpan;
use serde::{Deserialize, Serialize};

use crate::error::{PautaError, Result};

/// Largest week number the simplified scheme can produce
/// (366 days + Saturday offset, divided by 7, rounded up).
const MAX_WEEK: i8 = 54;

/// Typed week identifier with string form `YYYY-Www` (e.g. `2024-W10`).
///
/// Serialized as its string form so it can key JSON maps directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WeekId {
    year: i16,
    week: i8,
}

impl WeekId {
    /// Creates a week identifier, validating the week number range.
    pub fn new(year: i16, week: i8) -> Result<Self> {
        if !(1..=MAX_WEEK).contains(&week) {
            return Err(PautaError::invalid_input("week")
                .with_reason(format!("week number must be 1-{MAX_WEEK}, got {week}")));
        }
        Ok(Self { year, week })
    }

    /// Returns the week identifier containing the given calendar date.
    pub fn for_date(day: Date) -> Self {
        let jan1 = date(day.year(), 1, 1);
        let days_since_jan1 = i32::from(day.day_of_year()) - 1;
        let jan1_weekday = i32::from(jan1.weekday().to_sunday_zero_offset());
        // Ceiling division; the numerator is always positive.
        let week = (days_since_jan1 + jan1_weekday + 1 + 6) / 7;
        Self {
            year: day.year(),
            week: week as i8,
        }
    }

    /// Returns the week identifier for today in the system timezone.
    pub fn current() -> Self {
        let today = jiff::Zoned::now().date();
        Self::for_date(today)
    }

    /// Reconstructs the week's start date (always a Monday): January 1 of
    /// the year plus `(week - 1) * 7` days, shifted by January 1's weekday.
    pub fn week_start(&self) -> Date {
        let jan1 = date(self.year, 1, 1);
        let jan1_weekday = i64::from(jan1.weekday().to_sunday_zero_offset());
        let offset = (i64::from(self.week) - 1) * 7 + 1 - jan1_weekday;
        jan1.saturating_add(offset.days())
    }

    /// The calendar year component.
    pub fn year(&self) -> i16 {
        self.year
    }

    /// The week number component (1-based).
    pub fn week(&self) -> i8 {
        self.week
    }
}

impl fmt::Display for WeekId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-W{:02}", self.year, self.week)
    }
}

impl FromStr for WeekId {
    type Err = PautaError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || {
            PautaError::invalid_input("week")
                .with_reason(format!("expected week identifier like 2024-W10, got '{s}'"))
        };

        let (year_part, week_part) = s.split_once("-W").ok_or_else(invalid)?;
        if year_part.len() != 4 || week_part.is_empty() || week_part.len() > 2 {
            return Err(invalid());
        }
        let year: i16 = year_part.parse().map_err(|_| invalid())?;
        let week: i8 = week_part.parse().map_err(|_| invalid())?;
        Self::new(year, week)
    }
}

impl TryFrom<String> for WeekId {
    type Error = PautaError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<WeekId> for String {
    fn from(value: WeekId) -> Self {
        value.to_string()
    }
}

/// Adds a (possibly negative) number of days to a date.
pub fn add_days(day: Date, days: i64) -> Date {
    day.saturating_add(days.days())
}

/// The seven dates centered on the given date (3 before through 3 after).
pub fn dates_surrounding(center: Date) -> [Date; 7] {
    std::array::from_fn(|i| add_days(center, i as i64 - 3))
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::Weekday;

    #[test]
    fn week_id_display_and_parse_round_trip() {
        let id = WeekId::new(2024, 10).expect("valid week");
        assert_eq!(id.to_string(), "2024-W10");
        assert_eq!("2024-W10".parse::<WeekId>().expect("parse"), id);
        assert_eq!("2024-W03".parse::<WeekId>().expect("parse").week(), 3);
    }

    #[test]
    fn week_id_rejects_malformed_strings() {
        for bad in ["", "2024", "2024-10", "2024-W", "2024-W00", "2024-W99", "24-W10", "abcd-Wxy"]
        {
            assert!(bad.parse::<WeekId>().is_err(), "accepted '{bad}'");
        }
    }

    #[test]
    fn for_date_uses_simplified_numbering() {
        // 2024-01-01 is a Monday: days 0, jan1 offset 1 -> ceil(2/7) = 1.
        assert_eq!(WeekId::for_date(date(2024, 1, 1)).to_string(), "2024-W01");
        // 2024-03-04: day_of_year 64, so ceil((63 + 1 + 1) / 7) = 10.
        assert_eq!(WeekId::for_date(date(2024, 3, 4)).to_string(), "2024-W10");
        // January 1 is always week 1 of its own year, unlike ISO-8601.
        assert_eq!(WeekId::for_date(date(2023, 1, 1)).to_string(), "2023-W01");
        // Leap-year December 31: ceil((365 + 1 + 1) / 7) = 53.
        assert_eq!(WeekId::for_date(date(2024, 12, 31)).to_string(), "2024-W53");
    }

    #[test]
    fn week_start_is_the_monday_of_the_week() {
        let start = "2024-W10".parse::<WeekId>().expect("parse").week_start();
        assert_eq!(start, date(2024, 3, 4));
        assert_eq!(start.weekday(), Weekday::Monday);
    }

    #[test]
    fn week_start_lands_on_monday_across_years() {
        for year in [2021, 2022, 2023, 2024, 2025, 2026] {
            for week in [1, 2, 17, 30, 52] {
                let start = WeekId::new(year, week).expect("valid").week_start();
                assert_eq!(start.weekday(), Weekday::Monday, "{year}-W{week:02}");
            }
        }
    }

    #[test]
    fn mid_year_mondays_round_trip_through_week_start() {
        for day in [date(2024, 3, 4), date(2024, 6, 10), date(2025, 8, 18)] {
            let id = WeekId::for_date(day);
            assert_eq!(id.week_start(), day);
        }
    }

    #[test]
    fn dates_surrounding_spans_three_days_each_side() {
        let days = dates_surrounding(date(2024, 3, 7));
        assert_eq!(days[0], date(2024, 3, 4));
        assert_eq!(days[3], date(2024, 3, 7));
        assert_eq!(days[6], date(2024, 3, 10));
    }
}
