//! Timestamp formatting for the agenda views.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// Formats a `Timestamp` in the system timezone as `DD/MM/YYYY HH:MM`,
/// the day-first convention every date in the agenda output uses.
///
/// Seconds and timezone abbreviation are dropped: creation and posting
/// times are planning aids, not audit data.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl LocalDateTime<'_> {
    fn format_in(&self, tz: TimeZone) -> String {
        self.0.to_zoned(tz).strftime("%d/%m/%Y %H:%M").to_string()
    }
}

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_in(TimeZone::system()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_first_format() {
        let ts: Timestamp = "2024-03-05T14:30:00Z".parse().expect("valid timestamp");
        assert_eq!(
            LocalDateTime(&ts).format_in(TimeZone::UTC),
            "05/03/2024 14:30"
        );
    }

    #[test]
    fn test_respects_timezone() {
        let ts: Timestamp = "2024-03-05T01:30:00Z".parse().expect("valid timestamp");
        let sao_paulo = TimeZone::get("America/Sao_Paulo").expect("tzdb entry");
        // UTC-3: still the previous evening in Londrina.
        assert_eq!(
            LocalDateTime(&ts).format_in(sao_paulo),
            "04/03/2024 22:30"
        );
    }
}
