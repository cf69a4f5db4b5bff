//! Date and time formatting for the quote header.
//!
//! The original page showed a live clock above the quote box; here the same
//! formats are printed with every rotation. Functions take the timestamp as
//! an argument so tests stay deterministic.
use chrono::{DateTime, Local};

/// Format the date like `Monday, January 5, 2026`.
pub fn format_date(now: &DateTime<Local>) -> String {
    now.format("%A, %B %-d, %Y").to_string()
}

/// Format the time like `09:03:07`, all fields zero-padded.
pub fn format_time(now: &DateTime<Local>) -> String {
    now.format("%H:%M:%S").to_string()
}

/// One-line header combining date and time.
pub fn clock_line(now: &DateTime<Local>) -> String {
    format!("{}  {}", format_date(now), format_time(now))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn date_uses_long_weekday_and_month_names() {
        let now = Local.with_ymd_and_hms(2026, 1, 5, 9, 3, 7).unwrap();
        assert_eq!(format_date(&now), "Monday, January 5, 2026");
    }

    #[test]
    fn time_is_zero_padded() {
        let now = Local.with_ymd_and_hms(2026, 1, 5, 9, 3, 7).unwrap();
        assert_eq!(format_time(&now), "09:03:07");
    }

    #[test]
    fn clock_line_joins_date_and_time() {
        let now = Local.with_ymd_and_hms(2026, 8, 30, 23, 59, 0).unwrap();
        assert_eq!(clock_line(&now), "Sunday, August 30, 2026  23:59:00");
    }
}
