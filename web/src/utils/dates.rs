use chrono::NaiveDate;

/// Today's date as `YYYY-MM-DD`, UTC-truncated. Used for the booking date
/// input's lower bound and the past-date guard.
pub fn today_iso() -> String {
    chrono::Utc::now().format("%Y-%m-%d").to_string()
}

/// `2025-06-10` becomes `Tuesday, June 10, 2025`. Unparseable input is
/// returned unchanged rather than hidden.
pub fn format_long_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%A, %B %-d, %Y").to_string(),
        Err(_) => date.to_string(),
    }
}

/// Compact `DD/MM/YYYY` rendering for table rows. Unparseable input is
/// returned unchanged.
pub fn format_short_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%d/%m/%Y").to_string(),
        Err(_) => date.to_string(),
    }
}

/// Trims `HH:MM:SS` down to `HH:MM` for display; anything shorter passes
/// through untouched.
pub fn display_time(time: &str) -> &str {
    time.get(..5).unwrap_or(time)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_date_formatting() {
        assert_eq!(format_long_date("2025-06-10"), "Tuesday, June 10, 2025");
        assert_eq!(format_long_date("2025-01-05"), "Sunday, January 5, 2025");
    }

    #[test]
    fn long_date_leaves_garbage_alone() {
        assert_eq!(format_long_date("not-a-date"), "not-a-date");
        assert_eq!(format_long_date(""), "");
    }

    #[test]
    fn short_date_formatting() {
        assert_eq!(format_short_date("2025-06-10"), "10/06/2025");
        assert_eq!(format_short_date("bogus"), "bogus");
    }

    #[test]
    fn display_time_truncates_seconds() {
        assert_eq!(display_time("09:00:00"), "09:00");
        assert_eq!(display_time("14:30"), "14:30");
        assert_eq!(display_time("9:00"), "9:00");
    }

    #[test]
    fn today_is_iso_shaped() {
        let today = today_iso();
        assert_eq!(today.len(), 10);
        assert_eq!(&today[4..5], "-");
        assert_eq!(&today[7..8], "-");
    }
}
