// Query window domain model
use super::error::ClimateError;
use chrono::{Days, NaiveDate};
use serde::Serialize;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Longest window accepted in one request
pub const MAX_DAYS: i64 = 366;

/// A start date plus a whole number of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QueryWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub days: u32,
}

impl QueryWindow {
    pub fn from_days(start: NaiveDate, days: i64) -> Result<Self, ClimateError> {
        if days < 1 {
            return Err(ClimateError::InvalidRange(format!(
                "day count must be at least 1, got {}",
                days
            )));
        }
        if days > MAX_DAYS {
            return Err(ClimateError::InvalidRange(format!(
                "day count must be at most {}, got {}",
                MAX_DAYS, days
            )));
        }
        let days = days as u32;
        let end = start
            .checked_add_days(Days::new(days as u64))
            .ok_or_else(|| ClimateError::InvalidRange(format!("{} + {} days overflows", start, days)))?;

        Ok(Self { start, end, days })
    }

    /// Build a window from the text fields the front-end submits.
    pub fn parse(start: &str, days: &str) -> Result<Self, ClimateError> {
        let start = parse_date(start)?;
        let days: i64 = days
            .trim()
            .parse()
            .map_err(|_| ClimateError::InvalidInput(format!("'{}' is not a day count", days)))?;
        Self::from_days(start, days)
    }

    pub fn start_str(&self) -> String {
        self.start.format(DATE_FORMAT).to_string()
    }

    pub fn end_str(&self) -> String {
        self.end.format(DATE_FORMAT).to_string()
    }
}

pub fn parse_date(text: &str) -> Result<NaiveDate, ClimateError> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT)
        .map_err(|_| ClimateError::InvalidInput(format!("'{}' is not a YYYY-MM-DD date", text)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_date_is_start_plus_days() {
        let window = QueryWindow::parse("2021-12-24", "5").unwrap();
        assert_eq!(window.start_str(), "2021-12-24");
        assert_eq!(window.end_str(), "2021-12-29");
        assert_eq!(window.days, 5);
    }

    #[test]
    fn test_window_crosses_year_boundary() {
        let window = QueryWindow::parse("2021-12-30", "3").unwrap();
        assert_eq!(window.end_str(), "2022-01-02");
    }

    #[test]
    fn test_zero_and_negative_days_are_rejected() {
        assert!(matches!(
            QueryWindow::parse("2021-12-24", "0"),
            Err(ClimateError::InvalidRange(_))
        ));
        assert!(matches!(
            QueryWindow::parse("2021-12-24", "-2"),
            Err(ClimateError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_day_count_is_capped() {
        assert!(QueryWindow::parse("2021-01-01", "366").is_ok());
        assert!(matches!(
            QueryWindow::parse("2021-01-01", "367"),
            Err(ClimateError::InvalidRange(_))
        ));
        assert!(matches!(
            QueryWindow::parse("2021-01-01", "100000000000"),
            Err(ClimateError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_malformed_inputs() {
        assert!(matches!(
            QueryWindow::parse("24-12-2021", "5"),
            Err(ClimateError::InvalidInput(_))
        ));
        assert!(matches!(
            QueryWindow::parse("2021-12-24", "fem"),
            Err(ClimateError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_end_is_after_start() {
        let window = QueryWindow::parse(" 2020-02-28 ", " 1 ").unwrap();
        assert!(window.end > window.start);
        assert_eq!(window.end_str(), "2020-02-29");
    }
}
