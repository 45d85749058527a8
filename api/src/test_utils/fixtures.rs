//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::NaiveDateTime;

use crate::domain::entities::{Business, BusinessId, OpeningPeriod, Weekday};

/// Parse a `YYYY-MM-DDThh:mm` local time
pub fn local_time(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M").unwrap()
}

/// Build a period from a day name and two clock strings
pub fn test_period(day: &str, opens: &str, closes: &str) -> OpeningPeriod {
    OpeningPeriod::new(
        day.parse::<Weekday>().unwrap(),
        opens.parse().unwrap(),
        closes.parse().unwrap(),
    )
}

/// Create a business with the given `(day, opens, closes)` periods
pub fn test_business(id: i32, name: &str, periods: &[(&str, &str, &str)]) -> Business {
    Business {
        id: BusinessId(id),
        name: name.to_string(),
        opening_hours: periods
            .iter()
            .map(|(day, opens, closes)| test_period(day, opens, closes))
            .collect(),
    }
}
