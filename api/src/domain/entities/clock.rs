//! Clock domain value
//!
//! A bare time-of-day with minute precision. No date or time zone is
//! attached; callers normalize to the business's local time first.

use std::sync::OnceLock;

use chrono::{NaiveTime, Timelike};
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DomainError;

/// Accepted textual forms: `H:MM`, `HH:MM` and `HH:MM:SS`
const CLOCK_PATTERN: &str = r"^([0-9]|[01][0-9]|2[0-3]):([0-5][0-9])(?::[0-5][0-9])?$";

fn clock_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(CLOCK_PATTERN).expect("clock pattern is a valid regex"))
}

/// A validated time of day (hours 0..=23, minutes 0..=59)
///
/// Ordering is lexicographic on (hours, minutes), which the derive gives us
/// from the field order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Clock {
    hours: u8,
    minutes: u8,
}

impl Clock {
    /// 00:00
    pub const MIDNIGHT: Clock = Clock {
        hours: 0,
        minutes: 0,
    };

    /// 23:59, the last representable minute of a day
    pub const END_OF_DAY: Clock = Clock {
        hours: 23,
        minutes: 59,
    };

    /// Build a clock from raw components, rejecting out-of-range values
    pub fn new(hours: u8, minutes: u8) -> Result<Self, DomainError> {
        if hours > 23 || minutes > 59 {
            return Err(DomainError::Validation(format!(
                "{:02}:{:02} is not a valid time of day",
                hours, minutes
            )));
        }
        Ok(Self { hours, minutes })
    }

    #[allow(dead_code)]
    pub fn hours(&self) -> u8 {
        self.hours
    }

    #[allow(dead_code)]
    pub fn minutes(&self) -> u8 {
        self.minutes
    }
}

impl std::fmt::Display for Clock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}

impl std::str::FromStr for Clock {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            DomainError::Validation(format!(
                "{:?} does not match clock pattern \"HH:MM[:SS]\"",
                s
            ))
        };

        let caps = clock_regex().captures(s).ok_or_else(invalid)?;
        let hours = caps[1].parse::<u8>().map_err(|_| invalid())?;
        let minutes = caps[2].parse::<u8>().map_err(|_| invalid())?;

        Clock::new(hours, minutes)
    }
}

impl From<Clock> for NaiveTime {
    fn from(clock: Clock) -> Self {
        // Components are range-checked at construction
        NaiveTime::from_hms_opt(u32::from(clock.hours), u32::from(clock.minutes), 0)
            .unwrap_or(NaiveTime::MIN)
    }
}

impl From<NaiveTime> for Clock {
    /// Seconds and sub-seconds are dropped
    fn from(time: NaiveTime) -> Self {
        Self {
            hours: time.hour() as u8,
            minutes: time.minute() as u8,
        }
    }
}

impl Serialize for Clock {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Clock {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clock(s: &str) -> Clock {
        s.parse().unwrap()
    }

    #[test]
    fn parse_accepts_all_layouts() {
        assert_eq!(clock("9:05"), Clock::new(9, 5).unwrap());
        assert_eq!(clock("09:05"), Clock::new(9, 5).unwrap());
        assert_eq!(clock("23:59:59"), Clock::new(23, 59).unwrap());
        assert_eq!(clock("00:00"), Clock::MIDNIGHT);
    }

    #[test]
    fn parse_discards_seconds() {
        assert_eq!(clock("12:30:45"), clock("12:30"));
        assert_eq!(clock("12:30:45").to_string(), "12:30");
    }

    #[test]
    fn parse_rejects_out_of_range() {
        assert!(matches!(
            "24:00".parse::<Clock>(),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            "9:60".parse::<Clock>(),
            Err(DomainError::Validation(_))
        ));
        assert!("12:00:60".parse::<Clock>().is_err());
    }

    #[test]
    fn parse_rejects_malformed() {
        for input in ["", "9", "930", "09:5", "009:00", " 09:00", "09:00 ", "ab:cd", "-1:00"] {
            assert!(input.parse::<Clock>().is_err(), "accepted {:?}", input);
        }
    }

    #[test]
    fn parse_error_names_input() {
        let err = "25:00".parse::<Clock>().unwrap_err();
        assert!(err.to_string().contains("\"25:00\""));
    }

    #[test]
    fn display_round_trips_every_minute() {
        for h in 0..24u8 {
            for m in 0..60u8 {
                let text = format!("{:02}:{:02}", h, m);
                assert_eq!(clock(&text).to_string(), text);
            }
        }
    }

    #[test]
    fn ordering_is_hours_then_minutes() {
        assert!(clock("08:59") < clock("09:00"));
        assert!(clock("09:00") < clock("09:01"));
        assert!(clock("10:00") > clock("09:59"));
    }

    #[test]
    fn new_rejects_out_of_range() {
        assert!(Clock::new(24, 0).is_err());
        assert!(Clock::new(0, 60).is_err());
        assert!(Clock::new(23, 59).is_ok());
    }

    #[test]
    fn naive_time_conversion_drops_seconds() {
        let time = NaiveTime::from_hms_opt(22, 15, 42).unwrap();
        let c = Clock::from(time);
        assert_eq!(c, clock("22:15"));
        assert_eq!(NaiveTime::from(c), NaiveTime::from_hms_opt(22, 15, 0).unwrap());
    }

    #[test]
    fn serde_uses_hh_mm_text() {
        assert_eq!(serde_json::to_string(&clock("7:05")).unwrap(), "\"07:05\"");
        let parsed: Clock = serde_json::from_str("\"18:30:00\"").unwrap();
        assert_eq!(parsed, clock("18:30"));
        assert!(serde_json::from_str::<Clock>("\"18:75\"").is_err());
    }
}
