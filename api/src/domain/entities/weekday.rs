//! Weekday domain value

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DomainError;

/// Day of the week with ISO 8601 numbering (Monday = 1 .. Sunday = 7)
///
/// `Undefined` is the zero value. It never appears in a persisted opening
/// period and only shows up in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Weekday {
    #[default]
    Undefined,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Map an ISO day-of-week number to a weekday
    pub fn from_iso_day_of_week(n: i64) -> Result<Self, DomainError> {
        match n {
            1 => Ok(Weekday::Monday),
            2 => Ok(Weekday::Tuesday),
            3 => Ok(Weekday::Wednesday),
            4 => Ok(Weekday::Thursday),
            5 => Ok(Weekday::Friday),
            6 => Ok(Weekday::Saturday),
            7 => Ok(Weekday::Sunday),
            _ => Err(DomainError::Validation(format!(
                "{} is not an ISO day of week (expected 1..7)",
                n
            ))),
        }
    }

    /// ISO day-of-week number, `None` for `Undefined`
    #[allow(dead_code)]
    pub fn iso_day_of_week(&self) -> Option<u8> {
        match self {
            Weekday::Undefined => None,
            Weekday::Monday => Some(1),
            Weekday::Tuesday => Some(2),
            Weekday::Wednesday => Some(3),
            Weekday::Thursday => Some(4),
            Weekday::Friday => Some(5),
            Weekday::Saturday => Some(6),
            Weekday::Sunday => Some(7),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Undefined => "Undefined",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    /// The following day, wrapping Sunday to Monday
    pub fn next(&self) -> Weekday {
        match self {
            Weekday::Undefined => Weekday::Undefined,
            Weekday::Monday => Weekday::Tuesday,
            Weekday::Tuesday => Weekday::Wednesday,
            Weekday::Wednesday => Weekday::Thursday,
            Weekday::Thursday => Weekday::Friday,
            Weekday::Friday => Weekday::Saturday,
            Weekday::Saturday => Weekday::Sunday,
            Weekday::Sunday => Weekday::Monday,
        }
    }

    pub fn is_defined(&self) -> bool {
        *self != Weekday::Undefined
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Weekday {
    type Err = DomainError;

    /// Parses a defined day name; `Undefined` is never accepted
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "monday" => Ok(Weekday::Monday),
            "tuesday" => Ok(Weekday::Tuesday),
            "wednesday" => Ok(Weekday::Wednesday),
            "thursday" => Ok(Weekday::Thursday),
            "friday" => Ok(Weekday::Friday),
            "saturday" => Ok(Weekday::Saturday),
            "sunday" => Ok(Weekday::Sunday),
            _ => Err(DomainError::Validation(format!("Unknown weekday: {}", s))),
        }
    }
}

impl Serialize for Weekday {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Weekday {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
