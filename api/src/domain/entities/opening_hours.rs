//! Opening hours domain entities
//!
//! A schedule is a flat list of weekly recurring periods. A business may
//! have any number of periods on the same day (split shifts), and a period
//! may run past midnight into the following day.

use serde::{Deserialize, Serialize};

use super::{Clock, Weekday};

/// How a single period should be read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodKind {
    /// `opens == closes`: explicitly closed on `day`
    ClosedAllDay,
    /// `00:00..23:59`: open for the whole of `day`
    OpenAllDay,
    /// `opens < closes`, entirely within `day`
    SameDay,
    /// `opens > closes`, ends at `closes` on the following day
    Overnight,
}

/// One weekly recurring opening window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningPeriod {
    pub day: Weekday,
    pub opens: Clock,
    pub closes: Clock,
}

impl OpeningPeriod {
    pub fn new(day: Weekday, opens: Clock, closes: Clock) -> Self {
        Self { day, opens, closes }
    }

    /// Classify the period. Sentinels are checked before range comparison.
    pub fn kind(&self) -> PeriodKind {
        if self.opens == self.closes {
            PeriodKind::ClosedAllDay
        } else if self.opens == Clock::MIDNIGHT && self.closes == Clock::END_OF_DAY {
            PeriodKind::OpenAllDay
        } else if self.opens < self.closes {
            PeriodKind::SameDay
        } else {
            PeriodKind::Overnight
        }
    }
}

/// All opening periods of one business. Order carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OpeningSchedule {
    periods: Vec<OpeningPeriod>,
}

impl OpeningSchedule {
    pub fn new(periods: Vec<OpeningPeriod>) -> Self {
        Self { periods }
    }

    pub fn periods(&self) -> &[OpeningPeriod] {
        &self.periods
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.periods.len()
    }
}

impl From<Vec<OpeningPeriod>> for OpeningSchedule {
    fn from(periods: Vec<OpeningPeriod>) -> Self {
        Self::new(periods)
    }
}

impl FromIterator<OpeningPeriod> for OpeningSchedule {
    fn from_iter<I: IntoIterator<Item = OpeningPeriod>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn period(day: Weekday, opens: &str, closes: &str) -> OpeningPeriod {
        OpeningPeriod::new(day, opens.parse().unwrap(), closes.parse().unwrap())
    }

    #[test]
    fn equal_bounds_is_closed_all_day() {
        assert_eq!(
            period(Weekday::Monday, "09:00", "09:00").kind(),
            PeriodKind::ClosedAllDay
        );
        // 00:00..00:00 is the closed sentinel too, not a 24h window
        assert_eq!(
            period(Weekday::Monday, "00:00", "00:00").kind(),
            PeriodKind::ClosedAllDay
        );
    }

    #[test]
    fn midnight_to_end_of_day_is_open_all_day() {
        assert_eq!(
            period(Weekday::Sunday, "00:00", "23:59").kind(),
            PeriodKind::OpenAllDay
        );
    }

    #[test]
    fn same_day_and_overnight() {
        assert_eq!(
            period(Weekday::Monday, "09:00", "17:00").kind(),
            PeriodKind::SameDay
        );
        let late = period(Weekday::Friday, "22:00", "02:00");
        assert_eq!(late.kind(), PeriodKind::Overnight);
    }

    #[test]
    fn schedule_serializes_as_plain_list() {
        let schedule: OpeningSchedule = vec![period(Weekday::Tuesday, "8:00", "12:30:00")].into();
        let json = serde_json::to_value(&schedule).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{"day": "Tuesday", "opens": "08:00", "closes": "12:30"}])
        );

        let back: OpeningSchedule = serde_json::from_value(json).unwrap();
        assert_eq!(back, schedule);
    }

    #[test]
    fn schedule_rejects_invalid_period() {
        let json = serde_json::json!([{"day": "Tuesday", "opens": "24:00", "closes": "12:00"}]);
        assert!(serde_json::from_value::<OpeningSchedule>(json).is_err());
    }
}
