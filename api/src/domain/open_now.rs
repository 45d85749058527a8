//! "Open now" evaluation
//!
//! Decides whether a weekly schedule covers a reference instant. A business
//! is open when any single period matches, where a period matches either on
//! its own day or, for windows that run past midnight, on the morning of the
//! following day. Both window endpoints are inclusive.

use chrono::{Datelike, NaiveDateTime};

use super::entities::{Clock, OpeningPeriod, OpeningSchedule, PeriodKind, Weekday};

/// A weekday plus time of day in the business's local time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceTime {
    pub weekday: Weekday,
    pub time: Clock,
}

impl ReferenceTime {
    #[allow(dead_code)]
    pub fn new(weekday: Weekday, time: Clock) -> Self {
        Self { weekday, time }
    }
}

impl From<NaiveDateTime> for ReferenceTime {
    fn from(dt: NaiveDateTime) -> Self {
        Self {
            weekday: dt.weekday().into(),
            time: dt.time().into(),
        }
    }
}

/// Whether any period of `schedule` covers `at`. An empty schedule is never open.
pub fn is_open(schedule: &OpeningSchedule, at: &ReferenceTime) -> bool {
    schedule.periods().iter().any(|p| period_matches(p, at))
}

fn period_matches(period: &OpeningPeriod, at: &ReferenceTime) -> bool {
    // Malformed rows never match; evaluation itself does not fail
    if !period.day.is_defined() || !at.weekday.is_defined() {
        return false;
    }

    let kind = period.kind();
    let t = at.time;

    if period.day == at.weekday {
        return match kind {
            PeriodKind::ClosedAllDay => false,
            PeriodKind::OpenAllDay => true,
            PeriodKind::SameDay => period.opens <= t && t <= period.closes,
            PeriodKind::Overnight => t >= period.opens,
        };
    }

    // Tail of an overnight window spilling into the next day
    period.day.next() == at.weekday && kind == PeriodKind::Overnight && t <= period.closes
}
