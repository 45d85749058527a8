//! Business domain entity
//!
//! Businesses are loaded read-only from storage together with their
//! opening hours.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::OpeningSchedule;
use crate::domain::open_now::{is_open, ReferenceTime};

/// Unique identifier for a business
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BusinessId(pub i32);

impl From<i32> for BusinessId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for BusinessId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A business and its weekly opening hours
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Business {
    pub id: BusinessId,
    pub name: String,
    pub opening_hours: OpeningSchedule,
}

impl Business {
    /// Whether the business is open at the given local wall-clock time
    pub fn is_open_at(&self, local_time: NaiveDateTime) -> bool {
        is_open(&self.opening_hours, &ReferenceTime::from(local_time))
    }
}
