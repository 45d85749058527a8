//! Business listing filter

use chrono::NaiveDateTime;

use super::Business;
use crate::error::DomainError;

/// Criteria for listing businesses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BusinessFilter {
    /// Only keep businesses open at `local_time`
    pub open: bool,
    /// Reference instant, already in the business's local time
    pub local_time: Option<NaiveDateTime>,
}

impl BusinessFilter {
    pub fn new(open: bool, local_time: Option<NaiveDateTime>) -> Self {
        Self { open, local_time }
    }

    /// "Open now" needs a reference instant
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.open && self.local_time.is_none() {
            return Err(DomainError::Validation(
                "require \"local_time\" when \"open\" is true".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether the business passes this filter
    ///
    /// An unvalidated `open` filter without a reference time matches nothing.
    pub fn matches(&self, business: &Business) -> bool {
        if !self.open {
            return true;
        }
        self.local_time
            .map(|t| business.is_open_at(t))
            .unwrap_or(false)
    }
}
