//! Business service
//!
//! Lists businesses, optionally keeping only those open at a reference time.

use std::sync::Arc;

use crate::domain::entities::{Business, BusinessFilter};
use crate::domain::ports::BusinessRepository;
use crate::error::AppError;

/// Service for querying businesses
pub struct BusinessService<BR>
where
    BR: BusinessRepository + ?Sized,
{
    businesses: Arc<BR>,
}

impl<BR> BusinessService<BR>
where
    BR: BusinessRepository + ?Sized,
{
    pub fn new(businesses: Arc<BR>) -> Self {
        Self { businesses }
    }

    /// List businesses matching the filter
    ///
    /// The filter is validated before storage is touched.
    pub async fn list_businesses(
        &self,
        filter: &BusinessFilter,
    ) -> Result<Vec<Business>, AppError> {
        filter.validate()?;

        let all = self.businesses.list_all().await?;
        let total = all.len();

        let matching: Vec<Business> = all.into_iter().filter(|b| filter.matches(b)).collect();

        tracing::debug!(
            open = filter.open,
            local_time = ?filter.local_time,
            total,
            matching = matching.len(),
            "Listed businesses"
        );

        Ok(matching)
    }
}
