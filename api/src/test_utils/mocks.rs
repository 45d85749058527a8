//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::domain::entities::Business;
use crate::domain::ports::BusinessRepository;
use crate::error::DomainError;

// ============================================================================
// In-Memory Business Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryBusinessRepository {
    businesses: Arc<RwLock<Vec<Business>>>,
}

impl InMemoryBusinessRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a business for testing
    pub fn with_business(self, business: Business) -> Self {
        self.businesses.write().unwrap().push(business);
        self
    }
}

#[async_trait]
impl BusinessRepository for InMemoryBusinessRepository {
    async fn list_all(&self) -> Result<Vec<Business>, DomainError> {
        let mut businesses = self.businesses.read().unwrap().clone();
        businesses.sort_by_key(|b| b.id);
        Ok(businesses)
    }
}

// ============================================================================
// Failing Business Repository
// ============================================================================

/// Repository whose every call fails with a database error
pub struct FailingBusinessRepository;

#[async_trait]
impl BusinessRepository for FailingBusinessRepository {
    async fn list_all(&self) -> Result<Vec<Business>, DomainError> {
        Err(DomainError::Database("connection refused".to_string()))
    }
}
