//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::Business;
use crate::error::DomainError;

/// Read-only repository for Business entities
#[async_trait]
pub trait BusinessRepository: Send + Sync {
    /// All businesses ordered by id, each with its complete opening schedule
    async fn list_all(&self) -> Result<Vec<Business>, DomainError>;
}
