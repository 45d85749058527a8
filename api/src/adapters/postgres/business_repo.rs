//! PostgreSQL adapter for BusinessRepository

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use crate::domain::entities::{Business, BusinessId, OpeningPeriod, OpeningSchedule, Weekday};
use crate::domain::ports::BusinessRepository;
use crate::entity::{business, opening_hours};
use crate::error::DomainError;

/// PostgreSQL implementation of BusinessRepository
pub struct PostgresBusinessRepository {
    db: DatabaseConnection,
}

impl PostgresBusinessRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BusinessRepository for PostgresBusinessRepository {
    async fn list_all(&self) -> Result<Vec<Business>, DomainError> {
        let results = business::Entity::find()
            .find_with_related(opening_hours::Entity)
            .order_by_asc(business::Column::BusinessId)
            .order_by_asc(opening_hours::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        results
            .into_iter()
            .map(|(model, hours)| to_business(model, hours))
            .collect()
    }
}

/// Assemble a business from its row and opening-hour rows
///
/// One bad row fails the whole business so a schedule is never partially
/// populated.
fn to_business(
    model: business::Model,
    hours: Vec<opening_hours::Model>,
) -> Result<Business, DomainError> {
    let opening_hours = hours
        .into_iter()
        .map(OpeningPeriod::try_from)
        .collect::<Result<OpeningSchedule, _>>()?;

    Ok(Business {
        id: BusinessId(model.business_id),
        name: model.name,
        opening_hours,
    })
}

/// Convert SeaORM model to domain entity
impl TryFrom<opening_hours::Model> for OpeningPeriod {
    type Error = DomainError;

    fn try_from(model: opening_hours::Model) -> Result<Self, Self::Error> {
        let day = Weekday::from_iso_day_of_week(i64::from(model.day)).map_err(|e| {
            DomainError::Database(format!(
                "opening_hours row {} of business {}: {}",
                model.id, model.business_id, e
            ))
        })?;

        Ok(OpeningPeriod::new(day, model.opens.into(), model.closes.into()))
    }
}
