//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod business;
pub mod clock;
pub mod filter;
pub mod opening_hours;
pub mod weekday;

pub use business::{Business, BusinessId};
pub use clock::Clock;
pub use filter::BusinessFilter;
pub use opening_hours::{OpeningPeriod, OpeningSchedule, PeriodKind};
pub use weekday::Weekday;
