//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod business_repo;


pub use business_repo::PostgresBusinessRepository;
