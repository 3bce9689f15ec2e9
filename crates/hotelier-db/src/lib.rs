//! Hotelier Database: SurrealDB connection management, schema
//! migrations and repository implementations.
//!
//! Relational rows (hotels, rooms, guests, bookings, staff scopes) live
//! in SCHEMAFULL tables. Recommendations are documents in a SCHEMALESS
//! table of the same database.

mod connection;
mod error;
pub mod repository;
mod schema;

pub use connection::{DbConfig, DbManager, Repositories};
pub use error::DbError;
pub use schema::{run_migrations, schema_v1};
