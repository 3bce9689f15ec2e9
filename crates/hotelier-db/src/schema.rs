//! Schema definitions and migration runner for SurrealDB.
//!
//! Relational tables use SCHEMAFULL mode. UUIDs, calendar dates and
//! money amounts are stored as strings; enums are stored as strings
//! with ASSERT constraints.

use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use tracing::info;

use crate::error::DbError;

// -----------------------------------------------------------------------
// Migration tracking
// -----------------------------------------------------------------------

const MIGRATION_TABLE_DDL: &str = "\
DEFINE TABLE IF NOT EXISTS _migration SCHEMAFULL;
DEFINE FIELD IF NOT EXISTS version ON TABLE _migration TYPE int;
DEFINE FIELD IF NOT EXISTS name ON TABLE _migration TYPE string;
DEFINE FIELD IF NOT EXISTS applied_at ON TABLE _migration TYPE datetime \
    DEFAULT time::now();
DEFINE INDEX IF NOT EXISTS idx_migration_version ON TABLE _migration \
    COLUMNS version UNIQUE;
";

#[derive(Debug, SurrealValue)]
struct MigrationRecord {
    version: u32,
}

struct Migration {
    version: u32,
    name: &'static str,
    sql: &'static str,
}

static MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    name: "initial_schema",
    sql: SCHEMA_V1,
}];

// -----------------------------------------------------------------------
// Schema v1
// -----------------------------------------------------------------------

const SCHEMA_V1: &str = "\
-- =======================================================================
-- Hotels (global)
-- =======================================================================
DEFINE TABLE hotel SCHEMAFULL;
DEFINE FIELD code ON TABLE hotel TYPE string;
DEFINE FIELD name ON TABLE hotel TYPE string;
DEFINE FIELD city ON TABLE hotel TYPE string;
DEFINE FIELD country ON TABLE hotel TYPE string;
DEFINE FIELD address_line ON TABLE hotel TYPE string;
DEFINE FIELD image_url ON TABLE hotel TYPE option<string>;
DEFINE FIELD created_at ON TABLE hotel TYPE datetime \
    DEFAULT time::now();
DEFINE INDEX idx_hotel_code ON TABLE hotel COLUMNS code UNIQUE;
DEFINE INDEX idx_hotel_name ON TABLE hotel COLUMNS name;

-- =======================================================================
-- Staff scope mapping (record id = normalized username)
-- =======================================================================
DEFINE TABLE hotel_user_scope SCHEMAFULL;
DEFINE FIELD username ON TABLE hotel_user_scope TYPE string;
DEFINE FIELD hotel_id ON TABLE hotel_user_scope TYPE string;
DEFINE FIELD access_level ON TABLE hotel_user_scope TYPE string \
    ASSERT $value IN ['Manager', 'Staff'];
DEFINE FIELD created_at ON TABLE hotel_user_scope TYPE datetime \
    DEFAULT time::now();
DEFINE INDEX idx_user_scope_username ON TABLE hotel_user_scope \
    COLUMNS username UNIQUE;
DEFINE INDEX idx_user_scope_hotel ON TABLE hotel_user_scope \
    COLUMNS hotel_id;

-- =======================================================================
-- Rooms (hotel scope)
-- =======================================================================
DEFINE TABLE room SCHEMAFULL;
DEFINE FIELD hotel_id ON TABLE room TYPE string;
DEFINE FIELD room_number ON TABLE room TYPE string;
DEFINE FIELD room_type ON TABLE room TYPE string;
DEFINE FIELD nightly_rate ON TABLE room TYPE string;
DEFINE FIELD image_url ON TABLE room TYPE string;
DEFINE FIELD short_description ON TABLE room TYPE string;
DEFINE FIELD created_at ON TABLE room TYPE datetime \
    DEFAULT time::now();
DEFINE INDEX idx_room_hotel ON TABLE room COLUMNS hotel_id;

-- =======================================================================
-- Guests (hotel scope)
-- (hotel_id, email) is intentionally not UNIQUE: the public flow does
-- find-then-create without a compare-and-swap.
-- =======================================================================
DEFINE TABLE guest SCHEMAFULL;
DEFINE FIELD hotel_id ON TABLE guest TYPE string;
DEFINE FIELD full_name ON TABLE guest TYPE string;
DEFINE FIELD email ON TABLE guest TYPE string;
DEFINE FIELD created_at ON TABLE guest TYPE datetime \
    DEFAULT time::now();
DEFINE INDEX idx_guest_hotel_email ON TABLE guest \
    COLUMNS hotel_id, email;
DEFINE INDEX idx_guest_email ON TABLE guest COLUMNS email;

-- =======================================================================
-- Bookings (hotel scope)
-- =======================================================================
DEFINE TABLE booking SCHEMAFULL;
DEFINE FIELD hotel_id ON TABLE booking TYPE string;
DEFINE FIELD guest_id ON TABLE booking TYPE string;
DEFINE FIELD room_id ON TABLE booking TYPE string;
DEFINE FIELD check_in_date ON TABLE booking TYPE string;
DEFINE FIELD check_out_date ON TABLE booking TYPE string;
DEFINE FIELD status ON TABLE booking TYPE string \
    ASSERT $value IN ['CREATED', 'CONFIRMED', 'CHECKED_IN', \
    'CHECKED_OUT', 'CANCELLED'];
DEFINE FIELD total_amount ON TABLE booking TYPE string;
DEFINE FIELD prepayment_amount ON TABLE booking TYPE string;
DEFINE FIELD payment_status ON TABLE booking TYPE string \
    ASSERT $value IN ['UNPAID', 'PAID', 'REFUNDED'];
DEFINE FIELD payment_method ON TABLE booking TYPE option<string>;
DEFINE FIELD payment_reference ON TABLE booking TYPE option<string>;
DEFINE FIELD prepaid ON TABLE booking TYPE bool DEFAULT false;
DEFINE FIELD created_at ON TABLE booking TYPE datetime \
    DEFAULT time::now();
DEFINE FIELD updated_at ON TABLE booking TYPE datetime \
    DEFAULT time::now();
DEFINE INDEX idx_booking_hotel ON TABLE booking COLUMNS hotel_id;
DEFINE INDEX idx_booking_guest ON TABLE booking COLUMNS guest_id;
DEFINE INDEX idx_booking_room ON TABLE booking COLUMNS room_id;
DEFINE INDEX idx_booking_status ON TABLE booking COLUMNS status;

-- =======================================================================
-- Booking recommendations (document store, append-only)
-- =======================================================================
DEFINE TABLE booking_recommendation SCHEMALESS;
DEFINE INDEX idx_recommendation_booking ON TABLE booking_recommendation \
    COLUMNS booking_id;
";

// -----------------------------------------------------------------------
// Migration runner
// -----------------------------------------------------------------------

/// Run all pending migrations.
///
/// Creates a `_migration` tracking table on first run, then applies
/// each migration whose version exceeds the current maximum.
pub async fn run_migrations<C: Connection>(db: &Surreal<C>) -> Result<(), DbError> {
    db.query(MIGRATION_TABLE_DDL)
        .await?
        .check()
        .map_err(|e| DbError::Migration(e.to_string()))?;

    let mut result = db
        .query("SELECT version FROM _migration ORDER BY version DESC LIMIT 1")
        .await?;
    let records: Vec<MigrationRecord> = result.take(0)?;
    let current_version = records.first().map(|m| m.version).unwrap_or(0);

    for migration in MIGRATIONS {
        if migration.version <= current_version {
            continue;
        }

        info!(
            version = migration.version,
            name = migration.name,
            "Applying migration"
        );
        db.query(migration.sql).await?.check().map_err(|e| {
            DbError::Migration(format!(
                "Migration v{} '{}' failed: {}",
                migration.version, migration.name, e,
            ))
        })?;

        db.query("CREATE _migration SET version = $version, name = $name")
            .bind(("version", migration.version))
            .bind(("name", migration.name))
            .await?
            .check()
            .map_err(|e| {
                DbError::Migration(format!(
                    "Failed to record migration v{}: {}",
                    migration.version, e,
                ))
            })?;

        info!(version = migration.version, "Migration applied");
    }

    Ok(())
}

/// Raw schema DDL for version 1.
pub fn schema_v1() -> &'static str {
    SCHEMA_V1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_v1_defines_every_table() {
        for table in [
            "hotel",
            "hotel_user_scope",
            "room",
            "guest",
            "booking",
            "booking_recommendation",
        ] {
            assert!(
                SCHEMA_V1.contains(&format!("DEFINE TABLE {table} ")),
                "missing table {table}"
            );
        }
    }

    #[test]
    fn migrations_are_ordered() {
        for window in MIGRATIONS.windows(2) {
            assert!(
                window[0].version < window[1].version,
                "Migrations must be in ascending version order"
            );
        }
    }
}
