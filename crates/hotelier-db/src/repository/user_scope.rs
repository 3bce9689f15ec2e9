//! SurrealDB implementation of [`HotelUserScopeRepository`].
//!
//! The record id is the normalized username, so assigning a user a second
//! time replaces the previous mapping.

use chrono::{DateTime, Utc};
use hotelier_core::access::normalize_username;
use hotelier_core::error::HotelierResult;
use hotelier_core::models::user_scope::{AssignHotelUserScope, HotelAccessLevel, HotelUserScope};
use hotelier_core::repository::HotelUserScopeRepository;
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use uuid::Uuid;

use super::{CountRow, parse_uuid};
use crate::error::DbError;

#[derive(Debug, SurrealValue)]
struct UserScopeRow {
    username: String,
    hotel_id: String,
    access_level: String,
    created_at: DateTime<Utc>,
}

impl UserScopeRow {
    fn try_into_scope(self) -> Result<HotelUserScope, DbError> {
        Ok(HotelUserScope {
            username: self.username,
            hotel_id: parse_uuid(&self.hotel_id, "hotel")?,
            access_level: parse_access_level(&self.access_level)?,
            created_at: self.created_at,
        })
    }
}

fn parse_access_level(s: &str) -> Result<HotelAccessLevel, DbError> {
    match s {
        "Manager" => Ok(HotelAccessLevel::Manager),
        "Staff" => Ok(HotelAccessLevel::Staff),
        other => Err(DbError::InvalidRow(format!("unknown access level: {other}"))),
    }
}

fn access_level_to_string(level: HotelAccessLevel) -> &'static str {
    match level {
        HotelAccessLevel::Manager => "Manager",
        HotelAccessLevel::Staff => "Staff",
    }
}

/// SurrealDB implementation of the staff scope mapping.
#[derive(Clone)]
pub struct SurrealHotelUserScopeRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealHotelUserScopeRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }
}

impl<C: Connection> HotelUserScopeRepository for SurrealHotelUserScopeRepository<C> {
    async fn assign(&self, input: AssignHotelUserScope) -> HotelierResult<HotelUserScope> {
        let username = normalize_username(&input.username);

        let result = self
            .db
            .query(
                "UPSERT type::record('hotel_user_scope', $username) SET \
                 username = $username, hotel_id = $hotel_id, \
                 access_level = $access_level",
            )
            .bind(("username", username.clone()))
            .bind(("hotel_id", input.hotel_id.to_string()))
            .bind((
                "access_level",
                access_level_to_string(input.access_level).to_string(),
            ))
            .await
            .map_err(DbError::from)?;

        let mut result = result.check().map_err(|e| DbError::Query(e.to_string()))?;

        let rows: Vec<UserScopeRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "HotelUserScope".into(),
            id: username,
        })?;

        Ok(row.try_into_scope()?)
    }

    async fn find_by_username(&self, username: &str) -> HotelierResult<Option<HotelUserScope>> {
        let mut result = self
            .db
            .query("SELECT * FROM type::record('hotel_user_scope', $username)")
            .bind(("username", normalize_username(username)))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<UserScopeRow> = result.take(0).map_err(DbError::from)?;
        match rows.into_iter().next() {
            Some(row) => Ok(Some(row.try_into_scope()?)),
            None => Ok(None),
        }
    }

    async fn exists_by_hotel_id(&self, hotel_id: Uuid) -> HotelierResult<bool> {
        let mut result = self
            .db
            .query(
                "SELECT count() AS total FROM hotel_user_scope \
                 WHERE hotel_id = $hotel_id GROUP ALL",
            )
            .bind(("hotel_id", hotel_id.to_string()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<CountRow> = result.take(0).map_err(DbError::from)?;
        Ok(rows.first().map(|r| r.total).unwrap_or(0) > 0)
    }
}

