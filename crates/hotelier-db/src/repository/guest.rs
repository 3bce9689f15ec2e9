//! SurrealDB implementation of [`GuestRepository`].

use chrono::{DateTime, Utc};
use hotelier_core::error::HotelierResult;
use hotelier_core::models::guest::{CreateGuest, Guest};
use hotelier_core::repository::GuestRepository;
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use uuid::Uuid;

use super::{CountRow, parse_uuid};
use crate::error::DbError;

#[derive(Debug, SurrealValue)]
struct GuestRow {
    hotel_id: String,
    full_name: String,
    email: String,
    created_at: DateTime<Utc>,
}

impl GuestRow {
    fn into_guest(self, id: Uuid) -> Result<Guest, DbError> {
        Ok(Guest {
            id,
            hotel_id: parse_uuid(&self.hotel_id, "hotel")?,
            full_name: self.full_name,
            email: self.email,
            created_at: self.created_at,
        })
    }
}

#[derive(Debug, SurrealValue)]
struct GuestRowWithId {
    record_id: String,
    hotel_id: String,
    full_name: String,
    email: String,
    created_at: DateTime<Utc>,
}

impl GuestRowWithId {
    fn try_into_guest(self) -> Result<Guest, DbError> {
        Ok(Guest {
            id: parse_uuid(&self.record_id, "guest")?,
            hotel_id: parse_uuid(&self.hotel_id, "hotel")?,
            full_name: self.full_name,
            email: self.email,
            created_at: self.created_at,
        })
    }
}

/// SurrealDB implementation of the Guest repository.
#[derive(Clone)]
pub struct SurrealGuestRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealGuestRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }

    async fn select_many(
        &self,
        query: &str,
        binds: Vec<(&'static str, String)>,
    ) -> Result<Vec<Guest>, DbError> {
        let mut builder = self.db.query(query);
        for bind in binds {
            builder = builder.bind(bind);
        }

        let mut result = builder.await?;
        let rows: Vec<GuestRowWithId> = result.take(0)?;

        rows.into_iter()
            .map(|row| row.try_into_guest())
            .collect::<Result<Vec<_>, DbError>>()
    }
}

impl<C: Connection> GuestRepository for SurrealGuestRepository<C> {
    async fn create(&self, input: CreateGuest) -> HotelierResult<Guest> {
        let id = Uuid::new_v4();
        let id_str = id.to_string();

        let result = self
            .db
            .query(
                "CREATE type::record('guest', $id) SET \
                 hotel_id = $hotel_id, \
                 full_name = $full_name, email = $email",
            )
            .bind(("id", id_str.clone()))
            .bind(("hotel_id", input.hotel_id.to_string()))
            .bind(("full_name", input.full_name))
            .bind(("email", input.email))
            .await
            .map_err(DbError::from)?;

        let mut result = result.check().map_err(|e| DbError::Query(e.to_string()))?;

        let rows: Vec<GuestRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "Guest".into(),
            id: id_str,
        })?;

        Ok(row.into_guest(id)?)
    }

    async fn get_by_id(&self, id: Uuid) -> HotelierResult<Guest> {
        let id_str = id.to_string();

        let mut result = self
            .db
            .query("SELECT * FROM type::record('guest', $id)")
            .bind(("id", id_str.clone()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<GuestRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "Guest".into(),
            id: id_str,
        })?;

        Ok(row.into_guest(id)?)
    }

    async fn get_by_id_and_hotel(&self, id: Uuid, hotel_id: Uuid) -> HotelierResult<Guest> {
        let id_str = id.to_string();

        let mut result = self
            .db
            .query(
                "SELECT * FROM type::record('guest', $id) \
                 WHERE hotel_id = $hotel_id",
            )
            .bind(("id", id_str.clone()))
            .bind(("hotel_id", hotel_id.to_string()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<GuestRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "Guest".into(),
            id: id_str,
        })?;

        Ok(row.into_guest(id)?)
    }

    async fn find_by_hotel_and_email(
        &self,
        hotel_id: Uuid,
        email: &str,
    ) -> HotelierResult<Option<Guest>> {
        let guests = self
            .select_many(
                "SELECT meta::id(id) AS record_id, * FROM guest \
                 WHERE hotel_id = $hotel_id AND email = $email \
                 ORDER BY created_at ASC LIMIT 1",
                vec![
                    ("hotel_id", hotel_id.to_string()),
                    ("email", email.to_string()),
                ],
            )
            .await?;

        Ok(guests.into_iter().next())
    }

    async fn list_by_email(&self, email: &str) -> HotelierResult<Vec<Guest>> {
        Ok(self
            .select_many(
                "SELECT meta::id(id) AS record_id, * FROM guest \
                 WHERE email = $email \
                 ORDER BY created_at ASC",
                vec![("email", email.to_string())],
            )
            .await?)
    }

    async fn list(&self) -> HotelierResult<Vec<Guest>> {
        Ok(self
            .select_many(
                "SELECT meta::id(id) AS record_id, * FROM guest \
                 ORDER BY created_at ASC",
                Vec::new(),
            )
            .await?)
    }

    async fn list_by_hotel(&self, hotel_id: Uuid) -> HotelierResult<Vec<Guest>> {
        Ok(self
            .select_many(
                "SELECT meta::id(id) AS record_id, * FROM guest \
                 WHERE hotel_id = $hotel_id \
                 ORDER BY created_at ASC",
                vec![("hotel_id", hotel_id.to_string())],
            )
            .await?)
    }

    async fn count_by_hotel(&self, hotel_id: Uuid) -> HotelierResult<u64> {
        let mut result = self
            .db
            .query(
                "SELECT count() AS total FROM guest \
                 WHERE hotel_id = $hotel_id GROUP ALL",
            )
            .bind(("hotel_id", hotel_id.to_string()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<CountRow> = result.take(0).map_err(DbError::from)?;
        Ok(rows.first().map(|r| r.total).unwrap_or(0))
    }
}
