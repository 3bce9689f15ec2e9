//! SurrealDB implementation of [`RoomRepository`].
//!
//! `nightly_rate` is stored as its decimal string so no precision is
//! lost on the way through the database.

use chrono::{DateTime, Utc};
use hotelier_core::error::HotelierResult;
use hotelier_core::models::room::{CreateRoom, Room, UpdateRoom};
use hotelier_core::repository::RoomRepository;
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use uuid::Uuid;

use super::{CountRow, parse_decimal, parse_uuid};
use crate::error::DbError;

#[derive(Debug, SurrealValue)]
struct RoomRow {
    hotel_id: String,
    room_number: String,
    room_type: String,
    nightly_rate: String,
    image_url: String,
    short_description: String,
    created_at: DateTime<Utc>,
}

impl RoomRow {
    fn into_room(self, id: Uuid) -> Result<Room, DbError> {
        Ok(Room {
            id,
            hotel_id: parse_uuid(&self.hotel_id, "hotel")?,
            room_number: self.room_number,
            room_type: self.room_type,
            nightly_rate: parse_decimal(&self.nightly_rate, "nightly_rate")?,
            image_url: self.image_url,
            short_description: self.short_description,
            created_at: self.created_at,
        })
    }
}

#[derive(Debug, SurrealValue)]
struct RoomRowWithId {
    record_id: String,
    hotel_id: String,
    room_number: String,
    room_type: String,
    nightly_rate: String,
    image_url: String,
    short_description: String,
    created_at: DateTime<Utc>,
}

impl RoomRowWithId {
    fn try_into_room(self) -> Result<Room, DbError> {
        Ok(Room {
            id: parse_uuid(&self.record_id, "room")?,
            hotel_id: parse_uuid(&self.hotel_id, "hotel")?,
            room_number: self.room_number,
            room_type: self.room_type,
            nightly_rate: parse_decimal(&self.nightly_rate, "nightly_rate")?,
            image_url: self.image_url,
            short_description: self.short_description,
            created_at: self.created_at,
        })
    }
}

/// SurrealDB implementation of the Room repository.
#[derive(Clone)]
pub struct SurrealRoomRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealRoomRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }

    async fn select_many(
        &self,
        query: &str,
        hotel_id: Option<Uuid>,
    ) -> Result<Vec<Room>, DbError> {
        let mut builder = self.db.query(query);
        if let Some(hotel_id) = hotel_id {
            builder = builder.bind(("hotel_id", hotel_id.to_string()));
        }

        let mut result = builder.await?;
        let rows: Vec<RoomRowWithId> = result.take(0)?;

        rows.into_iter()
            .map(|row| row.try_into_room())
            .collect::<Result<Vec<_>, DbError>>()
    }
}

impl<C: Connection> RoomRepository for SurrealRoomRepository<C> {
    async fn create(&self, input: CreateRoom) -> HotelierResult<Room> {
        let id = Uuid::new_v4();
        let id_str = id.to_string();

        let result = self
            .db
            .query(
                "CREATE type::record('room', $id) SET \
                 hotel_id = $hotel_id, \
                 room_number = $room_number, room_type = $room_type, \
                 nightly_rate = $nightly_rate, \
                 image_url = $image_url, \
                 short_description = $short_description",
            )
            .bind(("id", id_str.clone()))
            .bind(("hotel_id", input.hotel_id.to_string()))
            .bind(("room_number", input.room_number))
            .bind(("room_type", input.room_type))
            .bind(("nightly_rate", input.nightly_rate.to_string()))
            .bind(("image_url", input.image_url))
            .bind(("short_description", input.short_description))
            .await
            .map_err(DbError::from)?;

        let mut result = result.check().map_err(|e| DbError::Query(e.to_string()))?;

        let rows: Vec<RoomRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "Room".into(),
            id: id_str,
        })?;

        Ok(row.into_room(id)?)
    }

    async fn get_by_id(&self, id: Uuid) -> HotelierResult<Room> {
        let id_str = id.to_string();

        let mut result = self
            .db
            .query("SELECT * FROM type::record('room', $id)")
            .bind(("id", id_str.clone()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<RoomRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "Room".into(),
            id: id_str,
        })?;

        Ok(row.into_room(id)?)
    }

    async fn get_by_id_and_hotel(&self, id: Uuid, hotel_id: Uuid) -> HotelierResult<Room> {
        let id_str = id.to_string();

        let mut result = self
            .db
            .query(
                "SELECT * FROM type::record('room', $id) \
                 WHERE hotel_id = $hotel_id",
            )
            .bind(("id", id_str.clone()))
            .bind(("hotel_id", hotel_id.to_string()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<RoomRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "Room".into(),
            id: id_str,
        })?;

        Ok(row.into_room(id)?)
    }

    async fn update(&self, id: Uuid, input: UpdateRoom) -> HotelierResult<Room> {
        let id_str = id.to_string();

        let result = self
            .db
            .query(
                "UPDATE type::record('room', $id) SET \
                 room_number = $room_number, room_type = $room_type, \
                 nightly_rate = $nightly_rate, \
                 short_description = $short_description",
            )
            .bind(("id", id_str.clone()))
            .bind(("room_number", input.room_number))
            .bind(("room_type", input.room_type))
            .bind(("nightly_rate", input.nightly_rate.to_string()))
            .bind(("short_description", input.short_description))
            .await
            .map_err(DbError::from)?;

        let mut result = result.check().map_err(|e| DbError::Query(e.to_string()))?;

        let rows: Vec<RoomRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "Room".into(),
            id: id_str,
        })?;

        Ok(row.into_room(id)?)
    }

    async fn delete(&self, id: Uuid) -> HotelierResult<()> {
        self.db
            .query("DELETE type::record('room', $id)")
            .bind(("id", id.to_string()))
            .await
            .map_err(DbError::from)?
            .check()
            .map_err(|e| DbError::Query(e.to_string()))?;

        Ok(())
    }

    async fn list(&self) -> HotelierResult<Vec<Room>> {
        Ok(self
            .select_many(
                "SELECT meta::id(id) AS record_id, * FROM room \
                 ORDER BY created_at ASC",
                None,
            )
            .await?)
    }

    async fn list_by_hotel(&self, hotel_id: Uuid) -> HotelierResult<Vec<Room>> {
        Ok(self
            .select_many(
                "SELECT meta::id(id) AS record_id, * FROM room \
                 WHERE hotel_id = $hotel_id \
                 ORDER BY created_at ASC",
                Some(hotel_id),
            )
            .await?)
    }

    async fn count_by_hotel(&self, hotel_id: Uuid) -> HotelierResult<u64> {
        let mut result = self
            .db
            .query(
                "SELECT count() AS total FROM room \
                 WHERE hotel_id = $hotel_id GROUP ALL",
            )
            .bind(("hotel_id", hotel_id.to_string()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<CountRow> = result.take(0).map_err(DbError::from)?;
        Ok(rows.first().map(|r| r.total).unwrap_or(0))
    }
}
