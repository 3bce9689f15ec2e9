//! SurrealDB implementation of [`HotelRepository`].

use chrono::{DateTime, Utc};
use hotelier_core::error::HotelierResult;
use hotelier_core::models::hotel::{CreateHotel, Hotel, UpdateHotel};
use hotelier_core::repository::HotelRepository;
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use uuid::Uuid;

use super::parse_uuid;
use crate::error::DbError;

const CODE_INDEX: &str = "idx_hotel_code";

fn write_error(message: String, code: &str) -> DbError {
    DbError::from_write(message, CODE_INDEX, "Hotel", "code", code)
}

/// DB-side row struct for queries where the UUID is already known.
#[derive(Debug, SurrealValue)]
struct HotelRow {
    code: String,
    name: String,
    city: String,
    country: String,
    address_line: String,
    image_url: Option<String>,
    created_at: DateTime<Utc>,
}

impl HotelRow {
    fn into_hotel(self, id: Uuid) -> Hotel {
        Hotel {
            id,
            code: self.code,
            name: self.name,
            city: self.city,
            country: self.country,
            address_line: self.address_line,
            image_url: self.image_url,
            created_at: self.created_at,
        }
    }
}

/// DB-side row struct that includes the record ID via `meta::id(id)`.
#[derive(Debug, SurrealValue)]
struct HotelRowWithId {
    record_id: String,
    code: String,
    name: String,
    city: String,
    country: String,
    address_line: String,
    image_url: Option<String>,
    created_at: DateTime<Utc>,
}

impl HotelRowWithId {
    fn try_into_hotel(self) -> Result<Hotel, DbError> {
        Ok(Hotel {
            id: parse_uuid(&self.record_id, "hotel")?,
            code: self.code,
            name: self.name,
            city: self.city,
            country: self.country,
            address_line: self.address_line,
            image_url: self.image_url,
            created_at: self.created_at,
        })
    }
}

/// SurrealDB implementation of the Hotel repository.
#[derive(Clone)]
pub struct SurrealHotelRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealHotelRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }
}

impl<C: Connection> HotelRepository for SurrealHotelRepository<C> {
    async fn create(&self, input: CreateHotel) -> HotelierResult<Hotel> {
        let id = Uuid::new_v4();
        let id_str = id.to_string();
        let code = input.code.clone();

        let result = self
            .db
            .query(
                "CREATE type::record('hotel', $id) SET \
                 code = $code, name = $name, \
                 city = $city, country = $country, \
                 address_line = $address_line, \
                 image_url = $image_url",
            )
            .bind(("id", id_str.clone()))
            .bind(("code", input.code))
            .bind(("name", input.name))
            .bind(("city", input.city))
            .bind(("country", input.country))
            .bind(("address_line", input.address_line))
            .bind(("image_url", input.image_url))
            .await
            .map_err(|e| write_error(e.to_string(), &code))?;

        let mut result = result
            .check()
            .map_err(|e| write_error(e.to_string(), &code))?;

        let rows: Vec<HotelRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "Hotel".into(),
            id: id_str,
        })?;

        Ok(row.into_hotel(id))
    }

    async fn get_by_id(&self, id: Uuid) -> HotelierResult<Hotel> {
        let id_str = id.to_string();

        let mut result = self
            .db
            .query("SELECT * FROM type::record('hotel', $id)")
            .bind(("id", id_str.clone()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<HotelRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "Hotel".into(),
            id: id_str,
        })?;

        Ok(row.into_hotel(id))
    }

    async fn exists(&self, id: Uuid) -> HotelierResult<bool> {
        let mut result = self
            .db
            .query("SELECT * FROM type::record('hotel', $id)")
            .bind(("id", id.to_string()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<HotelRow> = result.take(0).map_err(DbError::from)?;
        Ok(!rows.is_empty())
    }

    async fn update(&self, id: Uuid, input: UpdateHotel) -> HotelierResult<Hotel> {
        let id_str = id.to_string();
        let code = input.code.clone();

        let result = self
            .db
            .query(
                "UPDATE type::record('hotel', $id) SET \
                 code = $code, name = $name, \
                 city = $city, country = $country, \
                 address_line = $address_line, \
                 image_url = $image_url",
            )
            .bind(("id", id_str.clone()))
            .bind(("code", input.code))
            .bind(("name", input.name))
            .bind(("city", input.city))
            .bind(("country", input.country))
            .bind(("address_line", input.address_line))
            .bind(("image_url", input.image_url))
            .await
            .map_err(|e| write_error(e.to_string(), &code))?;

        let mut result = result
            .check()
            .map_err(|e| write_error(e.to_string(), &code))?;

        let rows: Vec<HotelRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "Hotel".into(),
            id: id_str,
        })?;

        Ok(row.into_hotel(id))
    }

    async fn delete(&self, id: Uuid) -> HotelierResult<()> {
        self.db
            .query("DELETE type::record('hotel', $id)")
            .bind(("id", id.to_string()))
            .await
            .map_err(DbError::from)?
            .check()
            .map_err(|e| DbError::Query(e.to_string()))?;

        Ok(())
    }

    async fn list_ordered_by_name(&self) -> HotelierResult<Vec<Hotel>> {
        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * FROM hotel \
                 ORDER BY name ASC",
            )
            .await
            .map_err(DbError::from)?;

        let rows: Vec<HotelRowWithId> = result.take(0).map_err(DbError::from)?;

        let hotels = rows
            .into_iter()
            .map(|row| row.try_into_hotel())
            .collect::<Result<Vec<_>, DbError>>()?;

        Ok(hotels)
    }
}
