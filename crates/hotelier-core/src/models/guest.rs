//! Guest domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Guest {
    pub id: Uuid,
    /// Owning hotel. A guest booking at two hotels has two rows.
    pub hotel_id: Uuid,
    pub full_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGuest {
    pub hotel_id: Uuid,
    pub full_name: String,
    pub email: String,
}
