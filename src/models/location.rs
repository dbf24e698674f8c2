//! Modelo de Location

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Location - mapea exactamente a la tabla locations
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Location {
    pub id: Uuid,
    pub city: String,
    pub address: String,
    pub phone_number: String,
    pub max_capacity: i32,
}
