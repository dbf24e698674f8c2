//! Modelo de Car
//!
//! Este módulo contiene el struct Car y su status administrativo.
//! El status es un override manual (Available/Maintenance); "en viaje"
//! nunca se almacena, siempre se deriva de las reservas.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Car - mapea exactamente a la tabla cars
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Car {
    pub id: Uuid,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub price_per_day: i64,
    pub transmission: String,
    pub fuel_type: String,
    pub seats: i32,
    pub image_url: Option<String>,
    pub description: Option<String>,
    pub car_class: String,
    pub status: String,
    pub location_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Status administrativo de un auto
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CarStatus {
    Available,
    Maintenance,
}

impl CarStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CarStatus::Available => "Available",
            CarStatus::Maintenance => "Maintenance",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Available" => Some(CarStatus::Available),
            "Maintenance" => Some(CarStatus::Maintenance),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_roundtrip() {
        for status in [CarStatus::Available, CarStatus::Maintenance] {
            assert_eq!(CarStatus::from_str(status.as_str()), Some(status));
        }
        // "Booked" ya no es un estado almacenable
        assert_eq!(CarStatus::from_str("Booked"), None);
    }
}
