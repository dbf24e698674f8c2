use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// Request para crear un auto
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCarRequest {
    #[validate(length(min = 1, max = 50))]
    pub brand: String,

    #[validate(length(min = 1, max = 50))]
    pub model: String,

    #[validate(range(min = 1950, max = 2100))]
    pub year: i32,

    #[validate(range(min = 1))]
    pub price_per_day: i64,

    pub transmission: String,
    pub fuel_type: String,

    #[validate(range(min = 1, max = 20))]
    pub seats: i32,

    pub image_url: Option<String>,
    pub description: Option<String>,
    pub car_class: Option<String>,
    pub status: Option<String>,
    pub location_id: Option<Uuid>,
}

// Request para actualizar un auto
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCarRequest {
    #[validate(length(min = 1, max = 50))]
    pub brand: Option<String>,

    #[validate(length(min = 1, max = 50))]
    pub model: Option<String>,

    #[validate(range(min = 1950, max = 2100))]
    pub year: Option<i32>,

    #[validate(range(min = 1))]
    pub price_per_day: Option<i64>,

    pub transmission: Option<String>,
    pub fuel_type: Option<String>,

    #[validate(range(min = 1, max = 20))]
    pub seats: Option<i32>,

    pub image_url: Option<String>,
    pub description: Option<String>,
    pub car_class: Option<String>,
    pub status: Option<String>,
    pub location_id: Option<Uuid>,
}

// Filtro del listado público de flota
#[derive(Debug, Deserialize)]
pub struct FleetQuery {
    pub class: Option<String>,
}

// Parámetros del listado de populares
#[derive(Debug, Deserialize)]
pub struct PopularQuery {
    pub limit: Option<usize>,
}

// Response de auto
#[derive(Debug, Serialize)]
pub struct CarResponse {
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
    // Derivado de las reservas activas, nunca almacenado
    pub is_booked_now: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub popularity_score: Option<f64>,
    pub created_at: DateTime<Utc>,
}
