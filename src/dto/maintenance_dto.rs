use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// Request para registrar un mantenimiento
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMaintenanceRequest {
    pub car_id: Uuid,

    // Fecha en formato YYYY-MM-DD
    pub date: String,

    #[validate(length(min = 1, max = 200))]
    pub description: String,

    pub cost: f64,
}

// Response de registro de mantenimiento
#[derive(Debug, Serialize)]
pub struct MaintenanceResponse {
    pub id: Uuid,
    pub car_id: Uuid,
    pub date: NaiveDate,
    pub description: String,
    pub cost: f64,
    pub created_at: DateTime<Utc>,
}
