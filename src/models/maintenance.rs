//! Modelo de Maintenance
//!
//! Registros de mantenimiento por auto, usados para la agregación de costos.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Maintenance - mapea exactamente a la tabla maintenance
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Maintenance {
    pub id: Uuid,
    pub car_id: Uuid,
    pub date: NaiveDate,
    pub description: String,
    pub cost: Decimal,
    pub created_at: DateTime<Utc>,
}
