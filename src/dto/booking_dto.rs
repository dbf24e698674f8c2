use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// Request para crear una reserva
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBookingRequest {
    pub car_id: Uuid,

    // Fechas en formato YYYY-MM-DD; la parseabilidad se valida aparte
    pub start_date: String,
    pub end_date: String,

    #[validate(length(min = 2, max = 100))]
    pub customer_name: String,

    pub customer_phone: String,
}

// Request para la acción de staff sobre una reserva
#[derive(Debug, Deserialize)]
pub struct UpdateBookingStatusRequest {
    pub action: String, // confirm | cancel | complete
}

// Filtro del listado de gestión
#[derive(Debug, Deserialize)]
pub struct BookingListQuery {
    pub status: Option<String>,
}

// Response de reserva
#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub car_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_price: f64,
    pub customer_name: String,
    pub customer_phone: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
