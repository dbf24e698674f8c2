use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// Request para crear una locación
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLocationRequest {
    #[validate(length(min = 1, max = 50))]
    pub city: String,

    #[validate(length(min = 1, max = 200))]
    pub address: String,

    pub phone_number: String,

    #[validate(range(min = 1))]
    pub max_capacity: i32,
}

// Response de locación
#[derive(Debug, Serialize)]
pub struct LocationResponse {
    pub id: Uuid,
    pub city: String,
    pub address: String,
    pub phone_number: String,
    pub max_capacity: i32,
}
