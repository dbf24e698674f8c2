use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::auth_dto::ApiResponse;
use crate::dto::location_dto::{CreateLocationRequest, LocationResponse};
use crate::models::auth::AuthUser;
use crate::models::location::Location;
use crate::repositories::location_repository::LocationRepository;
use crate::services::authorization_service::{require_permission, Permission};
use crate::utils::errors::AppError;
use crate::utils::validation;

pub struct LocationController {
    repository: LocationRepository,
}

impl LocationController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: LocationRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<LocationResponse>, AppError> {
        let locations = self.repository.list_all().await?;
        Ok(locations.into_iter().map(location_to_response).collect())
    }

    pub async fn create(
        &self,
        auth: &AuthUser,
        request: CreateLocationRequest,
    ) -> Result<ApiResponse<LocationResponse>, AppError> {
        require_permission(auth, Permission::ManageFleet)?;
        request.validate()?;

        if validation::validate_phone(&request.phone_number).is_err() {
            return Err(AppError::ValidationError(
                "Formato de número de teléfono inválido.".to_string(),
            ));
        }

        let location = Location {
            id: Uuid::new_v4(),
            city: request.city,
            address: request.address,
            phone_number: request.phone_number,
            max_capacity: request.max_capacity,
        };

        let saved = self.repository.create(&location).await?;

        Ok(ApiResponse::success_with_message(
            location_to_response(saved),
            "Locación creada exitosamente.".to_string(),
        ))
    }
}

fn location_to_response(location: Location) -> LocationResponse {
    LocationResponse {
        id: location.id,
        city: location.city,
        address: location.address,
        phone_number: location.phone_number,
        max_capacity: location.max_capacity,
    }
}
