use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::auth_dto::ApiResponse;
use crate::dto::maintenance_dto::{CreateMaintenanceRequest, MaintenanceResponse};
use crate::models::auth::AuthUser;
use crate::models::maintenance::Maintenance;
use crate::repositories::car_repository::CarRepository;
use crate::repositories::maintenance_repository::MaintenanceRepository;
use crate::services::authorization_service::{require_permission, Permission};
use crate::utils::errors::AppError;
use crate::utils::validation;

pub struct MaintenanceController {
    repository: MaintenanceRepository,
    cars: CarRepository,
}

impl MaintenanceController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: MaintenanceRepository::new(pool.clone()),
            cars: CarRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        auth: &AuthUser,
        request: CreateMaintenanceRequest,
    ) -> Result<ApiResponse<MaintenanceResponse>, AppError> {
        require_permission(auth, Permission::ManageFleet)?;
        request.validate()?;

        let date = validation::validate_date(&request.date).map_err(|_| {
            AppError::ValidationError("Formato de fecha inválido.".to_string())
        })?;

        if validation::validate_positive(request.cost).is_err() {
            return Err(AppError::ValidationError(
                "El costo debe ser mayor a cero.".to_string(),
            ));
        }

        self.cars
            .find_by_id(request.car_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Auto no encontrado".to_string()))?;

        let cost = Decimal::from_f64_retain(request.cost).ok_or_else(|| {
            AppError::ValidationError("Costo inválido.".to_string())
        })?;

        let record = Maintenance {
            id: Uuid::new_v4(),
            car_id: request.car_id,
            date,
            description: request.description,
            cost,
            created_at: Utc::now(),
        };

        let saved = self.repository.create(&record).await?;

        Ok(ApiResponse::success_with_message(
            maintenance_to_response(saved),
            "Registro de mantenimiento creado exitosamente.".to_string(),
        ))
    }

    pub async fn list_by_car(
        &self,
        auth: &AuthUser,
        car_id: Uuid,
    ) -> Result<Vec<MaintenanceResponse>, AppError> {
        require_permission(auth, Permission::ManageFleet)?;

        self.cars
            .find_by_id(car_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Auto no encontrado".to_string()))?;

        let records = self.repository.list_by_car(car_id).await?;
        Ok(records.into_iter().map(maintenance_to_response).collect())
    }
}

fn maintenance_to_response(record: Maintenance) -> MaintenanceResponse {
    MaintenanceResponse {
        id: record.id,
        car_id: record.car_id,
        date: record.date,
        description: record.description,
        cost: record.cost.to_string().parse().unwrap_or(0.0),
        created_at: record.created_at,
    }
}
