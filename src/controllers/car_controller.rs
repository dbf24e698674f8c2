use chrono::Utc;
use sqlx::PgPool;
use std::collections::HashSet;
use uuid::Uuid;
use validator::Validate;

use crate::dto::auth_dto::ApiResponse;
use crate::dto::car_dto::{CarResponse, CreateCarRequest, UpdateCarRequest};
use crate::models::auth::AuthUser;
use crate::models::car::{Car, CarStatus};
use crate::repositories::booking_repository::BookingRepository;
use crate::repositories::car_repository::CarRepository;
use crate::repositories::review_repository::ReviewRepository;
use crate::services::authorization_service::{require_permission, Permission};
use crate::services::ranking_service::{
    calculate_popular_cars, DEFAULT_POPULAR_LIMIT, DEFAULT_PRIOR_WEIGHT,
};
use crate::utils::errors::AppError;

pub struct CarController {
    repository: CarRepository,
    bookings: BookingRepository,
    reviews: ReviewRepository,
}

impl CarController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CarRepository::new(pool.clone()),
            bookings: BookingRepository::new(pool.clone()),
            reviews: ReviewRepository::new(pool),
        }
    }

    /// Flota pública: excluye autos en mantenimiento, anota la disponibilidad
    /// derivada de las reservas del día
    pub async fn list_fleet(
        &self,
        class_filter: Option<String>,
    ) -> Result<Vec<CarResponse>, AppError> {
        let cars = self.repository.list_fleet(class_filter.as_deref()).await?;
        let on_trip = self.car_ids_on_trip_today().await?;

        Ok(cars
            .into_iter()
            .map(|car| {
                let is_booked_now = on_trip.contains(&car.id);
                car_to_response(car, is_booked_now, None)
            })
            .collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<CarResponse, AppError> {
        let car = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Auto no encontrado".to_string()))?;

        let on_trip = self.car_ids_on_trip_today().await?;
        let is_booked_now = on_trip.contains(&car.id);

        Ok(car_to_response(car, is_booked_now, None))
    }

    /// Autos más populares por score bayesiano de reviews
    pub async fn list_popular(&self, limit: Option<usize>) -> Result<Vec<CarResponse>, AppError> {
        let cars = self.repository.list_all().await?;
        let reviews = self.reviews.list_all().await?;
        let on_trip = self.car_ids_on_trip_today().await?;

        let ranked = calculate_popular_cars(
            cars,
            &reviews,
            limit.unwrap_or(DEFAULT_POPULAR_LIMIT),
            DEFAULT_PRIOR_WEIGHT,
        );

        Ok(ranked
            .into_iter()
            .map(|scored| {
                let is_booked_now = on_trip.contains(&scored.car.id);
                car_to_response(scored.car, is_booked_now, Some(scored.score))
            })
            .collect())
    }

    pub async fn create(
        &self,
        auth: &AuthUser,
        request: CreateCarRequest,
    ) -> Result<ApiResponse<CarResponse>, AppError> {
        require_permission(auth, Permission::ManageFleet)?;
        request.validate()?;

        let status = parse_car_status(request.status.as_deref())?;

        let car = Car {
            id: Uuid::new_v4(),
            brand: request.brand,
            model: request.model,
            year: request.year,
            price_per_day: request.price_per_day,
            transmission: request.transmission,
            fuel_type: request.fuel_type,
            seats: request.seats,
            image_url: request.image_url,
            description: request.description,
            car_class: request.car_class.unwrap_or_else(|| "Economy".to_string()),
            status: status.as_str().to_string(),
            location_id: request.location_id,
            created_at: Utc::now(),
        };

        let saved = self.repository.create(&car).await?;

        Ok(ApiResponse::success_with_message(
            car_to_response(saved, false, None),
            "Auto agregado exitosamente.".to_string(),
        ))
    }

    pub async fn update(
        &self,
        auth: &AuthUser,
        id: Uuid,
        request: UpdateCarRequest,
    ) -> Result<ApiResponse<CarResponse>, AppError> {
        require_permission(auth, Permission::ManageFleet)?;
        request.validate()?;

        let current = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Auto no encontrado".to_string()))?;

        let status = match request.status.as_deref() {
            Some(s) => parse_car_status(Some(s))?,
            None => parse_car_status(Some(current.status.as_str()))?,
        };

        let car = Car {
            id: current.id,
            brand: request.brand.unwrap_or(current.brand),
            model: request.model.unwrap_or(current.model),
            year: request.year.unwrap_or(current.year),
            price_per_day: request.price_per_day.unwrap_or(current.price_per_day),
            transmission: request.transmission.unwrap_or(current.transmission),
            fuel_type: request.fuel_type.unwrap_or(current.fuel_type),
            seats: request.seats.unwrap_or(current.seats),
            image_url: request.image_url.or(current.image_url),
            description: request.description.or(current.description),
            car_class: request.car_class.unwrap_or(current.car_class),
            status: status.as_str().to_string(),
            location_id: request.location_id.or(current.location_id),
            created_at: current.created_at,
        };

        let saved = self.repository.update(&car).await?;
        let on_trip = self.car_ids_on_trip_today().await?;
        let is_booked_now = on_trip.contains(&saved.id);

        Ok(ApiResponse::success_with_message(
            car_to_response(saved, is_booked_now, None),
            "Auto actualizado exitosamente.".to_string(),
        ))
    }

    pub async fn delete(&self, auth: &AuthUser, id: Uuid) -> Result<(), AppError> {
        require_permission(auth, Permission::DeleteCars)?;

        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Auto no encontrado".to_string()))?;

        self.repository.delete(id).await?;
        Ok(())
    }

    async fn car_ids_on_trip_today(&self) -> Result<HashSet<Uuid>, AppError> {
        let today = Utc::now().date_naive();
        let ids = self.bookings.car_ids_on_trip(today).await?;
        Ok(ids.into_iter().collect())
    }
}

/// El status almacenado es solo el override administrativo; "Booked" no es
/// un valor válido, el estado de viaje se deriva de las reservas
fn parse_car_status(status: Option<&str>) -> Result<CarStatus, AppError> {
    match status {
        None => Ok(CarStatus::Available),
        Some(s) => CarStatus::from_str(s).ok_or_else(|| {
            AppError::ValidationError(format!(
                "Status de auto inválido: '{}'. Valores permitidos: Available, Maintenance.",
                s
            ))
        }),
    }
}

pub fn car_to_response(car: Car, is_booked_now: bool, popularity_score: Option<f64>) -> CarResponse {
    CarResponse {
        id: car.id,
        brand: car.brand,
        model: car.model,
        year: car.year,
        price_per_day: car.price_per_day,
        transmission: car.transmission,
        fuel_type: car.fuel_type,
        seats: car.seats,
        image_url: car.image_url,
        description: car.description,
        car_class: car.car_class,
        status: car.status,
        location_id: car.location_id,
        is_booked_now,
        popularity_score,
        created_at: car.created_at,
    }
}
