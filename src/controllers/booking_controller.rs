use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::auth_dto::ApiResponse;
use crate::dto::booking_dto::{BookingResponse, CreateBookingRequest, UpdateBookingStatusRequest};
use crate::models::auth::AuthUser;
use crate::models::booking::{total_price_for, Booking, BookingAction, BookingStatus};
use crate::repositories::booking_repository::BookingRepository;
use crate::repositories::car_repository::CarRepository;
use crate::services::authorization_service::{require_permission, Permission};
use crate::utils::errors::AppError;
use crate::utils::validation;

pub struct BookingController {
    repository: BookingRepository,
    cars: CarRepository,
}

impl BookingController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: BookingRepository::new(pool.clone()),
            cars: CarRepository::new(pool),
        }
    }

    /// Validar y crear una reserva. Chequeos en orden: teléfono, fechas
    /// parseables, inicio no en el pasado, fin posterior al inicio y
    /// solapamiento estricto contra reservas activas (dentro de la
    /// transacción del repositorio).
    pub async fn create(
        &self,
        user_id: Uuid,
        request: CreateBookingRequest,
    ) -> Result<ApiResponse<BookingResponse>, AppError> {
        request.validate()?;

        if validation::validate_phone(&request.customer_phone).is_err() {
            return Err(AppError::ValidationError(
                "Formato de número de teléfono inválido.".to_string(),
            ));
        }

        let start_date = validation::validate_date(&request.start_date).map_err(|_| {
            AppError::ValidationError("Formato de fecha inválido.".to_string())
        })?;
        let end_date = validation::validate_date(&request.end_date).map_err(|_| {
            AppError::ValidationError("Formato de fecha inválido.".to_string())
        })?;

        let today = Utc::now().date_naive();
        if start_date < today {
            return Err(AppError::ValidationError(
                "La fecha de inicio no puede estar en el pasado.".to_string(),
            ));
        }

        if end_date <= start_date {
            return Err(AppError::ValidationError(
                "La fecha de fin debe ser posterior a la fecha de inicio.".to_string(),
            ));
        }

        let car = self
            .cars
            .find_by_id(request.car_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Auto no encontrado".to_string()))?;

        let booking = Booking {
            id: Uuid::new_v4(),
            user_id: Some(user_id),
            car_id: car.id,
            start_date,
            end_date,
            total_price: total_price_for(start_date, end_date, car.price_per_day),
            customer_name: request.customer_name,
            customer_phone: request.customer_phone,
            status: BookingStatus::New.as_str().to_string(),
            created_at: Utc::now(),
        };

        let saved = self.repository.create_checked(&booking).await?;

        Ok(ApiResponse::success_with_message(
            booking_to_response(saved),
            "Reserva creada exitosamente.".to_string(),
        ))
    }

    pub async fn list_my(&self, user_id: Uuid) -> Result<Vec<BookingResponse>, AppError> {
        let bookings = self.repository.list_by_user(user_id).await?;
        Ok(bookings.into_iter().map(booking_to_response).collect())
    }

    pub async fn list_all(
        &self,
        auth: &AuthUser,
        status_filter: Option<String>,
    ) -> Result<Vec<BookingResponse>, AppError> {
        require_permission(auth, Permission::ManageBookings)?;

        if let Some(ref status) = status_filter {
            if BookingStatus::from_str(status).is_none() {
                return Err(AppError::ValidationError(format!(
                    "Status de reserva inválido: '{}'.",
                    status
                )));
            }
        }

        let bookings = self.repository.list_all(status_filter.as_deref()).await?;
        Ok(bookings.into_iter().map(booking_to_response).collect())
    }

    /// Acción de staff sobre el ciclo de vida: New -> {Confirmed, Canceled},
    /// Confirmed -> {Canceled, Completed}. No toca el status administrativo
    /// del auto; la ocupación siempre se deriva de las reservas.
    pub async fn update_status(
        &self,
        auth: &AuthUser,
        id: Uuid,
        request: UpdateBookingStatusRequest,
    ) -> Result<ApiResponse<BookingResponse>, AppError> {
        require_permission(auth, Permission::ManageBookings)?;

        let action = BookingAction::from_str(&request.action).ok_or_else(|| {
            AppError::ValidationError(format!("Acción inválida: '{}'.", request.action))
        })?;

        let booking = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reserva no encontrada".to_string()))?;

        let current = BookingStatus::from_str(&booking.status).ok_or_else(|| {
            AppError::Internal(format!("Invalid booking status in database: {}", booking.status))
        })?;
        let target = action.target_status();

        if !current.can_transition_to(target) {
            return Err(AppError::Conflict(format!(
                "Transición de estado inválida: {} -> {}.",
                current.as_str(),
                target.as_str()
            )));
        }

        let updated = self.repository.update_status(id, target.as_str()).await?;

        let message = match action {
            BookingAction::Confirm => format!("Reserva {} confirmada.", updated.id),
            BookingAction::Cancel => format!("Reserva {} cancelada.", updated.id),
            BookingAction::Complete => format!("Reserva {} marcada como completada.", updated.id),
        };

        Ok(ApiResponse::success_with_message(
            booking_to_response(updated),
            message,
        ))
    }
}

pub fn booking_to_response(booking: Booking) -> BookingResponse {
    BookingResponse {
        id: booking.id,
        user_id: booking.user_id,
        car_id: booking.car_id,
        start_date: booking.start_date,
        end_date: booking.end_date,
        total_price: booking.total_price.to_string().parse().unwrap_or(0.0),
        customer_name: booking.customer_name,
        customer_phone: booking.customer_phone,
        status: booking.status,
        created_at: booking.created_at,
    }
}
