use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::auth_dto::ApiResponse;
use crate::dto::review_dto::{CreateReviewRequest, ReviewResponse};
use crate::models::auth::AuthUser;
use crate::models::booking::BookingStatus;
use crate::models::review::Review;
use crate::repositories::booking_repository::BookingRepository;
use crate::repositories::review_repository::ReviewRepository;
use crate::utils::errors::AppError;

pub struct ReviewController {
    repository: ReviewRepository,
    bookings: BookingRepository,
}

impl ReviewController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ReviewRepository::new(pool.clone()),
            bookings: BookingRepository::new(pool),
        }
    }

    /// Una review solo puede crearse sobre una reserva completada del propio
    /// usuario, y a lo sumo una por reserva
    pub async fn create(
        &self,
        auth: &AuthUser,
        booking_id: Uuid,
        request: CreateReviewRequest,
    ) -> Result<ApiResponse<ReviewResponse>, AppError> {
        request.validate()?;

        let booking = self
            .bookings
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reserva no encontrada".to_string()))?;

        if booking.user_id != Some(auth.id) {
            return Err(AppError::Forbidden("Error de autorización.".to_string()));
        }

        if booking.status != BookingStatus::Completed.as_str() {
            return Err(AppError::Forbidden(
                "Solo podés dejar una review sobre una reserva completada.".to_string(),
            ));
        }

        if self.repository.exists_for_booking(booking_id).await? {
            return Err(AppError::Conflict(
                "Ya dejaste una review para esta reserva.".to_string(),
            ));
        }

        let review = Review {
            id: Uuid::new_v4(),
            user_id: auth.id,
            car_id: booking.car_id,
            booking_id: booking.id,
            rating: request.rating,
            comment: request.comment,
            created_at: Utc::now(),
        };

        let saved = self.repository.create(&review).await?;

        Ok(ApiResponse::success_with_message(
            review_to_response(saved),
            "¡Gracias por tu review!".to_string(),
        ))
    }

    pub async fn list_by_car(&self, car_id: Uuid) -> Result<Vec<ReviewResponse>, AppError> {
        let reviews = self.repository.list_by_car(car_id).await?;
        Ok(reviews.into_iter().map(review_to_response).collect())
    }
}

fn review_to_response(review: Review) -> ReviewResponse {
    ReviewResponse {
        id: review.id,
        user_id: review.user_id,
        car_id: review.car_id,
        booking_id: review.booking_id,
        rating: review.rating,
        comment: review.comment,
        created_at: review.created_at,
    }
}
