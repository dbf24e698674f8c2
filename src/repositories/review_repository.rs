use crate::models::review::Review;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use uuid::Uuid;

pub struct ReviewRepository {
    pool: PgPool,
}

impl ReviewRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, review: &Review) -> Result<Review, AppError> {
        let result = sqlx::query_as::<_, Review>(
            r#"
            INSERT INTO reviews (id, user_id, car_id, booking_id, rating, comment, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(review.id)
        .bind(review.user_id)
        .bind(review.car_id)
        .bind(review.booking_id)
        .bind(review.rating)
        .bind(&review.comment)
        .bind(review.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating review: {}", e)))?;

        Ok(result)
    }

    pub async fn exists_for_booking(&self, booking_id: Uuid) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM reviews WHERE booking_id = $1)")
                .bind(booking_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| AppError::DatabaseError(format!("Error checking review: {}", e)))?;

        Ok(result.0)
    }

    pub async fn list_all(&self) -> Result<Vec<Review>, AppError> {
        let result = sqlx::query_as::<_, Review>("SELECT * FROM reviews ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error listing reviews: {}", e)))?;

        Ok(result)
    }

    pub async fn list_by_car(&self, car_id: Uuid) -> Result<Vec<Review>, AppError> {
        let result = sqlx::query_as::<_, Review>(
            "SELECT * FROM reviews WHERE car_id = $1 ORDER BY created_at DESC",
        )
        .bind(car_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing reviews by car: {}", e)))?;

        Ok(result)
    }
}
