use crate::models::location::Location;
use crate::utils::errors::AppError;
use sqlx::PgPool;

pub struct LocationRepository {
    pool: PgPool,
}

impl LocationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, location: &Location) -> Result<Location, AppError> {
        let result = sqlx::query_as::<_, Location>(
            r#"
            INSERT INTO locations (id, city, address, phone_number, max_capacity)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(location.id)
        .bind(&location.city)
        .bind(&location.address)
        .bind(&location.phone_number)
        .bind(location.max_capacity)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating location: {}", e)))?;

        Ok(result)
    }

    pub async fn list_all(&self) -> Result<Vec<Location>, AppError> {
        let result = sqlx::query_as::<_, Location>("SELECT * FROM locations ORDER BY city")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error listing locations: {}", e)))?;

        Ok(result)
    }
}
