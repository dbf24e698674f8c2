use crate::models::maintenance::Maintenance;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use uuid::Uuid;

pub struct MaintenanceRepository {
    pool: PgPool,
}

impl MaintenanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, record: &Maintenance) -> Result<Maintenance, AppError> {
        let result = sqlx::query_as::<_, Maintenance>(
            r#"
            INSERT INTO maintenance (id, car_id, date, description, cost, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(record.id)
        .bind(record.car_id)
        .bind(record.date)
        .bind(&record.description)
        .bind(record.cost)
        .bind(record.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating maintenance record: {}", e)))?;

        Ok(result)
    }

    pub async fn list_by_car(&self, car_id: Uuid) -> Result<Vec<Maintenance>, AppError> {
        let result = sqlx::query_as::<_, Maintenance>(
            "SELECT * FROM maintenance WHERE car_id = $1 ORDER BY date ASC",
        )
        .bind(car_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing maintenance records: {}", e)))?;

        Ok(result)
    }
}
