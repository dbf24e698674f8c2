use crate::models::car::Car;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use uuid::Uuid;

pub struct CarRepository {
    pool: PgPool,
}

impl CarRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, car: &Car) -> Result<Car, AppError> {
        let result = sqlx::query_as::<_, Car>(
            r#"
            INSERT INTO cars (
                id, brand, model, year, price_per_day, transmission, fuel_type,
                seats, image_url, description, car_class, status, location_id, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING *
            "#,
        )
        .bind(car.id)
        .bind(&car.brand)
        .bind(&car.model)
        .bind(car.year)
        .bind(car.price_per_day)
        .bind(&car.transmission)
        .bind(&car.fuel_type)
        .bind(car.seats)
        .bind(&car.image_url)
        .bind(&car.description)
        .bind(&car.car_class)
        .bind(&car.status)
        .bind(car.location_id)
        .bind(car.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating car: {}", e)))?;

        Ok(result)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Car>, AppError> {
        let result = sqlx::query_as::<_, Car>("SELECT * FROM cars WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error finding car: {}", e)))?;

        Ok(result)
    }

    pub async fn list_all(&self) -> Result<Vec<Car>, AppError> {
        let result = sqlx::query_as::<_, Car>("SELECT * FROM cars ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error listing cars: {}", e)))?;

        Ok(result)
    }

    /// Flota pública: excluye autos en mantenimiento, filtro opcional por clase
    pub async fn list_fleet(&self, car_class: Option<&str>) -> Result<Vec<Car>, AppError> {
        let result = sqlx::query_as::<_, Car>(
            r#"
            SELECT * FROM cars
            WHERE status <> 'Maintenance'
            AND ($1::text IS NULL OR car_class = $1)
            ORDER BY created_at DESC
            "#,
        )
        .bind(car_class)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing fleet: {}", e)))?;

        Ok(result)
    }

    pub async fn update(&self, car: &Car) -> Result<Car, AppError> {
        let result = sqlx::query_as::<_, Car>(
            r#"
            UPDATE cars
            SET brand = $2, model = $3, year = $4, price_per_day = $5, transmission = $6,
                fuel_type = $7, seats = $8, image_url = $9, description = $10,
                car_class = $11, status = $12, location_id = $13
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(car.id)
        .bind(&car.brand)
        .bind(&car.model)
        .bind(car.year)
        .bind(car.price_per_day)
        .bind(&car.transmission)
        .bind(&car.fuel_type)
        .bind(car.seats)
        .bind(&car.image_url)
        .bind(&car.description)
        .bind(&car.car_class)
        .bind(&car.status)
        .bind(car.location_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error updating car: {}", e)))?;

        Ok(result)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM cars WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error deleting car: {}", e)))?;

        Ok(())
    }
}
