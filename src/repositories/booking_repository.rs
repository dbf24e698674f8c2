use crate::models::booking::Booking;
use crate::utils::errors::AppError;
use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insertar una reserva verificando el solapamiento dentro de una única
    /// transacción. El lock `FOR UPDATE` sobre la fila del auto serializa los
    /// intentos concurrentes sobre el mismo auto, así el check y el insert
    /// son atómicos.
    pub async fn create_checked(&self, booking: &Booking) -> Result<Booking, AppError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error starting transaction: {}", e)))?;

        let locked: Option<(Uuid,)> =
            sqlx::query_as("SELECT id FROM cars WHERE id = $1 FOR UPDATE")
                .bind(booking.car_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(|e| AppError::DatabaseError(format!("Error locking car: {}", e)))?;

        if locked.is_none() {
            return Err(AppError::NotFound("Auto no encontrado".to_string()));
        }

        // Solapamiento estricto: los rangos adyacentes no entran en conflicto
        let conflict: (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM bookings
                WHERE car_id = $1
                AND status NOT IN ('Canceled', 'Completed')
                AND end_date > $2
                AND start_date < $3
            )
            "#,
        )
        .bind(booking.car_id)
        .bind(booking.start_date)
        .bind(booking.end_date)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error checking overlap: {}", e)))?;

        if conflict.0 {
            log::warn!(
                "Reserva rechazada por solapamiento: auto {} ({} -> {})",
                booking.car_id,
                booking.start_date,
                booking.end_date
            );
            return Err(AppError::Conflict(
                "El auto ya está reservado para esas fechas.".to_string(),
            ));
        }

        let result = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings (
                id, user_id, car_id, start_date, end_date, total_price,
                customer_name, customer_phone, status, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(booking.id)
        .bind(booking.user_id)
        .bind(booking.car_id)
        .bind(booking.start_date)
        .bind(booking.end_date)
        .bind(booking.total_price)
        .bind(&booking.customer_name)
        .bind(&booking.customer_phone)
        .bind(&booking.status)
        .bind(booking.created_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating booking: {}", e)))?;

        tx.commit()
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error committing booking: {}", e)))?;

        Ok(result)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, AppError> {
        let result = sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error finding booking: {}", e)))?;

        Ok(result)
    }

    pub async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Booking>, AppError> {
        let result = sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE user_id = $1 ORDER BY start_date DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing bookings: {}", e)))?;

        Ok(result)
    }

    pub async fn list_all(&self, status: Option<&str>) -> Result<Vec<Booking>, AppError> {
        let result = sqlx::query_as::<_, Booking>(
            r#"
            SELECT * FROM bookings
            WHERE ($1::text IS NULL OR status = $1)
            ORDER BY start_date DESC
            "#,
        )
        .bind(status)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing bookings: {}", e)))?;

        Ok(result)
    }

    pub async fn update_status(&self, id: Uuid, status: &str) -> Result<Booking, AppError> {
        let result = sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET status = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error updating booking status: {}", e)))?;

        Ok(result)
    }

    /// Autos con una reserva activa que cubre el día dado (derivado, nunca
    /// almacenado en el auto)
    pub async fn car_ids_on_trip(&self, day: NaiveDate) -> Result<Vec<Uuid>, AppError> {
        let rows: Vec<(Uuid,)> = sqlx::query_as(
            r#"
            SELECT DISTINCT car_id FROM bookings
            WHERE status NOT IN ('Canceled', 'Completed')
            AND start_date <= $1
            AND end_date >= $1
            "#,
        )
        .bind(day)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing active bookings: {}", e)))?;

        Ok(rows.into_iter().map(|(id,)| id).collect())
    }
}
