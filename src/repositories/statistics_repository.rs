use crate::utils::errors::AppError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

/// Ocupación de una locación al día de hoy
#[derive(Debug, sqlx::FromRow)]
pub struct LocationOccupancyRow {
    pub id: Uuid,
    pub city: String,
    pub address: String,
    pub max_capacity: i32,
    pub total_fleet: i64,
    pub cars_on_trip: i64,
}

/// Fila cruda para la serie temporal de reservas
#[derive(Debug, sqlx::FromRow)]
pub struct BookingStatRow {
    pub start_date: NaiveDate,
    pub total_price: Decimal,
}

/// Costo total de mantenimiento por auto
#[derive(Debug, sqlx::FromRow)]
pub struct MaintenanceTotalRow {
    pub id: Uuid,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub total_cost: Decimal,
}

pub struct StatisticsRepository {
    pool: PgPool,
}

impl StatisticsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Flota total y autos en viaje por locación. "En viaje" se deriva de las
    /// reservas Confirmed/New que cubren el día dado.
    pub async fn location_occupancy(
        &self,
        day: NaiveDate,
    ) -> Result<Vec<LocationOccupancyRow>, AppError> {
        let result = sqlx::query_as::<_, LocationOccupancyRow>(
            r#"
            SELECT
                l.id,
                l.city,
                l.address,
                l.max_capacity,
                (SELECT COUNT(*) FROM cars c WHERE c.location_id = l.id) AS total_fleet,
                (
                    SELECT COUNT(*)
                    FROM bookings b
                    JOIN cars c ON b.car_id = c.id
                    WHERE c.location_id = l.id
                    AND b.status IN ('Confirmed', 'New')
                    AND $1 BETWEEN b.start_date AND b.end_date
                ) AS cars_on_trip
            FROM locations l
            ORDER BY l.city
            "#,
        )
        .bind(day)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error loading occupancy: {}", e)))?;

        Ok(result)
    }

    /// Reservas Confirmed/Completed dentro de la ventana, con filtros
    /// opcionales por locación y clase de auto
    pub async fn booking_stat_rows(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        location_id: Option<Uuid>,
        car_class: Option<&str>,
    ) -> Result<Vec<BookingStatRow>, AppError> {
        let result = sqlx::query_as::<_, BookingStatRow>(
            r#"
            SELECT b.start_date, b.total_price
            FROM bookings b
            JOIN cars c ON b.car_id = c.id
            WHERE b.status IN ('Confirmed', 'Completed')
            AND b.start_date >= $1
            AND b.start_date <= $2
            AND ($3::uuid IS NULL OR c.location_id = $3)
            AND ($4::text IS NULL OR c.car_class = $4)
            ORDER BY b.start_date ASC
            "#,
        )
        .bind(start)
        .bind(end)
        .bind(location_id)
        .bind(car_class)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error loading booking stats: {}", e)))?;

        Ok(result)
    }

    pub async fn distinct_car_classes(&self) -> Result<Vec<String>, AppError> {
        let rows: Vec<(String,)> =
            sqlx::query_as("SELECT DISTINCT car_class FROM cars ORDER BY car_class")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| AppError::DatabaseError(format!("Error loading car classes: {}", e)))?;

        Ok(rows.into_iter().map(|(class,)| class).collect())
    }

    /// Top de autos por costo total de mantenimiento (solo con costo > 0)
    pub async fn maintenance_totals(&self) -> Result<Vec<MaintenanceTotalRow>, AppError> {
        let result = sqlx::query_as::<_, MaintenanceTotalRow>(
            r#"
            SELECT c.id, c.brand, c.model, c.year, COALESCE(SUM(m.cost), 0) AS total_cost
            FROM cars c
            LEFT JOIN maintenance m ON c.id = m.car_id
            GROUP BY c.id, c.brand, c.model, c.year
            HAVING COALESCE(SUM(m.cost), 0) > 0
            ORDER BY total_cost DESC
            LIMIT 10
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error loading maintenance totals: {}", e)))?;

        Ok(result)
    }
}
