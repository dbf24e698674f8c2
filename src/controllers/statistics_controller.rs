use chrono::Utc;
use sqlx::PgPool;

use crate::dto::statistics_dto::{
    LocationOccupancyResponse, MaintenanceHistoryPoint, MaintenanceTotalResponse,
    SeriesPointResponse, StatisticsQuery, StatisticsResponse,
};
use crate::models::auth::AuthUser;
use crate::repositories::car_repository::CarRepository;
use crate::repositories::maintenance_repository::MaintenanceRepository;
use crate::repositories::statistics_repository::StatisticsRepository;
use crate::services::authorization_service::{require_permission, Permission};
use crate::services::statistics_service::{aggregate_series, StatsMetric, StatsPeriod};
use crate::utils::errors::AppError;

pub struct StatisticsController {
    repository: StatisticsRepository,
    cars: CarRepository,
    maintenance: MaintenanceRepository,
}

impl StatisticsController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: StatisticsRepository::new(pool.clone()),
            cars: CarRepository::new(pool.clone()),
            maintenance: MaintenanceRepository::new(pool),
        }
    }

    /// Contexto completo de la página de reportes: ocupación por locación,
    /// serie temporal de ingresos/reservas y resúmenes de mantenimiento
    pub async fn overview(
        &self,
        auth: &AuthUser,
        query: StatisticsQuery,
    ) -> Result<StatisticsResponse, AppError> {
        require_permission(auth, Permission::ViewStatistics)?;

        let period = match query.period.as_deref() {
            Some(s) => StatsPeriod::from_str(s).ok_or_else(|| {
                AppError::ValidationError(format!("Período inválido: '{}'.", s))
            })?,
            None => StatsPeriod::Month,
        };

        let metric = match query.metric.as_deref() {
            Some(s) => StatsMetric::from_str(s).ok_or_else(|| {
                AppError::ValidationError(format!("Métrica inválida: '{}'.", s))
            })?,
            None => StatsMetric::Income,
        };

        let today = Utc::now().date_naive();

        // 1. Ocupación por locación
        let occupancy = self.repository.location_occupancy(today).await?;
        let location_stats = occupancy
            .into_iter()
            .map(|row| {
                let occupied_at_station = (row.total_fleet - row.cars_on_trip).max(0);
                LocationOccupancyResponse {
                    city: row.city,
                    address: row.address,
                    max_capacity: row.max_capacity,
                    total_fleet: row.total_fleet,
                    cars_on_trip: row.cars_on_trip,
                    free_spots: row.max_capacity as i64 - occupied_at_station,
                }
            })
            .collect();

        // 2. Serie temporal de ingresos/reservas en la ventana del período
        let (start, end) = period.window(today);
        let rows = self
            .repository
            .booking_stat_rows(start, end, query.location_id, query.car_class.as_deref())
            .await?;

        let raw: Vec<_> = rows
            .iter()
            .map(|r| (r.start_date, r.total_price.to_string().parse().unwrap_or(0.0)))
            .collect();

        let series = aggregate_series(&raw, period.granularity(), metric)
            .into_iter()
            .map(|(label, value)| SeriesPointResponse { label, value })
            .collect();

        // 3. Resumen de costos de mantenimiento por auto
        let maintenance_totals = self
            .repository
            .maintenance_totals()
            .await?
            .into_iter()
            .map(|row| MaintenanceTotalResponse {
                car_id: row.id,
                car_name: format!("{} {}", row.brand, row.model),
                year: row.year,
                total_cost: row.total_cost.to_string().parse().unwrap_or(0.0),
            })
            .collect();

        // 4. Historial de mantenimiento del auto seleccionado
        let maintenance_history = match query.maintenance_car_id {
            Some(car_id) => {
                self.cars
                    .find_by_id(car_id)
                    .await?
                    .ok_or_else(|| AppError::NotFound("Auto no encontrado".to_string()))?;

                let records = self.maintenance.list_by_car(car_id).await?;
                Some(
                    records
                        .into_iter()
                        .map(|r| MaintenanceHistoryPoint {
                            date: r.date.format("%d.%m.%Y").to_string(),
                            cost: r.cost.to_string().parse().unwrap_or(0.0),
                        })
                        .collect(),
                )
            }
            None => None,
        };

        let car_classes = self.repository.distinct_car_classes().await?;

        Ok(StatisticsResponse {
            location_stats,
            series,
            car_classes,
            maintenance_totals,
            maintenance_history,
            current_period: period.as_str().to_string(),
            current_metric: metric.as_str().to_string(),
            current_location: query.location_id,
            current_class: query.car_class,
            current_maintenance_car: query.maintenance_car_id,
        })
    }
}
