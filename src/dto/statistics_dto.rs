use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Parámetros de la página de estadísticas
#[derive(Debug, Deserialize)]
pub struct StatisticsQuery {
    pub period: Option<String>,
    pub metric: Option<String>,
    pub location_id: Option<Uuid>,
    pub car_class: Option<String>,
    pub maintenance_car_id: Option<Uuid>,
}

// Ocupación por locación
#[derive(Debug, Serialize)]
pub struct LocationOccupancyResponse {
    pub city: String,
    pub address: String,
    pub max_capacity: i32,
    pub total_fleet: i64,
    pub cars_on_trip: i64,
    pub free_spots: i64,
}

// Punto de la serie temporal, listo para graficar
#[derive(Debug, Serialize)]
pub struct SeriesPointResponse {
    pub label: String,
    pub value: f64,
}

// Costo total de mantenimiento por auto
#[derive(Debug, Serialize)]
pub struct MaintenanceTotalResponse {
    pub car_id: Uuid,
    pub car_name: String,
    pub year: i32,
    pub total_cost: f64,
}

// Punto del historial de mantenimiento de un auto
#[derive(Debug, Serialize)]
pub struct MaintenanceHistoryPoint {
    pub date: String,
    pub cost: f64,
}

// Contexto completo de la página de estadísticas
#[derive(Debug, Serialize)]
pub struct StatisticsResponse {
    pub location_stats: Vec<LocationOccupancyResponse>,
    pub series: Vec<SeriesPointResponse>,
    pub car_classes: Vec<String>,
    pub maintenance_totals: Vec<MaintenanceTotalResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_history: Option<Vec<MaintenanceHistoryPoint>>,
    pub current_period: String,
    pub current_metric: String,
    pub current_location: Option<Uuid>,
    pub current_class: Option<String>,
    pub current_maintenance_car: Option<Uuid>,
}
