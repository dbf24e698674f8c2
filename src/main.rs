mod config;
mod controllers;
mod database;
mod dto;
mod middleware;
mod models;
mod repositories;
mod routes;
mod services;
mod state;
mod utils;

use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use config::environment::EnvironmentConfig;
use database::DatabaseConnection;
use middleware::cors::cors_middleware;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚗 Car Rental - API de gestión de alquiler");
    info!("==========================================");

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let pool = db_connection.pool().clone();

    // Crear router de la API
    let app_state = AppState::new(pool, EnvironmentConfig::default());

    let app = Router::new()
        .route("/health", get(health_check))
        .nest("/api/auth", routes::auth_routes::create_auth_router(app_state.clone()))
        .nest("/api/car", routes::car_routes::create_car_router(app_state.clone()))
        .nest("/api/booking", routes::booking_routes::create_booking_router(app_state.clone()))
        .nest("/api/review", routes::review_routes::create_review_router(app_state.clone()))
        .nest("/api/location", routes::location_routes::create_location_router(app_state.clone()))
        .nest("/api/maintenance", routes::maintenance_routes::create_maintenance_router(app_state.clone()))
        .nest("/api/statistics", routes::statistics_routes::create_statistics_router(app_state.clone()))
        .nest("/api/user", routes::user_routes::create_user_router(app_state.clone()))
        .layer(cors_middleware())
        .with_state(app_state);

    // Puerto del servidor
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr: SocketAddr = format!("0.0.0.0:{}", port).parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🔐 Endpoints - Auth:");
    info!("   POST /api/auth/register - Registrar usuario");
    info!("   POST /api/auth/login - Login");
    info!("   GET  /api/auth/me - Usuario actual");
    info!("🚗 Endpoints - Fleet:");
    info!("   GET  /api/car - Listar flota (?class=)");
    info!("   GET  /api/car/popular - Autos populares (?limit=)");
    info!("   GET  /api/car/:id - Detalle de auto");
    info!("   POST /api/car - Crear auto (staff)");
    info!("   PUT  /api/car/:id - Actualizar auto (staff)");
    info!("   DELETE /api/car/:id - Eliminar auto (admin)");
    info!("📅 Endpoints - Bookings:");
    info!("   POST /api/booking - Crear reserva");
    info!("   GET  /api/booking/my - Mis reservas");
    info!("   GET  /api/booking - Listar reservas (staff, ?status=)");
    info!("   PUT  /api/booking/:id/status - Confirmar/cancelar/completar (staff)");
    info!("⭐ Endpoints - Reviews:");
    info!("   POST /api/review/booking/:booking_id - Crear review");
    info!("   GET  /api/review/car/:car_id - Reviews de un auto");
    info!("📍 Endpoints - Locations:");
    info!("   GET  /api/location - Listar locaciones");
    info!("   POST /api/location - Crear locación (staff)");
    info!("🔧 Endpoints - Maintenance:");
    info!("   POST /api/maintenance - Registrar mantenimiento (staff)");
    info!("   GET  /api/maintenance/car/:car_id - Historial por auto (staff)");
    info!("📊 Endpoints - Statistics:");
    info!("   GET  /api/statistics - Reportes (staff, ?period=&metric=&location_id=&car_class=)");
    info!("👤 Endpoints - Users:");
    info!("   GET  /api/user - Listar usuarios (admin)");
    info!("   PUT  /api/user/:id/block - Bloquear/desbloquear (admin)");

    // Iniciar servidor en background
    let server_handle = tokio::spawn(async move {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                error!("❌ Error del servidor: {}", e);
                e
            })
    });

    // Esperar a que el servidor termine
    if let Err(e) = server_handle.await? {
        error!("❌ Servidor terminó con error: {}", e);
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Health check simple
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "service": "car-rental",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
