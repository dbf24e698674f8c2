use axum::{
    extract::{Path, State},
    middleware,
    routing::{get, post},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::maintenance_controller::MaintenanceController;
use crate::dto::auth_dto::ApiResponse;
use crate::dto::maintenance_dto::{CreateMaintenanceRequest, MaintenanceResponse};
use crate::middleware::auth::auth_middleware;
use crate::models::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_maintenance_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", post(create_maintenance))
        .route("/car/:car_id", get(list_maintenance_by_car))
        .layer(middleware::from_fn_with_state(state, auth_middleware))
}

async fn create_maintenance(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(request): Json<CreateMaintenanceRequest>,
) -> Result<Json<ApiResponse<MaintenanceResponse>>, AppError> {
    let controller = MaintenanceController::new(state.pool.clone());
    let response = controller.create(&auth, request).await?;
    Ok(Json(response))
}

async fn list_maintenance_by_car(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(car_id): Path<Uuid>,
) -> Result<Json<Vec<MaintenanceResponse>>, AppError> {
    let controller = MaintenanceController::new(state.pool.clone());
    let response = controller.list_by_car(&auth, car_id).await?;
    Ok(Json(response))
}
