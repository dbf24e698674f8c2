use axum::{
    extract::{Path, Query, State},
    middleware,
    routing::{delete, get, post, put},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::car_controller::CarController;
use crate::dto::auth_dto::ApiResponse;
use crate::dto::car_dto::{
    CarResponse, CreateCarRequest, FleetQuery, PopularQuery, UpdateCarRequest,
};
use crate::middleware::auth::auth_middleware;
use crate::models::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_car_router(state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/", get(list_fleet))
        .route("/popular", get(list_popular))
        .route("/:id", get(get_car));

    let protected = Router::new()
        .route("/", post(create_car))
        .route("/:id", put(update_car))
        .route("/:id", delete(delete_car))
        .layer(middleware::from_fn_with_state(state, auth_middleware));

    public.merge(protected)
}

async fn list_fleet(
    State(state): State<AppState>,
    Query(query): Query<FleetQuery>,
) -> Result<Json<Vec<CarResponse>>, AppError> {
    let controller = CarController::new(state.pool.clone());
    let response = controller.list_fleet(query.class).await?;
    Ok(Json(response))
}

async fn list_popular(
    State(state): State<AppState>,
    Query(query): Query<PopularQuery>,
) -> Result<Json<Vec<CarResponse>>, AppError> {
    let controller = CarController::new(state.pool.clone());
    let response = controller.list_popular(query.limit).await?;
    Ok(Json(response))
}

async fn get_car(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CarResponse>, AppError> {
    let controller = CarController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn create_car(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(request): Json<CreateCarRequest>,
) -> Result<Json<ApiResponse<CarResponse>>, AppError> {
    let controller = CarController::new(state.pool.clone());
    let response = controller.create(&auth, request).await?;
    Ok(Json(response))
}

async fn update_car(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateCarRequest>,
) -> Result<Json<ApiResponse<CarResponse>>, AppError> {
    let controller = CarController::new(state.pool.clone());
    let response = controller.update(&auth, id, request).await?;
    Ok(Json(response))
}

async fn delete_car(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = CarController::new(state.pool.clone());
    controller.delete(&auth, id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Auto eliminado exitosamente."
    })))
}
