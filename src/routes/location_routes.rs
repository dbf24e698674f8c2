use axum::{
    extract::State,
    middleware,
    routing::{get, post},
    Extension, Json, Router,
};

use crate::controllers::location_controller::LocationController;
use crate::dto::auth_dto::ApiResponse;
use crate::dto::location_dto::{CreateLocationRequest, LocationResponse};
use crate::middleware::auth::auth_middleware;
use crate::models::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_location_router(state: AppState) -> Router<AppState> {
    let public = Router::new().route("/", get(list_locations));

    let protected = Router::new()
        .route("/", post(create_location))
        .layer(middleware::from_fn_with_state(state, auth_middleware));

    public.merge(protected)
}

async fn list_locations(
    State(state): State<AppState>,
) -> Result<Json<Vec<LocationResponse>>, AppError> {
    let controller = LocationController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn create_location(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(request): Json<CreateLocationRequest>,
) -> Result<Json<ApiResponse<LocationResponse>>, AppError> {
    let controller = LocationController::new(state.pool.clone());
    let response = controller.create(&auth, request).await?;
    Ok(Json(response))
}
