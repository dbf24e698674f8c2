use axum::{
    extract::{Query, State},
    middleware,
    routing::get,
    Extension, Json, Router,
};

use crate::controllers::statistics_controller::StatisticsController;
use crate::dto::statistics_dto::{StatisticsQuery, StatisticsResponse};
use crate::middleware::auth::auth_middleware;
use crate::models::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_statistics_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(get_statistics))
        .layer(middleware::from_fn_with_state(state, auth_middleware))
}

async fn get_statistics(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Query(query): Query<StatisticsQuery>,
) -> Result<Json<StatisticsResponse>, AppError> {
    let controller = StatisticsController::new(state.pool.clone());
    let response = controller.overview(&auth, query).await?;
    Ok(Json(response))
}
