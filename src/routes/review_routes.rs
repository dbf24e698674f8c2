use axum::{
    extract::{Path, State},
    middleware,
    routing::{get, post},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::review_controller::ReviewController;
use crate::dto::auth_dto::ApiResponse;
use crate::dto::review_dto::{CreateReviewRequest, ReviewResponse};
use crate::middleware::auth::auth_middleware;
use crate::models::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_review_router(state: AppState) -> Router<AppState> {
    let public = Router::new().route("/car/:car_id", get(list_reviews_by_car));

    let protected = Router::new()
        .route("/booking/:booking_id", post(create_review))
        .layer(middleware::from_fn_with_state(state, auth_middleware));

    public.merge(protected)
}

async fn create_review(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(booking_id): Path<Uuid>,
    Json(request): Json<CreateReviewRequest>,
) -> Result<Json<ApiResponse<ReviewResponse>>, AppError> {
    let controller = ReviewController::new(state.pool.clone());
    let response = controller.create(&auth, booking_id, request).await?;
    Ok(Json(response))
}

async fn list_reviews_by_car(
    State(state): State<AppState>,
    Path(car_id): Path<Uuid>,
) -> Result<Json<Vec<ReviewResponse>>, AppError> {
    let controller = ReviewController::new(state.pool.clone());
    let response = controller.list_by_car(car_id).await?;
    Ok(Json(response))
}
