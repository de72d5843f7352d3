use axum::{Json, Router, extract::State, routing::post};

use crate::{
    dto::ratings::SubmitRatingRequest,
    error::AppResult,
    middleware::extract::AppJson,
    models::Rating,
    response::ApiResponse,
    services::rating_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(submit_rating))
}

#[utoipa::path(
    post,
    path = "/api/ratings",
    request_body = SubmitRatingRequest,
    responses(
        (status = 200, description = "Rating stored and product aggregates refreshed", body = ApiResponse<Rating>),
        (status = 400, description = "Invalid score or order not fulfilled"),
        (status = 403, description = "Email does not match the order"),
        (status = 404, description = "Order not found"),
    ),
    tag = "Ratings"
)]
pub async fn submit_rating(
    State(state): State<AppState>,
    AppJson(payload): AppJson<SubmitRatingRequest>,
) -> AppResult<Json<ApiResponse<Rating>>> {
    let resp = rating_service::submit_rating(&state, payload).await?;
    Ok(Json(resp))
}
