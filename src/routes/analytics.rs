use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::analytics::SellerSummary,
    error::AppResult,
    middleware::auth::AuthUser,
    response::ApiResponse,
    services::analytics_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/summary", get(seller_summary))
}

#[utoipa::path(
    get,
    path = "/api/analytics/summary",
    responses(
        (status = 200, description = "Dashboard counters of the seller", body = ApiResponse<SellerSummary>),
        (status = 401, description = "Unauthorized"),
    ),
    security(("bearer_auth" = [])),
    tag = "Analytics"
)]
pub async fn seller_summary(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<SellerSummary>>> {
    let resp = analytics_service::seller_summary(&state, &user).await?;
    Ok(Json(resp))
}
