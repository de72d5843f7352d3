use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    error::AppResult,
    models::ProductWithColors,
    response::ApiResponse,
    services::product_service,
    state::AppState,
};

#[utoipa::path(
    get,
    path = "/api/products-by-slug/{slug}/public",
    params(("slug" = String, Path, description = "Product slug")),
    responses(
        (status = 200, description = "Public product with resolved colors", body = ApiResponse<ProductWithColors>),
        (status = 403, description = "Product inactive or archived"),
        (status = 404, description = "Product not found"),
    ),
    tag = "Storefront"
)]
pub async fn get_product_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<ApiResponse<ProductWithColors>>> {
    let resp = product_service::get_public_by_slug(&state, &slug).await?;
    Ok(Json(resp))
}
