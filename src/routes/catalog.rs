use axum::{
    Json, Router,
    extract::State,
    routing::get,
};

use crate::{
    dto::catalog::{ColorList, SizeCategoryList, SizeList, SizeQuery},
    error::AppResult,
    middleware::extract::AppQuery,
    response::ApiResponse,
    services::catalog_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/colors", get(list_colors))
        .route("/size-categories", get(list_size_categories))
        .route("/sizes", get(list_sizes))
}

#[utoipa::path(
    get,
    path = "/api/catalog/colors",
    responses((status = 200, description = "Standard colors", body = ApiResponse<ColorList>)),
    tag = "Catalog"
)]
pub async fn list_colors(State(state): State<AppState>) -> AppResult<Json<ApiResponse<ColorList>>> {
    let resp = catalog_service::list_colors(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/catalog/size-categories",
    responses((status = 200, description = "Size categories", body = ApiResponse<SizeCategoryList>)),
    tag = "Catalog"
)]
pub async fn list_size_categories(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<SizeCategoryList>>> {
    let resp = catalog_service::list_size_categories(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/catalog/sizes",
    params(SizeQuery),
    responses((status = 200, description = "Standard sizes", body = ApiResponse<SizeList>)),
    tag = "Catalog"
)]
pub async fn list_sizes(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<SizeQuery>,
) -> AppResult<Json<ApiResponse<SizeList>>> {
    let resp = catalog_service::list_sizes(&state, query).await?;
    Ok(Json(resp))
}
