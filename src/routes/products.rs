use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get, patch, post},
};
use uuid::Uuid;

use crate::{
    dto::{
        products::{
            ArchiveProductRequest, ArchiveProductResponse, BatchDeleteRequest,
            BatchDeleteResponse, CreateProductRequest, ProductList, UpdateProductRequest,
            UpdateProductStatusRequest,
        },
        ratings::RatingList,
    },
    error::AppResult,
    middleware::{
        auth::AuthUser,
        extract::{AppJson, AppQuery},
    },
    models::{Product, ProductWithColors},
    response::ApiResponse,
    routes::params::{Pagination, ProductListQuery},
    services::{product_service, rating_service},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/archive", post(archive_product))
        .route("/batch-delete", delete(batch_delete_products))
        .route("/{id}", get(get_product).put(update_product))
        .route("/{id}/status", patch(update_product_status))
        .route("/{id}/ratings", get(list_product_ratings))
}

#[utoipa::path(
    get,
    path = "/api/products",
    params(ProductListQuery),
    responses(
        (status = 200, description = "Seller's products", body = ApiResponse<ProductList>),
        (status = 401, description = "Unauthorized"),
    ),
    security(("bearer_auth" = [])),
    tag = "Products"
)]
pub async fn list_products(
    State(state): State<AppState>,
    user: AuthUser,
    AppQuery(query): AppQuery<ProductListQuery>,
) -> AppResult<Json<ApiResponse<ProductList>>> {
    let resp = product_service::list_products(&state, &user, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/products",
    request_body = CreateProductRequest,
    responses(
        (status = 200, description = "Product created", body = ApiResponse<ProductWithColors>),
        (status = 400, description = "Invalid product"),
        (status = 401, description = "Unauthorized"),
    ),
    security(("bearer_auth" = [])),
    tag = "Products"
)]
pub async fn create_product(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(payload): AppJson<CreateProductRequest>,
) -> AppResult<Json<ApiResponse<ProductWithColors>>> {
    let resp = product_service::create_product(&state, &user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(("id" = Uuid, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product with resolved colors", body = ApiResponse<ProductWithColors>),
        (status = 404, description = "Product not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Products"
)]
pub async fn get_product(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<ProductWithColors>>> {
    let resp = product_service::get_product(&state, &user, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/products/{id}",
    params(("id" = Uuid, Path, description = "Product ID")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Updated product", body = ApiResponse<ProductWithColors>),
        (status = 400, description = "Invalid update"),
        (status = 404, description = "Product not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Products"
)]
pub async fn update_product(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    AppJson(payload): AppJson<UpdateProductRequest>,
) -> AppResult<Json<ApiResponse<ProductWithColors>>> {
    let resp = product_service::update_product(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    patch,
    path = "/api/products/{id}/status",
    params(("id" = Uuid, Path, description = "Product ID")),
    request_body = UpdateProductStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = ApiResponse<Product>),
        (status = 404, description = "Product not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Products"
)]
pub async fn update_product_status(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    AppJson(payload): AppJson<UpdateProductStatusRequest>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let resp = product_service::update_status(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/products/archive",
    request_body = ArchiveProductRequest,
    responses(
        (status = 200, description = "Archive flag changed", body = ApiResponse<ArchiveProductResponse>),
        (status = 404, description = "Product not found or not owned"),
    ),
    security(("bearer_auth" = [])),
    tag = "Products"
)]
pub async fn archive_product(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(payload): AppJson<ArchiveProductRequest>,
) -> AppResult<Json<ApiResponse<ArchiveProductResponse>>> {
    let resp = product_service::set_archived(&state, &user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/products/batch-delete",
    request_body = BatchDeleteRequest,
    responses(
        (status = 200, description = "Ordered products archived, the rest deleted", body = ApiResponse<BatchDeleteResponse>),
        (status = 400, description = "Empty or oversized id list"),
    ),
    security(("bearer_auth" = [])),
    tag = "Products"
)]
pub async fn batch_delete_products(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(payload): AppJson<BatchDeleteRequest>,
) -> AppResult<Json<ApiResponse<BatchDeleteResponse>>> {
    let resp = product_service::batch_delete(&state, &user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}/ratings",
    params(("id" = Uuid, Path, description = "Product ID"), Pagination),
    responses(
        (status = 200, description = "Ratings of the product", body = ApiResponse<RatingList>),
        (status = 404, description = "Product not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Ratings"
)]
pub async fn list_product_ratings(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    AppQuery(pagination): AppQuery<Pagination>,
) -> AppResult<Json<ApiResponse<RatingList>>> {
    let resp = rating_service::list_product_ratings(&state, &user, id, pagination).await?;
    Ok(Json(resp))
}
