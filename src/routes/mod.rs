use axum::{Router, routing::get};

use crate::state::AppState;

pub mod analytics;
pub mod catalog;
pub mod doc;
pub mod health;
pub mod orders;
pub mod params;
pub mod products;
pub mod public;
pub mod ratings;
pub mod views;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/products", products::router())
        .route(
            "/products-by-slug/{slug}/public",
            get(public::get_product_by_slug),
        )
        .nest("/orders", orders::router())
        .nest("/ratings", ratings::router())
        .nest("/product-views", views::router())
        .nest("/catalog", catalog::router())
        .nest("/analytics", analytics::router())
}
