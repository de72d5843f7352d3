use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    domain::{
        ordering::{OrderStatus, ProductStatus},
        views::ViewPeriod,
    },
    dto::{
        analytics::{ProductCounts, SellerSummary, StatusCount},
        catalog::{ColorList, SizeCategoryList, SizeList},
        orders::{BatchStatusRequest, BatchStatusResponse, CreateOrderRequest, OrderList, UpdateOrderStatusRequest},
        products::{
            ArchiveProductRequest, ArchiveProductResponse, BatchDeleteRequest, BatchDeleteResponse,
            ColorSelection, CreateProductRequest, ProductList, RemovalCounts, UpdateProductRequest,
            UpdateProductStatusRequest,
        },
        ratings::{RatingList, SubmitRatingRequest},
        views::{DailyViewBucket, DailyViews, RecordViewRequest, RecordViewResponse, ViewCount},
    },
    models::{
        ColorDescriptor, Order, Product, ProductWithColors, Rating, SizeCategory, StandardColor,
        StandardSize,
    },
    response::{ApiResponse, Meta},
    routes::{analytics, catalog, health, orders, params, products, public, ratings, views},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        products::list_products,
        products::create_product,
        products::get_product,
        products::update_product,
        products::update_product_status,
        products::archive_product,
        products::batch_delete_products,
        products::list_product_ratings,
        public::get_product_by_slug,
        orders::create_order,
        orders::list_orders,
        orders::get_order,
        orders::update_order_status,
        orders::batch_update_status,
        ratings::submit_rating,
        views::record_view,
        views::count_views,
        views::daily_views,
        catalog::list_colors,
        catalog::list_size_categories,
        catalog::list_sizes,
        analytics::seller_summary
    ),
    components(
        schemas(
            Product,
            ProductWithColors,
            ColorDescriptor,
            StandardColor,
            SizeCategory,
            StandardSize,
            Order,
            Rating,
            OrderStatus,
            ProductStatus,
            ViewPeriod,
            ColorSelection,
            CreateProductRequest,
            UpdateProductRequest,
            UpdateProductStatusRequest,
            ArchiveProductRequest,
            ArchiveProductResponse,
            BatchDeleteRequest,
            BatchDeleteResponse,
            RemovalCounts,
            ProductList,
            CreateOrderRequest,
            UpdateOrderStatusRequest,
            BatchStatusRequest,
            BatchStatusResponse,
            OrderList,
            SubmitRatingRequest,
            RatingList,
            RecordViewRequest,
            RecordViewResponse,
            ViewCount,
            DailyViews,
            DailyViewBucket,
            ColorList,
            SizeCategoryList,
            SizeList,
            ProductCounts,
            StatusCount,
            SellerSummary,
            params::Pagination,
            params::SortOrder,
            Meta,
            ApiResponse<ProductWithColors>,
            ApiResponse<ProductList>,
            ApiResponse<Order>,
            ApiResponse<OrderList>,
            ApiResponse<BatchDeleteResponse>
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Products", description = "Seller product management"),
        (name = "Storefront", description = "Public landing-page data"),
        (name = "Orders", description = "Order placement and fulfilment"),
        (name = "Ratings", description = "Customer ratings"),
        (name = "Views", description = "Page view tracking"),
        (name = "Catalog", description = "Shared color and size vocabularies"),
        (name = "Analytics", description = "Seller dashboard counters"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
