use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Default, Serialize, ToSchema)]
pub struct ProductCounts {
    pub total: i64,
    pub draft: i64,
    pub active: i64,
    pub inactive: i64,
    pub archived: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StatusCount {
    pub status: String,
    pub count: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SellerSummary {
    pub products: ProductCounts,
    pub orders: Vec<StatusCount>,
    pub order_count: i64,
    /// Sum of order totals, cancelled orders excluded.
    pub revenue: i64,
    pub views_total: i64,
    pub views_last_7_days: i64,
}
