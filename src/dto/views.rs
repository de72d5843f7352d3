use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::domain::views::ViewPeriod;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RecordViewRequest {
    #[serde(alias = "productId")]
    pub product_id: Uuid,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RecordViewResponse {
    pub success: bool,
}

/// Request metadata stored with a view.
#[derive(Debug, Clone, Default)]
pub struct ViewContext {
    pub viewer_id: Option<Uuid>,
    pub session_id: Option<String>,
    pub user_agent: Option<String>,
    pub referrer: Option<String>,
    pub ip_address: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct ViewCountQuery {
    #[serde(alias = "productId")]
    pub product_id: Option<Uuid>,
    pub period: Option<ViewPeriod>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ViewCount {
    pub product_id: Uuid,
    pub count: i64,
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct DailyViewsQuery {
    #[serde(alias = "productId")]
    pub product_id: Option<Uuid>,
    pub days: Option<i64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DailyViewBucket {
    pub day: NaiveDate,
    pub count: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DailyViews {
    pub product_id: Uuid,
    pub days: Vec<DailyViewBucket>,
}
