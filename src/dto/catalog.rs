use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::models::{SizeCategory, StandardColor, StandardSize};

#[derive(Debug, Serialize, ToSchema)]
pub struct ColorList {
    pub items: Vec<StandardColor>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SizeCategoryList {
    pub items: Vec<SizeCategory>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SizeList {
    pub items: Vec<StandardSize>,
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct SizeQuery {
    pub category_id: Option<Uuid>,
}
