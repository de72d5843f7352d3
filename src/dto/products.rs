use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    domain::{colors::is_hex_color, ordering::ProductStatus},
    error::AppError,
    models::Product,
};

/// Upper bound on ids accepted by batch endpoints.
pub const MAX_BATCH_SIZE: usize = 100;

/// One color choice. Exactly one of the two fields must be set.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ColorSelection {
    pub standard_color_id: Option<Uuid>,
    pub custom_hex: Option<String>,
}

impl ColorSelection {
    fn validate(&self) -> Result<(), AppError> {
        match (&self.standard_color_id, &self.custom_hex) {
            (Some(_), None) => Ok(()),
            (None, Some(hex)) if is_hex_color(hex) => Ok(()),
            (None, Some(hex)) => Err(AppError::BadRequest(format!(
                "Invalid color hex code: {hex}"
            ))),
            _ => Err(AppError::BadRequest(
                "Each color needs either standard_color_id or custom_hex".into(),
            )),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    pub title: String,
    pub description: Option<String>,
    pub price: i64,
    pub currency: Option<String>,
    pub status: Option<ProductStatus>,
    pub template: Option<String>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub sizes: Vec<String>,
    pub quantity: i32,
    pub min_order_quantity: Option<i32>,
    pub max_order_quantity: Option<i32>,
    #[serde(default)]
    pub colors: Vec<ColorSelection>,
}

impl CreateProductRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_title(&self.title)?;
        validate_price(self.price)?;
        validate_stock(self.quantity)?;
        if let Some(currency) = &self.currency {
            validate_currency(currency)?;
        }
        validate_order_bounds(self.min_order_quantity.unwrap_or(1), self.max_order_quantity)?;
        self.colors.iter().try_for_each(ColorSelection::validate)
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateProductRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<i64>,
    pub currency: Option<String>,
    pub template: Option<String>,
    pub image_url: Option<String>,
    pub features: Option<Vec<String>>,
    pub sizes: Option<Vec<String>>,
    pub quantity: Option<i32>,
    pub min_order_quantity: Option<i32>,
    pub max_order_quantity: Option<i32>,
    #[serde(default)]
    pub clear_max_order_quantity: bool,
    /// Replaces every color of the product when present.
    pub colors: Option<Vec<ColorSelection>>,
}

impl UpdateProductRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(title) = &self.title {
            validate_title(title)?;
        }
        if let Some(price) = self.price {
            validate_price(price)?;
        }
        if let Some(quantity) = self.quantity {
            validate_stock(quantity)?;
        }
        if let Some(currency) = &self.currency {
            validate_currency(currency)?;
        }
        if let Some(colors) = &self.colors {
            colors.iter().try_for_each(ColorSelection::validate)?;
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProductStatusRequest {
    pub status: ProductStatus,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ArchiveProductRequest {
    #[serde(alias = "productId")]
    pub product_id: Uuid,
    #[serde(default = "default_true")]
    pub archived: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveProductResponse {
    pub archived: bool,
    pub product_id: Uuid,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct BatchDeleteRequest {
    #[serde(alias = "productIds")]
    pub product_ids: Vec<Uuid>,
}

impl BatchDeleteRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_batch(&self.product_ids, "product_ids")
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RemovalCounts {
    pub deleted: usize,
    pub archived: usize,
    pub skipped: usize,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BatchDeleteResponse {
    pub deleted_ids: Vec<Uuid>,
    pub archived_ids: Vec<Uuid>,
    pub skipped_ids: Vec<Uuid>,
    pub counts: RemovalCounts,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductList {
    pub items: Vec<Product>,
}

pub fn validate_batch(ids: &[Uuid], field: &str) -> Result<(), AppError> {
    if ids.is_empty() {
        return Err(AppError::BadRequest(format!("{field} must not be empty")));
    }
    if ids.len() > MAX_BATCH_SIZE {
        return Err(AppError::BadRequest(format!(
            "{field} accepts at most {MAX_BATCH_SIZE} ids"
        )));
    }
    Ok(())
}

fn validate_title(title: &str) -> Result<(), AppError> {
    if title.trim().is_empty() {
        return Err(AppError::BadRequest("Title is required".into()));
    }
    Ok(())
}

fn validate_price(price: i64) -> Result<(), AppError> {
    if price < 0 {
        return Err(AppError::BadRequest("Price cannot be negative".into()));
    }
    Ok(())
}

fn validate_stock(quantity: i32) -> Result<(), AppError> {
    if quantity < 0 {
        return Err(AppError::BadRequest("Quantity cannot be negative".into()));
    }
    Ok(())
}

fn validate_currency(currency: &str) -> Result<(), AppError> {
    if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(AppError::BadRequest(
            "Currency must be a 3-letter code".into(),
        ));
    }
    Ok(())
}

pub fn validate_order_bounds(min: i32, max: Option<i32>) -> Result<(), AppError> {
    if min < 1 {
        return Err(AppError::BadRequest(
            "Minimum order quantity must be at least 1".into(),
        ));
    }
    if let Some(max) = max {
        if max < min {
            return Err(AppError::BadRequest(
                "Maximum order quantity cannot be below the minimum".into(),
            ));
        }
    }
    Ok(())
}
