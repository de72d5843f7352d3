use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    domain::ordering::OrderStatus,
    dto::products::validate_batch,
    error::AppError,
    models::Order,
};

/// Customer order submitted from a landing page.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    pub product_id: Uuid,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub shipping_address: String,
    pub city: String,
    pub postal_code: Option<String>,
    pub country: String,
    pub quantity: i32,
    pub size: Option<String>,
    pub color: Option<String>,
    pub notes: Option<String>,
}

impl CreateOrderRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        for (value, field) in [
            (&self.customer_name, "customer_name"),
            (&self.customer_email, "customer_email"),
            (&self.shipping_address, "shipping_address"),
            (&self.city, "city"),
            (&self.country, "country"),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::BadRequest(format!("{field} is required")));
            }
        }
        if !self.customer_email.contains('@') {
            return Err(AppError::BadRequest("customer_email is invalid".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateOrderStatusRequest {
    pub status: String,
}

impl UpdateOrderStatusRequest {
    pub fn parse(&self) -> Result<OrderStatus, AppError> {
        parse_status(&self.status)
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct BatchStatusRequest {
    #[serde(alias = "orderIds")]
    pub order_ids: Vec<Uuid>,
    pub status: String,
}

impl BatchStatusRequest {
    pub fn parse(&self) -> Result<OrderStatus, AppError> {
        validate_batch(&self.order_ids, "order_ids")?;
        parse_status(&self.status)
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BatchStatusResponse {
    pub updated_ids: Vec<Uuid>,
    pub count: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderList {
    pub items: Vec<Order>,
}

fn parse_status(raw: &str) -> Result<OrderStatus, AppError> {
    raw.parse::<OrderStatus>()
        .map_err(|err| AppError::BadRequest(err.to_string()))
}
