use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entity::{
    orders, products, ratings, size_categories, standard_colors, standard_sizes,
};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: Uuid,
    pub seller_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    /// Minor currency units.
    pub price: i64,
    pub currency: String,
    pub status: String,
    pub template: String,
    pub image_url: Option<String>,
    pub features: Vec<String>,
    pub slug: String,
    pub sizes: Vec<String>,
    pub quantity: i32,
    pub min_order_quantity: i32,
    pub max_order_quantity: Option<i32>,
    pub average_rating: f64,
    pub rating_count: i32,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Resolved color as shown on a landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ColorDescriptor {
    pub id: String,
    pub name: String,
    pub hex_code: String,
    pub custom: bool,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProductWithColors {
    #[serde(flatten)]
    pub product: Product,
    pub colors: Vec<ColorDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StandardColor {
    pub id: Uuid,
    pub name: String,
    pub hex_code: String,
    pub sort_order: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SizeCategory {
    pub id: Uuid,
    pub name: String,
    pub sort_order: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StandardSize {
    pub id: Uuid,
    pub category_id: Uuid,
    pub label: String,
    pub sort_order: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Order {
    pub id: Uuid,
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
    pub unit_price: i64,
    pub total: i64,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Rating {
    pub id: Uuid,
    pub order_id: Uuid,
    pub product_id: Uuid,
    pub score: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn string_list(value: Value) -> Vec<String> {
    serde_json::from_value(value).unwrap_or_default()
}

impl From<products::Model> for Product {
    fn from(model: products::Model) -> Self {
        Product {
            id: model.id,
            seller_id: model.seller_id,
            title: model.title,
            description: model.description,
            price: model.price,
            currency: model.currency,
            status: model.status,
            template: model.template,
            image_url: model.image_url,
            features: string_list(model.features),
            slug: model.slug,
            sizes: string_list(model.sizes),
            quantity: model.quantity,
            min_order_quantity: model.min_order_quantity,
            max_order_quantity: model.max_order_quantity,
            average_rating: model.average_rating,
            rating_count: model.rating_count,
            is_deleted: model.is_deleted,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

impl From<standard_colors::Model> for StandardColor {
    fn from(model: standard_colors::Model) -> Self {
        StandardColor {
            id: model.id,
            name: model.name,
            hex_code: model.hex_code,
            sort_order: model.sort_order,
        }
    }
}

impl From<size_categories::Model> for SizeCategory {
    fn from(model: size_categories::Model) -> Self {
        SizeCategory {
            id: model.id,
            name: model.name,
            sort_order: model.sort_order,
        }
    }
}

impl From<standard_sizes::Model> for StandardSize {
    fn from(model: standard_sizes::Model) -> Self {
        StandardSize {
            id: model.id,
            category_id: model.category_id,
            label: model.label,
            sort_order: model.sort_order,
        }
    }
}

impl From<orders::Model> for Order {
    fn from(model: orders::Model) -> Self {
        Order {
            id: model.id,
            product_id: model.product_id,
            customer_name: model.customer_name,
            customer_email: model.customer_email,
            customer_phone: model.customer_phone,
            shipping_address: model.shipping_address,
            city: model.city,
            postal_code: model.postal_code,
            country: model.country,
            quantity: model.quantity,
            size: model.size,
            color: model.color,
            notes: model.notes,
            unit_price: model.unit_price,
            total: model.total,
            status: model.status,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

impl From<ratings::Model> for Rating {
    fn from(model: ratings::Model) -> Self {
        Rating {
            id: model.id,
            order_id: model.order_id,
            product_id: model.product_id,
            score: model.score,
            comment: model.comment,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}
