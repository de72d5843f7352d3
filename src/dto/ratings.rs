use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{domain::ratings::is_valid_score, error::AppError, models::Rating};

#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitRatingRequest {
    pub order_id: Uuid,
    /// Must match the email the order was placed with.
    pub customer_email: String,
    pub score: i32,
    pub comment: Option<String>,
}

impl SubmitRatingRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if !is_valid_score(self.score) {
            return Err(AppError::BadRequest("Score must be between 1 and 5".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RatingList {
    pub items: Vec<Rating>,
}
