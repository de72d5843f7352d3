use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};
use uuid::Uuid;

use crate::{
    domain::{
        ordering::OrderStatus,
        ratings::{RatingSummary, summarize},
    },
    dto::ratings::{RatingList, SubmitRatingRequest},
    entity::{
        orders::Entity as Orders,
        products::{Column as ProdCol, Entity as Products},
        ratings::{ActiveModel as RatingActive, Column as RatingCol, Entity as Ratings},
    },
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::Rating,
    response::{ApiResponse, Meta},
    routes::params::Pagination,
    services::product_service::find_owned,
    state::AppState,
};

/// Creates or replaces the rating of an order and refreshes the product aggregates.
pub async fn submit_rating(
    state: &AppState,
    payload: SubmitRatingRequest,
) -> AppResult<ApiResponse<Rating>> {
    payload.validate()?;

    let txn = state.db().begin().await?;

    let order = Orders::find_by_id(payload.order_id)
        .one(&txn)
        .await?
        .ok_or(AppError::NotFound)?;

    if !order
        .customer_email
        .eq_ignore_ascii_case(payload.customer_email.trim())
    {
        return Err(AppError::Forbidden);
    }

    let status = order
        .status
        .parse::<OrderStatus>()
        .map_err(|err| AppError::Internal(err.into()))?;
    if !status.allows_rating() {
        return Err(AppError::BadRequest(
            "Only delivered or completed orders can be rated".into(),
        ));
    }

    let existing = Ratings::find()
        .filter(RatingCol::OrderId.eq(order.id))
        .one(&txn)
        .await?;

    let rating = match existing {
        Some(existing) => {
            let mut active: RatingActive = existing.into();
            active.score = Set(payload.score);
            active.comment = Set(payload.comment);
            active.updated_at = Set(Utc::now().into());
            active.update(&txn).await?
        }
        None => {
            RatingActive {
                id: Set(Uuid::new_v4()),
                order_id: Set(order.id),
                product_id: Set(order.product_id),
                score: Set(payload.score),
                comment: Set(payload.comment),
                created_at: NotSet,
                updated_at: NotSet,
            }
            .insert(&txn)
            .await?
        }
    };

    let summary = recompute_product_rating(&txn, order.product_id).await?;
    txn.commit().await?;

    tracing::info!(
        product_id = %order.product_id,
        average = summary.average,
        count = summary.count,
        "product rating recomputed"
    );

    Ok(ApiResponse::item("Rating saved", Rating::from(rating)))
}

/// Rebuilds `average_rating` / `rating_count` from every rating of the product.
pub async fn recompute_product_rating<C>(db: &C, product_id: Uuid) -> AppResult<RatingSummary>
where
    C: ConnectionTrait,
{
    let scores: Vec<i32> = Ratings::find()
        .select_only()
        .column(RatingCol::Score)
        .filter(RatingCol::ProductId.eq(product_id))
        .into_tuple::<i32>()
        .all(db)
        .await?;

    let summary = summarize(&scores);

    Products::update_many()
        .col_expr(ProdCol::AverageRating, Expr::value(summary.average))
        .col_expr(ProdCol::RatingCount, Expr::value(summary.count))
        .filter(ProdCol::Id.eq(product_id))
        .exec(db)
        .await?;

    Ok(summary)
}

pub async fn list_product_ratings(
    state: &AppState,
    user: &AuthUser,
    product_id: Uuid,
    pagination: Pagination,
) -> AppResult<ApiResponse<RatingList>> {
    let product = find_owned(state.db(), user, product_id).await?;
    let (page, limit, offset) = pagination.normalize();

    let finder = Ratings::find().filter(RatingCol::ProductId.eq(product.id));
    let total = finder.clone().count(state.db()).await? as i64;

    let items: Vec<Rating> = finder
        .order_by_desc(RatingCol::CreatedAt)
        .limit(limit as u64)
        .offset(offset as u64)
        .all(state.db())
        .await?
        .into_iter()
        .map(Rating::from)
        .collect();

    Ok(ApiResponse::success(
        "Ratings",
        RatingList { items },
        Some(Meta::new(page, limit, total)),
    ))
}
