use chrono::{NaiveDate, Utc};
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::{
    domain::views::{clamp_series_days, fill_daily_buckets, series_start},
    dto::views::{
        DailyViewBucket, DailyViews, DailyViewsQuery, RecordViewResponse, ViewContext, ViewCount,
        ViewCountQuery,
    },
    entity::{
        product_views::ActiveModel as ProductViewActive,
        products::{Column as ProdCol, Entity as Products},
    },
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    response::ApiResponse,
    services::product_service::find_owned,
    state::AppState,
};

/// Appends one page view of a live product.
pub async fn record_view(
    state: &AppState,
    product_id: Uuid,
    context: ViewContext,
) -> AppResult<ApiResponse<RecordViewResponse>> {
    let exists = Products::find_by_id(product_id)
        .filter(ProdCol::IsDeleted.eq(false))
        .one(state.db())
        .await?
        .is_some();
    if !exists {
        return Err(AppError::NotFound);
    }

    ProductViewActive {
        id: Set(Uuid::new_v4()),
        product_id: Set(product_id),
        viewer_id: Set(context.viewer_id),
        session_id: Set(context.session_id),
        viewed_at: NotSet,
        user_agent: Set(context.user_agent),
        referrer: Set(context.referrer),
        ip_address: Set(context.ip_address),
    }
    .insert(state.db())
    .await?;

    Ok(ApiResponse::item(
        "View recorded",
        RecordViewResponse { success: true },
    ))
}

pub async fn count_views(
    state: &AppState,
    user: &AuthUser,
    query: ViewCountQuery,
) -> AppResult<ApiResponse<ViewCount>> {
    let product_id = query
        .product_id
        .ok_or_else(|| AppError::BadRequest("product_id is required".into()))?;
    find_owned(state.db(), user, product_id).await?;

    let since = query.period.unwrap_or_default().since(Utc::now());
    let count: (i64,) = sqlx::query_as(
        r#"
        SELECT COUNT(*)
        FROM product_views
        WHERE product_id = $1
          AND ($2::timestamptz IS NULL OR viewed_at >= $2)
        "#,
    )
    .bind(product_id)
    .bind(since)
    .fetch_one(&state.pool)
    .await?;

    Ok(ApiResponse::item(
        "View count",
        ViewCount {
            product_id,
            count: count.0,
        },
    ))
}

pub async fn daily_views(
    state: &AppState,
    user: &AuthUser,
    query: DailyViewsQuery,
) -> AppResult<ApiResponse<DailyViews>> {
    let product_id = query
        .product_id
        .ok_or_else(|| AppError::BadRequest("product_id is required".into()))?;
    find_owned(state.db(), user, product_id).await?;

    let days = clamp_series_days(query.days);
    let now = Utc::now();
    let rows: Vec<(NaiveDate, i64)> = sqlx::query_as(
        r#"
        SELECT (viewed_at AT TIME ZONE 'UTC')::date AS day, COUNT(*) AS count
        FROM product_views
        WHERE product_id = $1 AND viewed_at >= $2
        GROUP BY 1
        ORDER BY 1
        "#,
    )
    .bind(product_id)
    .bind(series_start(now, days))
    .fetch_all(&state.pool)
    .await?;

    let buckets = fill_daily_buckets(now, days, &rows)
        .into_iter()
        .map(|(day, count)| DailyViewBucket { day, count })
        .collect();

    Ok(ApiResponse::item(
        "Daily views",
        DailyViews {
            product_id,
            days: buckets,
        },
    ))
}
