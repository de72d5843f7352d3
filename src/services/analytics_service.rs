use chrono::{Duration, Utc};

use crate::{
    domain::ordering::OrderStatus,
    dto::analytics::{ProductCounts, SellerSummary, StatusCount},
    error::AppResult,
    middleware::auth::AuthUser,
    response::ApiResponse,
    state::AppState,
};

pub async fn seller_summary(
    state: &AppState,
    user: &AuthUser,
) -> AppResult<ApiResponse<SellerSummary>> {
    let product_rows: Vec<(String, bool, i64)> = sqlx::query_as(
        r#"
        SELECT status, is_deleted, COUNT(*)
        FROM products
        WHERE seller_id = $1
        GROUP BY status, is_deleted
        "#,
    )
    .bind(user.user_id)
    .fetch_all(&state.pool)
    .await?;

    let order_rows: Vec<(String, i64, i64)> = sqlx::query_as(
        r#"
        SELECT o.status, COUNT(*), COALESCE(SUM(o.total), 0)::BIGINT
        FROM orders o
        JOIN products p ON p.id = o.product_id
        WHERE p.seller_id = $1
        GROUP BY o.status
        "#,
    )
    .bind(user.user_id)
    .fetch_all(&state.pool)
    .await?;

    let views: (i64, i64) = sqlx::query_as(
        r#"
        SELECT COUNT(*), COUNT(*) FILTER (WHERE v.viewed_at >= $2)
        FROM product_views v
        JOIN products p ON p.id = v.product_id
        WHERE p.seller_id = $1
        "#,
    )
    .bind(user.user_id)
    .bind(Utc::now() - Duration::days(7))
    .fetch_one(&state.pool)
    .await?;

    let (orders, order_count, revenue) = order_breakdown(&order_rows);
    let summary = SellerSummary {
        products: product_counts(&product_rows),
        orders,
        order_count,
        revenue,
        views_total: views.0,
        views_last_7_days: views.1,
    };
    Ok(ApiResponse::item("Summary", summary))
}

/// Folds `(status, is_deleted, count)` rows. Archived products count only as archived.
pub fn product_counts(rows: &[(String, bool, i64)]) -> ProductCounts {
    rows.iter()
        .fold(ProductCounts::default(), |mut counts, (status, archived, n)| {
            counts.total += n;
            if *archived {
                counts.archived += n;
            } else {
                match status.as_str() {
                    "draft" => counts.draft += n,
                    "active" => counts.active += n,
                    "inactive" => counts.inactive += n,
                    _ => {}
                }
            }
            counts
        })
}

/// Per-status counts in lifecycle order, the number of orders, and revenue from
/// `(status, count, total)` rows.
pub fn order_breakdown(rows: &[(String, i64, i64)]) -> (Vec<StatusCount>, i64, i64) {
    let statuses = OrderStatus::ALL
        .iter()
        .map(|status| StatusCount {
            status: status.as_str().to_string(),
            count: rows
                .iter()
                .filter(|(s, _, _)| s == status.as_str())
                .map(|(_, c, _)| c)
                .sum(),
        })
        .collect();
    let order_count = rows.iter().map(|(_, c, _)| c).sum();
    let revenue = rows
        .iter()
        .filter(|(s, _, _)| s != OrderStatus::Cancelled.as_str())
        .map(|(_, _, total)| total)
        .sum();
    (statuses, order_count, revenue)
}
