use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, HeaderValue, header},
    routing::{get, post},
};
use uuid::Uuid;

use crate::{
    dto::views::{
        DailyViews, DailyViewsQuery, RecordViewRequest, RecordViewResponse, ViewContext,
        ViewCount, ViewCountQuery,
    },
    error::{AppError, AppResult},
    middleware::{
        auth::{AuthUser, MaybeAuthUser, cookie_value},
        extract::{AppJson, AppQuery},
    },
    response::ApiResponse,
    services::view_service,
    state::AppState,
};

pub const VIEW_SESSION_COOKIE: &str = "pv_session";
const VIEW_SESSION_MAX_AGE: u32 = 60 * 60 * 24 * 365;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(record_view))
        .route("/count", get(count_views))
        .route("/daily", get(daily_views))
}

#[utoipa::path(
    post,
    path = "/api/product-views",
    request_body = RecordViewRequest,
    responses(
        (status = 200, description = "View recorded; sets the anonymous session cookie when missing", body = ApiResponse<RecordViewResponse>),
        (status = 404, description = "Product not found"),
    ),
    tag = "Views"
)]
pub async fn record_view(
    State(state): State<AppState>,
    MaybeAuthUser(viewer): MaybeAuthUser,
    headers: HeaderMap,
    AppJson(payload): AppJson<RecordViewRequest>,
) -> AppResult<(HeaderMap, Json<ApiResponse<RecordViewResponse>>)> {
    let existing_session = cookie_value(&headers, VIEW_SESSION_COOKIE);
    let session_id = existing_session
        .clone()
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let context = ViewContext {
        viewer_id: viewer.map(|user| user.user_id),
        session_id: Some(session_id.clone()),
        user_agent: header_string(&headers, header::USER_AGENT.as_str()),
        referrer: header_string(&headers, header::REFERER.as_str()),
        ip_address: client_ip(&headers),
    };
    let resp = view_service::record_view(&state, payload.product_id, context).await?;

    let mut response_headers = HeaderMap::new();
    if existing_session.is_none() {
        let cookie = format!(
            "{VIEW_SESSION_COOKIE}={session_id}; Path=/; Max-Age={VIEW_SESSION_MAX_AGE}; HttpOnly; SameSite=Lax"
        );
        let value = HeaderValue::from_str(&cookie)
            .map_err(|err| AppError::Internal(anyhow::anyhow!(err)))?;
        response_headers.insert(header::SET_COOKIE, value);
    }

    Ok((response_headers, Json(resp)))
}

#[utoipa::path(
    get,
    path = "/api/product-views/count",
    params(ViewCountQuery),
    responses(
        (status = 200, description = "Views of the product in the period", body = ApiResponse<ViewCount>),
        (status = 400, description = "Missing product_id"),
        (status = 404, description = "Product not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Views"
)]
pub async fn count_views(
    State(state): State<AppState>,
    user: AuthUser,
    AppQuery(query): AppQuery<ViewCountQuery>,
) -> AppResult<Json<ApiResponse<ViewCount>>> {
    let resp = view_service::count_views(&state, &user, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/product-views/daily",
    params(DailyViewsQuery),
    responses(
        (status = 200, description = "Views per UTC day", body = ApiResponse<DailyViews>),
        (status = 400, description = "Missing product_id"),
        (status = 404, description = "Product not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Views"
)]
pub async fn daily_views(
    State(state): State<AppState>,
    user: AuthUser,
    AppQuery(query): AppQuery<DailyViewsQuery>,
) -> AppResult<Json<ApiResponse<DailyViews>>> {
    let resp = view_service::daily_views(&state, &user, query).await?;
    Ok(Json(resp))
}

fn header_string(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
}

/// First hop of `x-forwarded-for`, else `x-real-ip`.
pub fn client_ip(headers: &HeaderMap) -> Option<String> {
    header_string(headers, "x-forwarded-for")
        .and_then(|list| list.split(',').next().map(|ip| ip.trim().to_string()))
        .filter(|ip| !ip.is_empty())
        .or_else(|| header_string(headers, "x-real-ip"))
}
