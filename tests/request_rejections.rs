use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use jsonwebtoken::{EncodingKey, Header, encode};
use landing_storefront_api::{
    middleware::auth::Claims, routes::create_api_router, state::AppState,
};
use sea_orm::{DatabaseBackend, MockDatabase};
use serde_json::{Value, json};
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt;
use uuid::Uuid;

const SECRET: &str = "request-rejections-secret";

fn app() -> anyhow::Result<Router> {
    // SAFETY: every test in this binary writes the same value.
    unsafe { std::env::set_var("JWT_SECRET", SECRET) };

    let pool = PgPoolOptions::new().connect_lazy("postgres://localhost/unused")?;
    let orm = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    Ok(create_api_router().with_state(AppState::new(pool, orm)))
}

fn bearer() -> anyhow::Result<String> {
    let claims = Claims {
        sub: Uuid::new_v4().to_string(),
        exp: (chrono::Utc::now().timestamp() + 3600) as usize,
        email: Some("seller@example.com".into()),
        role: Some("authenticated".into()),
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )?;
    Ok(format!("Bearer {token}"))
}

async fn send(
    method: Method,
    uri: &str,
    auth: Option<String>,
    body: Option<Value>,
) -> anyhow::Result<(StatusCode, Value)> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))?,
        None => builder.body(Body::empty())?,
    };

    let response = app()?.oneshot(request).await?;
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    Ok((status, serde_json::from_slice(&bytes)?))
}

fn assert_envelope(body: &Value) {
    let message = body["message"].as_str().expect("message");
    assert_eq!(body["data"]["error"].as_str(), Some(message));
    assert!(body["meta"].is_object());
}

#[tokio::test]
async fn batch_status_with_malformed_order_id_is_bad_request() -> anyhow::Result<()> {
    let (status, body) = send(
        Method::PATCH,
        "/orders/batch-status",
        Some(bearer()?),
        Some(json!({ "order_ids": ["not-a-uuid"], "status": "shipped" })),
    )
    .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_envelope(&body);
    assert!(body["message"].as_str().unwrap_or_default().contains("deserialize"));
    Ok(())
}

#[tokio::test]
async fn batch_delete_with_malformed_product_id_is_bad_request() -> anyhow::Result<()> {
    let (status, body) = send(
        Method::DELETE,
        "/products/batch-delete",
        Some(bearer()?),
        Some(json!({ "product_ids": [42] })),
    )
    .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_envelope(&body);
    Ok(())
}

#[tokio::test]
async fn order_with_string_quantity_is_bad_request() -> anyhow::Result<()> {
    let (status, body) = send(
        Method::POST,
        "/orders",
        None,
        Some(json!({
            "product_id": Uuid::new_v4(),
            "customer_name": "Ada",
            "customer_email": "ada@example.com",
            "shipping_address": "1 Main St",
            "city": "Springfield",
            "country": "US",
            "quantity": "3"
        })),
    )
    .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_envelope(&body);
    Ok(())
}

#[tokio::test]
async fn order_without_json_content_type_is_bad_request() -> anyhow::Result<()> {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/orders")
        .body(Body::from("quantity=3"))?;

    let response = app()?.oneshot(request).await?;
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    let body: Value = serde_json::from_slice(&bytes)?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_envelope(&body);
    Ok(())
}

#[tokio::test]
async fn malformed_query_string_is_bad_request() -> anyhow::Result<()> {
    let (status, body) = send(
        Method::GET,
        "/catalog/sizes?category_id=not-a-uuid",
        None,
        None,
    )
    .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_envelope(&body);
    Ok(())
}
