use std::{collections::BTreeMap, sync::Arc};

use chrono::Utc;
use landing_storefront_api::{
    entity::{products, ratings},
    middleware::auth::AuthUser,
    routes::params::Pagination,
    services::rating_service,
    state::AppState,
};
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase, Value};
use serde_json::json;
use sqlx::postgres::PgPoolOptions;
use uuid::Uuid;

fn product(seller_id: Uuid) -> products::Model {
    let now = Utc::now().fixed_offset();
    products::Model {
        id: Uuid::new_v4(),
        seller_id,
        title: "Linen Shirt".into(),
        description: None,
        price: 2500,
        currency: "USD".into(),
        status: "active".into(),
        template: "classic".into(),
        image_url: None,
        features: json!([]),
        slug: "linen-shirt-abc123".into(),
        colors: None,
        sizes: json!([]),
        quantity: 10,
        min_order_quantity: 1,
        max_order_quantity: None,
        average_rating: 4.0,
        rating_count: 3,
        is_deleted: false,
        created_at: now,
        updated_at: now,
    }
}

fn rating(product_id: Uuid, score: i32) -> ratings::Model {
    let now = Utc::now().fixed_offset();
    ratings::Model {
        id: Uuid::new_v4(),
        order_id: Uuid::new_v4(),
        product_id,
        score,
        comment: None,
        created_at: now,
        updated_at: now,
    }
}

fn count_row(total: i64) -> BTreeMap<&'static str, Value> {
    BTreeMap::from([("num_items", Value::BigInt(Some(total)))])
}

fn state_with(orm: DatabaseConnection) -> anyhow::Result<AppState> {
    let pool = PgPoolOptions::new().connect_lazy("postgres://localhost/unused")?;
    Ok(AppState::new(pool, orm))
}

fn seller() -> AuthUser {
    AuthUser {
        user_id: Uuid::new_v4(),
        email: None,
    }
}

#[tokio::test]
async fn product_without_ratings_keeps_a_real_page_size() -> anyhow::Result<()> {
    let user = seller();
    let product = product(user.user_id);
    let orm = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![product.clone()]])
        .append_query_results([vec![count_row(0)]])
        .append_query_results([Vec::<ratings::Model>::new()])
        .into_connection();
    let state = state_with(orm)?;

    let resp =
        rating_service::list_product_ratings(&state, &user, product.id, Pagination::default())
            .await?;

    let meta = resp.meta.expect("meta");
    assert_eq!(meta.page, Some(1));
    assert_eq!(meta.per_page, Some(20));
    assert_eq!(meta.total, Some(0));
    assert!(resp.data.expect("ratings").items.is_empty());
    Ok(())
}

#[tokio::test]
async fn ratings_are_paged_with_the_requested_window() -> anyhow::Result<()> {
    let user = seller();
    let product = product(user.user_id);
    let orm = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![product.clone()]])
        .append_query_results([vec![count_row(3)]])
        .append_query_results([vec![rating(product.id, 5)]])
        .into_connection();
    let state = state_with(orm)?;

    let resp = rating_service::list_product_ratings(
        &state,
        &user,
        product.id,
        Pagination {
            page: Some(2),
            per_page: Some(1),
        },
    )
    .await?;

    let meta = resp.meta.expect("meta");
    assert_eq!(meta.page, Some(2));
    assert_eq!(meta.per_page, Some(1));
    assert_eq!(meta.total, Some(3));
    assert_eq!(resp.data.expect("ratings").items.len(), 1);

    let log = match Arc::try_unwrap(state.orm) {
        Ok(orm) => format!("{:?}", orm.into_transaction_log()),
        Err(_) => panic!("mock connection is still shared"),
    };
    assert!(log.contains("LIMIT"), "missing LIMIT: {log}");
    assert!(log.contains("OFFSET"), "missing OFFSET: {log}");
    Ok(())
}
