use axum::http::StatusCode;
use landing_storefront_api::{
    db::{create_orm_conn, create_pool, run_migrations},
    dto::{
        orders::{CreateOrderRequest, UpdateOrderStatusRequest},
        products::{BatchDeleteRequest, ColorSelection, CreateProductRequest},
        ratings::SubmitRatingRequest,
        views::{ViewContext, ViewCountQuery},
    },
    domain::{ordering::ProductStatus, views::ViewPeriod},
    entity::products::Entity as Products,
    middleware::auth::AuthUser,
    services::{order_service, product_service, rating_service, view_service},
    state::AppState,
};
use sea_orm::{ConnectionTrait, EntityTrait, Statement};
use uuid::Uuid;

// Seller creates products, a customer orders within bounds, then the seller removes
// products in one batch and the customer rates the delivered order.
#[tokio::test]
async fn seller_order_and_removal_flow() -> anyhow::Result<()> {
    let database_url = match std::env::var("TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
    {
        Ok(url) => url,
        Err(_) => {
            eprintln!(
                "Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run integration flow tests."
            );
            return Ok(());
        }
    };

    let state = setup_state(&database_url).await?;
    let seller = AuthUser {
        user_id: Uuid::new_v4(),
        email: Some("seller@example.com".into()),
    };
    let other_seller = AuthUser {
        user_id: Uuid::new_v4(),
        email: None,
    };

    let shirt = product_service::create_product(
        &state,
        &seller,
        new_product("Linen Shirt", Some(ProductStatus::Active), 5, Some(10), 20),
    )
    .await?
    .data
    .expect("product");
    assert_eq!(shirt.colors.len(), 1);
    assert!(shirt.colors[0].custom);
    assert_eq!(shirt.colors[0].hex_code, "#C2B280");

    let draft = product_service::create_product(
        &state,
        &seller,
        new_product("Draft Scarf", None, 1, None, 3),
    )
    .await?
    .data
    .expect("product");

    let foreign = product_service::create_product(
        &state,
        &other_seller,
        new_product("Foreign Hat", Some(ProductStatus::Active), 1, None, 3),
    )
    .await?
    .data
    .expect("product");

    // Landing page only serves active products.
    let public = product_service::get_public_by_slug(&state, &shirt.product.slug).await?;
    assert_eq!(public.data.expect("product").product.id, shirt.product.id);
    let hidden = product_service::get_public_by_slug(&state, &draft.product.slug)
        .await
        .unwrap_err();
    assert_eq!(hidden.status(), StatusCode::FORBIDDEN);

    // Quantity bounds.
    let below = order_service::create_order(&state, new_order(shirt.product.id, 3))
        .await
        .unwrap_err();
    assert_eq!(below.status(), StatusCode::BAD_REQUEST);
    assert_eq!(below.to_string(), "Minimum order quantity is 5");

    let above = order_service::create_order(&state, new_order(shirt.product.id, 15))
        .await
        .unwrap_err();
    assert_eq!(above.to_string(), "Maximum order quantity is 10");

    let order = order_service::create_order(&state, new_order(shirt.product.id, 7))
        .await?
        .data
        .expect("order");
    assert_eq!(order.total, 7 * 2500);

    let stored = Products::find_by_id(shirt.product.id)
        .one(state.db())
        .await?
        .expect("product row");
    assert_eq!(stored.quantity, 13);

    // Only the owning seller can move the order along.
    let forbidden = order_service::update_order_status(
        &state,
        &other_seller,
        order.id,
        UpdateOrderStatusRequest {
            status: "shipped".into(),
        },
    )
    .await
    .unwrap_err();
    assert_eq!(forbidden.status(), StatusCode::FORBIDDEN);

    order_service::update_order_status(
        &state,
        &seller,
        order.id,
        UpdateOrderStatusRequest {
            status: "delivered".into(),
        },
    )
    .await?;

    rating_service::submit_rating(
        &state,
        SubmitRatingRequest {
            order_id: order.id,
            customer_email: "ada@example.com".into(),
            score: 4,
            comment: Some("Fits well".into()),
        },
    )
    .await?;
    let rated = Products::find_by_id(shirt.product.id)
        .one(state.db())
        .await?
        .expect("product row");
    assert_eq!(rated.rating_count, 1);
    assert_eq!(rated.average_rating, 4.0);

    // Views.
    view_service::record_view(&state, shirt.product.id, ViewContext::default()).await?;
    view_service::record_view(&state, shirt.product.id, ViewContext::default()).await?;
    let views = view_service::count_views(
        &state,
        &seller,
        ViewCountQuery {
            product_id: Some(shirt.product.id),
            period: Some(ViewPeriod::Day),
        },
    )
    .await?
    .data
    .expect("count");
    assert_eq!(views.count, 2);

    // Ordered product is archived, unordered deleted, foreign skipped.
    let removal = product_service::batch_delete(
        &state,
        &seller,
        BatchDeleteRequest {
            product_ids: vec![shirt.product.id, draft.product.id, foreign.product.id],
        },
    )
    .await?
    .data
    .expect("removal");
    assert_eq!(removal.archived_ids, vec![shirt.product.id]);
    assert_eq!(removal.deleted_ids, vec![draft.product.id]);
    assert_eq!(removal.skipped_ids, vec![foreign.product.id]);

    let archived = Products::find_by_id(shirt.product.id)
        .one(state.db())
        .await?
        .expect("archived row is kept");
    assert!(archived.is_deleted);
    assert!(Products::find_by_id(draft.product.id).one(state.db()).await?.is_none());
    let untouched = Products::find_by_id(foreign.product.id)
        .one(state.db())
        .await?
        .expect("foreign row");
    assert!(!untouched.is_deleted);

    Ok(())
}

fn new_product(
    title: &str,
    status: Option<ProductStatus>,
    min: i32,
    max: Option<i32>,
    stock: i32,
) -> CreateProductRequest {
    CreateProductRequest {
        title: title.into(),
        description: None,
        price: 2500,
        currency: None,
        status,
        template: None,
        image_url: None,
        features: vec!["Breathable".into()],
        sizes: Vec::new(),
        quantity: stock,
        min_order_quantity: Some(min),
        max_order_quantity: max,
        colors: vec![ColorSelection {
            standard_color_id: None,
            custom_hex: Some("#C2B280".into()),
        }],
    }
}

fn new_order(product_id: Uuid, quantity: i32) -> CreateOrderRequest {
    CreateOrderRequest {
        product_id,
        customer_name: "Ada".into(),
        customer_email: "ada@example.com".into(),
        customer_phone: None,
        shipping_address: "1 Main St".into(),
        city: "Springfield".into(),
        postal_code: None,
        country: "US".into(),
        quantity,
        size: None,
        color: None,
        notes: None,
    }
}

async fn setup_state(database_url: &str) -> anyhow::Result<AppState> {
    let orm = create_orm_conn(database_url).await?;
    run_migrations(&orm).await?;

    // Clean tables between runs
    let backend = orm.get_database_backend();
    orm.execute(Statement::from_string(
        backend,
        "TRUNCATE TABLE product_views, ratings, orders, product_colors, products RESTART IDENTITY CASCADE",
    ))
    .await?;

    let pool = create_pool(database_url).await?;
    Ok(AppState::new(pool, orm))
}
