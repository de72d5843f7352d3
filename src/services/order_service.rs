use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::sea_query::{Expr, LockType};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait,
};
use uuid::Uuid;

use crate::{
    domain::ordering::{
        OrderStatus, ProductStatus, QuantityBounds, QuantityError, check_quantity, order_total,
    },
    dto::orders::{
        BatchStatusRequest, BatchStatusResponse, CreateOrderRequest, OrderList,
        UpdateOrderStatusRequest,
    },
    entity::{
        orders::{ActiveModel as OrderActive, Column as OrderCol, Entity as Orders, Model as OrderModel},
        products::{Column as ProdCol, Entity as Products},
    },
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_owner},
    models::Order,
    response::{ApiResponse, Meta},
    routes::params::{OrderListQuery, SortOrder},
    state::AppState,
};

/// Places a customer order.
///
/// The product row is locked for the duration of the transaction. The order insert and
/// the stock decrement commit together, so a failed decrement leaves no order behind.
pub async fn create_order(
    state: &AppState,
    payload: CreateOrderRequest,
) -> AppResult<ApiResponse<Order>> {
    payload.validate()?;

    let txn = state.db().begin().await?;

    let product = Products::find_by_id(payload.product_id)
        .lock(LockType::Update)
        .one(&txn)
        .await?
        .ok_or(AppError::NotFound)?;

    if product.is_deleted || product.status != ProductStatus::Active.as_str() {
        return Err(AppError::BadRequest("Product is not available".into()));
    }

    let bounds = QuantityBounds {
        min: product.min_order_quantity,
        max: product.max_order_quantity,
        stock: product.quantity,
    };
    check_quantity(payload.quantity, bounds).map_err(|err| AppError::BadRequest(err.to_string()))?;

    if let Some(size) = payload.size.as_deref() {
        let sizes: Vec<String> = serde_json::from_value(product.sizes.clone()).unwrap_or_default();
        if !sizes.is_empty() && !sizes.iter().any(|s| s == size) {
            return Err(AppError::BadRequest("Selected size is not available".into()));
        }
    }

    let total = order_total(product.price, payload.quantity)
        .ok_or_else(|| AppError::BadRequest("Order total is too large".into()))?;

    let order = OrderActive {
        id: Set(Uuid::new_v4()),
        product_id: Set(product.id),
        customer_name: Set(payload.customer_name.trim().to_string()),
        customer_email: Set(payload.customer_email.trim().to_string()),
        customer_phone: Set(payload.customer_phone),
        shipping_address: Set(payload.shipping_address),
        city: Set(payload.city),
        postal_code: Set(payload.postal_code),
        country: Set(payload.country),
        quantity: Set(payload.quantity),
        size: Set(payload.size),
        color: Set(payload.color),
        notes: Set(payload.notes),
        unit_price: Set(product.price),
        total: Set(total),
        status: Set(OrderStatus::Pending.as_str().to_string()),
        created_at: NotSet,
        updated_at: NotSet,
    }
    .insert(&txn)
    .await?;

    let decremented = Products::update_many()
        .col_expr(ProdCol::Quantity, Expr::col(ProdCol::Quantity).sub(payload.quantity))
        .col_expr(ProdCol::UpdatedAt, Expr::value(Utc::now().fixed_offset()))
        .filter(ProdCol::Id.eq(product.id))
        .filter(ProdCol::Quantity.gte(payload.quantity))
        .exec(&txn)
        .await?;

    if decremented.rows_affected == 0 {
        // Dropping `txn` rolls the order insert back.
        let err = QuantityError::InsufficientStock(product.quantity);
        return Err(AppError::BadRequest(err.to_string()));
    }

    txn.commit().await?;

    tracing::info!(
        order_id = %order.id,
        product_id = %order.product_id,
        quantity = order.quantity,
        total = order.total,
        "order created"
    );

    Ok(ApiResponse::item("Order created", Order::from(order)))
}

pub async fn list_orders(
    state: &AppState,
    user: &AuthUser,
    query: OrderListQuery,
) -> AppResult<ApiResponse<OrderList>> {
    let (page, limit, offset) = query.pagination().normalize();
    let mut condition = Condition::all().add(ProdCol::SellerId.eq(user.user_id));

    if let Some(status) = query.status.as_ref().filter(|s| !s.is_empty()) {
        let status = status
            .parse::<OrderStatus>()
            .map_err(|err| AppError::BadRequest(err.to_string()))?;
        condition = condition.add(OrderCol::Status.eq(status.as_str()));
    }
    if let Some(product_id) = query.product_id {
        condition = condition.add(OrderCol::ProductId.eq(product_id));
    }

    let mut finder = Orders::find().inner_join(Products).filter(condition);
    finder = match query.sort_order.unwrap_or(SortOrder::Desc) {
        SortOrder::Asc => finder.order_by_asc(OrderCol::CreatedAt),
        SortOrder::Desc => finder.order_by_desc(OrderCol::CreatedAt),
    };

    let total = finder.clone().count(state.db()).await? as i64;

    let orders = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(state.db())
        .await?
        .into_iter()
        .map(Order::from)
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success("Orders", OrderList { items: orders }, Some(meta)))
}

pub async fn get_order(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<Order>> {
    let order = find_seller_order(state, user, id).await?;
    Ok(ApiResponse::item("Order", Order::from(order)))
}

pub async fn update_order_status(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: UpdateOrderStatusRequest,
) -> AppResult<ApiResponse<Order>> {
    let status = payload.parse()?;
    let existing = find_seller_order(state, user, id).await?;

    let mut active: OrderActive = existing.into();
    active.status = Set(status.as_str().to_string());
    active.updated_at = Set(Utc::now().into());
    let order = active.update(state.db()).await?;

    tracing::info!(order_id = %order.id, status = %status, "order status updated");

    Ok(ApiResponse::item("Order updated", Order::from(order)))
}

/// Sets one status on many orders. Ids outside the seller's products are left out.
pub async fn batch_update_status(
    state: &AppState,
    user: &AuthUser,
    payload: BatchStatusRequest,
) -> AppResult<ApiResponse<BatchStatusResponse>> {
    let status = payload.parse()?;

    let txn = state.db().begin().await?;
    let owned: Vec<Uuid> = Orders::find()
        .select_only()
        .column(OrderCol::Id)
        .inner_join(Products)
        .filter(OrderCol::Id.is_in(payload.order_ids.clone()))
        .filter(ProdCol::SellerId.eq(user.user_id))
        .into_tuple::<Uuid>()
        .all(&txn)
        .await?;

    if !owned.is_empty() {
        Orders::update_many()
            .col_expr(OrderCol::Status, Expr::value(status.as_str()))
            .col_expr(OrderCol::UpdatedAt, Expr::value(Utc::now().fixed_offset()))
            .filter(OrderCol::Id.is_in(owned.clone()))
            .exec(&txn)
            .await?;
    }
    txn.commit().await?;

    tracing::info!(count = owned.len(), status = %status, "batch order status update");

    let count = owned.len();
    Ok(ApiResponse::item(
        "Orders updated",
        BatchStatusResponse {
            updated_ids: owned,
            count,
        },
    ))
}

/// 404 when the order does not exist, 403 when its product belongs to another seller.
async fn find_seller_order(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<OrderModel> {
    let (order, product) = Orders::find_by_id(id)
        .find_also_related(Products)
        .one(state.db())
        .await?
        .ok_or(AppError::NotFound)?;
    let product = product.ok_or(AppError::NotFound)?;
    ensure_owner(user, product.seller_id)?;
    Ok(order)
}
