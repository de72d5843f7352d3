use std::collections::HashSet;

use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::sea_query::Expr;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use uuid::Uuid;

use crate::{
    domain::{
        ordering::ProductStatus,
        removal::plan_removal,
        slug::generate_slug,
    },
    dto::products::{
        ArchiveProductRequest, ArchiveProductResponse, BatchDeleteRequest, BatchDeleteResponse,
        CreateProductRequest, ProductList, RemovalCounts, UpdateProductRequest,
        UpdateProductStatusRequest, validate_order_bounds,
    },
    entity::{
        orders::{Column as OrderCol, Entity as Orders},
        products::{ActiveModel, Column, Entity as Products, Model as ProductModel},
    },
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::{Product, ProductWithColors},
    response::{ApiResponse, Meta},
    routes::params::ProductListQuery,
    services::color_service,
    state::AppState,
};

const DEFAULT_TEMPLATE: &str = "classic";
const DEFAULT_CURRENCY: &str = "USD";

pub async fn create_product(
    state: &AppState,
    user: &AuthUser,
    payload: CreateProductRequest,
) -> AppResult<ApiResponse<ProductWithColors>> {
    payload.validate()?;

    let txn = state.db().begin().await?;
    let product = ActiveModel {
        id: Set(Uuid::new_v4()),
        seller_id: Set(user.user_id),
        slug: Set(generate_slug(&payload.title)),
        title: Set(payload.title.trim().to_string()),
        description: Set(payload.description),
        price: Set(payload.price),
        currency: Set(payload
            .currency
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string())),
        status: Set(payload
            .status
            .unwrap_or(ProductStatus::Draft)
            .as_str()
            .to_string()),
        template: Set(payload
            .template
            .unwrap_or_else(|| DEFAULT_TEMPLATE.to_string())),
        image_url: Set(payload.image_url),
        features: Set(serde_json::json!(payload.features)),
        colors: Set(None),
        sizes: Set(serde_json::json!(payload.sizes)),
        quantity: Set(payload.quantity),
        min_order_quantity: Set(payload.min_order_quantity.unwrap_or(1)),
        max_order_quantity: Set(payload.max_order_quantity),
        average_rating: Set(0.0),
        rating_count: Set(0),
        is_deleted: Set(false),
        created_at: NotSet,
        updated_at: NotSet,
    }
    .insert(&txn)
    .await?;

    color_service::replace_colors(&txn, product.id, &payload.colors).await?;
    txn.commit().await?;

    tracing::info!(product_id = %product.id, slug = %product.slug, "product created");

    let data = with_colors(state.db(), product).await;
    Ok(ApiResponse::item("Product created", data))
}

pub async fn list_products(
    state: &AppState,
    user: &AuthUser,
    query: ProductListQuery,
) -> AppResult<ApiResponse<ProductList>> {
    let (page, limit, offset) = query.pagination().normalize();
    let mut condition = Condition::all().add(Column::SellerId.eq(user.user_id));

    if !query.include_archived {
        condition = condition.add(Column::IsDeleted.eq(false));
    }
    if let Some(status) = query.status {
        condition = condition.add(Column::Status.eq(status.as_str()));
    }
    if let Some(search) = query.q.as_ref().filter(|s| !s.is_empty()) {
        condition = condition.add(Expr::col(Column::Title).ilike(format!("%{}%", search)));
    }

    let finder = Products::find()
        .filter(condition)
        .order_by_desc(Column::CreatedAt);

    let total = finder.clone().count(state.db()).await? as i64;

    let items = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(state.db())
        .await?
        .into_iter()
        .map(Product::from)
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success("Products", ProductList { items }, Some(meta)))
}

pub async fn get_product(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<ProductWithColors>> {
    let product = find_owned(state.db(), user, id).await?;
    let data = with_colors(state.db(), product).await;
    Ok(ApiResponse::item("Product", data))
}

pub async fn update_product(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: UpdateProductRequest,
) -> AppResult<ApiResponse<ProductWithColors>> {
    payload.validate()?;

    let txn = state.db().begin().await?;
    let existing = find_owned(&txn, user, id).await?;

    let min = payload.min_order_quantity.unwrap_or(existing.min_order_quantity);
    let max = if payload.clear_max_order_quantity {
        None
    } else {
        payload.max_order_quantity.or(existing.max_order_quantity)
    };
    validate_order_bounds(min, max)?;

    let mut active: ActiveModel = existing.into();
    if let Some(title) = payload.title {
        active.title = Set(title.trim().to_string());
    }
    if let Some(description) = payload.description {
        active.description = Set(Some(description));
    }
    if let Some(price) = payload.price {
        active.price = Set(price);
    }
    if let Some(currency) = payload.currency {
        active.currency = Set(currency.to_ascii_uppercase());
    }
    if let Some(template) = payload.template {
        active.template = Set(template);
    }
    if let Some(image_url) = payload.image_url {
        active.image_url = Set(Some(image_url));
    }
    if let Some(features) = payload.features {
        active.features = Set(serde_json::json!(features));
    }
    if let Some(sizes) = payload.sizes {
        active.sizes = Set(serde_json::json!(sizes));
    }
    if let Some(quantity) = payload.quantity {
        active.quantity = Set(quantity);
    }
    active.min_order_quantity = Set(min);
    active.max_order_quantity = Set(max);
    if let Some(selections) = payload.colors.as_ref() {
        color_service::replace_colors(&txn, id, selections).await?;
        // The join table is authoritative from now on.
        active.colors = Set(None);
    }
    active.updated_at = Set(Utc::now().into());

    let product = active.update(&txn).await?;
    txn.commit().await?;

    let data = with_colors(state.db(), product).await;
    Ok(ApiResponse::item("Updated", data))
}

pub async fn update_status(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: UpdateProductStatusRequest,
) -> AppResult<ApiResponse<Product>> {
    let existing = find_owned(state.db(), user, id).await?;

    let mut active: ActiveModel = existing.into();
    active.status = Set(payload.status.as_str().to_string());
    active.updated_at = Set(Utc::now().into());
    let product = active.update(state.db()).await?;

    Ok(ApiResponse::item("Status updated", Product::from(product)))
}

pub async fn set_archived(
    state: &AppState,
    user: &AuthUser,
    payload: ArchiveProductRequest,
) -> AppResult<ApiResponse<ArchiveProductResponse>> {
    let result = Products::update_many()
        .col_expr(Column::IsDeleted, Expr::value(payload.archived))
        .col_expr(Column::UpdatedAt, Expr::value(Utc::now().fixed_offset()))
        .filter(Column::Id.eq(payload.product_id))
        .filter(Column::SellerId.eq(user.user_id))
        .exec(state.db())
        .await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    let message = if payload.archived {
        "Product archived"
    } else {
        "Product restored"
    };
    Ok(ApiResponse::item(
        message,
        ArchiveProductResponse {
            archived: payload.archived,
            product_id: payload.product_id,
        },
    ))
}

/// Removes products from circulation: ordered products are archived, the rest deleted.
/// Both partitions are applied in one transaction.
pub async fn batch_delete(
    state: &AppState,
    user: &AuthUser,
    payload: BatchDeleteRequest,
) -> AppResult<ApiResponse<BatchDeleteResponse>> {
    payload.validate()?;

    let txn = state.db().begin().await?;

    let owned: HashSet<Uuid> = Products::find()
        .select_only()
        .column(Column::Id)
        .filter(Column::Id.is_in(payload.product_ids.clone()))
        .filter(Column::SellerId.eq(user.user_id))
        .into_tuple::<Uuid>()
        .all(&txn)
        .await?
        .into_iter()
        .collect();

    let referenced: HashSet<Uuid> = if owned.is_empty() {
        HashSet::new()
    } else {
        Orders::find()
            .select_only()
            .column(OrderCol::ProductId)
            .distinct()
            .filter(OrderCol::ProductId.is_in(owned.iter().copied()))
            .into_tuple::<Uuid>()
            .all(&txn)
            .await?
            .into_iter()
            .collect()
    };

    let plan = plan_removal(&payload.product_ids, &owned, &referenced);

    if !plan.archive.is_empty() {
        Products::update_many()
            .col_expr(Column::IsDeleted, Expr::value(true))
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now().fixed_offset()))
            .filter(Column::Id.is_in(plan.archive.clone()))
            .filter(Column::SellerId.eq(user.user_id))
            .exec(&txn)
            .await?;
    }
    if !plan.delete.is_empty() {
        Products::delete_many()
            .filter(Column::Id.is_in(plan.delete.clone()))
            .filter(Column::SellerId.eq(user.user_id))
            .exec(&txn)
            .await?;
    }

    txn.commit().await?;

    tracing::info!(
        seller_id = %user.user_id,
        archived = plan.archive.len(),
        deleted = plan.delete.len(),
        skipped = plan.skipped.len(),
        "batch product removal"
    );

    let counts = RemovalCounts {
        deleted: plan.delete.len(),
        archived: plan.archive.len(),
        skipped: plan.skipped.len(),
    };
    Ok(ApiResponse::item(
        "Products removed",
        BatchDeleteResponse {
            deleted_ids: plan.delete,
            archived_ids: plan.archive,
            skipped_ids: plan.skipped,
            counts,
        },
    ))
}

/// Landing-page fetch. Only active, non-archived products are public.
pub async fn get_public_by_slug(
    state: &AppState,
    slug: &str,
) -> AppResult<ApiResponse<ProductWithColors>> {
    let product = Products::find()
        .filter(Column::Slug.eq(slug))
        .one(state.db())
        .await?
        .ok_or(AppError::NotFound)?;

    if product.is_deleted || product.status != ProductStatus::Active.as_str() {
        return Err(AppError::Forbidden);
    }

    let data = with_colors(state.db(), product).await;
    Ok(ApiResponse::item("Product", data))
}

/// Product owned by `user`; someone else's product reads as missing.
pub async fn find_owned<C>(db: &C, user: &AuthUser, id: Uuid) -> AppResult<ProductModel>
where
    C: ConnectionTrait,
{
    Products::find_by_id(id)
        .filter(Column::SellerId.eq(user.user_id))
        .one(db)
        .await?
        .ok_or(AppError::NotFound)
}

async fn with_colors<C>(db: &C, product: ProductModel) -> ProductWithColors
where
    C: ConnectionTrait,
{
    let colors = color_service::resolve_colors(db, &product).await;
    ProductWithColors {
        product: Product::from(product),
        colors,
    }
}
