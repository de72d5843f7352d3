use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};
use sea_orm::ActiveValue::NotSet;
use uuid::Uuid;

use crate::{
    domain::colors::{self, JoinedColorRow},
    dto::products::ColorSelection,
    entity::{
        product_colors::{ActiveModel as ProductColorActive, Column as ProductColorCol, Entity as ProductColors},
        products::Model as ProductModel,
        standard_colors::{Column as StandardColorCol, Entity as StandardColors},
    },
    error::AppResult,
    models::{ColorDescriptor, StandardColor},
};

/// Effective colors of `product`.
///
/// Never fails: lookup errors are logged and degrade to fewer (or no) colors.
pub async fn resolve_colors<C>(db: &C, product: &ProductModel) -> Vec<ColorDescriptor>
where
    C: ConnectionTrait,
{
    let rows = match ProductColors::find()
        .filter(ProductColorCol::ProductId.eq(product.id))
        .order_by_asc(ProductColorCol::Position)
        .find_also_related(StandardColors)
        .all(db)
        .await
    {
        Ok(rows) => rows,
        Err(err) => {
            tracing::warn!(error = %err, product_id = %product.id, "product color lookup failed");
            return Vec::new();
        }
    };

    if !rows.is_empty() {
        let joined: Vec<JoinedColorRow> = rows
            .into_iter()
            .map(|(row, standard)| JoinedColorRow {
                row_id: row.id,
                standard_color_id: row.standard_color_id,
                custom_hex: row.custom_hex,
                standard: standard.map(StandardColor::from),
            })
            .collect();
        return colors::resolve_product_colors(&joined, None, None);
    }

    let sources = colors::legacy_sources(product.colors.as_ref());
    let standards = if colors::needs_standard_lookup(&sources) {
        load_standard_colors(db).await
    } else {
        None
    };
    colors::resolve(sources, standards.as_deref())
}

async fn load_standard_colors<C>(db: &C) -> Option<Vec<StandardColor>>
where
    C: ConnectionTrait,
{
    match StandardColors::find()
        .order_by_asc(StandardColorCol::SortOrder)
        .all(db)
        .await
    {
        Ok(models) => Some(models.into_iter().map(StandardColor::from).collect()),
        Err(err) => {
            // Hex strings then resolve as custom colors.
            tracing::warn!(error = %err, "standard color lookup failed");
            None
        }
    }
}

/// Replaces every join row of `product_id` with `selections`, in order.
pub async fn replace_colors<C>(
    db: &C,
    product_id: Uuid,
    selections: &[ColorSelection],
) -> AppResult<()>
where
    C: ConnectionTrait,
{
    ProductColors::delete_many()
        .filter(ProductColorCol::ProductId.eq(product_id))
        .exec(db)
        .await?;

    for (position, selection) in selections.iter().enumerate() {
        ProductColorActive {
            id: Set(Uuid::new_v4()),
            product_id: Set(product_id),
            standard_color_id: Set(selection.standard_color_id),
            custom_hex: Set(selection.custom_hex.clone()),
            position: Set(position as i32),
            created_at: NotSet,
        }
        .insert(db)
        .await?;
    }

    Ok(())
}
