use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::{
    dto::catalog::{ColorList, SizeCategoryList, SizeList, SizeQuery},
    entity::{
        size_categories::{Column as CategoryCol, Entity as SizeCategories},
        standard_colors::{Column as ColorCol, Entity as StandardColors},
        standard_sizes::{Column as SizeCol, Entity as StandardSizes},
    },
    error::AppResult,
    models::{SizeCategory, StandardColor, StandardSize},
    response::ApiResponse,
    state::AppState,
};

pub async fn list_colors(state: &AppState) -> AppResult<ApiResponse<ColorList>> {
    let items = StandardColors::find()
        .order_by_asc(ColorCol::SortOrder)
        .order_by_asc(ColorCol::Name)
        .all(state.db())
        .await?
        .into_iter()
        .map(StandardColor::from)
        .collect();
    Ok(ApiResponse::item("Colors", ColorList { items }))
}

pub async fn list_size_categories(state: &AppState) -> AppResult<ApiResponse<SizeCategoryList>> {
    let items = SizeCategories::find()
        .order_by_asc(CategoryCol::SortOrder)
        .all(state.db())
        .await?
        .into_iter()
        .map(SizeCategory::from)
        .collect();
    Ok(ApiResponse::item("Size categories", SizeCategoryList { items }))
}

pub async fn list_sizes(state: &AppState, query: SizeQuery) -> AppResult<ApiResponse<SizeList>> {
    let mut finder = StandardSizes::find();
    if let Some(category_id) = query.category_id {
        finder = finder.filter(SizeCol::CategoryId.eq(category_id));
    }
    let items = finder
        .order_by_asc(SizeCol::CategoryId)
        .order_by_asc(SizeCol::SortOrder)
        .all(state.db())
        .await?
        .into_iter()
        .map(StandardSize::from)
        .collect();
    Ok(ApiResponse::item("Sizes", SizeList { items }))
}
