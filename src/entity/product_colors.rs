use sea_orm::entity::prelude::*;

/// Exactly one of `standard_color_id` / `custom_hex` is set (table CHECK constraint).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "product_colors")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub product_id: Uuid,
    pub standard_color_id: Option<Uuid>,
    pub custom_hex: Option<String>,
    pub position: i32,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::products::Entity",
        from = "Column::ProductId",
        to = "super::products::Column::Id"
    )]
    Products,
    #[sea_orm(
        belongs_to = "super::standard_colors::Entity",
        from = "Column::StandardColorId",
        to = "super::standard_colors::Column::Id"
    )]
    StandardColors,
}

impl Related<super::products::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Products.def()
    }
}

impl Related<super::standard_colors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StandardColors.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
