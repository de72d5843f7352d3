use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "standard_sizes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub category_id: Uuid,
    pub label: String,
    pub sort_order: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::size_categories::Entity",
        from = "Column::CategoryId",
        to = "super::size_categories::Column::Id"
    )]
    SizeCategories,
}

impl Related<super::size_categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SizeCategories.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
