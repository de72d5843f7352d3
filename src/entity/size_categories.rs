use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "size_categories")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    pub sort_order: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::standard_sizes::Entity")]
    StandardSizes,
}

impl Related<super::standard_sizes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StandardSizes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
