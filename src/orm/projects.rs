//! SeaORM Entity for projects table

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub politician_id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::politicians::Entity",
        from = "Column::PoliticianId",
        to = "super::politicians::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Politician,
}

impl Related<super::politicians::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Politician.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Broken promises are catalogued with a fixed title prefix.
    pub fn is_broken_promise(&self) -> bool {
        self.title.starts_with(crate::constants::BROKEN_PROMISE_PREFIX)
    }
}
