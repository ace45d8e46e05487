//! SeaORM Entity for politicians table

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "politicians")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub party: String,
    pub role: String,
    pub photo: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::projects::Entity")]
    Projects,
    #[sea_orm(has_many = "super::answers::Entity")]
    Answers,
}

impl Related<super::projects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Projects.def()
    }
}

impl Related<super::answers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Answers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Public path of the politician's portrait under the static mount.
    pub fn photo_url(&self) -> String {
        format!("/static/img/{}", self.photo)
    }

    pub fn survey_url(&self) -> String {
        format!("/survey/{}", self.id)
    }

    pub fn results_url(&self) -> String {
        format!("/results/{}", self.id)
    }

    /// Whether the role title contains `needle`, which must already be lowercase.
    pub fn holds_role(&self, needle: &str) -> bool {
        self.role.to_lowercase().contains(needle)
    }
}
