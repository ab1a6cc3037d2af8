//! Leader database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Leader;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "leaders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// URL or file path
    pub photo: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub bio: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Leader {
    fn from(model: Model) -> Self {
        Leader {
            id: model.id,
            name: model.name,
            photo: model.photo,
            bio: model.bio,
        }
    }
}
