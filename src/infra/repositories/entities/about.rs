//! About database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::About;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "about")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub content: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for About {
    fn from(model: Model) -> Self {
        About {
            id: model.id,
            content: model.content,
        }
    }
}
