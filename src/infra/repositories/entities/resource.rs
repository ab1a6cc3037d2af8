//! Resource database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Resource;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "resources")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    /// e.g. 'article', 'brochure', 'policy', 'news'
    #[sea_orm(column_name = "type")]
    pub kind: String,
    pub url: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Resource {
    fn from(model: Model) -> Self {
        Resource {
            id: model.id,
            title: model.title,
            description: model.description,
            kind: model.kind,
            url: model.url,
        }
    }
}
