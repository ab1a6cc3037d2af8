//! Partner database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Partner;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "partners")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub logo: Option<String>,
    pub link: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Partner {
    fn from(model: Model) -> Self {
        Partner {
            id: model.id,
            name: model.name,
            logo: model.logo,
            link: model.link,
        }
    }
}
