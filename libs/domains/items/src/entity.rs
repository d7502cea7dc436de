use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::{CreateItem, Item};

/// SeaORM entity for the item table
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub item_name: String,
    pub price: i64,
    pub quantity: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Item {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.item_name,
            price: model.price,
            quantity: model.quantity,
        }
    }
}

impl From<CreateItem> for ActiveModel {
    fn from(input: CreateItem) -> Self {
        ActiveModel {
            id: NotSet,
            item_name: Set(input.name),
            price: Set(input.price),
            quantity: Set(input.quantity),
        }
    }
}
