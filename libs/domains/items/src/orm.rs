//! ORM adapter backed by SeaORM entities
//!
//! Updates are an explicit fetch-then-write; nothing relies on implicit
//! flush timing, so a completed call means the row is durable.

use async_trait::async_trait;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};
use tracing::instrument;

use crate::entity;
use crate::error::{ItemError, ItemResult};
use crate::models::{CreateItem, Item, ItemFilter, ItemPredicate, UpdateItem};
use crate::repository::ItemRepository;

/// SeaORM implementation of the ItemRepository
pub struct SeaOrmItemRepository {
    db: DatabaseConnection,
}

impl SeaOrmItemRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Build the WHERE condition from the shared predicate list
    ///
    /// An empty list yields an empty conjunction, which SeaORM omits from
    /// the generated statement entirely.
    fn build_condition(filter: &ItemFilter) -> Condition {
        let mut condition = Condition::all();

        for predicate in filter.predicates() {
            condition = condition.add(match predicate {
                ItemPredicate::NameContains(name) => entity::Column::ItemName.contains(&name),
                ItemPredicate::MaxPrice(max_price) => entity::Column::Price.lte(max_price),
            });
        }

        condition
    }
}

#[async_trait]
impl ItemRepository for SeaOrmItemRepository {
    #[instrument(skip(self, input), fields(item_name = %input.name))]
    async fn insert(&self, input: CreateItem) -> ItemResult<Item> {
        let active: entity::ActiveModel = input.into();
        let model = active.insert(&self.db).await?;

        tracing::info!(item_id = %model.id, "Item inserted");
        Ok(model.into())
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: i64, input: UpdateItem) -> ItemResult<()> {
        entity::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(ItemError::NotFound(id))?;

        let active = entity::ActiveModel {
            id: Set(id),
            item_name: Set(input.name),
            price: Set(input.price),
            quantity: Set(input.quantity),
        };

        match active.update(&self.db).await {
            Ok(_) => {
                tracing::info!(item_id = %id, "Item updated");
                Ok(())
            }
            // The row can vanish between the lookup and the write
            Err(DbErr::RecordNotUpdated) => Err(ItemError::NotFound(id)),
            Err(e) => Err(e.into()),
        }
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> ItemResult<Option<Item>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Item::from))
    }

    #[instrument(skip(self))]
    async fn find_all(&self, filter: ItemFilter) -> ItemResult<Vec<Item>> {
        let models = entity::Entity::find()
            .filter(Self::build_condition(&filter))
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Item::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DbBackend, QueryTrait};

    fn select_sql(filter: &ItemFilter) -> String {
        entity::Entity::find()
            .filter(SeaOrmItemRepository::build_condition(filter))
            .build(DbBackend::Sqlite)
            .to_string()
    }

    #[test]
    fn test_build_condition_empty_filter_has_no_where() {
        let sql = select_sql(&ItemFilter::default());
        assert!(!sql.contains("WHERE"), "unexpected WHERE in: {sql}");
    }

    #[test]
    fn test_build_condition_with_name() {
        let sql = select_sql(&ItemFilter {
            name_contains: Some("itemA".to_string()),
            ..Default::default()
        });
        assert!(sql.contains("LIKE '%itemA%'"), "missing LIKE in: {sql}");
    }

    #[test]
    fn test_build_condition_joins_with_and() {
        let sql = select_sql(&ItemFilter {
            name_contains: Some("itemA".to_string()),
            max_price: Some(10_000),
        });
        assert!(sql.contains("AND"), "missing AND in: {sql}");
        assert!(sql.contains("<= 10000"), "missing price bound in: {sql}");
    }

    #[test]
    fn test_build_condition_empty_name_is_elided() {
        let sql = select_sql(&ItemFilter {
            name_contains: Some(String::new()),
            max_price: None,
        });
        assert!(!sql.contains("WHERE"), "unexpected WHERE in: {sql}");
    }
}
