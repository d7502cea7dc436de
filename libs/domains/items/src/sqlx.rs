//! Relational adapter using hand-written SQL over sqlx
//!
//! Every statement is written out and every value is bound as a parameter.
//! The dynamic WHERE clause is assembled from the shared predicate list, so
//! an absent criterion never reaches the SQL at all.

use async_trait::async_trait;
use sqlx::sqlite::SqlitePool;
use sqlx::{FromRow, QueryBuilder, Sqlite};
use tracing::instrument;

use crate::error::{ItemError, ItemResult};
use crate::models::{CreateItem, Item, ItemFilter, ItemPredicate, UpdateItem};
use crate::repository::ItemRepository;

const SELECT_ITEM: &str = "select id, item_name, price, quantity from item";

/// sqlx implementation of the ItemRepository
pub struct SqlxItemRepository {
    pool: SqlitePool,
}

#[derive(Debug, FromRow)]
struct ItemRow {
    id: i64,
    item_name: String,
    price: i64,
    quantity: i64,
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Self {
            id: row.id,
            name: row.item_name,
            price: row.price,
            quantity: row.quantity,
        }
    }
}

impl SqlxItemRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Assemble the filtered SELECT
    ///
    /// Each present criterion contributes one parameterized clause; the
    /// clauses are joined with AND by the builder, never by hand.
    fn select_query(filter: &ItemFilter) -> QueryBuilder<'static, Sqlite> {
        let mut query = QueryBuilder::new(SELECT_ITEM);
        let predicates = filter.predicates();

        if !predicates.is_empty() {
            query.push(" where ");
            let mut clauses = query.separated(" and ");
            for predicate in predicates {
                match predicate {
                    ItemPredicate::NameContains(name) => {
                        clauses.push("item_name like ");
                        clauses.push_bind_unseparated(format!("%{}%", name));
                    }
                    ItemPredicate::MaxPrice(max_price) => {
                        clauses.push("price <= ");
                        clauses.push_bind_unseparated(max_price);
                    }
                }
            }
        }

        query
    }
}

#[async_trait]
impl ItemRepository for SqlxItemRepository {
    #[instrument(skip(self, input), fields(item_name = %input.name))]
    async fn insert(&self, input: CreateItem) -> ItemResult<Item> {
        let result = sqlx::query("insert into item (item_name, price, quantity) values (?, ?, ?)")
            .bind(&input.name)
            .bind(input.price)
            .bind(input.quantity)
            .execute(&self.pool)
            .await?;

        // id is assigned by the engine, readable only after the insert
        let id = result.last_insert_rowid();
        tracing::info!(item_id = %id, "Item inserted");

        Ok(Item {
            id,
            name: input.name,
            price: input.price,
            quantity: input.quantity,
        })
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: i64, input: UpdateItem) -> ItemResult<()> {
        let result =
            sqlx::query("update item set item_name = ?, price = ?, quantity = ? where id = ?")
                .bind(&input.name)
                .bind(input.price)
                .bind(input.quantity)
                .bind(id)
                .execute(&self.pool)
                .await?;

        if result.rows_affected() == 0 {
            return Err(ItemError::NotFound(id));
        }

        tracing::info!(item_id = %id, "Item updated");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> ItemResult<Option<Item>> {
        let row = sqlx::query_as::<_, ItemRow>(
            "select id, item_name, price, quantity from item where id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Item::from))
    }

    #[instrument(skip(self))]
    async fn find_all(&self, filter: ItemFilter) -> ItemResult<Vec<Item>> {
        let mut query = Self::select_query(&filter);
        let rows: Vec<ItemRow> = query.build_query_as().fetch_all(&self.pool).await?;

        Ok(rows.into_iter().map(Item::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_query_without_filter_has_no_where() {
        let query = SqlxItemRepository::select_query(&ItemFilter::default());
        assert_eq!(query.sql(), "select id, item_name, price, quantity from item");
    }

    #[test]
    fn test_select_query_with_name_only() {
        let filter = ItemFilter {
            name_contains: Some("itemA".to_string()),
            ..Default::default()
        };
        let query = SqlxItemRepository::select_query(&filter);
        assert_eq!(
            query.sql(),
            "select id, item_name, price, quantity from item where item_name like ?"
        );
    }

    #[test]
    fn test_select_query_with_both_criteria() {
        let filter = ItemFilter {
            name_contains: Some("itemA".to_string()),
            max_price: Some(10_000),
        };
        let query = SqlxItemRepository::select_query(&filter);
        assert_eq!(
            query.sql(),
            "select id, item_name, price, quantity from item where item_name like ? and price <= ?"
        );
    }

    #[test]
    fn test_select_query_treats_empty_name_as_absent() {
        let filter = ItemFilter {
            name_contains: Some(String::new()),
            max_price: None,
        };
        let query = SqlxItemRepository::select_query(&filter);
        assert_eq!(query.sql(), "select id, item_name, price, quantity from item");
    }
}
