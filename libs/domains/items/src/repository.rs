use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{ItemError, ItemResult};
use crate::models::{CreateItem, Item, ItemFilter, UpdateItem};

/// Repository trait for Item persistence
///
/// The four-operation contract every storage adapter satisfies.
/// Implementations differ in engine and query API, never in observable
/// behavior.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Insert a new item; the store assigns the id and returns the full record
    async fn insert(&self, input: CreateItem) -> ItemResult<Item>;

    /// Overwrite name/price/quantity for an existing id
    ///
    /// Fails with [`ItemError::NotFound`] when the id does not exist. Two
    /// concurrent updates to the same id race; the last write wins.
    async fn update(&self, id: i64, input: UpdateItem) -> ItemResult<()>;

    /// Point lookup; an absent id is an empty result, not an error
    async fn find_by_id(&self, id: i64) -> ItemResult<Option<Item>>;

    /// Filtered scan, insertion order preserved
    async fn find_all(&self, filter: ItemFilter) -> ItemResult<Vec<Item>>;
}

/// In-memory implementation of the ItemRepository
///
/// An explicitly constructed, owned store; nothing is process-global. Ids
/// come from an atomic sequence and the map is keyed by id, so iteration
/// order is insertion order.
#[derive(Debug, Default, Clone)]
pub struct InMemoryItemRepository {
    items: Arc<RwLock<BTreeMap<i64, Item>>>,
    sequence: Arc<AtomicI64>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every record. Test helper only, not part of the store contract.
    #[cfg(any(test, feature = "test-util"))]
    pub async fn clear(&self) {
        self.items.write().await.clear();
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn insert(&self, input: CreateItem) -> ItemResult<Item> {
        let mut items = self.items.write().await;

        let id = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        let item = Item {
            id,
            name: input.name,
            price: input.price,
            quantity: input.quantity,
        };
        items.insert(id, item.clone());

        tracing::info!(item_id = %id, "Item inserted");
        Ok(item)
    }

    async fn update(&self, id: i64, input: UpdateItem) -> ItemResult<()> {
        let mut items = self.items.write().await;

        let item = items.get_mut(&id).ok_or(ItemError::NotFound(id))?;
        item.name = input.name;
        item.price = input.price;
        item.quantity = input.quantity;

        tracing::info!(item_id = %id, "Item updated");
        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> ItemResult<Option<Item>> {
        let items = self.items.read().await;
        Ok(items.get(&id).cloned())
    }

    async fn find_all(&self, filter: ItemFilter) -> ItemResult<Vec<Item>> {
        let predicates = filter.predicates();
        let items = self.items.read().await;

        Ok(items
            .values()
            .filter(|item| predicates.iter().all(|p| p.matches(item)))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(name: &str, price: i64, quantity: i64) -> CreateItem {
        CreateItem {
            name: name.to_string(),
            price,
            quantity,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids() {
        let repo = InMemoryItemRepository::new();

        let first = repo.insert(create("itemA-1", 10_000, 10)).await.unwrap();
        let second = repo.insert(create("itemA-2", 20_000, 20)).await.unwrap();

        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn test_find_by_id_round_trip() {
        let repo = InMemoryItemRepository::new();

        let created = repo.insert(create("item1", 10_000, 10)).await.unwrap();
        let fetched = repo.find_by_id(created.id).await.unwrap();

        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let repo = InMemoryItemRepository::new();

        let result = repo
            .update(99, UpdateItem {
                name: "item2".to_string(),
                price: 20_000,
                quantity: 30,
            })
            .await;

        assert!(matches!(result, Err(ItemError::NotFound(99))));
    }

    #[tokio::test]
    async fn test_update_overwrites_all_fields() {
        let repo = InMemoryItemRepository::new();

        let created = repo.insert(create("item1", 10_000, 10)).await.unwrap();
        repo.update(created.id, UpdateItem {
            name: "item2".to_string(),
            price: 20_000,
            quantity: 30,
        })
        .await
        .unwrap();

        let updated = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(updated, Item {
            id: created.id,
            name: "item2".to_string(),
            price: 20_000,
            quantity: 30,
        });
    }

    #[tokio::test]
    async fn test_find_all_preserves_insertion_order() {
        let repo = InMemoryItemRepository::new();

        repo.insert(create("itemB-1", 30_000, 30)).await.unwrap();
        repo.insert(create("itemA-1", 10_000, 10)).await.unwrap();

        let names: Vec<String> = repo
            .find_all(ItemFilter::default())
            .await
            .unwrap()
            .into_iter()
            .map(|item| item.name)
            .collect();

        assert_eq!(names, vec!["itemB-1", "itemA-1"]);
    }

    #[tokio::test]
    async fn test_clear_empties_the_store() {
        let repo = InMemoryItemRepository::new();

        repo.insert(create("item1", 10_000, 10)).await.unwrap();
        repo.clear().await;

        assert!(repo.find_all(ItemFilter::default()).await.unwrap().is_empty());
    }
}
