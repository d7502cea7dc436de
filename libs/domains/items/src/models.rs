use serde::{Deserialize, Serialize};
use validator::Validate;

/// Item entity
///
/// A detached snapshot of one persisted record. The id is assigned by the
/// store at insertion time and never changes afterwards; mutating a returned
/// `Item` has no effect on the durable copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub price: i64,
    pub quantity: i64,
}

/// Input for inserting a new item; the store assigns the id
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateItem {
    #[validate(length(min = 1, max = 10))]
    pub name: String,
    #[validate(range(min = 0))]
    pub price: i64,
    #[validate(range(min = 0))]
    pub quantity: i64,
}

/// Full overwrite of name/price/quantity for an existing id
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateItem {
    #[validate(length(min = 1, max = 10))]
    pub name: String,
    #[validate(range(min = 0))]
    pub price: i64,
    #[validate(range(min = 0))]
    pub quantity: i64,
}

/// Query filters for listing items
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemFilter {
    /// Substring match on the item name; None or empty means no constraint
    pub name_contains: Option<String>,
    /// Inclusive upper bound on price; None means no constraint
    pub max_price: Option<i64>,
}

/// One search criterion, materialized only when actually present.
///
/// Every backend builds its query from this list, composing the entries with
/// logical AND. An absent criterion contributes nothing at all; it is never
/// defaulted to a tautological comparison, which for `max_price` would
/// exclude every row instead of none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemPredicate {
    NameContains(String),
    MaxPrice(i64),
}

impl ItemFilter {
    /// Materialize the criteria that are present
    pub fn predicates(&self) -> Vec<ItemPredicate> {
        let mut predicates = Vec::new();

        if let Some(name) = self.name_contains.as_deref().filter(|s| !s.is_empty()) {
            predicates.push(ItemPredicate::NameContains(name.to_string()));
        }
        if let Some(max_price) = self.max_price {
            predicates.push(ItemPredicate::MaxPrice(max_price));
        }

        predicates
    }
}

impl ItemPredicate {
    /// Evaluate this criterion against an in-memory item
    pub fn matches(&self, item: &Item) -> bool {
        match self {
            ItemPredicate::NameContains(name) => item.name.contains(name.as_str()),
            ItemPredicate::MaxPrice(max_price) => item.price <= *max_price,
        }
    }
}
