//! Authoritative in-memory item collection and the edit selection.

use serde::Serialize;
use shared::{
    domain::{Item, ItemId, ItemInput},
    error::TrackerError,
};

#[derive(Debug, Clone, Default)]
pub struct ItemStore {
    items: Vec<Item>,
    current: Option<ItemId>,
}

/// Serializable view of the whole store, used for state dumps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreSnapshot {
    pub items: Vec<Item>,
    pub current_item: Option<Item>,
    pub total_calories: i64,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with a previously persisted collection.
    pub fn from_items(items: Vec<Item>) -> Self {
        Self {
            items,
            current: None,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// One past the highest id in the collection, or 0 when empty.
    /// `None` once the highest id is `i64::MAX`.
    pub fn next_id(&self) -> Option<ItemId> {
        match self.items.iter().map(|item| item.id.0).max() {
            Some(max) => max.checked_add(1).map(ItemId),
            None => Some(ItemId(0)),
        }
    }

    pub fn add(&mut self, input: &ItemInput) -> Result<Item, TrackerError> {
        let (name, calories) = input.validate()?;
        let id = self.next_id().ok_or(TrackerError::IdsExhausted)?;
        let item = Item {
            id,
            name,
            calories,
        };
        self.items.push(item.clone());
        Ok(item)
    }

    pub fn get_by_id(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn set_current(&mut self, item: &Item) {
        self.current = Some(item.id);
    }

    pub fn current(&self) -> Option<&Item> {
        self.current.and_then(|id| self.get_by_id(id))
    }

    pub fn clear_current(&mut self) {
        self.current = None;
    }

    /// Rewrites the selected item in place. Input is validated before
    /// anything is touched.
    pub fn update(&mut self, input: &ItemInput) -> Result<Item, TrackerError> {
        let id = self.current.ok_or(TrackerError::NoCurrentItem)?;
        let (name, calories) = input.validate()?;
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(TrackerError::NotFound(id))?;
        item.name = name;
        item.calories = calories;
        Ok(item.clone())
    }

    /// Removes the item with `id`, returning it if it was present.
    pub fn delete(&mut self, id: ItemId) -> Option<Item> {
        let index = self.items.iter().position(|item| item.id == id)?;
        if self.current == Some(id) {
            self.current = None;
        }
        Some(self.items.remove(index))
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.current = None;
    }

    pub fn total_calories(&self) -> i64 {
        self.items
            .iter()
            .fold(0_i64, |sum, item| sum.saturating_add(item.calories))
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            items: self.items.clone(),
            current_item: self.current().cloned(),
            total_calories: self.total_calories(),
        }
    }
}

#[cfg(test)]
#[path = "tests/item_store_tests.rs"]
mod tests;
