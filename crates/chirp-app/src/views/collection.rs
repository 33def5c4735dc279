//! # Ordered Collection
//!
//! Items keyed by id that remember the order they were first mounted in, so a
//! feed renders in arrival order while lookups stay O(1).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::Hash;

/// Keyed collection with stable mount order.
///
/// Selection and filters are UI concerns and never live here; every access
/// names the id explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "Id: Serialize + Eq + Hash, Item: Serialize",
    deserialize = "Id: Deserialize<'de> + Eq + Hash, Item: Deserialize<'de>"
))]
pub struct OrderedCollection<Id, Item>
where
    Id: Eq + Hash + Clone,
{
    order: Vec<Id>,
    items: HashMap<Id, Item>,
}

impl<Id, Item> Default for OrderedCollection<Id, Item>
where
    Id: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self {
            order: Vec::new(),
            items: HashMap::new(),
        }
    }
}

impl<Id, Item> OrderedCollection<Id, Item>
where
    Id: Eq + Hash + Clone,
{
    /// Empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    // ─── Queries ─────────────────────────────────────────────

    /// Item by id.
    pub fn get(&self, id: &Id) -> Option<&Item> {
        self.items.get(id)
    }

    /// Mutable item by id.
    pub fn get_mut(&mut self, id: &Id) -> Option<&mut Item> {
        self.items.get_mut(id)
    }

    /// Whether `id` is mounted.
    pub fn contains(&self, id: &Id) -> bool {
        self.items.contains_key(id)
    }

    /// Items in mount order.
    pub fn iter(&self) -> impl Iterator<Item = (&Id, &Item)> {
        self.order
            .iter()
            .filter_map(|id| self.items.get(id).map(|item| (id, item)))
    }

    /// Ids in mount order.
    pub fn ids(&self) -> &[Id] {
        &self.order
    }

    /// Number of items.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing is mounted.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // ─── Mutations ───────────────────────────────────────────

    /// Insert or replace. A replaced item keeps its position.
    pub fn apply(&mut self, id: Id, item: Item) -> Option<Item> {
        let previous = self.items.insert(id.clone(), item);
        if previous.is_none() {
            self.order.push(id);
        }
        previous
    }

    /// Remove by id.
    pub fn remove(&mut self, id: &Id) -> Option<Item> {
        let removed = self.items.remove(id)?;
        self.order.retain(|existing| existing != id);
        Some(removed)
    }

    /// Update in place; returns whether `id` was mounted.
    pub fn update(&mut self, id: &Id, f: impl FnOnce(&mut Item)) -> bool {
        match self.items.get_mut(id) {
            Some(item) => {
                f(item);
                true
            }
            None => false,
        }
    }

    /// Update in place, surfacing a caller-chosen error when `id` is absent.
    pub fn try_update<T, E>(
        &mut self,
        id: &Id,
        f: impl FnOnce(&mut Item) -> Result<T, E>,
        not_found: impl FnOnce() -> E,
    ) -> Result<T, E> {
        match self.items.get_mut(id) {
            Some(item) => f(item),
            None => Err(not_found()),
        }
    }

    /// Apply `f` to every item.
    pub fn for_each_mut(&mut self, mut f: impl FnMut(&mut Item)) {
        self.items.values_mut().for_each(&mut f);
    }

    /// Drop everything.
    pub fn clear(&mut self) {
        self.order.clear();
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mount_order_survives_replace() {
        let mut coll: OrderedCollection<String, i32> = OrderedCollection::new();
        coll.apply("b".to_string(), 1);
        coll.apply("a".to_string(), 2);
        assert_eq!(coll.apply("b".to_string(), 3), Some(1));

        let pairs: Vec<_> = coll.iter().map(|(id, v)| (id.as_str(), *v)).collect();
        assert_eq!(pairs, vec![("b", 3), ("a", 2)]);
    }

    #[test]
    fn test_remove_and_update() {
        let mut coll: OrderedCollection<String, i32> = OrderedCollection::new();
        coll.apply("a".to_string(), 1);
        coll.apply("b".to_string(), 2);

        assert_eq!(coll.remove(&"a".to_string()), Some(1));
        assert_eq!(coll.ids(), &["b".to_string()]);
        assert!(coll.update(&"b".to_string(), |v| *v = 20));
        assert!(!coll.update(&"a".to_string(), |v| *v = 10));
        assert_eq!(coll.get(&"b".to_string()), Some(&20));
    }

    #[test]
    fn test_try_update_reports_missing() {
        let mut coll: OrderedCollection<String, i32> = OrderedCollection::new();
        let result: Result<(), &str> = coll.try_update(&"x".to_string(), |_| Ok(()), || "missing");
        assert_eq!(result, Err("missing"));
    }
}
