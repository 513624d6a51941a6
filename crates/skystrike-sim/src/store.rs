//! Owned entity collections.
//!
//! Each subsystem owns one `EntityStore` per entity kind. Insertion order is
//! creation order, so index 0 is always the oldest live entity.

use skystrike_core::types::EntityId;

/// Anything held in an `EntityStore`.
pub trait StoredEntity {
    fn id(&self) -> EntityId;
}

/// Ordered collection of live entities of one kind.
#[derive(Debug, Clone)]
pub struct EntityStore<T> {
    items: Vec<T>,
}

impl<T> Default for EntityStore<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: StoredEntity> EntityStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    pub fn find(&self, id: EntityId) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Append a newly created entity (it becomes the newest).
    pub fn insert(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove by index, keeping the order of the rest.
    pub fn remove_at(&mut self, index: usize) -> T {
        self.items.remove(index)
    }

    pub fn remove(&mut self, id: EntityId) -> Option<T> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(index))
    }

    /// Drop the oldest entities until at most `max` remain. Returns the evicted ones,
    /// oldest first.
    pub fn evict_oldest(&mut self, max: usize) -> Vec<T> {
        let excess = self.items.len().saturating_sub(max);
        self.items.drain(..excess).collect()
    }

    /// Remove everything, returning the former contents in order.
    pub fn take_all(&mut self) -> Vec<T> {
        std::mem::take(&mut self.items)
    }
}

/// Hands out entity ids. Ids are never reused for the lifetime of the allocator.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    next: u32,
}

impl IdAllocator {
    pub fn allocate(&mut self) -> EntityId {
        let id = EntityId(self.next);
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Dummy(EntityId);

    impl StoredEntity for Dummy {
        fn id(&self) -> EntityId {
            self.0
        }
    }

    fn filled(count: usize) -> (EntityStore<Dummy>, IdAllocator) {
        let mut ids = IdAllocator::default();
        let mut store = EntityStore::new();
        for _ in 0..count {
            store.insert(Dummy(ids.allocate()));
        }
        (store, ids)
    }

    #[test]
    fn test_evicts_oldest_first() {
        let (mut store, _) = filled(7);
        let evicted = store.evict_oldest(4);
        let evicted: Vec<u32> = evicted.iter().map(|d| d.0 .0).collect();
        assert_eq!(evicted, vec![0, 1, 2]);
        assert_eq!(store.len(), 4);
        assert_eq!(store.get(0).map(|d| d.0), Some(EntityId(3)));
    }

    #[test]
    fn test_evict_under_cap_is_noop() {
        let (mut store, _) = filled(2);
        assert!(store.evict_oldest(5).is_empty());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_remove_by_id_keeps_order() {
        let (mut store, _) = filled(4);
        assert!(store.remove(EntityId(1)).is_some());
        assert!(store.remove(EntityId(1)).is_none());
        let order: Vec<EntityId> = store.iter().map(|d| d.0).collect();
        assert_eq!(order, vec![EntityId(0), EntityId(2), EntityId(3)]);
    }

    #[test]
    fn test_ids_are_not_reused() {
        let (mut store, mut ids) = filled(3);
        store.take_all();
        assert!(store.is_empty());
        assert_eq!(ids.allocate(), EntityId(3));
    }
}
