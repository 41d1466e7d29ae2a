use std::collections::HashMap;

use chrono::Utc;
use tracing::debug;

use crate::actor::{Actor, ActorId};
use crate::error::{CoreError, CoreResult};
use crate::item::{Item, ItemId};

/// Get/create/update/delete access to actor documents, keyed by ID.
///
/// The host owns the documents; sheets only read and mutate them through
/// this capability. Dice resolution never touches it.
pub trait DocumentStore {
    /// Get an actor by ID.
    fn get(&self, id: ActorId) -> Option<&Actor>;

    /// Insert a new actor. Returns its ID.
    fn create(&mut self, actor: Actor) -> CoreResult<ActorId>;

    /// Mutate an actor in place and return whatever the closure returns.
    fn update<R>(&mut self, id: ActorId, f: impl FnOnce(&mut Actor) -> R) -> CoreResult<R>;

    /// Remove an actor and return it.
    fn delete(&mut self, id: ActorId) -> CoreResult<Actor>;

    /// Embed a new item in an actor.
    fn create_item(&mut self, actor: ActorId, item: Item) -> CoreResult<ItemId> {
        let item_id = item.id;
        self.update(actor, |a| a.items.push(item))?;
        Ok(item_id)
    }

    /// Remove an embedded item from an actor.
    fn delete_item(&mut self, actor: ActorId, item: ItemId) -> CoreResult<Item> {
        let removed = self.update(actor, |a| {
            a.items
                .iter()
                .position(|i| i.id == item)
                .map(|pos| a.items.remove(pos))
        })?;
        removed.ok_or(CoreError::ItemNotFound { actor, item })
    }
}

/// A [`DocumentStore`] held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    actors: HashMap<ActorId, Actor>,
    by_name_lower: HashMap<String, ActorId>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Find an actor by name (case-insensitive).
    pub fn find_by_name(&self, name: &str) -> Option<&Actor> {
        self.by_name_lower
            .get(&name.to_lowercase())
            .and_then(|id| self.actors.get(id))
    }

    /// Iterate over all actors.
    pub fn all_actors(&self) -> impl Iterator<Item = &Actor> {
        self.actors.values()
    }

    /// Number of actors in the store.
    pub fn len(&self) -> usize {
        self.actors.len()
    }

    /// Returns true if the store holds no actors.
    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }
}

impl DocumentStore for MemoryStore {
    fn get(&self, id: ActorId) -> Option<&Actor> {
        self.actors.get(&id)
    }

    fn create(&mut self, actor: Actor) -> CoreResult<ActorId> {
        let name_lower = actor.name.to_lowercase();
        if self.by_name_lower.contains_key(&name_lower) {
            return Err(CoreError::DuplicateName(actor.name.clone()));
        }
        let id = actor.id;
        debug!(actor = %id, name = %actor.name, "create actor");
        self.by_name_lower.insert(name_lower, id);
        self.actors.insert(id, actor);
        Ok(id)
    }

    fn update<R>(&mut self, id: ActorId, f: impl FnOnce(&mut Actor) -> R) -> CoreResult<R> {
        let current = self.actors.get(&id).ok_or(CoreError::ActorNotFound(id))?;

        // Work on a copy so a rejected rename leaves the document untouched.
        let mut next = current.clone();
        let result = f(&mut next);
        next.id = id;

        let old_lower = current.name.to_lowercase();
        let new_lower = next.name.to_lowercase();
        if old_lower != new_lower {
            if self.by_name_lower.contains_key(&new_lower) {
                return Err(CoreError::DuplicateName(next.name));
            }
            self.by_name_lower.remove(&old_lower);
            self.by_name_lower.insert(new_lower, id);
        }

        next.updated_at = Utc::now();
        debug!(actor = %id, "update actor");
        self.actors.insert(id, next);
        Ok(result)
    }

    fn delete(&mut self, id: ActorId) -> CoreResult<Actor> {
        let actor = self.actors.remove(&id).ok_or(CoreError::ActorNotFound(id))?;
        self.by_name_lower.remove(&actor.name.to_lowercase());
        debug!(actor = %id, "delete actor");
        Ok(actor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::ActorKind;
    use crate::item::ItemType;
    use crate::stats::Attribute;

    fn store_with(name: &str) -> (MemoryStore, ActorId) {
        let mut store = MemoryStore::new();
        let id = store
            .create(Actor::new(ActorKind::PlayerCharacter, name))
            .unwrap();
        (store, id)
    }

    #[test]
    fn create_and_get() {
        let (store, id) = store_with("Aurore");
        assert_eq!(store.get(id).unwrap().name, "Aurore");
        assert_eq!(store.len(), 1);
        assert!(store.find_by_name("aurore").is_some());
    }

    #[test]
    fn duplicate_name_rejected() {
        let (mut store, _) = store_with("Aurore");
        let err = store
            .create(Actor::new(ActorKind::Villain, "AURORE"))
            .unwrap_err();
        assert!(matches!(err, CoreError::DuplicateName(_)));
    }

    #[test]
    fn update_mutates_and_returns() {
        let (mut store, id) = store_with("Aurore");
        let old = store
            .update(id, |a| a.attributes.insert(Attribute::Wits, 3))
            .unwrap();
        assert_eq!(old, Some(1));
        assert_eq!(store.get(id).unwrap().attribute(Attribute::Wits), 3);
    }

    #[test]
    fn update_reindexes_renames() {
        let (mut store, id) = store_with("Aurore");
        store.update(id, |a| a.name = "Aurore du Lac".into()).unwrap();
        assert!(store.find_by_name("aurore").is_none());
        assert!(store.find_by_name("aurore du lac").is_some());
    }

    #[test]
    fn rename_to_existing_name_is_rolled_back() {
        let (mut store, id) = store_with("Aurore");
        store
            .create(Actor::new(ActorKind::Villain, "Verdugo"))
            .unwrap();
        let err = store
            .update(id, |a| {
                a.name = "Verdugo".into();
                a.heroism = 9;
            })
            .unwrap_err();
        assert!(matches!(err, CoreError::DuplicateName(_)));
        let actor = store.get(id).unwrap();
        assert_eq!(actor.name, "Aurore");
        assert_eq!(actor.heroism, 0);
    }

    #[test]
    fn update_missing_actor() {
        let mut store = MemoryStore::new();
        let err = store.update(ActorId::new(), |_| ()).unwrap_err();
        assert!(matches!(err, CoreError::ActorNotFound(_)));
    }

    #[test]
    fn delete_removes_index() {
        let (mut store, id) = store_with("Aurore");
        let removed = store.delete(id).unwrap();
        assert_eq!(removed.name, "Aurore");
        assert!(store.is_empty());
        assert!(store.find_by_name("Aurore").is_none());
        assert!(store.delete(id).is_err());
    }

    #[test]
    fn embedded_items() {
        let (mut store, id) = store_with("Aurore");
        let item_id = store
            .create_item(id, Item::new_default(ItemType::Advantage))
            .unwrap();
        assert!(store.get(id).unwrap().item(item_id).is_some());

        let removed = store.delete_item(id, item_id).unwrap();
        assert_eq!(removed.id, item_id);
        assert!(store.get(id).unwrap().items.is_empty());

        let err = store.delete_item(id, item_id).unwrap_err();
        assert!(matches!(err, CoreError::ItemNotFound { .. }));
    }
}
