//! Scene registry: every live ship, debris piece and projectile.
//!
//! Any task may read any entry (collision queries), but only the holder of an
//! entry's [`Lease`] may move it or remove it. Debris is the one exception: a
//! projectile that hits a piece may [`Scene::destroy`] it by id, after which
//! the owning task sees its lease go stale and stops.
//!
//! Ids are allocated monotonically and never reused, so a stale lease can
//! never address a newer entity.

use std::collections::BTreeMap;
use std::fmt;

use space_garbage_core::Entity;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "entity-{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Ship,
    Debris,
    Projectile,
}

impl EntityKind {
    /// Whether a task other than the owner may remove entities of this kind.
    pub fn is_destructible(self) -> bool {
        matches!(self, EntityKind::Debris)
    }
}

/// Write access to one registered entity. Held by the task that drives it.
#[derive(Debug)]
#[must_use = "an unreleased lease leaves its entity in the scene"]
pub struct Lease {
    id: EntityId,
    kind: EntityKind,
}

impl Lease {
    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    #[error("{0} is not registered")]
    NotRegistered(EntityId),

    #[error("{id} is a {kind:?} and only its owner may remove it")]
    NotDestructible { id: EntityId, kind: EntityKind },
}

#[derive(Debug)]
struct Slot {
    kind: EntityKind,
    entity: Entity,
}

#[derive(Debug, Default)]
pub struct Scene {
    slots: BTreeMap<EntityId, Slot>,
    next_id: u64,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `entity` and hand back the only lease that may mutate it.
    pub fn register(&mut self, kind: EntityKind, entity: Entity) -> Lease {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.slots.insert(id, Slot { kind, entity });
        Lease { id, kind }
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.slots.get(&id).map(|slot| &slot.entity)
    }

    pub fn kind_of(&self, id: EntityId) -> Option<EntityKind> {
        self.slots.get(&id).map(|slot| slot.kind)
    }

    /// `None` once the entity was destroyed by someone else.
    pub fn entity(&self, lease: &Lease) -> Option<&Entity> {
        self.get(lease.id)
    }

    pub fn entity_mut(&mut self, lease: &Lease) -> Option<&mut Entity> {
        self.slots.get_mut(&lease.id).map(|slot| &mut slot.entity)
    }

    pub fn is_registered(&self, id: EntityId) -> bool {
        self.slots.contains_key(&id)
    }

    /// Owner-side removal. `None` if the entity was already destroyed.
    pub fn release(&mut self, lease: Lease) -> Option<Entity> {
        self.slots.remove(&lease.id).map(|slot| slot.entity)
    }

    /// Third-party removal, allowed for destructible kinds only.
    pub fn destroy(&mut self, id: EntityId) -> Result<Entity, SceneError> {
        let kind = self.kind_of(id).ok_or(SceneError::NotRegistered(id))?;
        if !kind.is_destructible() {
            return Err(SceneError::NotDestructible { id, kind });
        }
        self.slots
            .remove(&id)
            .map(|slot| slot.entity)
            .ok_or(SceneError::NotRegistered(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntityId, EntityKind, &Entity)> {
        self.slots
            .iter()
            .map(|(&id, slot)| (id, slot.kind, &slot.entity))
    }

    /// First entity of `kind` (in id order) intersecting `probe`.
    pub fn first_hit(&self, probe: &Entity, kind: EntityKind) -> Option<EntityId> {
        self.iter()
            .find(|&(_, k, entity)| k == kind && entity.intersects(probe))
            .map(|(id, _, _)| id)
    }

    /// Whether `probe` would overlap anything already registered.
    pub fn overlaps_any(&self, probe: &Entity) -> bool {
        self.slots.values().any(|slot| slot.entity.intersects(probe))
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn count(&self, kind: EntityKind) -> usize {
        self.slots.values().filter(|slot| slot.kind == kind).count()
    }
}
