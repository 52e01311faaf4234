//! Pooled entity storage
//!
//! Every spawned entity lives in the registry's `hecs::World` and carries a
//! [`Pooled`] back-reference naming its prototype and owning registry.
//! Callers hold a [`PoolHandle`] that pairs the entity with the registry
//! that issued it. Entity ids are only unique within one world, so the
//! handle's registry is checked before the world is touched; a handle can
//! only be returned to the registry that produced it, and only while active.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use glam::{Quat, Vec3};
use hecs::{Entity, World};

use super::pool::ObjectPool;
use super::prototype::{PrototypeId, PrototypeLibrary};
use crate::core::{Error, Result};

static NEXT_REGISTRY_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of one [`PoolRegistry`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RegistryId(u64);

impl RegistryId {
    fn next() -> Self {
        Self(NEXT_REGISTRY_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// An entity together with the registry that handed it out
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PoolHandle {
    registry: RegistryId,
    entity: Entity,
}

impl PoolHandle {
    pub fn entity(&self) -> Entity {
        self.entity
    }

    pub fn registry(&self) -> RegistryId {
        self.registry
    }
}

/// World placement of a spawned entity
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl Transform {
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }
}

/// Back-reference from an entity to its prototype and registry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pooled {
    pub prototype: PrototypeId,
    pub registry: RegistryId,
}

/// Whether an entity is live in the scene or parked in a pool
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PoolState {
    Active,
    Inactive,
}

/// Debug name copied from the prototype
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrototypeName(pub String);

/// What happened to a released entity
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Released {
    /// Deactivated and queued for reuse
    Pooled,
    /// Removed from the world
    Despawned,
}

/// Owns spawned entities and recycles them per prototype
pub struct PoolRegistry {
    id: RegistryId,
    world: World,
    library: PrototypeLibrary,
    pools: HashMap<PrototypeId, ObjectPool>,
    use_pooling: bool,
}

impl PoolRegistry {
    pub fn new(library: PrototypeLibrary, use_pooling: bool) -> Self {
        Self {
            id: RegistryId::next(),
            world: World::new(),
            library,
            pools: HashMap::new(),
            use_pooling,
        }
    }

    /// Pre-instantiate `count` inactive entities for a prototype.
    ///
    /// Does nothing when pooling is disabled. Returns the number created.
    pub fn warm(&mut self, prototype: PrototypeId, count: usize) -> Result<usize> {
        self.ensure_known(prototype)?;
        if !self.use_pooling {
            return Ok(0);
        }

        let mut pool = self
            .pools
            .remove(&prototype)
            .unwrap_or_else(|| ObjectPool::with_capacity(prototype, count));
        for _ in 0..count {
            let entity = self.instantiate(prototype, PoolState::Inactive);
            pool.push(entity);
        }
        self.pools.insert(prototype, pool);

        log::debug!("Warmed pool {} with {} entities", prototype, count);
        Ok(count)
    }

    /// Take an active entity of `prototype`, reusing a pooled one when possible
    pub fn acquire(&mut self, prototype: PrototypeId) -> Result<PoolHandle> {
        self.ensure_known(prototype)?;

        if self.use_pooling {
            if let Some(entity) = self.pools.get_mut(&prototype).and_then(ObjectPool::pop) {
                if let Ok(mut state) = self.world.get::<&mut PoolState>(entity) {
                    *state = PoolState::Active;
                    return Ok(self.handle(entity));
                }
                log::warn!("Pooled entity {:?} vanished from the world", entity);
            } else {
                log::trace!("Pool {} empty, instantiating", prototype);
            }
        }

        let entity = self.instantiate(prototype, PoolState::Active);
        Ok(self.handle(entity))
    }

    /// Hand an active entity back.
    ///
    /// With pooling the entity is deactivated and queued for reuse (its pool
    /// is created on demand); without pooling it is despawned.
    pub fn release(&mut self, handle: PoolHandle) -> Result<Released> {
        let prototype = self.check_active(handle)?;
        let entity = handle.entity;

        if !self.use_pooling {
            self.world
                .despawn(entity)
                .map_err(|_| Error::ForeignEntity(entity))?;
            return Ok(Released::Despawned);
        }

        if let Ok(mut state) = self.world.get::<&mut PoolState>(entity) {
            *state = PoolState::Inactive;
        }
        self.pools
            .entry(prototype)
            .or_insert_with(|| ObjectPool::new(prototype))
            .push(entity);
        Ok(Released::Pooled)
    }

    /// Move an entity
    pub fn set_transform(&mut self, handle: PoolHandle, transform: Transform) -> Result<()> {
        self.check_owned(handle)?;
        let mut current = self
            .world
            .get::<&mut Transform>(handle.entity)
            .map_err(|_| Error::ForeignEntity(handle.entity))?;
        *current = transform;
        Ok(())
    }

    pub fn transform(&self, handle: PoolHandle) -> Option<Transform> {
        self.check_owned(handle).ok()?;
        self.world.get::<&Transform>(handle.entity).ok().map(|t| *t)
    }

    /// Prototype an entity was instantiated from
    pub fn prototype_of(&self, handle: PoolHandle) -> Option<PrototypeId> {
        self.check_owned(handle).ok()
    }

    pub fn is_active(&self, handle: PoolHandle) -> bool {
        self.check_active(handle).is_ok()
    }

    /// Number of active entities across all prototypes
    pub fn active_count(&self) -> usize {
        let mut query = self.world.query::<&PoolState>();
        query
            .iter()
            .filter(|(_, state)| **state == PoolState::Active)
            .count()
    }

    /// Number of inactive entities waiting in a prototype's pool
    pub fn pooled_count(&self, prototype: PrototypeId) -> usize {
        self.pools.get(&prototype).map_or(0, ObjectPool::len)
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn library(&self) -> &PrototypeLibrary {
        &self.library
    }

    pub fn id(&self) -> RegistryId {
        self.id
    }

    pub fn use_pooling(&self) -> bool {
        self.use_pooling
    }

    fn ensure_known(&self, prototype: PrototypeId) -> Result<()> {
        if self.library.contains(prototype) {
            Ok(())
        } else {
            Err(Error::UnknownPrototype(prototype))
        }
    }

    fn handle(&self, entity: Entity) -> PoolHandle {
        PoolHandle {
            registry: self.id,
            entity,
        }
    }

    fn instantiate(&mut self, prototype: PrototypeId, state: PoolState) -> Entity {
        let name = self
            .library
            .get(prototype)
            .map(|p| p.name.clone())
            .unwrap_or_default();
        self.world.spawn((
            Transform::default(),
            Pooled {
                prototype,
                registry: self.id,
            },
            state,
            PrototypeName(name),
        ))
    }

    fn check_owned(&self, handle: PoolHandle) -> Result<PrototypeId> {
        let entity = handle.entity;
        if handle.registry != self.id() {
            return Err(Error::ForeignEntity(entity));
        }
        let pooled = self
            .world
            .get::<&Pooled>(entity)
            .map_err(|_| Error::ForeignEntity(entity))?;
        if pooled.registry != self.id {
            return Err(Error::ForeignEntity(entity));
        }
        Ok(pooled.prototype)
    }

    fn check_active(&self, handle: PoolHandle) -> Result<PrototypeId> {
        let prototype = self.check_owned(handle)?;
        match self.world.get::<&PoolState>(handle.entity).map(|s| *s) {
            Ok(PoolState::Active) => Ok(prototype),
            _ => Err(Error::ForeignEntity(handle.entity)),
        }
    }
}

impl std::fmt::Debug for PoolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PoolRegistry")
            .field("id", &self.id)
            .field("entities", &self.world.len())
            .field("pools", &self.pools.len())
            .field("use_pooling", &self.use_pooling)
            .finish()
    }
}
