//! Per-prototype queue of inactive entities

use std::collections::VecDeque;

use hecs::Entity;

use super::prototype::PrototypeId;

/// FIFO of inactive entities for one prototype
#[derive(Clone, Debug)]
pub struct ObjectPool {
    prototype: PrototypeId,
    inactive: VecDeque<Entity>,
}

impl ObjectPool {
    pub fn new(prototype: PrototypeId) -> Self {
        Self {
            prototype,
            inactive: VecDeque::new(),
        }
    }

    pub fn with_capacity(prototype: PrototypeId, capacity: usize) -> Self {
        Self {
            prototype,
            inactive: VecDeque::with_capacity(capacity),
        }
    }

    pub fn prototype(&self) -> PrototypeId {
        self.prototype
    }

    /// Enqueue an inactive entity at the back
    pub fn push(&mut self, entity: Entity) {
        debug_assert!(!self.inactive.contains(&entity), "entity pooled twice");
        self.inactive.push_back(entity);
    }

    /// Take the oldest inactive entity
    pub fn pop(&mut self) -> Option<Entity> {
        self.inactive.pop_front()
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.inactive.contains(&entity)
    }

    pub fn len(&self) -> usize {
        self.inactive.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inactive.is_empty()
    }
}
