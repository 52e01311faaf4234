//! Named spawnable prototypes

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Handle to a registered prototype
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PrototypeId(pub u32);

impl std::fmt::Display for PrototypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Template that spawned entities are instantiated from
#[derive(Clone, Debug, PartialEq)]
pub struct Prototype {
    pub id: PrototypeId,
    pub name: String,
}

/// Registry of prototypes, addressable by id or name
#[derive(Clone, Debug, Default)]
pub struct PrototypeLibrary {
    prototypes: Vec<Prototype>,
    by_name: HashMap<String, PrototypeId>,
}

impl PrototypeLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a prototype by name. Registering an existing name returns its id.
    pub fn register(&mut self, name: impl Into<String>) -> PrototypeId {
        let name = name.into();
        if let Some(&id) = self.by_name.get(&name) {
            return id;
        }

        let id = PrototypeId(self.prototypes.len() as u32);
        self.by_name.insert(name.clone(), id);
        self.prototypes.push(Prototype { id, name });
        id
    }

    pub fn get(&self, id: PrototypeId) -> Option<&Prototype> {
        self.prototypes.get(id.0 as usize)
    }

    pub fn by_name(&self, name: &str) -> Option<PrototypeId> {
        self.by_name.get(name).copied()
    }

    pub fn contains(&self, id: PrototypeId) -> bool {
        (id.0 as usize) < self.prototypes.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Prototype> {
        self.prototypes.iter()
    }

    pub fn len(&self) -> usize {
        self.prototypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prototypes.is_empty()
    }
}
