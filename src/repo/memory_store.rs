use std::collections::HashMap;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::owner::OwnerRead;
use crate::models::pet::PetRead;

/// Process-local storage for both entity types. One instance is created at
/// startup and injected into the handlers as shared application data, so a
/// fresh store per test gives full isolation.
///
/// Each map sits behind its own `RwLock`; every read-modify-write sequence
/// holds the write guard for the whole operation, which keeps concurrent
/// requests from interleaving partial mutations. Guards are never held
/// across an await point.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pets: RwLock<HashMap<Uuid, PetRead>>,
    owners: RwLock<HashMap<Uuid, OwnerRead>>,
}

impl MemoryStore {

    pub fn new() -> MemoryStore {
        MemoryStore::default()
    }

    pub(crate) fn pets(&self) -> &RwLock<HashMap<Uuid, PetRead>> {
        &self.pets
    }

    pub(crate) fn owners(&self) -> &RwLock<HashMap<Uuid, OwnerRead>> {
        &self.owners
    }
}
