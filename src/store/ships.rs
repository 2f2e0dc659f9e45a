//! Ship repository.

use std::sync::Arc;

use tracing::info;

use crate::models::{NewShip, Ship, ShipPatch, generate_id};
use crate::storage::{
    StorageBackend, StorageError, collections, load_collection, save_collection,
};

/// In-memory cache of the ships collection, persisted on every mutation.
pub struct ShipRepository {
    backend: Arc<dyn StorageBackend>,
    ships: Vec<Ship>,
}

impl ShipRepository {
    /// Load the ships collection from the backend.
    pub fn load(backend: Arc<dyn StorageBackend>) -> Result<Self, StorageError> {
        let ships = load_collection(backend.as_ref(), collections::SHIPS)?;
        Ok(Self { backend, ships })
    }

    pub fn all(&self) -> &[Ship] {
        &self.ships
    }

    pub fn get_by_id(&self, id: &str) -> Option<&Ship> {
        self.ships.iter().find(|ship| ship.id == id)
    }

    /// Add a ship with a freshly assigned id.
    pub fn add(&mut self, new: NewShip) -> Result<Ship, StorageError> {
        let ship = Ship {
            id: generate_id("s"),
            name: new.name,
            imo: new.imo,
            flag: new.flag,
            status: new.status,
        };
        self.ships.push(ship.clone());
        self.persist()?;
        info!(ship = %ship.name, id = %ship.id, "added ship");
        Ok(ship)
    }

    /// Merge a patch into the ship with the given id.
    pub fn update(&mut self, id: &str, patch: ShipPatch) -> Result<Ship, StorageError> {
        let ship = self
            .ships
            .iter_mut()
            .find(|ship| ship.id == id)
            .ok_or_else(|| StorageError::not_found("ship", id))?;
        ship.apply(patch);
        let updated = ship.clone();
        self.persist()?;
        info!(ship = %updated.name, id = %updated.id, "updated ship");
        Ok(updated)
    }

    /// Remove a ship, returning the removed record. Cascading deletes of
    /// its components and jobs are coordinated by the [`FleetStore`].
    ///
    /// [`FleetStore`]: crate::store::FleetStore
    pub fn delete(&mut self, id: &str) -> Result<Ship, StorageError> {
        let index = self
            .ships
            .iter()
            .position(|ship| ship.id == id)
            .ok_or_else(|| StorageError::not_found("ship", id))?;
        let removed = self.ships.remove(index);
        self.persist()?;
        Ok(removed)
    }

    fn persist(&self) -> Result<(), StorageError> {
        save_collection(self.backend.as_ref(), collections::SHIPS, &self.ships)
    }
}
