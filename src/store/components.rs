//! Component repository.

use std::sync::Arc;

use chrono::{Months, NaiveDate};
use tracing::{info, warn};

use crate::models::{ComponentPatch, NewComponent, ShipComponent, generate_id};
use crate::storage::{
    StorageBackend, StorageError, collections, load_collection, save_collection,
};

/// In-memory cache of the components collection, persisted on every mutation.
pub struct ComponentRepository {
    backend: Arc<dyn StorageBackend>,
    components: Vec<ShipComponent>,
}

impl ComponentRepository {
    /// Load the components collection from the backend.
    pub fn load(backend: Arc<dyn StorageBackend>) -> Result<Self, StorageError> {
        let components = load_collection(backend.as_ref(), collections::COMPONENTS)?;
        Ok(Self {
            backend,
            components,
        })
    }

    pub fn all(&self) -> &[ShipComponent] {
        &self.components
    }

    pub fn get_by_id(&self, id: &str) -> Option<&ShipComponent> {
        self.components.iter().find(|c| c.id == id)
    }

    pub fn get_by_ship_id(&self, ship_id: &str) -> Vec<&ShipComponent> {
        self.components
            .iter()
            .filter(|c| c.ship_id == ship_id)
            .collect()
    }

    /// Components whose last maintenance lies more than six months before
    /// `today`.
    pub fn overdue_maintenance(&self, today: NaiveDate) -> Vec<&ShipComponent> {
        let cutoff = today
            .checked_sub_months(Months::new(6))
            .unwrap_or(NaiveDate::MIN);
        self.components
            .iter()
            .filter(|c| c.last_maintenance_date < cutoff)
            .collect()
    }

    /// Add a component; install and last-maintenance dates default to `today`.
    pub fn add(&mut self, new: NewComponent, today: NaiveDate) -> Result<ShipComponent, StorageError> {
        let component = ShipComponent {
            id: generate_id("c"),
            ship_id: new.ship_id,
            name: new.name,
            serial_number: new.serial_number,
            install_date: new.install_date.unwrap_or(today),
            last_maintenance_date: new.last_maintenance_date.unwrap_or(today),
        };
        self.components.push(component.clone());
        self.persist()?;
        info!(component = %component.name, id = %component.id, ship = %component.ship_id, "added component");
        Ok(component)
    }

    /// Merge a patch into the component with the given id.
    pub fn update(&mut self, id: &str, patch: ComponentPatch) -> Result<ShipComponent, StorageError> {
        let component = self
            .components
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| StorageError::not_found("component", id))?;
        component.apply(patch);
        let updated = component.clone();
        self.persist()?;
        info!(component = %updated.name, id = %updated.id, "updated component");
        Ok(updated)
    }

    /// Remove a component, returning the removed record.
    pub fn delete(&mut self, id: &str) -> Result<ShipComponent, StorageError> {
        let index = self
            .components
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| StorageError::not_found("component", id))?;
        let removed = self.components.remove(index);
        self.persist()?;
        Ok(removed)
    }

    /// Cascade helper: drop every component owned by `ship_id`.
    pub fn remove_by_ship(&mut self, ship_id: &str) -> Result<usize, StorageError> {
        let before = self.components.len();
        self.components.retain(|c| c.ship_id != ship_id);
        let removed = before - self.components.len();
        if removed > 0 {
            self.persist()?;
            warn!(ship = %ship_id, removed, "cascade-deleted components");
        }
        Ok(removed)
    }

    /// Record a completed maintenance on a component. A missing component is
    /// a no-op: its jobs may outlive it only in externally edited snapshots.
    pub fn touch_last_maintenance(
        &mut self,
        id: &str,
        date: NaiveDate,
    ) -> Result<(), StorageError> {
        if let Some(component) = self.components.iter_mut().find(|c| c.id == id) {
            component.last_maintenance_date = date;
            self.persist()?;
        }
        Ok(())
    }

    fn persist(&self) -> Result<(), StorageError> {
        save_collection(
            self.backend.as_ref(),
            collections::COMPONENTS,
            &self.components,
        )
    }
}
