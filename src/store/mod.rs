//! Store module.
//!
//! Per-entity repositories, the notification center, the login session,
//! and the [`FleetStore`] facade that wires them all to one shared storage
//! backend.

pub mod components;
pub mod jobs;
pub mod notifications;
pub mod session;
pub mod ships;

pub use components::ComponentRepository;
pub use jobs::JobRepository;
pub use notifications::NotificationCenter;
pub use session::Session;
pub use ships::ShipRepository;

use std::sync::Arc;

use chrono::{NaiveDate, Utc};

use crate::models::{
    ComponentPatch, Job, JobPatch, JobStatus, NewComponent, NewJob, NewShip, NotificationKind,
    Ship, ShipComponent, ShipPatch,
};
use crate::storage::{StorageBackend, StorageError};

/// The dashboard's data store: every entity repository, the notification
/// log and the session over one shared backend.
///
/// Mutations go through this facade so the cross-entity flows hold: deletes
/// cascade to dependent collections, completing a job touches its
/// component's last-maintenance date, and every mutation lands in the
/// notification log.
pub struct FleetStore {
    ships: ShipRepository,
    components: ComponentRepository,
    jobs: JobRepository,
    notifications: NotificationCenter,
    session: Session,
}

impl FleetStore {
    /// Open a store over the given backend, loading every collection.
    pub fn open(backend: Arc<dyn StorageBackend>) -> Result<Self, StorageError> {
        Ok(Self {
            ships: ShipRepository::load(backend.clone())?,
            components: ComponentRepository::load(backend.clone())?,
            jobs: JobRepository::load(backend.clone())?,
            notifications: NotificationCenter::load(backend.clone())?,
            session: Session::load(backend)?,
        })
    }

    pub fn ships(&self) -> &ShipRepository {
        &self.ships
    }

    pub fn components(&self) -> &ComponentRepository {
        &self.components
    }

    pub fn jobs(&self) -> &JobRepository {
        &self.jobs
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    pub fn notifications_mut(&mut self) -> &mut NotificationCenter {
        &mut self.notifications
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    // Ships

    pub fn add_ship(&mut self, new: NewShip) -> Result<Ship, StorageError> {
        let ship = self.ships.add(new)?;
        self.notifications.add(
            NotificationKind::Info,
            format!("Ship {} has been added", ship.name),
        )?;
        Ok(ship)
    }

    pub fn update_ship(&mut self, id: &str, patch: ShipPatch) -> Result<Ship, StorageError> {
        let ship = self.ships.update(id, patch)?;
        self.notifications.add(
            NotificationKind::Info,
            format!("Ship {} has been updated", ship.name),
        )?;
        Ok(ship)
    }

    /// Delete a ship and everything that hangs off it: its components and
    /// every job against the ship, including jobs of now-deleted components.
    pub fn delete_ship(&mut self, id: &str) -> Result<(), StorageError> {
        let ship = self.ships.delete(id)?;
        self.components.remove_by_ship(id)?;
        self.jobs.remove_by_ship(id)?;
        self.notifications.add(
            NotificationKind::Warning,
            format!("Ship {} has been deleted", ship.name),
        )?;
        Ok(())
    }

    // Components

    pub fn add_component(&mut self, new: NewComponent) -> Result<ShipComponent, StorageError> {
        let component = self.components.add(new, today())?;
        self.notifications.add(
            NotificationKind::Info,
            format!("Component {} has been added to ship", component.name),
        )?;
        Ok(component)
    }

    pub fn update_component(
        &mut self,
        id: &str,
        patch: ComponentPatch,
    ) -> Result<ShipComponent, StorageError> {
        let component = self.components.update(id, patch)?;
        self.notifications.add(
            NotificationKind::Info,
            format!("Component {} has been updated", component.name),
        )?;
        Ok(component)
    }

    /// Delete a component and every job scheduled against it.
    pub fn delete_component(&mut self, id: &str) -> Result<(), StorageError> {
        let component = self.components.delete(id)?;
        self.jobs.remove_by_component(id)?;
        self.notifications.add(
            NotificationKind::Warning,
            format!("Component {} has been deleted", component.name),
        )?;
        Ok(())
    }

    // Jobs

    pub fn add_job(&mut self, new: NewJob) -> Result<Job, StorageError> {
        let job = self.jobs.add(new, today())?;
        self.notifications.add(
            NotificationKind::Info,
            format!(
                "New {} job created with {} priority",
                job.job_type, job.priority
            ),
        )?;
        Ok(job)
    }

    /// Merge a patch into a job. A status change is notified, and moving to
    /// `Completed` stamps the component's last-maintenance date with today.
    pub fn update_job(&mut self, id: &str, patch: JobPatch) -> Result<Job, StorageError> {
        let (previous, job) = self.jobs.update(id, patch)?;
        if job.status != previous.status {
            let kind = if job.status == JobStatus::Completed {
                NotificationKind::Success
            } else {
                NotificationKind::Info
            };
            self.notifications
                .add(kind, format!("Job status updated to {}", job.status))?;
            if job.status == JobStatus::Completed {
                self.components
                    .touch_last_maintenance(&job.component_id, today())?;
            }
        }
        Ok(job)
    }

    pub fn delete_job(&mut self, id: &str) -> Result<(), StorageError> {
        self.jobs.delete(id)?;
        self.notifications.add(
            NotificationKind::Warning,
            "Maintenance job has been deleted",
        )?;
        Ok(())
    }
}

/// Today's date in UTC; the dashboard's date-only fields all use it.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}
