//! Maintenance-job repository.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::models::{Job, JobPatch, JobPriority, JobStatus, NewJob, generate_id};
use crate::storage::{
    StorageBackend, StorageError, collections, load_collection, save_collection,
};

/// In-memory cache of the jobs collection, persisted on every mutation.
pub struct JobRepository {
    backend: Arc<dyn StorageBackend>,
    jobs: Vec<Job>,
}

impl JobRepository {
    /// Load the jobs collection from the backend.
    pub fn load(backend: Arc<dyn StorageBackend>) -> Result<Self, StorageError> {
        let jobs = load_collection(backend.as_ref(), collections::JOBS)?;
        Ok(Self { backend, jobs })
    }

    pub fn all(&self) -> &[Job] {
        &self.jobs
    }

    pub fn get_by_id(&self, id: &str) -> Option<&Job> {
        self.jobs.iter().find(|job| job.id == id)
    }

    pub fn by_ship(&self, ship_id: &str) -> Vec<&Job> {
        self.jobs.iter().filter(|j| j.ship_id == ship_id).collect()
    }

    pub fn by_component(&self, component_id: &str) -> Vec<&Job> {
        self.jobs
            .iter()
            .filter(|j| j.component_id == component_id)
            .collect()
    }

    pub fn by_status(&self, status: JobStatus) -> Vec<&Job> {
        self.jobs.iter().filter(|j| j.status == status).collect()
    }

    pub fn by_priority(&self, priority: JobPriority) -> Vec<&Job> {
        self.jobs.iter().filter(|j| j.priority == priority).collect()
    }

    /// Jobs scheduled exactly on `date`; feeds the calendar day view.
    pub fn for_date(&self, date: NaiveDate) -> Vec<&Job> {
        self.jobs
            .iter()
            .filter(|j| j.scheduled_date == date)
            .collect()
    }

    /// Jobs scheduled within `[start, end]`, bounds inclusive.
    pub fn for_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<&Job> {
        self.jobs
            .iter()
            .filter(|j| j.scheduled_date >= start && j.scheduled_date <= end)
            .collect()
    }

    /// Add a job; status defaults to `Open` and the scheduled date to `today`.
    pub fn add(&mut self, new: NewJob, today: NaiveDate) -> Result<Job, StorageError> {
        let job = Job {
            id: generate_id("j"),
            ship_id: new.ship_id,
            component_id: new.component_id,
            job_type: new.job_type,
            priority: new.priority,
            status: new.status.unwrap_or(JobStatus::Open),
            scheduled_date: new.scheduled_date.unwrap_or(today),
            assigned_engineer_id: new.assigned_engineer_id,
        };
        self.jobs.push(job.clone());
        self.persist()?;
        info!(job = %job.job_type, id = %job.id, priority = %job.priority, "added job");
        Ok(job)
    }

    /// Merge a patch into the job with the given id. Returns the job as it
    /// was before the merge along with the updated record, so the caller
    /// can detect status transitions.
    pub fn update(&mut self, id: &str, patch: JobPatch) -> Result<(Job, Job), StorageError> {
        let job = self
            .jobs
            .iter_mut()
            .find(|j| j.id == id)
            .ok_or_else(|| StorageError::not_found("job", id))?;
        let previous = job.clone();
        job.apply(patch);
        let updated = job.clone();
        self.persist()?;
        info!(job = %updated.job_type, id = %updated.id, status = %updated.status, "updated job");
        Ok((previous, updated))
    }

    /// Remove a job, returning the removed record.
    pub fn delete(&mut self, id: &str) -> Result<Job, StorageError> {
        let index = self
            .jobs
            .iter()
            .position(|j| j.id == id)
            .ok_or_else(|| StorageError::not_found("job", id))?;
        let removed = self.jobs.remove(index);
        self.persist()?;
        Ok(removed)
    }

    /// Cascade helper: drop every job against `ship_id`.
    pub fn remove_by_ship(&mut self, ship_id: &str) -> Result<usize, StorageError> {
        self.remove_where(|j| j.ship_id == ship_id, "ship", ship_id)
    }

    /// Cascade helper: drop every job against `component_id`.
    pub fn remove_by_component(&mut self, component_id: &str) -> Result<usize, StorageError> {
        self.remove_where(|j| j.component_id == component_id, "component", component_id)
    }

    fn remove_where(
        &mut self,
        matches: impl Fn(&Job) -> bool,
        owner_kind: &str,
        owner_id: &str,
    ) -> Result<usize, StorageError> {
        let before = self.jobs.len();
        self.jobs.retain(|j| !matches(j));
        let removed = before - self.jobs.len();
        if removed > 0 {
            self.persist()?;
            warn!(owner_kind, owner_id, removed, "cascade-deleted jobs");
        }
        Ok(removed)
    }

    fn persist(&self) -> Result<(), StorageError> {
        save_collection(self.backend.as_ref(), collections::JOBS, &self.jobs)
    }
}
