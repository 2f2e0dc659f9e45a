//! Dashboard KPI aggregation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::JobStatus;
use crate::store::{FleetStore, today};

/// Counts shown on the dashboard's KPI cards and charts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_ships: usize,
    pub total_components: usize,
    pub total_jobs: usize,
    /// Components whose last maintenance is more than six months old.
    pub overdue_components: usize,
    pub jobs_in_progress: usize,
    pub completed_jobs: usize,
    pub jobs_by_priority: BTreeMap<String, usize>,
    pub jobs_by_status: BTreeMap<String, usize>,
}

impl DashboardSummary {
    /// Aggregate the current store state into dashboard counts.
    pub fn build(store: &FleetStore) -> Self {
        let jobs = store.jobs().all();

        let mut jobs_by_priority = BTreeMap::new();
        let mut jobs_by_status = BTreeMap::new();
        for job in jobs {
            *jobs_by_priority.entry(job.priority.to_string()).or_insert(0) += 1;
            *jobs_by_status.entry(job.status.to_string()).or_insert(0) += 1;
        }

        Self {
            total_ships: store.ships().all().len(),
            total_components: store.components().all().len(),
            total_jobs: jobs.len(),
            overdue_components: store.components().overdue_maintenance(today()).len(),
            jobs_in_progress: store.jobs().by_status(JobStatus::InProgress).len(),
            completed_jobs: store.jobs().by_status(JobStatus::Completed).len(),
            jobs_by_priority,
            jobs_by_status,
        }
    }
}
