use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::enums::{JobPriority, JobStatus};

/// A maintenance job scheduled against a ship component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub ship_id: String,
    pub component_id: String,
    /// Free-form job kind, e.g. "Inspection" or "Repair".
    #[serde(rename = "type")]
    pub job_type: String,
    pub priority: JobPriority,
    pub status: JobStatus,
    pub scheduled_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_engineer_id: Option<String>,
}

/// Input for creating a job. Status defaults to `Open` and the scheduled
/// date to today when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJob {
    pub ship_id: String,
    pub component_id: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub priority: JobPriority,
    #[serde(default)]
    pub status: Option<JobStatus>,
    #[serde(default)]
    pub scheduled_date: Option<NaiveDate>,
    #[serde(default)]
    pub assigned_engineer_id: Option<String>,
}

/// Partial update for a job: only supplied fields are replaced.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPatch {
    pub ship_id: Option<String>,
    pub component_id: Option<String>,
    #[serde(rename = "type")]
    pub job_type: Option<String>,
    pub priority: Option<JobPriority>,
    pub status: Option<JobStatus>,
    pub scheduled_date: Option<NaiveDate>,
    pub assigned_engineer_id: Option<String>,
}

impl Job {
    /// Shallow-merge a patch into this job.
    pub fn apply(&mut self, patch: JobPatch) {
        if let Some(ship_id) = patch.ship_id {
            self.ship_id = ship_id;
        }
        if let Some(component_id) = patch.component_id {
            self.component_id = component_id;
        }
        if let Some(job_type) = patch.job_type {
            self.job_type = job_type;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(scheduled_date) = patch.scheduled_date {
            self.scheduled_date = scheduled_date;
        }
        if let Some(assigned_engineer_id) = patch.assigned_engineer_id {
            self.assigned_engineer_id = Some(assigned_engineer_id);
        }
    }
}
