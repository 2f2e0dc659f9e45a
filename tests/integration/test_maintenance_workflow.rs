//! End-to-end maintenance workflow over an in-memory store

use std::sync::Arc;

use fleet_maintenance_store::models::{
    JobPatch, JobPriority, JobStatus, NewComponent, NewJob, NewShip, NotificationKind, ShipStatus,
};
use fleet_maintenance_store::services::DashboardSummary;
use fleet_maintenance_store::storage::MemoryBackend;
use fleet_maintenance_store::store::{FleetStore, today};

fn open_store() -> FleetStore {
    FleetStore::open(Arc::new(MemoryBackend::new())).unwrap()
}

#[test]
fn test_completing_a_job_stamps_component_maintenance_date() {
    let mut store = open_store();

    let ship = store
        .add_ship(NewShip {
            name: "MV Test".to_string(),
            imo: "1234567".to_string(),
            flag: "PA".to_string(),
            status: ShipStatus::Active,
        })
        .unwrap();
    let component = store
        .add_component(NewComponent {
            ship_id: ship.id.clone(),
            name: "Engine".to_string(),
            serial_number: "E-1".to_string(),
            install_date: None,
            last_maintenance_date: None,
        })
        .unwrap();
    let job = store
        .add_job(NewJob {
            ship_id: ship.id.clone(),
            component_id: component.id.clone(),
            job_type: "Inspection".to_string(),
            priority: JobPriority::High,
            status: None,
            scheduled_date: None,
            assigned_engineer_id: None,
        })
        .unwrap();

    store
        .update_job(
            &job.id,
            JobPatch {
                status: Some(JobStatus::Completed),
                ..Default::default()
            },
        )
        .unwrap();

    let refreshed = store.components().get_by_id(&component.id).unwrap();
    assert_eq!(refreshed.last_maintenance_date, today());
    assert_eq!(
        refreshed.last_maintenance_date.format("%Y-%m-%d").to_string(),
        today().format("%Y-%m-%d").to_string()
    );
}

#[test]
fn test_status_change_notification_kinds() {
    let mut store = open_store();
    let job = store
        .add_job(NewJob {
            ship_id: "s-1".to_string(),
            component_id: "c-1".to_string(),
            job_type: "Repair".to_string(),
            priority: JobPriority::Medium,
            status: None,
            scheduled_date: None,
            assigned_engineer_id: None,
        })
        .unwrap();

    store
        .update_job(
            &job.id,
            JobPatch {
                status: Some(JobStatus::InProgress),
                ..Default::default()
            },
        )
        .unwrap();
    let latest = &store.notifications().all()[0];
    assert_eq!(latest.kind, NotificationKind::Info);
    assert_eq!(latest.message, "Job status updated to In Progress");

    store
        .update_job(
            &job.id,
            JobPatch {
                status: Some(JobStatus::Completed),
                ..Default::default()
            },
        )
        .unwrap();
    let latest = &store.notifications().all()[0];
    assert_eq!(latest.kind, NotificationKind::Success);
    assert_eq!(latest.message, "Job status updated to Completed");
}

#[test]
fn test_non_status_update_emits_no_notification() {
    let mut store = open_store();
    let job = store
        .add_job(NewJob {
            ship_id: "s-1".to_string(),
            component_id: "c-1".to_string(),
            job_type: "Repair".to_string(),
            priority: JobPriority::Low,
            status: None,
            scheduled_date: None,
            assigned_engineer_id: None,
        })
        .unwrap();
    let count_before = store.notifications().all().len();

    store
        .update_job(
            &job.id,
            JobPatch {
                assigned_engineer_id: Some("u-7".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

    assert_eq!(store.notifications().all().len(), count_before);
    assert_eq!(
        store
            .jobs()
            .get_by_id(&job.id)
            .unwrap()
            .assigned_engineer_id
            .as_deref(),
        Some("u-7")
    );
}

#[test]
fn test_completing_job_for_missing_component_is_noop() {
    let mut store = open_store();
    let job = store
        .add_job(NewJob {
            ship_id: "s-1".to_string(),
            component_id: "c-dangling".to_string(),
            job_type: "Inspection".to_string(),
            priority: JobPriority::High,
            status: None,
            scheduled_date: None,
            assigned_engineer_id: None,
        })
        .unwrap();

    // No component with that id exists; completion must still succeed.
    let updated = store
        .update_job(
            &job.id,
            JobPatch {
                status: Some(JobStatus::Completed),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(updated.status, JobStatus::Completed);
}

#[test]
fn test_dashboard_summary_counts() {
    let mut store = open_store();
    let ship = store
        .add_ship(NewShip {
            name: "MV Test".to_string(),
            imo: "1234567".to_string(),
            flag: "PA".to_string(),
            status: ShipStatus::Active,
        })
        .unwrap();
    let component = store
        .add_component(NewComponent {
            ship_id: ship.id.clone(),
            name: "Engine".to_string(),
            serial_number: "E-1".to_string(),
            install_date: None,
            last_maintenance_date: None,
        })
        .unwrap();
    for (priority, status) in [
        (JobPriority::High, Some(JobStatus::InProgress)),
        (JobPriority::High, None),
        (JobPriority::Low, Some(JobStatus::Completed)),
    ] {
        store
            .add_job(NewJob {
                ship_id: ship.id.clone(),
                component_id: component.id.clone(),
                job_type: "Inspection".to_string(),
                priority,
                status,
                scheduled_date: None,
                assigned_engineer_id: None,
            })
            .unwrap();
    }

    let summary = DashboardSummary::build(&store);

    assert_eq!(summary.total_ships, 1);
    assert_eq!(summary.total_components, 1);
    assert_eq!(summary.total_jobs, 3);
    assert_eq!(summary.overdue_components, 0);
    assert_eq!(summary.jobs_in_progress, 1);
    assert_eq!(summary.completed_jobs, 1);
    assert_eq!(summary.jobs_by_priority["High"], 2);
    assert_eq!(summary.jobs_by_priority["Low"], 1);
    assert_eq!(summary.jobs_by_status["Open"], 1);
    assert_eq!(summary.jobs_by_status["In Progress"], 1);
    assert_eq!(summary.jobs_by_status["Completed"], 1);
}
