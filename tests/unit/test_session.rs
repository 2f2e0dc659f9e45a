//! Unit tests for the login session

use std::sync::Arc;

use fleet_maintenance_store::models::Role;
use fleet_maintenance_store::services::seed_demo_users;
use fleet_maintenance_store::storage::{MemoryBackend, StorageBackend};
use fleet_maintenance_store::store::Session;

fn seeded_backend() -> Arc<MemoryBackend> {
    let backend = Arc::new(MemoryBackend::new());
    seed_demo_users(backend.as_ref()).unwrap();
    backend
}

#[test]
fn test_seed_demo_users_is_idempotent() {
    let backend = Arc::new(MemoryBackend::new());
    assert_eq!(seed_demo_users(backend.as_ref()).unwrap(), 3);
    assert_eq!(seed_demo_users(backend.as_ref()).unwrap(), 0);
    assert_eq!(backend.load("users").unwrap().len(), 3);
}

#[test]
fn test_login_with_valid_credentials() {
    let backend = seeded_backend();
    let mut session = Session::load(backend).unwrap();

    assert!(session.login("admin@entnt.in", "admin123").unwrap());

    let user = session.current_user().expect("session should hold a user");
    assert_eq!(user.email, "admin@entnt.in");
    assert_eq!(user.role, Role::Admin);
}

#[test]
fn test_login_with_wrong_password_fails() {
    let backend = seeded_backend();
    let mut session = Session::load(backend).unwrap();

    assert!(!session.login("admin@entnt.in", "nope").unwrap());
    assert!(session.current_user().is_none());
}

#[test]
fn test_login_with_unknown_email_fails() {
    let backend = seeded_backend();
    let mut session = Session::load(backend).unwrap();

    assert!(!session.login("ghost@entnt.in", "admin123").unwrap());
    assert!(session.current_user().is_none());
}

#[test]
fn test_persisted_session_has_no_password() {
    let backend = seeded_backend();
    let mut session = Session::load(backend.clone()).unwrap();
    session.login("engineer@entnt.in", "engine123").unwrap();

    let persisted = backend.load("currentUser").unwrap();
    assert_eq!(persisted.len(), 1);
    assert!(persisted[0].get("password").is_none());
    assert_eq!(persisted[0]["email"], "engineer@entnt.in");
}

#[test]
fn test_session_restores_across_reopen() {
    let backend = seeded_backend();
    {
        let mut session = Session::load(backend.clone()).unwrap();
        session.login("inspector@entnt.in", "inspect123").unwrap();
    }

    let session = Session::load(backend).unwrap();
    let user = session.current_user().expect("session should be restored");
    assert_eq!(user.role, Role::Inspector);
    assert!(session.is_inspector());
}

#[test]
fn test_role_flags() {
    let backend = seeded_backend();
    let mut session = Session::load(backend).unwrap();

    assert!(!session.is_admin());

    session.login("admin@entnt.in", "admin123").unwrap();
    assert!(session.is_admin());
    assert!(!session.is_inspector());
    assert!(!session.is_engineer());

    session.login("engineer@entnt.in", "engine123").unwrap();
    assert!(session.is_engineer());
    assert!(!session.is_admin());
}

#[test]
fn test_logout_clears_session_and_snapshot() {
    let backend = seeded_backend();
    let mut session = Session::load(backend.clone()).unwrap();
    session.login("admin@entnt.in", "admin123").unwrap();

    session.logout().unwrap();

    assert!(session.current_user().is_none());
    assert!(!session.is_admin());
    assert!(backend.load("currentUser").unwrap().is_empty());
}
