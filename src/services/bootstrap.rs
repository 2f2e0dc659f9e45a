//! First-run seeding.

use tracing::info;

use crate::models::{Role, User, generate_id};
use crate::storage::{
    StorageBackend, StorageError, collections, load_collection, save_collection,
};

/// Seed the demo accounts when the users collection is empty. Returns the
/// number of users inserted (zero when the collection was already seeded).
pub fn seed_demo_users(backend: &dyn StorageBackend) -> Result<usize, StorageError> {
    let existing: Vec<User> = load_collection(backend, collections::USERS)?;
    if !existing.is_empty() {
        return Ok(0);
    }

    let users = vec![
        demo_user("admin@entnt.in", "admin123", Role::Admin),
        demo_user("inspector@entnt.in", "inspect123", Role::Inspector),
        demo_user("engineer@entnt.in", "engine123", Role::Engineer),
    ];
    save_collection(backend, collections::USERS, &users)?;
    info!(count = users.len(), "seeded demo users");
    Ok(users.len())
}

fn demo_user(email: &str, password: &str, role: Role) -> User {
    User {
        id: generate_id("u"),
        email: email.to_string(),
        password: password.to_string(),
        role,
    }
}
