//! Login session.
//!
//! Holds the logged-in user's password-stripped profile for the lifetime of
//! the store, persisted under its own collection so a restarted process
//! resumes the session.

use std::sync::Arc;

use tracing::info;

use crate::models::{Role, User, UserProfile};
use crate::storage::{
    StorageBackend, StorageError, collections, load_collection, save_collection,
};

/// The currently authenticated user, if any.
pub struct Session {
    backend: Arc<dyn StorageBackend>,
    current_user: Option<UserProfile>,
}

impl Session {
    /// Restore the session from the backend.
    pub fn load(backend: Arc<dyn StorageBackend>) -> Result<Self, StorageError> {
        let persisted: Vec<UserProfile> =
            load_collection(backend.as_ref(), collections::CURRENT_USER)?;
        Ok(Self {
            backend,
            current_user: persisted.into_iter().next(),
        })
    }

    /// Check credentials against the users collection. On a match the
    /// password is stripped and the profile becomes the current session;
    /// returns whether the login succeeded.
    pub fn login(&mut self, email: &str, password: &str) -> Result<bool, StorageError> {
        let users: Vec<User> = load_collection(self.backend.as_ref(), collections::USERS)?;
        match users
            .iter()
            .find(|u| u.email == email && u.password == password)
        {
            Some(user) => {
                let profile = UserProfile::from(user);
                save_collection(
                    self.backend.as_ref(),
                    collections::CURRENT_USER,
                    std::slice::from_ref(&profile),
                )?;
                info!(user = %profile.email, role = ?profile.role, "logged in");
                self.current_user = Some(profile);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Clear the session.
    pub fn logout(&mut self) -> Result<(), StorageError> {
        save_collection::<UserProfile>(self.backend.as_ref(), collections::CURRENT_USER, &[])?;
        if let Some(user) = self.current_user.take() {
            info!(user = %user.email, "logged out");
        }
        Ok(())
    }

    pub fn current_user(&self) -> Option<&UserProfile> {
        self.current_user.as_ref()
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(Role::Admin)
    }

    pub fn is_inspector(&self) -> bool {
        self.has_role(Role::Inspector)
    }

    pub fn is_engineer(&self) -> bool {
        self.has_role(Role::Engineer)
    }

    fn has_role(&self, role: Role) -> bool {
        self.current_user
            .as_ref()
            .is_some_and(|user| user.role == role)
    }
}
