//! Notification center.
//!
//! An append-only log of user-facing events with read/unread state. The
//! unread counter is maintained incrementally by the operations here and
//! recomputed from the snapshot on open, so it always equals the number of
//! entries with `read == false`.

use std::sync::Arc;

use crate::models::{Notification, NotificationKind};
use crate::storage::{
    StorageBackend, StorageError, collections, load_collection, save_collection,
};

/// Most-recent-first log of notifications with an unread counter.
pub struct NotificationCenter {
    backend: Arc<dyn StorageBackend>,
    notifications: Vec<Notification>,
    unread: usize,
}

impl NotificationCenter {
    /// Load the notification log from the backend.
    pub fn load(backend: Arc<dyn StorageBackend>) -> Result<Self, StorageError> {
        let notifications: Vec<Notification> =
            load_collection(backend.as_ref(), collections::NOTIFICATIONS)?;
        let unread = notifications.iter().filter(|n| !n.read).count();
        Ok(Self {
            backend,
            notifications,
            unread,
        })
    }

    /// All notifications, newest first.
    pub fn all(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn unread_count(&self) -> usize {
        self.unread
    }

    /// Append a new unread notification at the front of the log.
    pub fn add(
        &mut self,
        kind: NotificationKind,
        message: impl Into<String>,
    ) -> Result<Notification, StorageError> {
        let notification = Notification::new(kind, message);
        self.notifications.insert(0, notification.clone());
        self.unread += 1;
        self.persist()?;
        Ok(notification)
    }

    /// Mark one notification read. Already-read or unknown ids are no-ops.
    pub fn mark_as_read(&mut self, id: &str) -> Result<(), StorageError> {
        if let Some(notification) = self
            .notifications
            .iter_mut()
            .find(|n| n.id == id && !n.read)
        {
            notification.read = true;
            self.unread -= 1;
            self.persist()?;
        }
        Ok(())
    }

    /// Mark the whole log read and zero the counter.
    pub fn mark_all_as_read(&mut self) -> Result<(), StorageError> {
        for notification in &mut self.notifications {
            notification.read = true;
        }
        self.unread = 0;
        self.persist()
    }

    /// Remove a notification; the counter drops only if it was unread.
    pub fn delete(&mut self, id: &str) -> Result<(), StorageError> {
        if let Some(index) = self.notifications.iter().position(|n| n.id == id) {
            let removed = self.notifications.remove(index);
            if !removed.read {
                self.unread -= 1;
            }
            self.persist()?;
        }
        Ok(())
    }

    fn persist(&self) -> Result<(), StorageError> {
        save_collection(
            self.backend.as_ref(),
            collections::NOTIFICATIONS,
            &self.notifications,
        )
    }
}
