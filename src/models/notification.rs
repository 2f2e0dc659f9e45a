use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::NotificationKind;
use super::generate_id;

/// A user-facing event in the notification log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
}

impl Notification {
    /// Build an unread notification with a fresh id and the current time.
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            id: generate_id("n"),
            kind,
            message: message.into(),
            timestamp: Utc::now(),
            read: false,
        }
    }
}
