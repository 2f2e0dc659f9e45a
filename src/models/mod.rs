// Models module - record types, enums and partial-update patches

pub mod component;
pub mod enums;
pub mod job;
pub mod notification;
pub mod ship;
pub mod user;

pub use component::{ComponentPatch, NewComponent, ShipComponent};
pub use enums::{JobPriority, JobStatus, NotificationKind, Role, ShipStatus};
pub use job::{Job, JobPatch, NewJob};
pub use notification::Notification;
pub use ship::{NewShip, Ship, ShipPatch};
pub use user::{User, UserProfile};

use uuid::Uuid;

/// Generate a prefixed opaque id, e.g. `s-1f0c…` for ships or `j-…` for
/// jobs. Uniqueness within a collection is the only guarantee.
pub fn generate_id(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4().simple())
}
