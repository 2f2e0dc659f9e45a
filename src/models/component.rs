use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A component installed on a ship.
///
/// Named `ShipComponent` to avoid clashing with the UI notion of a
/// component; persisted under the `components` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipComponent {
    pub id: String,
    /// Owning ship. Deleting the ship deletes this component.
    pub ship_id: String,
    pub name: String,
    pub serial_number: String,
    pub install_date: NaiveDate,
    pub last_maintenance_date: NaiveDate,
}

/// Input for creating a component. Dates default to today when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComponent {
    pub ship_id: String,
    pub name: String,
    pub serial_number: String,
    #[serde(default)]
    pub install_date: Option<NaiveDate>,
    #[serde(default)]
    pub last_maintenance_date: Option<NaiveDate>,
}

/// Partial update for a component: only supplied fields are replaced.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentPatch {
    pub ship_id: Option<String>,
    pub name: Option<String>,
    pub serial_number: Option<String>,
    pub install_date: Option<NaiveDate>,
    pub last_maintenance_date: Option<NaiveDate>,
}

impl ShipComponent {
    /// Shallow-merge a patch into this component.
    pub fn apply(&mut self, patch: ComponentPatch) {
        if let Some(ship_id) = patch.ship_id {
            self.ship_id = ship_id;
        }
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(serial_number) = patch.serial_number {
            self.serial_number = serial_number;
        }
        if let Some(install_date) = patch.install_date {
            self.install_date = install_date;
        }
        if let Some(last_maintenance_date) = patch.last_maintenance_date {
            self.last_maintenance_date = last_maintenance_date;
        }
    }
}
