use serde::{Deserialize, Serialize};

use super::enums::ShipStatus;

/// A ship in the fleet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    pub id: String,
    pub name: String,
    /// IMO number, kept as a string (leading zeros are significant).
    pub imo: String,
    pub flag: String,
    pub status: ShipStatus,
}

/// Input for creating a ship; the repository assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewShip {
    pub name: String,
    pub imo: String,
    pub flag: String,
    pub status: ShipStatus,
}

/// Partial update for a ship: only supplied fields are replaced.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShipPatch {
    pub name: Option<String>,
    pub imo: Option<String>,
    pub flag: Option<String>,
    pub status: Option<ShipStatus>,
}

impl Ship {
    /// Shallow-merge a patch into this ship.
    pub fn apply(&mut self, patch: ShipPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(imo) = patch.imo {
            self.imo = imo;
        }
        if let Some(flag) = patch.flag {
            self.flag = flag;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}
