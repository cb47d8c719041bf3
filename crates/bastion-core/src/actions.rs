//! Tagged actions accepted by the state store.
//!
//! Each variant carries a fixed payload shape; anything structurally invalid
//! beyond what the types rule out (empty strings, zero counts, unknown
//! catalog names) is checked at the dispatch boundary and degrades to a
//! no-op there.

use serde::{Deserialize, Serialize};

use bastion_logic::catalog::{Order, Space};
use bastion_logic::walls::{GridCell, RoomRect};

use crate::state::GameState;

/// A facility order chosen for the turn. An `Order::None` selection still
/// resolves as a Maintain turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSelection {
    /// Special facility id, e.g. `S001`.
    pub id: String,
    pub order: Order,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Replace the entire state with a trusted snapshot.
    Hydrate(Box<GameState>),
    /// Swap the save-slot identifier only; the caller follows with Hydrate
    /// or Reset.
    SetProfileId { profile_id: String },
    /// Drop to a fresh default state, keeping the current profile id.
    Reset,
    /// Overwrite character and bastion fields; seeds two free starter
    /// basics when none exist yet.
    ApplyProfile {
        character_name: String,
        character_level: u8,
        bastion_name: String,
        gold: u32,
        defenders: Option<u32>,
    },
    /// Buy wall sections into the construction queue, 250 gp each.
    QueueWalls { sections: u32 },
    AddBasic { name: String, space: Space },
    AddSpecial { name: String },
    HireAuto { facility: String, n: u32 },
    HireManual { facility: String, name: String, species: String },
    FireHirelings { ids: Vec<u32> },
    /// Finish the turn; with a selected order, execute it, otherwise
    /// Maintain (one random event).
    EndTurn { selection: Option<OrderSelection> },
    /// Rebuild room rectangles from the facility inventory; paths reset.
    RegenFloorplan,
    UpdateRooms { rooms: Vec<RoomRect> },
    UpdatePaths { paths: Vec<GridCell> },
}

impl Action {
    /// Stable name for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Hydrate(_) => "Hydrate",
            Action::SetProfileId { .. } => "SetProfileId",
            Action::Reset => "Reset",
            Action::ApplyProfile { .. } => "ApplyProfile",
            Action::QueueWalls { .. } => "QueueWalls",
            Action::AddBasic { .. } => "AddBasic",
            Action::AddSpecial { .. } => "AddSpecial",
            Action::HireAuto { .. } => "HireAuto",
            Action::HireManual { .. } => "HireManual",
            Action::FireHirelings { .. } => "FireHirelings",
            Action::EndTurn { .. } => "EndTurn",
            Action::RegenFloorplan => "RegenFloorplan",
            Action::UpdateRooms { .. } => "UpdateRooms",
            Action::UpdatePaths { .. } => "UpdatePaths",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actions_roundtrip_through_serde() {
        let actions = vec![
            Action::Reset,
            Action::QueueWalls { sections: 3 },
            Action::AddBasic { name: "Bedroom".to_string(), space: Space::Cramped },
            Action::EndTurn {
                selection: Some(OrderSelection { id: "S001".to_string(), order: Order::Recruit }),
            },
        ];
        for action in actions {
            let json = serde_json::to_string(&action).unwrap();
            let back: Action = serde_json::from_str(&json).unwrap();
            assert_eq!(back, action);
        }
    }
}
