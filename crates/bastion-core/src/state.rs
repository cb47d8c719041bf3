//! The game state aggregate and its row types.
//!
//! Everything here is plain serde data. The engine never mutates a state in
//! place across a transition boundary — each transition yields a complete
//! new snapshot that replaces the old one wholesale.

use serde::{Deserialize, Serialize};

use bastion_logic::catalog::{Space, ENCLOSURE_THRESHOLD_DEFAULT};
use bastion_logic::walls::{GridCell, RoomRect};

/// The player character owning the Bastion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    /// Character level, 1..=20. Gates the special facility cap.
    pub level: u8,
}

/// The stronghold itself: treasury and turn counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bastion {
    pub name: String,
    pub gold: u32,
    /// Current Bastion turn, starting at 1. One turn spans 7 in-world days.
    pub current_turn: u32,
}

/// A simple gold-priced facility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicFacility {
    /// Zero-padded sequential id, e.g. `B001`.
    pub id: String,
    pub name: String,
    pub space: Space,
    pub tiles: u32,
}

/// Whether a special facility can take orders this turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FacilityStatus {
    Operational,
    ShutDown,
}

impl FacilityStatus {
    pub fn label(self) -> &'static str {
        match self {
            FacilityStatus::Operational => "Operational",
            FacilityStatus::ShutDown => "Shut Down",
        }
    }
}

/// A level-gated facility that carries orders and staff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialFacility {
    /// Zero-padded sequential id, e.g. `S001`.
    pub id: String,
    pub name: String,
    pub space: Space,
    /// Initial staff count from the catalog definition.
    pub staff: u32,
    pub status: FacilityStatus,
    /// Outage countdown; the facility reverts to Operational when it
    /// reaches 0.
    pub shutdown_until: u32,
}

/// A staff member assigned to a facility. The facility field is a soft name
/// reference: it is not enforced to exist after the facility is removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hireling {
    pub id: u32,
    pub name: String,
    pub species: String,
    pub role: String,
    pub facility: String,
}

/// One batch of wall sections under construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallQueueEntry {
    pub queue_id: u32,
    pub sections: u32,
    pub gp_cost: u32,
    pub days_left: u32,
}

/// One resolved random event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub turn: u32,
    pub event: String,
}

/// One completed turn: either a single action line or an event, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub turn: u32,
    pub actions: Vec<String>,
    pub event: Option<String>,
}

/// The aggregate root. Replaced wholesale by every transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Save-slot identifier; persistence keys snapshots by this.
    pub profile_id: String,
    pub character: Character,
    pub bastion: Bastion,
    pub basics: Vec<BasicFacility>,
    pub specials: Vec<SpecialFacility>,
    pub hirelings: Vec<Hireling>,
    /// Next hireling id. Strictly increasing, never reused.
    pub hireling_seq: u32,
    pub defenders: u32,
    /// Wall construction queue.
    pub walls: Vec<WallQueueEntry>,
    /// Cumulative completed wall sections. Never decreases.
    pub built_walls: u32,
    /// Built sections needed before the Bastion counts as enclosed.
    pub enclosure_threshold: u32,
    /// Set by the Armory's Trade order, consumed by the next Attack event.
    pub armory_stocked: bool,
    pub events: Vec<EventRecord>,
    pub timeline: Vec<TimelineEntry>,
    pub floorplan_rooms: Vec<RoomRect>,
    pub floorplan_paths: Vec<GridCell>,
    /// Derived perimeter ring prefix. Recomputed, never edited directly.
    pub floorplan_walls: Vec<GridCell>,
}

impl GameState {
    /// Fresh default state for a new campaign.
    pub fn new() -> Self {
        Self {
            profile_id: "default".to_string(),
            character: Character { name: "Unnamed Hero".to_string(), level: 5 },
            bastion: Bastion { name: "Unnamed Bastion".to_string(), gold: 1000, current_turn: 1 },
            basics: Vec::new(),
            specials: Vec::new(),
            hirelings: Vec::new(),
            hireling_seq: 1,
            defenders: 0,
            walls: Vec::new(),
            built_walls: 0,
            enclosure_threshold: ENCLOSURE_THRESHOLD_DEFAULT,
            armory_stocked: false,
            events: Vec::new(),
            timeline: Vec::new(),
            floorplan_rooms: Vec::new(),
            floorplan_paths: Vec::new(),
            floorplan_walls: Vec::new(),
        }
    }

    /// True when enough wall sections are built to enclose the Bastion.
    pub fn is_enclosed(&self) -> bool {
        self.built_walls >= self.enclosure_threshold
    }

    pub fn special_by_id(&self, id: &str) -> Option<&SpecialFacility> {
        self.specials.iter().find(|s| s.id == id)
    }

    /// Current staff count for a facility, by name.
    pub fn staff_count(&self, facility: &str) -> usize {
        self.hirelings.iter().filter(|h| h.facility == facility).count()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = GameState::new();
        assert_eq!(state.profile_id, "default");
        assert_eq!(state.character.level, 5);
        assert_eq!(state.bastion.gold, 1000);
        assert_eq!(state.bastion.current_turn, 1);
        assert_eq!(state.hireling_seq, 1);
        assert_eq!(state.enclosure_threshold, 40);
        assert!(state.basics.is_empty());
        assert!(state.specials.is_empty());
        assert!(!state.armory_stocked);
        assert!(!state.is_enclosed());
    }

    #[test]
    fn test_is_enclosed_threshold() {
        let mut state = GameState::new();
        state.built_walls = 39;
        assert!(!state.is_enclosed());
        state.built_walls = 40;
        assert!(state.is_enclosed());
    }

    #[test]
    fn test_staff_count_by_facility_name() {
        let mut state = GameState::new();
        for (id, fac) in [(1, "Barrack"), (2, "Barrack"), (3, "Garden")] {
            state.hirelings.push(Hireling {
                id,
                name: "Wren".to_string(),
                species: "Human".to_string(),
                role: format!("Hireling ({fac})"),
                facility: fac.to_string(),
            });
        }
        assert_eq!(state.staff_count("Barrack"), 2);
        assert_eq!(state.staff_count("Garden"), 1);
        assert_eq!(state.staff_count("Workshop"), 0);
    }
}
