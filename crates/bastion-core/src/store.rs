//! The state store: a pure transition function over tagged actions, plus a
//! convenience wrapper that owns the state and a seeded RNG.
//!
//! The transition is total: rule rejections and structurally invalid
//! payloads are absorbed here and return the input state unchanged.
//! Surfacing the reason to a user is the calling layer's job; the engine
//! only logs it.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use bastion_logic::error::{Result, RulesError};

use crate::actions::Action;
use crate::facilities::{add_basic_facility, add_special_facility, apply_profile, queue_walls};
use crate::floorplan::{refresh_walls, regen_floorplan};
use crate::hirelings::{fire_hirelings, hire_auto, hire_manual};
use crate::state::GameState;
use crate::turn::end_turn;

/// Apply one action to the state, returning the next state. Failures of any
/// kind degrade to a no-op.
pub fn transition(state: &GameState, action: Action, rng: &mut impl Rng) -> GameState {
    let kind = action.kind();
    match apply(state, action, rng) {
        Ok(next) => {
            debug!(action = kind, "applied");
            next
        }
        Err(err) => {
            debug!(action = kind, %err, "rejected");
            state.clone()
        }
    }
}

fn apply(state: &GameState, action: Action, rng: &mut impl Rng) -> Result<GameState> {
    Ok(match action {
        Action::Hydrate(snapshot) => *snapshot,

        Action::SetProfileId { profile_id } => {
            if profile_id.is_empty() {
                return Err(RulesError::MissingField("profile_id"));
            }
            let mut next = state.clone();
            next.profile_id = profile_id;
            next
        }

        Action::Reset => {
            let mut fresh = GameState::new();
            fresh.profile_id = state.profile_id.clone();
            fresh
        }

        Action::ApplyProfile { character_name, character_level, bastion_name, gold, defenders } => {
            apply_profile(state, &character_name, character_level, &bastion_name, gold, defenders)?
        }

        Action::QueueWalls { sections } => queue_walls(state, sections)?,

        Action::AddBasic { name, space } => add_basic_facility(state, &name, space)?,

        Action::AddSpecial { name } => {
            if state.specials.iter().any(|s| s.name == name) {
                return Err(RulesError::DuplicateSpecialFacility(name));
            }
            add_special_facility(state, &name, rng)?
        }

        Action::HireAuto { facility, n } => hire_auto(state, &facility, n, rng)?,

        Action::HireManual { facility, name, species } => {
            hire_manual(state, &facility, &name, &species)?
        }

        Action::FireHirelings { ids } => {
            if ids.is_empty() {
                return Err(RulesError::MissingField("ids"));
            }
            fire_hirelings(state, &ids)
        }

        Action::EndTurn { selection } => end_turn(state, selection.as_ref(), rng),

        Action::RegenFloorplan => regen_floorplan(state),

        Action::UpdateRooms { rooms } => {
            let mut next = state.clone();
            next.floorplan_rooms = rooms;
            refresh_walls(&mut next);
            next
        }

        Action::UpdatePaths { paths } => {
            let mut next = state.clone();
            next.floorplan_paths = paths;
            refresh_walls(&mut next);
            next
        }
    })
}

/// Owns the current state and a seedable RNG behind the single
/// `dispatch(action)` entry point.
pub struct GameStore {
    state: GameState,
    rng: StdRng,
}

impl GameStore {
    /// Fresh default state with a deterministic RNG seed.
    pub fn new(seed: u64) -> Self {
        Self { state: GameState::new(), rng: StdRng::seed_from_u64(seed) }
    }

    /// Wrap an existing snapshot, e.g. one loaded from persistence.
    pub fn from_state(state: GameState, seed: u64) -> Self {
        Self { state, rng: StdRng::seed_from_u64(seed) }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Apply one action and return the new current state.
    pub fn dispatch(&mut self, action: Action) -> &GameState {
        self.state = transition(&self.state, action, &mut self.rng);
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use bastion_logic::catalog::Space;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(60)
    }

    #[test]
    fn test_hydrate_replaces_wholesale() {
        let mut rng = rng();
        let state = GameState::new();
        let mut snapshot = GameState::new();
        snapshot.bastion.gold = 123;
        snapshot.profile_id = "other".to_string();
        let next = transition(&state, Action::Hydrate(Box::new(snapshot.clone())), &mut rng);
        assert_eq!(next, snapshot);
    }

    #[test]
    fn test_set_profile_id_requires_non_empty() {
        let mut rng = rng();
        let state = GameState::new();
        let next = transition(
            &state,
            Action::SetProfileId { profile_id: "slot-2".to_string() },
            &mut rng,
        );
        assert_eq!(next.profile_id, "slot-2");

        let unchanged = transition(
            &next,
            Action::SetProfileId { profile_id: String::new() },
            &mut rng,
        );
        assert_eq!(unchanged, next);
    }

    #[test]
    fn test_reset_preserves_profile_id() {
        let mut rng = rng();
        let mut state = GameState::new();
        state.profile_id = "slot-3".to_string();
        state.bastion.gold = 9;
        state.defenders = 7;
        let next = transition(&state, Action::Reset, &mut rng);
        assert_eq!(next.profile_id, "slot-3");
        assert_eq!(next.bastion.gold, 1000);
        assert_eq!(next.defenders, 0);
    }

    #[test]
    fn test_rejected_rules_leave_state_unchanged() {
        let mut rng = rng();
        let state = GameState::new();
        // Unaffordable basic.
        let next = transition(
            &state,
            Action::AddBasic { name: "Courtyard".to_string(), space: Space::Vast },
            &mut rng,
        );
        assert_eq!(next, state);
        // Unknown special.
        let next = transition(&state, Action::AddSpecial { name: "Dungeon".to_string() }, &mut rng);
        assert_eq!(next, state);
        // Unaffordable walls.
        let next = transition(&state, Action::QueueWalls { sections: 100 }, &mut rng);
        assert_eq!(next, state);
        // Empty fire list.
        let next = transition(&state, Action::FireHirelings { ids: Vec::new() }, &mut rng);
        assert_eq!(next, state);
    }

    #[test]
    fn test_duplicate_special_is_rejected() {
        let mut rng = rng();
        let state = GameState::new();
        let with_barrack =
            transition(&state, Action::AddSpecial { name: "Barrack".to_string() }, &mut rng);
        assert_eq!(with_barrack.specials.len(), 1);
        let again =
            transition(&with_barrack, Action::AddSpecial { name: "Barrack".to_string() }, &mut rng);
        assert_eq!(again, with_barrack);
    }

    #[test]
    fn test_update_rooms_recomputes_ring() {
        let mut rng = rng();
        let mut state = GameState::new();
        state.built_walls = 8;
        let rooms = vec![bastion_logic::walls::RoomRect {
            label: "Bedroom".to_string(),
            x: 1,
            y: 1,
            w: 1,
            h: 1,
        }];
        let next = transition(&state, Action::UpdateRooms { rooms }, &mut rng);
        assert_eq!(next.floorplan_walls.len(), 8);

        let cleared = transition(&next, Action::UpdateRooms { rooms: Vec::new() }, &mut rng);
        assert!(cleared.floorplan_walls.is_empty());
    }

    #[test]
    fn test_update_paths_recomputes_ring() {
        let mut rng = rng();
        let mut state = GameState::new();
        state.built_walls = 100;
        state.floorplan_rooms.push(bastion_logic::walls::RoomRect {
            label: "Bedroom".to_string(),
            x: 1,
            y: 1,
            w: 1,
            h: 1,
        });
        refresh_walls(&mut state);
        let before = state.floorplan_walls.len();

        let paths = vec![bastion_logic::walls::GridCell { x: 10, y: 1 }];
        let next = transition(&state, Action::UpdatePaths { paths }, &mut rng);
        assert!(next.floorplan_walls.len() > before);
    }

    #[test]
    fn test_store_dispatch_wraps_transition() {
        let mut store = GameStore::new(61);
        store.dispatch(Action::QueueWalls { sections: 1 });
        assert_eq!(store.state().bastion.gold, 750);
        store.dispatch(Action::EndTurn { selection: None });
        assert_eq!(store.state().bastion.current_turn, 2);
        assert_eq!(store.state().events.len(), 1);
    }

    #[test]
    fn test_store_from_state() {
        let mut snapshot = GameState::new();
        snapshot.bastion.gold = 42;
        let store = GameStore::from_state(snapshot, 62);
        assert_eq!(store.state().bastion.gold, 42);
    }
}
