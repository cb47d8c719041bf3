//! Facility economy rules: basics, specials, wall queueing, and profile
//! application.

use rand::Rng;

use bastion_logic::catalog::{
    self, Space, WALL_BUILD_DAYS_PER_SECTION, WALL_SECTION_COST_GP,
};
use bastion_logic::error::{Result, RulesError};

use crate::hirelings::hire_auto;
use crate::state::{BasicFacility, Character, FacilityStatus, GameState, SpecialFacility, WallQueueEntry};

/// Add a gold-priced basic facility. The row takes the space's full tile
/// allotment.
pub fn add_basic_facility(state: &GameState, name: &str, space: Space) -> Result<GameState> {
    let def = catalog::basic_def(name)
        .ok_or_else(|| RulesError::UnknownBasicFacility(name.to_string()))?;
    let info = space.info();
    if state.bastion.gold < info.add_cost_gp {
        return Err(RulesError::InsufficientGold {
            needed: info.add_cost_gp,
            have: state.bastion.gold,
        });
    }

    let mut next = state.clone();
    let id = format!("B{:03}", next.basics.len() + 1);
    next.basics.push(BasicFacility {
        id,
        name: def.name.to_string(),
        space,
        tiles: info.max_tiles,
    });
    next.bastion.gold -= info.add_cost_gp;
    Ok(next)
}

/// Add a level-gated special facility and seed its initial staff. No gold
/// cost; the gates are the character level and the per-level cap.
pub fn add_special_facility(
    state: &GameState,
    name: &str,
    rng: &mut impl Rng,
) -> Result<GameState> {
    let def = catalog::special_def(name)
        .ok_or_else(|| RulesError::UnknownSpecialFacility(name.to_string()))?;
    let level = state.character.level;
    if level < def.min_level {
        return Err(RulesError::LevelTooLow { required: def.min_level, actual: level });
    }
    let limit = catalog::max_special_for_level(level)?;
    if state.specials.len() as u32 >= limit {
        return Err(RulesError::SpecialLimitReached { limit, level });
    }

    let mut next = state.clone();
    let id = format!("S{:03}", next.specials.len() + 1);
    next.specials.push(SpecialFacility {
        id,
        name: def.name.to_string(),
        space: def.space,
        staff: def.hirelings,
        status: FacilityStatus::Operational,
        shutdown_until: 0,
    });
    hire_auto(&next, def.name, def.hirelings, rng)
}

/// Buy wall sections into the construction queue. Zero sections is a no-op;
/// an unaffordable request fails whole.
pub fn queue_walls(state: &GameState, sections: u32) -> Result<GameState> {
    if sections == 0 {
        return Ok(state.clone());
    }
    let total_cost = WALL_SECTION_COST_GP * sections;
    if state.bastion.gold < total_cost {
        return Err(RulesError::InsufficientGold { needed: total_cost, have: state.bastion.gold });
    }

    let next_id = state.walls.iter().map(|w| w.queue_id).max().map_or(1, |m| m + 1);
    let mut next = state.clone();
    next.walls.push(WallQueueEntry {
        queue_id: next_id,
        sections,
        gp_cost: total_cost,
        days_left: sections * WALL_BUILD_DAYS_PER_SECTION,
    });
    next.bastion.gold -= total_cost;
    Ok(next)
}

/// Overwrite character and bastion fields from a profile form. When the
/// Bastion has no basics yet, two starter rooms are seeded free of charge:
/// the add cost is paid and then refunded so the catalog path stays the
/// same as a normal purchase.
pub fn apply_profile(
    state: &GameState,
    character_name: &str,
    character_level: u8,
    bastion_name: &str,
    gold: u32,
    defenders: Option<u32>,
) -> Result<GameState> {
    let mut next = state.clone();
    next.character = Character { name: character_name.to_string(), level: character_level };
    next.bastion.name = bastion_name.to_string();
    next.bastion.gold = gold;
    if let Some(d) = defenders {
        next.defenders = d;
    }

    if next.basics.is_empty() {
        let cramped = Space::Cramped.info().add_cost_gp;
        let roomy = Space::Roomy.info().add_cost_gp;
        next = add_basic_facility(&next, "Bedroom", Space::Cramped)?;
        next.bastion.gold += cramped;
        next = add_basic_facility(&next, "Dining Room", Space::Roomy)?;
        next.bastion.gold += roomy;
    }
    Ok(next)
}
