//! Hireling management: weighted-draw hiring, manual hiring, firing.
//!
//! Hiring carries one side effect: a facility that ends up with staff is
//! forced Operational and its outage timer cleared. Firing the last
//! hireling does not shut the facility back down; only events do that.

use std::collections::HashSet;

use rand::Rng;

use bastion_logic::catalog::{HIRELING_NAMES, HIRELING_SPECIES};
use bastion_logic::error::{Result, RulesError};
use bastion_logic::sampler::weighted_sample;

use crate::state::{FacilityStatus, GameState, Hireling};

fn draw_name(rng: &mut impl Rng) -> &'static str {
    weighted_sample(HIRELING_NAMES, rng).unwrap_or(HIRELING_NAMES[0].0)
}

fn draw_species(rng: &mut impl Rng) -> &'static str {
    weighted_sample(HIRELING_SPECIES, rng).unwrap_or(HIRELING_SPECIES[0].0)
}

/// Force a staffed facility Operational and clear its outage timer, even if
/// it was not previously shut down.
fn restore_if_staffed(state: &mut GameState, facility: &str) {
    if state.staff_count(facility) == 0 {
        return;
    }
    for f in &mut state.specials {
        if f.name == facility {
            f.status = FacilityStatus::Operational;
            f.shutdown_until = 0;
        }
    }
}

/// Hire `n` randomly drawn staff for a facility. Ids come from the
/// monotonic sequence counter and are never reused.
pub fn hire_auto(
    state: &GameState,
    facility: &str,
    n: u32,
    rng: &mut impl Rng,
) -> Result<GameState> {
    if facility.is_empty() {
        return Err(RulesError::MissingField("facility"));
    }
    if n < 1 {
        return Err(RulesError::InvalidHirelingCount);
    }

    let mut next = state.clone();
    for _ in 0..n {
        let id = next.hireling_seq;
        next.hireling_seq += 1;
        next.hirelings.push(Hireling {
            id,
            name: draw_name(rng).to_string(),
            species: draw_species(rng).to_string(),
            role: format!("Hireling ({facility})"),
            facility: facility.to_string(),
        });
    }
    restore_if_staffed(&mut next, facility);
    Ok(next)
}

/// Hire one explicitly named hireling. All three fields are required.
pub fn hire_manual(
    state: &GameState,
    facility: &str,
    name: &str,
    species: &str,
) -> Result<GameState> {
    if facility.is_empty() {
        return Err(RulesError::MissingField("facility"));
    }
    if name.is_empty() {
        return Err(RulesError::MissingField("name"));
    }
    if species.is_empty() {
        return Err(RulesError::MissingField("species"));
    }

    let mut next = state.clone();
    let id = next.hireling_seq;
    next.hireling_seq += 1;
    next.hirelings.push(Hireling {
        id,
        name: name.to_string(),
        species: species.to_string(),
        role: format!("Hireling ({facility})"),
        facility: facility.to_string(),
    });
    restore_if_staffed(&mut next, facility);
    Ok(next)
}

/// Remove every hireling whose id is in the given set. Facility status is
/// left untouched.
pub fn fire_hirelings(state: &GameState, ids: &[u32]) -> GameState {
    let set: HashSet<u32> = ids.iter().copied().collect();
    let mut next = state.clone();
    next.hirelings.retain(|h| !set.contains(&h.id));
    next
}
