//! Once-per-turn facility orders.
//!
//! Effects are a fixed per-(facility name, order) table. Failures are not
//! errors here: an invalid target or an unaffordable cost returns the
//! unchanged state with an explanatory message, which the turn controller
//! records verbatim.

use bastion_logic::catalog::{self, Order};

use crate::state::{FacilityStatus, GameState};

/// Result of executing one order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderOutcome {
    pub state: GameState,
    pub msg: String,
}

fn unchanged(state: &GameState, msg: impl Into<String>) -> OrderOutcome {
    OrderOutcome { state: state.clone(), msg: msg.into() }
}

/// Execute one order against a special facility.
pub fn exec_order(state: &GameState, facility_id: &str, order: Order) -> OrderOutcome {
    let Some(row) = state.special_by_id(facility_id) else {
        return unchanged(state, "Invalid facility.");
    };
    if row.status != FacilityStatus::Operational {
        return unchanged(state, format!("{} is not operational this turn.", row.name));
    }
    let allowed = catalog::special_def(&row.name).map(|d| d.orders).unwrap_or(&[]);
    if !allowed.contains(&order) {
        return unchanged(state, format!("Invalid order for {}", row.name));
    }

    let name = row.name.clone();
    let mut next = state.clone();
    let msg = match (name.as_str(), order) {
        ("Barrack", Order::Recruit) => {
            next.defenders += 4;
            "Recruited up to 4 Bastion Defenders.".to_string()
        }
        ("Garden", Order::Harvest) => {
            next.bastion.gold += 100;
            "Harvested herbs worth 100 GP.".to_string()
        }
        ("Workshop", Order::Craft) => {
            let cost = 50;
            if next.bastion.gold >= cost {
                next.bastion.gold -= cost;
                "Crafted a common item at a cost of 50 GP.".to_string()
            } else {
                "Insufficient gold to craft.".to_string()
            }
        }
        ("Library", Order::Research) => {
            "Research conducted; advantage on next Bastion research check (narrative).".to_string()
        }
        ("Armory", Order::Trade) => {
            let cost = 100 + next.defenders * 100;
            if next.bastion.gold >= cost {
                next.bastion.gold -= cost;
                next.armory_stocked = true;
                format!("Armory stocked for {cost} GP.")
            } else {
                "Insufficient gold to stock Armory.".to_string()
            }
        }
        ("Sanctuary", Order::Empower) => {
            "Empowerment granted; one ally gains a minor boon until next turn (narrative).".to_string()
        }
        _ => "No effect.".to_string(),
    };
    OrderOutcome { state: next, msg }
}
