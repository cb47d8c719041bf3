//! The random event table resolved on every Maintain turn.
//!
//! One d100 roll maps onto ten fixed cumulative bands; each outcome handler
//! is a pure function of (state, rng). Extraordinary Opportunity may chain
//! additional rolls, applied iteratively up to [`MAX_EVENT_CHAIN`].

use rand::Rng;

use bastion_logic::dice;
use bastion_logic::sampler::weighted_sample;

use crate::state::{FacilityStatus, GameState};

/// One of the ten outcomes on the Bastion event table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    AllIsWell,
    Attack,
    CriminalHireling,
    ExtraordinaryOpportunity,
    FriendlyVisitors,
    LostHirelings,
    MagicalDiscovery,
    Refugees,
    RequestForAid,
    Treasure,
}

impl EventKind {
    /// Map a d100 roll onto the fixed cumulative bands.
    pub fn from_roll(d: u32) -> EventKind {
        match d {
            1..=50 => EventKind::AllIsWell,
            51..=55 => EventKind::Attack,
            56..=58 => EventKind::CriminalHireling,
            59..=63 => EventKind::ExtraordinaryOpportunity,
            64..=70 => EventKind::FriendlyVisitors,
            71..=75 => EventKind::LostHirelings,
            76..=80 => EventKind::MagicalDiscovery,
            81..=87 => EventKind::Refugees,
            88..=93 => EventKind::RequestForAid,
            _ => EventKind::Treasure,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EventKind::AllIsWell => "All Is Well",
            EventKind::Attack => "Attack",
            EventKind::CriminalHireling => "Criminal Hireling",
            EventKind::ExtraordinaryOpportunity => "Extraordinary Opportunity",
            EventKind::FriendlyVisitors => "Friendly Visitors",
            EventKind::LostHirelings => "Lost Hirelings",
            EventKind::MagicalDiscovery => "Magical Discovery",
            EventKind::Refugees => "Refugees",
            EventKind::RequestForAid => "Request for Aid",
            EventKind::Treasure => "Treasure",
        }
    }
}

/// Outcome of a single event handler.
#[derive(Debug, Clone)]
pub struct EventOutcome {
    pub state: GameState,
    pub log: String,
    pub bonus_roll: bool,
}

impl EventOutcome {
    fn new(state: GameState, log: impl Into<String>) -> Self {
        Self { state, log: log.into(), bonus_roll: false }
    }
}

/// A fully resolved Maintain event, chained rolls included.
#[derive(Debug, Clone)]
pub struct ResolvedEvent {
    pub state: GameState,
    pub log: String,
}

/// Hard cap on Extraordinary Opportunity re-rolls per resolution.
pub const MAX_EVENT_CHAIN: u32 = 4;

fn attack(state: &GameState, rng: &mut impl Rng) -> EventOutcome {
    let pool = if state.is_enclosed() { 4 } else { 6 };
    if state.defenders > 0 {
        let sides = if state.armory_stocked { 8 } else { 6 };
        let losses = dice::roll(pool, sides, rng).iter().filter(|&&f| f == 1).count() as u32;
        let mut next = state.clone();
        next.defenders = next.defenders.saturating_sub(losses);
        next.armory_stocked = false;
        return EventOutcome::new(next, format!("Attack repelled. Defender losses: {losses}."));
    }

    let operational: Vec<usize> = state
        .specials
        .iter()
        .enumerate()
        .filter(|(_, s)| s.status == FacilityStatus::Operational)
        .map(|(i, _)| i)
        .collect();
    if operational.is_empty() {
        return EventOutcome::new(
            state.clone(),
            "Attack occurred, but no special facilities to damage.",
        );
    }
    let idx = operational[rng.gen_range(0..operational.len())];
    let mut next = state.clone();
    let name = next.specials[idx].name.clone();
    next.specials[idx].status = FacilityStatus::ShutDown;
    next.specials[idx].shutdown_until = next.bastion.current_turn + 1;
    EventOutcome::new(next, format!("Attack damaged {name}. Shut down for next turn."))
}

fn criminal_hireling(state: &GameState, rng: &mut impl Rng) -> EventOutcome {
    if state.hirelings.is_empty() {
        return EventOutcome::new(state.clone(), "No hirelings to be implicated.");
    }
    let target = state.hirelings[rng.gen_range(0..state.hirelings.len())].clone();
    let bribe = 100 * dice::d6(rng);
    if state.bastion.gold >= bribe {
        let mut next = state.clone();
        next.bastion.gold -= bribe;
        return EventOutcome::new(
            next,
            format!("Criminal past revealed ({}). Bribe paid: {bribe} GP.", target.name),
        );
    }

    let mut next = state.clone();
    next.hirelings.retain(|h| h.id != target.id);
    if next.staff_count(&target.facility) == 0 {
        let until = next.bastion.current_turn + 1;
        for f in &mut next.specials {
            if f.name == target.facility {
                f.status = FacilityStatus::ShutDown;
                f.shutdown_until = until;
            }
        }
        return EventOutcome::new(
            next,
            format!("{} arrested; {} shut down for next turn.", target.name, target.facility),
        );
    }
    EventOutcome::new(next, format!("{} arrested.", target.name))
}

fn extraordinary_opportunity(state: &GameState) -> EventOutcome {
    if state.bastion.gold >= 500 {
        let mut next = state.clone();
        next.bastion.gold -= 500;
        return EventOutcome {
            state: next,
            log: "Extraordinary Opportunity seized (500 GP). Rolling an additional event."
                .to_string(),
            bonus_roll: true,
        };
    }
    EventOutcome::new(
        state.clone(),
        "Declined Extraordinary Opportunity (insufficient gold).",
    )
}

fn friendly_visitors(state: &GameState, rng: &mut impl Rng) -> EventOutcome {
    if state.specials.is_empty() {
        return EventOutcome::new(
            state.clone(),
            "Visitors arrived but no special facility to use.",
        );
    }
    let fac = state.specials[rng.gen_range(0..state.specials.len())].name.clone();
    let reward = 100 * dice::d6(rng);
    let mut next = state.clone();
    next.bastion.gold += reward;
    EventOutcome::new(next, format!("Friendly Visitors used {fac}; earned {reward} GP."))
}

fn lost_hirelings(state: &GameState, rng: &mut impl Rng) -> EventOutcome {
    if state.specials.is_empty() {
        return EventOutcome::new(state.clone(), "No special facilities affected.");
    }
    let fac = state.specials[rng.gen_range(0..state.specials.len())].name.clone();
    let mut next = state.clone();
    next.hirelings.retain(|h| h.facility != fac);
    let until = next.bastion.current_turn + 1;
    for f in &mut next.specials {
        if f.name == fac {
            f.status = FacilityStatus::ShutDown;
            f.shutdown_until = until;
        }
    }
    EventOutcome::new(
        next,
        format!("Lost hirelings from {fac}. Facility shut down for next turn."),
    )
}

fn magical_discovery(state: &GameState, rng: &mut impl Rng) -> EventOutcome {
    let item = if rng.gen_bool(0.5) {
        "Potion of Healing (Uncommon variant)"
    } else {
        "Spell Scroll (Uncommon)"
    };
    EventOutcome::new(state.clone(), format!("Magical Discovery: {item} found and stored."))
}

fn refugees(state: &GameState, rng: &mut impl Rng) -> EventOutcome {
    let n = dice::roll_sum(2, 6, rng);
    let reward = 100 * dice::d6(rng);
    let mut next = state.clone();
    next.bastion.gold += reward;
    EventOutcome::new(next, format!("{n} refugees sheltered; received {reward} GP."))
}

fn request_for_aid(state: &GameState, rng: &mut impl Rng) -> EventOutcome {
    let sent = state.defenders.min((state.defenders / 2).max(1));
    if sent == 0 {
        return EventOutcome::new(
            state.clone(),
            "Request for Aid: no defenders available to dispatch.",
        );
    }
    let dice_total = dice::roll_sum(sent, 6, rng);
    let reward = 100 * dice::d6(rng);
    let mut next = state.clone();
    if dice_total >= 10 {
        next.bastion.gold += reward;
        return EventOutcome::new(next, format!("Aid successful. Reward {reward} GP. No losses."));
    }
    next.bastion.gold += reward / 2;
    next.defenders = next.defenders.saturating_sub(1);
    EventOutcome::new(
        next,
        format!("Aid marginally successful. Reward {} GP. One defender lost.", reward / 2),
    )
}

fn treasure(state: &GameState, rng: &mut impl Rng) -> EventOutcome {
    let tiers = [
        ("Art Object (250 GP)", 1.0),
        ("Art Object (750 GP)", 1.0),
        ("Magic Item (table roll)", 1.0),
    ];
    let tier = weighted_sample(&tiers, rng).unwrap_or(tiers[0].0);
    EventOutcome::new(state.clone(), format!("Treasure acquired: {tier}."))
}

fn all_is_well(state: &GameState) -> EventOutcome {
    EventOutcome::new(state.clone(), "All Is Well.")
}

/// Run the handler for one outcome.
pub fn resolve_kind(state: &GameState, kind: EventKind, rng: &mut impl Rng) -> EventOutcome {
    match kind {
        EventKind::AllIsWell => all_is_well(state),
        EventKind::Attack => attack(state, rng),
        EventKind::CriminalHireling => criminal_hireling(state, rng),
        EventKind::ExtraordinaryOpportunity => extraordinary_opportunity(state),
        EventKind::FriendlyVisitors => friendly_visitors(state, rng),
        EventKind::LostHirelings => lost_hirelings(state, rng),
        EventKind::MagicalDiscovery => magical_discovery(state, rng),
        EventKind::Refugees => refugees(state, rng),
        EventKind::RequestForAid => request_for_aid(state, rng),
        EventKind::Treasure => treasure(state, rng),
    }
}

/// Resolve exactly one Maintain event: a d100 draw, its handler, and any
/// bonus rolls chained into a single combined log line.
pub fn resolve_event(state: &GameState, rng: &mut impl Rng) -> ResolvedEvent {
    let kind = EventKind::from_roll(dice::d100(rng));
    let mut out = resolve_kind(state, kind, rng);
    let mut log = format!("{}: {}", kind.label(), out.log);

    let mut chained = 0;
    while out.bonus_roll && chained < MAX_EVENT_CHAIN {
        let next_kind = EventKind::from_roll(dice::d100(rng));
        out = resolve_kind(&out.state, next_kind, rng);
        log.push_str(&format!(" Then: {}: {}", next_kind.label(), out.log));
        chained += 1;
    }

    ResolvedEvent { state: out.state, log }
}
