//! Fixed rules data — space categories, facility catalogs, level caps,
//! hireling tables, wall pricing.
//!
//! These tables are the single source of truth for every catalog-validated
//! operation in the engine. They carry a few fields no current operation
//! consumes beyond display (enlarge costs, build days, prerequisites); those
//! stay on the rows because they are part of the published rules data.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RulesError};

/// Facility space category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Space {
    Cramped,
    Roomy,
    Vast,
}

impl Space {
    pub fn label(self) -> &'static str {
        match self {
            Space::Cramped => "Cramped",
            Space::Roomy => "Roomy",
            Space::Vast => "Vast",
        }
    }

    /// Cost/size parameters for this space category.
    pub fn info(self) -> &'static SpaceInfo {
        match self {
            Space::Cramped => &FACILITY_SPACE[0],
            Space::Roomy => &FACILITY_SPACE[1],
            Space::Vast => &FACILITY_SPACE[2],
        }
    }
}

/// One row of the space catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpaceInfo {
    pub space: Space,
    pub max_tiles: u32,
    pub add_cost_gp: u32,
    pub enlarge_cost_gp: u32,
    pub build_days: u32,
}

pub const FACILITY_SPACE: &[SpaceInfo] = &[
    SpaceInfo { space: Space::Cramped, max_tiles: 4, add_cost_gp: 500, enlarge_cost_gp: 250, build_days: 10 },
    SpaceInfo { space: Space::Roomy, max_tiles: 9, add_cost_gp: 1000, enlarge_cost_gp: 500, build_days: 20 },
    SpaceInfo { space: Space::Vast, max_tiles: 25, add_cost_gp: 3000, enlarge_cost_gp: 1500, build_days: 40 },
];

/// A facility order chosen for a turn. `None` is the sentinel that selects a
/// Maintain turn even when a facility is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Order {
    Craft,
    Empower,
    Harvest,
    Recruit,
    Research,
    Trade,
    None,
}

impl Order {
    pub fn label(self) -> &'static str {
        match self {
            Order::Craft => "Craft",
            Order::Empower => "Empower",
            Order::Harvest => "Harvest",
            Order::Recruit => "Recruit",
            Order::Research => "Research",
            Order::Trade => "Trade",
            Order::None => "None",
        }
    }
}

pub const VALID_ORDERS: &[Order] = &[
    Order::Craft,
    Order::Empower,
    Order::Harvest,
    Order::Recruit,
    Order::Research,
    Order::Trade,
    Order::None,
];

/// One row of the basic facility catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BasicFacilityDef {
    pub name: &'static str,
    pub default_space: Space,
    pub desc: &'static str,
}

pub const BASIC_FACILITIES: &[BasicFacilityDef] = &[
    BasicFacilityDef { name: "Bedroom", default_space: Space::Cramped, desc: "Personal quarters for rest and privacy." },
    BasicFacilityDef { name: "Dining Room", default_space: Space::Roomy, desc: "Common space for meals and gatherings." },
    BasicFacilityDef { name: "Parlor", default_space: Space::Cramped, desc: "Comfortable space for informal meetings." },
    BasicFacilityDef { name: "Courtyard", default_space: Space::Vast, desc: "Open outdoor space within the Bastion." },
    BasicFacilityDef { name: "Kitchen", default_space: Space::Roomy, desc: "Meal preparation with implements and storage." },
    BasicFacilityDef { name: "Storage", default_space: Space::Roomy, desc: "Secure area for supplies, tools, and goods." },
];

/// Look up a basic facility definition by name.
pub fn basic_def(name: &str) -> Option<&'static BasicFacilityDef> {
    BASIC_FACILITIES.iter().find(|d| d.name == name)
}

/// One row of the special facility catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecialFacilityDef {
    pub name: &'static str,
    pub min_level: u8,
    pub prereq: &'static str,
    pub space: Space,
    pub hirelings: u32,
    pub orders: &'static [Order],
}

pub const SPECIAL_FACILITIES: &[SpecialFacilityDef] = &[
    SpecialFacilityDef { name: "Arcane Study", min_level: 5, prereq: "Arcane Focus or tool as Spellcasting Focus", space: Space::Roomy, hirelings: 1, orders: &[Order::Craft, Order::Research] },
    SpecialFacilityDef { name: "Armory", min_level: 5, prereq: "None", space: Space::Roomy, hirelings: 1, orders: &[Order::Trade] },
    SpecialFacilityDef { name: "Barrack", min_level: 5, prereq: "None", space: Space::Roomy, hirelings: 1, orders: &[Order::Recruit] },
    SpecialFacilityDef { name: "Garden", min_level: 5, prereq: "None", space: Space::Roomy, hirelings: 1, orders: &[Order::Harvest] },
    SpecialFacilityDef { name: "Library", min_level: 5, prereq: "None", space: Space::Roomy, hirelings: 1, orders: &[Order::Research] },
    SpecialFacilityDef { name: "Workshop", min_level: 5, prereq: "None", space: Space::Roomy, hirelings: 3, orders: &[Order::Craft] },
    SpecialFacilityDef { name: "Sanctuary", min_level: 5, prereq: "Holy Symbol or Druidic Focus", space: Space::Roomy, hirelings: 1, orders: &[Order::Craft, Order::Empower] },
    SpecialFacilityDef { name: "Storehouse", min_level: 5, prereq: "None", space: Space::Roomy, hirelings: 1, orders: &[Order::Trade] },
    SpecialFacilityDef { name: "Smithy", min_level: 5, prereq: "None", space: Space::Roomy, hirelings: 2, orders: &[Order::Craft] },
    SpecialFacilityDef { name: "Greenhouse", min_level: 9, prereq: "None", space: Space::Roomy, hirelings: 1, orders: &[Order::Harvest] },
    SpecialFacilityDef { name: "Laboratory", min_level: 9, prereq: "None", space: Space::Roomy, hirelings: 1, orders: &[Order::Craft] },
    SpecialFacilityDef { name: "Sacristy", min_level: 9, prereq: "Holy Symbol or Druidic Focus", space: Space::Roomy, hirelings: 1, orders: &[Order::Craft, Order::Harvest] },
    SpecialFacilityDef { name: "Scriptorium", min_level: 9, prereq: "None", space: Space::Roomy, hirelings: 1, orders: &[Order::Craft, Order::Research] },
    SpecialFacilityDef { name: "Stable", min_level: 9, prereq: "None", space: Space::Roomy, hirelings: 1, orders: &[Order::Trade, Order::Recruit] },
    SpecialFacilityDef { name: "Training Area", min_level: 9, prereq: "None", space: Space::Vast, hirelings: 4, orders: &[Order::Empower] },
    SpecialFacilityDef { name: "Trophy Room", min_level: 9, prereq: "None", space: Space::Roomy, hirelings: 1, orders: &[Order::Research] },
    SpecialFacilityDef { name: "Archive", min_level: 13, prereq: "None", space: Space::Roomy, hirelings: 1, orders: &[Order::Research] },
    SpecialFacilityDef { name: "Meditation Chamber", min_level: 13, prereq: "None", space: Space::Cramped, hirelings: 1, orders: &[Order::Empower] },
    SpecialFacilityDef { name: "Menagerie", min_level: 13, prereq: "None", space: Space::Vast, hirelings: 2, orders: &[Order::Recruit, Order::Harvest] },
    SpecialFacilityDef { name: "Observatory", min_level: 13, prereq: "Spellcasting Focus", space: Space::Roomy, hirelings: 1, orders: &[Order::Empower, Order::Research] },
    SpecialFacilityDef { name: "Reliquary", min_level: 13, prereq: "Holy Symbol or Druidic Focus", space: Space::Cramped, hirelings: 1, orders: &[Order::Harvest, Order::Research] },
    SpecialFacilityDef { name: "Sanctum", min_level: 17, prereq: "Holy Symbol or Druidic Focus", space: Space::Roomy, hirelings: 4, orders: &[Order::Empower] },
    SpecialFacilityDef { name: "Demiplane", min_level: 17, prereq: "Arcane Focus or tool as Spellcasting Focus", space: Space::Vast, hirelings: 1, orders: &[Order::Empower, Order::Research] },
    SpecialFacilityDef { name: "Guildhall", min_level: 17, prereq: "Expertise in a skill", space: Space::Vast, hirelings: 1, orders: &[Order::Recruit, Order::Trade] },
    SpecialFacilityDef { name: "War Room", min_level: 17, prereq: "Fighting Style or Unarmored Defense", space: Space::Vast, hirelings: 2, orders: &[Order::Recruit, Order::Research] },
];

/// Look up a special facility definition by name.
pub fn special_def(name: &str) -> Option<&'static SpecialFacilityDef> {
    SPECIAL_FACILITIES.iter().find(|d| d.name == name)
}

/// One step of the level-gated special facility cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelStep {
    pub min_level: u8,
    pub max_special: u32,
}

pub const SPECIAL_BY_LEVEL: &[LevelStep] = &[
    LevelStep { min_level: 5, max_special: 2 },
    LevelStep { min_level: 9, max_special: 4 },
    LevelStep { min_level: 13, max_special: 5 },
    LevelStep { min_level: 17, max_special: 6 },
];

/// Highest special facility cap the character's level unlocks. Zero below
/// the first step; level must be in 1..=20.
pub fn max_special_for_level(level: u8) -> Result<u32> {
    if !(1..=20).contains(&level) {
        return Err(RulesError::LevelOutOfRange(level));
    }
    Ok(SPECIAL_BY_LEVEL
        .iter()
        .filter(|s| s.min_level <= level)
        .map(|s| s.max_special)
        .max()
        .unwrap_or(0))
}

/// Weighted hireling first-name table.
pub const HIRELING_NAMES: &[(&str, f32)] = &[
    ("Aelar", 0.05), ("Borin", 0.04), ("Cassandra", 0.05), ("Dorin", 0.03), ("Elaith", 0.04), ("Faelar", 0.04),
    ("Glim", 0.03), ("Hilde", 0.03), ("Ilyana", 0.04), ("Jorin", 0.05), ("Kethra", 0.05), ("Loram", 0.03),
    ("Mara", 0.04), ("Nym", 0.04), ("Oskar", 0.03), ("Perrin", 0.04), ("Quinn", 0.03), ("Ragnar", 0.03),
    ("Seraphina", 0.05), ("Thorin", 0.04), ("Ulric", 0.04), ("Valanthe", 0.03), ("Wren", 0.04), ("Xander", 0.03),
    ("Yara", 0.05), ("Zorin", 0.04),
];

/// Weighted hireling species table.
pub const HIRELING_SPECIES: &[(&str, f32)] = &[
    ("Human", 0.15), ("Elf", 0.12), ("Dwarf", 0.10), ("Halfling", 0.08), ("Gnome", 0.08), ("Half-Elf", 0.09),
    ("Half-Orc", 0.07), ("Tiefling", 0.05), ("Dragonborn", 0.06), ("Goliath", 0.04), ("Aasimar", 0.05),
    ("Kenku", 0.03), ("Tabaxi", 0.02), ("Firbolg", 0.03), ("Triton", 0.02),
];

/// Gold cost per queued wall section.
pub const WALL_SECTION_COST_GP: u32 = 250;
/// Build time per wall section, in days.
pub const WALL_BUILD_DAYS_PER_SECTION: u32 = 10;
/// In-world days that elapse per Bastion turn.
pub const DAYS_PER_TURN: u32 = 7;
/// Built sections needed before the Bastion counts as enclosed.
pub const ENCLOSURE_THRESHOLD_DEFAULT: u32 = 40;
