//! Bastion Headless Simulation Harness
//!
//! Validates the rules engine end-to-end without a UI or storage backend.
//! Runs entirely in-process with a seeded RNG so every run is reproducible.
//!
//! Usage:
//!   cargo run -p bastion-simtest
//!   cargo run -p bastion-simtest -- --verbose

use bastion_core::prelude::*;
use bastion_logic::catalog::{self, SPECIAL_FACILITIES};
use bastion_logic::walls::{compute_walls, RoomRect};

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn check(name: &str, passed: bool, detail: impl Into<String>) -> TestResult {
    TestResult { name: name.into(), passed, detail: detail.into() }
}

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose");
    println!("=== Bastion Simulation Harness ===\n");

    let mut results = Vec::new();

    // 1. Catalog integrity
    results.extend(validate_catalogs(verbose));

    // 2. Facility economy flow
    results.extend(validate_economy(verbose));

    // 3. Hireling id discipline
    results.extend(validate_hirelings(verbose));

    // 4. Wall queue lifecycle
    results.extend(validate_wall_lifecycle(verbose));

    // 5. Long maintain sweep (event table under load)
    results.extend(validate_maintain_sweep(verbose));

    // 6. Perimeter ring geometry
    results.extend(validate_ring_geometry(verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!("\n=== RESULT: {}/{} passed, {} failed ===", passed, total, failed);

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── 1. Catalogs ─────────────────────────────────────────────────────────

fn validate_catalogs(_verbose: bool) -> Vec<TestResult> {
    println!("--- Catalogs ---");
    let mut results = Vec::new();

    results.push(check(
        "special_catalog_size",
        SPECIAL_FACILITIES.len() == 25,
        format!("{} special facility definitions", SPECIAL_FACILITIES.len()),
    ));

    let caps_ok = [(4, 0), (5, 2), (9, 4), (13, 5), (17, 6), (20, 6)]
        .iter()
        .all(|&(lvl, cap)| catalog::max_special_for_level(lvl) == Ok(cap));
    results.push(check("level_cap_steps", caps_ok, "cap step function matches the table"));

    let every_special_buildable = SPECIAL_FACILITIES
        .iter()
        .all(|d| catalog::max_special_for_level(d.min_level).map(|c| c >= 1).unwrap_or(false));
    results.push(check(
        "specials_buildable_at_min_level",
        every_special_buildable,
        "every definition's min level unlocks a nonzero cap",
    ));

    results
}

// ── 2. Economy ──────────────────────────────────────────────────────────

fn validate_economy(_verbose: bool) -> Vec<TestResult> {
    println!("--- Facility Economy ---");
    let mut results = Vec::new();

    let mut store = GameStore::new(1);
    store.dispatch(Action::ApplyProfile {
        character_name: "Harness Hero".into(),
        character_level: 9,
        bastion_name: "Harness Keep".into(),
        gold: 5000,
        defenders: Some(0),
    });

    results.push(check(
        "starter_basics_seeded_free",
        store.state().basics.len() == 2 && store.state().bastion.gold == 5000,
        format!("{} basics, {} gp", store.state().basics.len(), store.state().bastion.gold),
    ));

    store.dispatch(Action::AddBasic { name: "Courtyard".into(), space: Space::Vast });
    results.push(check(
        "vast_basic_costs_3000",
        store.state().bastion.gold == 2000 && store.state().basics.len() == 3,
        format!("gold now {}", store.state().bastion.gold),
    ));

    let before = store.state().clone();
    store.dispatch(Action::AddBasic { name: "Courtyard".into(), space: Space::Vast });
    results.push(check(
        "unaffordable_basic_is_noop",
        *store.state() == before,
        "state unchanged on rejected purchase",
    ));

    store.dispatch(Action::AddSpecial { name: "Garden".into() });
    store.dispatch(Action::AddSpecial { name: "Garden".into() });
    results.push(check(
        "duplicate_special_rejected",
        store.state().specials.len() == 1,
        format!("{} specials after duplicate add", store.state().specials.len()),
    ));

    results
}

// ── 3. Hirelings ────────────────────────────────────────────────────────

fn validate_hirelings(_verbose: bool) -> Vec<TestResult> {
    println!("--- Hirelings ---");
    let mut results = Vec::new();

    let mut store = GameStore::new(2);
    store.dispatch(Action::AddSpecial { name: "Workshop".into() });
    let seeded = store.state().staff_count("Workshop");
    results.push(check("workshop_seeds_three", seeded == 3, format!("{seeded} seeded staff")));

    store.dispatch(Action::HireAuto { facility: "Workshop".into(), n: 5 });
    store.dispatch(Action::FireHirelings { ids: vec![1, 3, 5] });
    store.dispatch(Action::HireAuto { facility: "Workshop".into(), n: 2 });

    let ids: Vec<u32> = store.state().hirelings.iter().map(|h| h.id).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    sorted.dedup();
    results.push(check(
        "ids_unique_and_increasing",
        sorted.len() == ids.len() && ids.windows(2).all(|w| w[0] < w[1]),
        format!("{} hirelings, seq at {}", ids.len(), store.state().hireling_seq),
    ));

    results
}

// ── 4. Walls ────────────────────────────────────────────────────────────

fn validate_wall_lifecycle(_verbose: bool) -> Vec<TestResult> {
    println!("--- Wall Queue ---");
    let mut results = Vec::new();

    let mut store = GameStore::new(3);
    store.dispatch(Action::QueueWalls { sections: 2 });
    let queued = store.state().walls.first().map(|w| (w.sections, w.days_left, w.gp_cost));
    results.push(check(
        "queue_entry_shape",
        queued == Some((2, 20, 500)) && store.state().bastion.gold == 500,
        format!("{queued:?}"),
    ));

    for _ in 0..3 {
        store.dispatch(Action::EndTurn { selection: None });
    }
    results.push(check(
        "sections_complete_on_third_turn",
        store.state().built_walls == 2 && store.state().walls.is_empty(),
        format!("built {} after 3 turns", store.state().built_walls),
    ));

    results
}

// ── 5. Maintain sweep ───────────────────────────────────────────────────

fn validate_maintain_sweep(verbose: bool) -> Vec<TestResult> {
    println!("--- Maintain Sweep ---");
    let mut results = Vec::new();

    let mut store = GameStore::new(4);
    store.dispatch(Action::ApplyProfile {
        character_name: "Harness Hero".into(),
        character_level: 13,
        bastion_name: "Harness Keep".into(),
        gold: 10_000,
        defenders: Some(12),
    });
    for name in ["Barrack", "Garden", "Workshop", "Armory", "Library"] {
        store.dispatch(Action::AddSpecial { name: name.to_string() });
    }

    let turns = 200;
    let mut last_built = 0;
    let mut ok_monotonic = true;
    let mut ok_one_event = true;
    for i in 0..turns {
        let before_events = store.state().events.len();
        store.dispatch(Action::EndTurn { selection: None });
        ok_one_event &= store.state().events.len() == before_events + 1;
        ok_monotonic &= store.state().built_walls >= last_built;
        last_built = store.state().built_walls;
        if verbose && i % 50 == 0 {
            println!(
                "  turn {}: {} gp, {} defenders, {} hirelings",
                store.state().bastion.current_turn,
                store.state().bastion.gold,
                store.state().defenders,
                store.state().hirelings.len(),
            );
        }
    }

    results.push(check(
        "one_event_per_maintain_turn",
        ok_one_event && store.state().events.len() == turns,
        format!("{} events over {} turns", store.state().events.len(), turns),
    ));
    results.push(check("built_walls_monotonic", ok_monotonic, "never decreased"));
    results.push(check(
        "timeline_matches_turns",
        store.state().timeline.len() == turns,
        format!("{} timeline entries", store.state().timeline.len()),
    ));

    if verbose {
        match serde_json::to_string_pretty(store.state()) {
            Ok(json) => println!("final state:\n{json}"),
            Err(e) => println!("state dump failed: {e}"),
        }
    }

    results
}

// ── 6. Ring geometry ────────────────────────────────────────────────────

fn validate_ring_geometry(_verbose: bool) -> Vec<TestResult> {
    println!("--- Perimeter Ring ---");
    let mut results = Vec::new();

    let rooms = vec![RoomRect { label: "Keep".into(), x: 1, y: 1, w: 3, h: 2 }];
    let full = compute_walls(&rooms, &[], 10_000);
    // 3×2 interior expands to a 5×4 box: 2*(5+4) - 4 cells.
    results.push(check(
        "ring_length",
        full.len() == 14,
        format!("{} ring cells", full.len()),
    ));

    let prefix = compute_walls(&rooms, &[], 5);
    results.push(check(
        "prefix_property",
        prefix.len() == 5 && prefix[..] == full[..5],
        "built sections are a ring prefix",
    ));

    let clamped = compute_walls(&[RoomRect { label: "Gate".into(), x: 0, y: 0, w: 1, h: 1 }], &[], 100);
    results.push(check(
        "no_negative_coordinates",
        clamped.iter().all(|c| c.x >= 0 && c.y >= 0),
        "origin-adjacent footprint stays non-negative",
    ));

    results
}
