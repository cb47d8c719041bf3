//! Dice helpers behind an injected RNG.
//!
//! Every roll takes `&mut impl Rng` so callers can thread a seeded source
//! through for deterministic runs.

use rand::Rng;

/// Roll `n` dice with the given number of sides, returning each face.
pub fn roll(n: u32, sides: u32, rng: &mut impl Rng) -> Vec<u32> {
    debug_assert!(sides >= 2, "dice need at least 2 sides");
    (0..n).map(|_| rng.gen_range(1..=sides)).collect()
}

/// Sum of `n` dice with the given number of sides.
pub fn roll_sum(n: u32, sides: u32, rng: &mut impl Rng) -> u32 {
    roll(n, sides, rng).iter().sum()
}

/// One six-sided die.
pub fn d6(rng: &mut impl Rng) -> u32 {
    rng.gen_range(1..=6)
}

/// One percentile die.
pub fn d100(rng: &mut impl Rng) -> u32 {
    rng.gen_range(1..=100)
}
