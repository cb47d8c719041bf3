//! Generic weighted random selection.

use rand::Rng;

/// Draw one value from a list of `(value, weight)` pairs by subtracting
/// cumulative weights from a uniform draw over the total mass. Weights need
/// not be normalized. Returns `None` only for an empty list; when
/// floating-point rounding leaves a sliver of unclaimed mass, the last entry
/// wins.
pub fn weighted_sample<T: Copy>(pairs: &[(T, f32)], rng: &mut impl Rng) -> Option<T> {
    if pairs.is_empty() {
        return None;
    }
    let total: f32 = pairs.iter().map(|(_, w)| w).sum();
    if total <= 0.0 {
        return pairs.last().map(|(v, _)| *v);
    }
    let mut r = rng.gen::<f32>() * total;
    for (value, weight) in pairs {
        r -= weight;
        if r <= 0.0 {
            return Some(*value);
        }
    }
    pairs.last().map(|(v, _)| *v)
}
