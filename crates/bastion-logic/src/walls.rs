//! Floorplan grid types and the perimeter wall-ring calculator.
//!
//! Pure geometry over plain structs. The ring is derived from the occupied
//! footprint and consumed in order as wall sections finish construction, so
//! the caller recomputes it whenever rooms, paths, or the built count change.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A labeled rectangle of grid cells occupied by one facility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomRect {
    pub label: String,
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

/// A single grid cell, used for hallway paths and wall sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCell {
    pub x: i32,
    pub y: i32,
}

/// Derive the built prefix of the perimeter wall ring.
///
/// Marks every room cell and hallway cell as occupied, takes the bounding
/// box, and expands it outward by one cell — except on a left/top side that
/// already sits at coordinate 0, which stays put so cells never go negative.
/// The box perimeter is traced clockwise from the top-left corner (top
/// left-to-right, right top-to-bottom, bottom right-to-left, left
/// bottom-to-top) with no duplicate cells, and the first `built_sections`
/// cells of that ring are returned.
pub fn compute_walls(rooms: &[RoomRect], paths: &[GridCell], built_sections: u32) -> Vec<GridCell> {
    if rooms.is_empty() || built_sections == 0 {
        return Vec::new();
    }

    let mut occupied: HashSet<(i32, i32)> = HashSet::new();
    for r in rooms {
        for dy in 0..r.h.max(0) {
            for dx in 0..r.w.max(0) {
                occupied.insert((r.x + dx, r.y + dy));
            }
        }
    }
    for p in paths {
        occupied.insert((p.x, p.y));
    }
    if occupied.is_empty() {
        return Vec::new();
    }

    let raw_min_x = occupied.iter().map(|&(x, _)| x).min().unwrap_or(0);
    let raw_max_x = occupied.iter().map(|&(x, _)| x).max().unwrap_or(0);
    let raw_min_y = occupied.iter().map(|&(_, y)| y).min().unwrap_or(0);
    let raw_max_y = occupied.iter().map(|&(_, y)| y).max().unwrap_or(0);

    let min_x = if raw_min_x > 0 { raw_min_x - 1 } else { raw_min_x };
    let min_y = if raw_min_y > 0 { raw_min_y - 1 } else { raw_min_y };
    let max_x = raw_max_x + 1;
    let max_y = raw_max_y + 1;

    let mut ring = Vec::new();
    for x in min_x..=max_x {
        ring.push(GridCell { x, y: min_y });
    }
    for y in (min_y + 1)..=max_y {
        ring.push(GridCell { x: max_x, y });
    }
    for x in (min_x..max_x).rev() {
        ring.push(GridCell { x, y: max_y });
    }
    for y in ((min_y + 1)..max_y).rev() {
        ring.push(GridCell { x: min_x, y });
    }

    ring.truncate(built_sections as usize);
    ring
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(x: i32, y: i32, w: i32, h: i32) -> RoomRect {
        RoomRect { label: "room".to_string(), x, y, w, h }
    }

    #[test]
    fn test_empty_inputs_yield_empty_ring() {
        assert!(compute_walls(&[], &[], 10).is_empty());
        assert!(compute_walls(&[room(1, 1, 2, 2)], &[], 0).is_empty());
        assert!(compute_walls(&[room(1, 1, 0, 0)], &[], 10).is_empty());
    }

    #[test]
    fn test_ring_order_around_interior_room() {
        // 2×2 room at (1,1): box spans (0,0)..(3,3), ring is 12 cells
        // clockwise from the top-left corner.
        let ring = compute_walls(&[room(1, 1, 2, 2)], &[], 100);
        let expected: Vec<GridCell> = [
            (0, 0), (1, 0), (2, 0), (3, 0),
            (3, 1), (3, 2), (3, 3),
            (2, 3), (1, 3), (0, 3),
            (0, 2), (0, 1),
        ]
        .iter()
        .map(|&(x, y)| GridCell { x, y })
        .collect();
        assert_eq!(ring, expected);
    }

    #[test]
    fn test_ring_has_no_duplicates() {
        let ring = compute_walls(&[room(1, 1, 3, 2)], &[], 1000);
        let unique: HashSet<GridCell> = ring.iter().copied().collect();
        assert_eq!(unique.len(), ring.len());
    }

    #[test]
    fn test_built_sections_is_a_prefix() {
        let rooms = [room(1, 1, 2, 2)];
        let full = compute_walls(&rooms, &[], 100);
        for n in 0..=full.len() as u32 {
            assert_eq!(compute_walls(&rooms, &[], n), full[..n as usize]);
        }
    }

    #[test]
    fn test_no_expansion_past_origin() {
        // Room already at (0,0): left/top stay put, right/bottom expand.
        let ring = compute_walls(&[room(0, 0, 1, 1)], &[], 100);
        let expected: Vec<GridCell> = [(0, 0), (1, 0), (1, 1), (0, 1)]
            .iter()
            .map(|&(x, y)| GridCell { x, y })
            .collect();
        assert_eq!(ring, expected);
        assert!(ring.iter().all(|c| c.x >= 0 && c.y >= 0));
    }

    #[test]
    fn test_paths_extend_the_footprint() {
        let rooms = [room(1, 1, 1, 1)];
        let without = compute_walls(&rooms, &[], 1000);
        let with = compute_walls(&rooms, &[GridCell { x: 5, y: 1 }], 1000);
        assert!(with.len() > without.len());
        assert!(with.iter().any(|c| c.x == 6));
    }

    #[test]
    fn test_ring_length_for_rectangular_region() {
        // Interior w×h footprint expands by 1 on all four sides, so the box
        // is (w+2)×(h+2) and the ring has 2*((w+2)+(h+2)) - 4 cells.
        for (w, h) in [(1, 1), (2, 3), (4, 2)] {
            let ring = compute_walls(&[room(2, 2, w, h)], &[], 10_000);
            let expected = 2 * ((w + 2) + (h + 2)) - 4;
            assert_eq!(ring.len() as i32, expected);
        }
    }
}
