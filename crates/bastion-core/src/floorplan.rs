//! Floorplan layout: one rectangular footprint per facility, and the
//! derived perimeter ring.

use bastion_logic::walls::{compute_walls, RoomRect};

use crate::state::GameState;

/// Horizontal/vertical gap between placed footprints.
const MARGIN: i32 = 2;
/// Total layout width before the cursor wraps to a new row.
const ROW_WIDTH: i32 = 60;

/// Recompute the derived perimeter ring in place.
pub fn refresh_walls(state: &mut GameState) {
    state.floorplan_walls =
        compute_walls(&state.floorplan_rooms, &state.floorplan_paths, state.built_walls);
}

/// Rebuild the room rectangles from the current facility inventory.
///
/// Each basic and special facility gets a near-square footprint
/// (`w = ceil(sqrt(tiles))`, `h = ceil(tiles / w)`), packed left-to-right
/// from (1,1) and wrapping rows at the fixed layout width. Hallway paths are
/// cleared and the ring recomputed.
pub fn regen_floorplan(state: &GameState) -> GameState {
    let items: Vec<(String, u32)> = state
        .basics
        .iter()
        .map(|b| (b.name.clone(), b.tiles))
        .chain(state.specials.iter().map(|s| (s.name.clone(), s.space.info().max_tiles)))
        .collect();

    let mut rooms = Vec::new();
    let (mut cursor_x, mut cursor_y, mut row_h) = (1i32, 1i32, 0i32);
    for (label, tiles) in items {
        let n = tiles.max(1);
        let w = (n as f64).sqrt().ceil() as i32;
        let h = ((n as i32) + w - 1) / w;
        if cursor_x + w + MARGIN > ROW_WIDTH {
            cursor_x = 1;
            cursor_y += row_h + MARGIN;
            row_h = 0;
        }
        rooms.push(RoomRect { label, x: cursor_x, y: cursor_y, w, h });
        cursor_x += w + MARGIN;
        row_h = row_h.max(h);
    }

    let mut next = state.clone();
    next.floorplan_rooms = rooms;
    next.floorplan_paths.clear();
    refresh_walls(&mut next);
    next
}
