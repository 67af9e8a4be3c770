//! Greedy placement of the initial settlements.
//!
//! Every corner of the board gets a position value (the summed yield of the
//! tiles touching it). Colors then take turns in `SETUP_ORDER`, each taking
//! the most valuable corner that is neither built on nor one edge away from
//! an existing building. Equal values go to the smallest `Vertex`.

use crate::board::{Building, BuildingType, Tile};
use crate::error::BoardError;
use crate::hex::{list_vertices, Vertex};
use crate::player::SETUP_ORDER;
use std::collections::{BTreeMap, BTreeSet};

/// Position value of every distinct corner of `tiles`
pub fn position_values(tiles: &[Tile]) -> BTreeMap<Vertex, u32> {
    list_vertices(tiles)
        .into_iter()
        .map(|v| (v, v.position_value(tiles)))
        .collect()
}

/// Corners that may no longer be built on: the buildings themselves and
/// everything one edge away from them.
pub fn blocked_vertices(buildings: &[Building]) -> BTreeSet<Vertex> {
    buildings
        .iter()
        .flat_map(|b| std::iter::once(b.vertex).chain(b.vertex.neighboring_vertices()))
        .collect()
}

/// The best unblocked corner, or `None` when every corner is blocked
pub fn select_vertex(values: &BTreeMap<Vertex, u32>, buildings: &[Building]) -> Option<Vertex> {
    let blocked = blocked_vertices(buildings);
    let mut best: Option<(Vertex, u32)> = None;

    for (&vertex, &value) in values {
        if blocked.contains(&vertex) {
            continue;
        }
        // Strictly greater: the first maximum in order wins ties
        if best.map_or(true, |(_, best_value)| value > best_value) {
            best = Some((vertex, value));
        }
    }

    best.map(|(vertex, _)| vertex)
}

/// Place one settlement per entry of `SETUP_ORDER`
pub fn place_buildings(tiles: &[Tile]) -> Result<Vec<Building>, BoardError> {
    let values = position_values(tiles);
    let mut buildings = Vec::with_capacity(SETUP_ORDER.len());

    for color in SETUP_ORDER {
        let vertex = select_vertex(&values, &buildings).ok_or(BoardError::NoEligibleVertex {
            color,
            placed: buildings.len(),
        })?;
        buildings.push(Building::new(vertex, BuildingType::Settlement, color));
    }

    Ok(buildings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Resource;
    use crate::hex::{Cube, VERTEX_COUNT};
    use crate::player::Color;
    use pretty_assertions::assert_eq;

    fn settlement(vertex: Vertex, color: Color) -> Building {
        Building::new(vertex, BuildingType::Settlement, color)
    }

    #[test]
    fn test_position_values_cover_every_vertex_once() {
        let tiles: Vec<Tile> = Cube::all().map(|c| Tile::new(c, Resource::Desert, 0)).collect();
        let values = position_values(&tiles);
        assert_eq!(values.len(), VERTEX_COUNT);
        assert!(values.values().all(|&v| v == 0));
    }

    #[test]
    fn test_outer_corner_has_single_tile_value() {
        // Upper-right of the east corner cell touches no other cell
        let tiles = vec![Tile::new(Cube::new(2, -2), Resource::Lumber, 4)];
        let values = position_values(&tiles);
        assert_eq!(values[&Vertex::new(Cube::new(2, -2), 1)], 3);
    }

    #[test]
    fn test_select_vertex_takes_unique_maximum() {
        let low = Vertex::new(Cube::new(0, 0), 0);
        let high = Vertex::new(Cube::new(2, -2), 1);
        let values = BTreeMap::from([(low, 2), (high, 3)]);
        assert_eq!(select_vertex(&values, &[]), Some(high));
    }

    #[test]
    fn test_select_vertex_skips_constrained_maximum() {
        let high = Vertex::new(Cube::new(2, -2), 1);
        let next_to_high = Vertex::new(Cube::new(2, -2), 0);
        let far = Vertex::new(Cube::new(-2, 2), 3);
        let values = BTreeMap::from([(high, 3), (far, 1)]);

        // Built on
        let taken = [settlement(high, Color::Red)];
        assert_eq!(select_vertex(&values, &taken), Some(far));

        // One edge away from a building
        let adjacent = [settlement(next_to_high, Color::Blue)];
        assert_eq!(select_vertex(&values, &adjacent), Some(far));
    }

    #[test]
    fn test_select_vertex_breaks_ties_by_order() {
        let a = Vertex::new(Cube::new(-1, 0), 0);
        let b = Vertex::new(Cube::new(1, 0), 0);
        let values = BTreeMap::from([(b, 4), (a, 4)]);
        assert_eq!(select_vertex(&values, &[]), Some(a));
    }

    #[test]
    fn test_select_vertex_accepts_zero_value() {
        let v = Vertex::new(Cube::new(0, 0), 3);
        let values = BTreeMap::from([(v, 0)]);
        assert_eq!(select_vertex(&values, &[]), Some(v));
        assert_eq!(select_vertex(&values, &[settlement(v, Color::Red)]), None);
    }

    #[test]
    fn test_blocked_vertices_include_neighbors() {
        let v = Vertex::new(Cube::new(0, 0), 0);
        let blocked = blocked_vertices(&[settlement(v, Color::Green)]);
        assert_eq!(blocked.len(), 4);
        assert!(blocked.contains(&v));
    }

    #[test]
    fn test_single_tile_runs_out_of_vertices() {
        // A lone hexagon has room for three settlements on alternate corners
        let tiles = vec![Tile::new(Cube::new(0, 0), Resource::Ore, 5)];
        let err = place_buildings(&tiles).unwrap_err();
        assert!(matches!(
            err,
            BoardError::NoEligibleVertex {
                color: Color::Yellow,
                placed: 3
            }
        ));
    }

    #[test]
    fn test_first_pick_is_smallest_of_tied_corners() {
        let tiles = vec![Tile::new(Cube::new(0, 0), Resource::Ore, 5)];
        let values = position_values(&tiles);
        let first = *values.keys().next().unwrap();
        assert_eq!(select_vertex(&values, &[]), Some(first));
    }

    #[test]
    fn test_best_corner_goes_to_first_color() {
        let mut tiles: Vec<Tile> = Cube::all().map(|c| Tile::new(c, Resource::Desert, 0)).collect();
        // Three red chits around the top of the center cell
        for (q, r, number) in [(0, 0, 6), (0, -1, 8), (1, -1, 6)] {
            let tile = tiles.iter_mut().find(|t| t.cube == Cube::new(q, r)).unwrap();
            *tile = Tile::new(Cube::new(q, r), Resource::Grain, number);
        }

        let buildings = place_buildings(&tiles).unwrap();
        assert_eq!(buildings[0], settlement(Vertex::new(Cube::new(0, 0), 0), Color::Red));
        assert_eq!(buildings.len(), SETUP_ORDER.len());
    }
}
