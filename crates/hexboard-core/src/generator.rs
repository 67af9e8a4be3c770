//! Random tile layout with no two red chits (6 or 8) on adjacent cells.

use crate::board::{is_red_number, Resource, Tile};
use crate::error::BoardError;
use crate::hex::{self, Cube, CELL_COUNT};
use rand::Rng;
use tracing::debug;

/// Whole-board attempts before generation gives up
pub const MAX_ATTEMPTS: usize = 100;

/// Production numbers handed out, one per cell; the 0 marks the desert
pub const NUMBER_POOL: [u8; CELL_COUNT] = [
    0, 2, 3, 3, 4, 4, 5, 5, 6, 6, 8, 8, 9, 9, 10, 10, 11, 11, 12,
];

/// Resources handed out to the non-desert cells
pub const RESOURCE_POOL: [(Resource, usize); 5] = [
    (Resource::Lumber, 4),
    (Resource::Brick, 3),
    (Resource::Wool, 4),
    (Resource::Grain, 4),
    (Resource::Ore, 3),
];

/// Generate a layout, restarting from an empty board whenever an attempt
/// runs out of numbers that may sit next to a red chit.
pub fn generate_tiles<R: Rng>(rng: &mut R) -> Result<Vec<Tile>, BoardError> {
    retry(MAX_ATTEMPTS, || create_tiles(rng))
}

/// Run `attempt` until it succeeds, at most `attempts` times.
fn retry<T, F>(attempts: usize, mut attempt: F) -> Result<T, BoardError>
where
    F: FnMut() -> Result<T, BoardError>,
{
    for n in 1..=attempts {
        match attempt() {
            Ok(value) => return Ok(value),
            Err(e) => debug!(attempt = n, error = %e, "tile generation attempt failed"),
        }
    }

    Err(BoardError::RetryCeilingExceeded { attempts })
}

/// One attempt at a layout.
///
/// Cells are filled in scan order. Each cell draws a number without
/// replacement; a cell touching an already placed 6 or 8 keeps drawing until
/// it gets anything else, and fails with `PoolExhausted` if only 6s and 8s
/// remain. The desert takes the 0 and no resource.
pub fn create_tiles<R: Rng>(rng: &mut R) -> Result<Vec<Tile>, BoardError> {
    let mut numbers = NUMBER_POOL.to_vec();
    let mut resources: Vec<Resource> = RESOURCE_POOL
        .iter()
        .flat_map(|&(resource, count)| std::iter::repeat(resource).take(count))
        .collect();
    let mut tiles: Vec<Tile> = Vec::with_capacity(CELL_COUNT);

    for cube in Cube::all() {
        let red_neighbor = hex::neighbors(&tiles, cube)
            .iter()
            .any(|t| t.is_red_chit());

        let mut index = rng.gen_range(0..numbers.len());
        if red_neighbor && is_red_number(numbers[index]) {
            if numbers.iter().all(|&n| is_red_number(n)) {
                return Err(BoardError::PoolExhausted);
            }
            while is_red_number(numbers[index]) {
                index = rng.gen_range(0..numbers.len());
            }
        }
        let number = numbers.remove(index);

        let resource = if number == 0 {
            Resource::Desert
        } else {
            let index = rng.gen_range(0..resources.len());
            resources.remove(index)
        };

        tiles.push(Tile::new(cube, resource, number));
    }

    Ok(tiles)
}
