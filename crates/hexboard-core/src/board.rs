//! Board representation: tiles, buildings and the snapshot sent to observers.
//!
//! This module contains:
//! - Resource types and numbered tiles
//! - Building types (settlements, cities)
//! - The `Board` aggregate and its generation cycle

use crate::error::BoardError;
use crate::generator;
use crate::hex::{Cube, Vertex, CELL_COUNT};
use crate::placement;
use crate::player::Color;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest production number a tile can carry
pub const MIN_NUMBER: u8 = 2;
/// Highest production number a tile can carry
pub const MAX_NUMBER: u8 = 12;

/// What a tile produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    /// Produces nothing and never carries a number
    Desert,
    Lumber,
    Brick,
    Wool,
    Grain,
    Ore,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Resource::Desert => "desert",
            Resource::Lumber => "lumber",
            Resource::Brick => "brick",
            Resource::Wool => "wool",
            Resource::Grain => "grain",
            Resource::Ore => "ore",
        };
        f.write_str(name)
    }
}

/// A single hex tile on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    /// Position on the hex grid
    pub cube: Cube,
    /// What the tile produces
    pub resource: Resource,
    /// Dice number that triggers production; 0 for the desert
    pub number: u8,
}

impl Tile {
    /// Create a tile.
    ///
    /// # Panics
    ///
    /// Panics if a desert carries a number, or any other resource carries
    /// one outside 2..=12 or a 7.
    pub fn new(cube: Cube, resource: Resource, number: u8) -> Self {
        if resource == Resource::Desert {
            assert!(number == 0, "number must be 0 for desert: {number}");
        } else {
            assert!(
                (MIN_NUMBER..=MAX_NUMBER).contains(&number),
                "number out of range: {number}"
            );
            assert!(number != 7, "number cannot be 7");
        }

        Self {
            cube,
            resource,
            number,
        }
    }

    /// How often this tile produces, from 1 (2 or 12) to 5 (6 or 8)
    pub fn value(&self) -> u32 {
        match self.number {
            2 | 12 => 1,
            3 | 11 => 2,
            4 | 10 => 3,
            5 | 9 => 4,
            6 | 8 => 5,
            _ => 0,
        }
    }

    /// Whether this tile carries one of the two most frequent numbers
    pub fn is_red_chit(&self) -> bool {
        is_red_number(self.number)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Tile({}, {}, {}, {}, {})",
            self.cube.q(),
            self.cube.r(),
            self.cube.s(),
            self.resource,
            self.number
        )
    }
}

pub(crate) fn is_red_number(number: u8) -> bool {
    number == 6 || number == 8
}

/// Kind of structure standing on a vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildingType {
    Settlement,
    City,
}

/// A structure of one color on one corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Building {
    pub vertex: Vertex,
    #[serde(rename = "type")]
    pub kind: BuildingType,
    pub color: Color,
}

impl Building {
    pub fn new(vertex: Vertex, kind: BuildingType, color: Color) -> Self {
        Self {
            vertex,
            kind,
            color,
        }
    }
}

/// The generated board: tiles plus the initial buildings derived from them.
///
/// Both collections are only ever replaced as a whole, and only once the
/// replacement has been computed successfully.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub tiles: Vec<Tile>,
    pub buildings: Vec<Building>,
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a complete board (tiles then buildings) with the provided RNG
    pub fn generate<R: Rng>(rng: &mut R) -> Result<Self, BoardError> {
        let mut board = Self::new();
        board.place_tiles(rng)?;
        board.place_buildings()?;
        Ok(board)
    }

    /// Replace the tiles with a freshly generated layout.
    ///
    /// Buildings are left as they are; they refer to the old layout until
    /// `place_buildings` runs again.
    pub fn place_tiles<R: Rng>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        self.tiles = generator::generate_tiles(rng)?;
        Ok(())
    }

    /// Replace the buildings with the best placement for the current tiles
    pub fn place_buildings(&mut self) -> Result<(), BoardError> {
        if self.tiles.len() != CELL_COUNT {
            return Err(BoardError::TilesNotPlaced {
                found: self.tiles.len(),
            });
        }
        self.buildings = placement::place_buildings(&self.tiles)?;
        Ok(())
    }

    /// Serialize to the JSON payload pushed to observers
    pub fn to_json(&self) -> Result<String, BoardError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a board previously produced by `to_json`
    pub fn from_json(json: &str) -> Result<Self, BoardError> {
        Ok(serde_json::from_str(json)?)
    }
}
