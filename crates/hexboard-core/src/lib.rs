//! Hexboard - board generation for a hex-based resource trading game
//!
//! This crate generates the starting position of a game:
//! - Cube coordinates for the 19 cells and canonical corners
//! - A random tile layout where no two 6s or 8s touch
//! - Greedy placement of the initial settlements under the distance rule
//!
//! # Modules
//!
//! - [`hex`]: Cells, corners, and the geometry between them
//! - [`board`]: Tiles, buildings, and the `Board` snapshot
//! - [`generator`]: Random tile layout
//! - [`placement`]: Initial settlement placement
//! - [`player`]: Player colors and draft order
//! - [`error`]: Error types
//!
//! Randomness is always passed in, so a seeded RNG reproduces a board exactly.

pub mod board;
pub mod error;
pub mod generator;
pub mod hex;
pub mod placement;
pub mod player;

// Re-export commonly used types
pub use board::{Board, Building, BuildingType, Resource, Tile};
pub use error::{BoardError, CoordError};
pub use generator::{create_tiles, generate_tiles, MAX_ATTEMPTS};
pub use hex::{list_vertices, neighbors, Cube, Vertex, CELL_COUNT, VERTEX_COUNT};
pub use placement::{place_buildings, position_values, select_vertex};
pub use player::{Color, SETUP_ORDER};
