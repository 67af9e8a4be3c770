//! Hex coordinate system using cube coordinates (q, r, s).
//!
//! This module provides the geometry of the board:
//! - `Cube`: identifies a cell of the radius-2 hexagon (19 cells)
//! - `Vertex`: identifies a corner, canonicalized so that the up to three
//!   cells meeting at one point all name it the same way
//!
//! Corners are indexed clockwise from the top of a pointy-top hex:
//! 0 top, 1 upper-right, 2 lower-right, 3 bottom, 4 lower-left, 5 upper-left.

use crate::board::Tile;
use crate::error::CoordError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::iter;

/// Smallest value any cube axis may take
pub const MIN_COORD: i32 = -2;
/// Largest value any cube axis may take
pub const MAX_COORD: i32 = 2;
/// Number of cells on the board
pub const CELL_COUNT: usize = 19;
/// Number of distinct corners on the board
pub const VERTEX_COUNT: usize = 54;

/// Unit steps (dq, dr) to the six neighboring cells; s follows from q + r + s = 0.
pub const DIRECTIONS: [(i32, i32); 6] = [(1, 0), (1, -1), (0, 1), (-1, 1), (-1, 0), (0, -1)];

/// The two other (dq, dr, corner) addresses of each corner of a cell.
const OVERLAPS: [[(i32, i32, usize); 2]; 6] = [
    [(0, -1, 2), (1, -1, 4)],
    [(1, -1, 3), (1, 0, 5)],
    [(1, 0, 4), (0, 1, 0)],
    [(0, 1, 5), (-1, 1, 1)],
    [(-1, 1, 0), (-1, 0, 2)],
    [(-1, 0, 1), (0, -1, 3)],
];

/// Two equivalent addresses of the corner one edge away from each corner,
/// pointing out of the cell. It lies between the two overlapping cells.
const FAR_CORNERS: [[(i32, i32, usize); 2]; 6] = [
    [(0, -1, 1), (1, -1, 5)],
    [(1, -1, 2), (1, 0, 0)],
    [(1, 0, 3), (0, 1, 1)],
    [(0, 1, 4), (-1, 1, 2)],
    [(-1, 1, 5), (-1, 0, 3)],
    [(-1, 0, 0), (0, -1, 4)],
];

fn in_bounds(value: i32) -> bool {
    (MIN_COORD..=MAX_COORD).contains(&value)
}

/// Cube coordinate of a cell.
///
/// - `q` increases going east
/// - `r` increases going southeast
/// - `s` is always `-q - r`
///
/// Every `Cube` lies on the board; there is no way to build one that doesn't.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "CubeRepr")]
pub struct Cube {
    q: i32,
    r: i32,
    s: i32,
}

#[derive(Deserialize)]
struct CubeRepr {
    q: i32,
    r: i32,
    s: i32,
}

impl TryFrom<CubeRepr> for Cube {
    type Error = CoordError;

    fn try_from(repr: CubeRepr) -> Result<Self, Self::Error> {
        let CubeRepr { q, r, s } = repr;
        if q + r + s != 0 {
            return Err(CoordError::NotOnPlane { q, r, s });
        }
        Cube::try_new(q, r)
    }
}

impl Cube {
    /// Create a cube, or report which axis left the board
    pub fn try_new(q: i32, r: i32) -> Result<Self, CoordError> {
        let s = -q - r;
        if in_bounds(q) && in_bounds(r) && in_bounds(s) {
            Ok(Self { q, r, s })
        } else {
            Err(CoordError::OutOfRange { q, r, s })
        }
    }

    /// Create a cube that is known to be on the board.
    ///
    /// # Panics
    ///
    /// Panics if any axis is out of range. Callers only pass coordinates that
    /// come from the board itself, so a failure here is a logic bug.
    pub fn new(q: i32, r: i32) -> Self {
        match Self::try_new(q, r) {
            Ok(cube) => cube,
            Err(e) => panic!("{e}"),
        }
    }

    pub const fn q(&self) -> i32 {
        self.q
    }

    pub const fn r(&self) -> i32 {
        self.r
    }

    pub const fn s(&self) -> i32 {
        self.s
    }

    /// The cube `(dq, dr)` away, if it is still on the board
    pub fn offset(&self, dq: i32, dr: i32) -> Option<Cube> {
        Self::try_new(self.q + dq, self.r + dr).ok()
    }

    /// Every cell of the board, q ascending then r ascending
    pub fn all() -> impl Iterator<Item = Cube> {
        (MIN_COORD..=MAX_COORD).flat_map(|q| {
            (MIN_COORD..=MAX_COORD).filter_map(move |r| Cube::try_new(q, r).ok())
        })
    }

    /// The six corners of this cell, canonicalized
    pub fn vertices(&self) -> [Vertex; 6] {
        std::array::from_fn(|index| Vertex::new(*self, index))
    }

    /// Convert to pixel coordinates (center of hex)
    /// Uses pointy-top orientation with the given hex size (radius)
    pub fn to_pixel(&self, hex_size: f64) -> (f64, f64) {
        let x = hex_size * (3.0_f64.sqrt() * self.q as f64 + 3.0_f64.sqrt() / 2.0 * self.r as f64);
        let y = hex_size * (3.0 / 2.0 * self.r as f64);
        (x, y)
    }
}

/// Tiles adjacent to `cube`, in `DIRECTIONS` order.
///
/// A linear scan per direction; fine for 19 cells.
pub fn neighbors(tiles: &[Tile], cube: Cube) -> Vec<&Tile> {
    DIRECTIONS
        .iter()
        .filter_map(|&(dq, dr)| cube.offset(dq, dr))
        .flat_map(move |neighbor| tiles.iter().filter(move |t| t.cube == neighbor))
        .collect()
}

/// A corner of a cell, always held in canonical form.
///
/// The same point can be addressed from up to three cells. The canonical
/// address is the one whose cube has the smallest `(q, r)`, so two `Vertex`
/// values compare equal exactly when they name the same point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "VertexRepr")]
pub struct Vertex {
    cube: Cube,
    index: usize,
}

#[derive(Deserialize)]
struct VertexRepr {
    cube: Cube,
    index: usize,
}

impl TryFrom<VertexRepr> for Vertex {
    type Error = CoordError;

    fn try_from(repr: VertexRepr) -> Result<Self, Self::Error> {
        if repr.index > 5 {
            return Err(CoordError::CornerOutOfRange(repr.index));
        }
        Ok(Vertex::new(repr.cube, repr.index))
    }
}

impl Vertex {
    /// Create a vertex (automatically canonicalized)
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a corner index (0 to 5).
    pub fn new(cube: Cube, index: usize) -> Self {
        assert!(index <= 5, "corner index out of range: {index}");
        let mut vertex = Self { cube, index };
        vertex.normalize();
        vertex
    }

    pub const fn cube(&self) -> Cube {
        self.cube
    }

    pub const fn index(&self) -> usize {
        self.index
    }

    /// Other addresses of this point from neighboring cells that are on the board.
    ///
    /// The results are raw addresses, not canonical vertices.
    pub fn overlapping_vertices(&self) -> Vec<Vertex> {
        OVERLAPS[self.index]
            .iter()
            .filter_map(|&(dq, dr, index)| {
                self.cube.offset(dq, dr).map(|cube| Vertex { cube, index })
            })
            .collect()
    }

    /// Rewrite this vertex to the address with the smallest `(q, r)`.
    ///
    /// Idempotent.
    pub fn normalize(&mut self) {
        for other in self.overlapping_vertices() {
            if (other.cube.q, other.cube.r) < (self.cube.q, self.cube.r) {
                *self = other;
            }
        }
    }

    /// Corners one edge away (2 or 3 of them), canonicalized.
    pub fn neighboring_vertices(&self) -> Vec<Vertex> {
        let mut adjacent = vec![
            Vertex::new(self.cube, (self.index + 1) % 6),
            Vertex::new(self.cube, (self.index + 5) % 6),
        ];
        let far = FAR_CORNERS[self.index]
            .iter()
            .find_map(|&(dq, dr, index)| {
                self.cube
                    .offset(dq, dr)
                    .map(|cube| Vertex::new(cube, index))
            });
        adjacent.extend(far);
        adjacent
    }

    /// Every cell touching this point: the owning cube first, then the
    /// cubes of the overlapping addresses.
    pub fn neighboring_cubes(&self) -> Vec<Cube> {
        iter::once(self.cube)
            .chain(self.overlapping_vertices().into_iter().map(|v| v.cube))
            .collect()
    }

    /// Sum of the yield values of the tiles touching this point
    pub fn position_value(&self, tiles: &[Tile]) -> u32 {
        let cubes = self.neighboring_cubes();
        tiles
            .iter()
            .filter(|t| cubes.contains(&t.cube))
            .map(Tile::value)
            .sum()
    }

    /// Convert to pixel coordinates
    pub fn to_pixel(&self, hex_size: f64) -> (f64, f64) {
        let (x, y) = self.cube.to_pixel(hex_size);
        let angle = -std::f64::consts::FRAC_PI_2 + self.index as f64 * std::f64::consts::FRAC_PI_3;
        (x + hex_size * angle.cos(), y + hex_size * angle.sin())
    }
}

/// Distinct corners of a tile set, in ascending order.
pub fn list_vertices(tiles: &[Tile]) -> Vec<Vertex> {
    tiles
        .iter()
        .flat_map(|t| t.cube.vertices())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
