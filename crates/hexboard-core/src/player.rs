//! Player colors and the order in which initial settlements are handed out.

use serde::{Deserialize, Serialize};

/// Player color, serialized as its lowercase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
}

impl Color {
    /// All colors in seating order
    pub const ALL: [Color; 4] = [Color::Red, Color::Blue, Color::Green, Color::Yellow];
}

/// Snake draft: every player places once in seating order, then once more in reverse.
pub const SETUP_ORDER: [Color; 8] = [
    Color::Red,
    Color::Blue,
    Color::Green,
    Color::Yellow,
    Color::Yellow,
    Color::Green,
    Color::Blue,
    Color::Red,
];
