use crate::bitboard::BitBoard;

pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 10;

/// Required ship lengths, sorted ascending.
pub const FLEET: [usize; NUM_SHIPS] = [1, 1, 1, 1, 2, 2, 2, 3, 3, 4];

/// Total number of ship segments in a complete fleet.
pub const TOTAL_SHIP_CELLS: usize = 4 + 3 * 2 + 2 * 3 + 4;

/// Glyphs used when rendering the board.
pub const WATER: &str = "🌊";
pub const SHIP: &str = "🚢";
pub const HIT: &str = "🔥";
pub const SUNK: &str = "❌";

/// Occupancy mask sized for the game board.
pub type BB = BitBoard<u128, { BOARD_SIZE as usize }>;

/// How strictly ships must be kept apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdjacencyRule {
    /// Only the two endpoints of each placement are compared against the
    /// endpoints of the others.
    Endpoints,
    /// Every cell of a ship is kept at least one cell away from every cell of
    /// every other ship. Overlapping ships are rejected too.
    #[default]
    Cells,
}

/// Runtime options for building and playing a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    pub adjacency: AdjacencyRule,
    /// Render the board to stdout after every shot.
    pub echo: bool,
}

impl BoardConfig {
    pub const fn new() -> Self {
        Self {
            adjacency: AdjacencyRule::Cells,
            echo: true,
        }
    }

    pub const fn with_adjacency(self, adjacency: AdjacencyRule) -> Self {
        Self { adjacency, ..self }
    }

    pub const fn with_echo(self, echo: bool) -> Self {
        Self { echo, ..self }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new()
    }
}
