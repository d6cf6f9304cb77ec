//! Common types for the board: coordinates, placements, shot outcomes and errors.

use core::fmt;

use crate::bitboard::BitBoardError;

/// A `(row, col)` position on the board.
pub type Coord = (usize, usize);

/// The raw extent of a ship: start and end cells, both inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub start: Coord,
    pub end: Coord,
}

impl Placement {
    pub const fn new(start: Coord, end: Coord) -> Self {
        Self { start, end }
    }

    /// A one-deck ship.
    pub const fn cell(at: Coord) -> Self {
        Self { start: at, end: at }
    }

    /// The same extent with `start` at or before `end` on both axes.
    pub fn normalized(&self) -> Self {
        let (r0, c0) = self.start;
        let (r1, c1) = self.end;
        Self {
            start: (r0.min(r1), c0.min(c1)),
            end: (r0.max(r1), c0.max(c1)),
        }
    }

    /// Number of decks, assuming a straight line.
    pub fn length(&self) -> usize {
        self.start.0.abs_diff(self.end.0) + self.start.1.abs_diff(self.end.1) + 1
    }

    /// Both ends lie on the same row or the same column.
    pub fn is_straight(&self) -> bool {
        self.start.0 == self.end.0 || self.start.1 == self.end.1
    }

    /// Iterator over every cell in the bounding box, row-major.
    pub fn cells(&self) -> impl Iterator<Item = Coord> {
        let Placement { start, end } = self.normalized();
        (start.0..=end.0).flat_map(move |r| (start.1..=end.1).map(move |c| (r, c)))
    }
}

impl From<(Coord, Coord)> for Placement {
    fn from((start, end): (Coord, Coord)) -> Self {
        Self::new(start, end)
    }
}

/// Outcome of a shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum FireResult {
    /// The shot landed on a ship that is still afloat.
    Hit,
    /// The shot landed on water.
    Miss,
    /// The shot landed on a ship that is now sunk.
    Sunk,
}

impl FireResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            FireResult::Hit => "Hit!",
            FireResult::Miss => "Miss!",
            FireResult::Sunk => "Sunk!",
        }
    }
}

impl fmt::Display for FireResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error.
    BitBoardError(BitBoardError),
    /// The fleet does not have exactly ten ships.
    WrongShipCount { found: usize },
    /// A placement leaves the board or is not a straight line.
    InvalidPlacement { index: usize },
    /// Two placements touch, including diagonally.
    ShipsAdjacent { first: usize, second: usize },
    /// Ship lengths are not four 1s, three 2s, two 3s and one 4.
    WrongSizeConfiguration,
    /// Coordinate lies outside the grid.
    OutOfBounds { row: usize, col: usize },
    /// The grid referenced a ship with no deck at that cell.
    UnknownShipHit,
    /// Random fleet generation gave up.
    UnableToPlaceFleet,
    /// A ship length of zero or longer than the board.
    InvalidShipLength { length: usize },
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        match err {
            BitBoardError::IndexOutOfBounds { row, col } => BoardError::OutOfBounds { row, col },
            other => BoardError::BitBoardError(other),
        }
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::WrongShipCount { found } => {
                write!(f, "There must be 10 ships, got {}", found)
            }
            BoardError::InvalidPlacement { index } => write!(
                f,
                "Ship {} must be a straight line inside the board",
                index
            ),
            BoardError::ShipsAdjacent { first, second } => {
                write!(f, "Ships {} and {} must not be adjacent", first, second)
            }
            BoardError::WrongSizeConfiguration => write!(f, "Wrong ship size configuration"),
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Coordinate ({}, {}) is out of bounds", row, col)
            }
            BoardError::UnknownShipHit => write!(f, "Cell points at a ship without a deck there"),
            BoardError::UnableToPlaceFleet => write!(f, "Unable to place fleet"),
            BoardError::InvalidShipLength { length } => {
                write!(f, "Ship length {} does not fit on the board", length)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
