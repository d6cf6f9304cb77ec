//! Ships built from a start/end extent, tracking damage per deck.

use alloc::vec::Vec;
use core::fmt;

use crate::common::{Coord, Placement};
use crate::deck::Deck;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A ship placed on the board.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    start: Coord,
    end: Coord,
    decks: Vec<Deck>,
    sunk: bool,
}

impl Ship {
    /// Build a ship covering every cell from `start` to `end` inclusive.
    ///
    /// The ends may be given in either order. Decks are generated row-major
    /// over the bounding box, so a diagonal extent yields a rectangle; the
    /// board rejects such extents before calling this.
    pub fn new(start: Coord, end: Coord) -> Self {
        let extent = Placement::new(start, end).normalized();
        let decks = extent.cells().map(|(r, c)| Deck::new(r, c)).collect();
        Ship {
            start: extent.start,
            end: extent.end,
            decks,
            sunk: false,
        }
    }

    fn width(&self) -> usize {
        self.end.1 - self.start.1 + 1
    }

    fn index_of(&self, row: usize, col: usize) -> Option<usize> {
        if !self.contains(row, col) {
            return None;
        }
        Some((row - self.start.0) * self.width() + (col - self.start.1))
    }

    /// Returns `true` if (`row`, `col`) is one of this ship's decks.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        (self.start.0..=self.end.0).contains(&row) && (self.start.1..=self.end.1).contains(&col)
    }

    /// The deck at (`row`, `col`), if this ship has one there.
    pub fn get_deck(&self, row: usize, col: usize) -> Option<&Deck> {
        self.index_of(row, col).map(|i| &self.decks[i])
    }

    /// Destroy the deck at (`row`, `col`) and re-check whether the ship sank.
    /// Returns `false` if the ship has no deck there.
    pub fn fire(&mut self, row: usize, col: usize) -> bool {
        let Some(i) = self.index_of(row, col) else {
            return false;
        };
        self.decks[i].destroy();
        self.sunk = self.decks.iter().all(|d| !d.is_alive());
        true
    }

    pub fn is_sunk(&self) -> bool {
        self.sunk
    }

    /// Number of decks.
    pub fn len(&self) -> usize {
        self.decks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decks.is_empty()
    }

    /// Number of destroyed decks.
    pub fn hits(&self) -> usize {
        self.decks.iter().filter(|d| !d.is_alive()).count()
    }

    pub fn decks(&self) -> &[Deck] {
        &self.decks
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn end(&self) -> Coord {
        self.end
    }

    /// `None` for a single-deck ship.
    pub fn orientation(&self) -> Option<Orientation> {
        if self.start == self.end {
            None
        } else if self.start.0 == self.end.0 {
            Some(Orientation::Horizontal)
        } else {
            Some(Orientation::Vertical)
        }
    }
}

impl From<Placement> for Ship {
    fn from(p: Placement) -> Self {
        Ship::new(p.start, p.end)
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ start: ({}, {}), end: ({}, {}), hits: {}/{}, sunk: {} }}",
            self.start.0,
            self.start.1,
            self.end.0,
            self.end.1,
            self.hits(),
            self.len(),
            self.sunk,
        )
    }
}
