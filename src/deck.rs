/// One grid cell occupied by a ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck {
    row: usize,
    col: usize,
    alive: bool,
}

impl Deck {
    /// A fresh, undamaged deck at (`row`, `col`).
    pub const fn new(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            alive: true,
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub(crate) fn destroy(&mut self) {
        self.alive = false;
    }
}
