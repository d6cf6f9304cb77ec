//! The 10×10 board: validated fleet, grid lookup, shots and rendering.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use rand::Rng;

use crate::common::{BoardError, FireResult, Placement};
use crate::config::{BoardConfig, BB, BOARD_SIZE, HIT, SHIP, SUNK, WATER};
use crate::fleet::random_fleet;
use crate::ship::Ship;
use crate::validation::validate_fleet;

const N: usize = BOARD_SIZE as usize;

/// What a single coordinate shows when rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Water,
    Ship,
    Hit,
    Sunk,
}

impl Cell {
    pub fn symbol(&self) -> &'static str {
        match self {
            Cell::Water => WATER,
            Cell::Ship => SHIP,
            Cell::Hit => HIT,
            Cell::Sunk => SUNK,
        }
    }
}

/// Board state: ships, the grid pointing into them, and shots fired.
pub struct Board {
    ships: Vec<Ship>,
    grid: [[Option<usize>; N]; N],
    fired: BB,
    shots: usize,
    config: BoardConfig,
}

impl Board {
    /// Validate `placements` with the default rules and build the board.
    pub fn new(placements: &[Placement]) -> Result<Self, BoardError> {
        Self::with_config(placements, BoardConfig::default())
    }

    /// Validate `placements` under `config` and build the board. No board is
    /// produced if any rule fails.
    pub fn with_config(placements: &[Placement], config: BoardConfig) -> Result<Self, BoardError> {
        if let Err(e) = validate_fleet(placements, config.adjacency) {
            log::warn!("rejected fleet: {}", e);
            return Err(e);
        }

        let mut grid = [[None; N]; N];
        let mut ships = Vec::with_capacity(placements.len());
        for (i, p) in placements.iter().enumerate() {
            let ship = Ship::from(*p);
            for deck in ship.decks() {
                grid[deck.row()][deck.col()] = Some(i);
            }
            ships.push(ship);
        }
        log::info!("board ready with {} ships", ships.len());

        Ok(Board {
            ships,
            grid,
            fired: BB::new(),
            shots: 0,
            config,
        })
    }

    /// Build a board from a randomly generated fleet.
    pub fn random<R: Rng>(rng: &mut R, config: BoardConfig) -> Result<Self, BoardError> {
        let fleet = random_fleet(rng)?;
        Self::with_config(&fleet, config)
    }

    fn check_bounds(row: usize, col: usize) -> Result<(), BoardError> {
        if row >= N || col >= N {
            return Err(BoardError::OutOfBounds { row, col });
        }
        Ok(())
    }

    /// Fire at (`row`, `col`). Re-firing at a cell is allowed and changes
    /// nothing beyond the shot counter.
    pub fn fire(&mut self, row: usize, col: usize) -> Result<FireResult, BoardError> {
        Self::check_bounds(row, col)?;

        let result = match self.grid[row][col] {
            None => FireResult::Miss,
            Some(i) => {
                let ship = &mut self.ships[i];
                let was_sunk = ship.is_sunk();
                if !ship.fire(row, col) {
                    return Err(BoardError::UnknownShipHit);
                }
                if ship.is_sunk() {
                    if !was_sunk {
                        log::info!("ship {} sunk at ({}, {})", i, row, col);
                    }
                    FireResult::Sunk
                } else {
                    FireResult::Hit
                }
            }
        };
        self.fired.set(row, col)?;
        self.shots += 1;
        log::debug!("shot #{} at ({}, {}): {}", self.shots, row, col, result);

        if self.config.echo {
            self.print();
        }
        Ok(result)
    }

    /// Render state of (`row`, `col`).
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        Self::check_bounds(row, col)?;
        let Some(i) = self.grid[row][col] else {
            return Ok(Cell::Water);
        };
        let ship = &self.ships[i];
        let deck = ship.get_deck(row, col).ok_or(BoardError::UnknownShipHit)?;
        Ok(if deck.is_alive() {
            Cell::Ship
        } else if ship.is_sunk() {
            Cell::Sunk
        } else {
            Cell::Hit
        })
    }

    /// The ship occupying (`row`, `col`), if any.
    pub fn ship_at(&self, row: usize, col: usize) -> Result<Option<&Ship>, BoardError> {
        Self::check_bounds(row, col)?;
        Ok(self.grid[row][col].map(|i| &self.ships[i]))
    }

    /// Ships in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Returns `true` when all ships are sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }

    pub fn ships_remaining(&self) -> usize {
        self.ships.iter().filter(|s| !s.is_sunk()).count()
    }

    /// Total shots taken, repeats included.
    pub fn shots_fired(&self) -> usize {
        self.shots
    }

    pub fn was_fired(&self, row: usize, col: usize) -> Result<bool, BoardError> {
        Ok(self.fired.get(row, col)?)
    }

    /// Mask of every deck on the board.
    pub fn occupancy(&self) -> BB {
        let mut mask = BB::new();
        for (r, row) in self.grid.iter().enumerate() {
            for (c, slot) in row.iter().enumerate() {
                if slot.is_some() {
                    let _ = mask.set(r, c);
                }
            }
        }
        mask
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    /// Text grid, one line per row, each cell padded with a space either side.
    pub fn render(&self) -> String {
        format!("{}\n", self)
    }

    fn cell_unchecked(&self, row: usize, col: usize) -> Cell {
        self.cell(row, col).unwrap_or(Cell::Water)
    }

    /// Write the rendered board to stdout.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        std::print!("{}", self.render());
    }

    #[cfg(not(feature = "std"))]
    pub fn print(&self) {}
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..N {
            for c in 0..N {
                write!(f, " {} ", self.cell_unchecked(r, c).symbol())?;
            }
            if r + 1 < N {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Board {{\n  shots: {},\n  config: {:?},\n  ships: {:?},\n  fired: {:?}\n}}",
            self.shots, self.config, self.ships, self.fired
        )
    }
}
