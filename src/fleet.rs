//! Random fleet generation.

use alloc::vec::Vec;
use rand::Rng;

use crate::common::{BoardError, Placement};
use crate::config::{BB, BOARD_SIZE, FLEET};
use crate::ship::Orientation;

const ATTEMPTS_PER_SHIP: usize = 100;
const MAX_ROUNDS: usize = 50;

/// Pick a random origin and orientation for a ship of `length` that fits on
/// the board. Lengths outside `1..=BOARD_SIZE` are rejected.
pub fn random_placement<R: Rng>(rng: &mut R, length: usize) -> Result<Placement, BoardError> {
    let n = BOARD_SIZE as usize;
    if length == 0 || length > n {
        return Err(BoardError::InvalidShipLength { length });
    }
    let orient = if rng.random() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    let (max_r, max_c) = match orient {
        Orientation::Horizontal => (n - 1, n - length),
        Orientation::Vertical => (n - length, n - 1),
    };
    let r = rng.random_range(0..=max_r);
    let c = rng.random_range(0..=max_c);
    let end = match orient {
        Orientation::Horizontal => (r, c + length - 1),
        Orientation::Vertical => (r + length - 1, c),
    };
    Ok(Placement::new((r, c), end))
}

fn try_fleet<R: Rng>(rng: &mut R) -> Result<Option<Vec<Placement>>, BoardError> {
    let mut taken = BB::new();
    let mut fleet = Vec::with_capacity(FLEET.len());
    for &length in FLEET.iter().rev() {
        let mut placed = false;
        for _ in 0..ATTEMPTS_PER_SHIP {
            let candidate = random_placement(rng, length)?;
            let mask = BB::from_iter(candidate.cells())?;
            if !mask.neighbourhood().intersects(&taken) {
                taken |= mask;
                fleet.push(candidate);
                placed = true;
                break;
            }
        }
        if !placed {
            return Ok(None);
        }
    }
    Ok(Some(fleet))
}

/// Generate a full standard fleet with no two ships touching, longest ship
/// first.
pub fn random_fleet<R: Rng>(rng: &mut R) -> Result<Vec<Placement>, BoardError> {
    for round in 0..MAX_ROUNDS {
        if let Some(fleet) = try_fleet(rng)? {
            log::debug!("random fleet placed after {} restart(s)", round);
            return Ok(fleet);
        }
    }
    Err(BoardError::UnableToPlaceFleet)
}
