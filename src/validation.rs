//! Fleet placement rules, checked in order: count, placement shape,
//! adjacency, size distribution. The first violated rule wins.

use alloc::vec::Vec;

use crate::common::{BoardError, Coord, Placement};
use crate::config::{AdjacencyRule, BB, BOARD_SIZE, FLEET, NUM_SHIPS};

/// Run every rule against `placements`.
pub fn validate_fleet(placements: &[Placement], rule: AdjacencyRule) -> Result<(), BoardError> {
    check_count(placements)?;
    check_placements(placements)?;
    match rule {
        AdjacencyRule::Endpoints => check_endpoint_adjacency(placements)?,
        AdjacencyRule::Cells => check_cell_adjacency(placements)?,
    }
    check_sizes(placements)
}

pub fn check_count(placements: &[Placement]) -> Result<(), BoardError> {
    if placements.len() != NUM_SHIPS {
        return Err(BoardError::WrongShipCount {
            found: placements.len(),
        });
    }
    Ok(())
}

/// Every placement must stay on the board and run along one row or column.
pub fn check_placements(placements: &[Placement]) -> Result<(), BoardError> {
    let in_bounds = |(r, c): Coord| r < BOARD_SIZE as usize && c < BOARD_SIZE as usize;
    for (index, p) in placements.iter().enumerate() {
        if !in_bounds(p.start) || !in_bounds(p.end) || !p.is_straight() {
            return Err(BoardError::InvalidPlacement { index });
        }
    }
    Ok(())
}

fn touches(a: Coord, b: Coord) -> bool {
    a != b && a.0.abs_diff(b.0) <= 1 && a.1.abs_diff(b.1) <= 1
}

/// Compare only the ends of each placement: an end of one ship may not sit in
/// the Moore neighbourhood of an end of another. Coincident ends pass.
/// "Another" means a different index, so an identical duplicate placement is
/// still compared against its twin.
pub fn check_endpoint_adjacency(placements: &[Placement]) -> Result<(), BoardError> {
    for (i, a) in placements.iter().enumerate() {
        for (j, b) in placements.iter().enumerate() {
            if i == j {
                continue;
            }
            for end in [a.start, a.end] {
                if [b.start, b.end].into_iter().any(|other| touches(end, other)) {
                    return Err(BoardError::ShipsAdjacent {
                        first: i.min(j),
                        second: i.max(j),
                    });
                }
            }
        }
    }
    Ok(())
}

/// No cell of one ship may touch or overlap any cell of another.
pub fn check_cell_adjacency(placements: &[Placement]) -> Result<(), BoardError> {
    let masks = placements
        .iter()
        .map(|p| BB::from_iter(p.cells()))
        .collect::<Result<Vec<_>, _>>()?;
    for (i, mask) in masks.iter().enumerate() {
        let halo = mask.neighbourhood();
        if let Some(j) = (i + 1..masks.len()).find(|&j| halo.intersects(&masks[j])) {
            return Err(BoardError::ShipsAdjacent {
                first: i,
                second: j,
            });
        }
    }
    Ok(())
}

/// Sorted ship lengths must match the standard fleet.
pub fn check_sizes(placements: &[Placement]) -> Result<(), BoardError> {
    let mut sizes: Vec<usize> = placements.iter().map(Placement::length).collect();
    sizes.sort_unstable();
    if sizes != FLEET {
        return Err(BoardError::WrongSizeConfiguration);
    }
    Ok(())
}
