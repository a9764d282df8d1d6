//! Rules deciding whether a cell may start or extend a ship.

use alloc::vec::Vec;

use super::adjacency::{neighbors, Adjacency};
use super::common::{CellId, ShipId};
use super::grid::{col_of, in_bounds, row_of, Grid};

/// Whether `candidate` may hold the next deck of `ship`.
///
/// The caller guarantees `candidate` is on the grid and empty. A new ship
/// (`decks_placed == 0`) must not touch any ship, even diagonally. A deck
/// extending `ship` must sit orthogonally next to one of its decks, must not
/// touch any other ship, and must stay on the line the ship already runs
/// along once it has two decks.
pub fn can_place(candidate: CellId, ship: ShipId, decks_placed: u8, grid: &Grid) -> bool {
    if !in_bounds(candidate) {
        return false;
    }
    if decks_placed == 0 {
        return neighbors(candidate, Adjacency::WithDiagonals).all(|n| grid.ship_at(n).is_none());
    }

    let touches_ship = neighbors(candidate, Adjacency::Orthogonal).any(|n| grid.ship_at(n) == Some(ship));
    let touches_other = neighbors(candidate, Adjacency::WithDiagonals)
        .any(|n| matches!(grid.ship_at(n), Some(other) if other != ship));

    touches_ship && !touches_other && keeps_line(candidate, ship, grid)
}

/// `true` when adding `candidate` leaves the decks of `ship` in one row or
/// one column.
fn keeps_line(candidate: CellId, ship: ShipId, grid: &Grid) -> bool {
    let decks: Vec<CellId> = grid.ship_cells(ship).map(|c| c.id).collect();
    if decks.len() < 2 {
        return true;
    }
    let same_row = decks.iter().all(|&d| row_of(d) == row_of(candidate));
    let same_col = decks.iter().all(|&d| col_of(d) == col_of(candidate));
    same_row || same_col
}
