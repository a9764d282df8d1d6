//! Strike resolution against a defender's grid.

use alloc::vec::Vec;

use super::adjacency::{neighbors, Adjacency};
use super::common::{CellId, GameError, ShipId};
use super::grid::Grid;

/// What a strike did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrikeOutcome {
    /// The cell held a ship.
    pub hit: bool,
    /// The ship that went down with this strike.
    pub sunk: Option<ShipId>,
    /// No ship segment remains afloat on the defender's grid.
    pub fleet_destroyed: bool,
}

/// Strike `cell` on `defender`, mirroring everything learned onto
/// `attacker_view`.
///
/// Sinking a ship marks every empty cell around it as hit on both grids,
/// since no other ship can lie there.
pub fn strike(cell: CellId, defender: &mut Grid, attacker_view: &mut Grid) -> Result<StrikeOutcome, GameError> {
    let target = defender.cell_mut(cell).ok_or(GameError::InvalidCell)?;
    if target.is_hit {
        return Err(GameError::CellAlreadyHit);
    }
    target.is_hit = true;
    let ship = target.ship;

    let view = attacker_view.cell_mut(cell).ok_or(GameError::InvalidCell)?;
    view.is_hit = true;
    view.ship = ship;

    let Some(ship) = ship else {
        return Ok(StrikeOutcome {
            hit: false,
            sunk: None,
            fleet_destroyed: false,
        });
    };

    if !defender.ship_cells(ship).all(|c| c.is_hit) {
        return Ok(StrikeOutcome {
            hit: true,
            sunk: None,
            fleet_destroyed: false,
        });
    }

    reveal_surroundings(ship, defender, attacker_view);
    Ok(StrikeOutcome {
        hit: true,
        sunk: Some(ship),
        fleet_destroyed: !defender.has_afloat(),
    })
}

/// Mark the empty water around a sunk `ship` as struck on both grids.
fn reveal_surroundings(ship: ShipId, defender: &mut Grid, attacker_view: &mut Grid) {
    let hull: Vec<CellId> = defender.ship_cells(ship).map(|c| c.id).collect();
    for id in hull {
        for n in neighbors(id, Adjacency::WithDiagonals) {
            let Some(water) = defender.cell_mut(n) else {
                continue;
            };
            if water.ship.is_some() || water.is_hit {
                continue;
            }
            water.is_hit = true;
            if let Some(seen) = attacker_view.cell_mut(n) {
                seen.is_hit = true;
            }
        }
    }
}
