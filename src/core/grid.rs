//! Square grid of cells and row geometry queries.

use alloc::vec::Vec;

use super::common::{CellId, ShipId};
use super::config::{BOARD_SIZE, CELL_COUNT};

/// One square of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub id: CellId,
    pub is_hit: bool,
    pub ship: Option<ShipId>,
}

impl Cell {
    pub const fn new(id: CellId) -> Self {
        Self {
            id,
            is_hit: false,
            ship: None,
        }
    }

    /// A ship segment that has not been struck yet.
    pub fn is_afloat(&self) -> bool {
        self.ship.is_some() && !self.is_hit
    }
}

/// `BOARD_SIZE × BOARD_SIZE` cells in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    cells: Vec<Cell>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// All cells empty and unhit.
    pub fn new() -> Self {
        Self {
            cells: (0..CELL_COUNT).map(Cell::new).collect(),
        }
    }

    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        self.cells.get(id)
    }

    pub fn cell_mut(&mut self, id: CellId) -> Option<&mut Cell> {
        self.cells.get_mut(id)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Ship occupying `id`, `None` for water or out-of-range ids.
    pub fn ship_at(&self, id: CellId) -> Option<ShipId> {
        self.cell(id).and_then(|c| c.ship)
    }

    pub fn is_hit(&self, id: CellId) -> bool {
        self.cell(id).is_some_and(|c| c.is_hit)
    }

    /// Every cell belonging to `ship`.
    pub fn ship_cells(&self, ship: ShipId) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter().filter(move |c| c.ship == Some(ship))
    }

    /// `true` while any ship segment remains unhit.
    pub fn has_afloat(&self) -> bool {
        self.cells.iter().any(Cell::is_afloat)
    }

    /// Number of cells holding a ship.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.ship.is_some()).count()
    }
}

/// Row of `id`.
pub const fn row_of(id: CellId) -> usize {
    id / BOARD_SIZE
}

/// Column of `id`.
pub const fn col_of(id: CellId) -> usize {
    id % BOARD_SIZE
}

/// First cell of the row containing `id`.
pub const fn row_start(id: CellId) -> CellId {
    row_of(id) * BOARD_SIZE
}

/// Last cell of the row containing `id`.
pub const fn row_end(id: CellId) -> CellId {
    row_start(id) + BOARD_SIZE - 1
}

pub const fn is_row_start(id: CellId) -> bool {
    col_of(id) == 0
}

pub const fn is_row_end(id: CellId) -> bool {
    col_of(id) == BOARD_SIZE - 1
}

/// Neither the first nor the last cell of its row.
pub const fn is_interior(id: CellId) -> bool {
    !is_row_start(id) && !is_row_end(id)
}

pub const fn in_bounds(id: CellId) -> bool {
    id < CELL_COUNT
}
