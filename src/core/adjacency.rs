//! Neighbour sets that never wrap across row boundaries.

use super::common::CellId;
use super::config::{BOARD_SIZE, CELL_COUNT};
use super::grid::{is_row_end, is_row_start};

/// Which neighbours to include.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjacency {
    /// Left, right, up and down.
    Orthogonal,
    /// Orthogonal plus the four diagonals.
    WithDiagonals,
}

static ORTHOGONAL: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
static DIAGONAL: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Neighbour ids of `id` that exist on the grid.
pub fn neighbors(id: CellId, mode: Adjacency) -> impl Iterator<Item = CellId> {
    let diagonals: &'static [(isize, isize)] = match mode {
        Adjacency::Orthogonal => &[],
        Adjacency::WithDiagonals => &DIAGONAL,
    };
    let at_start = is_row_start(id);
    let at_end = is_row_end(id);
    ORTHOGONAL
        .iter()
        .chain(diagonals.iter())
        .filter(move |&&(_, dc)| !(dc < 0 && at_start) && !(dc > 0 && at_end))
        .filter_map(move |&(dr, dc)| {
            let target = id as isize + dr * BOARD_SIZE as isize + dc;
            (id < CELL_COUNT && target >= 0 && (target as usize) < CELL_COUNT)
                .then_some(target as usize)
        })
}
