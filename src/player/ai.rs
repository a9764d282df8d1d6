use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::core::{neighbors, Adjacency, CellId, Grid, BOARD_SIZE, CELL_COUNT, FLEET};

use super::Player;

/// Attempts at fitting one ship before the whole layout is restarted.
const SEGMENT_ATTEMPTS: usize = 200;

/// Random layout, then hunt/target striking.
///
/// The opponent view reveals the ship id of every hit cell, so the player
/// knows when a wounded ship still has decks left and keeps striking around
/// it until it sinks.
#[derive(Debug, Default, Clone, Copy)]
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for AiPlayer {
    fn plan_fleet(&mut self, rng: &mut SmallRng) -> Vec<CellId> {
        plan_layout(rng).into_iter().flatten().collect()
    }

    fn select_target(&mut self, rng: &mut SmallRng, view: &Grid) -> Option<CellId> {
        let wounded: Vec<CellId> = view
            .cells()
            .iter()
            .filter(|c| match c.ship {
                Some(ship) => view.ship_cells(ship).count() < ship.size as usize,
                None => false,
            })
            .flat_map(|c| neighbors(c.id, Adjacency::Orthogonal))
            .filter(|&n| !view.is_hit(n))
            .collect();
        let pool = if wounded.is_empty() {
            view.cells()
                .iter()
                .filter(|c| !c.is_hit)
                .map(|c| c.id)
                .collect()
        } else {
            wounded
        };
        if pool.is_empty() {
            return None;
        }
        Some(pool[rng.random_range(0..pool.len())])
    }
}

/// A legal fleet layout: no two ships touch, each ship is a straight line.
/// Ships are ordered by size, smallest first, matching placement order.
pub fn plan_layout<R: Rng>(rng: &mut R) -> Vec<Vec<CellId>> {
    'attempt: loop {
        let mut occupied = [false; CELL_COUNT];
        let mut ships: Vec<Vec<CellId>> = Vec::new();
        for class in FLEET.iter().rev() {
            for _ in 0..class.remaining() {
                let Some(segment) = random_segment(rng, class.size() as usize, &occupied) else {
                    continue 'attempt;
                };
                for &id in &segment {
                    occupied[id] = true;
                }
                ships.push(segment);
            }
        }
        ships.sort_by_key(Vec::len);
        return ships;
    }
}

fn random_segment<R: Rng>(rng: &mut R, size: usize, occupied: &[bool; CELL_COUNT]) -> Option<Vec<CellId>> {
    for _ in 0..SEGMENT_ATTEMPTS {
        let horizontal = rng.random_bool(0.5);
        let (rows, cols) = if horizontal {
            (BOARD_SIZE, BOARD_SIZE - size + 1)
        } else {
            (BOARD_SIZE - size + 1, BOARD_SIZE)
        };
        let row = rng.random_range(0..rows);
        let col = rng.random_range(0..cols);
        let segment: Vec<CellId> = (0..size)
            .map(|k| {
                if horizontal {
                    row * BOARD_SIZE + col + k
                } else {
                    (row + k) * BOARD_SIZE + col
                }
            })
            .collect();
        let clear = segment.iter().all(|&id| {
            !occupied[id] && neighbors(id, Adjacency::WithDiagonals).all(|n| !occupied[n])
        });
        if clear {
            return Some(segment);
        }
    }
    None
}
