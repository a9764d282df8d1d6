//! Automated players driving a client session.

use alloc::vec::Vec;
use rand::rngs::SmallRng;

use crate::core::{CellId, Grid};

/// Decision maker for one side of a match.
pub trait Player: Send {
    /// Cells to submit during placement, in the order the fleet tracker
    /// accepts them: classes from smallest to largest, each ship deck by
    /// deck along its line.
    fn plan_fleet(&mut self, rng: &mut SmallRng) -> Vec<CellId>;

    /// Next cell to strike given what is known of the opponent's grid.
    /// `None` once every cell has been struck.
    fn select_target(&mut self, rng: &mut SmallRng, view: &Grid) -> Option<CellId>;
}

pub mod ai;
pub use ai::AiPlayer;
