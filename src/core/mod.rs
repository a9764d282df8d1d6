//! Core game rules (no_std compatible)
//!
//! Grid geometry, placement validation, fleet tracking, strike resolution and
//! the room table. Nothing here performs I/O; `alloc` and `rand` are the only
//! requirements.

pub mod adjacency;
pub mod common;
pub mod config;
pub mod fleet;
pub mod game;
pub mod grid;
pub mod placement;
pub mod rooms;
pub mod strike;

pub use adjacency::{neighbors, Adjacency};
pub use common::{CellId, GameError, PlayerId, RoomId, ShipId};
pub use config::*;
pub use fleet::{DeckOutcome, Fleet, FleetStatus, ShipClass};
pub use game::{Game, GameStatus, PlacementReport, PlayerState, StrikeReport, MAX_PLAYERS};
pub use grid::{
    col_of, in_bounds, is_interior, is_row_end, is_row_start, row_end, row_of, row_start, Cell, Grid,
};
pub use placement::can_place;
pub use rooms::{LeaveOutcome, Rooms};
pub use strike::{strike, StrikeOutcome};
