//! Common types: identifiers and rule errors.

use alloc::string::String;
use core::fmt;

/// Index of a cell on the grid, `row * BOARD_SIZE + col`.
pub type CellId = usize;

/// Opaque per-connection player identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerId(pub u64);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player-{}", self.0)
    }
}

/// Identifier of a room (one match).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct RoomId(pub String);

impl RoomId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RoomId {
    fn from(s: &str) -> Self {
        RoomId(String::from(s))
    }
}

/// Identity of one physical ship: its class size and the number of ships of
/// that class still unplaced when it was started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipId {
    pub size: u8,
    pub ordinal: u8,
}

impl ShipId {
    pub const fn new(size: u8, ordinal: u8) -> Self {
        Self { size, ordinal }
    }
}

impl fmt::Display for ShipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-decker #{}", self.size, self.ordinal)
    }
}

/// Rejections produced by the game rules. None of them mutate state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// No room with the requested id.
    RoomNotFound,
    /// The room already holds two players.
    RoomFull,
    /// The player is already part of the room.
    AlreadyJoined,
    /// The player is not part of the room.
    NotJoined,
    /// The action is not allowed in the current phase.
    WrongPhase,
    /// Strike attempted out of turn.
    NotYourTurn,
    /// The player's fleet is already fully placed.
    AlreadyReady,
    /// Cell id outside the grid.
    InvalidCell,
    /// The cell already holds a ship.
    CellOccupied,
    /// The cell was already struck.
    CellAlreadyHit,
    /// The cell can neither start nor extend the current ship.
    PlacementRejected,
}

impl GameError {
    /// Whether the error is reported back to the client instead of dropped.
    pub fn is_reported(&self) -> bool {
        matches!(self, GameError::RoomNotFound | GameError::RoomFull)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::RoomNotFound => write!(f, "Room not found"),
            GameError::RoomFull => write!(f, "Room is full"),
            GameError::AlreadyJoined => write!(f, "Player already joined the room"),
            GameError::NotJoined => write!(f, "Player is not in the room"),
            GameError::WrongPhase => write!(f, "Action not allowed in the current phase"),
            GameError::NotYourTurn => write!(f, "Not the player's turn"),
            GameError::AlreadyReady => write!(f, "Fleet is already placed"),
            GameError::InvalidCell => write!(f, "Cell is out of range"),
            GameError::CellOccupied => write!(f, "Cell already holds a ship"),
            GameError::CellAlreadyHit => write!(f, "Cell was already struck"),
            GameError::PlacementRejected => write!(f, "Ship cannot be placed on this cell"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
