//! Commonly used types and utilities for ease of import.

pub use crate::{
    AiPlayer, Cell, CellId, Game, GameError, GameStatus, Grid, Player, PlayerId, RoomId, Rooms, ShipId,
};

#[cfg(feature = "std")]
pub use crate::{Client, Engine, Hub, Message, PROTOCOL_VERSION};

#[cfg(feature = "std")]
pub use crate::transport::{local::LocalTransport, tcp::TcpTransport, Transport};
