use serde::{Deserialize, Serialize};

use crate::core::{CellId, Grid, PlayerId, RoomId};

/// Version exchanged in the `Hello`/`Welcome` handshake.
pub const PROTOCOL_VERSION: u8 = 1;

/// Error codes reported to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    RoomNotFound,
    RoomFull,
    VersionMismatch,
}

/// Messages exchanged between clients and the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Message {
    // client -> server
    /// Opens the session; must be the first message on a connection.
    Hello { version: u8 },
    CreateRoom,
    JoinRoom { room_id: RoomId },
    PlaceShip { cell: CellId },
    Strike { cell: CellId },
    Rematch,

    // server -> client
    /// Handshake accepted; carries the identifier assigned to the connection.
    Welcome { version: u8, player: PlayerId },
    RoomCreated { room_id: RoomId },
    JoinedRoom { room_id: RoomId, grid: Grid },
    Error { code: ErrorCode },
    /// The recipient's own grid changed.
    FieldUpdated { grid: Grid, ready: bool },
    /// The recipient's view of the opponent's grid changed.
    OpponentFieldUpdated { grid: Grid },
    PlacementComplete { first_turn: PlayerId },
    TurnChanged { your_turn: bool },
    MatchOver { you_won: bool },
    /// The match was restarted; `grid` is the recipient's fresh grid.
    FieldsReset { grid: Grid },
}

impl Message {
    /// Short name used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Message::Hello { .. } => "hello",
            Message::CreateRoom => "create-room",
            Message::JoinRoom { .. } => "join-room",
            Message::PlaceShip { .. } => "place-ship",
            Message::Strike { .. } => "strike",
            Message::Rematch => "rematch",
            Message::Welcome { .. } => "welcome",
            Message::RoomCreated { .. } => "room-created",
            Message::JoinedRoom { .. } => "joined-room",
            Message::Error { .. } => "error",
            Message::FieldUpdated { .. } => "field-updated",
            Message::OpponentFieldUpdated { .. } => "opponent-field-updated",
            Message::PlacementComplete { .. } => "placement-complete",
            Message::TurnChanged { .. } => "turn-changed",
            Message::MatchOver { .. } => "match-over",
            Message::FieldsReset { .. } => "fields-reset",
        }
    }
}

/// An outbound message addressed to one player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub to: PlayerId,
    pub msg: Message,
}

impl Envelope {
    pub fn new(to: PlayerId, msg: Message) -> Self {
        Self { to, msg }
    }
}
