#![cfg(feature = "std")]

use crate::core::{CellId, Grid, PlayerId, RoomId};
use crate::protocol::{Message, PROTOCOL_VERSION};
use crate::transport::Transport;

/// Typed client session over any [`Transport`].
pub struct Client<T: Transport> {
    transport: T,
    player: PlayerId,
}

impl<T: Transport> Client<T> {
    /// Perform the `Hello`/`Welcome` handshake.
    pub async fn connect(mut transport: T) -> anyhow::Result<Self> {
        transport
            .send(Message::Hello {
                version: PROTOCOL_VERSION,
            })
            .await?;
        match transport.recv().await? {
            Message::Welcome { version, player } if version == PROTOCOL_VERSION => {
                Ok(Self { transport, player })
            }
            Message::Welcome { version, .. } => Err(anyhow::anyhow!(
                "Protocol version mismatch: expected {}, got {}",
                PROTOCOL_VERSION,
                version
            )),
            Message::Error { code } => Err(anyhow::anyhow!("Handshake rejected: {:?}", code)),
            other => Err(anyhow::anyhow!("Expected Welcome, got {}", other.kind())),
        }
    }

    /// Identifier the server assigned to this connection.
    pub fn player(&self) -> PlayerId {
        self.player
    }

    pub async fn create_room(&mut self) -> anyhow::Result<RoomId> {
        self.transport.send(Message::CreateRoom).await?;
        match self.transport.recv().await? {
            Message::RoomCreated { room_id } => Ok(room_id),
            other => Err(anyhow::anyhow!("Expected RoomCreated, got {}", other.kind())),
        }
    }

    /// Join `room_id`, returning the assigned empty grid.
    pub async fn join_room(&mut self, room_id: &RoomId) -> anyhow::Result<Grid> {
        self.transport
            .send(Message::JoinRoom {
                room_id: room_id.clone(),
            })
            .await?;
        match self.transport.recv().await? {
            Message::JoinedRoom { grid, .. } => Ok(grid),
            Message::Error { code } => Err(anyhow::anyhow!("Join rejected: {:?}", code)),
            other => Err(anyhow::anyhow!("Expected JoinedRoom, got {}", other.kind())),
        }
    }

    pub async fn place(&mut self, cell: CellId) -> anyhow::Result<()> {
        self.transport.send(Message::PlaceShip { cell }).await
    }

    pub async fn strike(&mut self, cell: CellId) -> anyhow::Result<()> {
        self.transport.send(Message::Strike { cell }).await
    }

    pub async fn rematch(&mut self) -> anyhow::Result<()> {
        self.transport.send(Message::Rematch).await
    }

    pub async fn recv(&mut self) -> anyhow::Result<Message> {
        self.transport.recv().await
    }

    pub fn into_inner(self) -> T {
        self.transport
    }
}
