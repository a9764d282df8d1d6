#![cfg(feature = "std")]

//! Event dispatcher: turns one inbound message from one connection into the
//! outbound messages it causes.

use std::collections::HashMap;

use log::{debug, info};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::core::{CellId, GameError, GameStatus, LeaveOutcome, PlayerId, RoomId, Rooms};
use crate::protocol::{Envelope, ErrorCode, Message, PROTOCOL_VERSION};

/// Per-connection context.
#[derive(Debug, Default)]
struct Session {
    greeted: bool,
    room: Option<RoomId>,
}

/// Owns the room table and the connection → room bindings.
///
/// Every call runs to completion and returns the messages to deliver, so a
/// single owner can drive it without locking.
pub struct Hub {
    rooms: Rooms,
    sessions: HashMap<PlayerId, Session>,
    rng: SmallRng,
}

impl Default for Hub {
    fn default() -> Self {
        Self::new()
    }
}

impl Hub {
    pub fn new() -> Self {
        let mut seed_rng = rand::rng();
        Self::with_rng(SmallRng::from_rng(&mut seed_rng))
    }

    /// Hub with a fixed seed for reproducible room ids and first turns.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }

    pub fn with_rng(rng: SmallRng) -> Self {
        Self {
            rooms: Rooms::new(),
            sessions: HashMap::new(),
            rng,
        }
    }

    pub fn rooms(&self) -> &Rooms {
        &self.rooms
    }

    /// Room the connection is bound to.
    pub fn room_of(&self, player: PlayerId) -> Option<&RoomId> {
        self.sessions.get(&player).and_then(|s| s.room.as_ref())
    }

    /// Register a new connection.
    pub fn connect(&mut self, player: PlayerId) {
        debug!("{} connected", player);
        self.sessions.entry(player).or_default();
    }

    /// Handle a lost connection as a leave.
    pub fn disconnect(&mut self, player: PlayerId) -> Vec<Envelope> {
        info!("{} disconnected", player);
        let unjoined = self.rooms.unjoined().count();
        if unjoined > 0 {
            debug!("{} room(s) left without players", unjoined);
        }
        let Some(room) = self.sessions.remove(&player).and_then(|s| s.room) else {
            return Vec::new();
        };
        match self.rooms.leave(&room, player) {
            LeaveOutcome::Closed => {
                info!("room {} removed", room);
                Vec::new()
            }
            LeaveOutcome::Reset { remaining } => {
                info!("room {} reset for {}", room, remaining);
                self.fresh_grids(&room, &[remaining])
            }
            LeaveOutcome::NotJoined => Vec::new(),
        }
    }

    /// Process one inbound message. Rejected actions produce no messages,
    /// except room errors, which are reported to the sender.
    pub fn handle(&mut self, from: PlayerId, msg: Message) -> Vec<Envelope> {
        let kind = msg.kind();
        match self.dispatch(from, msg) {
            Ok(out) => out,
            Err(e) if e.is_reported() => {
                info!("{} rejected for {}: {}", kind, from, e);
                let code = match e {
                    GameError::RoomFull => ErrorCode::RoomFull,
                    _ => ErrorCode::RoomNotFound,
                };
                vec![Envelope::new(from, Message::Error { code })]
            }
            Err(e) => {
                debug!("{} ignored for {}: {}", kind, from, e);
                Vec::new()
            }
        }
    }

    fn dispatch(&mut self, from: PlayerId, msg: Message) -> Result<Vec<Envelope>, GameError> {
        if let Message::Hello { version } = msg {
            return Ok(self.hello(from, version));
        }
        if !self.sessions.get(&from).is_some_and(|s| s.greeted) {
            debug!("{} sent {} before the handshake", from, msg.kind());
            return Ok(Vec::new());
        }
        match msg {
            Message::CreateRoom => Ok(self.create_room(from)),
            Message::JoinRoom { room_id } => self.join_room(from, room_id),
            Message::PlaceShip { cell } => self.place_ship(from, cell),
            Message::Strike { cell } => self.strike(from, cell),
            Message::Rematch => self.rematch(from),
            other => {
                debug!("{} sent server-side message {}", from, other.kind());
                Ok(Vec::new())
            }
        }
    }

    fn hello(&mut self, from: PlayerId, version: u8) -> Vec<Envelope> {
        if version != PROTOCOL_VERSION {
            info!(
                "{} speaks protocol {}, expected {}",
                from, version, PROTOCOL_VERSION
            );
            return vec![Envelope::new(
                from,
                Message::Error {
                    code: ErrorCode::VersionMismatch,
                },
            )];
        }
        self.sessions.entry(from).or_default().greeted = true;
        vec![Envelope::new(
            from,
            Message::Welcome {
                version: PROTOCOL_VERSION,
                player: from,
            },
        )]
    }

    fn create_room(&mut self, from: PlayerId) -> Vec<Envelope> {
        let room_id = self.rooms.create(&mut self.rng);
        info!("room {} created by {}", room_id, from);
        vec![Envelope::new(from, Message::RoomCreated { room_id })]
    }

    fn join_room(&mut self, from: PlayerId, room_id: RoomId) -> Result<Vec<Envelope>, GameError> {
        let game = self.rooms.get(&room_id).ok_or(GameError::RoomNotFound)?;
        if game.is_full() {
            return Err(GameError::RoomFull);
        }
        if self.room_of(from).is_some() {
            return Err(GameError::AlreadyJoined);
        }
        let grid = self.rooms.join(&room_id, from)?.own_grid().clone();
        if let Some(session) = self.sessions.get_mut(&from) {
            session.room = Some(room_id.clone());
        }
        info!("{} joined room {}", from, room_id);
        Ok(vec![Envelope::new(from, Message::JoinedRoom { room_id, grid })])
    }

    fn place_ship(&mut self, from: PlayerId, cell: CellId) -> Result<Vec<Envelope>, GameError> {
        let room = self.room_of(from).cloned().ok_or(GameError::NotJoined)?;
        let game = self.rooms.get_mut(&room).ok_or(GameError::RoomNotFound)?;
        let report = game.place(from, cell, &mut self.rng)?;
        let grid = game
            .player(from)
            .map(|p| p.own_grid().clone())
            .ok_or(GameError::NotJoined)?;

        let mut out = vec![Envelope::new(
            from,
            Message::FieldUpdated {
                grid,
                ready: report.ready,
            },
        )];
        if let Some(first_turn) = report.first_turn {
            info!("room {} started, {} strikes first", room, first_turn);
            out.extend(
                game.player_ids()
                    .into_iter()
                    .map(|to| Envelope::new(to, Message::PlacementComplete { first_turn })),
            );
        }
        Ok(out)
    }

    fn strike(&mut self, from: PlayerId, cell: CellId) -> Result<Vec<Envelope>, GameError> {
        let room = self.room_of(from).cloned().ok_or(GameError::NotJoined)?;
        let game = self.rooms.get_mut(&room).ok_or(GameError::RoomNotFound)?;
        let report = game.strike(from, cell)?;
        debug!(
            "{} struck {} in room {}: hit={} sunk={:?}",
            from, cell, room, report.outcome.hit, report.outcome.sunk
        );

        let (Some(attacker), Some(defender)) = (game.player(report.attacker), game.player(report.defender))
        else {
            return Err(GameError::NotJoined);
        };
        let mut out = vec![
            Envelope::new(
                report.attacker,
                Message::OpponentFieldUpdated {
                    grid: attacker.opponent_view().clone(),
                },
            ),
            Envelope::new(
                report.defender,
                Message::FieldUpdated {
                    grid: defender.own_grid().clone(),
                    ready: true,
                },
            ),
        ];

        match report.status {
            GameStatus::Over { winner } => {
                info!("room {} over, {} won", room, winner);
                out.push(Envelope::new(report.attacker, Message::MatchOver { you_won: true }));
                out.push(Envelope::new(report.defender, Message::MatchOver { you_won: false }));
            }
            GameStatus::InProgress { turn } => {
                out.push(Envelope::new(
                    report.defender,
                    Message::TurnChanged {
                        your_turn: turn == report.defender,
                    },
                ));
                out.push(Envelope::new(
                    report.attacker,
                    Message::TurnChanged {
                        your_turn: turn == report.attacker,
                    },
                ));
            }
            GameStatus::Placing => {}
        }
        Ok(out)
    }

    fn rematch(&mut self, from: PlayerId) -> Result<Vec<Envelope>, GameError> {
        let room = self.room_of(from).cloned().ok_or(GameError::NotJoined)?;
        let ids = self.rooms.rematch(&room)?;
        info!("room {} restarted by {}", room, from);
        Ok(self.fresh_grids(&room, &ids))
    }

    /// One `FieldsReset` per player, each carrying that player's own grid.
    fn fresh_grids(&self, room: &RoomId, players: &[PlayerId]) -> Vec<Envelope> {
        let Some(game) = self.rooms.get(room) else {
            return Vec::new();
        };
        players
            .iter()
            .filter_map(|&id| game.player(id))
            .map(|p| {
                Envelope::new(
                    p.id(),
                    Message::FieldsReset {
                        grid: p.own_grid().clone(),
                    },
                )
            })
            .collect()
    }
}
