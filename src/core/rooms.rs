//! Table of rooms, each owning one match.

use alloc::collections::BTreeMap;
use alloc::string::ToString;
use alloc::vec::Vec;
use rand::Rng;
use uuid::Builder;

use super::common::{GameError, PlayerId, RoomId};
use super::game::{Game, PlayerState};

/// What happened to a room after a player left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeaveOutcome {
    /// The room had no players left and was deleted.
    Closed,
    /// The room was reset to a fresh match for the remaining player.
    Reset { remaining: PlayerId },
    /// The player was not in the room (or the room does not exist).
    NotJoined,
}

/// Owner of every live match, keyed by room id.
#[derive(Debug, Default)]
pub struct Rooms {
    games: BTreeMap<RoomId, Game>,
}

impl Rooms {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Rooms that exist but hold no player.
    pub fn unjoined(&self) -> impl Iterator<Item = &RoomId> + '_ {
        self.games.iter().filter(|(_, game)| game.is_empty()).map(|(id, _)| id)
    }

    pub fn contains(&self, room: &RoomId) -> bool {
        self.games.contains_key(room)
    }

    pub fn get(&self, room: &RoomId) -> Option<&Game> {
        self.games.get(room)
    }

    pub fn get_mut(&mut self, room: &RoomId) -> Option<&mut Game> {
        self.games.get_mut(room)
    }

    /// Open a room with an empty match under a fresh id.
    pub fn create<R: Rng>(&mut self, rng: &mut R) -> RoomId {
        loop {
            let id = random_room_id(rng);
            if !self.games.contains_key(&id) {
                self.games.insert(id.clone(), Game::new());
                return id;
            }
        }
    }

    /// Swap the match stored under `room`, returning the previous one.
    pub fn replace(&mut self, room: &RoomId, game: Game) -> Option<Game> {
        self.games.insert(room.clone(), game)
    }

    pub fn remove(&mut self, room: &RoomId) -> Option<Game> {
        self.games.remove(room)
    }

    /// Seat `player` in `room`.
    pub fn join(&mut self, room: &RoomId, player: PlayerId) -> Result<&PlayerState, GameError> {
        let game = self.games.get_mut(room).ok_or(GameError::RoomNotFound)?;
        game.join(player)
    }

    /// Remove `player` from `room`. An emptied room is deleted; a room with
    /// one player left starts over from scratch for that player.
    pub fn leave(&mut self, room: &RoomId, player: PlayerId) -> LeaveOutcome {
        let Some(game) = self.games.get_mut(room) else {
            return LeaveOutcome::NotJoined;
        };
        if game.remove(player).is_none() {
            return LeaveOutcome::NotJoined;
        }
        match game.player_ids().first().copied() {
            None => {
                self.games.remove(room);
                LeaveOutcome::Closed
            }
            Some(remaining) => {
                *game = Game::with_players(&[remaining]);
                LeaveOutcome::Reset { remaining }
            }
        }
    }

    /// Restart the match in `room` with fresh states for everyone seated.
    pub fn rematch(&mut self, room: &RoomId) -> Result<Vec<PlayerId>, GameError> {
        let game = self.games.get_mut(room).ok_or(GameError::RoomNotFound)?;
        let ids = game.player_ids();
        *game = Game::with_players(&ids);
        Ok(ids)
    }
}

/// Random version 4 UUID in its canonical text form.
fn random_room_id<R: Rng>(rng: &mut R) -> RoomId {
    let uuid = Builder::from_random_bytes(rng.random()).into_uuid();
    RoomId(uuid.to_string())
}
