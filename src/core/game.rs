use alloc::vec::Vec;
use rand::Rng;

use super::{
    common::{CellId, GameError, PlayerId},
    fleet::Fleet,
    grid::{in_bounds, Grid},
    placement::can_place,
    strike::{strike, StrikeOutcome},
};

/// Maximum number of players in one match.
pub const MAX_PLAYERS: usize = 2;

/// One participant: real grid, knowledge of the opponent's grid, fleet progress.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerState {
    id: PlayerId,
    own_grid: Grid,
    opponent_view: Grid,
    fleet: Fleet,
}

impl PlayerState {
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            own_grid: Grid::new(),
            opponent_view: Grid::new(),
            fleet: Fleet::new(),
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn own_grid(&self) -> &Grid {
        &self.own_grid
    }

    pub fn opponent_view(&self) -> &Grid {
        &self.opponent_view
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn is_ready(&self) -> bool {
        self.fleet.is_ready()
    }
}

/// Current phase of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    /// Players are building their fleets.
    Placing,
    /// Both fleets are placed; `turn` strikes next.
    InProgress { turn: PlayerId },
    /// `winner` sank the opponent's whole fleet.
    Over { winner: PlayerId },
}

/// Result of an accepted deck placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementReport {
    /// The placing player's fleet is complete.
    pub ready: bool,
    /// Set when this placement started the match: the player striking first.
    pub first_turn: Option<PlayerId>,
}

/// Result of an accepted strike.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrikeReport {
    pub outcome: StrikeOutcome,
    pub attacker: PlayerId,
    pub defender: PlayerId,
    /// Status after the strike.
    pub status: GameStatus,
}

/// State of one two-player match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    players: Vec<PlayerState>,
    status: GameStatus,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Empty match waiting for players.
    pub fn new() -> Self {
        Self {
            players: Vec::with_capacity(MAX_PLAYERS),
            status: GameStatus::Placing,
        }
    }

    /// Fresh match with a brand-new state for each of `ids`.
    pub fn with_players(ids: &[PlayerId]) -> Self {
        Self {
            players: ids.iter().take(MAX_PLAYERS).copied().map(PlayerState::new).collect(),
            status: GameStatus::Placing,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn players(&self) -> &[PlayerState] {
        &self.players
    }

    pub fn player_ids(&self) -> Vec<PlayerId> {
        self.players.iter().map(PlayerState::id).collect()
    }

    pub fn player(&self, id: PlayerId) -> Option<&PlayerState> {
        self.players.iter().find(|p| p.id == id)
    }

    /// The other participant, if present.
    pub fn opponent_of(&self, id: PlayerId) -> Option<&PlayerState> {
        self.players.iter().find(|p| p.id != id)
    }

    pub fn is_full(&self) -> bool {
        self.players.len() >= MAX_PLAYERS
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn current_turn(&self) -> Option<PlayerId> {
        match self.status {
            GameStatus::InProgress { turn } => Some(turn),
            _ => None,
        }
    }

    pub fn winner(&self) -> Option<PlayerId> {
        match self.status {
            GameStatus::Over { winner } => Some(winner),
            _ => None,
        }
    }

    /// Add a player with a fresh state.
    pub fn join(&mut self, id: PlayerId) -> Result<&PlayerState, GameError> {
        if self.player(id).is_some() {
            return Err(GameError::AlreadyJoined);
        }
        if self.is_full() {
            return Err(GameError::RoomFull);
        }
        self.players.push(PlayerState::new(id));
        let idx = self.players.len() - 1;
        Ok(&self.players[idx])
    }

    /// Drop a player's state, returning it.
    pub fn remove(&mut self, id: PlayerId) -> Option<PlayerState> {
        let idx = self.players.iter().position(|p| p.id == id)?;
        Some(self.players.remove(idx))
    }

    /// Place the next deck of `id`'s current ship on `cell`.
    ///
    /// When this completes the second fleet the match starts and the first
    /// striker is drawn with a fair coin flip.
    pub fn place<R: Rng>(&mut self, id: PlayerId, cell: CellId, rng: &mut R) -> Result<PlacementReport, GameError> {
        if self.status != GameStatus::Placing {
            return Err(GameError::WrongPhase);
        }
        if !in_bounds(cell) {
            return Err(GameError::InvalidCell);
        }
        let player = self
            .players
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(GameError::NotJoined)?;
        let ship = player.fleet.current_ship().ok_or(GameError::AlreadyReady)?;
        if player.own_grid.ship_at(cell).is_some() {
            return Err(GameError::CellOccupied);
        }
        if !can_place(cell, ship, player.fleet.decks_placed(), &player.own_grid) {
            return Err(GameError::PlacementRejected);
        }

        if let Some(target) = player.own_grid.cell_mut(cell) {
            target.ship = Some(ship);
        }
        player.fleet.record_deck();
        let ready = player.is_ready();

        let mut first_turn = None;
        if self.is_full() && self.players.iter().all(PlayerState::is_ready) {
            let turn = self.players[rng.random_range(0..MAX_PLAYERS)].id;
            self.status = GameStatus::InProgress { turn };
            first_turn = Some(turn);
        }

        Ok(PlacementReport { ready, first_turn })
    }

    /// Strike `cell` of the opponent's grid on behalf of `attacker`.
    ///
    /// A miss hands the turn to the defender; a hit keeps it. Sinking the
    /// last ship ends the match.
    pub fn strike(&mut self, attacker: PlayerId, cell: CellId) -> Result<StrikeReport, GameError> {
        let GameStatus::InProgress { turn } = self.status else {
            return Err(GameError::WrongPhase);
        };
        if turn != attacker {
            return Err(GameError::NotYourTurn);
        }
        if !in_bounds(cell) {
            return Err(GameError::InvalidCell);
        }
        let (att, def) = self.pair_mut(attacker).ok_or(GameError::NotJoined)?;
        let outcome = strike(cell, &mut def.own_grid, &mut att.opponent_view)?;
        let defender = def.id;

        if outcome.fleet_destroyed {
            self.status = GameStatus::Over { winner: attacker };
        } else if !outcome.hit {
            self.status = GameStatus::InProgress { turn: defender };
        }

        Ok(StrikeReport {
            outcome,
            attacker,
            defender,
            status: self.status,
        })
    }

    /// Mutable `(attacker, defender)` pair; `None` unless both are present.
    fn pair_mut(&mut self, attacker: PlayerId) -> Option<(&mut PlayerState, &mut PlayerState)> {
        let [first, second] = self.players.as_mut_slice() else {
            return None;
        };
        if first.id == attacker {
            Some((first, second))
        } else if second.id == attacker {
            Some((second, first))
        } else {
            None
        }
    }
}
