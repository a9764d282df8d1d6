//! Per-player fleet placement state machine.

use super::common::ShipId;
use super::config::{FLEET, NUM_CLASSES};

/// A class of ships sharing one length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipClass {
    size: u8,
    remaining: u8,
}

impl ShipClass {
    pub const fn new(size: u8, remaining: u8) -> Self {
        Self { size, remaining }
    }

    /// Number of decks of each ship in the class.
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Ships of this class not yet completed.
    pub fn remaining(&self) -> u8 {
        self.remaining
    }
}

/// Where the player is in building the fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum FleetStatus {
    /// A ship of `classes[class]` is being built with `decks_placed` decks so far.
    Placing { class: usize, decks_placed: u8 },
    /// Every class is exhausted.
    AllPlaced,
}

/// Result of recording one deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckOutcome {
    /// The current ship grew but is not complete.
    Extended,
    /// The current ship reached full length; more ships remain.
    ShipCompleted(ShipId),
    /// The last ship of the fleet was completed.
    FleetCompleted(ShipId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Fleet {
    classes: [ShipClass; NUM_CLASSES],
    status: FleetStatus,
}

impl Default for Fleet {
    fn default() -> Self {
        Self::new()
    }
}

impl Fleet {
    /// Standard fleet with the smallest class current.
    pub fn new() -> Self {
        Self::with_classes(FLEET)
    }

    /// Fleet over custom classes, starting at the first one with ships left.
    pub fn with_classes(classes: [ShipClass; NUM_CLASSES]) -> Self {
        let status = match classes.iter().position(|c| c.remaining > 0) {
            Some(class) => FleetStatus::Placing {
                class,
                decks_placed: 0,
            },
            None => FleetStatus::AllPlaced,
        };
        Self { classes, status }
    }

    pub fn classes(&self) -> &[ShipClass] {
        &self.classes
    }

    pub fn status(&self) -> FleetStatus {
        self.status
    }

    /// The class currently being placed.
    pub fn current_class(&self) -> Option<&ShipClass> {
        match self.status {
            FleetStatus::Placing { class, .. } => self.classes.get(class),
            FleetStatus::AllPlaced => None,
        }
    }

    /// Decks placed on the ship under construction.
    pub fn decks_placed(&self) -> u8 {
        match self.status {
            FleetStatus::Placing { decks_placed, .. } => decks_placed,
            FleetStatus::AllPlaced => 0,
        }
    }

    /// Identity of the ship under construction. `remaining` only drops once
    /// the ship is complete, so this is stable for all of its decks.
    pub fn current_ship(&self) -> Option<ShipId> {
        self.current_class()
            .map(|c| ShipId::new(c.size, c.remaining))
    }

    pub fn is_ready(&self) -> bool {
        self.status == FleetStatus::AllPlaced
    }

    /// Advance the state machine after a deck was accepted on the grid.
    /// Returns `None` if the fleet is already complete.
    pub fn record_deck(&mut self) -> Option<DeckOutcome> {
        let FleetStatus::Placing { class, decks_placed } = self.status else {
            return None;
        };
        let current = &mut self.classes[class];
        let ship = ShipId::new(current.size, current.remaining);
        let decks = decks_placed + 1;

        if decks < current.size {
            self.status = FleetStatus::Placing {
                class,
                decks_placed: decks,
            };
            return Some(DeckOutcome::Extended);
        }

        current.remaining -= 1;
        if current.remaining > 0 {
            self.status = FleetStatus::Placing {
                class,
                decks_placed: 0,
            };
            return Some(DeckOutcome::ShipCompleted(ship));
        }

        self.status = match (class + 1..NUM_CLASSES).find(|&i| self.classes[i].remaining > 0) {
            Some(next) => FleetStatus::Placing {
                class: next,
                decks_placed: 0,
            },
            None => FleetStatus::AllPlaced,
        };
        Some(if self.is_ready() {
            DeckOutcome::FleetCompleted(ship)
        } else {
            DeckOutcome::ShipCompleted(ship)
        })
    }
}
