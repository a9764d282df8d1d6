use std::collections::HashSet;

use seabattle::{DeckOutcome, Fleet, FleetStatus, ShipClass, ShipId, TOTAL_DECKS, TOTAL_SHIPS};

#[test]
fn test_new_fleet_starts_with_single_deckers() {
    let fleet = Fleet::new();
    assert_eq!(
        fleet.status(),
        FleetStatus::Placing {
            class: 0,
            decks_placed: 0
        }
    );
    assert_eq!(fleet.current_ship(), Some(ShipId::new(1, 4)));
    assert_eq!(fleet.decks_placed(), 0);
    assert!(!fleet.is_ready());
    let sizes: Vec<(u8, u8)> = fleet.classes().iter().map(|c| (c.size(), c.remaining())).collect();
    assert_eq!(sizes, vec![(1, 4), (2, 3), (3, 2), (4, 1)]);
}

#[test]
fn test_single_decker_completes_immediately() {
    let mut fleet = Fleet::new();
    assert_eq!(fleet.record_deck(), Some(DeckOutcome::ShipCompleted(ShipId::new(1, 4))));
    assert_eq!(fleet.current_ship(), Some(ShipId::new(1, 3)));
    assert_eq!(fleet.classes()[0].remaining(), 3);
}

#[test]
fn test_moves_to_next_class_when_exhausted() {
    let mut fleet = Fleet::new();
    for _ in 0..4 {
        fleet.record_deck();
    }
    assert_eq!(
        fleet.status(),
        FleetStatus::Placing {
            class: 1,
            decks_placed: 0
        }
    );
    assert_eq!(fleet.current_ship(), Some(ShipId::new(2, 3)));

    assert_eq!(fleet.record_deck(), Some(DeckOutcome::Extended));
    assert_eq!(fleet.decks_placed(), 1);
    // identity is stable until the ship is complete
    assert_eq!(fleet.current_ship(), Some(ShipId::new(2, 3)));

    assert_eq!(fleet.record_deck(), Some(DeckOutcome::ShipCompleted(ShipId::new(2, 3))));
    assert_eq!(fleet.current_ship(), Some(ShipId::new(2, 2)));
    assert_eq!(fleet.decks_placed(), 0);
}

#[test]
fn test_full_fleet_takes_twenty_decks() {
    let mut fleet = Fleet::new();
    let mut ships = HashSet::new();
    let mut last = None;
    for _ in 0..TOTAL_DECKS {
        let before: Vec<u8> = fleet.classes().iter().map(ShipClass::remaining).collect();
        let outcome = fleet.record_deck().expect("fleet finished early");
        let after: Vec<u8> = fleet.classes().iter().map(ShipClass::remaining).collect();
        for (b, a) in before.iter().zip(&after) {
            assert!(a <= b);
        }
        match outcome {
            DeckOutcome::ShipCompleted(id) | DeckOutcome::FleetCompleted(id) => {
                assert!(ships.insert(id), "duplicate ship id {}", id);
            }
            DeckOutcome::Extended => {}
        }
        last = Some(outcome);
    }
    assert_eq!(last, Some(DeckOutcome::FleetCompleted(ShipId::new(4, 1))));
    assert_eq!(ships.len(), TOTAL_SHIPS);
    assert!(fleet.is_ready());
    assert_eq!(fleet.status(), FleetStatus::AllPlaced);
    assert_eq!(fleet.current_ship(), None);
    assert_eq!(fleet.record_deck(), None);
}

#[test]
fn test_custom_classes_skip_empty_ones() {
    let mut fleet = Fleet::with_classes([
        ShipClass::new(1, 0),
        ShipClass::new(2, 1),
        ShipClass::new(3, 0),
        ShipClass::new(4, 0),
    ]);
    assert_eq!(fleet.current_ship(), Some(ShipId::new(2, 1)));
    assert_eq!(fleet.record_deck(), Some(DeckOutcome::Extended));
    assert_eq!(fleet.record_deck(), Some(DeckOutcome::FleetCompleted(ShipId::new(2, 1))));
    assert!(fleet.is_ready());

    let empty = Fleet::with_classes([ShipClass::new(1, 0); 4]);
    assert!(empty.is_ready());
}
