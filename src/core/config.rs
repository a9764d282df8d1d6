use super::fleet::ShipClass;

/// Side length of the square grid.
pub const BOARD_SIZE: usize = 10;

/// Number of cells on one grid.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Number of ship classes in a fleet.
pub const NUM_CLASSES: usize = 4;

/// Ship classes in placement order: four 1-deckers, three 2-deckers,
/// two 3-deckers and one 4-decker.
pub const FLEET: [ShipClass; NUM_CLASSES] = [
    ShipClass::new(1, 4),
    ShipClass::new(2, 3),
    ShipClass::new(3, 2),
    ShipClass::new(4, 1),
];

/// Total number of decks in the standard fleet.
pub const TOTAL_DECKS: usize = 4 + 2 * 3 + 3 * 2 + 4;

/// Total number of ships in the standard fleet.
pub const TOTAL_SHIPS: usize = 4 + 3 + 2 + 1;
