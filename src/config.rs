use crate::vessel::{FleetClass, Placement};

/// Side length of the square field.
pub const BOARD_SIZE: usize = 10;

/// Number of vessels a legal fleet contains.
pub const FLEET_VESSELS: usize = 10;

/// Required fleet composition: four single-cell vessels down to one
/// four-cell vessel.
pub const FLEET_CLASSES: [FleetClass; 4] = [
    FleetClass::new(1, 4),
    FleetClass::new(2, 3),
    FleetClass::new(3, 2),
    FleetClass::new(4, 1),
];

/// Known-good layout used by the demo binary and tests. Vessels sit on
/// even rows with at least one clear column between hulls, so the
/// no-touch rule holds.
pub const DEMO_LAYOUT: [Placement; FLEET_VESSELS] = [
    ((0, 0), (0, 3)),
    ((2, 0), (2, 2)),
    ((2, 4), (2, 6)),
    ((4, 0), (4, 1)),
    ((4, 3), (4, 4)),
    ((4, 6), (4, 7)),
    ((6, 0), (6, 0)),
    ((6, 2), (6, 2)),
    ((6, 4), (6, 4)),
    ((6, 6), (6, 6)),
];
