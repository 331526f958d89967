use crate::vessel::VesselKind;

pub const DEFAULT_BOARD_SIZE: usize = 10;
pub const NUM_VESSELS: usize = 5;
pub const FLEET: [VesselKind; NUM_VESSELS] = [
    VesselKind::Carrier,
    VesselKind::Battleship,
    VesselKind::Cruiser,
    VesselKind::Submarine,
    VesselKind::Destroyer,
];

/// Total number of vessel cells in the standard fleet.
pub const TOTAL_FLEET_CELLS: usize = 5 + 4 + 3 + 2 + 1;

/// Random placement tries per vessel before giving up.
pub const PLACEMENT_ATTEMPTS: usize = 1000;

