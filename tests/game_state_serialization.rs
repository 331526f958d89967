#![cfg(feature = "std")]

use broadside::{
    Board, Cell, GameStatus, Orientation, ShotOutcome, Vessel, VesselKind, FLEET, NUM_VESSELS,
};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::de::DeserializeOwned;
use serde::Serialize;

fn roundtrip<T: Serialize + DeserializeOwned>(value: &T) -> T {
    let text = serde_json::to_string(value).unwrap();
    serde_json::from_str(&text).unwrap()
}

#[test]
fn hit_flag_survives_roundtrip() {
    let mut board = Board::new();
    board
        .place(Vessel::new(VesselKind::Submarine), 2, 3, Orientation::Vertical)
        .unwrap();
    board.fire(2, 3).unwrap();

    let cells = board.vessels()[0].cells();
    let hit = roundtrip(&cells[0]);
    let intact = roundtrip(&cells[1]);
    assert_eq!(hit, Cell::new(2, 3));
    assert!(hit.is_hit());
    assert_eq!(intact, Cell::new(3, 3));
    assert!(!intact.is_hit());
}

#[test]
fn outcome_and_status_roundtrip() {
    for outcome in [
        ShotOutcome::Miss,
        ShotOutcome::Hit(VesselKind::Battleship),
        ShotOutcome::Sunk(VesselKind::Cruiser),
        ShotOutcome::Rejected,
    ] {
        assert_eq!(roundtrip(&outcome), outcome);
    }
    for status in [GameStatus::InProgress, GameStatus::Won { winner: 1 }] {
        assert_eq!(roundtrip(&status), status);
    }
    assert_eq!(
        serde_json::to_value(GameStatus::Won { winner: 1 }).unwrap(),
        serde_json::json!({ "Won": { "winner": 1 } })
    );
}

proptest! {
    #[test]
    fn fleet_layout_roundtrip(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new();
        let mut layout = Vec::with_capacity(NUM_VESSELS);
        for kind in FLEET {
            let (r, c, o) = board.random_placement(&mut rng, kind).unwrap();
            board.place(Vessel::new(kind), r, c, o).unwrap();
            layout.push((kind, r, c, o));
        }

        let decoded: Vec<(VesselKind, usize, usize, Orientation)> = roundtrip(&layout);
        let mut rebuilt = Board::new();
        for (kind, r, c, o) in decoded {
            rebuilt.place(Vessel::new(kind), r, c, o).unwrap();
        }
        prop_assert_eq!(rebuilt, board);
    }
}
