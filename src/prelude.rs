//! Commonly used types and utilities for ease of import.

pub use crate::{
    Board, BoardError, Controller, GameStatus, Match, Orientation, Player, ShotOutcome,
    ShotSource, Vessel, VesselKind, FLEET,
};

#[cfg(feature = "std")]
pub use crate::init_logging;
