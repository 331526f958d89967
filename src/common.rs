//! Common types: board errors and shot outcomes.

use core::fmt;

use crate::vessel::{Vessel, VesselKind};

/// Summary of a resolved shot, detached from the board that resolved it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// Shot landed in open water.
    Miss,
    /// Shot struck a vessel that is still afloat.
    Hit(VesselKind),
    /// Shot struck the last intact cell of a vessel.
    Sunk(VesselKind),
    /// Coordinate was off the board or already shot; nothing changed.
    Rejected,
}

impl ShotOutcome {
    /// Classify the result of [`Board::fire`](crate::Board::fire).
    pub fn from_fire(result: Result<Option<&Vessel>, BoardError>) -> Self {
        match result {
            Ok(Some(vessel)) if vessel.is_sunk() => ShotOutcome::Sunk(vessel.kind()),
            Ok(Some(vessel)) => ShotOutcome::Hit(vessel.kind()),
            Ok(None) => ShotOutcome::Miss,
            Err(_) => ShotOutcome::Rejected,
        }
    }

    pub fn is_hit(&self) -> bool {
        matches!(self, ShotOutcome::Hit(_) | ShotOutcome::Sunk(_))
    }

    /// Kind of the vessel this shot sank, if any.
    pub fn sunk(&self) -> Option<VesselKind> {
        match self {
            ShotOutcome::Sunk(kind) => Some(*kind),
            _ => None,
        }
    }
}

/// Errors returned by Board operations. None of them alter board state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate lies outside the grid.
    OutOfBounds { row: usize, col: usize },
    /// Vessel would extend past the edge of the grid.
    ShipOutOfBounds,
    /// Vessel placement overlaps another vessel.
    ShipOverlaps,
    /// Vessel has already been placed.
    ShipAlreadyPlaced,
    /// Coordinate was already shot.
    AlreadyShot { row: usize, col: usize },
    /// Random placement gave up after the configured number of attempts.
    UnableToPlaceShip,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Coordinate ({}, {}) is outside the board", row, col)
            }
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::ShipAlreadyPlaced => write!(f, "Ship is already placed on a board"),
            BoardError::AlreadyShot { row, col } => {
                write!(f, "Position ({}, {}) was already shot", row, col)
            }
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

/// A rejected placement. Hands the untouched vessel back so the caller can
/// retry with other coordinates.
#[derive(Debug, PartialEq, Eq)]
pub struct PlacementError {
    reason: BoardError,
    vessel: Vessel,
}

impl PlacementError {
    pub(crate) fn new(reason: BoardError, vessel: Vessel) -> Self {
        Self { reason, vessel }
    }

    pub fn reason(&self) -> BoardError {
        self.reason
    }

    pub fn vessel(&self) -> &Vessel {
        &self.vessel
    }

    /// Recover the vessel for another attempt.
    pub fn into_vessel(self) -> Vessel {
        self.vessel
    }
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot place {}: {}", self.vessel.name(), self.reason)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}
