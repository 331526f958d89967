//! Game board: vessel placement and shot resolution.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use core::fmt;
use log::{debug, trace};
use rand::Rng;

use crate::cell::Cell;
use crate::common::{BoardError, PlacementError};
use crate::config::{DEFAULT_BOARD_SIZE, PLACEMENT_ATTEMPTS};
use crate::vessel::{Orientation, Vessel, VesselKind};

/// A square grid owning the vessels placed on it and every shot fired at it.
///
/// A board used only to remember one's own shots against an opponent simply
/// never receives any vessels.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    vessels: Vec<Vessel>,
    shots: BTreeSet<Cell>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Empty board of the default size.
    pub fn new() -> Self {
        Self::with_size(DEFAULT_BOARD_SIZE)
    }

    /// Empty `size`×`size` board.
    pub fn with_size(size: usize) -> Self {
        Board {
            size,
            vessels: Vec::new(),
            shots: BTreeSet::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Vessels in placement order.
    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    /// Vessels not yet sunk.
    pub fn remaining_vessels(&self) -> impl Iterator<Item = &Vessel> + '_ {
        self.vessels.iter().filter(|v| !v.is_sunk())
    }

    /// Every shot received, in row-major order.
    pub fn shots(&self) -> impl Iterator<Item = Cell> + '_ {
        self.shots.iter().copied()
    }

    pub fn shot_count(&self) -> usize {
        self.shots.len()
    }

    /// Returns `true` when every vessel is sunk. Vacuously true for a board
    /// with no vessels.
    pub fn all_sunk(&self) -> bool {
        self.vessels.iter().all(Vessel::is_sunk)
    }

    pub fn has_shot_at(&self, row: usize, col: usize) -> bool {
        self.shots.contains(&Cell::new(row, col))
    }

    pub fn has_vessel_at(&self, row: usize, col: usize) -> bool {
        self.vessel_at(row, col).is_some()
    }

    pub fn has_hit_vessel_at(&self, row: usize, col: usize) -> bool {
        let target = Cell::new(row, col);
        self.vessels
            .iter()
            .flat_map(|v| v.cells())
            .any(|c| *c == target && c.is_hit())
    }

    /// Vessel covering (`row`, `col`), if any.
    pub fn vessel_at(&self, row: usize, col: usize) -> Option<&Vessel> {
        let target = Cell::new(row, col);
        self.vessels.iter().find(|v| v.occupies(target))
    }

    /// Cells a vessel of `length` would cover from (`row`, `col`), provided
    /// the run is on the board and clear of other vessels.
    fn plan(
        &self,
        length: usize,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<Vec<Cell>, BoardError> {
        if !self.in_bounds(row, col) {
            return Err(BoardError::OutOfBounds { row, col });
        }
        let (dr, dc) = orientation.step();
        let (end_row, end_col) = (row + dr * (length - 1), col + dc * (length - 1));
        if !self.in_bounds(end_row, end_col) {
            return Err(BoardError::ShipOutOfBounds);
        }
        let cells: Vec<Cell> = (0..length)
            .map(|i| Cell::new(row + dr * i, col + dc * i))
            .collect();
        if cells.iter().any(|c| self.has_vessel_at(c.row(), c.col())) {
            return Err(BoardError::ShipOverlaps);
        }
        Ok(cells)
    }

    /// Check whether a vessel of `kind` fits at (`row`, `col`) without
    /// placing anything.
    pub fn check_placement(
        &self,
        kind: VesselKind,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        self.plan(kind.length(), row, col, orientation).map(|_| ())
    }

    /// Place `vessel` with its first cell at (`row`, `col`).
    ///
    /// On failure nothing changes and the vessel is returned inside the
    /// error, still unplaced, so another position can be tried.
    pub fn place(
        &mut self,
        mut vessel: Vessel,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<(), PlacementError> {
        if vessel.is_placed() {
            return Err(PlacementError::new(BoardError::ShipAlreadyPlaced, vessel));
        }
        let cells = match self.plan(vessel.length(), row, col, orientation) {
            Ok(cells) => cells,
            Err(reason) => {
                debug!(
                    "rejected {} at ({}, {}) {:?}: {}",
                    vessel.name(),
                    row,
                    col,
                    orientation,
                    reason
                );
                return Err(PlacementError::new(reason, vessel));
            }
        };
        vessel.set_orientation(orientation);
        for cell in cells {
            vessel.register_cell(cell);
        }
        trace!("placed {:?}", vessel);
        self.vessels.push(vessel);
        Ok(())
    }

    /// Returns a random non-overlapping (row, col, Orientation) for `kind`.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        kind: VesselKind,
    ) -> Result<(usize, usize, Orientation), BoardError> {
        let len = kind.length();
        if len > self.size {
            return Err(BoardError::ShipOutOfBounds);
        }
        for _ in 0..PLACEMENT_ATTEMPTS {
            let orient = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_r, max_c) = match orient {
                Orientation::Horizontal => (self.size - 1, self.size - len),
                Orientation::Vertical => (self.size - len, self.size - 1),
            };
            let r = rng.random_range(0..=max_r);
            let c = rng.random_range(0..=max_c);
            if self.check_placement(kind, r, c, orient).is_ok() {
                return Ok((r, c, orient));
            }
        }
        Err(BoardError::UnableToPlaceShip)
    }

    /// Place `vessel` at a random free position.
    pub fn place_randomly<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        vessel: Vessel,
    ) -> Result<(), PlacementError> {
        match self.random_placement(rng, vessel.kind()) {
            Ok((r, c, o)) => self.place(vessel, r, c, o),
            Err(reason) => Err(PlacementError::new(reason, vessel)),
        }
    }

    /// Resolve a shot at (`row`, `col`).
    ///
    /// Returns the struck vessel on a hit and `None` on a miss. Shots off the
    /// board or at an already-shot square are rejected without touching any
    /// state; callers that only care about hits can treat them as misses.
    pub fn fire(&mut self, row: usize, col: usize) -> Result<Option<&Vessel>, BoardError> {
        if !self.in_bounds(row, col) {
            return Err(BoardError::OutOfBounds { row, col });
        }
        let cell = Cell::new(row, col);
        if !self.shots.insert(cell) {
            return Err(BoardError::AlreadyShot { row, col });
        }
        let struck = self.vessels.iter_mut().position(|v| v.receive_shot(cell));
        trace!("shot at {} struck {:?}", cell, struck.map(|i| self.vessels[i].kind()));
        Ok(struck.map(|i| &self.vessels[i]))
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  size: {},\n  vessels: {:?},\n  shots: {:?}\n}}",
            self.size, self.vessels, self.shots
        )
    }
}
