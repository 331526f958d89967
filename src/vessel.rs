//! Vessel definitions and per-cell damage tracking.

use alloc::vec::Vec;
use core::fmt;

use crate::cell::Cell;

/// Orientation of a vessel on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Row/column step taken from one cell of a run to the next.
    pub fn step(self) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

/// The five classes of vessel making up a fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum VesselKind {
    Carrier,
    Battleship,
    Cruiser,
    Submarine,
    Destroyer,
}

impl VesselKind {
    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            VesselKind::Carrier => "Carrier",
            VesselKind::Battleship => "Battleship",
            VesselKind::Cruiser => "Cruiser",
            VesselKind::Submarine => "Submarine",
            VesselKind::Destroyer => "Destroyer",
        }
    }

    /// Number of cells the vessel occupies.
    pub const fn length(self) -> usize {
        match self {
            VesselKind::Carrier => 5,
            VesselKind::Battleship => 4,
            VesselKind::Cruiser => 3,
            VesselKind::Submarine => 2,
            VesselKind::Destroyer => 1,
        }
    }
}

impl fmt::Display for VesselKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A vessel of a given kind.
///
/// Starts out unplaced, with no cells and no orientation. [`Board::place`]
/// fills both in exactly once; afterwards the vessel records damage to its
/// own cells.
///
/// [`Board::place`]: crate::Board::place
#[derive(Clone)]
pub struct Vessel {
    kind: VesselKind,
    orientation: Option<Orientation>,
    cells: Vec<Cell>,
}

impl Vessel {
    /// A new, unplaced vessel.
    pub fn new(kind: VesselKind) -> Self {
        Self {
            kind,
            orientation: None,
            cells: Vec::with_capacity(kind.length()),
        }
    }

    pub fn kind(&self) -> VesselKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn length(&self) -> usize {
        self.kind.length()
    }

    /// `None` until the vessel is placed.
    pub fn orientation(&self) -> Option<Orientation> {
        self.orientation
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn is_placed(&self) -> bool {
        self.orientation.is_some()
    }

    /// Whether the vessel covers the square at `cell`'s position.
    pub fn occupies(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    pub(crate) fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = Some(orientation);
    }

    /// Append a cell to the vessel. Only used while placing.
    pub(crate) fn register_cell(&mut self, cell: Cell) {
        self.cells.push(cell);
    }

    /// Mark the matching cell as hit. Returns `false` and changes nothing
    /// when the vessel does not cover `cell`.
    pub fn receive_shot(&mut self, cell: Cell) -> bool {
        match self.cells.iter_mut().find(|c| **c == cell) {
            Some(own) => {
                own.mark_hit();
                true
            }
            None => false,
        }
    }

    /// All cells hit. Vacuously true for an unplaced vessel, so only ask
    /// after placement.
    pub fn is_sunk(&self) -> bool {
        self.cells.iter().all(Cell::is_hit)
    }

    /// Number of cells already hit.
    pub fn hits(&self) -> usize {
        self.cells.iter().filter(|c| c.is_hit()).count()
    }
}

// Cells compare by position only, so damage is compared separately.
impl PartialEq for Vessel {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.orientation == other.orientation
            && self.cells == other.cells
            && self
                .cells
                .iter()
                .zip(&other.cells)
                .all(|(a, b)| a.is_hit() == b.is_hit())
    }
}

impl Eq for Vessel {}

impl fmt::Debug for Vessel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Vessel {{ kind: {:?}, orientation: {:?}, hits: {}/{}, cells: {:?} }}",
            self.kind,
            self.orientation,
            self.hits(),
            self.length(),
            self.cells,
        )
    }
}

impl fmt::Display for Vessel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.is_sunk() { "sunk" } else { "afloat" };
        write!(f, "{} ({} cells) - {}", self.name(), self.length(), status)
    }
}
