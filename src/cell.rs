//! Grid coordinates carrying a mutable hit marker.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

/// A single square of the grid.
///
/// Identity is the `(row, col)` pair alone: the `hit` flag is state that
/// changes during play and never takes part in equality, ordering or
/// hashing, so a marked cell still matches a fresh `Cell::new` at the same
/// position.
#[derive(Clone, Copy)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    row: usize,
    col: usize,
    hit: bool,
}

impl Cell {
    /// Fresh, unhit cell at (`row`, `col`).
    pub const fn new(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            hit: false,
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// Position as a `(row, col)` tuple.
    pub fn coord(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn is_hit(&self) -> bool {
        self.hit
    }

    pub(crate) fn mark_hit(&mut self) {
        self.hit = true;
    }

    /// The neighbour `dr`/`dc` squares away, or `None` when it would leave a
    /// `size`×`size` grid.
    pub fn offset(&self, dr: isize, dc: isize, size: usize) -> Option<Cell> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        (row < size && col < size).then(|| Cell::new(row, col))
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.coord() == other.coord()
    }
}

impl Eq for Cell {}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cell {
    fn cmp(&self, other: &Self) -> Ordering {
        self.coord().cmp(&other.coord())
    }
}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coord().hash(state);
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}{})", self.row, self.col, if self.hit { ", hit" } else { "" })
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
