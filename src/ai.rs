// Hunt/target shot selection for the computer opponent.
// Fires at random until something is hit, then works outward from the most
// recent hit until the struck vessel goes down.

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use log::{debug, trace};
use rand::Rng;

use crate::board::Board;
use crate::cell::Cell;
use crate::vessel::VesselKind;

/// Search order around a hit: up, down, left, right.
const NEIGHBOURS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Whether the strategy is searching blind or following up a hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetingMode {
    Hunting,
    Targeting,
}

/// Memory of the hunt/target strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HuntTarget {
    /// Hits not yet resolved to a sunk vessel, most recent last.
    confirmed_hits: Vec<(usize, usize)>,
    /// Candidates waiting to be tried, oldest first.
    pending_targets: VecDeque<(usize, usize)>,
}

impl HuntTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> TargetingMode {
        if self.confirmed_hits.is_empty() {
            TargetingMode::Hunting
        } else {
            TargetingMode::Targeting
        }
    }

    pub fn confirmed_hits(&self) -> &[(usize, usize)] {
        &self.confirmed_hits
    }

    pub fn pending_targets(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.pending_targets.iter().copied()
    }

    /// Choose the next coordinate to fire at. `view` is the record of shots
    /// already fired at the opponent.
    pub fn select_shot<R: Rng + ?Sized>(&mut self, view: &Board, rng: &mut R) -> (usize, usize) {
        if let Some(next) = self.pending_targets.pop_front() {
            trace!("following queued lead {:?}", next);
            return next;
        }

        if let Some(&(row, col)) = self.confirmed_hits.last() {
            let size = view.size();
            let around = Cell::new(row, col);
            self.pending_targets.extend(
                NEIGHBOURS
                    .iter()
                    .filter_map(|&(dr, dc)| around.offset(dr, dc, size))
                    .filter(|c| !view.has_shot_at(c.row(), c.col()))
                    .map(|c| c.coord()),
            );
            if let Some(next) = self.pending_targets.pop_front() {
                debug!(
                    "targeting around ({}, {}), {} more queued",
                    row,
                    col,
                    self.pending_targets.len()
                );
                return next;
            }
        }

        random_unshot(view, rng)
    }

    /// Update memory with the outcome of the last shot. A sink wipes every
    /// lead, including any that pointed at a different vessel.
    pub fn register_shot_result(
        &mut self,
        row: usize,
        col: usize,
        hit: bool,
        sunk: Option<VesselKind>,
    ) {
        if let Some(kind) = sunk {
            debug!("sank {} at ({}, {}), back to hunting", kind, row, col);
            self.confirmed_hits.clear();
            self.pending_targets.clear();
        } else if hit {
            self.confirmed_hits.push((row, col));
        }
    }
}

/// Uniformly random square not yet shot, found by rejection sampling.
///
/// Sampling only retries while an unshot square exists. Once every square
/// of `view` has been shot the first draw is returned as is, and on an
/// empty grid `(0, 0)`; the opponent's board rejects either.
fn random_unshot<R: Rng + ?Sized>(view: &Board, rng: &mut R) -> (usize, usize) {
    let size = view.size();
    if size == 0 {
        return (0, 0);
    }
    let exhausted = view.shot_count() >= size * size;
    loop {
        let row = rng.random_range(0..size);
        let col = rng.random_range(0..size);
        if exhausted || !view.has_shot_at(row, col) {
            return (row, col);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn queues_neighbours_in_fixed_order() {
        let view = Board::new();
        let mut rng = SmallRng::seed_from_u64(1);
        let mut ai = HuntTarget::new();
        ai.register_shot_result(4, 4, true, None);

        assert_eq!(ai.select_shot(&view, &mut rng), (3, 4));
        let rest: Vec<_> = ai.pending_targets().collect();
        assert_eq!(rest, vec![(5, 4), (4, 3), (4, 5)]);
    }

    #[test]
    fn skips_edges_and_shot_neighbours() {
        let mut view = Board::new();
        view.fire(1, 0).unwrap();
        let mut rng = SmallRng::seed_from_u64(2);
        let mut ai = HuntTarget::new();
        ai.register_shot_result(0, 0, true, None);

        assert_eq!(ai.select_shot(&view, &mut rng), (0, 1));
        assert_eq!(ai.pending_targets().count(), 0);
    }

    #[test]
    fn sink_discards_all_leads() {
        let view = Board::new();
        let mut rng = SmallRng::seed_from_u64(3);
        let mut ai = HuntTarget::new();
        ai.register_shot_result(5, 5, true, None);
        ai.select_shot(&view, &mut rng);
        assert_eq!(ai.mode(), TargetingMode::Targeting);

        ai.register_shot_result(4, 5, true, Some(VesselKind::Submarine));
        assert_eq!(ai.mode(), TargetingMode::Hunting);
        assert!(ai.confirmed_hits().is_empty());
        assert_eq!(ai.pending_targets().count(), 0);
    }

    #[test]
    fn miss_leaves_memory_alone() {
        let mut ai = HuntTarget::new();
        ai.register_shot_result(2, 2, false, None);
        assert_eq!(ai, HuntTarget::new());
    }

    #[test]
    fn random_pick_finds_last_free_square() {
        let mut view = Board::with_size(3);
        for r in 0..3 {
            for c in 0..3 {
                if (r, c) != (2, 1) {
                    view.fire(r, c).unwrap();
                }
            }
        }
        let mut rng = SmallRng::seed_from_u64(4);
        assert_eq!(random_unshot(&view, &mut rng), (2, 1));
    }

    #[test]
    fn random_pick_on_full_view_stays_on_grid() {
        let mut view = Board::with_size(2);
        for r in 0..2 {
            for c in 0..2 {
                view.fire(r, c).unwrap();
            }
        }
        let mut rng = SmallRng::seed_from_u64(5);
        let (row, col) = random_unshot(&view, &mut rng);
        assert!(view.in_bounds(row, col));
    }

    #[test]
    fn empty_grid_does_not_panic() {
        let view = Board::with_size(0);
        let mut rng = SmallRng::seed_from_u64(6);
        let mut ai = HuntTarget::new();
        assert_eq!(ai.select_shot(&view, &mut rng), (0, 0));
    }
}
