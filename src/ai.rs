// Reactive hunt/search targeting for the computer opponent.
// No heap allocations; memory and candidates are bitboards.

use log::debug;
use rand::Rng;

use crate::{
    bitboard::BitBoard,
    common::{Coord, ShotResult},
    config::{COLS, ROWS},
};

/// Current behaviour of the strategy, derived from the candidate queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// No pending candidates: fire at uniformly random cells.
    Search,
    /// Follow-up candidates around earlier hits are pending.
    Hunt,
}

/// Opponent targeting memory for an `R×C` grid of at most 128 cells.
///
/// `targeted` only grows. `candidates` grows on hits and shrinks as cells are
/// picked, and never holds a targeted cell. The strategy does not know when a
/// ship sinks, so it keeps probing around a sunk ship until the candidates
/// drain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetingStrategy<const R: usize, const C: usize> {
    targeted: BitBoard<u128, R, C>,
    candidates: BitBoard<u128, R, C>,
}

/// Strategy for the standard game grid.
pub type Targeting = TargetingStrategy<ROWS, COLS>;

impl<const R: usize, const C: usize> TargetingStrategy<R, C> {
    pub fn new() -> Self {
        Self {
            targeted: BitBoard::new(),
            candidates: BitBoard::new(),
        }
    }

    pub fn mode(&self) -> Mode {
        if self.candidates.is_empty() {
            Mode::Search
        } else {
            Mode::Hunt
        }
    }

    /// Every coordinate selected so far.
    pub fn targeted(&self) -> BitBoard<u128, R, C> {
        self.targeted
    }

    /// Pending follow-up coordinates.
    pub fn candidates(&self) -> BitBoard<u128, R, C> {
        self.candidates
    }

    /// In-bounds orthogonal neighbours of `coord`: below, above, right, left.
    pub fn neighbors(coord: Coord) -> impl Iterator<Item = Coord> {
        let Coord { row, col } = coord;
        [
            row.checked_add(1).map(|r| Coord::new(r, col)),
            row.checked_sub(1).map(|r| Coord::new(r, col)),
            col.checked_add(1).map(|c| Coord::new(row, c)),
            col.checked_sub(1).map(|c| Coord::new(row, c)),
        ]
        .into_iter()
        .flatten()
        .filter(|c| c.in_bounds(R, C))
    }

    /// Choose the next coordinate and remember it as targeted.
    ///
    /// Picks uniformly among the candidates while hunting, otherwise draws
    /// uniformly random cells until an untargeted one comes up. Returns
    /// `None` once every cell has been targeted.
    pub fn select_target<G: Rng + ?Sized>(&mut self, rng: &mut G) -> Option<Coord> {
        if self.targeted.is_full() {
            return None;
        }
        let choice = loop {
            let pick = if self.candidates.is_empty() {
                Coord::new(rng.random_range(0..R), rng.random_range(0..C))
            } else {
                let n = rng.random_range(0..self.candidates.count_ones());
                let pick = self.candidates.nth_set(n)?;
                let _ = self.candidates.clear(pick);
                pick
            };
            if !self.targeted.contains(pick) {
                break pick;
            }
        };
        let _ = self.targeted.set(choice);
        debug!("opponent targets {} ({:?})", choice, self.mode());
        Some(choice)
    }

    /// Feed back the result of a shot at `coord`. A hit queues its untargeted
    /// neighbours; a miss changes nothing.
    pub fn record_result(&mut self, coord: Coord, result: ShotResult) {
        if result == ShotResult::Miss {
            return;
        }
        for n in Self::neighbors(coord) {
            if !self.targeted.contains(n) {
                let _ = self.candidates.set(n);
            }
        }
        debug!(
            "hit at {}: {} candidate(s) queued",
            coord,
            self.candidates.count_ones()
        );
    }
}

impl<const R: usize, const C: usize> Default for TargetingStrategy<R, C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn corner_has_two_neighbors() {
        let n: Vec<_> = Targeting::neighbors(Coord::new(0, 0)).collect();
        assert_eq!(n, [Coord::new(1, 0), Coord::new(0, 1)]);
        let n: Vec<_> = Targeting::neighbors(Coord::new(9, 9)).collect();
        assert_eq!(n, [Coord::new(8, 9), Coord::new(9, 8)]);
    }

    #[test]
    fn hit_switches_to_hunt_and_drains_back_to_search() {
        let mut rng = SmallRng::seed_from_u64(9);
        let mut ai = Targeting::new();
        let first = ai.select_target(&mut rng).unwrap();
        assert_eq!(ai.mode(), Mode::Search);
        ai.record_result(first, ShotResult::Hit);
        assert_eq!(ai.mode(), Mode::Hunt);

        let expected: Vec<_> = Targeting::neighbors(first).collect();
        let mut picked = Vec::new();
        while ai.mode() == Mode::Hunt {
            let c = ai.select_target(&mut rng).unwrap();
            ai.record_result(c, ShotResult::Miss);
            picked.push(c);
        }
        picked.sort();
        let mut expected = expected;
        expected.sort();
        assert_eq!(picked, expected);
    }

    #[test]
    fn exhausts_small_grid_without_repeats() {
        let mut rng = SmallRng::seed_from_u64(4);
        let mut ai = TargetingStrategy::<3, 3>::new();
        let mut seen = Vec::new();
        while let Some(c) = ai.select_target(&mut rng) {
            assert!(!seen.contains(&c));
            ai.record_result(c, ShotResult::Hit);
            seen.push(c);
        }
        assert_eq!(seen.len(), 9);
        assert!(ai.targeted().is_full());
    }
}
