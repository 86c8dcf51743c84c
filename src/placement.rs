//! Randomized, non-overlapping fleet layout.
//!
//! Each ship picks an orientation uniformly, then an anchor that keeps it on
//! the grid, and the whole ship is re-drawn on any collision. After
//! [`PLACEMENT_ATTEMPTS`] failed draws the ship is placed by scanning the grid
//! in row-major order instead, so layout always terminates.

use log::{debug, warn};
use rand::Rng;

use crate::bitboard::BitBoard;
use crate::common::{Coord, PlacementError};
use crate::config::PLACEMENT_ATTEMPTS;
use crate::grid::Grid;
use crate::ship::{Orientation, Placement, ShipType};

type Occupancy<const R: usize, const C: usize> = BitBoard<u128, R, C>;

fn check_length<const R: usize, const C: usize>(ship: ShipType) -> Result<(), PlacementError> {
    let len = ship.length();
    if len == 0 || (len > R && len > C) {
        return Err(PlacementError::InvalidLength {
            name: ship.name(),
            length: len,
        });
    }
    Ok(())
}

/// Draw up to [`PLACEMENT_ATTEMPTS`] random placements for `ship`, returning
/// the first one that does not collide with `occupied`.
pub fn random_placement<const R: usize, const C: usize, G: Rng + ?Sized>(
    occupied: &Occupancy<R, C>,
    ship: ShipType,
    rng: &mut G,
) -> Result<Option<Placement>, PlacementError> {
    check_length::<R, C>(ship)?;
    let len = ship.length();
    for attempt in 1..=PLACEMENT_ATTEMPTS {
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let anchor = match orientation {
            Orientation::Horizontal if len <= C => {
                Coord::new(rng.random_range(0..R), rng.random_range(0..=C - len))
            }
            Orientation::Vertical if len <= R => {
                Coord::new(rng.random_range(0..=R - len), rng.random_range(0..C))
            }
            // ship only fits the other way round
            _ => continue,
        };
        let placement = Placement::new::<R, C>(ship, orientation, anchor)?;
        if (*occupied & placement.mask()).is_empty() {
            debug!(
                "{} at {} {:?} after {} attempt(s)",
                ship.name(),
                anchor,
                orientation,
                attempt
            );
            return Ok(Some(placement));
        }
    }
    Ok(None)
}

/// First collision-free placement in row-major order, horizontal before
/// vertical at each anchor.
pub fn fallback_placement<const R: usize, const C: usize>(
    occupied: &Occupancy<R, C>,
    ship: ShipType,
) -> Option<Placement> {
    (0..R)
        .flat_map(|row| (0..C).map(move |col| Coord::new(row, col)))
        .flat_map(|anchor| {
            [Orientation::Horizontal, Orientation::Vertical]
                .into_iter()
                .map(move |o| (anchor, o))
        })
        .filter_map(|(anchor, o)| Placement::new::<R, C>(ship, o, anchor).ok())
        .find(|p| (*occupied & p.mask()).is_empty())
}

/// Lay out every ship of `fleet` on a fresh truth grid. `R * C` may not
/// exceed 128 cells.
pub fn place_fleet<const R: usize, const C: usize, G: Rng + ?Sized>(
    fleet: &[ShipType],
    rng: &mut G,
) -> Result<Grid<R, C>, PlacementError> {
    let mut grid = Grid::<R, C>::new();
    let mut occupied = Occupancy::<R, C>::new();
    for &ship in fleet {
        let placement = match random_placement(&occupied, ship, rng)? {
            Some(p) => p,
            None => {
                warn!(
                    "{}: no free spot after {} random attempts, scanning grid",
                    ship.name(),
                    PLACEMENT_ATTEMPTS
                );
                fallback_placement(&occupied, ship)
                    .ok_or(PlacementError::NoRoom { name: ship.name() })?
            }
        };
        grid.place(&placement)?;
        occupied = occupied | placement.mask();
    }
    Ok(grid)
}
