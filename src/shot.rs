//! Shot resolution against a side's truth and display grids.

use log::debug;

use crate::common::{Coord, ShotError, ShotResult};
use crate::grid::{Cell, Grid};

/// Fire at `coord`, marking both grids with the result.
///
/// Out-of-range and already-resolved coordinates are rejected before either
/// grid is touched.
pub fn resolve<const R: usize, const C: usize>(
    truth: &mut Grid<R, C>,
    display: &mut Grid<R, C>,
    coord: Coord,
) -> Result<ShotResult, ShotError> {
    let out_of_range = ShotError::OutOfRange {
        row: coord.row,
        col: coord.col,
    };
    let current = truth.get(coord).ok_or(out_of_range)?;
    if display.get(coord).is_none() {
        return Err(out_of_range);
    }
    if current.is_resolved() {
        return Err(ShotError::AlreadyTargeted(coord));
    }
    let (result, mark) = if current.is_ship() {
        (ShotResult::Hit, Cell::Hit)
    } else {
        (ShotResult::Miss, Cell::Miss)
    };
    for grid in [truth, display] {
        if let Some(cell) = grid.cell_mut(coord) {
            *cell = mark;
        }
    }
    debug!("shot at {} -> {:?}", coord, result);
    Ok(result)
}
