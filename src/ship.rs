//! Ship definitions and straight-line placements.

use crate::bitboard::BitBoard;
use crate::common::{Coord, PlacementError};
use crate::grid::Cell;

/// Orientation of a ship on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Cell marker written to the truth grid for this orientation.
    pub fn cell(self) -> Cell {
        match self {
            Orientation::Horizontal => Cell::ShipHorizontal,
            Orientation::Vertical => Cell::ShipVertical,
        }
    }
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

/// A ship laid out on an `R×C` grid, starting at `anchor` and extending right
/// (horizontal) or down (vertical).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    ship: ShipType,
    orientation: Orientation,
    anchor: Coord,
}

impl Placement {
    /// Build a placement, checking that every segment lies inside `R×C`.
    pub fn new<const R: usize, const C: usize>(
        ship: ShipType,
        orientation: Orientation,
        anchor: Coord,
    ) -> Result<Self, PlacementError> {
        let len = ship.length();
        if len == 0 {
            return Err(PlacementError::InvalidLength {
                name: ship.name(),
                length: len,
            });
        }
        let fits = match orientation {
            Orientation::Horizontal => anchor.row < R && anchor.col + len <= C,
            Orientation::Vertical => anchor.col < C && anchor.row + len <= R,
        };
        if !fits {
            return Err(PlacementError::OutOfBounds { name: ship.name() });
        }
        Ok(Self {
            ship,
            orientation,
            anchor,
        })
    }

    pub fn ship(&self) -> ShipType {
        self.ship
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn anchor(&self) -> Coord {
        self.anchor
    }

    /// The consecutive cells covered by this ship, starting at the anchor.
    pub fn cells(&self) -> impl Iterator<Item = Coord> {
        let Coord { row, col } = self.anchor;
        let orientation = self.orientation;
        (0..self.ship.length()).map(move |i| match orientation {
            Orientation::Horizontal => Coord::new(row, col + i),
            Orientation::Vertical => Coord::new(row + i, col),
        })
    }

    /// Occupancy mask of this ship.
    pub fn mask<const R: usize, const C: usize>(&self) -> BitBoard<u128, R, C> {
        let mut mask = BitBoard::new();
        for coord in self.cells() {
            // cells are bounds-checked in `new`
            let _ = mask.set(coord);
        }
        mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CRUISER: ShipType = ShipType::new("Cruiser", 3);

    #[test]
    fn cells_follow_orientation() {
        let p = Placement::new::<10, 10>(CRUISER, Orientation::Vertical, Coord::new(7, 2)).unwrap();
        let cells: Vec<_> = p.cells().collect();
        assert_eq!(cells, [Coord::new(7, 2), Coord::new(8, 2), Coord::new(9, 2)]);
        assert_eq!(p.mask::<10, 10>().count_ones(), 3);
    }

    #[test]
    fn rejects_overhang() {
        assert_eq!(
            Placement::new::<10, 10>(CRUISER, Orientation::Horizontal, Coord::new(0, 8)),
            Err(PlacementError::OutOfBounds { name: "Cruiser" })
        );
        let raft = ShipType::new("Raft", 0);
        assert_eq!(
            Placement::new::<10, 10>(raft, Orientation::Horizontal, Coord::new(0, 0)),
            Err(PlacementError::InvalidLength { name: "Raft", length: 0 })
        );
    }
}
