//! Fixed-size cell matrix holding one state per cell.

use core::fmt;

use crate::common::{Coord, PlacementError};
use crate::config::{COLS, HIT_ICON, HORIZONTAL_ICON, MISS_ICON, ROWS, SEA_ICON, VERTICAL_ICON};
use crate::input::column_letter;
use crate::ship::Placement;

/// State of a single grid cell.
///
/// Cells only ever move from `Empty`/`Ship*` to `Hit` or `Miss`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    ShipHorizontal,
    ShipVertical,
    Hit,
    Miss,
}

impl Cell {
    /// Display symbol for the cell.
    pub fn icon(self) -> char {
        match self {
            Cell::Empty => SEA_ICON,
            Cell::ShipHorizontal => HORIZONTAL_ICON,
            Cell::ShipVertical => VERTICAL_ICON,
            Cell::Hit => HIT_ICON,
            Cell::Miss => MISS_ICON,
        }
    }

    /// An untouched ship segment.
    pub fn is_ship(self) -> bool {
        matches!(self, Cell::ShipHorizontal | Cell::ShipVertical)
    }

    /// Already hit or missed.
    pub fn is_resolved(self) -> bool {
        matches!(self, Cell::Hit | Cell::Miss)
    }
}

/// Cell counts per state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tally {
    pub sea: usize,
    pub ships: usize,
    pub hits: usize,
    pub misses: usize,
}

impl Tally {
    pub fn total(&self) -> usize {
        self.sea + self.ships + self.hits + self.misses
    }
}

/// An `R×C` grid of cells.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Grid<const R: usize, const C: usize> {
    cells: [[Cell; C]; R],
}

/// The standard game grid.
pub type Board = Grid<ROWS, COLS>;

impl<const R: usize, const C: usize> Grid<R, C> {
    /// A grid of open sea.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; C]; R],
        }
    }

    /// Cell at `coord`, or `None` if outside the grid.
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.cells.get(coord.row)?.get(coord.col).copied()
    }

    pub(crate) fn cell_mut(&mut self, coord: Coord) -> Option<&mut Cell> {
        self.cells.get_mut(coord.row)?.get_mut(coord.col)
    }

    /// Write a ship onto the grid. Fails without touching the grid if any of
    /// its cells is already taken.
    pub fn place(&mut self, placement: &Placement) -> Result<(), PlacementError> {
        let name = placement.ship().name();
        for coord in placement.cells() {
            match self.get(coord) {
                None => return Err(PlacementError::OutOfBounds { name }),
                Some(Cell::Empty) => {}
                Some(_) => return Err(PlacementError::Overlaps { name }),
            }
        }
        let marker = placement.orientation().cell();
        for coord in placement.cells() {
            if let Some(cell) = self.cell_mut(coord) {
                *cell = marker;
            }
        }
        Ok(())
    }

    /// Row-major iterator over every coordinate and its cell.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(move |(c, cell)| (Coord::new(r, c), *cell))
        })
    }

    pub fn tally(&self) -> Tally {
        self.iter().fold(Tally::default(), |mut t, (_, cell)| {
            match cell {
                Cell::Empty => t.sea += 1,
                Cell::ShipHorizontal | Cell::ShipVertical => t.ships += 1,
                Cell::Hit => t.hits += 1,
                Cell::Miss => t.misses += 1,
            }
            t
        })
    }
}

impl<const R: usize, const C: usize> Default for Grid<R, C> {
    fn default() -> Self {
        Self::new()
    }
}

/// Lettered column header, numbered rows, one icon per cell.
impl<const R: usize, const C: usize> fmt::Display for Grid<R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label_width = digits(R.saturating_sub(1));
        write!(f, "{:w$}", "", w = label_width)?;
        for c in 0..C {
            write!(f, " {}", column_letter(c).unwrap_or('?'))?;
        }
        for (r, row) in self.cells.iter().enumerate() {
            writeln!(f)?;
            write!(f, "{:>w$}", r, w = label_width)?;
            for cell in row {
                write!(f, " {}", cell.icon())?;
            }
        }
        Ok(())
    }
}

impl<const R: usize, const C: usize> fmt::Debug for Grid<R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid<{}x{}> {:?}", R, C, self.tally())?;
        write!(f, "{}", self)
    }
}

fn digits(mut n: usize) -> usize {
    let mut len = 1;
    while n >= 10 {
        n /= 10;
        len += 1;
    }
    len
}
