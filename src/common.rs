//! Common types: coordinates, shot results and the error taxonomy.

use core::fmt;

use crate::input::column_letter;

/// A zero-based `(row, col)` position on a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// True if the coordinate lies inside a `rows × cols` grid.
    pub const fn in_bounds(&self, rows: usize, cols: usize) -> bool {
        self.row < rows && self.col < cols
    }
}

/// Column as a letter followed by the row label, e.g. `D3`.
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match column_letter(self.col) {
            Some(letter) => write!(f, "{}{}", letter, self.row),
            None => write!(f, "({}, {})", self.row, self.col),
        }
    }
}

/// Result of a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotResult {
    /// The shot struck a ship segment.
    Hit,
    /// The shot landed in open sea.
    Miss,
}

/// Errors returned by shot resolution. Neither mutates any grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotError {
    /// Coordinate lies outside the grid.
    OutOfRange { row: usize, col: usize },
    /// Cell at this coordinate was already hit or missed.
    AlreadyTargeted(Coord),
}

impl fmt::Display for ShotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotError::OutOfRange { row, col } => {
                write!(f, "Coordinate (row {}, column {}) is out of range", row, col)
            }
            ShotError::AlreadyTargeted(c) => {
                write!(f, "Coordinate {} has already been targeted", c)
            }
        }
    }
}

/// Errors returned while laying out a fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Ship length is zero or longer than both grid dimensions.
    InvalidLength { name: &'static str, length: usize },
    /// No free straight run is left anywhere on the grid for this ship.
    NoRoom { name: &'static str },
    /// Anchor and orientation put part of the ship off the grid.
    OutOfBounds { name: &'static str },
    /// Ship would share a cell with one already placed.
    Overlaps { name: &'static str },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::InvalidLength { name, length } => {
                write!(f, "{} has length {} which cannot fit the grid", name, length)
            }
            PlacementError::NoRoom { name } => write!(f, "No room left to place {}", name),
            PlacementError::OutOfBounds { name } => {
                write!(f, "{} extends past the grid edge", name)
            }
            PlacementError::Overlaps { name } => write!(f, "{} overlaps another ship", name),
        }
    }
}

/// Errors produced while parsing raw human input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// Row text is not an integer.
    InvalidRow,
    /// Column text is not a single letter.
    InvalidColumn,
    /// Well-formed but can never be on the grid (e.g. a negative row).
    OutOfRange,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::InvalidRow => write!(f, "Row must be a whole number"),
            InputError::InvalidColumn => write!(f, "Column must be a single letter"),
            InputError::OutOfRange => write!(f, "Coordinate is out of range"),
        }
    }
}

/// Errors returned by [`crate::Match`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchError {
    /// The shot itself was rejected.
    Shot(ShotError),
    /// The match already has an outcome.
    Finished,
    /// Every cell of the grid has already been targeted.
    TargetsExhausted,
}

impl From<ShotError> for MatchError {
    fn from(err: ShotError) -> Self {
        MatchError::Shot(err)
    }
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::Shot(e) => write!(f, "{}", e),
            MatchError::Finished => write!(f, "Match is already over"),
            MatchError::TargetsExhausted => write!(f, "No untargeted cells remain"),
        }
    }
}
