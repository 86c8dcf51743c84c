//! A fixed-size bit set over an `R×C` grid, packed into an unsigned integer.
//!
//! The type is `no_std` friendly and never allocates. Cell `(row, col)` lives
//! at bit `row * C + col`. Used for ship occupancy masks and for the
//! opponent's targeting memory.

use core::ops::{BitAnd, BitOr};
use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

use crate::common::Coord;

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitBoardError {
    /// Row or column index is outside `[0, R) × [0, C)`.
    IndexOutOfBounds { row: usize, col: usize },
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::IndexOutOfBounds { row, col } => {
                write!(f, "IndexOutOfBounds: row={}, col={}", row, col)
            }
        }
    }
}

/// A fixed-size `R×C` bitboard stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitBoard<T, const R: usize, const C: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const R: usize, const C: usize> BitBoard<T, R, C>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Number of usable bits in the board (`R * C`).
    pub const CELLS: usize = R * C;

    /// Evaluated when a board type is first used; a grid with more cells
    /// than `T` has bits fails to compile.
    const FITS: () = assert!(
        R * C <= mem::size_of::<T>() * 8,
        "grid has more cells than the bitboard's backing integer has bits"
    );

    /// Create an empty bitboard.
    ///
    /// ```compile_fail
    /// // 144 cells do not fit in 128 bits
    /// let _ = broadside::BitBoard::<u128, 12, 12>::new();
    /// ```
    #[inline]
    pub fn new() -> Self {
        let () = Self::FITS;
        BitBoard { bits: T::zero() }
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true if no bits are set.
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Returns true if every cell of the grid is set.
    pub fn is_full(&self) -> bool {
        self.count_ones() == Self::CELLS
    }

    /// Gets the bit at `coord`.
    pub fn get(&self, coord: Coord) -> Result<bool, BitBoardError> {
        let idx = Self::index(coord)?;
        Ok(((self.bits >> idx) & T::one()) != T::zero())
    }

    /// Same as [`BitBoard::get`], treating out-of-bounds cells as unset.
    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        self.get(coord).unwrap_or(false)
    }

    /// Sets the bit at `coord`.
    pub fn set(&mut self, coord: Coord) -> Result<(), BitBoardError> {
        let idx = Self::index(coord)?;
        self.bits = self.bits | (T::one() << idx);
        Ok(())
    }

    /// Clears the bit at `coord`.
    pub fn clear(&mut self, coord: Coord) -> Result<(), BitBoardError> {
        let idx = Self::index(coord)?;
        self.bits = self.bits & !(T::one() << idx);
        Ok(())
    }

    #[inline]
    fn index(coord: Coord) -> Result<usize, BitBoardError> {
        if coord.row >= R || coord.col >= C {
            Err(BitBoardError::IndexOutOfBounds {
                row: coord.row,
                col: coord.col,
            })
        } else {
            Ok(coord.row * C + coord.col)
        }
    }

    /// Iterator over the set cells in row-major order.
    #[inline]
    pub fn iter_set(&self) -> SetBits<T, R, C> {
        SetBits {
            board: *self,
            idx: 0,
        }
    }

    /// The `n`-th set cell in row-major order.
    pub fn nth_set(&self, n: usize) -> Option<Coord> {
        self.iter_set().nth(n)
    }
}

impl<T, const R: usize, const C: usize> Default for BitBoard<T, R, C>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const R: usize, const C: usize> fmt::Debug for BitBoard<T, R, C>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}x{}>:", R, C)?;
        for row in 0..R {
            for col in 0..C {
                let bit = if self.contains(Coord::new(row, col)) { '■' } else { '□' };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the set cells of a bitboard.
#[derive(Clone, Copy)]
pub struct SetBits<T, const R: usize, const C: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    board: BitBoard<T, R, C>,
    idx: usize,
}

impl<T, const R: usize, const C: usize> Iterator for SetBits<T, R, C>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        while self.idx < R * C {
            let idx = self.idx;
            self.idx += 1;
            if ((self.board.bits >> idx) & T::one()) != T::zero() {
                return Some(Coord::new(idx / C, idx % C));
            }
        }
        None
    }
}

impl<T, const R: usize, const C: usize> BitAnd for BitBoard<T, R, C>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        BitBoard {
            bits: self.bits & rhs.bits,
        }
    }
}

impl<T, const R: usize, const C: usize> BitOr for BitBoard<T, R, C>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        BitBoard {
            bits: self.bits | rhs.bits,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rectangular_indexing() {
        let mut bb = BitBoard::<u16, 3, 5>::new();
        bb.set(Coord::new(2, 4)).unwrap();
        bb.set(Coord::new(0, 1)).unwrap();
        assert!(bb.contains(Coord::new(2, 4)));
        assert!(!bb.contains(Coord::new(4, 2)));
        assert_eq!(
            bb.get(Coord::new(3, 0)),
            Err(BitBoardError::IndexOutOfBounds { row: 3, col: 0 })
        );
        let cells: std::vec::Vec<_> = bb.iter_set().collect();
        assert_eq!(cells, [Coord::new(0, 1), Coord::new(2, 4)]);
    }

    #[test]
    fn grid_may_use_every_bit() {
        let mut bb = BitBoard::<u128, 8, 16>::new();
        bb.set(Coord::new(7, 15)).unwrap();
        assert_eq!(bb.nth_set(0), Some(Coord::new(7, 15)));
        for row in 0..8 {
            for col in 0..16 {
                bb.set(Coord::new(row, col)).unwrap();
            }
        }
        assert!(bb.is_full());
        assert_eq!(bb.count_ones(), 128);
    }
}
