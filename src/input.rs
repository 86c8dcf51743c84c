//! Parsing of raw human coordinate input: a numeric row and a column letter.
//!
//! Only format is checked here. Whether the coordinate lies on the grid is
//! left to shot resolution, apart from rows no grid could have (negative or
//! too large to represent).

use core::num::IntErrorKind;

use crate::common::{Coord, InputError};

/// Parse a zero-based row number. Whole numbers that cannot name a row
/// (negative or too large to represent) are out of range, not malformed.
pub fn parse_row(text: &str) -> Result<usize, InputError> {
    let row = text.trim().parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => InputError::OutOfRange,
        _ => InputError::InvalidRow,
    })?;
    usize::try_from(row).map_err(|_| InputError::OutOfRange)
}

/// Parse a single column letter, case-insensitive, `A` being column 0.
pub fn parse_column(text: &str) -> Result<usize, InputError> {
    let mut chars = text.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if ch.is_ascii_alphabetic() => {
            Ok((ch.to_ascii_lowercase() as u8 - b'a') as usize)
        }
        _ => Err(InputError::InvalidColumn),
    }
}

/// Parse a row and a column into a coordinate.
pub fn parse_target(row: &str, col: &str) -> Result<Coord, InputError> {
    Ok(Coord::new(parse_row(row)?, parse_column(col)?))
}

/// Letter for a zero-based column index, if there is one.
pub fn column_letter(col: usize) -> Option<char> {
    u8::try_from(col)
        .ok()
        .filter(|c| *c < 26)
        .map(|c| (b'A' + c) as char)
}
