//! Board coordinates as (row, column) pairs in `1..=8`.

use std::fmt;

/// Smallest valid row or column.
pub const MIN_INDEX: u8 = 1;
/// Largest valid row or column.
pub const MAX_INDEX: u8 = 8;

/// A square on the board, addressed by row and column, both in `1..=8`.
///
/// Row 1 is Black's home rank and row 8 is White's. Internally the pair is
/// stored as a single index `(row - 1) * 8 + (column - 1)`, so iteration over
/// [`Coordinate::all`] is row-major starting at (1, 1).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coordinate(u8);

impl Coordinate {
    /// Total number of coordinates.
    pub const COUNT: usize = 64;

    /// Create a coordinate, returning `None` if either component is outside `1..=8`.
    #[inline]
    pub const fn new(row: u8, column: u8) -> Option<Coordinate> {
        if row < MIN_INDEX || row > MAX_INDEX || column < MIN_INDEX || column > MAX_INDEX {
            None
        } else {
            Some(Coordinate((row - 1) * 8 + (column - 1)))
        }
    }

    /// Create a coordinate from a zero-based index, returning `None` if out of range.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Coordinate> {
        if index < 64 {
            Some(Coordinate(index))
        } else {
            None
        }
    }

    /// Create a coordinate from a zero-based index without bounds checking.
    #[inline]
    pub(crate) const fn from_index_unchecked(index: u8) -> Coordinate {
        debug_assert!(index < 64);
        Coordinate(index)
    }

    /// Parse algebraic notation ("e2") into a coordinate.
    ///
    /// Files `a..h` map to columns 1..8; rank `r` maps to row `9 - r`.
    pub fn from_algebraic(s: &str) -> Option<Coordinate> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }

        let file_byte = bytes[0];
        let rank_byte = bytes[1];

        if !(b'a'..=b'h').contains(&file_byte) || !(b'1'..=b'8').contains(&rank_byte) {
            return None;
        }

        let column = file_byte - b'a' + 1;
        let row = 9 - (rank_byte - b'0');
        Coordinate::new(row, column)
    }

    /// Return the zero-based index (0..63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Return the row (1..=8).
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 8 + 1
    }

    /// Return the column (1..=8).
    #[inline]
    pub const fn column(self) -> u8 {
        self.0 % 8 + 1
    }

    /// Step by a signed (row, column) delta, returning `None` if it leaves the board.
    #[inline]
    pub const fn offset(self, d_row: i8, d_column: i8) -> Option<Coordinate> {
        let row = self.row() as i8 + d_row;
        let column = self.column() as i8 + d_column;
        if row < MIN_INDEX as i8 || row > MAX_INDEX as i8 {
            return None;
        }
        if column < MIN_INDEX as i8 || column > MAX_INDEX as i8 {
            return None;
        }
        Coordinate::new(row as u8, column as u8)
    }

    /// Iterate over all 64 coordinates, row-major from (1, 1) to (8, 8).
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0u8..64).map(Coordinate)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.column() - 1) as char;
        let rank = 9 - self.row();
        write!(f, "{file}{rank}")
    }
}

impl fmt::Debug for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row(), self.column())
    }
}
