//! A set of coordinates stored as a 64-bit mask, one bit per square.

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

use crate::coordinate::Coordinate;

/// A set of board coordinates.
///
/// Bit `i` is set when [`Coordinate::index`] `== i` is in the set, so
/// iteration yields coordinates in row-major order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CoordSet(u64);

impl CoordSet {
    /// The empty set.
    pub const EMPTY: CoordSet = CoordSet(0);

    /// Every square on the board.
    pub const FULL: CoordSet = CoordSet(!0);

    /// Create a set holding exactly one coordinate.
    #[inline]
    pub const fn single(c: Coordinate) -> CoordSet {
        CoordSet(1u64 << c.index())
    }

    /// Return `true` if the set holds no coordinates.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of coordinates in the set.
    #[inline]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Return `true` if `c` is in the set.
    #[inline]
    pub const fn contains(self, c: Coordinate) -> bool {
        (self.0 & (1u64 << c.index())) != 0
    }

    /// Add `c` to the set.
    #[inline]
    pub fn insert(&mut self, c: Coordinate) {
        self.0 |= 1u64 << c.index();
    }

    /// Remove `c` from the set.
    #[inline]
    pub fn remove(&mut self, c: Coordinate) {
        self.0 &= !(1u64 << c.index());
    }

    /// Return the first coordinate in row-major order, if any.
    #[inline]
    pub const fn first(self) -> Option<Coordinate> {
        if self.0 == 0 {
            None
        } else {
            Some(Coordinate::from_index_unchecked(self.0.trailing_zeros() as u8))
        }
    }
}

impl BitAnd for CoordSet {
    type Output = CoordSet;
    #[inline]
    fn bitand(self, rhs: CoordSet) -> CoordSet {
        CoordSet(self.0 & rhs.0)
    }
}

impl BitAndAssign for CoordSet {
    #[inline]
    fn bitand_assign(&mut self, rhs: CoordSet) {
        self.0 &= rhs.0;
    }
}

impl BitOr for CoordSet {
    type Output = CoordSet;
    #[inline]
    fn bitor(self, rhs: CoordSet) -> CoordSet {
        CoordSet(self.0 | rhs.0)
    }
}

impl BitOrAssign for CoordSet {
    #[inline]
    fn bitor_assign(&mut self, rhs: CoordSet) {
        self.0 |= rhs.0;
    }
}

impl Not for CoordSet {
    type Output = CoordSet;
    #[inline]
    fn not(self) -> CoordSet {
        CoordSet(!self.0)
    }
}

impl Iterator for CoordSet {
    type Item = Coordinate;

    #[inline]
    fn next(&mut self) -> Option<Coordinate> {
        let c = self.first()?;
        self.0 &= self.0 - 1;
        Some(c)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.0.count_ones() as usize;
        (count, Some(count))
    }
}

impl ExactSizeIterator for CoordSet {}

impl FromIterator<Coordinate> for CoordSet {
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> CoordSet {
        let mut set = CoordSet::EMPTY;
        for c in iter {
            set.insert(c);
        }
        set
    }
}

impl fmt::Debug for CoordSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(*self).finish()
    }
}

impl fmt::Display for CoordSet {
    /// Space-separated algebraic squares in row-major order, e.g. `e4 e3`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for c in *self {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{c}")?;
            first = false;
        }
        Ok(())
    }
}
