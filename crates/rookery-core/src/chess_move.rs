//! A move as a (from, to) coordinate pair.

use std::fmt;

use crate::coordinate::Coordinate;

/// A piece relocation from one square to another.
///
/// Text form is the two squares in algebraic notation, e.g. `e2e4`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Coordinate,
    to: Coordinate,
}

impl Move {
    /// Create a move.
    #[inline]
    pub const fn new(from: Coordinate, to: Coordinate) -> Move {
        Move { from, to }
    }

    /// Parse `e2e4`-style text. Returns `None` for anything else.
    pub fn from_text(s: &str) -> Option<Move> {
        if s.len() != 4 || !s.is_ascii() {
            return None;
        }
        let from = Coordinate::from_algebraic(&s[0..2])?;
        let to = Coordinate::from_algebraic(&s[2..4])?;
        Some(Move::new(from, to))
    }

    /// Source square.
    #[inline]
    pub const fn from(self) -> Coordinate {
        self.from
    }

    /// Destination square.
    #[inline]
    pub const fn to(self) -> Coordinate {
        self.to
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self})")
    }
}
