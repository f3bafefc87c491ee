//! Piece colors.

use std::fmt;
use std::ops::Not;

/// The color of a piece: White or Black.
///
/// An empty square has no color; callers express that as `Option<Color>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    /// Both colors, White first.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// Return the opposite color.
    #[inline]
    pub const fn flip(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row the pawns of this color start on.
    ///
    /// Row 1 is Black's home rank, so Black pawns start on row 2 and White
    /// pawns on row 7.
    #[inline]
    pub const fn pawn_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 2,
        }
    }

    /// Row the major pieces of this color start on.
    #[inline]
    pub const fn home_row(self) -> u8 {
        match self {
            Color::White => 8,
            Color::Black => 1,
        }
    }

    /// Lowercase name, used in log fields and error messages.
    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

impl Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Color {
        self.flip()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "w"),
            Color::Black => write!(f, "b"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn flip_roundtrip() {
        assert_eq!(Color::White.flip(), Color::Black);
        assert_eq!(Color::Black.flip(), Color::White);
        assert_eq!(Color::White.flip().flip(), Color::White);
    }

    #[test]
    fn not_operator() {
        assert_eq!(!Color::White, Color::Black);
        assert_eq!(!Color::Black, Color::White);
    }

    #[test]
    fn start_rows_face_each_other() {
        assert_eq!(Color::Black.home_row(), 1);
        assert_eq!(Color::Black.pawn_row(), 2);
        assert_eq!(Color::White.pawn_row(), 7);
        assert_eq!(Color::White.home_row(), 8);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Color::White), "w");
        assert_eq!(format!("{}", Color::Black), "b");
        assert_eq!(Color::Black.name(), "black");
    }
}
