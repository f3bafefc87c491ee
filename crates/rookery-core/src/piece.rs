//! Placed piece: identity plus color, bit-packed into a single byte.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;

/// A colored piece as it sits on a square.
///
/// Bit layout:
/// - bits 0-2: [`PieceKind`] (values 0-5)
/// - bit 3: [`Color`] (0 = White, 1 = Black)
///
/// An empty square is `None` wherever an `Option<Piece>` is used.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece(u8);

impl Piece {
    pub const WHITE_PAWN: Piece = Piece::new(PieceKind::Pawn, Color::White);
    pub const WHITE_KNIGHT: Piece = Piece::new(PieceKind::Knight, Color::White);
    pub const WHITE_BISHOP: Piece = Piece::new(PieceKind::Bishop, Color::White);
    pub const WHITE_ROOK: Piece = Piece::new(PieceKind::Rook, Color::White);
    pub const WHITE_QUEEN: Piece = Piece::new(PieceKind::Queen, Color::White);
    pub const WHITE_KING: Piece = Piece::new(PieceKind::King, Color::White);

    pub const BLACK_PAWN: Piece = Piece::new(PieceKind::Pawn, Color::Black);
    pub const BLACK_KNIGHT: Piece = Piece::new(PieceKind::Knight, Color::Black);
    pub const BLACK_BISHOP: Piece = Piece::new(PieceKind::Bishop, Color::Black);
    pub const BLACK_ROOK: Piece = Piece::new(PieceKind::Rook, Color::Black);
    pub const BLACK_QUEEN: Piece = Piece::new(PieceKind::Queen, Color::Black);
    pub const BLACK_KING: Piece = Piece::new(PieceKind::King, Color::Black);

    /// Create a piece from a kind and a color.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        Piece((color as u8) << 3 | (kind as u8))
    }

    /// Parse a layout character into a piece.
    ///
    /// Uppercase letters produce White pieces; lowercase letters produce Black pieces.
    #[inline]
    pub fn from_layout_char(c: char) -> Option<Piece> {
        let kind = PieceKind::from_layout_char(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece::new(kind, color))
    }

    /// Return the piece kind (the lower 3 bits).
    #[inline]
    pub const fn kind(self) -> PieceKind {
        match self.0 & 0x07 {
            0 => PieceKind::Pawn,
            1 => PieceKind::Knight,
            2 => PieceKind::Bishop,
            3 => PieceKind::Rook,
            4 => PieceKind::Queen,
            _ => PieceKind::King,
        }
    }

    /// Return the color (bit 3).
    #[inline]
    pub const fn color(self) -> Color {
        match self.0 >> 3 {
            0 => Color::White,
            _ => Color::Black,
        }
    }

    /// Return `true` if `other` belongs to the opposing side.
    #[inline]
    pub const fn is_enemy_of(self, other: Piece) -> bool {
        (self.0 >> 3) != (other.0 >> 3)
    }

    /// Return the layout character: uppercase for White, lowercase for Black.
    #[inline]
    pub fn layout_char(self) -> char {
        let base = self.kind().layout_char();
        match self.color() {
            Color::White => base.to_ascii_uppercase(),
            Color::Black => base,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.layout_char())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color_prefix = match self.color() {
            Color::White => 'W',
            Color::Black => 'B',
        };
        let kind_char = self.kind().layout_char().to_ascii_uppercase();
        write!(f, "{}{}", color_prefix, kind_char)
    }
}

#[cfg(test)]
mod tests {
    use super::Piece;
    use crate::color::Color;
    use crate::piece_kind::PieceKind;

    #[test]
    fn new_roundtrip() {
        for color in Color::ALL {
            for kind in PieceKind::ALL {
                let piece = Piece::new(kind, color);
                assert_eq!(piece.kind(), kind, "kind mismatch for {color:?} {kind:?}");
                assert_eq!(piece.color(), color, "color mismatch for {color:?} {kind:?}");
            }
        }
    }

    #[test]
    fn from_layout_char_case_sensitivity() {
        assert_eq!(Piece::from_layout_char('R'), Some(Piece::WHITE_ROOK));
        assert_eq!(Piece::from_layout_char('k'), Some(Piece::BLACK_KING));
        assert_eq!(Piece::from_layout_char('n'), Some(Piece::BLACK_KNIGHT));
        assert_eq!(Piece::from_layout_char('x'), None);
        assert_eq!(Piece::from_layout_char(' '), None);
    }

    #[test]
    fn enemies() {
        assert!(Piece::WHITE_PAWN.is_enemy_of(Piece::BLACK_PAWN));
        assert!(Piece::BLACK_QUEEN.is_enemy_of(Piece::WHITE_KING));
        assert!(!Piece::WHITE_PAWN.is_enemy_of(Piece::WHITE_KING));
    }

    #[test]
    fn display_and_debug() {
        assert_eq!(format!("{}", Piece::WHITE_KING), "K");
        assert_eq!(format!("{}", Piece::BLACK_PAWN), "p");
        assert_eq!(format!("{:?}", Piece::WHITE_ROOK), "WR");
        assert_eq!(format!("{:?}", Piece::BLACK_QUEEN), "BQ");
    }
}
