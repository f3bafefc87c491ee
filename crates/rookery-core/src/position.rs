//! Board state: piece placement on an 8x8 grid plus the captured-piece tally.

use std::fmt;

use crate::color::Color;
use crate::coord_set::CoordSet;
use crate::coordinate::Coordinate;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;

/// Back-rank order from column 1 to column 8.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Piece placement and captured pieces.
///
/// The grid is indexed directly by [`Coordinate::index`]. Two positions are
/// equal when both the placement and the captured list (including its order)
/// are equal.
#[derive(Clone, PartialEq, Eq)]
pub struct Position {
    squares: [Option<Piece>; Coordinate::COUNT],
    captured: Vec<Piece>,
}

impl Position {
    /// Return an empty board with nothing captured.
    pub fn empty() -> Position {
        Position {
            squares: [None; Coordinate::COUNT],
            captured: Vec::new(),
        }
    }

    /// Return the standard starting position: Black on rows 1-2, White on rows 7-8.
    pub fn starting_position() -> Position {
        let mut position = Position::empty();
        for color in Color::ALL {
            for (column, kind) in (1u8..=8).zip(BACK_RANK) {
                if let Some(c) = Coordinate::new(color.home_row(), column) {
                    position.place_piece(c, Piece::new(kind, color));
                }
                if let Some(c) = Coordinate::new(color.pawn_row(), column) {
                    position.place_piece(c, Piece::new(PieceKind::Pawn, color));
                }
            }
        }
        position
    }

    /// Return the piece on `c`, if any.
    #[inline]
    pub fn piece_at(&self, c: Coordinate) -> Option<Piece> {
        self.squares[c.index()]
    }

    /// Put `piece` on `c`, replacing whatever was there.
    #[inline]
    pub fn place_piece(&mut self, c: Coordinate, piece: Piece) {
        self.squares[c.index()] = Some(piece);
    }

    /// Empty the square `c`.
    #[inline]
    pub fn clear(&mut self, c: Coordinate) {
        self.squares[c.index()] = None;
    }

    /// Remove and return the piece on `c`.
    #[inline]
    pub fn take(&mut self, c: Coordinate) -> Option<Piece> {
        self.squares[c.index()].take()
    }

    /// Return `true` if `c` holds a piece.
    #[inline]
    pub fn is_occupied(&self, c: Coordinate) -> bool {
        self.squares[c.index()].is_some()
    }

    /// Return the color of the piece on `c`, if any.
    #[inline]
    pub fn color_at(&self, c: Coordinate) -> Option<Color> {
        self.piece_at(c).map(Piece::color)
    }

    /// Iterate over every occupied square of `color`, row-major.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Coordinate, Piece)> + '_ {
        Coordinate::all().filter_map(move |c| match self.piece_at(c) {
            Some(piece) if piece.color() == color => Some((c, piece)),
            _ => None,
        })
    }

    /// Return the set of occupied squares.
    pub fn occupied(&self) -> CoordSet {
        Coordinate::all().filter(|&c| self.is_occupied(c)).collect()
    }

    /// Return the first square (row-major) holding `piece`.
    pub fn find_piece(&self, piece: Piece) -> Option<Coordinate> {
        Coordinate::all().find(|&c| self.piece_at(c) == Some(piece))
    }

    /// Return every square holding `piece`.
    pub fn find_pieces(&self, piece: Piece) -> CoordSet {
        Coordinate::all()
            .filter(|&c| self.piece_at(c) == Some(piece))
            .collect()
    }

    /// Return the king square of `color`, if the king is on the board.
    pub fn king_square(&self, color: Color) -> Option<Coordinate> {
        self.find_piece(Piece::new(PieceKind::King, color))
    }

    /// Pieces removed from the board, in capture order.
    #[inline]
    pub fn captured(&self) -> &[Piece] {
        &self.captured
    }

    /// Append a piece to the captured tally.
    #[inline]
    pub(crate) fn record_capture(&mut self, piece: Piece) {
        self.captured.push(piece);
    }

    /// Validate the structural integrity of the board.
    pub fn validate(&self) -> Result<(), BoardError> {
        for color in Color::ALL {
            let count = self.find_pieces(Piece::new(PieceKind::King, color)).len();
            if count != 1 {
                return Err(BoardError::InvalidKingCount {
                    color: color.name(),
                    count,
                });
            }
        }
        Ok(())
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyPosition<'_> {
        PrettyPosition(self)
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::empty()
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position(\"{}\", captured: {:?})", self, self.captured)
    }
}

/// Wrapper for pretty-printing a position as an 8x8 grid, row 1 at the top.
pub struct PrettyPosition<'a>(&'a Position);

impl fmt::Display for PrettyPosition<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let position = self.0;
        for row in 1u8..=8 {
            write!(f, "{}  ", 9 - row)?;
            for column in 1u8..=8 {
                let c = match Coordinate::new(row, column).and_then(|c| position.piece_at(c)) {
                    Some(piece) => piece.layout_char(),
                    None => '.',
                };
                if column < 8 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
