//! Error types for layout parsing, board validation, and move submission.

use crate::coordinate::Coordinate;

/// Errors that occur when parsing a layout string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// The layout has neither one nor two space-separated fields.
    #[error("expected a placement and an optional side field, found {found} fields")]
    WrongFieldCount {
        /// Number of fields found.
        found: usize,
    },
    /// The placement section does not have exactly 8 rows.
    #[error("expected 8 rows in placement, found {found}")]
    WrongRowCount {
        /// Number of rows found.
        found: usize,
    },
    /// A row in the placement describes more or fewer than 8 squares.
    #[error("row {row} describes {length} squares, expected 8")]
    BadRowLength {
        /// One-based row number.
        row: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the placement.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// The side field is not "w" or "b".
    #[error("invalid side to move: \"{found}\"")]
    InvalidColor {
        /// The invalid side string.
        found: String,
    },
    /// The parsed board fails structural validation.
    #[error("invalid board: {source}")]
    InvalidBoard {
        /// The underlying board validation error.
        #[from]
        source: BoardError,
    },
}

/// Errors from structural validation of a [`Position`](crate::position::Position).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A side does not have exactly one king.
    #[error("expected 1 king for {color}, found {count}")]
    InvalidKingCount {
        /// Which side has the wrong king count.
        color: &'static str,
        /// Number of kings found.
        count: usize,
    },
}

/// Reasons a submitted move is refused. The board is never touched when one
/// of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// There is no piece on the source square.
    #[error("no piece on {from}")]
    EmptySource {
        /// The selected square.
        from: Coordinate,
    },
    /// The piece on the source square belongs to the side not on move.
    #[error("the piece on {from} does not belong to the side to move")]
    WrongSide {
        /// The selected square.
        from: Coordinate,
    },
    /// The destination is not in the legal set of the selected piece.
    #[error("{from}{to} is not a legal move")]
    IllegalDestination {
        /// The selected square.
        from: Coordinate,
        /// The refused destination.
        to: Coordinate,
    },
}

#[cfg(test)]
mod tests {
    use super::{BoardError, LayoutError, MoveError};
    use crate::coordinate::Coordinate;

    #[test]
    fn layout_error_display() {
        let err = LayoutError::WrongRowCount { found: 7 };
        assert_eq!(format!("{err}"), "expected 8 rows in placement, found 7");
    }

    #[test]
    fn board_error_display() {
        let err = BoardError::InvalidKingCount { color: "white", count: 0 };
        assert_eq!(format!("{err}"), "expected 1 king for white, found 0");
    }

    #[test]
    fn layout_error_from_board_error() {
        let board_err = BoardError::InvalidKingCount { color: "black", count: 2 };
        let layout_err: LayoutError = board_err.into();
        assert!(matches!(layout_err, LayoutError::InvalidBoard { .. }));
    }

    #[test]
    fn move_error_display() {
        let from = Coordinate::from_algebraic("e2").unwrap();
        let to = Coordinate::from_algebraic("e5").unwrap();
        let err = MoveError::IllegalDestination { from, to };
        assert_eq!(format!("{err}"), "e2e5 is not a legal move");
    }
}
