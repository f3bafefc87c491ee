//! Pawn-specific reach and legality.

use crate::coordinate::Coordinate;
use crate::piece::Piece;
use crate::position::Position;

use super::path::is_line_clear;
use super::rules::Magnitude;

/// Trim the pawn template to a single step unless the pawn stands on its
/// starting row.
///
/// The starting row is judged from the absolute row alone; there is no
/// per-piece moved flag.
pub(super) fn reach(pawn: Piece, from: Coordinate, template: Magnitude) -> Magnitude {
    if from.row() == pawn.color().pawn_row() {
        template
    } else {
        Magnitude::new(template.min, template.min)
    }
}

/// Pawn-specific destination rules.
///
/// A column change is a capture: exactly one column over, one row forward,
/// onto an enemy. A straight advance needs an empty destination and an empty
/// skipped square on a double step.
pub(super) fn is_pawn_move_legal(board: &Position, pawn: Piece, from: Coordinate, to: Coordinate) -> bool {
    if from.column() != to.column() {
        return from.column().abs_diff(to.column()) == 1
            && from.row().abs_diff(to.row()) == 1
            && board.piece_at(to).is_some_and(|occupant| occupant.is_enemy_of(pawn));
    }

    !board.is_occupied(to) && is_line_clear(from, to, board)
}
