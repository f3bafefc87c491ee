//! Attack detection: can any enemy piece reach a given target?

use crate::color::Color;
use crate::coord_set::CoordSet;
use crate::coordinate::Coordinate;
use crate::movegen::{map_moves, rules_for};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;

/// The first attacker/victim pair found by [`is_target_attackable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackRecord {
    pub attacker_square: Coordinate,
    pub attacker: Piece,
    pub victim_square: Coordinate,
    pub victim: Piece,
}

/// Squares holding the target. Single-instance kinds stop at the first match.
fn target_squares(target: Piece, board: &Position) -> CoordSet {
    if target.kind().is_single_instance() {
        board
            .find_piece(target)
            .map_or(CoordSet::EMPTY, CoordSet::single)
    } else {
        board.find_pieces(target)
    }
}

/// Return the first enemy piece whose pseudo-legal moves reach a piece of
/// `target_kind` and `target_color` on `board`.
///
/// Targets are visited in row-major order and, for each, attackers in
/// row-major order. `None` when nothing attacks or the target is absent.
pub fn is_target_attackable(
    target_color: Color,
    target_kind: PieceKind,
    board: &Position,
) -> Option<AttackRecord> {
    let victim = Piece::new(target_kind, target_color);
    let attacker_color = target_color.flip();

    for victim_square in target_squares(victim, board) {
        for (attacker_square, attacker) in board.pieces_of(attacker_color) {
            let rule = rules_for(attacker.kind(), attacker_color);
            if map_moves(rule, attacker, attacker_square, board).contains(victim_square) {
                return Some(AttackRecord {
                    attacker_square,
                    attacker,
                    victim_square,
                    victim,
                });
            }
        }
    }
    None
}

/// Return `true` if `mover`'s king is safe on `board`.
#[inline]
pub fn evaluate_board_state(board: &Position, mover: Color) -> bool {
    is_target_attackable(mover, PieceKind::King, board).is_none()
}
