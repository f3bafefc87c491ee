//! Pseudo-legal move generation: movement templates filtered by occupancy.
//!
//! Nothing here knows about check. [`crate::game::Game`] layers check
//! narrowing and self-check exclusion on top.

mod knights;
mod path;
mod pawns;
mod rules;
mod sliders;

pub use self::path::{compute_path, is_line_clear, line_step};
pub use self::rules::{rules_for, Direction, Magnitude, MovementRule, KNIGHT_OFFSETS};

use crate::coord_set::CoordSet;
use crate::coordinate::Coordinate;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;

use self::knights::expand_jumps;
use self::sliders::expand_slides;

/// Expand `rule` from `from` and keep the destinations `piece` may legally
/// reach on `board`, ignoring check.
///
/// `piece` need not actually stand on `from`; attack detection asks about
/// pieces in place, but the board passed in is always the one consulted.
pub fn map_moves(rule: MovementRule, piece: Piece, from: Coordinate, board: &Position) -> CoordSet {
    let raw = match rule {
        MovementRule::Slide { directions, magnitude } => {
            let magnitude = match piece.kind() {
                PieceKind::Pawn => pawns::reach(piece, from, magnitude),
                _ => magnitude,
            };
            expand_slides(directions, magnitude, from)
        }
        MovementRule::Jump { offsets } => expand_jumps(offsets, from),
    };

    raw.filter(|&to| is_move_legal(board, piece, from, to)).collect()
}

/// Return `true` if `piece` moving `from` -> `to` is legal on `board`,
/// ignoring check.
///
/// A friendly occupant always blocks. Knights ignore everything in between;
/// pawns follow their own capture rules; every other piece needs a clear line.
pub fn is_move_legal(board: &Position, piece: Piece, from: Coordinate, to: Coordinate) -> bool {
    if board
        .piece_at(to)
        .is_some_and(|occupant| !occupant.is_enemy_of(piece))
    {
        return false;
    }

    match piece.kind() {
        PieceKind::Knight => true,
        PieceKind::Pawn => pawns::is_pawn_move_legal(board, piece, from, to),
        _ => is_line_clear(from, to, board),
    }
}

/// Pseudo-legal destinations for whatever stands on `from`. Empty when the square is empty.
pub fn pseudo_legal_moves(board: &Position, from: Coordinate) -> CoordSet {
    match board.piece_at(from) {
        Some(piece) => map_moves(rules_for(piece.kind(), piece.color()), piece, from, board),
        None => CoordSet::EMPTY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    fn sq(s: &str) -> Coordinate {
        Coordinate::from_algebraic(s).unwrap()
    }

    fn set(squares: &[&str]) -> CoordSet {
        squares.iter().map(|s| sq(s)).collect()
    }

    #[test]
    fn starting_position_has_twenty_moves_per_side() {
        let board = Position::starting_position();
        for color in Color::ALL {
            let total: usize = board
                .pieces_of(color)
                .map(|(from, _)| pseudo_legal_moves(&board, from).len())
                .sum();
            assert_eq!(total, 20, "{color:?}");
        }
    }

    #[test]
    fn starting_pawn_and_knight() {
        let board = Position::starting_position();
        assert_eq!(pseudo_legal_moves(&board, sq("e2")), set(&["e3", "e4"]));
        assert_eq!(pseudo_legal_moves(&board, sq("g1")), set(&["f3", "h3"]));
        assert_eq!(pseudo_legal_moves(&board, sq("d7")), set(&["d6", "d5"]));
        assert!(pseudo_legal_moves(&board, sq("a1")).is_empty());
        assert!(pseudo_legal_moves(&board, sq("e4")).is_empty());
    }

    #[test]
    fn knight_ignores_surrounding_pieces() {
        let mut board: Position = "8/8/8/3PPP2/3PNP2/3PPP2/8/8".parse().unwrap();
        let from = sq("e4");
        assert_eq!(pseudo_legal_moves(&board, from).len(), 8);

        // A friendly piece on a landing square removes only that square.
        board.place_piece(sq("f6"), Piece::WHITE_BISHOP);
        assert_eq!(pseudo_legal_moves(&board, from).len(), 7);
    }

    #[test]
    fn rook_stops_at_blockers() {
        let board: Position = "8/8/8/8/1p1R2P1/8/8/8".parse().unwrap();
        let moves = pseudo_legal_moves(&board, sq("d4"));
        assert!(moves.contains(sq("b4")), "enemy blocker can be captured");
        assert!(!moves.contains(sq("a4")));
        assert!(moves.contains(sq("f4")));
        assert!(!moves.contains(sq("g4")), "friendly blocker stays");
        assert_eq!(moves.len(), 2 + 2 + 7);
    }

    #[test]
    fn pawn_reach_trimmed_off_start_row() {
        let board: Position = "8/8/8/8/8/4P3/8/8".parse().unwrap();
        assert_eq!(pseudo_legal_moves(&board, sq("e3")), set(&["e4"]));
    }

    #[test]
    fn pawn_captures_only_diagonally() {
        let board: Position = "8/8/8/3ppp2/4P3/8/8/8".parse().unwrap();
        assert_eq!(pseudo_legal_moves(&board, sq("e4")), set(&["d5", "f5"]));
    }

    #[test]
    fn map_moves_uses_the_given_board() {
        let board = Position::empty();
        let moves = map_moves(
            rules_for(PieceKind::Bishop, Color::Black),
            Piece::BLACK_BISHOP,
            sq("a1"),
            &board,
        );
        assert_eq!(moves.len(), 7);
    }

    #[test]
    fn same_color_destination_is_illegal() {
        let board = Position::starting_position();
        assert!(!is_move_legal(&board, Piece::WHITE_QUEEN, sq("d1"), sq("d2")));
        assert!(!is_move_legal(&board, Piece::WHITE_KNIGHT, sq("g1"), sq("e2")));
    }
}
