//! Game state and the fully legal move surface.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::attack::{evaluate_board_state, is_target_attackable, AttackRecord};
use crate::chess_move::Move;
use crate::color::Color;
use crate::coord_set::CoordSet;
use crate::coordinate::Coordinate;
use crate::error::{BoardError, LayoutError, MoveError};
use crate::layout::parse_layout;
use crate::movegen::{compute_path, map_moves, rules_for};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::trial::TrialExecutor;

/// Outcome of asking whether the side to move can continue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    /// Return `true` if no further moves are possible.
    pub const fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameStatus::Ongoing => "ongoing",
            GameStatus::Check => "check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
        };
        f.write_str(s)
    }
}

/// The authoritative board, its trial scratch space, and whose turn it is.
///
/// Queries take `&mut self` because legality is decided by trialling each
/// candidate on the working board and reverting.
#[derive(Debug, Clone)]
pub struct Game {
    working: Position,
    trials: TrialExecutor,
    side_to_move: Color,
    last_attack: Option<AttackRecord>,
}

impl Game {
    /// Start a new game from the standard position, White to move.
    pub fn new() -> Game {
        Game {
            working: Position::starting_position(),
            trials: TrialExecutor::new(),
            side_to_move: Color::White,
            last_attack: None,
        }
    }

    /// Start from an arbitrary position after validating it.
    pub fn from_position(position: Position, side_to_move: Color) -> Result<Game, BoardError> {
        position.validate()?;
        Ok(Game {
            working: position,
            trials: TrialExecutor::new(),
            side_to_move,
            last_attack: None,
        })
    }

    /// Return to the starting position.
    pub fn reset(&mut self) {
        *self = Game::new();
        debug!("game reset");
    }

    /// The authoritative board.
    #[inline]
    pub fn position(&self) -> &Position {
        &self.working
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// The record left by the last [`Game::is_king_attacked`] call.
    #[inline]
    pub fn attack_record(&self) -> Option<AttackRecord> {
        self.last_attack
    }

    /// Return `true` if `color`'s king is attacked, remembering the attacker.
    pub fn is_king_attacked(&mut self, color: Color) -> bool {
        self.last_attack = is_target_attackable(color, PieceKind::King, &self.working);
        self.last_attack.is_some()
    }

    /// Fully legal destinations for the piece on `from`.
    ///
    /// Empty when the square is empty or holds a piece of the side not to move.
    pub fn legal_moves_from(&mut self, from: Coordinate) -> CoordSet {
        match self.working.piece_at(from) {
            Some(piece) if piece.color() == self.side_to_move => {
                let mask = self.check_mask(piece.color());
                self.legal_destinations(from, piece, mask)
            }
            _ => CoordSet::EMPTY,
        }
    }

    /// Every fully legal move for the side to move, row-major by source square.
    pub fn legal_moves(&mut self) -> Vec<Move> {
        let mover = self.side_to_move;
        let mask = self.check_mask(mover);
        let pieces: Vec<(Coordinate, Piece)> = self.working.pieces_of(mover).collect();

        let mut moves = Vec::new();
        for (from, piece) in pieces {
            let destinations = self.legal_destinations(from, piece, mask);
            moves.extend(destinations.map(|to| Move::new(from, to)));
        }
        moves
    }

    /// Return `true` if any piece of `color` has a legal move.
    pub fn has_any_legal_move(&mut self, color: Color) -> bool {
        let mask = self.check_mask(color);
        let pieces: Vec<(Coordinate, Piece)> = self.working.pieces_of(color).collect();
        pieces
            .into_iter()
            .any(|(from, piece)| !self.legal_destinations(from, piece, mask).is_empty())
    }

    /// Decide check, checkmate, or stalemate for the side to move.
    pub fn status(&mut self) -> GameStatus {
        let mover = self.side_to_move;
        let in_check = self.is_king_attacked(mover);
        match (in_check, self.has_any_legal_move(mover)) {
            (true, true) => GameStatus::Check,
            (true, false) => GameStatus::Checkmate,
            (false, true) => GameStatus::Ongoing,
            (false, false) => GameStatus::Stalemate,
        }
    }

    /// Play `from` -> `to` for the side to move.
    ///
    /// Returns the captured piece. Rejected moves leave the game untouched.
    pub fn apply_move(&mut self, from: Coordinate, to: Coordinate) -> Result<Option<Piece>, MoveError> {
        let piece = self
            .working
            .piece_at(from)
            .ok_or(MoveError::EmptySource { from })?;
        if piece.color() != self.side_to_move {
            return Err(MoveError::WrongSide { from });
        }
        if !self.legal_moves_from(from).contains(to) {
            return Err(MoveError::IllegalDestination { from, to });
        }

        let captured = self.commit_move(from, to, piece);
        debug!(%from, %to, ?captured, next = %self.side_to_move, "move applied");
        Ok(captured)
    }

    /// Commit an already-validated move and pass the turn.
    pub(crate) fn commit_move(&mut self, from: Coordinate, to: Coordinate, piece: Piece) -> Option<Piece> {
        let captured = self.trials.trial(&mut self.working, from, to, piece).commit();
        self.side_to_move = self.side_to_move.flip();
        self.last_attack = None;
        captured
    }

    /// Squares a non-king piece of `mover` may move to: the full board when
    /// not in check, otherwise the attacker plus the line back to the king.
    fn check_mask(&self, mover: Color) -> CoordSet {
        match is_target_attackable(mover, PieceKind::King, &self.working) {
            Some(record) => {
                CoordSet::single(record.attacker_square)
                    | compute_path(record.victim_square, record.attacker_square, &self.working)
            }
            None => CoordSet::FULL,
        }
    }

    fn legal_destinations(&mut self, from: Coordinate, piece: Piece, check_mask: CoordSet) -> CoordSet {
        let mut candidates = map_moves(rules_for(piece.kind(), piece.color()), piece, from, &self.working);
        if piece.kind() != PieceKind::King {
            candidates &= check_mask;
        }
        candidates
            .filter(|&to| self.keeps_king_safe(from, to, piece))
            .collect()
    }

    /// Trial the move on the working board and report whether the mover's
    /// king survives. The trial is always reverted.
    fn keeps_king_safe(&mut self, from: Coordinate, to: Coordinate, piece: Piece) -> bool {
        let trial = self.trials.trial(&mut self.working, from, to, piece);
        let safe = evaluate_board_state(trial.position(), piece.color());
        drop(trial);
        safe
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl FromStr for Game {
    type Err = LayoutError;

    /// Parse `"<placement> [w|b]"`.
    fn from_str(s: &str) -> Result<Game, LayoutError> {
        let (position, side) = parse_layout(s)?;
        Ok(Game::from_position(position, side)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Coordinate {
        Coordinate::from_algebraic(s).unwrap()
    }

    fn set(squares: &[&str]) -> CoordSet {
        squares.iter().map(|s| sq(s)).collect()
    }

    fn play(game: &mut Game, moves: &[&str]) {
        for text in moves {
            let mv = Move::from_text(text).unwrap();
            game.apply_move(mv.from(), mv.to())
                .unwrap_or_else(|e| panic!("{text}: {e}"));
        }
    }

    #[test]
    fn opening_moves() {
        let mut game = Game::new();
        assert_eq!(game.legal_moves().len(), 20);
        assert_eq!(game.legal_moves_from(sq("e2")), set(&["e3", "e4"]));
        assert_eq!(game.legal_moves_from(sq("b1")), set(&["a3", "c3"]));
        assert!(game.legal_moves_from(sq("e7")).is_empty(), "not Black's turn");
        assert!(game.legal_moves_from(sq("e4")).is_empty(), "empty square");
        assert_eq!(game.status(), GameStatus::Ongoing);
    }

    #[test]
    fn pinned_knight_cannot_move() {
        let mut game: Game = "4k3/4r3/8/8/8/8/4N3/4K3 w".parse().unwrap();
        assert!(game.legal_moves_from(sq("e2")).is_empty());
        // The working board is restored after every trial.
        assert_eq!(game.position().piece_at(sq("e2")), Some(Piece::WHITE_KNIGHT));
        assert!(game.position().captured().is_empty());
    }

    #[test]
    fn pinned_rook_slides_along_the_pin() {
        let mut game: Game = "4k3/4r3/8/8/8/8/4R3/4K3 w".parse().unwrap();
        assert_eq!(
            game.legal_moves_from(sq("e2")),
            set(&["e3", "e4", "e5", "e6", "e7"])
        );
    }

    #[test]
    fn check_is_answered_by_interposition_or_king_move() {
        let mut game: Game = "4k3/4r3/8/8/8/8/3B4/R3K3 w".parse().unwrap();
        assert!(game.is_king_attacked(Color::White));
        let record = game.attack_record().unwrap();
        assert_eq!(record.attacker_square, sq("e7"));
        assert_eq!(record.victim_square, sq("e1"));

        assert_eq!(game.legal_moves_from(sq("d2")), set(&["e3"]));
        assert!(game.legal_moves_from(sq("a1")).is_empty());
        assert_eq!(game.legal_moves_from(sq("e1")), set(&["d1", "f1", "f2"]));
        assert_eq!(game.status(), GameStatus::Check);
    }

    #[test]
    fn knight_check_is_answered_by_capture() {
        let mut game: Game = "4k3/8/8/8/8/3n4/8/3RK3 w".parse().unwrap();
        assert_eq!(game.legal_moves_from(sq("d1")), set(&["d3"]));
        assert_eq!(game.legal_moves_from(sq("e1")), set(&["d2", "e2", "f1"]));

        let captured = game.apply_move(sq("d1"), sq("d3")).unwrap();
        assert_eq!(captured, Some(Piece::BLACK_KNIGHT));
        assert_eq!(game.position().captured(), &[Piece::BLACK_KNIGHT]);
        assert_eq!(game.side_to_move(), Color::Black);
    }

    #[test]
    fn double_check_leaves_only_king_moves() {
        let mut game: Game = "7k/4r3/8/8/1b6/8/2N5/4K3 w".parse().unwrap();
        assert!(game.legal_moves_from(sq("c2")).is_empty());
        let moves = game.legal_moves();
        assert!(moves.iter().all(|mv| mv.from() == sq("e1")));
        assert_eq!(moves.len(), 3);
    }

    #[test]
    fn king_cannot_step_into_attack() {
        let mut game: Game = "3rk3/8/8/8/8/8/8/4K3 w".parse().unwrap();
        assert_eq!(game.legal_moves_from(sq("e1")), set(&["e2", "f1", "f2"]));
    }

    #[test]
    fn fools_mate() {
        let mut game = Game::new();
        play(&mut game, &["f2f3", "e7e5", "g2g4", "d8h4"]);
        assert_eq!(game.status(), GameStatus::Checkmate);
        assert!(game.status().is_over());
        assert_eq!(game.attack_record().map(|r| r.attacker), Some(Piece::BLACK_QUEEN));
        assert!(!game.has_any_legal_move(Color::White));
        assert!(game.has_any_legal_move(Color::Black));
    }

    #[test]
    fn stalemate() {
        let mut game: Game = "7k/5Q2/6K1/8/8/8/8/8 b".parse().unwrap();
        assert!(!game.is_king_attacked(Color::Black));
        assert_eq!(game.status(), GameStatus::Stalemate);
        assert!(game.legal_moves().is_empty());
    }

    #[test]
    fn rejected_moves_leave_the_board_untouched() {
        let mut game = Game::new();
        let before = game.position().clone();

        assert_eq!(
            game.apply_move(sq("e4"), sq("e5")),
            Err(MoveError::EmptySource { from: sq("e4") })
        );
        assert_eq!(
            game.apply_move(sq("e7"), sq("e5")),
            Err(MoveError::WrongSide { from: sq("e7") })
        );
        assert_eq!(
            game.apply_move(sq("d1"), sq("d2")),
            Err(MoveError::IllegalDestination { from: sq("d1"), to: sq("d2") })
        );
        assert_eq!(
            game.apply_move(sq("e2"), sq("e5")),
            Err(MoveError::IllegalDestination { from: sq("e2"), to: sq("e5") })
        );

        assert_eq!(game.position(), &before);
        assert_eq!(game.side_to_move(), Color::White);
    }

    #[test]
    fn turns_alternate_and_captures_accumulate() {
        let mut game = Game::new();
        play(&mut game, &["e2e4", "d7d5", "e4d5", "d8d5"]);
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(game.position().captured(), &[Piece::BLACK_PAWN, Piece::WHITE_PAWN]);
        assert_eq!(game.position().piece_at(sq("d5")), Some(Piece::BLACK_QUEEN));
    }

    #[test]
    fn reset_restores_the_start() {
        let mut game = Game::new();
        play(&mut game, &["g1f3"]);
        game.reset();
        assert_eq!(game.position(), &Position::starting_position());
        assert_eq!(game.side_to_move(), Color::White);
    }

    #[test]
    fn layout_without_kings_is_rejected() {
        let result = "8/8/8/8/8/8/8/8 w".parse::<Game>();
        assert!(matches!(result, Err(LayoutError::InvalidBoard { .. })));
    }
}
