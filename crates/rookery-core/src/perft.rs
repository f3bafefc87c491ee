//! Perft (performance test) for move generation correctness verification.

use crate::coordinate::Coordinate;
use crate::game::Game;

/// Count the number of leaf nodes at the given depth.
///
/// Depth 0 returns 1 (the current position). Depth 1 returns the number
/// of legal moves without playing any of them.
pub fn perft(game: &Game, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut game = game.clone();
    let moves = game.legal_moves();

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in moves {
        nodes += perft(&child(&game, mv.from(), mv.to()), depth - 1);
    }
    nodes
}

/// Run perft with per-move breakdown (useful for debugging).
///
/// Returns a vector of `(move_text, node_count)` pairs sorted alphabetically.
/// Depth 0 has no root moves to break down, so the result is empty.
pub fn divide(game: &Game, depth: usize) -> Vec<(String, u64)> {
    if depth == 0 {
        return Vec::new();
    }
    let mut game = game.clone();
    let mut results: Vec<(String, u64)> = game
        .legal_moves()
        .into_iter()
        .map(|mv| {
            let next = child(&game, mv.from(), mv.to());
            let count = if depth <= 1 { 1 } else { perft(&next, depth - 1) };
            (mv.to_string(), count)
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}

/// Copy `game` and play a move already known to be legal.
fn child(game: &Game, from: Coordinate, to: Coordinate) -> Game {
    let mut next = game.clone();
    if let Some(piece) = next.position().piece_at(from) {
        next.commit_move(from, to, piece);
    }
    next
}
