//! Chess legality engine: board state, move generation, attack detection,
//! and trial-based self-check filtering.

mod attack;
mod chess_move;
mod color;
mod coord_set;
mod coordinate;
mod error;
mod game;
mod layout;
pub mod movegen;
pub mod perft;
mod piece;
mod piece_kind;
mod position;
mod trial;

pub use attack::{evaluate_board_state, is_target_attackable, AttackRecord};
pub use chess_move::Move;
pub use color::Color;
pub use coord_set::CoordSet;
pub use coordinate::Coordinate;
pub use error::{BoardError, LayoutError, MoveError};
pub use game::{Game, GameStatus};
pub use layout::{parse_layout, STARTING_LAYOUT};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use position::{Position, PrettyPosition};
pub use trial::{Trial, TrialExecutor};
