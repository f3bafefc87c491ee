//! Static movement templates per piece identity.

use crate::color::Color;
use crate::piece_kind::PieceKind;

/// Compass directions. North decreases the row, East increases the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// All eight directions, clockwise from North.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Unit step as (Δrow, Δcolumn).
    #[inline]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
        }
    }
}

/// Inclusive range of step counts a sliding piece may travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Magnitude {
    pub min: u8,
    pub max: u8,
}

impl Magnitude {
    pub const fn new(min: u8, max: u8) -> Magnitude {
        Magnitude { min, max }
    }
}

/// How a piece moves, before any board is consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementRule {
    /// Step along each direction for every magnitude in range.
    Slide {
        directions: &'static [Direction],
        magnitude: Magnitude,
    },
    /// Land directly on each (Δrow, Δcolumn) offset.
    Jump { offsets: &'static [(i8, i8)] },
}

const ORTHOGONAL: [Direction; 4] = [
    Direction::North,
    Direction::East,
    Direction::South,
    Direction::West,
];

const DIAGONAL: [Direction; 4] = [
    Direction::NorthEast,
    Direction::SouthEast,
    Direction::SouthWest,
    Direction::NorthWest,
];

const WHITE_PAWN: [Direction; 3] = [Direction::North, Direction::NorthEast, Direction::NorthWest];
const BLACK_PAWN: [Direction; 3] = [Direction::South, Direction::SouthEast, Direction::SouthWest];

/// The eight knight offsets: every {±1, ±2} pairing with |Δrow| != |Δcolumn|.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-1, 2),
    (-2, 1),
    (1, 2),
    (2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

/// Longest slide on an 8x8 board.
const FULL_REACH: Magnitude = Magnitude::new(1, 7);

/// Pawn reach from the starting row; trimmed to one step elsewhere.
pub(crate) const PAWN_REACH: Magnitude = Magnitude::new(1, 2);

/// Look up the movement template for a piece.
///
/// Only the pawn depends on color: White advances toward row 1, Black toward
/// row 8.
pub const fn rules_for(kind: PieceKind, color: Color) -> MovementRule {
    match kind {
        PieceKind::Pawn => MovementRule::Slide {
            directions: match color {
                Color::White => &WHITE_PAWN,
                Color::Black => &BLACK_PAWN,
            },
            magnitude: PAWN_REACH,
        },
        PieceKind::Knight => MovementRule::Jump {
            offsets: &KNIGHT_OFFSETS,
        },
        PieceKind::Bishop => MovementRule::Slide {
            directions: &DIAGONAL,
            magnitude: FULL_REACH,
        },
        PieceKind::Rook => MovementRule::Slide {
            directions: &ORTHOGONAL,
            magnitude: FULL_REACH,
        },
        PieceKind::Queen => MovementRule::Slide {
            directions: &Direction::ALL,
            magnitude: FULL_REACH,
        },
        PieceKind::King => MovementRule::Slide {
            directions: &Direction::ALL,
            magnitude: Magnitude::new(1, 1),
        },
    }
}
