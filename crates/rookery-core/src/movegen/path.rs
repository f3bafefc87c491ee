//! Line-of-sight analysis between two squares.

use crate::coord_set::CoordSet;
use crate::coordinate::Coordinate;
use crate::position::Position;

/// Unit step from `from` toward `to`, if the two share a row, a column, or a
/// diagonal. Identical squares are not aligned.
pub fn line_step(from: Coordinate, to: Coordinate) -> Option<(i8, i8)> {
    let d_row = to.row() as i8 - from.row() as i8;
    let d_column = to.column() as i8 - from.column() as i8;

    if d_row == 0 && d_column == 0 {
        return None;
    }
    if d_row != 0 && d_column != 0 && d_row.abs() != d_column.abs() {
        return None;
    }
    Some((d_row.signum(), d_column.signum()))
}

/// Squares walked from just after `from` up to and including `to`.
///
/// Returns the empty set when the squares are not aligned or when any square
/// strictly between them is occupied. An occupied `to` is still included: it
/// is the capture square.
pub fn compute_path(from: Coordinate, to: Coordinate, board: &Position) -> CoordSet {
    let Some((d_row, d_column)) = line_step(from, to) else {
        return CoordSet::EMPTY;
    };

    let mut path = CoordSet::EMPTY;
    let mut current = from;
    while let Some(next) = current.offset(d_row, d_column) {
        path.insert(next);
        if next == to {
            return path;
        }
        if board.is_occupied(next) {
            return CoordSet::EMPTY;
        }
        current = next;
    }

    // Aligned squares are always reached before the edge.
    CoordSet::EMPTY
}

/// Return `true` if nothing stands strictly between `from` and `to` on a straight line.
#[inline]
pub fn is_line_clear(from: Coordinate, to: Coordinate, board: &Position) -> bool {
    !compute_path(from, to, board).is_empty()
}
