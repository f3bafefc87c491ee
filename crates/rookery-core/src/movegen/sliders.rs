//! Raw destinations for direction-and-magnitude movers.

use crate::coord_set::CoordSet;
use crate::coordinate::Coordinate;

use super::rules::{Direction, Magnitude};

/// Step `from` along each direction for every magnitude in range.
///
/// A direction stops extending at its first off-board step. Occupancy is not
/// consulted here.
pub(super) fn expand_slides(directions: &[Direction], magnitude: Magnitude, from: Coordinate) -> CoordSet {
    let mut raw = CoordSet::EMPTY;
    for &direction in directions {
        let (d_row, d_column) = direction.delta();
        for step in magnitude.min..=magnitude.max {
            let step = step as i8;
            match from.offset(d_row * step, d_column * step) {
                Some(c) => raw.insert(c),
                None => break,
            }
        }
    }
    raw
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: u8, column: u8) -> Coordinate {
        Coordinate::new(row, column).unwrap()
    }

    #[test]
    fn rook_lines_from_corner() {
        let directions = [Direction::North, Direction::East, Direction::South, Direction::West];
        let raw = expand_slides(&directions, Magnitude::new(1, 7), at(8, 1));
        assert_eq!(raw.len(), 14);
        assert!(raw.contains(at(1, 1)));
        assert!(raw.contains(at(8, 8)));
    }

    #[test]
    fn magnitude_bounds_are_inclusive() {
        let raw = expand_slides(&[Direction::North], Magnitude::new(1, 2), at(7, 4));
        assert_eq!(raw, [at(6, 4), at(5, 4)].into_iter().collect());
    }

    #[test]
    fn edge_cuts_direction_short() {
        let raw = expand_slides(&Direction::ALL, Magnitude::new(1, 1), at(1, 1));
        assert_eq!(raw.len(), 3);
    }
}
