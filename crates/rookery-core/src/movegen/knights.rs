//! Raw destinations for jumping movers.

use crate::coord_set::CoordSet;
use crate::coordinate::Coordinate;

/// Land on every offset that stays on the board. Each offset is checked on its own.
pub(super) fn expand_jumps(offsets: &[(i8, i8)], from: Coordinate) -> CoordSet {
    offsets
        .iter()
        .filter_map(|&(d_row, d_column)| from.offset(d_row, d_column))
        .collect()
}
