#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure Game of Life rule evaluation over immutable liveness masks.
//!
//! Every function reads a [`CellMask`] snapshot and never mutates it, so all
//! cells evaluated within one tick observe the same prior generation.

use life_trail_core::CellMask;

const NEIGHBOUR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

const BIRTH_COUNT: u8 = 3;
const SURVIVAL_COUNTS: [u8; 2] = [2, 3];

/// Sums the eight toroidal neighbours of the cell at `(column, row)`.
#[must_use]
pub fn neighbour_count(mask: &CellMask, column: u32, row: u32) -> u8 {
    let column = i64::from(column);
    let row = i64::from(row);
    NEIGHBOUR_OFFSETS
        .iter()
        .map(|(dc, dr)| mask.value(column + dc, row + dr))
        .sum()
}

/// Decides whether the cell at `(column, row)` is alive in the next generation.
///
/// A live cell survives with two or three live neighbours; a dead cell is born
/// with exactly three.
#[must_use]
pub fn is_active(mask: &CellMask, column: u32, row: u32) -> bool {
    let neighbours = neighbour_count(mask, column, row);
    let index = mask
        .dimensions()
        .to_index(i64::from(column), i64::from(row));
    if mask.is_alive(index) {
        SURVIVAL_COUNTS.contains(&neighbours)
    } else {
        neighbours == BIRTH_COUNT
    }
}

/// Evaluates [`is_active`] for every cell against the same input mask.
#[must_use]
pub fn next_mask(mask: &CellMask) -> CellMask {
    let dimensions = mask.dimensions();
    CellMask::from_fn(dimensions, |index| {
        let coord = dimensions.coord_of(index);
        is_active(mask, coord.column(), coord.row())
    })
}
