#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Seed templates that populate a freshly created grid.
//!
//! Named patterns are fixed ASCII templates centred within the target grid.
//! [`Pattern::Random`] instead draws independent per-cell noise from the
//! supplied random number generator, so callers control determinism.

use life_trail_core::{CellMask, GridDimensions, Pattern};
use rand::Rng;
use tracing::debug;

/// Probability that a cell starts alive under [`Pattern::Random`].
pub const RANDOM_DENSITY: f64 = 0.2;

/// Footprint reported for [`Pattern::Random`], which has no fixed template.
pub const RANDOM_FOOTPRINT: GridDimensions = GridDimensions::new(10, 10);

const LIVE_CELL: char = '*';

const BLINKER: &[&str] = &[
    "     ",
    "  *  ",
    "  *  ",
    "  *  ",
    "     ",
];

const PULSAR: &[&str] = &[
    "               ",
    "   ***   ***   ",
    "               ",
    " *    * *    * ",
    " *    * *    * ",
    " *    * *    * ",
    "   ***   ***   ",
    "               ",
    "   ***   ***   ",
    " *    * *    * ",
    " *    * *    * ",
    " *    * *    * ",
    "               ",
    "   ***   ***   ",
    "               ",
];

const GLIDER: &[&str] = &[
    "     ",
    " *   ",
    "  ** ",
    " **  ",
    "     ",
];

const LIGHTWEIGHT_SPACESHIP: &[&str] = &[
    "       ",
    " *  *  ",
    "     * ",
    " *   * ",
    "  **** ",
    "       ",
];

const GOSPER_GLIDER_GUN: &[&str] = &[
    "                                      ",
    "                         *            ",
    "                       * *            ",
    "             **      **            ** ",
    "            *   *    **            ** ",
    " **        *     *   **               ",
    " **        *   * **    * *            ",
    "           *     *       *            ",
    "            *   *                     ",
    "             **                       ",
    "                                      ",
];

const FLOTILLA: &[&str] = &[
    "                 ",
    "     ****        ",
    "    ******       ",
    "   ** ****       ",
    "    **           ",
    "                 ",
    "            **   ",
    "  *            * ",
    " *             * ",
    " *               ",
    " **************  ",
    "                 ",
    "                 ",
    "     ****        ",
    "    ******       ",
    "   ** ****       ",
    "    **           ",
    "                 ",
];

/// Returns the fixed template for a named pattern, or `None` for [`Pattern::Random`].
#[must_use]
pub const fn template(pattern: Pattern) -> Option<&'static [&'static str]> {
    match pattern {
        Pattern::Blinker => Some(BLINKER),
        Pattern::Pulsar => Some(PULSAR),
        Pattern::Glider => Some(GLIDER),
        Pattern::LightweightSpaceship => Some(LIGHTWEIGHT_SPACESHIP),
        Pattern::GosperGliderGun => Some(GOSPER_GLIDER_GUN),
        Pattern::Flotilla => Some(FLOTILLA),
        Pattern::Random => None,
    }
}

/// Size of the area a pattern occupies, used to preview or size a grid.
#[must_use]
pub fn pattern_dimensions(pattern: Pattern) -> GridDimensions {
    template(pattern).map_or(RANDOM_FOOTPRINT, template_dimensions)
}

/// Produces the initial liveness mask for `pattern` on a grid of `dimensions`.
///
/// Templates are centred using `floor((grid - template) / 2)` on each axis.
/// Template cells that land outside the grid are dropped, so a template larger
/// than the grid contributes only its centred visible slice.
pub fn pattern_data<R: Rng + ?Sized>(
    pattern: Pattern,
    dimensions: GridDimensions,
    rng: &mut R,
) -> CellMask {
    match template(pattern) {
        Some(rows) => centred_template(rows, dimensions),
        None => CellMask::from_fn(dimensions, |_| rng.gen_bool(RANDOM_DENSITY)),
    }
}

/// Reports whether the pattern's template does not fit inside the grid.
#[must_use]
pub fn exceeds_grid(pattern: Pattern, dimensions: GridDimensions) -> bool {
    template(pattern).is_some_and(|rows| {
        let footprint = template_dimensions(rows);
        footprint.columns() > dimensions.columns() || footprint.rows() > dimensions.rows()
    })
}

fn template_dimensions(rows: &[&str]) -> GridDimensions {
    let width = rows.first().map_or(0, |row| row.len());
    GridDimensions::new(width as u32, rows.len() as u32)
}

fn centred_template(rows: &[&str], dimensions: GridDimensions) -> CellMask {
    let footprint = template_dimensions(rows);
    let column_offset = centring_offset(dimensions.columns(), footprint.columns());
    let row_offset = centring_offset(dimensions.rows(), footprint.rows());

    let mut mask = CellMask::dead(dimensions);
    let mut dropped = 0_usize;
    for (row, line) in (0_i64..).zip(rows.iter()) {
        for (column, cell) in (0_i64..).zip(line.chars()) {
            if cell != LIVE_CELL {
                continue;
            }
            let target_column = column_offset + column;
            let target_row = row_offset + row;
            if dimensions.contains(target_column, target_row) {
                mask.set_alive(target_column, target_row);
            } else {
                dropped += 1;
            }
        }
    }

    if dropped > 0 {
        debug!(
            dropped,
            columns = dimensions.columns(),
            rows = dimensions.rows(),
            "template truncated to the visible grid"
        );
    }
    mask
}

fn centring_offset(grid: u32, template: u32) -> i64 {
    (i64::from(grid) - i64::from(template)).div_euclid(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn templates_are_rectangular() {
        for pattern in Pattern::ALL {
            let Some(rows) = template(pattern) else {
                continue;
            };
            let width = rows[0].len();
            assert!(
                rows.iter().all(|row| row.len() == width),
                "{pattern} has ragged rows"
            );
        }
    }

    #[test]
    fn centring_offset_floors_towards_negative() {
        assert_eq!(centring_offset(6, 5), 0);
        assert_eq!(centring_offset(10, 5), 2);
        assert_eq!(centring_offset(6, 15), -5);
        assert_eq!(centring_offset(5, 6), -1);
    }
}
