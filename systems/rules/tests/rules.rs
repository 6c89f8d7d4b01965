use life_trail_core::{CellMask, GridDimensions};
use life_trail_system_rules::{is_active, neighbour_count, next_mask};

fn mask_from_rows(rows: &[&str]) -> CellMask {
    let dimensions = GridDimensions::new(rows[0].len() as u32, rows.len() as u32);
    let cells: Vec<bool> = rows
        .iter()
        .flat_map(|row| row.chars().map(|cell| cell == '*'))
        .collect();
    CellMask::from_fn(dimensions, |index| cells[index])
}

fn rows_of(mask: &CellMask) -> Vec<String> {
    let columns = mask.dimensions().columns() as usize;
    mask.cells()
        .chunks(columns)
        .map(|row| {
            row.iter()
                .map(|value| if *value == 1 { '*' } else { '.' })
                .collect()
        })
        .collect()
}

#[test]
fn blinker_oscillates_with_period_two() {
    let vertical = mask_from_rows(&[".....", "..*..", "..*..", "..*..", "....."]);
    let horizontal = next_mask(&vertical);
    assert_eq!(
        rows_of(&horizontal),
        vec![".....", ".....", ".***.", ".....", "....."]
    );
    assert_eq!(next_mask(&horizontal), vertical);
}

#[test]
fn block_is_still_life() {
    let block = mask_from_rows(&["....", ".**.", ".**.", "...."]);
    assert_eq!(next_mask(&block), block);
}

#[test]
fn glider_crosses_the_seam() {
    let glider = mask_from_rows(&["......", "......", "......", "....*.", ".....*", "...***"]);
    let mut mask = glider.clone();
    for _ in 0..4 {
        mask = next_mask(&mask);
    }
    assert_eq!(
        rows_of(&mask),
        vec!["*...**", "......", "......", "......", ".....*", "*....."]
    );
    assert_eq!(mask.alive_count(), glider.alive_count());
}

#[test]
fn birth_requires_exactly_three_neighbours() {
    let two = mask_from_rows(&["*.*", "...", "..."]);
    assert_eq!(neighbour_count(&two, 1, 1), 2);
    assert!(!is_active(&two, 1, 1));

    let three = mask_from_rows(&["*.*", "...", ".*."]);
    assert_eq!(neighbour_count(&three, 1, 1), 3);
    assert!(is_active(&three, 1, 1));

    let four = mask_from_rows(&["*.*", "...", "*.*"]);
    assert_eq!(neighbour_count(&four, 1, 1), 4);
    assert!(!is_active(&four, 1, 1));
}

#[test]
fn overcrowded_cell_dies() {
    let crowded = mask_from_rows(&["*****", "*****", "*****", "*****", "*****"]);
    assert_eq!(neighbour_count(&crowded, 2, 2), 8);
    assert!(!is_active(&crowded, 2, 2));
}
