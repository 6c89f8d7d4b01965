#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Life Trail engine.
//!
//! This crate defines the vocabulary that connects adapters, the authoritative
//! simulator, and pure systems. Adapters submit [`Command`] values describing
//! desired transitions, the simulator executes those commands via the world's
//! `apply` entry point, and then broadcasts [`Event`] values for systems to
//! react to deterministically. Grid addressing lives here as well so that every
//! crate agrees on how a `(column, row)` pair wraps around the torus.

use std::{fmt, str::FromStr, time::Duration};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Commands that express all permissible simulator transitions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Seeds the activation record from the configured pattern.
    Seed,
    /// Advances the simulation clock by the provided delta time.
    Tick {
        /// Duration of wall time that elapsed since the previous tick.
        dt: Duration,
    },
    /// Computes the next generation and decodes it with the provided trail.
    Advance {
        /// History depth applied when decoding the new generation.
        trail: TrailSize,
    },
    /// Decodes the stored generation again without advancing it.
    Redecode {
        /// History depth applied when decoding the stored generation.
        trail: TrailSize,
    },
}

/// Events broadcast by the simulator and systems after processing commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Indicates that the simulation clock advanced.
    TimeAdvanced {
        /// Duration of wall time that elapsed in the tick.
        dt: Duration,
    },
    /// Publishes a freshly decoded snapshot of the activation record.
    GenerationDecoded {
        /// Snapshot produced by the simulator.
        generation: Generation,
    },
    /// Publishes population statistics derived from a decoded generation.
    CensusUpdated {
        /// Report computed by the census system.
        report: CensusReport,
    },
}

/// Seed templates that can populate a freshly created grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pattern {
    /// Period-two oscillator made of three cells in a line.
    Blinker,
    /// Period-three oscillator with four-fold symmetry.
    Pulsar,
    /// Smallest spaceship, travels diagonally every four generations.
    Glider,
    /// Orthogonal spaceship with period four.
    LightweightSpaceship,
    /// Gun that emits a new glider every thirty generations.
    GosperGliderGun,
    /// Heavyweight spaceship escorted by two lightweight ones.
    Flotilla,
    /// Independent per-cell noise rather than a fixed template.
    Random,
}

impl Pattern {
    /// Every pattern in presentation order.
    pub const ALL: [Pattern; 7] = [
        Self::Blinker,
        Self::Pulsar,
        Self::Glider,
        Self::LightweightSpaceship,
        Self::GosperGliderGun,
        Self::Flotilla,
        Self::Random,
    ];

    /// Stable identifier used in configuration files and on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Blinker => "blinker",
            Self::Pulsar => "pulsar",
            Self::Glider => "glider",
            Self::LightweightSpaceship => "lightweight_spaceship",
            Self::GosperGliderGun => "gosper_glider_gun",
            Self::Flotilla => "flotilla",
            Self::Random => "random",
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pattern {
    type Err = SettingsError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|pattern| pattern.name() == normalized)
            .ok_or_else(|| SettingsError::UnknownPattern(value.to_owned()))
    }
}

/// Reasons a simulator configuration may be rejected before construction.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// The grid must contain at least one column.
    #[error("grid must have at least one column")]
    ZeroColumns,
    /// The grid must contain at least one row.
    #[error("grid must have at least one row")]
    ZeroRows,
    /// The provided name does not match any known pattern.
    #[error("unknown pattern '{0}'")]
    UnknownPattern(String),
}

/// Immutable configuration of a single simulator instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Settings {
    columns: u32,
    rows: u32,
    pattern: Pattern,
}

impl Settings {
    /// Creates a new configuration from grid dimensions and a seed pattern.
    #[must_use]
    pub const fn new(columns: u32, rows: u32, pattern: Pattern) -> Self {
        Self {
            columns,
            rows,
            pattern,
        }
    }

    /// Number of columns in the grid.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of rows in the grid.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Pattern used to seed the initial generation.
    #[must_use]
    pub const fn pattern(&self) -> Pattern {
        self.pattern
    }

    /// Grid dimensions described by the configuration.
    #[must_use]
    pub const fn dimensions(&self) -> GridDimensions {
        GridDimensions::new(self.columns, self.rows)
    }

    /// Checks the preconditions the simulator relies upon.
    ///
    /// The simulator itself never validates; callers are expected to run this
    /// once before construction.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.columns == 0 {
            return Err(SettingsError::ZeroColumns);
        }
        if self.rows == 0 {
            return Err(SettingsError::ZeroRows);
        }
        Ok(())
    }
}

/// Size of the toroidal grid and the mapping between coordinates and indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridDimensions {
    columns: u32,
    rows: u32,
}

impl GridDimensions {
    /// Creates a new dimension descriptor. Both axes must be at least one.
    #[must_use]
    pub const fn new(columns: u32, rows: u32) -> Self {
        Self { columns, rows }
    }

    /// Number of columns in the grid.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of rows in the grid.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Total number of cells stored for the grid.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    /// Reports whether the coordinate lies inside the grid without wrapping.
    #[must_use]
    pub const fn contains(&self, column: i64, row: i64) -> bool {
        column >= 0 && row >= 0 && column < self.columns as i64 && row < self.rows as i64
    }

    /// Maps a coordinate to its flat row-major index, wrapping around both edges.
    ///
    /// A coordinate of `-1` addresses the last column or row and a coordinate
    /// equal to the grid size addresses the first one.
    #[must_use]
    pub fn to_index(&self, column: i64, row: i64) -> usize {
        let column = column.rem_euclid(i64::from(self.columns)) as usize;
        let row = row.rem_euclid(i64::from(self.rows)) as usize;
        row * self.columns as usize + column
    }

    /// Maps a flat index back to the coordinate it was derived from.
    #[must_use]
    pub fn coord_of(&self, index: usize) -> CellCoord {
        let columns = self.columns as usize;
        CellCoord::new((index % columns) as u32, (index / columns) as u32)
    }
}

/// Location of a single grid cell expressed as column and row coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    column: u32,
    row: u32,
}

impl CellCoord {
    /// Creates a new grid cell coordinate.
    #[must_use]
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Zero-based row index of the cell.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }
}

/// Dense 0/1 liveness flags for every cell of a grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellMask {
    dimensions: GridDimensions,
    cells: Vec<u8>,
}

impl CellMask {
    /// Creates a mask in which every cell is dead.
    #[must_use]
    pub fn dead(dimensions: GridDimensions) -> Self {
        Self {
            dimensions,
            cells: vec![0; dimensions.cell_count()],
        }
    }

    /// Creates a mask by asking `alive` about every flat index in order.
    #[must_use]
    pub fn from_fn(dimensions: GridDimensions, mut alive: impl FnMut(usize) -> bool) -> Self {
        let cells = (0..dimensions.cell_count())
            .map(|index| u8::from(alive(index)))
            .collect();
        Self { dimensions, cells }
    }

    /// Dimensions of the grid the mask describes.
    #[must_use]
    pub const fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    /// Raw 0/1 values in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Value of the cell at the wrapped coordinate.
    #[must_use]
    pub fn value(&self, column: i64, row: i64) -> u8 {
        self.cells[self.dimensions.to_index(column, row)]
    }

    /// Reports whether the cell at the flat index is alive.
    #[must_use]
    pub fn is_alive(&self, index: usize) -> bool {
        self.cells.get(index).is_some_and(|value| *value == 1)
    }

    /// Marks the cell at the wrapped coordinate as alive.
    pub fn set_alive(&mut self, column: i64, row: i64) {
        let index = self.dimensions.to_index(column, row);
        self.cells[index] = 1;
    }

    /// Number of alive cells in the mask.
    #[must_use]
    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|value| **value == 1).count()
    }

    /// Iterator over the flat indices of alive cells.
    pub fn iter_alive(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(index, value)| (*value == 1).then_some(index))
    }
}

/// Number of past generations retained when decoding ages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrailSize(u32);

impl TrailSize {
    /// Decodes only the cells alive in the current generation.
    pub const NONE: Self = Self(0);

    /// Creates a new trail size wrapper.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the number of retained generations.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Largest age a decoded cell may carry under this trail size.
    #[must_use]
    pub const fn max_age(&self) -> u32 {
        self.0.saturating_add(1)
    }
}

/// Decoded snapshot of the simulator handed to presentation layers.
///
/// Each entry of `cell_data` is an age: `0` for cells outside the trail
/// window, `1` for cells alive in generation `num`, and `k` for cells last
/// alive `k - 1` generations earlier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Generation {
    /// Generation number the snapshot was decoded at.
    pub num: u32,
    /// Per-cell ages in row-major order.
    #[serde(rename = "cellData")]
    pub cell_data: Vec<u32>,
}

impl Generation {
    /// Number of cells alive in the decoded generation.
    #[must_use]
    pub fn alive_count(&self) -> usize {
        self.cell_data.iter().filter(|age| **age == 1).count()
    }

    /// Number of cells that are part of the trail but not currently alive.
    #[must_use]
    pub fn trailing_count(&self) -> usize {
        self.cell_data.iter().filter(|age| **age > 1).count()
    }
}

/// Population statistics describing a single decoded generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CensusReport {
    generation: u32,
    alive: usize,
    trailing: usize,
    peak_alive: usize,
}

impl CensusReport {
    /// Creates a new census report.
    #[must_use]
    pub const fn new(generation: u32, alive: usize, trailing: usize, peak_alive: usize) -> Self {
        Self {
            generation,
            alive,
            trailing,
            peak_alive,
        }
    }

    /// Generation the report was computed for.
    #[must_use]
    pub const fn generation(&self) -> u32 {
        self.generation
    }

    /// Cells alive in the generation.
    #[must_use]
    pub const fn alive(&self) -> usize {
        self.alive
    }

    /// Cells visible only through the trail.
    #[must_use]
    pub const fn trailing(&self) -> usize {
        self.trailing
    }

    /// Highest alive count observed since the census started.
    #[must_use]
    pub const fn peak_alive(&self) -> usize {
        self.peak_alive
    }

    /// Reports whether the population died out.
    #[must_use]
    pub const fn is_extinct(&self) -> bool {
        self.alive == 0
    }
}

#[cfg(test)]
mod tests {
    use super::{CellMask, GridDimensions, Pattern, Settings, SettingsError, TrailSize};

    #[test]
    fn to_index_wraps_columns_for_every_row() {
        let dimensions = GridDimensions::new(7, 4);
        for row in 0..4 {
            assert_eq!(dimensions.to_index(-1, row), dimensions.to_index(6, row));
            assert_eq!(dimensions.to_index(7, row), dimensions.to_index(0, row));
        }
    }

    #[test]
    fn to_index_wraps_rows_for_every_column() {
        let dimensions = GridDimensions::new(3, 5);
        for column in 0..3 {
            assert_eq!(dimensions.to_index(column, -1), dimensions.to_index(column, 4));
            assert_eq!(dimensions.to_index(column, 5), dimensions.to_index(column, 0));
        }
    }

    #[test]
    fn to_index_is_row_major() {
        let dimensions = GridDimensions::new(6, 6);
        assert_eq!(dimensions.to_index(0, 0), 0);
        assert_eq!(dimensions.to_index(5, 0), 5);
        assert_eq!(dimensions.to_index(0, 1), 6);
        assert_eq!(dimensions.to_index(-1, -1), 35);
    }

    #[test]
    fn coord_of_inverts_to_index() {
        let dimensions = GridDimensions::new(5, 3);
        for index in 0..dimensions.cell_count() {
            let coord = dimensions.coord_of(index);
            let back = dimensions.to_index(i64::from(coord.column()), i64::from(coord.row()));
            assert_eq!(back, index);
        }
    }

    #[test]
    fn single_cell_grid_wraps_onto_itself() {
        let dimensions = GridDimensions::new(1, 1);
        assert_eq!(dimensions.to_index(-1, 1), 0);
        assert_eq!(dimensions.to_index(1, -1), 0);
    }

    #[test]
    fn validate_rejects_empty_axes() {
        assert_eq!(
            Settings::new(0, 4, Pattern::Glider).validate(),
            Err(SettingsError::ZeroColumns)
        );
        assert_eq!(
            Settings::new(4, 0, Pattern::Glider).validate(),
            Err(SettingsError::ZeroRows)
        );
        assert!(Settings::new(1, 1, Pattern::Random).validate().is_ok());
    }

    #[test]
    fn pattern_parses_from_loose_names() {
        assert_eq!("Glider".parse::<Pattern>(), Ok(Pattern::Glider));
        assert_eq!(
            "gosper-glider-gun".parse::<Pattern>(),
            Ok(Pattern::GosperGliderGun)
        );
        assert_eq!(
            "hexagon".parse::<Pattern>(),
            Err(SettingsError::UnknownPattern("hexagon".to_owned()))
        );
        for pattern in Pattern::ALL {
            assert_eq!(pattern.to_string().parse::<Pattern>(), Ok(pattern));
        }
    }

    #[test]
    fn mask_counts_and_lists_alive_cells() {
        let dimensions = GridDimensions::new(3, 2);
        let mut mask = CellMask::dead(dimensions);
        mask.set_alive(-1, 0);
        mask.set_alive(1, 1);
        assert_eq!(mask.alive_count(), 2);
        assert_eq!(mask.iter_alive().collect::<Vec<_>>(), vec![2, 4]);
        assert_eq!(mask.value(2, 2), 1);
        assert!(!mask.is_alive(0));
        assert!(!mask.is_alive(99));
    }

    #[test]
    fn trail_size_caps_ages() {
        assert_eq!(TrailSize::NONE.max_age(), 1);
        assert_eq!(TrailSize::new(3).max_age(), 4);
        assert_eq!(TrailSize::new(u32::MAX).max_age(), u32::MAX);
    }

    #[test]
    fn settings_round_trip_through_bincode() {
        let settings = Settings::new(40, 30, Pattern::Pulsar);
        let bytes = bincode::serialize(&settings).expect("serialize");
        let restored: Settings = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(restored, settings);
    }
}
