//! Generation-stamped activation record.
//!
//! Rather than keeping one grid per remembered generation, each cell stores the
//! generation in which it most recently became alive. Ages for any trail size
//! are recovered from the stamp and the current generation counter.

use life_trail_core::{CellMask, Generation, GridDimensions, TrailSize};

/// Stamp value for a cell that has never been alive.
const NEVER_ALIVE: u32 = 0;

/// Generation number assigned to the seeded state.
const FIRST_GENERATION: u32 = 1;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ActivationRecord {
    stamps: Vec<u32>,
    generation: u32,
}

impl ActivationRecord {
    /// Record in which no cell has ever been alive and no generation exists yet.
    pub(crate) fn empty(dimensions: GridDimensions) -> Self {
        Self {
            stamps: vec![NEVER_ALIVE; dimensions.cell_count()],
            generation: NEVER_ALIVE,
        }
    }

    /// Record whose alive cells were activated in the first generation.
    pub(crate) fn seeded(mask: &CellMask) -> Self {
        let stamps = mask
            .cells()
            .iter()
            .map(|value| {
                if *value == 1 {
                    FIRST_GENERATION
                } else {
                    NEVER_ALIVE
                }
            })
            .collect();
        Self {
            stamps,
            generation: FIRST_GENERATION,
        }
    }

    pub(crate) const fn generation(&self) -> u32 {
        self.generation
    }

    /// Cells whose stamp matches the current generation.
    pub(crate) fn live_mask(&self, dimensions: GridDimensions) -> CellMask {
        CellMask::from_fn(dimensions, |index| self.is_alive(index))
    }

    /// Moves to the next generation and stamps every cell alive in `next`.
    ///
    /// Cells dead in `next` keep their previous stamp.
    pub(crate) fn advance(&mut self, next: &CellMask) {
        self.generation = self.generation.saturating_add(1);
        for index in next.iter_alive() {
            self.stamps[index] = self.generation;
        }
    }

    /// Converts stamps into ages relative to the current generation.
    pub(crate) fn decode(&self, trail: TrailSize) -> Generation {
        let cutoff = self.generation.saturating_sub(trail.max_age());
        let cell_data = self
            .stamps
            .iter()
            .map(|stamp| {
                if *stamp > cutoff {
                    self.generation - stamp + 1
                } else {
                    0
                }
            })
            .collect();
        Generation {
            num: self.generation,
            cell_data,
        }
    }

    fn is_alive(&self, index: usize) -> bool {
        let stamp = self.stamps[index];
        stamp != NEVER_ALIVE && stamp == self.generation
    }
}
