#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative simulation state for Life Trail.
//!
//! A [`Simulator`] owns the activation record of one grid. It is created for a
//! fixed [`Settings`] value and discarded when the grid size or pattern
//! changes; there is no in-place resize. Drivers hold the simulator directly
//! and pass it by mutable reference into [`apply`], so no module-level state
//! is involved.

mod record;

use life_trail_core::{CellMask, Command, Event, Generation, Settings, TrailSize};
use life_trail_system_patterns::pattern_data;
use life_trail_system_rules::next_mask;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use crate::record::ActivationRecord;

/// Owns the activation record and advances it under the Game of Life rules.
#[derive(Debug)]
pub struct Simulator {
    settings: Settings,
    record: ActivationRecord,
    rng: ChaCha8Rng,
}

impl Simulator {
    /// Creates a simulator whose random patterns draw from operating system entropy.
    ///
    /// The settings must satisfy [`Settings::validate`].
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self::from_rng(settings, ChaCha8Rng::from_entropy())
    }

    /// Creates a simulator whose random patterns are reproducible for `seed`.
    #[must_use]
    pub fn with_seed(settings: Settings, seed: u64) -> Self {
        Self::from_rng(settings, ChaCha8Rng::seed_from_u64(seed))
    }

    fn from_rng(settings: Settings, rng: ChaCha8Rng) -> Self {
        Self {
            record: ActivationRecord::empty(settings.dimensions()),
            settings,
            rng,
        }
    }

    /// Configuration the simulator was created with.
    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Number of the generation currently stored, `0` before seeding.
    #[must_use]
    pub const fn generation_number(&self) -> u32 {
        self.record.generation()
    }

    /// Seeds the configured pattern as generation one and returns it without history.
    ///
    /// Calling this again discards all progress and seeds afresh.
    pub fn initial_generation(&mut self) -> Generation {
        let dimensions = self.settings.dimensions();
        let seed = pattern_data(self.settings.pattern(), dimensions, &mut self.rng);
        debug!(
            pattern = %self.settings.pattern(),
            columns = dimensions.columns(),
            rows = dimensions.rows(),
            alive = seed.alive_count(),
            "seeded initial generation"
        );
        self.record = ActivationRecord::seeded(&seed);
        self.record.decode(TrailSize::NONE)
    }

    /// Liveness of the stored generation without any history.
    #[must_use]
    pub fn current_mask(&self) -> CellMask {
        self.record.live_mask(self.settings.dimensions())
    }

    /// Advances one generation and decodes it with `trail` generations of history.
    ///
    /// The whole next mask is computed from the current one before any stamp
    /// is written.
    pub fn next_generation(&mut self, trail: TrailSize) -> Generation {
        let current = self.current_mask();
        let next = next_mask(&current);
        self.record.advance(&next);
        trace!(
            generation = self.record.generation(),
            alive = next.alive_count(),
            "advanced generation"
        );
        self.record.decode(trail)
    }

    /// Decodes the stored generation with `trail` generations of history.
    ///
    /// Repeated calls without an intervening [`Simulator::next_generation`]
    /// return identical snapshots.
    #[must_use]
    pub fn current_generation(&self, trail: TrailSize) -> Generation {
        self.record.decode(trail)
    }
}

/// Applies the provided command to the simulator, broadcasting resulting events.
pub fn apply(simulator: &mut Simulator, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::Seed => {
            let generation = simulator.initial_generation();
            out_events.push(Event::GenerationDecoded { generation });
        }
        Command::Tick { dt } => {
            out_events.push(Event::TimeAdvanced { dt });
        }
        Command::Advance { trail } => {
            let generation = simulator.next_generation(trail);
            out_events.push(Event::GenerationDecoded { generation });
        }
        Command::Redecode { trail } => {
            let generation = simulator.current_generation(trail);
            out_events.push(Event::GenerationDecoded { generation });
        }
    }
}

/// Query functions that provide read-only access to the simulator state.
pub mod query {
    use life_trail_core::{CellMask, Settings};

    use super::Simulator;

    /// Configuration the surrounding layers size their surfaces from.
    #[must_use]
    pub fn settings(simulator: &Simulator) -> Settings {
        *simulator.settings()
    }

    /// Number of the generation currently stored.
    #[must_use]
    pub fn generation_number(simulator: &Simulator) -> u32 {
        simulator.generation_number()
    }

    /// Liveness of the stored generation without history.
    #[must_use]
    pub fn live_mask(simulator: &Simulator) -> CellMask {
        simulator.current_mask()
    }
}
