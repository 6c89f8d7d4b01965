#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Population census derived from decoded generations.

use life_trail_core::{CensusReport, Event, Generation};

/// Pure system that counts alive and trailing cells for every decoded generation.
#[derive(Debug, Default)]
pub struct Census {
    last_report: Option<CensusReport>,
    peak_alive: usize,
}

impl Census {
    /// Creates a census that has not observed any generation yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the last report produced by the census, if any.
    #[must_use]
    pub fn last_report(&self) -> Option<&CensusReport> {
        self.last_report.as_ref()
    }

    /// Counts the cells of a single generation and records the result.
    pub fn observe(&mut self, generation: &Generation) -> CensusReport {
        let alive = generation.alive_count();
        self.peak_alive = self.peak_alive.max(alive);
        let report = CensusReport::new(
            generation.num,
            alive,
            generation.trailing_count(),
            self.peak_alive,
        );
        self.last_report = Some(report);
        report
    }

    /// Publishes a report for each decoded generation found in `events`.
    pub fn handle(&mut self, events: &[Event], out: &mut Vec<Event>) {
        for event in events {
            if let Event::GenerationDecoded { generation } = event {
                let report = self.observe(generation);
                out.push(Event::CensusUpdated { report });
            }
        }
    }
}
