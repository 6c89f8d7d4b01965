#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic playback system that turns elapsed time into generation commands.
//!
//! Playback replaces a shared timer callback: the driver owns both the
//! simulator and this system, forwards [`Event::TimeAdvanced`] into
//! [`Playback::handle`], and applies the emitted commands itself.

use std::time::Duration;

use life_trail_core::{Command, Event, TrailSize};

/// Configuration parameters required to construct the playback system.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    interval: Duration,
    trail: TrailSize,
}

impl Config {
    /// Creates a new configuration using the provided tick cadence and trail.
    #[must_use]
    pub const fn new(interval: Duration, trail: TrailSize) -> Self {
        Self { interval, trail }
    }
}

/// Pure system that emits one advance command per elapsed interval while running.
#[derive(Debug)]
pub struct Playback {
    interval: Duration,
    trail: TrailSize,
    accumulator: Duration,
    running: bool,
}

impl Playback {
    /// Creates a stopped playback system using the supplied configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            interval: config.interval,
            trail: config.trail,
            accumulator: Duration::ZERO,
            running: false,
        }
    }

    /// Starts emitting advance commands, restarting the interval timer.
    pub fn start(&mut self) {
        self.accumulator = Duration::ZERO;
        self.running = true;
    }

    /// Stops emitting advance commands and discards partially elapsed time.
    pub fn stop(&mut self) {
        self.accumulator = Duration::ZERO;
        self.running = false;
    }

    /// Reports whether playback is currently running.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Trail size attached to emitted commands.
    #[must_use]
    pub const fn trail(&self) -> TrailSize {
        self.trail
    }

    /// Time between two generations.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Changes the trail size and requests a re-decode of the stored generation.
    ///
    /// Nothing is emitted when the trail size is unchanged.
    pub fn set_trail(&mut self, trail: TrailSize, out: &mut Vec<Command>) {
        if trail == self.trail {
            return;
        }
        self.trail = trail;
        out.push(Command::Redecode { trail });
    }

    /// Consumes events to emit advance commands for every whole interval elapsed.
    pub fn handle(&mut self, events: &[Event], out: &mut Vec<Command>) {
        if !self.running || self.interval.is_zero() {
            return;
        }

        let mut accumulated = Duration::ZERO;
        for event in events {
            if let Event::TimeAdvanced { dt } = event {
                accumulated = accumulated.saturating_add(*dt);
            }
        }

        if accumulated.is_zero() {
            return;
        }

        self.accumulator = self.accumulator.saturating_add(accumulated);
        for _ in 0..self.resolve_due_generations() {
            out.push(Command::Advance { trail: self.trail });
        }
    }

    fn resolve_due_generations(&mut self) -> usize {
        if self.interval.is_zero() {
            return 0;
        }

        let mut due = 0;
        while self.accumulator >= self.interval {
            self.accumulator -= self.interval;
            due += 1;
        }
        due
    }
}
