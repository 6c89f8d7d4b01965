#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that drives a Life Trail simulation headlessly.

mod config;
mod output;

use std::{
    io::{self, Write},
    path::PathBuf,
    thread,
    time::Instant,
};

use anyhow::Result;
use clap::Parser;
use life_trail_core::{Command, Event, Pattern};
use life_trail_system_census::Census;
use life_trail_system_patterns::exceeds_grid;
use life_trail_system_playback::{Config as PlaybackConfig, Playback};
use life_trail_world::{self as world, Simulator};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{
    config::{FileConfig, Overrides},
    output::{write_generation, OutputFormat},
};

/// Runs Conway's Game of Life on a toroidal grid and prints each generation.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML file with `[simulation]` and `[playback]` sections
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of grid columns
    #[arg(long)]
    columns: Option<u32>,

    /// Number of grid rows
    #[arg(long)]
    rows: Option<u32>,

    /// Seed pattern (blinker, pulsar, glider, lightweight_spaceship, gosper_glider_gun, flotilla, random)
    #[arg(short, long)]
    pattern: Option<Pattern>,

    /// Number of generations to advance after the seeded one
    #[arg(short, long, default_value_t = 10)]
    generations: u32,

    /// Generations of history decoded into each frame
    #[arg(short, long)]
    trail: Option<u32>,

    /// Milliseconds between generations
    #[arg(long)]
    speed_ms: Option<u64>,

    /// Seed for the random pattern
    #[arg(long)]
    seed: Option<u64>,

    /// Output encoding
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Stop as soon as no cell is alive
    #[arg(long)]
    stop_when_extinct: bool,
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            columns: self.columns,
            rows: self.rows,
            pattern: self.pattern,
            seed: self.seed,
            speed_ms: self.speed_ms,
            trail: self.trail,
        }
    }
}

/// Entry point for the Life Trail command-line interface.
fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let file = match &args.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    let run = config::resolve(file, args.overrides())?;
    let settings = run.settings;

    if exceeds_grid(settings.pattern(), settings.dimensions()) {
        warn!(
            pattern = %settings.pattern(),
            columns = settings.columns(),
            rows = settings.rows(),
            "pattern is larger than the grid and will be truncated"
        );
    }

    let mut simulator = match run.seed {
        Some(seed) => Simulator::with_seed(settings, seed),
        None => Simulator::new(settings),
    };
    let mut playback = Playback::new(PlaybackConfig::new(run.interval, run.trail));
    let mut census = Census::new();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let final_generation = args.generations.saturating_add(1);
    let columns = settings.columns();

    let mut events = Vec::new();
    world::apply(&mut simulator, Command::Seed, &mut events);
    let mut extinct = publish(&mut census, &events, &mut out, columns, args.format)?;

    playback.start();
    let mut last_tick = Instant::now();
    while simulator.generation_number() < final_generation {
        if extinct && args.stop_when_extinct {
            info!("population died out");
            break;
        }
        thread::sleep(playback.interval());
        let now = Instant::now();
        let dt = now.duration_since(last_tick);
        last_tick = now;

        events.clear();
        world::apply(&mut simulator, Command::Tick { dt }, &mut events);

        let mut commands = Vec::new();
        playback.handle(&events, &mut commands);

        events.clear();
        for command in commands {
            if simulator.generation_number() >= final_generation {
                break;
            }
            world::apply(&mut simulator, command, &mut events);
        }
        extinct |= publish(&mut census, &events, &mut out, columns, args.format)?;
    }
    playback.stop();

    if let Some(report) = census.last_report() {
        info!(
            generation = report.generation(),
            alive = report.alive(),
            peak = report.peak_alive(),
            "simulation finished"
        );
    }
    out.flush()?;
    Ok(())
}

/// Prints decoded generations and reports whether the population died out.
fn publish(
    census: &mut Census,
    events: &[Event],
    out: &mut impl Write,
    columns: u32,
    format: OutputFormat,
) -> Result<bool> {
    for event in events {
        if let Event::GenerationDecoded { generation } = event {
            write_generation(out, generation, columns, format)?;
        }
    }

    let mut reports = Vec::new();
    census.handle(events, &mut reports);
    let mut extinct = false;
    for event in &reports {
        if let Event::CensusUpdated { report } = event {
            info!(
                generation = report.generation(),
                alive = report.alive(),
                trailing = report.trailing(),
                "census"
            );
            extinct = report.is_extinct();
        }
    }
    Ok(extinct)
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
