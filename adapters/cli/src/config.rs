use std::{fs, path::Path, time::Duration};

use anyhow::{bail, Context, Result};
use life_trail_core::{Pattern, Settings, TrailSize};
use serde::Deserialize;

const DEFAULT_COLUMNS: u32 = 40;
const DEFAULT_ROWS: u32 = 30;
const DEFAULT_PATTERN: Pattern = Pattern::Glider;
const DEFAULT_SPEED_MS: u64 = 500;
const DEFAULT_TRAIL: u32 = 0;

/// Contents of an optional TOML configuration file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct FileConfig {
    #[serde(default)]
    simulation: SimulationSection,
    #[serde(default)]
    playback: PlaybackSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SimulationSection {
    columns: Option<u32>,
    rows: Option<u32>,
    pattern: Option<Pattern>,
    seed: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PlaybackSection {
    speed_ms: Option<u64>,
    trail: Option<u32>,
}

impl FileConfig {
    /// Reads and parses the configuration file at `path`.
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read configuration file {}", path.display()))?;
        Self::parse(&contents)
            .with_context(|| format!("invalid configuration file {}", path.display()))
    }

    fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("failed to parse configuration toml contents")
    }
}

/// Values supplied on the command line, taking precedence over the file.
#[derive(Debug, Default)]
pub(crate) struct Overrides {
    pub(crate) columns: Option<u32>,
    pub(crate) rows: Option<u32>,
    pub(crate) pattern: Option<Pattern>,
    pub(crate) seed: Option<u64>,
    pub(crate) speed_ms: Option<u64>,
    pub(crate) trail: Option<u32>,
}

/// Fully resolved parameters for one run.
#[derive(Debug, PartialEq)]
pub(crate) struct RunConfig {
    pub(crate) settings: Settings,
    pub(crate) interval: Duration,
    pub(crate) trail: TrailSize,
    pub(crate) seed: Option<u64>,
}

/// Merges defaults, file values and command line overrides, then validates them.
pub(crate) fn resolve(file: FileConfig, overrides: Overrides) -> Result<RunConfig> {
    let FileConfig {
        simulation,
        playback,
    } = file;

    let settings = Settings::new(
        overrides
            .columns
            .or(simulation.columns)
            .unwrap_or(DEFAULT_COLUMNS),
        overrides.rows.or(simulation.rows).unwrap_or(DEFAULT_ROWS),
        overrides
            .pattern
            .or(simulation.pattern)
            .unwrap_or(DEFAULT_PATTERN),
    );
    settings.validate().context("invalid grid settings")?;

    let speed_ms = overrides
        .speed_ms
        .or(playback.speed_ms)
        .unwrap_or(DEFAULT_SPEED_MS);
    if speed_ms == 0 {
        bail!("playback speed must be at least one millisecond");
    }

    Ok(RunConfig {
        settings,
        interval: Duration::from_millis(speed_ms),
        trail: TrailSize::new(overrides.trail.or(playback.trail).unwrap_or(DEFAULT_TRAIL)),
        seed: overrides.seed.or(simulation.seed),
    })
}
