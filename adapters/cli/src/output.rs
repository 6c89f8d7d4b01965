use std::io::Write;

use anyhow::{Context, Result};
use clap::ValueEnum;
use life_trail_core::Generation;

const INACTIVE_SYMBOL: char = '_';
const OLD_AGE_SYMBOL: char = '+';

/// Encoding used when writing generations to standard output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Header line followed by one line of age symbols per grid row.
    Text,
    /// One `{"num": .., "cellData": [..]}` object per line.
    Json,
}

/// Writes a generation to `out` in the requested format.
pub(crate) fn write_generation(
    out: &mut impl Write,
    generation: &Generation,
    columns: u32,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "generation {}", generation.num)?;
            for line in text_rows(generation, columns) {
                writeln!(out, "{line}")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, generation)
                .context("failed to serialise generation")?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn text_rows(generation: &Generation, columns: u32) -> impl Iterator<Item = String> + '_ {
    generation
        .cell_data
        .chunks(columns.max(1) as usize)
        .map(|row| row.iter().map(|age| age_symbol(*age)).collect())
}

fn age_symbol(age: u32) -> char {
    match age {
        0 => INACTIVE_SYMBOL,
        age => char::from_digit(age, 10).unwrap_or(OLD_AGE_SYMBOL),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Generation {
        Generation {
            num: 7,
            cell_data: vec![0, 1, 2, 0, 12, 9],
        }
    }

    #[test]
    fn text_frame_uses_age_symbols() {
        let mut buffer = Vec::new();
        write_generation(&mut buffer, &sample(), 3, OutputFormat::Text).expect("write");
        assert_eq!(
            String::from_utf8(buffer).expect("utf8"),
            "generation 7\n_12\n_+9\n"
        );
    }

    #[test]
    fn json_line_matches_external_shape() {
        let mut buffer = Vec::new();
        write_generation(&mut buffer, &sample(), 3, OutputFormat::Json).expect("write");
        assert_eq!(
            String::from_utf8(buffer).expect("utf8"),
            "{\"num\":7,\"cellData\":[0,1,2,0,12,9]}\n"
        );
    }
}
