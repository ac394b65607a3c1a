//! Runtime configuration and control bounds
//!
//! [`Cli`] is the clap-derived command line; [`Config::from_cli`] validates
//! it into the settings the controller starts from.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::error::{Error, Result};
use crate::input::parse_custom_array;

pub const DEFAULT_ARRAY: [i64; 7] = [64, 34, 25, 12, 22, 11, 90];

pub const MIN_ARRAY_SIZE: usize = 5;
pub const MAX_ARRAY_SIZE: usize = 50;

pub const MIN_SPEED_MS: u64 = 50;
pub const MAX_SPEED_MS: u64 = 2000;
pub const SPEED_STEP_MS: u64 = 50;
pub const DEFAULT_SPEED_MS: u64 = 500;

pub const DEFAULT_MIN_VALUE: i64 = 1;
pub const DEFAULT_MAX_VALUE: i64 = 99;

#[derive(Debug, Parser)]
#[command(
    name = "bubbletty",
    about = "Step through bubble sort one comparison at a time",
    version
)]
pub struct Cli {
    /// Initial array, comma separated (e.g. "64, 34, 25")
    #[arg(long)]
    pub array: Option<String>,

    /// Start with a random array of this many elements instead
    #[arg(long)]
    pub size: Option<usize>,

    /// Smallest random value (inclusive)
    #[arg(long, default_value_t = DEFAULT_MIN_VALUE)]
    pub min: i64,

    /// Largest random value (inclusive)
    #[arg(long, default_value_t = DEFAULT_MAX_VALUE)]
    pub max: i64,

    /// Delay between auto-play steps in milliseconds
    #[arg(long, default_value_t = DEFAULT_SPEED_MS)]
    pub speed: u64,

    /// Seed for the random array generator
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write logs to this file (the TUI owns the terminal)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Print every step to stdout instead of starting the TUI
    #[arg(long)]
    pub transcript: bool,
}

/// Where the first array comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitialArray {
    Values(Vec<i64>),
    Random(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub initial: InitialArray,
    pub min_value: i64,
    pub max_value: i64,
    pub speed: Duration,
    pub seed: Option<u64>,
    pub log_file: Option<PathBuf>,
    pub transcript: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            initial: InitialArray::Values(DEFAULT_ARRAY.to_vec()),
            min_value: DEFAULT_MIN_VALUE,
            max_value: DEFAULT_MAX_VALUE,
            speed: Duration::from_millis(DEFAULT_SPEED_MS),
            seed: None,
            log_file: None,
            transcript: false,
        }
    }
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self> {
        if cli.min > cli.max {
            return Err(Error::InvalidBounds {
                min: cli.min,
                max: cli.max,
            });
        }

        let initial = match (cli.array, cli.size) {
            (Some(text), _) => InitialArray::Values(parse_custom_array(&text)?),
            (None, Some(size)) => {
                if !(MIN_ARRAY_SIZE..=MAX_ARRAY_SIZE).contains(&size) {
                    return Err(Error::InvalidSize {
                        size,
                        min: MIN_ARRAY_SIZE,
                        max: MAX_ARRAY_SIZE,
                    });
                }
                InitialArray::Random(size)
            }
            (None, None) => InitialArray::Values(DEFAULT_ARRAY.to_vec()),
        };

        Ok(Config {
            initial,
            min_value: cli.min,
            max_value: cli.max,
            speed: Duration::from_millis(clamp_speed_ms(cli.speed)),
            seed: cli.seed,
            log_file: cli.log_file,
            transcript: cli.transcript,
        })
    }
}

/// Snap a delay to the slider grid: `[50, 2000]` in steps of 50
pub fn clamp_speed_ms(ms: u64) -> u64 {
    let snapped = ms.saturating_add(SPEED_STEP_MS / 2) / SPEED_STEP_MS * SPEED_STEP_MS;
    snapped.clamp(MIN_SPEED_MS, MAX_SPEED_MS)
}

pub fn clamp_array_size(size: usize) -> usize {
    size.clamp(MIN_ARRAY_SIZE, MAX_ARRAY_SIZE)
}

/// Human label for an auto-play delay
pub fn speed_label(ms: u64) -> &'static str {
    match ms {
        0..=100 => "Very Fast",
        101..=300 => "Fast",
        301..=600 => "Normal",
        601..=1000 => "Slow",
        _ => "Very Slow",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["bubbletty"];
        argv.extend_from_slice(args);
        Cli::parse_from(argv)
    }

    #[test]
    fn defaults_use_builtin_array() {
        let config = Config::from_cli(cli(&[])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn array_takes_precedence_over_size() {
        let config = Config::from_cli(cli(&["--array", "3,1,2", "--size", "9"])).unwrap();
        assert_eq!(config.initial, InitialArray::Values(vec![3, 1, 2]));
    }

    #[test]
    fn size_out_of_range_is_rejected() {
        let err = Config::from_cli(cli(&["--size", "51"])).unwrap_err();
        assert!(matches!(err, Error::InvalidSize { size: 51, .. }));
    }

    #[test]
    fn oversized_array_is_rejected() {
        let values = (1..=51).map(|v| v.to_string()).collect::<Vec<_>>().join(",");
        let err = Config::from_cli(cli(&["--array", &values])).unwrap_err();
        assert!(matches!(err, Error::InvalidSize { size: 51, max: 50, .. }));
        assert!(err.is_input_error());
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let err = Config::from_cli(cli(&["--min", "10", "--max", "2"])).unwrap_err();
        assert!(matches!(err, Error::InvalidBounds { .. }));
    }

    #[test]
    fn speed_snaps_to_grid() {
        assert_eq!(clamp_speed_ms(0), 50);
        assert_eq!(clamp_speed_ms(520), 500);
        assert_eq!(clamp_speed_ms(530), 550);
        assert_eq!(clamp_speed_ms(9000), 2000);
    }

    #[test]
    fn speed_labels_match_thresholds() {
        assert_eq!(speed_label(100), "Very Fast");
        assert_eq!(speed_label(300), "Fast");
        assert_eq!(speed_label(500), "Normal");
        assert_eq!(speed_label(1000), "Slow");
        assert_eq!(speed_label(1050), "Very Slow");
    }
}
