use std::num::ParseIntError;

use log::warn;
use thiserror::Error;

use crate::lfsr::{DEFAULT_CYCLES, DEFAULT_SEED, DEFAULT_TAPS};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("seed must be nonzero: a zero register never leaves the zero state")]
    ZeroSeed,
}

/// Parameters of a single generator run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub seed: u32,
    pub taps: u32,
    pub cycles: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            taps: DEFAULT_TAPS,
            cycles: DEFAULT_CYCLES,
        }
    }
}

impl Config {
    /// Rejects a zero seed unless `allow_zero_seed` is set, in which case the
    /// run goes ahead and produces only zeros.
    pub fn validate(&self, allow_zero_seed: bool) -> Result<(), ConfigError> {
        if self.seed != 0 {
            return Ok(());
        }
        if !allow_zero_seed {
            return Err(ConfigError::ZeroSeed);
        }

        warn!("zero seed accepted, output will be {} zeros", self.cycles);
        Ok(())
    }
}

/// Parses a register value written in decimal, or in hex/binary/octal with a
/// `0x`/`0b`/`0o` prefix. Underscores are allowed as separators.
pub fn parse_register(s: &str) -> Result<u32, ParseIntError> {
    let s = s.trim().replace('_', "");
    let lower = s.to_ascii_lowercase();

    match lower.get(..2) {
        Some("0x") => u32::from_str_radix(&lower[2..], 16),
        Some("0b") => u32::from_str_radix(&lower[2..], 2),
        Some("0o") => u32::from_str_radix(&lower[2..], 8),
        _ => lower.parse(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();

        assert_eq!(config.seed, 1);
        assert_eq!(config.taps, 0x8020_0003);
        assert_eq!(config.cycles, 100);
        assert_eq!(config.validate(false), Ok(()));
    }

    #[test]
    fn zero_seed() {
        let config = Config {
            seed: 0,
            ..Config::default()
        };

        assert_eq!(config.validate(false), Err(ConfigError::ZeroSeed));
        assert_eq!(config.validate(true), Ok(()));
    }

    #[test]
    fn parse() {
        assert_eq!(parse_register("1"), Ok(1));
        assert_eq!(parse_register("0x80200003"), Ok(0x8020_0003));
        assert_eq!(parse_register("0X8020_0003"), Ok(0x8020_0003));
        assert_eq!(parse_register("0b1011"), Ok(0b1011));
        assert_eq!(parse_register("0o17"), Ok(0o17));
        assert_eq!(parse_register(" 4294967295 "), Ok(u32::MAX));
    }

    #[test]
    fn parse_rejects() {
        assert!(parse_register("").is_err());
        assert!(parse_register("0x").is_err());
        assert!(parse_register("0x1_0000_0000").is_err());
        assert!(parse_register("4294967296").is_err());
        assert!(parse_register("-1").is_err());
        assert!(parse_register("0b102").is_err());
        assert!(parse_register("taps").is_err());
    }
}
