//! Command line arguments for the headless driver.

use anyhow::{anyhow, Result};

use crate::types::{FALL_INTERVAL_MS, TICK_MS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub seed: u64,
    /// Maximum ticks to simulate; the run stops early on game over
    pub ticks: u32,
    pub dt_ms: u32,
    pub fall_ms: u32,
    /// Print the final snapshot as JSON
    pub json: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            ticks: 10_000,
            dt_ms: TICK_MS,
            fall_ms: FALL_INTERVAL_MS,
            json: false,
        }
    }
}

pub const USAGE: &str = "usage: blockfall [--seed N] [--ticks N] [--dt-ms N] [--fall-ms N] [--json]";

fn value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str> {
    args.get(i)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("missing value for {}", flag))
}

fn number<T: std::str::FromStr>(raw: &str, flag: &str) -> Result<T> {
    raw.parse::<T>()
        .map_err(|_| anyhow!("invalid {} value: {}", flag, raw))
}

/// Parse driver arguments (without the program name).
///
/// Returns `Ok(None)` when help was requested.
pub fn parse_run_args(args: &[String]) -> Result<Option<RunConfig>> {
    let mut config = RunConfig::default();
    let mut i = 0usize;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--seed" => {
                i += 1;
                config.seed = number(value(args, i, flag)?, flag)?;
            }
            "--ticks" => {
                i += 1;
                config.ticks = number(value(args, i, flag)?, flag)?;
            }
            "--dt-ms" => {
                i += 1;
                config.dt_ms = number(value(args, i, flag)?, flag)?;
                if config.dt_ms == 0 {
                    return Err(anyhow!("--dt-ms must be positive"));
                }
            }
            "--fall-ms" => {
                i += 1;
                config.fall_ms = number(value(args, i, flag)?, flag)?;
                if config.fall_ms == 0 {
                    return Err(anyhow!("--fall-ms must be positive"));
                }
            }
            "--json" => config.json = true,
            "-h" | "--help" => return Ok(None),
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }

    Ok(Some(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let config = parse_run_args(&[]).unwrap().unwrap();
        assert_eq!(config, RunConfig::default());
        assert_eq!(config.dt_ms, 16);
        assert_eq!(config.fall_ms, 1000);
    }

    #[test]
    fn test_all_flags() {
        let config = parse_run_args(&args(&[
            "--seed", "42", "--ticks", "300", "--dt-ms", "50", "--fall-ms", "250", "--json",
        ]))
        .unwrap()
        .unwrap();
        assert_eq!(
            config,
            RunConfig {
                seed: 42,
                ticks: 300,
                dt_ms: 50,
                fall_ms: 250,
                json: true,
            }
        );
    }

    #[test]
    fn test_help() {
        assert_eq!(parse_run_args(&args(&["--help"])).unwrap(), None);
    }

    #[test]
    fn test_rejects_bad_input() {
        let err = parse_run_args(&args(&["--speed", "3"])).unwrap_err();
        assert!(err.to_string().contains("unknown argument"));

        let err = parse_run_args(&args(&["--seed"])).unwrap_err();
        assert!(err.to_string().contains("missing value for --seed"));

        let err = parse_run_args(&args(&["--ticks", "many"])).unwrap_err();
        assert!(err.to_string().contains("invalid --ticks value"));

        assert!(parse_run_args(&args(&["--dt-ms", "0"])).is_err());
    }
}
