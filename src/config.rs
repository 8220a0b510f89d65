//! Runtime configuration: defaults, then environment, then command-line flags.
//!
//! Environment variables:
//!
//! - `MATCH3_SEED`: board seed (default: derived from the clock)
//! - `MATCH3_SIZE`: board side length (default: 8)
//! - `MATCH3_SYMBOLS`: number of symbol kinds (default: 4)
//! - `MATCH3_LOG_PATH`: JSON-lines session log (default: none; blank means none)
//!
//! Flags `--seed`, `--size`, `--symbols` and `--log` override the environment.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, bail, Context, Result};

use crate::types::{
    DEFAULT_BOARD_SIZE, DEFAULT_SYMBOL_COUNT, MAX_BOARD_SIZE, MAX_SYMBOL_COUNT, MIN_BOARD_SIZE,
    MIN_SYMBOL_COUNT,
};

pub const USAGE: &str = "\
usage: tui-match3 [--seed N] [--size N] [--symbols N] [--log PATH]

  --seed N      board seed (env MATCH3_SEED)
  --size N      board side length, 3..=16 (env MATCH3_SIZE, default 8)
  --symbols N   symbol kinds, 2..=8 (env MATCH3_SYMBOLS, default 4)
  --log PATH    append session events as JSON lines (env MATCH3_LOG_PATH)
  -h, --help    show this help

keys: arrows/hjkl/wasd move, space/enter select, esc cancel,
      r new board, n restart, q quit; mouse clicks select cells
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub seed: u32,
    pub size: u8,
    pub symbols: u8,
    pub log_path: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            size: DEFAULT_BOARD_SIZE,
            symbols: DEFAULT_SYMBOL_COUNT,
            log_path: None,
        }
    }
}

impl GameConfig {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(v) = lookup("MATCH3_SEED") {
            config.seed = parse_num(&v, "MATCH3_SEED")?;
        }
        if let Some(v) = lookup("MATCH3_SIZE") {
            config.size = parse_num(&v, "MATCH3_SIZE")?;
        }
        if let Some(v) = lookup("MATCH3_SYMBOLS") {
            config.symbols = parse_num(&v, "MATCH3_SYMBOLS")?;
        }
        if let Some(v) = lookup("MATCH3_LOG_PATH") {
            config.log_path = non_blank(&v);
        }

        Ok(config)
    }

    /// Apply command-line flags. Returns `false` when help was requested.
    pub fn apply_args(&mut self, args: &[String]) -> Result<bool> {
        let mut iter = args.iter();
        while let Some(flag) = iter.next() {
            let mut value = || {
                iter.next()
                    .ok_or_else(|| anyhow!("missing value for {}", flag))
            };
            match flag.as_str() {
                "-h" | "--help" => return Ok(false),
                "--seed" => self.seed = parse_num(value()?, "--seed")?,
                "--size" => self.size = parse_num(value()?, "--size")?,
                "--symbols" => self.symbols = parse_num(value()?, "--symbols")?,
                "--log" => self.log_path = non_blank(value()?),
                other => bail!("unknown argument: {}", other),
            }
        }
        Ok(true)
    }

    /// Reject dimensions the engine would refuse, naming the setting.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.size) {
            bail!(
                "size must be within {}..={} (got {})",
                MIN_BOARD_SIZE,
                MAX_BOARD_SIZE,
                self.size
            );
        }
        if !(MIN_SYMBOL_COUNT..=MAX_SYMBOL_COUNT).contains(&self.symbols) {
            bail!(
                "symbols must be within {}..={} (got {})",
                MIN_SYMBOL_COUNT,
                MAX_SYMBOL_COUNT,
                self.symbols
            );
        }
        Ok(())
    }

    /// Environment + flags + validation. `None` means help was requested.
    pub fn load(args: &[String]) -> Result<Option<Self>> {
        Self::load_with(args, |key| std::env::var(key).ok())
    }

    /// `load` with an explicit environment. Help wins over a broken environment.
    pub fn load_with(
        args: &[String],
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Option<Self>> {
        if args.iter().any(|a| a == "-h" || a == "--help") {
            return Ok(None);
        }
        let mut config = Self::from_lookup(lookup)?;
        if !config.apply_args(args)? {
            return Ok(None);
        }
        config.validate()?;
        Ok(Some(config))
    }
}

fn parse_num<T: std::str::FromStr>(raw: &str, name: &str) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse()
        .with_context(|| format!("invalid value for {}: {:?}", name, raw))
}

fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
