//! Runtime configuration from `BLOCKDROP_*` environment variables.
//!
//! Read once at startup. Unset or empty variables fall back to defaults; a
//! variable that is set but malformed is an error.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{bail, Context, Result};

use crate::core::{HoldPolicy, Randomizer, Rules};
use crate::input::KeyBindings;

pub const DEFAULT_BEST_SCORE_PATH: &str = ".blockdrop_best.json";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub seed: u32,
    pub randomizer: Randomizer,
    pub hold_policy: HoldPolicy,
    pub hold_key: char,
    pub best_score_path: PathBuf,
    pub muted: bool,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: time_seed(),
            randomizer: Randomizer::default(),
            hold_policy: HoldPolicy::default(),
            hold_key: KeyBindings::default().hold,
            best_score_path: PathBuf::from(DEFAULT_BEST_SCORE_PATH),
            muted: false,
            log_file: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let mut config = Self::default();

        if let Some(raw) = get("BLOCKDROP_SEED") {
            config.seed = raw
                .parse()
                .with_context(|| format!("BLOCKDROP_SEED must be a u32, got {raw:?}"))?;
        }
        if let Some(raw) = get("BLOCKDROP_RANDOMIZER") {
            config.randomizer = Randomizer::from_str(&raw)
                .with_context(|| format!("BLOCKDROP_RANDOMIZER: unknown randomizer {raw:?}"))?;
        }
        if let Some(raw) = get("BLOCKDROP_HOLD_POLICY") {
            config.hold_policy = HoldPolicy::from_str(&raw)
                .with_context(|| format!("BLOCKDROP_HOLD_POLICY: unknown policy {raw:?}"))?;
        }
        if let Some(raw) = get("BLOCKDROP_HOLD_KEY") {
            config.hold_key = parse_key(&raw).context("BLOCKDROP_HOLD_KEY")?;
        }
        if let Some(raw) = get("BLOCKDROP_BEST_SCORE_PATH") {
            config.best_score_path = PathBuf::from(raw);
        }
        if let Some(raw) = get("BLOCKDROP_MUTE") {
            config.muted = parse_flag(&raw).context("BLOCKDROP_MUTE")?;
        }
        config.log_file = get("BLOCKDROP_LOG_FILE").map(PathBuf::from);

        Ok(config)
    }

    pub fn rules(&self) -> Rules {
        Rules {
            randomizer: self.randomizer,
            hold_policy: self.hold_policy,
        }
    }

    pub fn key_bindings(&self) -> KeyBindings {
        KeyBindings {
            hold: self.hold_key,
        }
    }
}

fn parse_key(raw: &str) -> Result<char> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if ch.is_ascii_alphanumeric() => Ok(ch.to_ascii_lowercase()),
        _ => bail!("expected a single letter or digit, got {raw:?}"),
    }
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => bail!("expected a boolean, got {raw:?}"),
    }
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
