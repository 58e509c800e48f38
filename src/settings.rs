use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use config::{Config, Environment};
use serde::Deserialize;

use crate::feed::DEFAULT_FEED_BASE;

const ENV_PREFIX: &str = "TRIALS";
const DEFAULT_TIMEOUT_SECS: i64 = 30;

/// Process settings: built-in defaults, overridden by `TRIALS_*` variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub feed_base: String,
    pub timeout_secs: u64,
    pub out_dir: PathBuf,
}

impl Settings {
    pub fn load() -> Result<Self> {
        Self::from_env(Environment::with_prefix(ENV_PREFIX))
    }

    fn from_env(env: Environment) -> Result<Self> {
        Config::builder()
            .set_default("feed_base", DEFAULT_FEED_BASE)?
            .set_default("timeout_secs", DEFAULT_TIMEOUT_SECS)?
            .set_default("out_dir", ".")?
            .add_source(env)
            .build()
            .context("Failed to read settings")?
            .try_deserialize()
            .context("Invalid settings")
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
