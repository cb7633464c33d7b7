use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::retry::{Backoff, ExponentialBackoff, FixedInterval, RetryPolicy};

/// Delay schedule used when a policy is built from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RetryMode {
    /// Same pause between every attempt.
    Fixed,
    /// Geometrically growing pause, capped at `max_delay_secs`.
    #[default]
    Backoff,
}

/// Retry policy parameters (optional section in config.toml).
///
/// Only consulted when no explicit policy was registered on the request;
/// explicit registration always wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Number of retries beyond the first attempt.
    pub max_retries: u32,
    /// Base delay in seconds between attempts (e.g. 0.25 = 250ms).
    pub base_delay_secs: f64,
    /// Maximum backoff delay in seconds.
    pub max_delay_secs: u64,
    /// Delay schedule: "fixed" or "backoff".
    #[serde(default)]
    pub mode: RetryMode,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 4,
            base_delay_secs: 0.25,
            max_delay_secs: 30,
            mode: RetryMode::Backoff,
        }
    }
}

impl RetryConfig {
    /// Builds a fresh policy instance for one request.
    pub fn build_policy(&self) -> Box<dyn RetryPolicy> {
        let base = Duration::from_secs_f64(self.base_delay_secs.max(0.0));
        match self.mode {
            RetryMode::Fixed => Box::new(FixedInterval::new(self.max_retries, base)),
            RetryMode::Backoff => Box::new(ExponentialBackoff::new(
                self.max_retries,
                Backoff::new(base, Duration::from_secs(self.max_delay_secs)),
            )),
        }
    }
}

/// Client configuration loaded from `~/.config/recurl/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-transfer timeout in seconds per attempt; 0 disables it.
    pub timeout_secs: u64,
    /// Follow HTTP redirects up to `max_redirects`.
    pub follow_redirects: bool,
    /// Redirect hop limit when `follow_redirects` is set.
    pub max_redirects: u32,
    /// Log each outgoing request at debug level. Explicit per-config value;
    /// there is no process-wide debug switch.
    #[serde(default)]
    pub debug: bool,
    /// Optional retry policy; if missing, requests without an explicit
    /// policy get a single attempt.
    #[serde(default)]
    pub retry: Option<RetryConfig>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 30,
            timeout_secs: 0,
            follow_redirects: true,
            max_redirects: 10,
            debug: false,
            retry: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("recurl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from an explicit path (no XDG lookup).
pub fn from_path(path: &Path) -> Result<ClientConfig> {
    let data = fs::read_to_string(path)?;
    let cfg: ClientConfig = toml::from_str(&data)?;
    Ok(cfg)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ClientConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ClientConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    from_path(&path)
}
