//! Configuration Management
//!
//! Loads queue and UI settings from TOML files.
//! Configuration includes:
//! - Queue settings (capacity)
//! - UI settings (colors, menu display)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::RingqError;
use crate::queue::DEFAULT_CAPACITY;

/// Config file looked up in the working directory when no path is given.
pub const LOCAL_CONFIG_FILE: &str = "ringq.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub queue: QueueConfig,

    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueConfig {
    /// Number of slots allocated when the queue is created
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

/// UI configuration for colors and prompts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Colorize status and error messages
    #[serde(default = "default_true")]
    pub color: bool,
    /// Print the command menu at startup
    #[serde(default = "default_true")]
    pub show_menu: bool,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            color: true,
            show_menu: true,
        }
    }
}

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}
fn default_true() -> bool {
    true
}

impl Config {
    pub fn load(path: Option<&str>) -> Result<Self> {
        let mut config = match path {
            Some(p) => {
                let content = std::fs::read_to_string(p)
                    .with_context(|| format!("Failed to read config from {}", p))?;
                info!(path = p, "Loaded config");
                Self::parse(&content)?
            }
            None => {
                let home_config = dirs::home_dir().map(|h| h.join(".config/ringq/config.toml"));

                let mut default_paths = vec![std::path::PathBuf::from(LOCAL_CONFIG_FILE)];
                if let Some(hc) = home_config {
                    default_paths.push(hc);
                }

                let mut loaded = None;
                for p in &default_paths {
                    if let Ok(content) = std::fs::read_to_string(p) {
                        info!(path = %p.display(), "Loaded config");
                        loaded = Some(Self::parse(&content)?);
                        break;
                    }
                }
                loaded.unwrap_or_else(|| {
                    debug!("No config file found, using defaults");
                    Self::default()
                })
            }
        };

        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Parse TOML without touching the environment.
    pub fn parse(content: &str) -> Result<Self> {
        let config = toml::from_str(content)
            .map_err(|e| RingqError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Override file settings with `RINGQ_*` environment variables.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(capacity) = std::env::var("RINGQ_CAPACITY") {
            self.queue.capacity = capacity.trim().parse::<usize>().map_err(|_| {
                RingqError::Config(format!("RINGQ_CAPACITY is not a valid size: {}", capacity))
            })?;
        }
        if std::env::var_os("RINGQ_NO_COLOR").is_some() {
            self.ui.color = false;
        }
        Ok(())
    }

    /// Check the merged settings. Run after CLI flags have been applied.
    pub fn validate(&self) -> Result<()> {
        if self.queue.capacity == 0 {
            return Err(
                RingqError::Config("queue.capacity must be greater than zero".into()).into(),
            );
        }
        Ok(())
    }
}
