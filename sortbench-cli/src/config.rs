//! Configuration loading from sortbench.toml
//!
//! Defaults can be specified in a `sortbench.toml` file, discovered by walking
//! up from the current directory. CLI flags override file values.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Sortbench configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SortbenchConfig {
    /// Runner configuration
    #[serde(default)]
    pub runner: RunnerConfig,
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Runner configuration for benchmark execution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Default maximum array size when none is given on the command line
    #[serde(default = "default_max_size")]
    pub max_size: i64,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            max_size: default_max_size(),
        }
    }
}

fn default_max_size() -> i64 {
    10_000
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format: "human", "json", or "csv"
    #[serde(default = "default_format")]
    pub format: String,
    /// Directory for the CSV file set; no export when unset
    #[serde(default)]
    pub export_dir: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            export_dir: None,
        }
    }
}

fn default_format() -> String {
    "human".to_string()
}

impl SortbenchConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Try to discover and load configuration by walking up from the current
    /// directory
    pub fn discover() -> Option<Self> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            let config_path = dir.join("sortbench.toml");
            if config_path.exists() {
                return Self::load(&config_path).ok();
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }

    /// Generate a default configuration as TOML string
    pub fn default_toml() -> String {
        r#"# Sortbench Configuration

[runner]
# Default maximum array size (the run ramps up to this value)
max_size = 10000

[output]
# Default output format: human, json, csv
format = "human"
# Directory for the CSV file set (uncomment to enable)
# export_dir = "target/sortbench"
"#
        .to_string()
    }
}
