// src/config.rs
//! Run configuration: defaults overlaid by an optional `regroup.toml`
//! in the working directory.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::Result;

pub const CONFIG_FILE: &str = "regroup.toml";

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub verbose: bool,
    /// Include the all-pairs distance matrix in console output.
    pub show_matrix: bool,
    /// Stock metric names excluded from the computed table.
    pub disabled_metrics: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RegroupToml {
    #[serde(default)]
    output: OutputSection,
    #[serde(default)]
    metrics: MetricsSection,
}

#[derive(Debug, Default, Deserialize)]
struct OutputSection {
    #[serde(default)]
    matrix: bool,
    #[serde(default)]
    verbose: bool,
}

#[derive(Debug, Default, Deserialize)]
struct MetricsSection {
    #[serde(default)]
    disabled: Vec<String>,
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads defaults overlaid by `regroup.toml` when present.
    ///
    /// # Errors
    /// Returns an error when the file exists but is malformed.
    pub fn load() -> Result<Self> {
        let mut config = Self::new();
        if Path::new(CONFIG_FILE).exists() {
            let content = fs::read_to_string(CONFIG_FILE)?;
            config.apply_toml(&content)?;
        }
        Ok(config)
    }

    /// Overlays settings parsed from TOML content.
    ///
    /// # Errors
    /// Returns an error when the content is malformed.
    pub fn apply_toml(&mut self, content: &str) -> Result<()> {
        let parsed: RegroupToml = toml::from_str(content)?;
        self.show_matrix = self.show_matrix || parsed.output.matrix;
        self.verbose = self.verbose || parsed.output.verbose;
        self.disabled_metrics.extend(parsed.metrics.disabled);
        Ok(())
    }
}
