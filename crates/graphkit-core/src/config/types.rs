//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// How weights are derived for edge records without an explicit weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weighting {
    /// Distance between the endpoints' coordinates
    #[default]
    Euclidean,
    /// Every edge costs 1
    Unit,
}

impl std::str::FromStr for Weighting {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "euclidean" => Ok(Weighting::Euclidean),
            "unit" => Ok(Weighting::Unit),
            other => Err(format!(
                "unknown weighting '{}' (expected: euclidean, unit)",
                other
            )),
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub loader: LoaderConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Settings for reading node and edge files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Field separator in node/edge files
    #[serde(default = "default_separator")]
    pub separator: char,

    #[serde(default)]
    pub weighting: Weighting,

    /// Insert every edge in both directions
    #[serde(default)]
    pub undirected: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            weighting: Weighting::default(),
            undirected: false,
        }
    }
}

/// Settings for human-readable output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Decimal places used when printing distances
    #[serde(default = "default_precision")]
    pub precision: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
        }
    }
}

fn default_separator() -> char {
    ';'
}

fn default_precision() -> usize {
    3
}
