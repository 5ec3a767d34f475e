//! JSON configuration for the demo binary.
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::params::{ScorerParams, TARGET_PIXELS};

#[derive(Debug, Deserialize)]
pub struct ScorerToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub thresholds: ThresholdConfig,
    #[serde(default = "default_target_pixels")]
    pub target_pixels: usize,
    pub output: ScorerOutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    pub low: f32,
    pub high: f32,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        let params = ScorerParams::default();
        Self {
            low: params.low,
            high: params.high,
        }
    }
}

fn default_target_pixels() -> usize {
    TARGET_PIXELS
}

#[derive(Debug, Deserialize)]
pub struct ScorerOutputConfig {
    #[serde(rename = "edge_image")]
    pub edge_image: PathBuf,
    #[serde(rename = "report_json")]
    pub report_json: PathBuf,
}

impl ScorerToolConfig {
    /// Collapse the tool config into pipeline parameters.
    pub fn scorer_params(&self) -> ScorerParams {
        ScorerParams {
            low: self.thresholds.low,
            high: self.thresholds.high,
            target_pixels: self.target_pixels,
        }
    }
}

pub fn load_config(path: &Path) -> Result<ScorerToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
