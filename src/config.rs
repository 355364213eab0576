//! Configuration loading for MargaNav

use crate::error::{NavError, Result};
use serde::Deserialize;
use std::path::Path;

/// Main configuration structure
#[derive(Clone, Debug, Default, Deserialize)]
pub struct NavConfig {
    #[serde(default)]
    pub tracking: TrackingConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

/// Live tracking parameters
#[derive(Clone, Debug, Deserialize)]
pub struct TrackingConfig {
    /// Step arrival radius in planar degrees (default: 0.0005, roughly 50m
    /// at mid latitudes). Latitude dependent: raise it toward the poles or
    /// swap the arrival check for a geodesic one if precision matters.
    #[serde(default = "default_proximity_threshold_deg")]
    pub proximity_threshold_deg: f64,

    /// Fixes reporting a worse accuracy than this are dropped (meters, default: 100)
    #[serde(default = "default_max_fix_accuracy_m")]
    pub max_fix_accuracy_m: f64,

    /// Recenter the map on every accepted fix (default: true)
    #[serde(default = "default_follow_fixes")]
    pub follow_fixes: bool,
}

/// Route drawing parameters
#[derive(Clone, Debug, Deserialize)]
pub struct RenderConfig {
    /// Stroke weight for candidate routes (default: 4)
    #[serde(default = "default_candidate_weight")]
    pub candidate_weight: u32,

    /// Stroke weight for the selected route (default: 5)
    #[serde(default = "default_selected_weight")]
    pub selected_weight: u32,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            proximity_threshold_deg: default_proximity_threshold_deg(),
            max_fix_accuracy_m: default_max_fix_accuracy_m(),
            follow_fixes: default_follow_fixes(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            candidate_weight: default_candidate_weight(),
            selected_weight: default_selected_weight(),
        }
    }
}

// Default value functions
fn default_proximity_threshold_deg() -> f64 {
    0.0005
}
fn default_max_fix_accuracy_m() -> f64 {
    100.0
}
fn default_follow_fixes() -> bool {
    true
}
fn default_candidate_weight() -> u32 {
    4
}
fn default_selected_weight() -> u32 {
    5
}

impl NavConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| NavError::Config(format!("Failed to read config file: {}", e)))?;
        let config: NavConfig = toml::from_str(&content)?;
        Ok(config)
    }
}
