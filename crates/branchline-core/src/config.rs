use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::GraphError;

pub const DEFAULT_POINT_SIZE: f64 = 28.0;
pub const DEFAULT_COLUMN_SPACING: f64 = 30.0;
pub const DEFAULT_TOP_MARGIN: f64 = 10.0;
pub const DEFAULT_CORNER_RADIUS: f64 = 20.0;
pub const DEFAULT_BRANCH_RUN: f64 = 25.0;
pub const DEFAULT_TRUNK_COLOR: &str = "#266BFF";
pub const DEFAULT_BRANCH_COLOR: &str = "#E89D42";

/// Canvas geometry and palette a visualization is built with.
///
/// Only `width`, `height` and `stroke_width` are required; everything else
/// falls back to the stock curriculum look.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    pub width: f64,
    pub height: f64,
    pub stroke_width: f64,
    #[serde(default = "default_point_size")]
    pub point_size: f64,
    #[serde(default = "default_column_spacing")]
    pub column_spacing: f64,
    #[serde(default = "default_top_margin")]
    pub top_margin: f64,
    #[serde(default = "default_corner_radius")]
    pub corner_radius: f64,
    #[serde(default = "default_branch_run")]
    pub branch_run: f64,
    #[serde(default = "default_trunk_color")]
    pub trunk_color: String,
    #[serde(default = "default_branch_color")]
    pub branch_color: String,
}

impl GraphConfig {
    /// Build a config with the given canvas and default styling.
    #[must_use]
    pub fn new(width: f64, height: f64, stroke_width: f64) -> Self {
        Self {
            width,
            height,
            stroke_width,
            point_size: default_point_size(),
            column_spacing: default_column_spacing(),
            top_margin: default_top_margin(),
            corner_radius: default_corner_radius(),
            branch_run: default_branch_run(),
            trunk_color: default_trunk_color(),
            branch_color: default_branch_color(),
        }
    }

    /// Check that every geometry value is usable.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidConfig`] naming the first field that is
    /// non-finite, or non-positive where a positive value is required.
    pub fn validate(&self) -> Result<(), GraphError> {
        let positive = [
            ("width", self.width),
            ("height", self.height),
            ("stroke_width", self.stroke_width),
            ("point_size", self.point_size),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(GraphError::InvalidConfig {
                    field,
                    reason: format!("must be a finite number > 0, got {value}"),
                });
            }
        }

        let non_negative = [
            ("column_spacing", self.column_spacing),
            ("top_margin", self.top_margin),
            ("corner_radius", self.corner_radius),
            ("branch_run", self.branch_run),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(GraphError::InvalidConfig {
                    field,
                    reason: format!("must be a finite number >= 0, got {value}"),
                });
            }
        }

        Ok(())
    }

    /// Parse and validate a TOML document.
    ///
    /// # Errors
    ///
    /// Fails if the document is not valid TOML for this shape, or if
    /// [`GraphConfig::validate`] rejects it.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config = toml::from_str::<Self>(content).context("Failed to parse graph config")?;
        config.validate()?;
        Ok(config)
    }
}

/// Read a graph config from a TOML file.
///
/// # Errors
///
/// Fails if the file cannot be read, does not parse, or does not validate.
pub fn load_config(path: &Path) -> Result<GraphConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    GraphConfig::from_toml_str(&content)
        .with_context(|| format!("Failed to load {}", path.display()))
}

const fn default_point_size() -> f64 {
    DEFAULT_POINT_SIZE
}

const fn default_column_spacing() -> f64 {
    DEFAULT_COLUMN_SPACING
}

const fn default_top_margin() -> f64 {
    DEFAULT_TOP_MARGIN
}

const fn default_corner_radius() -> f64 {
    DEFAULT_CORNER_RADIUS
}

const fn default_branch_run() -> f64 {
    DEFAULT_BRANCH_RUN
}

fn default_trunk_color() -> String {
    DEFAULT_TRUNK_COLOR.to_string()
}

fn default_branch_color() -> String {
    DEFAULT_BRANCH_COLOR.to_string()
}
