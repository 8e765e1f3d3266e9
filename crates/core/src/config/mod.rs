use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{render::Color, Result};

/// Attribution drawn under the digital readout.
pub const DEFAULT_CAPTION: &str = "Created by: Ángel Quiroz <LexDev>";

/// Top-level configuration structure for the clock.
///
/// Geometry (proportions, hand lengths, label radii) is fixed; only the
/// values a host may reasonably need to swap out live here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    pub background: Color,
    pub font: FontConfig,
    pub caption: String,
    /// Delay between scheduled frames.
    pub frame_interval_ms: u64,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            background: Color::BACKGROUND,
            font: FontConfig::default(),
            caption: DEFAULT_CAPTION.to_string(),
            frame_interval_ms: 1000 / 60,
        }
    }
}

impl ClockConfig {
    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Reads a JSON configuration file. Missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&raw)?;
        tracing::debug!(path = %path.display(), "loaded clock configuration");
        Ok(config)
    }
}

/// Font family used for every label, with a family to fall back on when
/// the host cannot provide the preferred one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub family: String,
    pub fallback: String,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: "Helvetica".to_string(),
            fallback: "sans-serif".to_string(),
        }
    }
}

impl FontConfig {
    /// Picks the preferred family if `available` accepts it, else the fallback.
    pub fn resolve(&self, available: impl Fn(&str) -> bool) -> &str {
        if available(&self.family) {
            &self.family
        } else {
            tracing::warn!(
                family = %self.family,
                fallback = %self.fallback,
                "font family unavailable, using fallback"
            );
            &self.fallback
        }
    }
}
