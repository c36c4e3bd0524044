use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::animation::LogAccelerate;

// ============================================================
// Errors
// ============================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid reveal config json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported reveal config version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
    #[error("invalid value for `{field}`: {value}")]
    InvalidValue { field: &'static str, value: f32 },
}

// ============================================================
// Serializable config types
// ============================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RevealConfig {
    pub version: u32,
    /// Corner radius of the background pill, in pixels.
    #[serde(default = "default_pill_radius")]
    pub pill_radius: f32,
    #[serde(default = "default_duration_ms")]
    pub open_duration_ms: u64,
    /// Duration of a close from fully open. Interrupted opens close proportionally faster.
    #[serde(default = "default_duration_ms")]
    pub close_duration_ms: u64,
    #[serde(default)]
    pub close_curve: LogAccelerateConfig,
    /// Right-to-left layout: the icon sits at the right end of the pill.
    #[serde(default)]
    pub rtl: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogAccelerateConfig {
    pub base: f32,
    pub drift: f32,
}

fn default_pill_radius() -> f32 {
    8.0
}

fn default_duration_ms() -> u64 {
    300
}

impl Default for LogAccelerateConfig {
    fn default() -> Self {
        Self {
            base: LogAccelerate::CLOSE_BASE,
            drift: LogAccelerate::CLOSE_DRIFT,
        }
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            pill_radius: default_pill_radius(),
            open_duration_ms: default_duration_ms(),
            close_duration_ms: default_duration_ms(),
            close_curve: LogAccelerateConfig::default(),
            rtl: false,
        }
    }
}

// ============================================================
// Conversions: config types → runtime types
// ============================================================

impl From<&LogAccelerateConfig> for LogAccelerate {
    fn from(c: &LogAccelerateConfig) -> Self {
        LogAccelerate::new(c.base, c.drift)
    }
}

impl From<&LogAccelerate> for LogAccelerateConfig {
    fn from(curve: &LogAccelerate) -> Self {
        Self {
            base: curve.base(),
            drift: curve.drift(),
        }
    }
}

// ============================================================
// RevealConfig: top-level config
// ============================================================

impl RevealConfig {
    pub const CURRENT_VERSION: u32 = 1;

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse and validate a config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version != Self::CURRENT_VERSION {
            return Err(ConfigError::UnsupportedVersion {
                found: self.version,
                expected: Self::CURRENT_VERSION,
            });
        }
        if !self.pill_radius.is_finite() || self.pill_radius < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "pill_radius",
                value: self.pill_radius,
            });
        }
        // base <= 1 makes the normalizing log zero or negative.
        if !self.close_curve.base.is_finite() || self.close_curve.base <= 1.0 {
            return Err(ConfigError::InvalidValue {
                field: "close_curve.base",
                value: self.close_curve.base,
            });
        }
        if !LogAccelerate::is_well_formed(self.close_curve.base, self.close_curve.drift) {
            return Err(ConfigError::InvalidValue {
                field: "close_curve.drift",
                value: self.close_curve.drift,
            });
        }
        Ok(())
    }

    pub fn open_duration(&self) -> Duration {
        Duration::from_millis(self.open_duration_ms)
    }

    pub fn close_duration(&self) -> Duration {
        Duration::from_millis(self.close_duration_ms)
    }

    pub fn close_curve(&self) -> LogAccelerate {
        LogAccelerate::from(&self.close_curve)
    }
}
