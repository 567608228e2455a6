//! Canvas configuration.
//!
//! Hosts build a `CanvasConfig` in code or load one from JSON. Every field
//! has a default, so a config file only needs the values it changes:
//!
//! ```json
//! { "default_style": { "color": "#FF0000", "width": 4 }, "density": 2.0 }
//! ```

use crate::model::{Color, MAX_STROKE_WIDTH, StrokeStyle};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Brush width range offered by host controls (slider bounds).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrushLimits {
    pub min_width: f32,
    pub max_width: f32,
}

impl Default for BrushLimits {
    fn default() -> Self {
        Self {
            min_width: 1.0,
            max_width: 50.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Live style a fresh canvas starts with.
    pub default_style: StrokeStyle,
    /// Fill painted before replaying strokes.
    pub background: Color,
    /// Physical pixels per device-independent unit.
    pub density: f32,
    pub antialias: bool,
    pub brush_limits: BrushLimits,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            default_style: StrokeStyle::default(),
            background: Color::TRANSPARENT,
            density: 1.0,
            antialias: true,
            brush_limits: BrushLimits::default(),
        }
    }
}

impl CanvasConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        log::debug!("loading canvas config from {}", path.display());
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.density.is_finite() && self.density > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "density must be positive and finite, got {}",
                self.density
            )));
        }
        let width = self.default_style.width;
        if !(width > 0.0 && width <= MAX_STROKE_WIDTH) {
            return Err(ConfigError::Invalid(format!(
                "default stroke width must be in (0, {MAX_STROKE_WIDTH}], got {width}"
            )));
        }
        let limits = &self.brush_limits;
        if !(limits.min_width > 0.0 && limits.min_width <= limits.max_width) {
            return Err(ConfigError::Invalid(format!(
                "brush limits must satisfy 0 < min <= max, got {}..{}",
                limits.min_width, limits.max_width
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_object_yields_defaults() {
        let config = CanvasConfig::from_json("{}").unwrap();
        assert_eq!(config, CanvasConfig::default());
    }

    #[test]
    fn partial_style_keeps_other_defaults() {
        let config =
            CanvasConfig::from_json(r##"{ "default_style": { "color": "#FF0000" } }"##).unwrap();
        assert_eq!(config.default_style.color, Color::from_argb(0xFFFF0000));
        assert_eq!(config.default_style.width, 10.0);
        assert_eq!(config.default_style.alpha, 255);
        assert!(config.antialias);
    }

    #[test]
    fn rejects_bad_color() {
        let err = CanvasConfig::from_json(r#"{ "background": "nope" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)), "got {err:?}");
    }

    #[test]
    fn rejects_non_positive_density() {
        let err = CanvasConfig::from_json(r#"{ "density": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)), "got {err:?}");
    }

    #[test]
    fn rejects_inverted_brush_limits() {
        let err = CanvasConfig::from_json(
            r#"{ "brush_limits": { "min_width": 20, "max_width": 5 } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)), "got {err:?}");
    }

    #[test]
    fn rejects_non_finite_values_built_in_code() {
        for density in [f32::NAN, f32::INFINITY, -2.0] {
            let config = CanvasConfig {
                density,
                ..CanvasConfig::default()
            };
            assert!(config.validate().is_err(), "density {density}");
        }

        let mut config = CanvasConfig::default();
        config.default_style.width = f32::INFINITY;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }
}
