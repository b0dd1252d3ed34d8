// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::limits::ScaleLimits;

/// Who owns the scale value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScaleMode {
    /// The controller commits scale changes itself.
    #[default]
    Uncontrolled,
    /// An external owner commits scale changes and reports them back through
    /// [`crate::ViewportController::set_controlled_scale`].
    Controlled,
}

/// Wheel-to-zoom settings.
///
/// With the `serde` feature this deserializes from either a boolean or an
/// object with optional `enabled` and `factor` fields.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "WheelSetting")
)]
pub struct WheelConfig {
    /// Whether zoom-modifier wheel events zoom.
    pub enabled: bool,
    /// Scale change per unit of vertical wheel delta.
    pub factor: f64,
}

impl WheelConfig {
    /// Default sensitivity.
    pub const DEFAULT_FACTOR: f64 = 0.05;

    /// Converts a vertical wheel delta to an additive scale step.
    ///
    /// Scrolling down (positive delta) zooms out.
    #[must_use]
    pub fn scale_step(&self, delta_y: f64) -> f64 {
        -delta_y * self.factor
    }
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            factor: Self::DEFAULT_FACTOR,
        }
    }
}

impl From<bool> for WheelConfig {
    fn from(enabled: bool) -> Self {
        Self {
            enabled,
            ..Self::default()
        }
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum WheelSetting {
    Toggle(bool),
    Options {
        #[serde(default = "default_enabled")]
        enabled: bool,
        #[serde(default = "default_factor")]
        factor: f64,
    },
}

#[cfg(feature = "serde")]
fn default_enabled() -> bool {
    true
}

#[cfg(feature = "serde")]
fn default_factor() -> f64 {
    WheelConfig::DEFAULT_FACTOR
}

#[cfg(feature = "serde")]
impl From<WheelSetting> for WheelConfig {
    fn from(setting: WheelSetting) -> Self {
        match setting {
            WheelSetting::Toggle(enabled) => enabled.into(),
            WheelSetting::Options { enabled, factor } => Self { enabled, factor },
        }
    }
}

/// Construction options for [`crate::ViewportController`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct ViewportConfig {
    /// Initial scale when the controller owns the scale.
    pub default_scale: f64,
    /// Externally owned scale. `Some` selects [`ScaleMode::Controlled`].
    pub scale: Option<f64>,
    /// Lower scale bound.
    pub min: f64,
    /// Upper scale bound.
    pub max: f64,
    /// Wheel-to-zoom settings.
    pub wheel: WheelConfig,
}

impl ViewportConfig {
    /// Scale bounds.
    #[must_use]
    pub fn limits(&self) -> ScaleLimits {
        ScaleLimits::new(self.min, self.max)
    }

    /// Ownership mode implied by `scale`.
    #[must_use]
    pub fn mode(&self) -> ScaleMode {
        if self.scale.is_some() {
            ScaleMode::Controlled
        } else {
            ScaleMode::Uncontrolled
        }
    }

    /// The clamped scale the controller starts at.
    #[must_use]
    pub fn initial_scale(&self) -> f64 {
        self.limits().clamp(self.scale.unwrap_or(self.default_scale))
    }
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            default_scale: 1.0,
            scale: None,
            min: ScaleLimits::DEFAULT_MIN,
            max: ScaleLimits::DEFAULT_MAX,
            wheel: WheelConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ScaleMode, ViewportConfig, WheelConfig};

    #[test]
    fn defaults_match_documented_values() {
        let config = ViewportConfig::default();
        assert_eq!(config.default_scale, 1.0);
        assert_eq!(config.min, 0.1);
        assert_eq!(config.max, 10.0);
        assert!(config.wheel.enabled);
        assert_eq!(config.wheel.factor, 0.05);
        assert_eq!(config.mode(), ScaleMode::Uncontrolled);
    }

    #[test]
    fn controlled_mode_follows_scale_presence() {
        let config = ViewportConfig {
            scale: Some(2.0),
            ..ViewportConfig::default()
        };
        assert_eq!(config.mode(), ScaleMode::Controlled);
        assert_eq!(config.initial_scale(), 2.0);
    }

    #[test]
    fn initial_scale_is_clamped() {
        let config = ViewportConfig {
            default_scale: 50.0,
            ..ViewportConfig::default()
        };
        assert_eq!(config.initial_scale(), 10.0);
    }

    #[test]
    fn wheel_step_sign() {
        let wheel = WheelConfig::default();
        assert!((wheel.scale_step(2.0) - -0.1).abs() < 1e-12);
        assert!((wheel.scale_step(-2.0) - 0.1).abs() < 1e-12);
        assert!(!WheelConfig::from(false).enabled);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_wheel_as_bool_or_object() {
        let config: ViewportConfig =
            serde_json::from_str(r#"{ "defaultScale": 2.0, "max": 4.0, "wheel": false }"#).unwrap();
        assert_eq!(config.default_scale, 2.0);
        assert_eq!(config.max, 4.0);
        assert_eq!(config.min, 0.1);
        assert!(!config.wheel.enabled);

        let config: ViewportConfig =
            serde_json::from_str(r#"{ "scale": 1.5, "wheel": { "factor": 0.2 } }"#).unwrap();
        assert_eq!(config.mode(), ScaleMode::Controlled);
        assert!(config.wheel.enabled);
        assert_eq!(config.wheel.factor, 0.2);
    }
}
