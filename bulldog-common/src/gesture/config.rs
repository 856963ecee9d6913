//! Configuration for the pull-to-refresh controller
//!
//! Every field has a default, so an empty TOML fragment yields the stock
//! behaviour (80 px threshold, 200 px activation band, 15 px dead-zone).

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Default pull distance needed to fire a refresh, in CSS pixels
pub const DEFAULT_THRESHOLD: f64 = 80.0;
/// Gestures must start above this vertical coordinate
pub const DEFAULT_ACTIVATION_BAND: f64 = 200.0;
/// Pull distance below which the platform keeps its default scrolling
pub const DEFAULT_ENGAGE_DEAD_ZONE: f64 = 15.0;
/// Scroll offsets up to this value count as "at top"
pub const DEFAULT_AT_TOP_TOLERANCE: f64 = 5.0;

/// How additional simultaneous touches are treated
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MultiTouchPolicy {
    /// Only the first touch point is consulted; extra fingers are ignored
    #[default]
    FirstTouch,
    /// A second finger abandons the gesture
    Cancel,
}

/// Pull-to-refresh configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PullToRefreshConfig {
    /// Minimum downward pull, in pixels, that fires the refresh action
    pub threshold: f64,
    /// When false the controller makes no subscriptions at all
    pub enabled: bool,
    /// Upper band of the viewport (y < band) where a gesture may start
    pub activation_band: f64,
    /// Pull distance after which default scrolling is suppressed
    pub engage_dead_zone: f64,
    /// Scroll offset tolerance for the "at top" test
    pub at_top_tolerance: f64,
    /// Multi-touch handling
    pub multi_touch: MultiTouchPolicy,
}

impl Default for PullToRefreshConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            enabled: true,
            activation_band: DEFAULT_ACTIVATION_BAND,
            engage_dead_zone: DEFAULT_ENGAGE_DEAD_ZONE,
            at_top_tolerance: DEFAULT_AT_TOP_TOLERANCE,
            multi_touch: MultiTouchPolicy::default(),
        }
    }
}

impl PullToRefreshConfig {
    /// Default configuration with a custom threshold
    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            threshold,
            ..Default::default()
        }
    }

    /// Default configuration that never subscribes
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }

    /// Parse and validate a TOML fragment
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !self.threshold.is_finite() || self.threshold <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "threshold must be a positive number, got {}",
                self.threshold
            )));
        }

        if !self.activation_band.is_finite() || self.activation_band <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "activation_band must be a positive number, got {}",
                self.activation_band
            )));
        }

        if !self.engage_dead_zone.is_finite() || self.engage_dead_zone < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "engage_dead_zone cannot be negative, got {}",
                self.engage_dead_zone
            )));
        }

        if self.engage_dead_zone >= self.threshold {
            return Err(Error::InvalidConfig(format!(
                "engage_dead_zone ({}) must be smaller than threshold ({})",
                self.engage_dead_zone, self.threshold
            )));
        }

        if !self.at_top_tolerance.is_finite() || self.at_top_tolerance < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "at_top_tolerance cannot be negative, got {}",
                self.at_top_tolerance
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PullToRefreshConfig::default();
        assert_eq!(config.threshold, 80.0);
        assert!(config.enabled);
        assert_eq!(config.activation_band, 200.0);
        assert_eq!(config.engage_dead_zone, 15.0);
        assert_eq!(config.at_top_tolerance, 5.0);
        assert_eq!(config.multi_touch, MultiTouchPolicy::FirstTouch);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = PullToRefreshConfig::from_toml_str("").unwrap();
        assert_eq!(config, PullToRefreshConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = PullToRefreshConfig::from_toml_str(
            r#"
            threshold = 120.0
            multi_touch = "cancel"
            "#,
        )
        .unwrap();

        assert_eq!(config.threshold, 120.0);
        assert_eq!(config.multi_touch, MultiTouchPolicy::Cancel);
        assert_eq!(config.activation_band, DEFAULT_ACTIVATION_BAND);
    }

    #[test]
    fn test_toml_rejects_invalid_values() {
        let err = PullToRefreshConfig::from_toml_str("threshold = -10.0").unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));

        let err = PullToRefreshConfig::from_toml_str("multi_touch = \"pinch\"").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn test_validation() {
        assert!(PullToRefreshConfig::with_threshold(0.0).validate().is_err());
        assert!(PullToRefreshConfig::with_threshold(f64::NAN).validate().is_err());
        assert!(PullToRefreshConfig::with_threshold(f64::INFINITY).validate().is_err());

        // dead-zone must stay below the threshold
        assert!(PullToRefreshConfig::with_threshold(15.0).validate().is_err());
        assert!(PullToRefreshConfig::with_threshold(16.0).validate().is_ok());

        let config = PullToRefreshConfig {
            at_top_tolerance: -1.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = PullToRefreshConfig {
            activation_band: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_json_embedding() {
        let config = PullToRefreshConfig::disabled();
        let json = serde_json::to_string(&config).unwrap();
        let restored: PullToRefreshConfig = serde_json::from_str(&json).unwrap();
        assert!(!restored.enabled);
        assert_eq!(restored.threshold, DEFAULT_THRESHOLD);
    }
}
