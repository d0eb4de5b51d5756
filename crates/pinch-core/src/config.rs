#![forbid(unsafe_code)]

//! Thresholds read by the tracker.

use thiserror::Error;

/// Rejected configuration values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be finite, got {value}")]
    NonFiniteMinimum { field: &'static str, value: f64 },

    #[error("begin_distance must be finite and non-negative, got {0}")]
    NegativeBeginDistance(f64),
}

/// Thresholds for pinch classification.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PinchConfig {
    /// Linear scale (coordinate units) a gesture must reach by the time the
    /// touches lift, or it is reported as cancelled (default: 0.0).
    pub minimum_linear_scale: f64,
    /// Geometric scale (ratio) a gesture must reach by the time the touches
    /// lift, or it is reported as cancelled (default: 1.0).
    pub minimum_geometric_scale: f64,
    /// Separation change from touch-down that must be exceeded before a
    /// self-driven tracker reports `Began` (default: 0.0). Ignored when the
    /// host supplies its own phase signal.
    pub begin_distance: f64,
}

impl Default for PinchConfig {
    fn default() -> Self {
        Self {
            minimum_linear_scale: 0.0,
            minimum_geometric_scale: 1.0,
            begin_distance: 0.0,
        }
    }
}

impl PinchConfig {
    /// Check every field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_minimum("minimum_linear_scale", self.minimum_linear_scale)?;
        check_minimum("minimum_geometric_scale", self.minimum_geometric_scale)?;
        if !self.begin_distance.is_finite() || self.begin_distance < 0.0 {
            return Err(ConfigError::NegativeBeginDistance(self.begin_distance));
        }
        Ok(())
    }

    /// Builder-style setter for the linear minimum.
    #[must_use]
    pub fn with_minimum_linear_scale(mut self, value: f64) -> Self {
        self.minimum_linear_scale = value;
        self
    }

    /// Builder-style setter for the geometric minimum.
    #[must_use]
    pub fn with_minimum_geometric_scale(mut self, value: f64) -> Self {
        self.minimum_geometric_scale = value;
        self
    }

    #[must_use]
    pub fn with_begin_distance(mut self, value: f64) -> Self {
        self.begin_distance = value;
        self
    }
}

pub(crate) fn check_minimum(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFiniteMinimum { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = PinchConfig::default();
        assert_eq!(c.minimum_linear_scale, 0.0);
        assert_eq!(c.minimum_geometric_scale, 1.0);
        assert_eq!(c.begin_distance, 0.0);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn negative_minimums_are_allowed() {
        let c = PinchConfig::default().with_minimum_linear_scale(-5.0);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn nan_minimum_rejected() {
        let c = PinchConfig::default().with_minimum_geometric_scale(f64::NAN);
        match c.validate() {
            Err(ConfigError::NonFiniteMinimum { field, .. }) => {
                assert_eq!(field, "minimum_geometric_scale");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn infinite_minimum_rejected() {
        let c = PinchConfig::default().with_minimum_linear_scale(f64::INFINITY);
        assert!(matches!(
            c.validate(),
            Err(ConfigError::NonFiniteMinimum {
                field: "minimum_linear_scale",
                ..
            })
        ));
    }

    #[test]
    fn negative_begin_distance_rejected() {
        let c = PinchConfig::default().with_begin_distance(-1.0);
        assert_eq!(c.validate(), Err(ConfigError::NegativeBeginDistance(-1.0)));
    }

    #[test]
    fn error_messages() {
        let e = ConfigError::NegativeBeginDistance(-2.0);
        assert_eq!(
            e.to_string(),
            "begin_distance must be finite and non-negative, got -2"
        );
    }
}
