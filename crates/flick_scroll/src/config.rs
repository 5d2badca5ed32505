//! Scroll behavior configuration
//!
//! All numeric parameters of the engine live here and are supplied at
//! construction. Validation happens once, in `ScrollView::new`; after that
//! every runtime operation is infallible.

use thiserror::Error;

use crate::bounds::ScrollAxes;

/// Configuration error raised at construction time
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("elastic strength {0} is outside [0, 1]")]
    ElasticStrengthOutOfRange(f32),
    #[error("decay rate {0} must be positive")]
    NonPositiveDecayRate(f32),
    #[error("rest threshold {0} must be positive")]
    NonPositiveRestThreshold(f32),
    #[error("center duration {0} must be positive")]
    NonPositiveCenterDuration(f32),
    #[error("center deadband {0} must be non-negative")]
    NegativeCenterDeadband(f32),
}

/// Configuration for scroll behavior
#[derive(Clone, Copy, Debug)]
pub struct ScrollConfig {
    /// Which axes may scroll
    pub axes: ScrollAxes,
    /// Elastic overshoot resistance, 0.0 (none) to 1.0 (pins at the bound
    /// once overshoot saturates)
    pub elastic_strength: f32,
    /// Exponential velocity decay rate in 1/seconds
    pub decay_rate: f32,
    /// Velocity magnitude below which inertia stops, in units/second
    pub rest_threshold: f32,
    /// Scale applied to the release-frame pointer delta when estimating
    /// flick velocity
    pub flick_scale: f32,
    /// Velocity multiplier applied once per frame to an axis in overshoot
    pub overshoot_damping: f32,
    /// Tolerance radius within which focus centering takes no action
    pub center_deadband: f32,
    /// Duration of the eased centering move, in seconds
    pub center_duration: f32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            axes: ScrollAxes::BOTH,
            elastic_strength: 0.5,
            decay_rate: 5.0,
            rest_threshold: 0.01,
            flick_scale: 0.1,
            overshoot_damping: 0.3,
            center_deadband: 5.0,
            center_duration: 0.3,
        }
    }
}

impl ScrollConfig {
    /// Horizontal-only scrolling
    pub fn horizontal() -> Self {
        Self {
            axes: ScrollAxes::HORIZONTAL,
            ..Default::default()
        }
    }

    /// Vertical-only scrolling
    pub fn vertical() -> Self {
        Self {
            axes: ScrollAxes::VERTICAL,
            ..Default::default()
        }
    }

    /// Free scrolling on both axes
    pub fn free() -> Self {
        Self {
            axes: ScrollAxes::BOTH,
            ..Default::default()
        }
    }

    /// Check every parameter range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.elastic_strength) {
            return Err(ConfigError::ElasticStrengthOutOfRange(
                self.elastic_strength,
            ));
        }
        if self.decay_rate <= 0.0 {
            return Err(ConfigError::NonPositiveDecayRate(self.decay_rate));
        }
        if self.rest_threshold <= 0.0 {
            return Err(ConfigError::NonPositiveRestThreshold(self.rest_threshold));
        }
        if self.center_duration <= 0.0 {
            return Err(ConfigError::NonPositiveCenterDuration(self.center_duration));
        }
        if self.center_deadband < 0.0 {
            return Err(ConfigError::NegativeCenterDeadband(self.center_deadband));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(ScrollConfig::default().validate(), Ok(()));
        assert_eq!(ScrollConfig::horizontal().validate(), Ok(()));
    }

    #[test]
    fn test_elastic_strength_range_checked() {
        let config = ScrollConfig {
            elastic_strength: 1.5,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::ElasticStrengthOutOfRange(1.5))
        );
    }

    #[test]
    fn test_non_positive_duration_rejected() {
        let config = ScrollConfig {
            center_duration: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
