//! Configuration for navigator timing and gesture tuning
//!
//! A navigator receives its defaults from a [`NavigatorConfig`] at
//! construction. Presets are available through [`NavigationProfile`], and a
//! config can be loaded from JSON with [`NavigatorConfig::from_json`].

use crate::animation::interpolation::EasingFunction;
use crate::core::constants::{
    DEFAULT_DURATION_MS, DEFAULT_FLY_TO_DURATION_MS, FLING_MIN_VELOCITY, FLING_VELOCITY_DIVISOR,
    FRAME_MS,
};
use crate::{MapError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub enum NavigationProfile {
    Balanced,
    /// Every call without an explicit duration applies immediately
    Instant,
    Smooth,
    Custom(NavigatorConfig),
}

impl NavigationProfile {
    pub fn resolve(&self) -> NavigatorConfig {
        match self {
            Self::Balanced => NavigatorConfig {
                default_duration_ms: DEFAULT_DURATION_MS,
                default_easing: EasingFunction::EaseOutCubic,
                fly_to_duration_ms: DEFAULT_FLY_TO_DURATION_MS,
                fling: FlingConfig::default(),
            },
            Self::Instant => NavigatorConfig {
                default_duration_ms: 0,
                default_easing: EasingFunction::Linear,
                fly_to_duration_ms: 0,
                fling: FlingConfig::default(),
            },
            Self::Smooth => NavigatorConfig {
                default_duration_ms: 500,
                default_easing: EasingFunction::EaseInOutSine,
                fly_to_duration_ms: 3000,
                fling: FlingConfig {
                    easing: EasingFunction::EaseOutQuad,
                    ..FlingConfig::default()
                },
            },
            Self::Custom(config) => config.clone(),
        }
    }
}

impl Default for NavigationProfile {
    fn default() -> Self {
        Self::Balanced
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigatorConfig {
    pub default_duration_ms: u64,
    pub default_easing: EasingFunction,
    pub fly_to_duration_ms: u64,
    pub fling: FlingConfig,
}

impl NavigatorConfig {
    /// Parses and validates a JSON config; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: NavigatorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        self.fling.validate()
    }

    pub fn default_duration(&self) -> Duration {
        Duration::from_millis(self.default_duration_ms)
    }

    pub fn fly_to_duration(&self) -> Duration {
        Duration::from_millis(self.fly_to_duration_ms)
    }
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        NavigationProfile::default().resolve()
    }
}

/// Momentum gesture tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlingConfig {
    /// Velocity magnitude (pixels per second) below which a fling is ignored
    pub min_velocity: f64,
    /// Animation milliseconds per unit of velocity magnitude is `1 / velocity_divisor`
    pub velocity_divisor: f64,
    /// Simulated frame length used to integrate the decaying velocity
    pub frame_ms: u64,
    pub easing: EasingFunction,
}

impl FlingConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.min_velocity.is_finite() || self.min_velocity < 0.0 {
            return Err(MapError::InvalidConfig(format!(
                "fling.min_velocity must be a finite, non-negative number, got {}",
                self.min_velocity
            )));
        }
        if !self.velocity_divisor.is_finite() || self.velocity_divisor <= 0.0 {
            return Err(MapError::InvalidConfig(format!(
                "fling.velocity_divisor must be positive, got {}",
                self.velocity_divisor
            )));
        }
        if self.frame_ms == 0 {
            return Err(MapError::InvalidConfig(
                "fling.frame_ms must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn frame(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }
}

impl Default for FlingConfig {
    fn default() -> Self {
        Self {
            min_velocity: FLING_MIN_VELOCITY,
            velocity_divisor: FLING_VELOCITY_DIVISOR,
            frame_ms: FRAME_MS,
            easing: EasingFunction::EaseInSine,
        }
    }
}
