use std::time::Duration;

use crate::error::{ConfigError, Result};

/// Styling-independent parameters of the shadow bands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowConfig {
    /// Upper bound on the width of the horizontal-drag band.
    pub max_horizontal_width: f64,
    /// Brightness factor the rasterizer applies to the mirrored back face.
    pub back_face_dim: f64,
}

impl Default for ShadowConfig {
    fn default() -> Self {
        Self {
            max_horizontal_width: 30.0,
            back_face_dim: 0.7,
        }
    }
}

/// Tuning parameters of the page-curl engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurlConfig {
    /// Platform touch slop in pixels.
    pub touch_slop: f64,
    /// A drag is strong once its travel exceeds `touch_slop * strong_drag_factor`.
    pub strong_drag_factor: f64,
    /// Duration of the page-turn completion animation.
    pub turn_duration: Duration,
    /// Duration of the snap-back animation.
    pub cancel_duration: Duration,
    /// Maximum chord deviation when flattening curves for area queries.
    pub flatten_tolerance: f64,
    pub shadow: ShadowConfig,
}

impl Default for CurlConfig {
    fn default() -> Self {
        Self {
            touch_slop: 8.0,
            strong_drag_factor: 8.0,
            turn_duration: Duration::from_millis(400),
            cancel_duration: Duration::from_millis(400),
            flatten_tolerance: 0.5,
            shadow: ShadowConfig::default(),
        }
    }
}

impl CurlConfig {
    /// Sets the platform touch slop.
    #[must_use]
    pub fn with_touch_slop(mut self, touch_slop: f64) -> Self {
        self.touch_slop = touch_slop;
        self
    }

    /// Sets the strong-drag multiplier.
    #[must_use]
    pub fn with_strong_drag_factor(mut self, factor: f64) -> Self {
        self.strong_drag_factor = factor;
        self
    }

    /// Sets the page-turn duration.
    #[must_use]
    pub fn with_turn_duration(mut self, duration: Duration) -> Self {
        self.turn_duration = duration;
        self
    }

    /// Sets the snap-back duration.
    #[must_use]
    pub fn with_cancel_duration(mut self, duration: Duration) -> Self {
        self.cancel_duration = duration;
        self
    }

    /// Sets the shadow parameters.
    #[must_use]
    pub fn with_shadow(mut self, shadow: ShadowConfig) -> Self {
        self.shadow = shadow;
        self
    }

    /// Travel beyond which a released drag commits to a page turn.
    #[must_use]
    pub fn strong_drag_threshold(&self) -> f64 {
        self.touch_slop * self.strong_drag_factor
    }

    /// Checks every parameter.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NonPositive` for a non-positive or non-finite
    /// distance or factor, and `ConfigError::InvalidDuration` for a zero
    /// duration.
    pub fn validate(&self) -> Result<()> {
        positive("touch_slop", self.touch_slop)?;
        positive("strong_drag_factor", self.strong_drag_factor)?;
        positive("flatten_tolerance", self.flatten_tolerance)?;
        positive("shadow.max_horizontal_width", self.shadow.max_horizontal_width)?;
        positive("shadow.back_face_dim", self.shadow.back_face_dim)?;
        if self.turn_duration.is_zero() {
            return Err(ConfigError::InvalidDuration("turn_duration").into());
        }
        if self.cancel_duration.is_zero() {
            return Err(ConfigError::InvalidDuration("cancel_duration").into());
        }
        Ok(())
    }
}

fn positive(parameter: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { parameter, value }.into())
    }
}
