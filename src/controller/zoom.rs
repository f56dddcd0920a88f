//! Provides [`FovLimits`] settings and field of view clamping.

use core::f64::consts::PI;

use bevy_reflect::Reflect;

use crate::error::{DepthZoomError, Result};

/// Bound the camera's field of view, and define where the camera switches projection.
///
/// Both bounds are full vertical angles in degrees. Reaching `lower` switches the camera into an
/// orthographic projection; widening from there returns it to perspective at `lower`.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct FovLimits {
    /// The narrowest field of view, in degrees. The camera is orthographic exactly when its field
    /// of view sits at this bound.
    pub lower: f64,
    /// The widest field of view, in degrees.
    pub upper: f64,
}

impl Default for FovLimits {
    fn default() -> Self {
        Self {
            lower: 1.0,
            upper: 90.0,
        }
    }
}

impl FovLimits {
    /// Create validated limits.
    pub fn new(lower: f64, upper: f64) -> Result<Self> {
        let limits = Self { lower, upper };
        limits.validate()?;
        Ok(limits)
    }

    /// Check that `0 < lower < upper < 180`.
    pub fn validate(&self) -> Result<()> {
        let in_range = |deg: f64| deg > 0.0 && deg < 180.0;
        if in_range(self.lower) && in_range(self.upper) && self.lower < self.upper {
            Ok(())
        } else {
            Err(DepthZoomError::InvalidConfiguration {
                lower: self.lower,
                upper: self.upper,
            })
        }
    }

    /// Clamp a requested field of view into these limits. Returns a bound exactly when the request
    /// falls outside of it.
    pub fn clamp(&self, desired: f64) -> Result<f64> {
        self.validate()?;
        Ok(if desired < self.lower {
            self.lower
        } else if desired > self.upper {
            self.upper
        } else {
            desired
        })
    }

    /// Is this field of view at the lower bound, where the camera is orthographic?
    pub fn is_lower_bound(&self, fov_degrees: f64) -> bool {
        fov_degrees == self.lower
    }
}

/// Half of a full angle in degrees, in radians.
pub fn half_radian(degrees: f64) -> f64 {
    degrees * PI / 180.0 * 0.5
}
