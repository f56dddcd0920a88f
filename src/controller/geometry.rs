//! Line segment helpers used to locate the anchor on the camera's view ray.

use bevy_math::DVec3;

use crate::error::{DepthZoomError, Result};

/// A finite, non-degenerate line segment from `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    start: DVec3,
    end: DVec3,
}

impl Segment {
    /// Build a segment, failing if `start` and `end` coincide.
    pub fn new(start: DVec3, end: DVec3) -> Result<Self> {
        let length_squared = (end - start).length_squared();
        if !(length_squared > 0.0 && length_squared.is_finite()) {
            return Err(DepthZoomError::DegenerateRay);
        }
        Ok(Self { start, end })
    }

    /// The start of the segment.
    pub fn start(&self) -> DVec3 {
        self.start
    }

    /// The end of the segment.
    pub fn end(&self) -> DVec3 {
        self.end
    }

    /// The unnormalized vector from `start` to `end`.
    pub fn delta(&self) -> DVec3 {
        self.end - self.start
    }

    /// Unit vector pointing from `start` to `end`.
    pub fn direction(&self) -> DVec3 {
        self.delta().normalize()
    }

    /// Linearly interpolate along the segment; `t = 0` is `start`, `t = 1` is `end`.
    pub fn point_at(&self, t: f64) -> DVec3 {
        self.start.lerp(self.end, t)
    }

    /// Parameter of the point on the segment closest to `point`, always in `[0, 1]`.
    pub fn closest_parameter(&self, point: DVec3) -> f64 {
        let ab = self.delta();
        let t = (point - self.start).dot(ab) / ab.dot(ab);
        t.clamp(0.0, 1.0)
    }

    /// The point on the segment closest to `point`.
    pub fn closest_point(&self, point: DVec3) -> DVec3 {
        self.point_at(self.closest_parameter(point))
    }
}
