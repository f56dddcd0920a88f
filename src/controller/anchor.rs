//! Resolves the anchor: the point on the camera's view ray whose apparent size is held constant.

use bevy_math::DVec3;

use super::geometry::Segment;
use crate::error::Result;

/// The anchor point on the view ray, and its distance from the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorResult {
    /// The point on the view ray closest to the hint.
    pub anchor_point: DVec3,
    /// Distance from the start of the view ray (the camera) to `anchor_point`.
    pub anchor_distance: f64,
}

impl AnchorResult {
    /// Find the point on the view ray from `ray_start` to `ray_end` that is closest to `hint`.
    ///
    /// The hint is only a rough intent signal, it need not lie on the ray. The anchor is always
    /// between the camera and the ray's far point, hints behind the camera or past the far point
    /// resolve to the nearest end of the ray.
    pub fn resolve(hint: DVec3, ray_start: DVec3, ray_end: DVec3) -> Result<Self> {
        let ray = Segment::new(ray_start, ray_end)?;
        Ok(Self::on_segment(hint, &ray))
    }

    pub(crate) fn on_segment(hint: DVec3, ray: &Segment) -> Self {
        let anchor_point = ray.closest_point(hint);
        Self {
            anchor_point,
            anchor_distance: anchor_point.distance(ray.start()),
        }
    }
}
