//! Camera snapshots, and the depth zoom step that turns one snapshot into the next.

use bevy_log::prelude::*;
use bevy_math::DVec3;
use bevy_reflect::Reflect;
use bevy_render::camera::{OrthographicProjection, PerspectiveProjection, Projection, ScalingMode};
use bevy_transform::components::Transform;

use super::{
    anchor::AnchorResult,
    distance::{
        distance_by_angle_change, distance_from_height, dolly_position, height_from_distance,
    },
    geometry::Segment,
    projections::{ProjectionMode, ZoomPath},
    zoom::{half_radian, FovLimits},
};
use crate::error::{DepthZoomError, Result};

/// Orthographic scale assumed for a perspective camera that has never been orthographic.
pub const DEFAULT_ORTHOGRAPHIC_SCALE: f64 = 1.0;

/// An immutable snapshot of everything a depth zoom step reads from, and writes to, a camera.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct CameraState {
    /// Camera position.
    pub position: DVec3,
    /// A point far along the camera's forward direction. Together with `position` this is the
    /// view ray. Must not equal `position`.
    pub ray_far_point: DVec3,
    /// Full vertical field of view, in degrees.
    pub field_of_view_degrees: f64,
    /// Is the camera using an orthographic projection? True exactly when the field of view is at
    /// the lower limit.
    pub is_orthographic: bool,
    /// Half of the vertical extent of the view, in world units, used while orthographic.
    pub orthographic_scale: f64,
}

impl CameraState {
    /// The camera's current projection mode.
    pub fn mode(&self) -> ProjectionMode {
        ProjectionMode::from_orthographic(self.is_orthographic)
    }

    /// The segment from the camera to its ray far point.
    pub fn view_ray(&self) -> Result<Segment> {
        Segment::new(self.position, self.ray_far_point)
    }

    /// Read a snapshot from a live camera.
    ///
    /// The view ray runs from the camera to its far clipping plane. An orthographic camera is
    /// reported at `limits.lower`, since the projection itself has no angle.
    pub fn from_camera(
        transform: Option<&Transform>,
        projection: Option<&Projection>,
        limits: &FovLimits,
    ) -> Result<Self> {
        let (Some(transform), Some(projection)) = (transform, projection) else {
            return Err(DepthZoomError::MissingCameraState);
        };
        let position = transform.translation.as_dvec3();
        let forward = transform.forward().as_dvec3();

        let state = match projection {
            Projection::Perspective(perspective) => Self {
                position,
                ray_far_point: position + forward * perspective.far as f64,
                field_of_view_degrees: (perspective.fov as f64).to_degrees(),
                is_orthographic: false,
                orthographic_scale: DEFAULT_ORTHOGRAPHIC_SCALE,
            },
            Projection::Orthographic(ortho) => {
                let half_height = match ortho.scaling_mode {
                    ScalingMode::FixedVertical { viewport_height } => {
                        viewport_height * ortho.scale / 2.0
                    }
                    _ => {
                        warn_once!(
                            "Depth zoom only tracks ScalingMode::FixedVertical, falling back to \
                            the last computed orthographic area"
                        );
                        ortho.area.height() / 2.0
                    }
                };
                Self {
                    position,
                    ray_far_point: position + forward * ortho.far as f64,
                    field_of_view_degrees: limits.lower,
                    is_orthographic: true,
                    orthographic_scale: half_height as f64,
                }
            }
        };
        Ok(state)
    }

    /// Write this snapshot back into a live camera.
    ///
    /// Only the translation is touched on the transform. Clipping planes carry over when the
    /// projection mode doesn't change.
    ///
    /// An orthographic snapshot without a positive scale has no view, and is not written.
    pub fn write_to_camera(&self, transform: &mut Transform, projection: &mut Projection) {
        if self.is_orthographic
            && !(self.orthographic_scale.is_finite() && self.orthographic_scale > 0.0)
        {
            warn!(
                "Not writing an orthographic camera with scale {}",
                self.orthographic_scale
            );
            return;
        }
        transform.translation = self.position.as_vec3();

        let fov = self.field_of_view_degrees.to_radians() as f32;
        let scaling_mode = ScalingMode::FixedVertical {
            viewport_height: (self.orthographic_scale * 2.0) as f32,
        };

        let next = match (&*projection, self.is_orthographic) {
            (Projection::Perspective(perspective), false) => {
                Projection::Perspective(PerspectiveProjection {
                    fov,
                    ..perspective.clone()
                })
            }
            (Projection::Orthographic(ortho), false) => {
                Projection::Perspective(PerspectiveProjection {
                    fov,
                    far: ortho.far,
                    ..Default::default()
                })
            }
            (Projection::Orthographic(ortho), true) => {
                Projection::Orthographic(OrthographicProjection {
                    scaling_mode,
                    scale: 1.0,
                    ..ortho.clone()
                })
            }
            (Projection::Perspective(perspective), true) => {
                Projection::Orthographic(OrthographicProjection {
                    scaling_mode,
                    far: perspective.far,
                    ..OrthographicProjection::default_3d()
                })
            }
        };
        *projection = next;
    }
}

/// A request to change the field of view while keeping a point visually fixed.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct ZoomRequest {
    /// Approximate point to hold still. The anchor is the closest point to this on the view ray.
    pub hint_point: DVec3,
    /// Requested full field of view, in degrees. Clamped to the limits.
    pub desired_fov_degrees: f64,
}

/// The result of a depth zoom step.
#[derive(Debug, Clone, Copy, PartialEq)]
#[must_use = "an applied depth zoom must be written back to the camera"]
pub enum ZoomOutcome {
    /// The camera should be replaced with this state.
    Applied {
        /// The new camera state.
        camera: CameraState,
        /// The anchor the step held still, resolved on the view ray before the move.
        anchor: AnchorResult,
    },
    /// The camera should be left as is.
    Unchanged,
}

impl ZoomOutcome {
    /// The new camera state, if the step changed anything.
    pub fn applied(self) -> Option<CameraState> {
        match self {
            Self::Applied { camera, .. } => Some(camera),
            Self::Unchanged => None,
        }
    }

    /// Did the step produce a new camera state?
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

/// Change the camera's field of view while moving it along its view ray, so the plane through the
/// anchor keeps the same apparent size.
///
/// Reaching `limits.lower` switches the camera to orthographic, with a scale matching the size of
/// the anchor plane. From orthographic, a widening request only returns the camera to perspective
/// at `limits.lower`; continuing to widen takes another step.
pub fn depth_zoom(
    camera: &CameraState,
    request: &ZoomRequest,
    limits: &FovLimits,
) -> Result<ZoomOutcome> {
    if !(request.desired_fov_degrees.is_finite() && request.hint_point.is_finite()) {
        return Err(DepthZoomError::NonFiniteRequest {
            desired_fov_degrees: request.desired_fov_degrees,
            hint_point: request.hint_point,
        });
    }
    let clamped_fov = limits.clamp(request.desired_fov_degrees)?;
    let ray = camera.view_ray()?;
    let anchor = AnchorResult::on_segment(request.hint_point, &ray);
    let anchor_distance = anchor.anchor_distance;

    let camera_move = clamped_fov - camera.field_of_view_degrees;

    let next = match camera.mode().select_path(camera_move) {
        ZoomPath::Dolly => {
            let new_half_angle = half_radian(clamped_fov);
            let new_distance = distance_by_angle_change(
                half_radian(camera.field_of_view_degrees),
                new_half_angle,
                anchor_distance,
            );
            let is_orthographic = limits.is_lower_bound(clamped_fov);
            let orthographic_scale = height_from_distance(new_half_angle, new_distance);
            if is_orthographic {
                if !(orthographic_scale > 0.0) {
                    warn!(
                        "Refusing to enter orthographic projection with an empty view, the \
                        anchor is at the camera"
                    );
                    return Ok(ZoomOutcome::Unchanged);
                }
                debug!("Entering orthographic projection, scale {orthographic_scale}");
            }
            camera.moved_to(
                dolly_position(&ray, anchor_distance, new_distance),
                clamped_fov,
                is_orthographic,
                orthographic_scale,
            )
        }
        ZoomPath::LeaveOrthographic => {
            let new_distance =
                distance_from_height(half_radian(limits.lower), camera.orthographic_scale);
            debug!("Leaving orthographic projection at {}°", limits.lower);
            camera.moved_to(
                dolly_position(&ray, anchor_distance, new_distance),
                limits.lower,
                false,
                camera.orthographic_scale,
            )
        }
        ZoomPath::Hold => return Ok(ZoomOutcome::Unchanged),
    };

    trace!(
        "Depth zoom to {}° at {:?}",
        next.field_of_view_degrees,
        next.position
    );
    Ok(ZoomOutcome::Applied {
        camera: next,
        anchor,
    })
}

impl CameraState {
    /// This state, translated to `position` with the far point following along.
    fn moved_to(
        &self,
        position: DVec3,
        field_of_view_degrees: f64,
        is_orthographic: bool,
        orthographic_scale: f64,
    ) -> Self {
        Self {
            position,
            ray_far_point: self.ray_far_point + (position - self.position),
            field_of_view_degrees,
            is_orthographic,
            orthographic_scale,
        }
    }
}
