//! The primary [`Component`] of the controller, [`DepthZoom`].

use bevy_ecs::prelude::*;
use bevy_log::prelude::*;
use bevy_math::{prelude::*, DVec3};
use bevy_reflect::prelude::*;
use bevy_render::prelude::*;
use bevy_transform::prelude::*;
use bevy_window::RequestRedraw;

use super::{
    camera::{depth_zoom, CameraState, ZoomOutcome, ZoomRequest},
    zoom::FovLimits,
};
use crate::error::{DepthZoomError, Result};

/// Marks a camera as depth zoomable, and holds its settings.
///
/// # Zooming the Camera
///
/// The [`DepthZoomInputPlugin`](crate::input::DepthZoomInputPlugin) turns vertical mouse drags
/// into zoom steps. To zoom manually, send a [`DepthZoomTrigger`] naming the camera entity, or
/// call [`DepthZoom::apply`] directly on the camera's components.
///
/// The camera is moved along its view ray so that the plane through the anchor keeps its size on
/// screen. The anchor is the point on the view ray closest to [`DepthZoom::target`].
#[derive(Debug, Clone, Reflect, Component)]
pub struct DepthZoom {
    /// Field of view limits. Narrowing to `limits.lower` switches the camera to orthographic.
    pub limits: FovLimits,
    /// World space point the camera tries to hold still, unless a trigger supplies its own.
    pub target: Vec3,
    /// Managed by the controller. The anchor of the most recently applied step, in world space.
    pub last_anchor: Option<DVec3>,
}

impl Default for DepthZoom {
    fn default() -> Self {
        Self {
            limits: FovLimits::default(),
            target: Vec3::ZERO,
            last_anchor: None,
        }
    }
}

impl DepthZoom {
    /// Create a depth zoom component with the given field of view limits.
    pub fn new(limits: FovLimits) -> Result<Self> {
        limits.validate()?;
        Ok(Self {
            limits,
            ..Default::default()
        })
    }

    /// Set the world space point to hold still while zooming.
    pub fn with_target(self, target: Vec3) -> Self {
        Self { target, ..self }
    }

    /// Run one depth zoom step on a live camera, writing the result back.
    ///
    /// Returns whether the camera was changed.
    pub fn apply(
        &mut self,
        transform: Option<&mut Transform>,
        projection: Option<&mut Projection>,
        hint_point: Option<Vec3>,
        fov: FovChange,
    ) -> Result<bool> {
        let (Some(transform), Some(projection)) = (transform, projection) else {
            return Err(DepthZoomError::MissingCameraState);
        };
        let state = CameraState::from_camera(Some(&*transform), Some(&*projection), &self.limits)?;

        let hint_point = hint_point.unwrap_or(self.target).as_dvec3();
        let request = ZoomRequest {
            hint_point,
            desired_fov_degrees: fov.resolve(state.field_of_view_degrees),
        };

        match depth_zoom(&state, &request, &self.limits)? {
            ZoomOutcome::Applied { camera, anchor } => {
                self.last_anchor = Some(anchor.anchor_point);
                camera.write_to_camera(transform, projection);
                Ok(true)
            }
            ZoomOutcome::Unchanged => Ok(false),
        }
    }

    /// Apply every [`DepthZoomTrigger`] sent since the last run.
    pub fn receive_triggers(
        mut events: EventReader<DepthZoomTrigger>,
        mut cameras: Query<(&mut DepthZoom, Option<&mut Transform>, Option<&mut Projection>)>,
        mut redraw: EventWriter<RequestRedraw>,
    ) {
        for event in events.read() {
            let Ok((mut controller, transform, projection)) = cameras.get_mut(event.camera) else {
                error!(
                    "Depth zoom on {:?}: {}",
                    event.camera,
                    DepthZoomError::MissingCameraState
                );
                continue;
            };
            match controller.apply(
                transform.map(Mut::into_inner),
                projection.map(Mut::into_inner),
                event.hint_point,
                event.fov,
            ) {
                Ok(true) => {
                    redraw.send(RequestRedraw);
                }
                Ok(false) => (),
                Err(e) => error!("Depth zoom on {:?}: {e}", event.camera),
            }
        }
    }
}

/// How a [`DepthZoomTrigger`] changes the field of view, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub enum FovChange {
    /// Zoom to this field of view.
    To(f64),
    /// Zoom by this many degrees from the current field of view.
    By(f64),
}

impl FovChange {
    /// The requested field of view, given the current one.
    pub fn resolve(self, current_fov: f64) -> f64 {
        match self {
            Self::To(fov) => fov,
            Self::By(delta) => current_fov + delta,
        }
    }
}

/// Send this event to depth zoom a camera with a [`DepthZoom`] component.
#[derive(Debug, Clone, Event)]
pub struct DepthZoomTrigger {
    /// The camera to update.
    pub camera: Entity,
    /// The point to hold still. Falls back to [`DepthZoom::target`].
    pub hint_point: Option<Vec3>,
    /// The requested field of view change.
    pub fov: FovChange,
}
