//! The depth zoom controller, and the [`DepthZoomPlugin`] that drives it.
//!
//! The math lives in plain functions over [`camera::CameraState`] snapshots, so it can be used
//! without an ECS world. [`component::DepthZoom`] reads and writes live cameras.

use bevy_app::prelude::*;
use bevy_ecs::prelude::*;
use bevy_transform::TransformSystem;
use bevy_window::RequestRedraw;

pub mod anchor;
pub mod camera;
pub mod component;
pub mod distance;
pub mod geometry;
pub mod projections;
pub mod zoom;

/// Adds the depth zoom controller without any input handling. Send
/// [`DepthZoomTrigger`](component::DepthZoomTrigger) events to zoom.
pub struct DepthZoomPlugin;

impl Plugin for DepthZoomPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<component::DepthZoomTrigger>()
            .add_event::<RequestRedraw>()
            .add_systems(
                PostUpdate,
                component::DepthZoom::receive_triggers
                    .before(TransformSystem::TransformPropagate),
            )
            .register_type::<component::DepthZoom>()
            .register_type::<zoom::FovLimits>();
    }
}
